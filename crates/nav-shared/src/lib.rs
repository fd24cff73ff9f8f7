//! # Nav Shared
//! 
//! Shared configuration, telemetry, result envelope, and path helpers for the
//! navigation workspace.

pub mod constants;
pub mod types;
pub mod utils;
pub mod telemetry;
pub mod config;
pub mod error;

pub use types::*;
pub use error::AppError;
