//! # Nav Infrastructure
//! 
//! Transport and session store implementations (adapters).

pub mod http;
pub mod session;

pub use http::{build_client, ReqwestTransport};
pub use session::MemorySessionStore;
