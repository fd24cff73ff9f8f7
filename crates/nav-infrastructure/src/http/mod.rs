//! HTTP module (reqwest adapters)

pub mod client;
pub mod reqwest_transport;

pub use client::build_client;
pub use reqwest_transport::ReqwestTransport;
