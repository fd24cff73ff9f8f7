//! Collaborator traits (ports)

pub mod transport;
pub mod session_store;

pub use transport::{HttpTransport, TransportError};
pub use session_store::SessionStore;

#[cfg(test)]
pub use transport::MockHttpTransport;
#[cfg(test)]
pub use session_store::MockSessionStore;
