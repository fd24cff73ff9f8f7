//! Navigation errors

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NavError {
    #[error("Unknown alias: {0}")]
    UnknownAlias(String),

    #[error("Alias already registered: {0}")]
    DuplicateAlias(String),

    #[error("Route name already exists: {0}")]
    DuplicateRouteName(String),

    #[error("Menu id already exists: {0}")]
    DuplicateRouteId(u64),

    #[error("Route not found: {0}")]
    RouteNotFound(String),

    #[error("Transport error {code}: {message}")]
    Transport { code: i32, message: String },

    #[error("Invalid menu payload: {0}")]
    InvalidPayload(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl NavError {
    /// Configuration defects that must halt bootstrap instead of being
    /// turned into a fallback view.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, NavError::RouteNotFound(_) | NavError::Transport { .. })
    }
}

pub type Result<T> = std::result::Result<T, NavError>;
