//! HTTP transport trait (port)

use async_trait::async_trait;
use nav_shared::constants::{CODE_INTERNAL_ERROR, DEFAULT_FAILURE_MESSAGE};
use nav_shared::ApiResult;
use serde_json::Value;
use thiserror::Error;

use crate::error::NavError;

/// Failure reported by the transport. Either part may be missing when the
/// request never produced a structured response.
#[derive(Error, Debug, Clone, PartialEq, Eq, Default)]
#[error("transport failure (status: {status:?}, message: {message:?})")]
pub struct TransportError {
    pub status: Option<u16>,
    pub message: Option<String>,
}

impl TransportError {
    pub fn new(status: Option<u16>, message: Option<String>) -> Self {
        Self { status, message }
    }

    /// No response at all, e.g. connection refused.
    pub fn unreachable() -> Self {
        Self::default()
    }

    /// Failure code. Never a 2xx: an error that carries a success status
    /// still reports as an internal error.
    pub fn code(&self) -> i32 {
        match self.status {
            Some(status) if !(200..300).contains(&status) => i32::from(status),
            _ => CODE_INTERNAL_ERROR,
        }
    }

    /// Fold into the uniform result shape, filling in the defaults.
    pub fn into_result<T>(self, fallback_message: &str) -> ApiResult<T> {
        let code = self.code();
        let message = self
            .message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| fallback_message.to_string());
        ApiResult::fail(code, message)
    }
}

impl From<TransportError> for NavError {
    fn from(err: TransportError) -> Self {
        let result: ApiResult<()> = err.into_result(DEFAULT_FAILURE_MESSAGE);
        NavError::Transport {
            code: result.code,
            message: result.message,
        }
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn get(&self, url: &str, params: &[(String, String)]) -> Result<Value, TransportError>;
    async fn post(&self, url: &str, body: &Value) -> Result<Value, TransportError>;
}
