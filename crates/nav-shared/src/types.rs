//! Common types

use serde::{Deserialize, Serialize};

use crate::constants::CODE_SUCCESS;

/// Uniform result envelope shared by the backend and every client call.
///
/// Transport failures are folded into this shape as well, so callers only
/// ever branch on `code`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResult<T> {
    pub code: i32,
    #[serde(default)]
    pub message: String,
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl<T> ApiResult<T> {
    pub fn fail(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            data: None,
            token: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.code == CODE_SUCCESS
    }
}
