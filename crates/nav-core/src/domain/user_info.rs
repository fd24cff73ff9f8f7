//! Session identity as returned by the user service

use serde::{Deserialize, Serialize};

/// Fallback role for accounts the backend stores without one.
pub const DEFAULT_ROLE: &str = "user";

/// Current user identity. Accepts both the backend's exported field names
/// (`ID`, `Username`, ...) and lowercase keys.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UserInfo {
    #[serde(alias = "ID")]
    pub id: u64,

    #[serde(alias = "Username", default)]
    pub username: String,

    #[serde(alias = "Email", default)]
    pub email: String,

    #[serde(alias = "Role", default = "default_role")]
    pub role: String,

    /// 0 = disabled, 1 = active
    #[serde(alias = "Status", default)]
    pub status: i32,
}

fn default_role() -> String {
    DEFAULT_ROLE.to_string()
}

impl UserInfo {
    pub fn is_active(&self) -> bool {
        self.status == 1
    }
}
