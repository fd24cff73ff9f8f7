// ============================================================================
// Nav Infrastructure - In-Memory Session Store
// File: crates/nav-infrastructure/src/session/memory_store.rs
// ============================================================================

use parking_lot::RwLock;
use tracing::info;

use nav_core::domain::{UserInfo, DEFAULT_ROLE};
use nav_core::ports::SessionStore;

#[derive(Debug, Default)]
struct SessionState {
    user: Option<UserInfo>,
    logged_in: bool,
}

/// Process-local session state for the console and tests.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    state: RwLock<SessionState>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with a logged-in user, as after a successful login.
    pub fn logged_in(user: UserInfo) -> Self {
        Self {
            state: RwLock::new(SessionState {
                user: Some(user),
                logged_in: true,
            }),
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.state.read().logged_in
    }

    pub fn user(&self) -> Option<UserInfo> {
        self.state.read().user.clone()
    }
}

impl SessionStore for MemorySessionStore {
    fn current_user_role(&self) -> String {
        self.state
            .read()
            .user
            .as_ref()
            .map(|user| user.role.clone())
            .unwrap_or_else(|| DEFAULT_ROLE.to_string())
    }

    fn current_user_id(&self) -> Option<u64> {
        self.state.read().user.as_ref().map(|user| user.id)
    }

    fn set_login_status(&self, logged_in: bool) {
        info!("Login status set to {}", logged_in);
        self.state.write().logged_in = logged_in;
    }

    fn save_user(&self, user: UserInfo) {
        self.state.write().user = Some(user);
    }
}
