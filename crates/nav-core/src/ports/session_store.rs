//! Session store trait (port)

use crate::domain::UserInfo;

/// Authentication state owned by the surrounding application. The resolver
/// only reads the role; login status is flipped by the services when the
/// session identity cannot be confirmed.
#[cfg_attr(test, mockall::automock)]
pub trait SessionStore: Send + Sync {
    fn current_user_role(&self) -> String;
    fn current_user_id(&self) -> Option<u64>;
    fn set_login_status(&self, logged_in: bool);
    fn save_user(&self, user: UserInfo);
}
