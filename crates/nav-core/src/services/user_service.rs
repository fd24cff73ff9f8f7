// ============================================================================
// Nav Core - User Service
// File: crates/nav-core/src/services/user_service.rs
// ============================================================================
//! Login and identity lookup. Every outcome, including transport failure,
//! comes back as an [`ApiResult`] so the UI can show an error state instead
//! of crashing.

use std::sync::Arc;

use nav_shared::constants::{
    CODE_INTERNAL_ERROR, CODE_UNAUTHORIZED, DEFAULT_FAILURE_MESSAGE, LOGIN_ENDPOINT,
    USER_INFO_ENDPOINT, USER_INFO_FAILURE_MESSAGE,
};
use nav_shared::ApiResult;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{error, info, warn};

use crate::domain::UserInfo;
use crate::ports::{HttpTransport, SessionStore};

pub struct UserService<T: HttpTransport, S: SessionStore> {
    transport: Arc<T>,
    store: Arc<S>,
}

impl<T: HttpTransport, S: SessionStore> UserService<T, S> {
    pub fn new(transport: Arc<T>, store: Arc<S>) -> Self {
        Self { transport, store }
    }

    /// Login with the raw credential body
    pub async fn login(&self, body: &Value) -> ApiResult<Value> {
        info!("Login request");
        match self.transport.post(LOGIN_ENDPOINT, body).await {
            Ok(payload) => decode_envelope(payload, DEFAULT_FAILURE_MESSAGE),
            Err(e) => {
                warn!("Login failed: {}", e);
                e.into_result(DEFAULT_FAILURE_MESSAGE)
            }
        }
    }

    /// Fetch the identity of the current session user. On failure the
    /// session is marked logged out.
    pub async fn get_user_info(&self) -> ApiResult<UserInfo> {
        let Some(user_id) = self.store.current_user_id() else {
            warn!("No user id in session; cannot fetch user info");
            self.store.set_login_status(false);
            return ApiResult::fail(CODE_UNAUTHORIZED, USER_INFO_FAILURE_MESSAGE);
        };

        let params = [("id".to_string(), user_id.to_string())];
        let mut result = match self.transport.get(USER_INFO_ENDPOINT, &params).await {
            Ok(payload) => decode_envelope::<UserInfo>(payload, USER_INFO_FAILURE_MESSAGE),
            Err(e) => {
                error!("Fetching user info for {} failed: {}", user_id, e);
                e.into_result(USER_INFO_FAILURE_MESSAGE)
            }
        };

        // a success code with no identity confirms nothing
        if result.is_success() && result.data.is_none() {
            warn!("User info for {} came back without data", user_id);
            result = ApiResult::fail(CODE_INTERNAL_ERROR, USER_INFO_FAILURE_MESSAGE);
        }

        match &result.data {
            Some(user) if result.is_success() => self.store.save_user(user.clone()),
            _ => self.store.set_login_status(false),
        }
        result
    }
}

fn decode_envelope<D: DeserializeOwned>(payload: Value, fallback_message: &str) -> ApiResult<D> {
    serde_json::from_value(payload).unwrap_or_else(|e| {
        warn!("Undecodable response: {}", e);
        ApiResult::fail(CODE_INTERNAL_ERROR, fallback_message)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{MockHttpTransport, MockSessionStore, TransportError};
    use serde_json::json;

    #[tokio::test]
    async fn test_login_passes_envelope_through() {
        let mut transport = MockHttpTransport::new();
        transport
            .expect_post()
            .withf(|url, _| url == LOGIN_ENDPOINT)
            .returning(|_, _| Ok(json!({ "code": 200, "message": "success", "data": { "id": 1 }, "token": "t" })));

        let service = UserService::new(Arc::new(transport), Arc::new(MockSessionStore::new()));
        let result = service.login(&json!({ "username": "alice" })).await;
        assert!(result.is_success());
        assert_eq!(result.token.as_deref(), Some("t"));
    }

    #[tokio::test]
    async fn test_login_transport_failure_defaults() {
        let mut transport = MockHttpTransport::new();
        transport
            .expect_post()
            .returning(|_, _| Err(TransportError::unreachable()));

        let service = UserService::new(Arc::new(transport), Arc::new(MockSessionStore::new()));
        let result = service.login(&json!({})).await;
        assert_eq!(result.code, 500);
        assert_eq!(result.message, DEFAULT_FAILURE_MESSAGE);
        assert!(result.data.is_none());
    }

    #[tokio::test]
    async fn test_user_info_saved_on_success() {
        let mut transport = MockHttpTransport::new();
        transport
            .expect_get()
            .withf(|url, params| url == USER_INFO_ENDPOINT && params[0].1 == "7")
            .returning(|_, _| Ok(json!({ "code": 200, "message": "success", "data": { "ID": 7, "Role": "admin" } })));

        let mut store = MockSessionStore::new();
        store.expect_current_user_id().return_const(Some(7u64));
        store
            .expect_save_user()
            .withf(|user| user.id == 7 && user.role == "admin")
            .times(1)
            .return_const(());
        store.expect_set_login_status().never();

        let service = UserService::new(Arc::new(transport), Arc::new(store));
        let result = service.get_user_info().await;
        assert!(result.is_success());
    }

    #[tokio::test]
    async fn test_user_info_failure_logs_out() {
        let mut transport = MockHttpTransport::new();
        transport
            .expect_get()
            .returning(|_, _| Err(TransportError::new(Some(404), None)));

        let mut store = MockSessionStore::new();
        store.expect_current_user_id().return_const(Some(7u64));
        store
            .expect_set_login_status()
            .withf(|logged_in| !*logged_in)
            .times(1)
            .return_const(());

        let service = UserService::new(Arc::new(transport), Arc::new(store));
        let result = service.get_user_info().await;
        assert_eq!(result.code, 404);
        assert_eq!(result.message, USER_INFO_FAILURE_MESSAGE);
        assert!(result.data.is_none());
    }

    #[tokio::test]
    async fn test_user_info_success_without_data_is_failure() {
        let mut transport = MockHttpTransport::new();
        transport
            .expect_get()
            .returning(|_, _| Ok(json!({ "code": 200, "message": "success" })));

        let mut store = MockSessionStore::new();
        store.expect_current_user_id().return_const(Some(7u64));
        store.expect_save_user().never();
        store
            .expect_set_login_status()
            .withf(|logged_in| !*logged_in)
            .times(1)
            .return_const(());

        let service = UserService::new(Arc::new(transport), Arc::new(store));
        let result = service.get_user_info().await;
        assert!(!result.is_success());
        assert_eq!(result.code, CODE_INTERNAL_ERROR);
        assert_eq!(result.message, USER_INFO_FAILURE_MESSAGE);
    }

    #[tokio::test]
    async fn test_login_success_status_without_body_fails() {
        let mut transport = MockHttpTransport::new();
        transport
            .expect_post()
            .returning(|_, _| Err(TransportError::new(Some(200), None)));

        let service = UserService::new(Arc::new(transport), Arc::new(MockSessionStore::new()));
        let result = service.login(&json!({ "username": "alice" })).await;
        assert!(!result.is_success());
        assert_eq!(result.code, 500);
        assert_eq!(result.message, DEFAULT_FAILURE_MESSAGE);
    }

    #[tokio::test]
    async fn test_user_info_without_session_id() {
        let mut store = MockSessionStore::new();
        store.expect_current_user_id().return_const(None::<u64>);
        store.expect_set_login_status().times(1).return_const(());

        let service = UserService::new(Arc::new(MockHttpTransport::new()), Arc::new(store));
        let result = service.get_user_info().await;
        assert_eq!(result.code, CODE_UNAUTHORIZED);
    }
}
