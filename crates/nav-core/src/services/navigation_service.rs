// ============================================================================
// Nav Core - Navigation Service
// File: crates/nav-core/src/services/navigation_service.rs
// ============================================================================
//! Session-level orchestration: confirm the identity, obtain the menu tree
//! from its configured source, and derive a fresh [`Navigation`].

use std::sync::Arc;

use nav_shared::config::{MenuSettings, MenuSourceKind, RouteSettings};
use tracing::{error, info};

use super::ingest::{ingest, MenuSource};
use super::navigation::Navigation;
use super::route_resolver::build_route_table;
use super::user_service::UserService;
use crate::catalog;
use crate::domain::{AliasRegistry, MenuTree, RouteTable};
use crate::error::NavError;
use crate::ports::{HttpTransport, SessionStore};

pub struct NavigationService<T: HttpTransport, S: SessionStore> {
    transport: Arc<T>,
    store: Arc<S>,
    aliases: Arc<AliasRegistry>,
    menu: MenuSettings,
    fallbacks: RouteSettings,
    catalog: MenuTree,
}

impl<T: HttpTransport, S: SessionStore> NavigationService<T, S> {
    pub fn new(
        transport: Arc<T>,
        store: Arc<S>,
        aliases: Arc<AliasRegistry>,
        menu: MenuSettings,
        fallbacks: RouteSettings,
    ) -> Self {
        Self {
            transport,
            store,
            aliases,
            menu,
            fallbacks,
            catalog: catalog::async_routes(),
        }
    }

    /// Replace the bundled catalog used for the static source.
    pub fn with_catalog(mut self, catalog: MenuTree) -> Self {
        self.catalog = catalog;
        self
    }

    /// Startup check of the bundled catalog. Any error here is a
    /// configuration defect and should stop the application.
    pub fn bootstrap(&self) -> Result<RouteTable, NavError> {
        let tree = ingest(MenuSource::Static(self.catalog.clone()), &self.aliases)?;
        let table = build_route_table(&tree, &self.aliases)?;
        info!("Bundled catalog verified: {} routes", table.len());
        Ok(table)
    }

    /// Build navigation for the logged-in session. Called at login and again
    /// on every re-login or role change. Any failure logs the session out.
    pub async fn load_session(&self) -> Result<Navigation, NavError> {
        let users = UserService::new(Arc::clone(&self.transport), Arc::clone(&self.store));
        let identity = users.get_user_info().await;
        if !identity.is_success() {
            error!("Session identity unavailable: {} {}", identity.code, identity.message);
            return Err(NavError::Transport {
                code: identity.code,
                message: identity.message,
            });
        }

        let role = self.store.current_user_role();
        let navigation = self
            .load_tree()
            .await
            .and_then(|tree| Navigation::build(&tree, &self.aliases, role, self.fallbacks.clone()));
        if let Err(e) = &navigation {
            error!("Session menu rejected, logging out: {}", e);
            self.store.set_login_status(false);
        }
        navigation
    }

    /// Rebuild navigation for a role without refetching the identity.
    pub async fn load_for_role(&self, role: &str) -> Result<Navigation, NavError> {
        let tree = self.load_tree().await?;
        Navigation::build(&tree, &self.aliases, role, self.fallbacks.clone())
    }

    async fn load_tree(&self) -> Result<MenuTree, NavError> {
        let source = match self.menu.source {
            MenuSourceKind::Static => MenuSource::Static(self.catalog.clone()),
            MenuSourceKind::Backend => {
                info!("Fetching menu from {}", self.menu.endpoint);
                let payload = self.transport.get(&self.menu.endpoint, &[]).await?;
                MenuSource::Fetched(payload)
            }
        };
        ingest(source, &self.aliases)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{MenuMeta, MenuNode};
    use crate::ports::{MockHttpTransport, MockSessionStore, TransportError};
    use nav_shared::constants::USER_INFO_ENDPOINT;
    use serde_json::json;

    fn identity_ok(transport: &mut MockHttpTransport) {
        transport
            .expect_get()
            .withf(|url, _| url == USER_INFO_ENDPOINT)
            .returning(|_, _| Ok(json!({ "code": 200, "message": "success", "data": { "id": 1, "role": "user" } })));
    }

    fn logged_in_store(role: &'static str) -> MockSessionStore {
        let mut store = MockSessionStore::new();
        store.expect_current_user_id().return_const(Some(1u64));
        store.expect_save_user().return_const(());
        store.expect_current_user_role().return_const(role.to_string());
        store
    }

    fn service(
        transport: MockHttpTransport,
        store: MockSessionStore,
        source: MenuSourceKind,
    ) -> NavigationService<MockHttpTransport, MockSessionStore> {
        NavigationService::new(
            Arc::new(transport),
            Arc::new(store),
            Arc::new(AliasRegistry::builtin()),
            MenuSettings {
                source,
                ..MenuSettings::default()
            },
            RouteSettings::default(),
        )
    }

    #[test]
    fn test_bootstrap_bundled_catalog() {
        let svc = service(MockHttpTransport::new(), MockSessionStore::new(), MenuSourceKind::Static);
        let table = svc.bootstrap().unwrap();
        assert!(table.by_name("Account").is_ok());
    }

    #[test]
    fn test_bootstrap_rejects_bad_catalog() {
        let svc = service(MockHttpTransport::new(), MockSessionStore::new(), MenuSourceKind::Static)
            .with_catalog(MenuTree::from_root(MenuNode::new(
                1,
                "Broken",
                "/broken",
                Some("NoSuchView"),
                MenuMeta::titled("broken"),
            )));
        let err = svc.bootstrap().unwrap_err();
        assert!(err.is_fatal());
    }

    #[tokio::test]
    async fn test_static_session_for_user_role() {
        let mut transport = MockHttpTransport::new();
        identity_ok(&mut transport);

        let svc = service(transport, logged_in_store("user"), MenuSourceKind::Static);
        let nav = svc.load_session().await.unwrap();
        assert_eq!(nav.role(), "user");
        assert!(nav.menu().find("Account").is_none());
        assert!(nav.routes().by_name("Account").is_ok());
    }

    #[tokio::test]
    async fn test_backend_session_fetches_menu() {
        let mut transport = MockHttpTransport::new();
        identity_ok(&mut transport);
        transport
            .expect_get()
            .withf(|url, _| url == "/api/v1/menus")
            .times(1)
            .returning(|_, _| {
                Ok(json!({
                    "code": 200,
                    "message": "success",
                    "data": [{
                        "id": 9,
                        "name": "System",
                        "path": "/system",
                        "component": "/index/index",
                        "meta": { "title": "menus.system.title" },
                        "children": [{
                            "id": 901,
                            "name": "Setting",
                            "path": "setting",
                            "component": "/system/Setting",
                            "meta": { "title": "menus.system.setting", "keepAlive": true, "roles": ["admin"] }
                        }]
                    }]
                }))
            });

        let svc = service(transport, logged_in_store("admin"), MenuSourceKind::Backend);
        let nav = svc.load_session().await.unwrap();
        assert_eq!(nav.routes().len(), 2);
        assert_eq!(nav.routes().by_path("/system/setting").unwrap().alias, "Setting");
        assert_eq!(nav.routes().keep_alive_names(), vec!["Setting"]);
        assert!(nav.menu().find("Setting").is_some());
    }

    #[tokio::test]
    async fn test_identity_failure_aborts_session() {
        let mut transport = MockHttpTransport::new();
        transport
            .expect_get()
            .returning(|_, _| Err(TransportError::new(Some(401), Some("token expired".into()))));

        let mut store = MockSessionStore::new();
        store.expect_current_user_id().return_const(Some(1u64));
        store.expect_set_login_status().withf(|v| !*v).times(1).return_const(());
        store.expect_current_user_role().never();

        let svc = service(transport, store, MenuSourceKind::Static);
        let err = svc.load_session().await.unwrap_err();
        assert_eq!(err, NavError::Transport { code: 401, message: "token expired".into() });
        assert!(!err.is_fatal());
    }

    #[tokio::test]
    async fn test_rejected_menu_logs_session_out() {
        let mut transport = MockHttpTransport::new();
        identity_ok(&mut transport);
        transport
            .expect_get()
            .withf(|url, _| url == "/api/v1/menus")
            .returning(|_, _| {
                Ok(json!([{
                    "id": 1,
                    "name": "Broken",
                    "path": "/broken",
                    "component": "Nope",
                    "meta": { "title": "broken" }
                }]))
            });

        let mut store = logged_in_store("admin");
        store
            .expect_set_login_status()
            .withf(|logged_in| !*logged_in)
            .times(1)
            .return_const(());

        let svc = service(transport, store, MenuSourceKind::Backend);
        let err = svc.load_session().await.unwrap_err();
        assert_eq!(err, NavError::UnknownAlias("Nope".into()));
    }

    #[tokio::test]
    async fn test_menu_fetch_failure_is_recoverable() {
        let mut transport = MockHttpTransport::new();
        transport
            .expect_get()
            .returning(|_, _| Err(TransportError::unreachable()));

        let svc = service(transport, MockSessionStore::new(), MenuSourceKind::Backend);
        let err = svc.load_for_role("admin").await.unwrap_err();
        assert_eq!(err, NavError::Transport { code: 500, message: "Server error".into() });
    }
}
