// ============================================================================
// Nav Core - Navigation
// File: crates/nav-core/src/services/navigation.rs
// ============================================================================
//! Both derived views of a menu tree for one role, built together.

use nav_shared::config::RouteSettings;
use serde::Serialize;
use tracing::{info, warn};

use super::route_resolver::{build_menu_tree, build_route_table};
use crate::domain::{AliasRegistry, MenuTree, RouteLookup, RouteRecord, RouteTable};
use crate::error::NavError;

/// Result of guarding a navigation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavOutcome<'a> {
    Allowed(&'a RouteRecord),
    /// Route exists but the role fails one of its guards; holds the
    /// forbidden fallback
    Forbidden(&'a RouteRecord),
    /// No such route; holds the not-found fallback
    NotFound(&'a RouteRecord),
}

impl<'a> NavOutcome<'a> {
    /// The record the caller should render.
    pub fn record(&self) -> &'a RouteRecord {
        match self {
            NavOutcome::Allowed(record) | NavOutcome::Forbidden(record) | NavOutcome::NotFound(record) => record,
        }
    }

    pub fn is_allowed(&self) -> bool {
        matches!(self, NavOutcome::Allowed(_))
    }
}

/// Route table and display tree for one role. Never patched in place: a
/// role change or re-login builds a new one.
#[derive(Debug, Clone, Serialize)]
pub struct Navigation {
    role: String,
    routes: RouteTable,
    menu: MenuTree,
    #[serde(skip)]
    fallbacks: RouteSettings,
}

impl Navigation {
    pub fn build(
        tree: &MenuTree,
        aliases: &AliasRegistry,
        role: impl Into<String>,
        fallbacks: RouteSettings,
    ) -> Result<Self, NavError> {
        let role = role.into();
        let routes = build_route_table(tree, aliases)?;
        let menu = build_menu_tree(tree, &role);

        info!(
            "Navigation built for role {}: {} routes, {} menu nodes",
            role,
            routes.len(),
            menu.len()
        );
        Ok(Self {
            role,
            routes,
            menu,
            fallbacks,
        })
    }

    pub fn rebuild_for_role(self, tree: &MenuTree, aliases: &AliasRegistry, role: &str) -> Result<Self, NavError> {
        Self::build(tree, aliases, role, self.fallbacks)
    }

    pub fn role(&self) -> &str {
        &self.role
    }

    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    pub fn menu(&self) -> &MenuTree {
        &self.menu
    }

    pub fn find(&self, lookup: RouteLookup<'_>) -> Result<&RouteRecord, NavError> {
        self.routes.find(lookup)
    }

    /// Resolve `path` for the current role, substituting the configured
    /// fallback views. Errors only when a fallback route itself is missing.
    pub fn guard(&self, path: &str) -> Result<NavOutcome<'_>, NavError> {
        match self.routes.by_path(path) {
            Ok(record) if record.permits(&self.role) => Ok(NavOutcome::Allowed(record)),
            Ok(record) => {
                warn!("Role {} denied route {}", self.role, record.name);
                self.routes.by_name(&self.fallbacks.forbidden).map(NavOutcome::Forbidden)
            }
            Err(NavError::RouteNotFound(missing)) => {
                warn!("No route for {}", missing);
                self.routes.by_name(&self.fallbacks.not_found).map(NavOutcome::NotFound)
            }
            Err(e) => Err(e),
        }
    }

    /// Records that belong in the open-tabs strip for this role.
    pub fn tab_routes(&self) -> impl Iterator<Item = &RouteRecord> {
        self.routes
            .iter()
            .filter(|record| record.shows_in_tabs() && record.permits(&self.role))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    fn navigation(role: &str) -> Navigation {
        Navigation::build(
            &catalog::async_routes(),
            &AliasRegistry::builtin(),
            role,
            RouteSettings::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_guard_allows() {
        let nav = navigation("admin");
        let outcome = nav.guard("/user/account").unwrap();
        assert!(outcome.is_allowed());
        assert_eq!(outcome.record().name, "Account");
    }

    #[test]
    fn test_guard_forbidden_fallback() {
        let nav = navigation("user");
        match nav.guard("/user/account").unwrap() {
            NavOutcome::Forbidden(record) => assert_eq!(record.name, "403"),
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn test_guard_not_found_fallback() {
        let nav = navigation("user");
        match nav.guard("/no/such/page").unwrap() {
            NavOutcome::NotFound(record) => assert_eq!(record.path, "/exception/404"),
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn test_guard_missing_fallback_errors() {
        let tree = MenuTree::default();
        let nav = Navigation::build(&tree, &AliasRegistry::builtin(), "user", RouteSettings::default()).unwrap();
        assert_eq!(
            nav.guard("/anything").unwrap_err(),
            NavError::RouteNotFound("404".to_string())
        );
    }

    #[test]
    fn test_rebuild_for_role() {
        let tree = catalog::async_routes();
        let aliases = AliasRegistry::builtin();
        let user = navigation("user");
        assert!(user.menu().find("ImageList").is_none());

        let admin = user.rebuild_for_role(&tree, &aliases, "admin").unwrap();
        assert_eq!(admin.role(), "admin");
        assert!(admin.menu().find("ImageList").is_some());
    }

    #[test]
    fn test_tab_routes_skip_hidden_tabs() {
        let nav = navigation("admin");
        let names: Vec<_> = nav.tab_routes().map(|r| r.name.as_str()).collect();
        assert!(!names.contains(&"UserCenter"));
        assert!(names.contains(&"Account"));
    }
}
