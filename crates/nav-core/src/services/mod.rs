//! Domain services (resolution logic and session orchestration)

pub mod route_resolver;
pub mod ingest;
pub mod navigation;
pub mod user_service;
pub mod navigation_service;

pub use route_resolver::{build_menu_tree, build_route_table, find_route};
pub use ingest::{ingest, MenuSource};
pub use navigation::{NavOutcome, Navigation};
pub use user_service::UserService;
pub use navigation_service::NavigationService;
