//! # Nav Core - Domain Module
//! 
//! Domain entities for menu-to-route resolution.

pub mod alias;
pub mod menu_node;
pub mod route_record;
pub mod user_info;

// Re-export all entities
pub use alias::{AliasEntry, AliasRegistry, BUILTIN_ALIASES};
pub use menu_node::{MenuIter, MenuMeta, MenuNode, MenuTree};
pub use route_record::{RouteLookup, RouteRecord, RouteTable};
pub use user_info::{UserInfo, DEFAULT_ROLE};
