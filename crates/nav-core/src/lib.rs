//! # Nav Core
//! 
//! Menu tree, alias registry, and the route resolver that turns one into a
//! route table and a role-filtered display tree. Collaborators (HTTP
//! transport, session store) are reached through the traits in [`ports`].

pub mod domain;
pub mod catalog;
pub mod services;
pub mod ports;
pub mod error;

// Re-export domain entities
pub use domain::*;
pub use error::NavError;
pub use services::{
    build_menu_tree, build_route_table, find_route, ingest, MenuSource, NavOutcome, Navigation,
    NavigationService, UserService,
};
