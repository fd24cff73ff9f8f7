// ============================================================================
// Nav Core - Route Resolver
// File: crates/nav-core/src/services/route_resolver.rs
// ============================================================================
//! Flattens the menu tree into a route table and filters it into the
//! role-specific display tree. Pure and synchronous.

use nav_shared::utils::join_paths;
use tracing::{debug, info, warn};

use crate::domain::{AliasRegistry, MenuNode, MenuTree, RouteLookup, RouteRecord, RouteTable};
use crate::error::NavError;

/// One record per node with a component, depth-first in declaration order.
pub fn build_route_table(tree: &MenuTree, aliases: &AliasRegistry) -> Result<RouteTable, NavError> {
    let mut table = RouteTable::default();
    let mut segments = Vec::new();
    let mut guards = Vec::new();

    for root in &tree.roots {
        collect_routes(root, aliases, &mut segments, &mut guards, &mut table)?;
    }

    info!("Route table built with {} records", table.len());
    Ok(table)
}

fn collect_routes<'a>(
    node: &'a MenuNode,
    aliases: &AliasRegistry,
    segments: &mut Vec<&'a str>,
    guards: &mut Vec<Vec<String>>,
    table: &mut RouteTable,
) -> Result<(), NavError> {
    segments.push(&node.path);
    let restricted = match node.meta.declared_roles() {
        Some(roles) => {
            guards.push(roles.to_vec());
            true
        }
        None => false,
    };

    if let Some(alias) = &node.component {
        let component = aliases.resolve(alias)?;
        let path = join_paths(segments.iter().copied());
        debug!("Route {} -> {} ({})", node.name, path, component);

        let record = RouteRecord {
            name: node.name.clone(),
            path: path.clone(),
            component: component.to_string(),
            alias: alias.clone(),
            meta: node.meta.clone(),
            guards: guards.clone(),
        };
        if !table.push(record)? {
            warn!("Path {} already routed; {} reachable by name only", path, node.name);
        }
    }

    for child in &node.children {
        collect_routes(child, aliases, segments, guards, table)?;
    }

    if restricted {
        guards.pop();
    }
    segments.pop();
    Ok(())
}

/// Display tree for `current_role`.
///
/// A node the role may not see is dropped with its whole subtree, as is a
/// hidden node. Hidden nodes stay routable through the route table.
///
/// Pure containers left without visible children are dropped too. That is
/// a display choice only: access is decided by the record guards, never by
/// this tree.
pub fn build_menu_tree(tree: &MenuTree, current_role: &str) -> MenuTree {
    let menu = MenuTree::new(filter_nodes(&tree.roots, current_role));
    debug!("Menu tree for role {} has {} nodes", current_role, menu.len());
    menu
}

fn filter_nodes(nodes: &[MenuNode], role: &str) -> Vec<MenuNode> {
    nodes
        .iter()
        .filter(|node| !node.meta.is_hide && node.meta.allows(role))
        .filter_map(|node| {
            let children = filter_nodes(&node.children, role);
            if node.is_container_only() && !node.children.is_empty() && children.is_empty() {
                return None;
            }
            Some(MenuNode {
                id: node.id,
                name: node.name.clone(),
                path: node.path.clone(),
                component: node.component.clone(),
                meta: node.meta.clone(),
                children,
            })
        })
        .collect()
}

pub fn find_route<'t>(table: &'t RouteTable, lookup: RouteLookup<'_>) -> Result<&'t RouteRecord, NavError> {
    table.find(lookup)
}
