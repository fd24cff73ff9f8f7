// ============================================================================
// Nav Core - Menu Ingestion
// File: crates/nav-core/src/services/ingest.rs
// ============================================================================
//! Normalizes static and fetched menus into one validated [`MenuTree`].

use std::collections::HashSet;

use nav_shared::ApiResult;
use serde_json::Value;
use tracing::{info, warn};
use validator::Validate;

use crate::domain::{AliasRegistry, MenuNode, MenuTree};
use crate::error::NavError;

/// Where a menu tree came from.
#[derive(Debug, Clone)]
pub enum MenuSource {
    /// Declarative data compiled into the application
    Static(MenuTree),
    /// Payload fetched from the backend, either a bare node array or the
    /// `{code, message, data}` envelope around one
    Fetched(Value),
}

pub fn ingest(source: MenuSource, aliases: &AliasRegistry) -> Result<MenuTree, NavError> {
    let (origin, mut tree) = match source {
        MenuSource::Static(tree) => ("static", tree),
        MenuSource::Fetched(payload) => ("fetched", decode_payload(payload)?),
    };

    normalize_components(&mut tree.roots, aliases);
    validate_tree(&tree, aliases)?;

    info!("Ingested {} menu with {} nodes", origin, tree.len());
    Ok(tree)
}

fn decode_payload(payload: Value) -> Result<MenuTree, NavError> {
    match payload {
        Value::Array(_) => serde_json::from_value::<Vec<MenuNode>>(payload)
            .map(MenuTree::new)
            .map_err(|e| NavError::InvalidPayload(e.to_string())),
        Value::Object(_) => {
            let envelope: ApiResult<Vec<MenuNode>> =
                serde_json::from_value(payload).map_err(|e| NavError::InvalidPayload(e.to_string()))?;
            if !envelope.is_success() {
                warn!("Menu payload rejected by backend: {} {}", envelope.code, envelope.message);
                return Err(NavError::Transport {
                    code: envelope.code,
                    message: envelope.message,
                });
            }
            Ok(MenuTree::new(envelope.data.unwrap_or_default()))
        }
        other => Err(NavError::InvalidPayload(format!(
            "expected a node array or result envelope, got {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Blank references become containers; references given as canonical view
/// paths are rewritten to their alias name.
fn normalize_components(nodes: &mut [MenuNode], aliases: &AliasRegistry) {
    for node in nodes {
        node.component = match node.component.take() {
            Some(reference) if reference.trim().is_empty() => None,
            Some(reference) if !aliases.contains(&reference) => Some(
                aliases
                    .name_for_path(&reference)
                    .map(str::to_string)
                    .unwrap_or(reference),
            ),
            other => other,
        };
        normalize_components(&mut node.children, aliases);
    }
}

fn validate_tree(tree: &MenuTree, aliases: &AliasRegistry) -> Result<(), NavError> {
    let mut ids = HashSet::new();
    let mut names = HashSet::new();

    for node in tree.iter() {
        node.validate()
            .map_err(|e| NavError::Validation(format!("menu {}: {}", node.id, e)))?;
        if !ids.insert(node.id) {
            return Err(NavError::DuplicateRouteId(node.id));
        }
        if !names.insert(node.name.as_str()) {
            return Err(NavError::DuplicateRouteName(node.name.clone()));
        }
        if let Some(alias) = &node.component {
            aliases.resolve(alias)?;
        }
    }
    Ok(())
}
