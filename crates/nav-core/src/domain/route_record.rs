// ============================================================================
// Nav Core - Route Record / Route Table
// File: crates/nav-core/src/domain/route_record.rs
// Description: Flattened, lookup-able routes produced from the menu tree
// ============================================================================

use std::collections::HashMap;

use nav_shared::utils::normalize_path;
use serde::Serialize;

use super::menu_node::MenuMeta;
use crate::error::NavError;

/// Flattened route entry consumed by the navigation and rendering layers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteRecord {
    pub name: String,
    /// Absolute, normalized path
    pub path: String,
    /// Canonical view path the alias resolved to
    pub component: String,
    /// Symbolic alias name the node referenced
    pub alias: String,
    pub meta: MenuMeta,
    /// Role lists of this node and of every restricting ancestor, root first
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub guards: Vec<Vec<String>>,
}

impl RouteRecord {
    /// True when `role` passes every guard on the way down to this route.
    pub fn permits(&self, role: &str) -> bool {
        self.guards
            .iter()
            .all(|roles| roles.iter().any(|r| r == role))
    }

    pub fn shows_in_tabs(&self) -> bool {
        !self.meta.is_hide_tab
    }

    pub fn keeps_alive(&self) -> bool {
        self.meta.keep_alive
    }
}

/// Lookup key for [`RouteTable::find`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteLookup<'a> {
    Name(&'a str),
    Path(&'a str),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RouteTable {
    records: Vec<RouteRecord>,
    #[serde(skip)]
    by_name: HashMap<String, usize>,
    #[serde(skip)]
    by_path: HashMap<String, usize>,
}

impl RouteTable {
    /// Append a record. Names must be unique; the first record registered
    /// for a path keeps it. Returns `false` when the path was already taken.
    pub(crate) fn push(&mut self, record: RouteRecord) -> Result<bool, NavError> {
        if self.by_name.contains_key(&record.name) {
            return Err(NavError::DuplicateRouteName(record.name));
        }

        let index = self.records.len();
        self.by_name.insert(record.name.clone(), index);
        let path_is_new = !self.by_path.contains_key(&record.path);
        if path_is_new {
            self.by_path.insert(record.path.clone(), index);
        }
        self.records.push(record);
        Ok(path_is_new)
    }

    pub fn find(&self, lookup: RouteLookup<'_>) -> Result<&RouteRecord, NavError> {
        match lookup {
            RouteLookup::Name(name) => self
                .by_name
                .get(name)
                .map(|&index| &self.records[index])
                .ok_or_else(|| NavError::RouteNotFound(name.to_string())),
            RouteLookup::Path(path) => {
                let path = normalize_path(path);
                self.by_path
                    .get(&path)
                    .map(|&index| &self.records[index])
                    .ok_or(NavError::RouteNotFound(path))
            }
        }
    }

    pub fn by_name(&self, name: &str) -> Result<&RouteRecord, NavError> {
        self.find(RouteLookup::Name(name))
    }

    pub fn by_path(&self, path: &str) -> Result<&RouteRecord, NavError> {
        self.find(RouteLookup::Path(path))
    }

    /// Names of the views whose state survives navigation away and back.
    pub fn keep_alive_names(&self) -> Vec<&str> {
        self.records
            .iter()
            .filter(|record| record.keeps_alive())
            .map(|record| record.name.as_str())
            .collect()
    }

    pub fn records(&self) -> &[RouteRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RouteRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a RouteTable {
    type Item = &'a RouteRecord;
    type IntoIter = std::slice::Iter<'a, RouteRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
