// ============================================================================
// Nav Core - Alias Registry
// File: crates/nav-core/src/domain/alias.rs
// Description: Symbolic view names mapped to canonical view paths
// ============================================================================

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::NavError;

/// One symbolic view name and the canonical path it stands for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AliasEntry {
    pub name: String,
    pub path: String,
}

/// Built-in view aliases, in declaration order.
pub const BUILTIN_ALIASES: &[(&str, &str)] = &[
    ("Home", "/index/index"),
    ("Login", "/login"),
    ("Register", "/register"),
    ("Exception403", "/exception/403"),
    ("Exception404", "/exception/404"),
    ("Exception500", "/exception/500"),
    ("Fireworks", "/widgets/Fireworks"),
    ("Account", "/user/Account"),
    ("UserCenter", "/user/User"),
    ("Setting", "/system/Setting"),
    ("ImageList", "/image-manage/imageList"),
    ("CreateVulEnv", "/image-manage/createVulEnv"),
    ("InstanceManage", "/image-manage/instanceManage"),
    ("CreateInstance", "/image-manage/createInstance"),
    ("Incomplete", "/exception/incomplete"),
    ("Document", "/help/document"),
];

/// Immutable alias table. Built once at startup.
#[derive(Debug, Clone, Default)]
pub struct AliasRegistry {
    entries: Vec<AliasEntry>,
    by_name: HashMap<String, usize>,
}

impl AliasRegistry {
    pub fn new<I, N, P>(entries: I) -> Result<Self, NavError>
    where
        I: IntoIterator<Item = (N, P)>,
        N: Into<String>,
        P: Into<String>,
    {
        let mut registry = Self::default();
        for (name, path) in entries {
            let name = name.into();
            let path = path.into();

            if name.trim().is_empty() {
                return Err(NavError::Validation("Alias name must not be empty".to_string()));
            }
            if !path.starts_with('/') {
                return Err(NavError::Validation(format!(
                    "Alias {} path must start with '/': {}",
                    name, path
                )));
            }
            if registry.by_name.contains_key(&name) {
                return Err(NavError::DuplicateAlias(name));
            }

            registry.by_name.insert(name.clone(), registry.entries.len());
            registry.entries.push(AliasEntry { name, path });
        }

        debug!("Alias registry built with {} entries", registry.entries.len());
        Ok(registry)
    }

    /// Registry holding the application's built-in views.
    pub fn builtin() -> Self {
        let entries = BUILTIN_ALIASES
            .iter()
            .map(|(name, path)| AliasEntry {
                name: name.to_string(),
                path: path.to_string(),
            })
            .collect::<Vec<_>>();
        let by_name = entries
            .iter()
            .enumerate()
            .map(|(index, entry)| (entry.name.clone(), index))
            .collect();
        Self { entries, by_name }
    }

    pub fn resolve(&self, name: &str) -> Result<&str, NavError> {
        self.by_name
            .get(name)
            .map(|&index| self.entries[index].path.as_str())
            .ok_or_else(|| NavError::UnknownAlias(name.to_string()))
    }

    /// Reverse lookup for payloads that reference views by canonical path.
    pub fn name_for_path(&self, path: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.path == path)
            .map(|entry| entry.name.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &AliasEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
