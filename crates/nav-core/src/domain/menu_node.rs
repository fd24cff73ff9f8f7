// ============================================================================
// Nav Core - Menu Node Entity
// File: crates/nav-core/src/domain/menu_node.rs
// Description: Declarative menu hierarchy shared by static and fetched menus
// ============================================================================

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Display and routing metadata carried by every menu node.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MenuMeta {
    /// i18n key or literal display string
    #[validate(length(min = 1, max = 100, message = "Menu title must be between 1 and 100 characters"))]
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 100, message = "Menu icon too long"))]
    pub icon: Option<String>,

    #[serde(default)]
    pub keep_alive: bool,

    /// Roles allowed to see and enter this node. Absent or empty means all.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roles: Option<Vec<String>>,

    /// Excluded from the navigation menu but still routable
    #[serde(default)]
    pub is_hide: bool,

    /// Excluded from the open-tabs strip
    #[serde(default)]
    pub is_hide_tab: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_text_badge: Option<String>,
}

impl MenuMeta {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn keep_alive(mut self) -> Self {
        self.keep_alive = true;
        self
    }

    pub fn roles<I, S>(mut self, roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.roles = Some(roles.into_iter().map(Into::into).collect());
        self
    }

    pub fn hidden(mut self) -> Self {
        self.is_hide = true;
        self
    }

    pub fn hide_tab(mut self) -> Self {
        self.is_hide_tab = true;
        self
    }

    pub fn badge(mut self, text: impl Into<String>) -> Self {
        self.show_text_badge = Some(text.into());
        self
    }

    /// The node's own role gate. Ancestors are checked separately.
    pub fn allows(&self, role: &str) -> bool {
        match &self.roles {
            Some(roles) if !roles.is_empty() => roles.iter().any(|r| r == role),
            _ => true,
        }
    }

    pub fn declared_roles(&self) -> Option<&[String]> {
        self.roles.as_deref().filter(|roles| !roles.is_empty())
    }
}

/// Menu node. `component` is an alias name, or `None` for pure containers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MenuNode {
    pub id: u64,

    #[validate(length(min = 1, max = 100, message = "Menu name must be between 1 and 100 characters"))]
    pub name: String,

    #[serde(default)]
    #[validate(length(max = 255, message = "Menu path too long"))]
    pub path: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component: Option<String>,

    #[validate(nested)]
    pub meta: MenuMeta,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<MenuNode>,
}

impl MenuNode {
    pub fn new(
        id: u64,
        name: impl Into<String>,
        path: impl Into<String>,
        component: Option<&str>,
        meta: MenuMeta,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            path: path.into(),
            component: component.map(str::to_string),
            meta,
            children: Vec::new(),
        }
    }

    pub fn with_children(mut self, children: Vec<MenuNode>) -> Self {
        self.children = children;
        self
    }

    /// Groups children without being a navigation target itself.
    pub fn is_container_only(&self) -> bool {
        self.component.is_none()
    }

    pub fn is_routable(&self) -> bool {
        self.component.is_some()
    }
}

/// Ordered top-level nodes under an implicit root mounted at `/`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MenuTree {
    pub roots: Vec<MenuNode>,
}

impl MenuTree {
    pub fn new(roots: Vec<MenuNode>) -> Self {
        Self { roots }
    }

    /// Tree with a single designated root.
    pub fn from_root(root: MenuNode) -> Self {
        Self { roots: vec![root] }
    }

    /// Depth-first, children in declaration order.
    pub fn iter(&self) -> MenuIter<'_> {
        MenuIter {
            stack: self.roots.iter().rev().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    pub fn find(&self, name: &str) -> Option<&MenuNode> {
        self.iter().find(|node| node.name == name)
    }
}

pub struct MenuIter<'a> {
    stack: Vec<&'a MenuNode>,
}

impl<'a> Iterator for MenuIter<'a> {
    type Item = &'a MenuNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}
