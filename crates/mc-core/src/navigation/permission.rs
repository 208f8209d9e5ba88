use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use super::NavigationNode;

/// Permission names granted to the current user plus the admin flag.
///
/// An admin set behaves as a superset of every possible requirement.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PermissionSet {
    names: HashSet<String>,
    is_admin: bool,
}

impl PermissionSet {
    pub fn new<I, S>(is_admin: bool, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
            is_admin,
        }
    }

    pub fn admin() -> Self {
        Self {
            names: HashSet::new(),
            is_admin: true,
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_admin(&self) -> bool {
        self.is_admin
    }

    pub fn contains(&self, permission: &str) -> bool {
        self.is_admin || self.names.contains(permission)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Authorization record for the signed-in user, as reported by the backend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPermissions {
    pub username: String,
    pub is_admin: bool,
    pub permissions: Vec<String>,
}

impl From<UserPermissions> for PermissionSet {
    fn from(value: UserPermissions) -> Self {
        PermissionSet::new(value.is_admin, value.permissions)
    }
}

/// Static lookup from navigation label to the permission gating it.
///
/// `None` and a missing entry both mean "always visible".
#[derive(Debug, Clone, Default)]
pub struct PermissionRequirements {
    by_label: HashMap<String, Option<String>>,
}

impl PermissionRequirements {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn require(mut self, label: impl Into<String>, permission: impl Into<String>) -> Self {
        self.by_label.insert(label.into(), Some(permission.into()));
        self
    }

    pub fn always_visible(mut self, label: impl Into<String>) -> Self {
        self.by_label.insert(label.into(), None);
        self
    }

    pub fn required_for(&self, label: &str) -> Option<&str> {
        self.by_label.get(label).and_then(|p| p.as_deref())
    }

    pub fn has_entry(&self, label: &str) -> bool {
        self.by_label.contains_key(label)
    }

    /// Labels in `tree` that have no entry at all.
    ///
    /// These are visible to everyone, which is rarely intended for a group.
    pub fn unmapped_labels<'a>(&self, tree: &'a [NavigationNode]) -> Vec<&'a str> {
        tree.iter()
            .flat_map(NavigationNode::labels)
            .filter(|label| !self.has_entry(label))
            .collect()
    }
}
