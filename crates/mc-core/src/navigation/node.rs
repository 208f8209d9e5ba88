use serde::{Deserialize, Serialize};

/// One entry in the sidebar menu.
///
/// A node with non-empty `sub_items` is a group, otherwise a leaf. Trees are
/// built once as static configuration and never mutated; filtering always
/// produces a new tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationNode {
    pub label: String,
    pub href: String,
    /// Presentational handle only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sub_items: Vec<NavigationNode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<u32>,
}

impl NavigationNode {
    pub fn leaf(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
            icon: None,
            sub_items: Vec::new(),
            badge: None,
        }
    }

    /// Group entries link to a placeholder; the children carry the routes.
    pub fn group(label: impl Into<String>, sub_items: Vec<NavigationNode>) -> Self {
        Self {
            label: label.into(),
            href: "#".to_string(),
            icon: None,
            sub_items,
            badge: None,
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn with_badge(mut self, badge: u32) -> Self {
        self.badge = Some(badge);
        self
    }

    pub fn is_group(&self) -> bool {
        !self.sub_items.is_empty()
    }

    /// Every label in this subtree, depth-first, self first.
    pub fn labels(&self) -> Vec<&str> {
        let mut out = vec![self.label.as_str()];
        for child in &self.sub_items {
            out.extend(child.labels());
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_with_no_children_is_leaf() {
        let node = NavigationNode::group("Empty", Vec::new());
        assert!(!node.is_group());
    }

    #[test]
    fn test_labels_depth_first() {
        let tree = NavigationNode::group(
            "Members",
            vec![
                NavigationNode::leaf("Add Member", "/member/add"),
                NavigationNode::group(
                    "Archive",
                    vec![NavigationNode::leaf("Recycle Bin", "/member/recycle-bin")],
                ),
            ],
        );
        assert_eq!(
            tree.labels(),
            vec!["Members", "Add Member", "Archive", "Recycle Bin"]
        );
    }

    #[test]
    fn test_serializes_camel_case_and_omits_empty() {
        let node = NavigationNode::group(
            "Events",
            vec![NavigationNode::leaf("Tickets", "/events/tickets").with_badge(3)],
        );
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json["subItems"][0]["badge"], 3);
        assert!(json["subItems"][0].get("subItems").is_none());
        assert!(json.get("icon").is_none());
    }
}
