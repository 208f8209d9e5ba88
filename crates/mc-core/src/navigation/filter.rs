use super::{NavigationNode, PermissionRequirements, PermissionSet};

/// Prune a navigation tree down to what `permissions` may see.
///
/// Admins get the tree back unchanged. Otherwise a node survives when it is
/// ungated, when its own permission is granted, or when at least one of its
/// descendants survives. Surviving nodes carry the filtered child list, which
/// may be empty if the node is visible on its own. Sibling order is kept.
pub fn filter_navigation(
    tree: &[NavigationNode],
    permissions: &PermissionSet,
    requirements: &PermissionRequirements,
) -> Vec<NavigationNode> {
    if permissions.is_admin() {
        return tree.to_vec();
    }

    tree.iter()
        .filter_map(|node| filter_node(node, permissions, requirements))
        .collect()
}

fn filter_node(
    node: &NavigationNode,
    permissions: &PermissionSet,
    requirements: &PermissionRequirements,
) -> Option<NavigationNode> {
    let children = filter_navigation(&node.sub_items, permissions, requirements);

    let visible = match requirements.required_for(&node.label) {
        None => true,
        Some(permission) => permissions.contains(permission),
    };

    if visible || !children.is_empty() {
        Some(NavigationNode {
            sub_items: children,
            ..node.clone()
        })
    } else {
        None
    }
}
