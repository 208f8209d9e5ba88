//! Sidebar navigation domain.
//!
//! A static menu tree per dashboard variant, pruned against the caller's
//! permissions before rendering.

pub mod catalog;
mod filter;
mod node;
mod permission;

pub use catalog::DashboardVariant;
pub use filter::filter_navigation;
pub use node::NavigationNode;
pub use permission::{PermissionRequirements, PermissionSet, UserPermissions};
