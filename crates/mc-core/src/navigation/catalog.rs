//! Static menu trees and their permission requirements.
//!
//! 侧边栏菜单配置：每个仪表盘变体一棵静态树。

use serde::{Deserialize, Serialize};

use super::{NavigationNode, PermissionRequirements};

/// Which dashboard shell is being rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DashboardVariant {
    /// Full administration dashboard.
    #[default]
    Admin,
    /// Finance office dashboard.
    Accounts,
}

impl DashboardVariant {
    pub fn menu(self) -> Vec<NavigationNode> {
        match self {
            DashboardVariant::Admin => admin_menu(),
            DashboardVariant::Accounts => accounts_menu(),
        }
    }

    pub fn requirements(self) -> PermissionRequirements {
        match self {
            DashboardVariant::Admin => admin_requirements(),
            DashboardVariant::Accounts => accounts_requirements(),
        }
    }
}

impl std::str::FromStr for DashboardVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "admin" => Ok(DashboardVariant::Admin),
            "accounts" => Ok(DashboardVariant::Accounts),
            other => Err(format!("unknown dashboard variant: {other}")),
        }
    }
}

fn admin_menu() -> Vec<NavigationNode> {
    vec![
        NavigationNode::leaf("Dashboard", "/dashboard").with_icon("home"),
        NavigationNode::group(
            "Members",
            vec![
                NavigationNode::leaf("Add Member", "/member/add"),
                NavigationNode::leaf("All Members", "/member/list"),
                NavigationNode::leaf("Recycle Bin", "/member/recycle-bin"),
                NavigationNode::leaf("ID Transfer", "/member/id-transfer"),
            ],
        )
        .with_icon("users"),
        NavigationNode::group(
            "Finance",
            vec![
                NavigationNode::leaf("Invoices", "/finance/invoices"),
                NavigationNode::leaf("Payments", "/finance/payments"),
                NavigationNode::leaf("Pricing", "/finance/pricing"),
            ],
        )
        .with_icon("wallet"),
        NavigationNode::group(
            "Facilities",
            vec![
                NavigationNode::leaf("Venues", "/facilities/venues"),
                NavigationNode::leaf("Bookings", "/facilities/bookings"),
            ],
        )
        .with_icon("building"),
        NavigationNode::group(
            "Events",
            vec![
                NavigationNode::leaf("All Events", "/events"),
                NavigationNode::leaf("Tickets", "/events/tickets"),
                NavigationNode::leaf("Event Fees", "/events/fees"),
                NavigationNode::leaf("Event Media", "/events/media"),
            ],
        )
        .with_icon("calendar"),
        NavigationNode::group(
            "Email",
            vec![
                NavigationNode::leaf("Compose", "/email/compose"),
                NavigationNode::leaf("Email Lists", "/email/lists"),
            ],
        )
        .with_icon("mail"),
        NavigationNode::group(
            "Access Control",
            vec![
                NavigationNode::leaf("Roles", "/access/roles"),
                NavigationNode::leaf("User Permissions", "/access/permissions"),
            ],
        )
        .with_icon("shield"),
        NavigationNode::leaf("Profile", "/profile").with_icon("user"),
    ]
}

fn admin_requirements() -> PermissionRequirements {
    PermissionRequirements::new()
        .always_visible("Dashboard")
        .always_visible("Profile")
        .require("Members", "view_member")
        .require("Add Member", "add_member")
        .require("All Members", "view_member")
        .require("Recycle Bin", "view_deleted_member")
        .require("ID Transfer", "transfer_member_id")
        .require("Finance", "view_finance")
        .require("Invoices", "view_invoice")
        .require("Payments", "view_payment")
        .require("Pricing", "view_pricing")
        .require("Facilities", "view_facility")
        .require("Venues", "view_venue")
        .require("Bookings", "view_facility_booking")
        .require("Events", "view_event")
        .require("All Events", "view_event")
        .require("Tickets", "view_event_ticket")
        .require("Event Fees", "view_event_fee")
        .require("Event Media", "view_event_media")
        .require("Email", "view_email")
        .require("Compose", "send_email")
        .require("Email Lists", "view_email_list")
        .require("Access Control", "manage_roles")
        .require("Roles", "view_role")
        .require("User Permissions", "assign_permission")
}

fn accounts_menu() -> Vec<NavigationNode> {
    vec![
        NavigationNode::leaf("Dashboard", "/accounts").with_icon("home"),
        NavigationNode::group(
            "Billing",
            vec![
                NavigationNode::leaf("Invoices", "/accounts/invoices"),
                NavigationNode::leaf("Payments", "/accounts/payments"),
                NavigationNode::leaf("Due Reports", "/accounts/dues"),
            ],
        )
        .with_icon("wallet"),
        NavigationNode::leaf("Pricing", "/accounts/pricing").with_icon("tag"),
        NavigationNode::leaf("Profile", "/profile").with_icon("user"),
    ]
}

fn accounts_requirements() -> PermissionRequirements {
    PermissionRequirements::new()
        .always_visible("Dashboard")
        .always_visible("Profile")
        .require("Billing", "view_finance")
        .require("Invoices", "view_invoice")
        .require("Payments", "view_payment")
        .require("Due Reports", "view_due_report")
        .require("Pricing", "view_pricing")
}
