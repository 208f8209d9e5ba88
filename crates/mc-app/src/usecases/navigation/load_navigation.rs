use std::sync::Arc;

use serde::Serialize;
use tracing::{error, info, info_span, warn, Instrument};

use mc_core::navigation::{filter_navigation, DashboardVariant, NavigationNode, PermissionSet};
use mc_core::ports::AuthorizationPort;

/// Sidebar tree for the signed-in user.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoadedNavigation {
    pub username: Option<String>,
    pub is_admin: bool,
    pub items: Vec<NavigationNode>,
}

/// Use case for building the permission-filtered sidebar.
///
/// Permissions are fetched once per call. If the fetch fails the user is
/// treated as holding no permissions, so only ungated entries remain.
pub struct LoadNavigation {
    authorization: Arc<dyn AuthorizationPort>,
    variant: DashboardVariant,
}

impl LoadNavigation {
    pub fn new(authorization: Arc<dyn AuthorizationPort>, variant: DashboardVariant) -> Self {
        Self {
            authorization,
            variant,
        }
    }

    pub async fn execute(&self) -> LoadedNavigation {
        let span = info_span!("usecase.load_navigation.execute", variant = ?self.variant);
        async {
            let menu = self.variant.menu();
            let requirements = self.variant.requirements();

            let unmapped = requirements.unmapped_labels(&menu);
            if !unmapped.is_empty() {
                warn!(?unmapped, "navigation labels without a permission entry are visible to everyone");
            }

            let (username, permissions) = match self.authorization.fetch_user_permissions().await {
                Ok(user) => (Some(user.username.clone()), PermissionSet::from(user)),
                Err(err) => {
                    error!(error = %err, "failed to fetch user permissions, showing ungated entries only");
                    (None, PermissionSet::empty())
                }
            };

            let items = filter_navigation(&menu, &permissions, &requirements);
            info!(
                username = username.as_deref().unwrap_or("<unknown>"),
                is_admin = permissions.is_admin(),
                granted = permissions.len(),
                top_level = items.len(),
                "navigation filtered"
            );

            LoadedNavigation {
                username,
                is_admin: permissions.is_admin(),
                items,
            }
        }
        .instrument(span)
        .await
    }
}
