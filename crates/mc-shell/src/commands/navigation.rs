use tracing::Instrument;

use mc_app::usecases::{LoadedNavigation, UseCases};
use mc_app::AppDeps;
use mc_core::navigation::DashboardVariant;

/// Sidebar for the signed-in user, optionally for another dashboard
/// variant than the configured one.
pub async fn load_navigation(
    deps: &AppDeps,
    variant: Option<DashboardVariant>,
) -> LoadedNavigation {
    let deps = match variant {
        Some(variant) => AppDeps {
            dashboard_variant: variant,
            ..deps.clone()
        },
        None => deps.clone(),
    };
    let span = tracing::info_span!("command.navigation", variant = ?deps.dashboard_variant);
    UseCases::new(&deps)
        .load_navigation()
        .execute()
        .instrument(span)
        .await
}
