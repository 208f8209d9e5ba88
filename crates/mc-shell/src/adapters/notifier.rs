use mc_core::errors::{Notification, NotificationLevel};
use mc_core::ports::NotificationPort;

/// Terminal notification surface: every notification becomes a log event.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl NotificationPort for TracingNotifier {
    fn notify(&self, notification: Notification) {
        let Notification { level, title, text } = notification;
        match level {
            NotificationLevel::Success => tracing::info!(%title, %text, "notification"),
            NotificationLevel::Info => tracing::info!(%title, %text, "notification"),
            NotificationLevel::Error => tracing::error!(%title, %text, "notification"),
        }
    }
}
