pub mod app_config;

pub use app_config::{ApiConfig, AppConfig, DashboardConfig, LoggingConfig};
