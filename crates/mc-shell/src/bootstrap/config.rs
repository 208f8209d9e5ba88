//! # Configuration Loader / 配置加载器
//!
//! Reads `config.toml`, then lets the environment override the values that
//! differ between machines. A `.env` file in the working directory is
//! loaded first when present.
//!
//! | Variable          | Overrides          |
//! |-------------------|--------------------|
//! | `MC_API_BASE_URL` | `api.base_url`     |
//! | `MC_API_TOKEN`    | `api.auth_token`   |
//! | `MC_LOG_DIR`      | `logging.log_dir`  |

use std::path::{Path, PathBuf};

use anyhow::Context;
use mc_core::config::AppConfig;

pub const ENV_API_BASE_URL: &str = "MC_API_BASE_URL";
pub const ENV_API_TOKEN: &str = "MC_API_TOKEN";
pub const ENV_LOG_DIR: &str = "MC_LOG_DIR";

/// `<config dir>/member-console/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("member-console").join("config.toml"))
}

/// Load configuration from a TOML file
/// 从 TOML 文件加载配置
///
/// Missing sections and keys take their defaults.
pub fn load_config(config_path: &Path) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    toml_value
        .try_into()
        .context("Config file does not match the expected layout")
}

/// Explicit path must exist; the default path is optional.
pub fn resolve_config(explicit: Option<&Path>) -> anyhow::Result<AppConfig> {
    let _ = dotenvy::dotenv();

    let mut config = match explicit {
        Some(path) => load_config(path)?,
        None => match default_config_path() {
            Some(path) if path.exists() => load_config(&path)?,
            _ => AppConfig::default(),
        },
    };
    apply_env_overrides(&mut config, |key| std::env::var(key).ok());
    Ok(config)
}

/// Blank values are ignored.
pub fn apply_env_overrides(config: &mut AppConfig, lookup: impl Fn(&str) -> Option<String>) {
    let lookup = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

    if let Some(base_url) = lookup(ENV_API_BASE_URL) {
        config.api.base_url = base_url;
    }
    if let Some(token) = lookup(ENV_API_TOKEN) {
        config.api.auth_token = Some(token);
    }
    if let Some(dir) = lookup(ENV_LOG_DIR) {
        config.logging.log_dir = Some(PathBuf::from(dir));
    }
}
