use crate::app_config::AppConfig;
use crate::ConfigError;

pub(crate) const DEFAULT_API_BASE: &str = "https://lrs-backend-production.up.railway.app";
pub(crate) const DEFAULT_USER_AGENT: &str = "lrs/0.1 (local-restaurant-scout)";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every variable has a default, so an empty environment is valid.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let api_base = or_default("LRS_API_BASE", DEFAULT_API_BASE);
    if !(api_base.starts_with("http://") || api_base.starts_with("https://")) {
        return Err(ConfigError::InvalidEnvVar {
            var: "LRS_API_BASE".to_string(),
            reason: format!("expected an http(s) URL, got '{api_base}'"),
        });
    }

    let log_level = or_default("LRS_LOG_LEVEL", "info");
    let request_timeout_secs = parse_u64("LRS_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("LRS_USER_AGENT", DEFAULT_USER_AGENT);

    Ok(AppConfig {
        api_base,
        log_level,
        request_timeout_secs,
        user_agent,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
