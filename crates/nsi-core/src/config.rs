use crate::app_config::AppConfig;
use crate::ConfigError;

/// Storefront root used when `NSI_RETAILER_ROOT` is unset. The value is
/// validated and reduced to its origin by the client, not here.
pub const DEFAULT_RETAILER_ROOT: &str = "http://plus.pl";

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
/// Decoupled from the process environment so it can be tested with a plain
/// `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

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

    let log_level = or_default("NSI_LOG_LEVEL", "info");
    let endpoints_path = PathBuf::from(or_default(
        "NSI_ENDPOINTS_PATH",
        "./config/endpoints.yaml",
    ));
    let request_timeout_secs = parse_u64("NSI_REQUEST_TIMEOUT_SECS", "30")?;
    if request_timeout_secs == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "NSI_REQUEST_TIMEOUT_SECS".to_string(),
            reason: "must be greater than zero".to_string(),
        });
    }
    let user_agent = or_default("NSI_USER_AGENT", "nsicrawler/0.1 (catalogue-sync)");
    let retailer_root = or_default("NSI_RETAILER_ROOT", DEFAULT_RETAILER_ROOT)
        .trim()
        .to_string();

    Ok(AppConfig {
        log_level,
        endpoints_path,
        request_timeout_secs,
        user_agent,
        retailer_root,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
