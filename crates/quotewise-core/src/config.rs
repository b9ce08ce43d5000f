use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if any value is present but invalid.
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
/// Returns `ConfigError` if any value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the process environment so tests can pass a `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let bind_addr = or_default("QUOTEWISE_BIND_ADDR", "0.0.0.0:3000")
        .parse::<SocketAddr>()
        .map_err(|e| invalid("QUOTEWISE_BIND_ADDR", e.to_string()))?;

    let rate_limit_max_requests = or_default("QUOTEWISE_RATE_LIMIT_MAX_REQUESTS", "120")
        .parse::<usize>()
        .map_err(|e| invalid("QUOTEWISE_RATE_LIMIT_MAX_REQUESTS", e.to_string()))?;

    let rate_limit_window_secs = or_default("QUOTEWISE_RATE_LIMIT_WINDOW_SECS", "60")
        .parse::<u64>()
        .map_err(|e| invalid("QUOTEWISE_RATE_LIMIT_WINDOW_SECS", e.to_string()))?;
    if rate_limit_window_secs == 0 {
        return Err(invalid(
            "QUOTEWISE_RATE_LIMIT_WINDOW_SECS",
            "window must be at least 1 second".to_string(),
        ));
    }

    let env = parse_environment(&or_default("QUOTEWISE_ENV", "development"));
    let log_level = or_default("QUOTEWISE_LOG_LEVEL", "info");
    let rate_card_path = lookup("QUOTEWISE_RATE_CARD_PATH")
        .ok()
        .filter(|p| !p.trim().is_empty())
        .map(PathBuf::from);

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        rate_card_path,
        rate_limit_max_requests,
        rate_limit_window_secs,
    })
}

/// Parse a string into an `Environment` variant.
///
/// Unrecognized values default to `Environment::Development`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
