use crate::client_config::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_USER_AGENT};
use crate::ConfigError;

/// Load client configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_client_config() -> Result<ClientConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_client_config_from_env()
}

/// Load client configuration from environment variables already in the process.
///
/// Unlike [`load_client_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_client_config_from_env() -> Result<ClientConfig, ConfigError> {
    build_client_config(|key| std::env::var(key))
}

/// Build client configuration using the provided env-var lookup function.
///
/// Every variable is optional; absent variables take the [`ClientConfig`]
/// defaults.
fn build_client_config<F>(lookup: F) -> Result<ClientConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.trim()
            .parse::<u64>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let base_url = or_default("PLACEJOB_BASE_URL", DEFAULT_BASE_URL);
    if base_url.trim().is_empty() {
        return Err(ConfigError::InvalidEnvVar {
            var: "PLACEJOB_BASE_URL".to_string(),
            reason: "must not be empty".to_string(),
        });
    }

    let total_timeout_secs = parse_u64("PLACEJOB_TOTAL_TIMEOUT_SECS", "300")?;
    let poll_interval_secs = parse_u64("PLACEJOB_POLL_INTERVAL_SECS", "5")?;
    let request_timeout_secs = parse_u64("PLACEJOB_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("PLACEJOB_USER_AGENT", DEFAULT_USER_AGENT);
    let log_level = or_default("PLACEJOB_LOG_LEVEL", "info");

    Ok(ClientConfig {
        base_url,
        total_timeout_secs,
        poll_interval_secs,
        request_timeout_secs,
        user_agent,
        log_level,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
