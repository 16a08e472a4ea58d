use std::path::PathBuf;

use crate::app_config::AppConfig;
use crate::ConfigError;

/// Environment variable holding the Places API (New) key.
pub const API_KEY_VAR: &str = "GOOGLE_PLACES_API_NEW";

const MIN_UTC_OFFSET_HOURS: i32 = -12;
const MAX_UTC_OFFSET_HOURS: i32 = 14;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
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
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so tests can drive it with a plain
/// `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let require_non_empty = |var: &str| -> Result<String, ConfigError> {
        let value = lookup(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))?;
        if value.trim().is_empty() {
            return Err(ConfigError::EmptyEnvVar(var.to_string()));
        }
        Ok(value)
    };

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

    let places_api_key = require_non_empty(API_KEY_VAR)?;
    let places_base_url = or_default("PLACEMD_PLACES_BASE_URL", "https://places.googleapis.com/");
    let language_code = or_default("PLACEMD_LANGUAGE", "ja");
    let request_timeout_secs = parse_u64("PLACEMD_REQUEST_TIMEOUT_SECS", "10")?;
    let user_agent = or_default("PLACEMD_USER_AGENT", "placemd/0.1 (place-report)");
    let output_dir = PathBuf::from(or_default("PLACEMD_OUTPUT_DIR", "outputs"));
    let utc_offset_hours = parse_utc_offset(&or_default("PLACEMD_UTC_OFFSET_HOURS", "9"))?;
    let log_level = or_default("PLACEMD_LOG_LEVEL", "info");

    Ok(AppConfig {
        places_api_key,
        places_base_url,
        language_code,
        request_timeout_secs,
        user_agent,
        output_dir,
        utc_offset_hours,
        log_level,
    })
}

/// Parse a whole-hour UTC offset such as `9`, `+9` or `-5`.
fn parse_utc_offset(raw: &str) -> Result<i32, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidEnvVar {
        var: "PLACEMD_UTC_OFFSET_HOURS".to_string(),
        reason,
    };

    let hours = raw
        .trim()
        .trim_start_matches('+')
        .parse::<i32>()
        .map_err(|e| invalid(e.to_string()))?;

    if !(MIN_UTC_OFFSET_HOURS..=MAX_UTC_OFFSET_HOURS).contains(&hours) {
        return Err(invalid(format!(
            "{hours} is outside {MIN_UTC_OFFSET_HOURS}..={MAX_UTC_OFFSET_HOURS}"
        )));
    }
    Ok(hours)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
