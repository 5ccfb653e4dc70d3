use crate::app_config::{AppConfig, Environment, ScorerKind};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is set to an invalid value.
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
/// Returns `ConfigError` if a variable is set to an invalid value.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every variable is optional. Parsing is decoupled from the process
/// environment so it can be tested with a plain `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    // Blank credentials count as absent.
    let optional = |var: &str| -> Option<String> {
        lookup(var)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        or_default(var, default)
            .parse::<SocketAddr>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        or_default(var, default)
            .parse::<u32>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        or_default(var, default)
            .parse::<u64>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_f32 = |var: &str, default: &str| -> Result<f32, ConfigError> {
        let value = or_default(var, default)
            .parse::<f32>()
            .map_err(|e| invalid(var, e.to_string()))?;
        if value.is_finite() {
            Ok(value)
        } else {
            Err(invalid(var, "must be a finite number".to_string()))
        }
    };

    let env = parse_environment(&or_default("GOODNEWS_ENV", "development"));
    let bind_addr = parse_addr("GOODNEWS_BIND_ADDR", "0.0.0.0:3000")?;
    let log_level = or_default("GOODNEWS_LOG_LEVEL", "info");

    let newsapi_key = optional("NEWSAPI_KEY");
    let client_api_key = optional("GOODNEWS_CLIENT_API_KEY");
    let always_use_proxy = parse_bool(&or_default("GOODNEWS_ALWAYS_USE_PROXY", "false"))
        .map_err(|reason| invalid("GOODNEWS_ALWAYS_USE_PROXY", reason))?;

    let proxy_url = or_default("GOODNEWS_PROXY_URL", "http://localhost:3000/api/news");
    let upstream_base_url = or_default("GOODNEWS_UPSTREAM_BASE_URL", "https://newsapi.org/v2");

    let page_size = parse_u32("GOODNEWS_PAGE_SIZE", "100")?;
    if page_size == 0 {
        return Err(invalid("GOODNEWS_PAGE_SIZE", "must be at least 1".to_string()));
    }
    let request_timeout_secs = parse_u64("GOODNEWS_REQUEST_TIMEOUT_SECS", "15")?;
    if request_timeout_secs == 0 {
        return Err(invalid(
            "GOODNEWS_REQUEST_TIMEOUT_SECS",
            "must be at least 1".to_string(),
        ));
    }
    let user_agent = or_default("GOODNEWS_USER_AGENT", "goodnews/0.1 (positive-news)");

    let scorer = or_default("GOODNEWS_SCORER", "lexicon")
        .parse::<ScorerKind>()
        .map_err(|reason| invalid("GOODNEWS_SCORER", reason))?;
    let positive_threshold = parse_f32("GOODNEWS_POSITIVE_THRESHOLD", "1.0")?;

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        newsapi_key,
        client_api_key,
        always_use_proxy,
        proxy_url,
        upstream_base_url,
        page_size,
        request_timeout_secs,
        user_agent,
        scorer,
        positive_threshold,
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

fn parse_bool(s: &str) -> Result<bool, String> {
    match s.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" | "" => Ok(false),
        other => Err(format!("expected a boolean, got '{other}'")),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
