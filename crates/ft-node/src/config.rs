//! Configuration loading: defaults, optional JSON file, environment overrides.

use anyhow::{Context, Result};
use ft_api_gateway::{Environment, GatewayConfig};
use tracing::{info, warn};

/// Path of a JSON config file
pub const ENV_CONFIG: &str = "FT_CONFIG";
pub const ENV_HTTP_HOST: &str = "FT_HTTP_HOST";
pub const ENV_HTTP_PORT: &str = "FT_HTTP_PORT";
pub const ENV_ENVIRONMENT: &str = "FT_ENVIRONMENT";
pub const ENV_SEED_DEMO_USER: &str = "FT_SEED_DEMO_USER";

/// Load configuration from the process environment
pub fn load_config() -> Result<GatewayConfig> {
    load_config_from(|key| std::env::var(key).ok())
}

/// Load configuration using `lookup` for environment variables
pub fn load_config_from<F>(lookup: F) -> Result<GatewayConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match lookup(ENV_CONFIG) {
        Some(path) => {
            info!(path = %path, "Loading configuration file");
            GatewayConfig::from_json_file(&path)
                .with_context(|| format!("failed to load config from {}", path))?
        }
        None => GatewayConfig::default(),
    };

    if let Some(host) = lookup(ENV_HTTP_HOST) {
        match host.parse() {
            Ok(h) => config.http.host = h,
            Err(_) => warn!(value = %host, "{} is not an IP address, ignoring", ENV_HTTP_HOST),
        }
    }

    if let Some(port) = lookup(ENV_HTTP_PORT) {
        match port.parse() {
            Ok(p) => config.http.port = p,
            Err(_) => warn!(value = %port, "{} is not a port number, ignoring", ENV_HTTP_PORT),
        }
    }

    if let Some(env) = lookup(ENV_ENVIRONMENT) {
        match env.parse::<Environment>() {
            Ok(e) => config.runtime.environment = e,
            Err(e) => warn!(error = %e, "ignoring {}", ENV_ENVIRONMENT),
        }
    }

    if let Some(flag) = lookup(ENV_SEED_DEMO_USER) {
        match parse_flag(&flag) {
            Some(b) => config.runtime.seed_demo_user = b,
            None => warn!(value = %flag, "{} is not a boolean, ignoring", ENV_SEED_DEMO_USER),
        }
    }

    config.validate().context("invalid configuration")?;
    Ok(config)
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
