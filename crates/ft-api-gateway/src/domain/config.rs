//! Gateway configuration with validation.

use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::Path;

/// Main gateway configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    /// HTTP server configuration
    pub http: HttpConfig,
    /// CORS configuration
    pub cors: CorsConfig,
    /// Request/response size limits
    pub limits: LimitsConfig,
    /// Response normalizer configuration
    pub normalizer: NormalizerConfig,
    /// Runtime behaviour (environment, demo data)
    pub runtime: RuntimeConfig,
    /// Legacy path handling
    pub routing: RoutingConfig,
}

impl GatewayConfig {
    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.http.port == 0 {
            return Err(ConfigError::InvalidPort);
        }

        if self.limits.max_request_size == 0 {
            return Err(ConfigError::InvalidLimit(
                "max_request_size cannot be 0".into(),
            ));
        }

        if self.limits.max_normalize_size == 0 {
            return Err(ConfigError::InvalidLimit(
                "max_normalize_size cannot be 0".into(),
            ));
        }

        if self.normalizer.field.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "normalizer field name cannot be empty".into(),
            ));
        }

        if self.normalizer.aliases.iter().any(|a| a == &self.normalizer.field) {
            return Err(ConfigError::Invalid(
                "normalizer alias cannot equal the field name".into(),
            ));
        }

        Ok(())
    }

    /// Get HTTP server bind address
    pub fn http_addr(&self) -> SocketAddr {
        SocketAddr::new(self.http.host, self.http.port)
    }

    /// Whether 500 responses may carry the underlying error text
    pub fn expose_error_details(&self) -> bool {
        self.runtime.environment == Environment::Development
    }

    /// Load a configuration from a JSON file; missing keys take defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("{}: {}", path.display(), e)))?;
        serde_json::from_str(&raw).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Bind address
    pub host: IpAddr,
    /// Port (default: 5000)
    pub port: u16,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::new(0, 0, 0, 0)),
            port: 5000,
        }
    }
}

/// CORS configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    /// Enable CORS
    pub enabled: bool,
    /// Allowed origins ("*" for all)
    pub allowed_origins: Vec<String>,
    /// Allowed methods
    pub allowed_methods: Vec<String>,
    /// Allowed headers
    pub allowed_headers: Vec<String>,
    /// Max age for preflight cache, seconds (0 = header omitted)
    pub max_age: u64,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            allowed_origins: vec!["*".to_string()],
            allowed_methods: ["GET", "POST", "PUT", "DELETE", "OPTIONS"]
                .iter()
                .map(|m| m.to_string())
                .collect(),
            allowed_headers: vec!["Content-Type".to_string(), "Authorization".to_string()],
            max_age: 0,
        }
    }
}

/// Size limits
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitsConfig {
    /// Max request body size in bytes (default: 1MB)
    pub max_request_size: usize,
    /// Largest response body the normalizer will buffer (default: 8MB)
    pub max_normalize_size: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_request_size: 1024 * 1024,
            max_normalize_size: 8 * 1024 * 1024,
        }
    }
}

/// Response normalizer configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizerConfig {
    /// Enable the outbound normalizer
    pub enabled: bool,
    /// Field guaranteed at the top level of every JSON object response
    pub field: String,
    /// Sub-objects that receive a copy of the top-level value
    pub aliases: Vec<String>,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            field: "blockchainAddress".to_string(),
            aliases: vec!["data".to_string(), "user".to_string()],
        }
    }
}

/// Deployment environment
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl std::str::FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "production" | "prod" => Ok(Environment::Production),
            other => Err(ConfigError::Invalid(format!("unknown environment: {}", other))),
        }
    }
}

/// Runtime configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    /// Controls error detail in 500 responses
    pub environment: Environment,
    /// Register the `testuser` demo account at startup
    pub seed_demo_user: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            environment: Environment::Development,
            seed_demo_user: true,
        }
    }
}

/// Legacy path handling
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RoutingConfig {
    /// Rewrite `/api/...` and `/api/api/...` to the unprefixed route
    pub strip_api_prefix: bool,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            strip_api_prefix: true,
        }
    }
}

/// Configuration errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    /// Port 0 is not a bindable service port
    #[error("http port cannot be 0")]
    InvalidPort,
    /// Invalid size limit
    #[error("invalid limit: {0}")]
    InvalidLimit(String),
    /// Config file could not be read
    #[error("config io error: {0}")]
    Io(String),
    /// Config file is not valid JSON for this schema
    #[error("config parse error: {0}")]
    Parse(String),
    /// General configuration error
    #[error("invalid configuration: {0}")]
    Invalid(String),
}
