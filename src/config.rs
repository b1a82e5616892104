use axum::http::HeaderValue;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Service configuration
///
/// Every section has serde defaults, so the service runs without a config
/// file; the file and `LIBRARY_API`-prefixed environment variables override
/// them.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub metrics: MetricsConfig,
    pub docs: DocsConfig,
    pub cors: CorsConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub log_level: String,
    /// "text" or "json"
    pub log_format: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            log_level: "info".to_string(),
            log_format: "text".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct MetricsConfig {
    pub enabled: bool,
    pub endpoint: String,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            endpoint: "/metrics".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DocsConfig {
    pub enabled: bool,
    /// Base path of the documentation routes; the OpenAPI document is
    /// served under `<path>/openapi.yaml`
    pub path: String,
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            path: "/docs".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct CorsConfig {
    /// Origins allowed by the CORS layer; an empty list allows any origin
    pub allowed_origins: Vec<String>,
}

/// Load configuration from a TOML file and the environment
///
/// The file is optional; `LIBRARY_API`-prefixed environment variables with
/// `__` separators (e.g. `LIBRARY_API_SERVER__PORT=8080`) take precedence
/// over it.
pub fn load_config(path: &Path) -> anyhow::Result<Config> {
    let settings = config::Config::builder()
        .add_source(config::File::from(path).required(false))
        .add_source(config::Environment::with_prefix("LIBRARY_API").separator("__"))
        .build()?;

    let cfg: Config = settings.try_deserialize()?;
    validate_config(&cfg)?;

    Ok(cfg)
}

pub fn validate_config(cfg: &Config) -> anyhow::Result<()> {
    match cfg.server.log_format.as_str() {
        "text" | "json" => {}
        other => anyhow::bail!(
            "Invalid log format '{}': expected 'text' or 'json'",
            other
        ),
    }

    if !cfg.metrics.endpoint.starts_with('/') {
        anyhow::bail!(
            "Metrics endpoint '{}' must start with '/'",
            cfg.metrics.endpoint
        );
    }

    if !cfg.docs.path.starts_with('/') || cfg.docs.path.ends_with('/') {
        anyhow::bail!(
            "Docs path '{}' must start with '/' and have no trailing slash",
            cfg.docs.path
        );
    }

    for origin in &cfg.cors.allowed_origins {
        if HeaderValue::from_str(origin).is_err() {
            anyhow::bail!("Invalid CORS origin '{}'", origin);
        }
    }

    Ok(())
}
