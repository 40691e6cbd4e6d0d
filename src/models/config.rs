use serde::Deserialize;
use validator::Validate;

/// Backend the dashboard talks to when nothing else is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";

/// Seconds between two aggregate (stats, categories, recent events) loads.
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 300;

/// Configuration options of the dashboard service.
#[derive(Clone, Debug, Deserialize, Validate)]
pub struct ServerConfig {
    /// Interface the HTTP server binds to.
    #[serde(default = "default_address")]
    pub address: String,
    /// Port the HTTP server binds to.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Base URL of the scraping backend REST API.
    #[validate(url)]
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    /// Glob-able directory holding the tera templates.
    #[serde(default = "default_templates_dir")]
    pub templates_dir: String,
    /// Directory served under `/assets`.
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
    #[validate(range(min = 1))]
    #[serde(default = "default_poll_interval_secs")]
    pub poll_interval_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: default_address(),
            port: default_port(),
            api_base_url: default_api_base_url(),
            templates_dir: default_templates_dir(),
            static_dir: default_static_dir(),
            poll_interval_secs: default_poll_interval_secs(),
        }
    }
}

fn default_address() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_templates_dir() -> String {
    "templates".to_string()
}

fn default_static_dir() -> String {
    "static".to_string()
}

fn default_poll_interval_secs() -> u64 {
    DEFAULT_POLL_INTERVAL_SECS
}

#[cfg(feature = "server")]
#[derive(Debug, thiserror::Error)]
pub enum ConfigLoadError {
    #[error("Failed to read configuration: {0}")]
    Source(#[from] config::ConfigError),
    #[error("Invalid configuration: {0}")]
    Validation(#[from] validator::ValidationErrors),
}

#[cfg(feature = "server")]
impl ServerConfig {
    /// Layers `default.yaml`, an optional `local.yaml` (both under
    /// `config_dir`) and `APP__*` environment variables, then validates.
    pub fn load(config_dir: &std::path::Path) -> Result<Self, ConfigLoadError> {
        use config::{Config, Environment, File};

        let settings = Config::builder()
            .add_source(File::from(config_dir.join("default.yaml")).required(false))
            .add_source(File::from(config_dir.join("local.yaml")).required(false))
            .add_source(Environment::with_prefix("APP").separator("__"))
            .build()?;

        let config: ServerConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = ServerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.api_base_url, "http://localhost:5000");
        assert_eq!(config.poll_interval_secs, 300);
    }

    #[test]
    fn rejects_invalid_backend_url_and_zero_interval() {
        let config = ServerConfig {
            api_base_url: "not a url".into(),
            poll_interval_secs: 0,
            ..ServerConfig::default()
        };

        let errors = config.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("api_base_url"));
        assert!(fields.contains_key("poll_interval_secs"));
    }

    #[cfg(feature = "server")]
    #[test]
    fn loads_yaml_over_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("default.yaml"),
            "port: 9090\napi_base_url: \"http://scraper:5000\"\n",
        )
        .unwrap();
        std::fs::write(dir.path().join("local.yaml"), "poll_interval_secs: 60\n").unwrap();

        let config = ServerConfig::load(dir.path()).unwrap();

        assert_eq!(config.port, 9090);
        assert_eq!(config.api_base_url, "http://scraper:5000");
        assert_eq!(config.poll_interval_secs, 60);
        assert_eq!(config.address, "127.0.0.1");
    }

    #[cfg(feature = "server")]
    #[test]
    fn load_rejects_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("default.yaml"), "poll_interval_secs: 0\n").unwrap();

        assert!(matches!(
            ServerConfig::load(dir.path()),
            Err(ConfigLoadError::Validation(_))
        ));
    }
}
