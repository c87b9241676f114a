use config::{Config, ConfigError, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application configuration loaded from config.toml or environment variables
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub registry: RegistryConfig,
    pub report: ReportConfig,
}

/// NPM registry statistics API settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryConfig {
    pub base_url: String,
    pub timeout_seconds: u64,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.npmjs.org".to_string(),
            timeout_seconds: 30,
        }
    }
}

/// Report output settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Directory proof documents are written into
    pub output_dir: PathBuf,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
        }
    }
}

impl AppConfig {
    /// Load configuration from config.toml file and environment variables
    /// Environment variables take precedence over file configuration
    pub fn load() -> Result<Self, ConfigError> {
        let registry = RegistryConfig::default();
        let report = ReportConfig::default();

        let config = Config::builder()
            // Start with default values
            .set_default("registry.base_url", registry.base_url)?
            .set_default("registry.timeout_seconds", registry.timeout_seconds)?
            .set_default(
                "report.output_dir",
                report.output_dir.to_string_lossy().to_string(),
            )?
            // Load from config.toml if it exists
            .add_source(File::with_name("config").required(false))
            // NPM_PROOF_REGISTRY__BASE_URL etc. override file values
            .add_source(config::Environment::with_prefix("NPM_PROOF").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
