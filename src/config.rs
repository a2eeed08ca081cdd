use anyhow::Result;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure for Leaddesk
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LeaddeskConfig {
    /// Backend API settings
    pub backend: BackendConfig,
    /// Session cache settings
    pub session: SessionConfig,
    /// Observability settings
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BackendConfig {
    /// Base URL of the lead-management REST API
    pub base_url: String,
    /// Request timeout applied by whatever transport the caller wires in
    pub timeout_seconds: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SessionConfig {
    /// Path of the JSON file holding the cached user profile + token
    pub store_path: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ObservabilityConfig {
    /// Log level directive (tracing EnvFilter syntax)
    pub log_level: String,
    /// Emit JSON log lines instead of human-readable ones
    pub json_logs: bool,
}

impl Default for LeaddeskConfig {
    fn default() -> Self {
        Self {
            backend: BackendConfig {
                base_url: "http://localhost:5000/api".to_string(),
                timeout_seconds: 30,
            },
            session: SessionConfig {
                store_path: ".leaddesk/session.json".to_string(),
            },
            observability: ObservabilityConfig {
                log_level: "info".to_string(),
                json_logs: false,
            },
        }
    }
}

impl LeaddeskConfig {
    /// Load configuration with precedence:
    /// 1. Default values
    /// 2. Configuration file (leaddesk.toml)
    /// 3. Environment variables (prefixed with LEADDESK_)
    pub fn load() -> Result<Self> {
        let defaults = LeaddeskConfig::default();
        let mut builder = Config::builder()
            .set_default("backend.base_url", defaults.backend.base_url)?
            .set_default("backend.timeout_seconds", defaults.backend.timeout_seconds)?
            .set_default("session.store_path", defaults.session.store_path)?
            .set_default("observability.log_level", defaults.observability.log_level)?
            .set_default("observability.json_logs", defaults.observability.json_logs)?;

        if Path::new("leaddesk.toml").exists() {
            builder = builder.add_source(File::with_name("leaddesk"));
        }

        builder = builder.add_source(
            Environment::with_prefix("LEADDESK")
                .separator("_")
                .try_parsing(true),
        );

        let config = builder.build()?;
        Ok(config.try_deserialize()?)
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let toml_content = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_content)?;
        Ok(())
    }
}
