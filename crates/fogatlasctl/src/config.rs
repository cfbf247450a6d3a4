//! Configuration loading and types

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Environment variable naming an explicit configuration file
pub const CONFIG_ENV: &str = "FOGATLASCTL_CONFIG";

/// Settings read from `fogatlasctl.toml`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Orchestrator endpoint used when `--endpoint` is not given
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            log_level: default_log_level(),
        }
    }
}

fn default_endpoint() -> String {
    "127.0.0.1:8080".to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Config {
    /// Load configuration from file
    ///
    /// # Errors
    /// Returns error if file cannot be read or parsed
    pub fn load(path: &Path) -> eyre::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load from default paths or use defaults
    ///
    /// # Errors
    /// Returns error if a configuration file exists but is unreadable or invalid
    pub fn load_default() -> eyre::Result<Self> {
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            return Self::load(Path::new(&path));
        }

        let mut paths = vec![PathBuf::from("fogatlasctl.toml")];
        if let Some(dir) = dirs::config_dir() {
            paths.push(dir.join("fogatlasctl/config.toml"));
        }

        for path in paths {
            if path.exists() {
                return Self::load(&path);
            }
        }

        Ok(Config::default())
    }

    /// Endpoint to talk to, preferring the one given on the command line
    pub fn endpoint<'a>(&'a self, flag: Option<&'a str>) -> &'a str {
        flag.unwrap_or(&self.endpoint)
    }
}
