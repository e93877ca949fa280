use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use anyhow::{Context, Result};
use std::fs;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String { common::DEFAULT_API_URL.to_string() }

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    pub output: Option<PathBuf>,
}

fn default_log_level() -> String { common::DEFAULT_LOG_LEVEL.to_string() }

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            output: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Detect file type by extension and load
    pub fn from_file(path: &Path) -> Result<Self> {
        let ext = path.extension()
            .and_then(|e| e.to_str())
            .unwrap_or("");

        let parse: fn(&str) -> Result<Self> = match ext {
            "yaml" | "yml" => Self::from_yaml_str,
            "toml" => Self::from_toml_str,
            _ => return Err(anyhow::anyhow!("Unsupported config file format. Use .yaml, .yml, or .toml")),
        };

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        parse(&content).with_context(|| format!("Failed to parse config file: {:?}", path))
    }

    /// Explicit path, then the system-wide file if present, then defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::from_file(path);
        }
        let system = Path::new(common::DEFAULT_CONFIG_PATH);
        if system.exists() {
            return Self::from_file(system);
        }
        Ok(Self::default())
    }

    /// Apply command-line overrides on top of file values.
    pub fn apply_overrides(&mut self, api_url: Option<String>, log_level: Option<String>) {
        if let Some(url) = api_url {
            self.api.base_url = url;
        }
        if let Some(level) = log_level {
            self.logging.level = level;
        }
        self.api.base_url = self.api.base_url.trim_end_matches('/').to_string();
    }
}
