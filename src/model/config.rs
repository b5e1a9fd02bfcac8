use serde::Deserialize;
use std::fs;
use std::path::Path;
use url::Url;

const ENV_CONFIG_PATH: &str = "HARASSMENT_INTEL_CONFIG_PATH";
const DEFAULT_CONFIG_PATH: &str = "config.yaml";

const ENV_OLLAMA_BASE_URL: &str = "OLLAMA_BASE_URL";
const ENV_ANALYSIS_MODEL: &str = "ANALYSIS_MODEL";
const ENV_PROVIDER_TIMEOUT_SECS: &str = "PROVIDER_TIMEOUT_SECS";

const DEFAULT_OLLAMA_BASE_URL: &str = "http://localhost:11434";
const DEFAULT_ANALYSIS_MODEL: &str = "llama2";
const DEFAULT_PROVIDER_TIMEOUT_SECS: u64 = 30;

/// Completion provider configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderConfig {
    /// Base URL of the Ollama-compatible endpoint
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Model used for analysis completions
    #[serde(default = "default_model")]
    pub model: String,
    /// Request timeout for the provider call, in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    DEFAULT_OLLAMA_BASE_URL.to_string()
}

fn default_model() -> String {
    DEFAULT_ANALYSIS_MODEL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_PROVIDER_TIMEOUT_SECS
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            model: default_model(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// YAML configuration file structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub provider: Option<ProviderConfig>,
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub provider: ProviderConfig,
    pub port: u16,
    pub host: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            provider: ProviderConfig::default(),
            port: 8080,
            host: "127.0.0.1".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment and config file
    ///
    /// Environment variables take precedence over the config file, which
    /// takes precedence over built-in defaults.
    pub fn from_env() -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(8080);

        let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());

        // Load config file
        let config_path =
            std::env::var(ENV_CONFIG_PATH).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

        let mut provider = Self::load_config_file(&config_path)
            .and_then(|cf| cf.provider)
            .unwrap_or_default();

        if let Ok(base_url) = std::env::var(ENV_OLLAMA_BASE_URL) {
            provider.base_url = base_url;
        }
        if let Ok(model) = std::env::var(ENV_ANALYSIS_MODEL) {
            provider.model = model;
        }
        if let Some(timeout) = std::env::var(ENV_PROVIDER_TIMEOUT_SECS)
            .ok()
            .and_then(|t| t.parse().ok())
        {
            provider.timeout_secs = timeout;
        }

        // An unparseable base URL would make every provider call fail;
        // fall back to the default rather than refusing to start.
        if Url::parse(&provider.base_url).is_err() {
            tracing::warn!(
                base_url = %provider.base_url,
                "Invalid provider base URL, using default"
            );
            provider.base_url = default_base_url();
        }

        Self {
            provider,
            port,
            host,
        }
    }

    /// Load configuration from YAML file
    fn load_config_file(path: &str) -> Option<ConfigFile> {
        let path = Path::new(path);

        if !path.exists() {
            tracing::debug!(path = %path.display(), "Config file not found, using defaults");
            return None;
        }

        match fs::read_to_string(path) {
            Ok(contents) => {
                // Handle empty file
                let contents = contents.trim();
                if contents.is_empty() {
                    tracing::debug!(path = %path.display(), "Config file is empty, using defaults");
                    return Some(ConfigFile::default());
                }

                match serde_yaml::from_str(contents) {
                    Ok(config) => {
                        tracing::info!(path = %path.display(), "Loaded configuration from file");
                        Some(config)
                    }
                    Err(e) => {
                        tracing::warn!(path = %path.display(), error = %e, "Failed to parse config file, using defaults");
                        None
                    }
                }
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Failed to read config file, using defaults");
                None
            }
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
