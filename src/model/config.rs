use serde::Deserialize;
use std::fs;
use std::path::Path;

const ENV_CONFIG_PATH: &str = "SHIELDCHECK_CONFIG_PATH";
const DEFAULT_CONFIG_PATH: &str = "config.yaml";

const DEFAULT_MODEL: &str = "gemini-2.5-flash";
const DEFAULT_TIMEOUT_SECS: u64 = 45;

/// Narrative generation settings
#[derive(Debug, Clone, Deserialize)]
pub struct GenerationConfig {
    /// Model used for report generation
    #[serde(default = "default_model")]
    pub model: String,
    /// Wall-clock budget for one external call, in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// YAML configuration file structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub generation: Option<GenerationConfig>,
}

/// Application configuration
///
/// The API credential is deliberately not part of this struct: it is read
/// from the environment at startup, handed straight to the LLM client, and
/// never logged or echoed.
#[derive(Debug, Clone)]
pub struct Config {
    pub generation: GenerationConfig,
    pub port: u16,
    pub host: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            generation: GenerationConfig::default(),
            port: 8080,
            host: "127.0.0.1".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment and config file
    pub fn from_env() -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(8080);

        let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());

        let config_path =
            std::env::var(ENV_CONFIG_PATH).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

        let mut generation = Self::load_config_file(&config_path)
            .and_then(|cf| cf.generation)
            .unwrap_or_default();

        // Env override wins over the file
        if let Ok(model) = std::env::var("REPORT_MODEL") {
            if !model.trim().is_empty() {
                generation.model = model;
            }
        }

        Self {
            generation,
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let config = Config::default();
        assert_eq!(config.generation.model, DEFAULT_MODEL);
        assert_eq!(config.generation.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert_eq!(config.bind_addr(), "127.0.0.1:8080");
    }

    #[test]
    fn yaml_fills_missing_fields_with_defaults() {
        let cf: ConfigFile =
            serde_yaml::from_str("generation:\n  model: gemini-2.0-flash\n").unwrap();
        let generation = cf.generation.unwrap();
        assert_eq!(generation.model, "gemini-2.0-flash");
        assert_eq!(generation.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }
}
