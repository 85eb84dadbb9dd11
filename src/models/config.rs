use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Application configuration loaded from config.yaml
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Colour used when a request omits `color`
    pub default_color: String,

    /// Scale name used when a request omits `name`
    pub default_name: String,

    /// Export format used when a request omits `format`
    pub default_format: String,

    /// `Cache-Control` max-age for API responses, in seconds
    pub cache_max_age: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_color: "#FF4400".to_string(),
            default_name: "primary".to_string(),
            default_format: "css".to_string(),
            cache_max_age: 86400, // one day
        }
    }
}

impl AppConfig {
    /// Load configuration from the file named by `CONFIG_FILE`, or defaults
    /// if the variable is not set.
    pub fn from_env() -> Self {
        let path = std::env::var("CONFIG_FILE").ok().map(PathBuf::from);
        Self::load(path.as_deref())
    }

    /// Load configuration from a YAML file.
    ///
    /// A missing, unreadable or invalid file is logged and replaced by the
    /// defaults; the server always starts.
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            tracing::info!("No CONFIG_FILE set, using built-in defaults");
            return Self::default();
        };

        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_yaml(&content) {
                Ok(config) => {
                    tracing::info!(
                        path = %path.display(),
                        default_color = %config.default_color,
                        default_format = %config.default_format,
                        cache_max_age = config.cache_max_age,
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(path = %path.display(), %e, "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(path = %path.display(), %e, "Failed to read config, using defaults");
                Self::default()
            }
        }
    }

    /// Parse configuration from a YAML string. Missing keys take their
    /// default values; an empty document yields the defaults.
    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }

    /// `Cache-Control` header value for API responses.
    pub fn cache_control(&self) -> String {
        if self.cache_max_age == 0 {
            "no-cache".to_string()
        } else {
            format!("public, max-age={}", self.cache_max_age)
        }
    }
}
