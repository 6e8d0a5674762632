use serde::Deserialize;
use std::fs;

/// Fetch settings loaded from a TOML or JSON file.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base directory overriding the environment-derived cache root.
    pub data_dir: Option<String>,
    /// Percentage step between progress reports during downloads.
    pub progress_update_percentage: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: None,
            progress_update_percentage: 5,
        }
    }
}

impl Config {
    /// Load configuration from the given path.  Supports TOML or JSON based
    /// on the file extension. Returns `None` if reading or parsing fails.
    pub fn from_path(path: &str) -> Option<Self> {
        let Ok(content) = fs::read_to_string(path) else {
            return None;
        };
        if path.ends_with(".json") {
            serde_json::from_str(&content).ok()
        } else {
            toml::from_str(&content).ok()
        }
    }
}
