//! Configuration loading.
//!
//! Project defaults live in a `css-reduce.config.json` next to the
//! stylesheet sources. Command-line flags override config values.

use camino::Utf8Path;
use serde::Deserialize;
use std::fs;

const CONFIG_FILE_NAMES: &[&str] = &["css-reduce.config.json", ".css-reducerc.json"];

/// Project configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReduceConfig {
    /// Class names to always retain.
    pub safelist: Vec<String>,

    /// Whether descendants of safelisted/dynamic-state selectors are
    /// preserved. Defaults to true.
    pub preserve_children: Option<bool>,

    /// Overall deadline in seconds.
    pub timeout_secs: Option<u64>,
}

impl ReduceConfig {
    /// Loads configuration from the given directory.
    ///
    /// A missing file yields the defaults; an unparsable file yields the
    /// defaults with a warning, so a broken config never blocks a run.
    pub fn load(project_root: &Utf8Path) -> Self {
        for config_file in CONFIG_FILE_NAMES {
            let config_path = project_root.join(config_file);
            if !config_path.exists() {
                continue;
            }
            match Self::parse_config_file(&config_path) {
                Ok(config) => return config,
                Err(e) => {
                    eprintln!("Warning: failed to parse {}: {}", config_path, e);
                    return Self::default();
                }
            }
        }

        Self::default()
    }

    fn parse_config_file(path: &Utf8Path) -> Result<Self, String> {
        let content = fs::read_to_string(path).map_err(|e| e.to_string())?;
        serde_json::from_str(&content).map_err(|e| e.to_string())
    }
}
