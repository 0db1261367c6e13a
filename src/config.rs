//! Configuration handling for template roots.
//! A template root may carry a `kits.json`, `kits.yml` or `kits.yaml` file tuning the
//! scaffolder; every key is optional.

use std::path::Path;

use globset::{Glob, GlobSet, GlobSetBuilder};
use log::debug;
use serde::Deserialize;

use crate::constants::CONFIG_FILES;
use crate::error::Result;

/// Settings read from the template root's configuration file.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct KitsConfig {
    /// Text shown when the tool starts.
    pub banner: String,
    /// Project name proposed when none is given on the command line.
    pub default_project_name: String,
    /// Key written into the generated environment file.
    pub env_key: String,
    /// File suffix marking placeholder files.
    pub placeholder_suffix: String,
    /// Glob patterns for layer files that are never copied.
    pub ignore: Vec<String>,
}

impl Default for KitsConfig {
    fn default() -> Self {
        Self {
            banner: "Template Kits - scaffold your next project".to_string(),
            default_project_name: "template-kits".to_string(),
            env_key: "VITE_APP_TITLE".to_string(),
            placeholder_suffix: ".j2".to_string(),
            ignore: vec!["**/.DS_Store".to_string()],
        }
    }
}

impl KitsConfig {
    /// Compiles the ignore patterns into a single matcher.
    pub fn ignore_set(&self) -> Result<GlobSet> {
        let mut builder = GlobSetBuilder::new();
        for pattern in &self.ignore {
            builder.add(Glob::new(pattern)?);
        }
        Ok(builder.build()?)
    }
}

/// Parses configuration content, trying JSON first and YAML second.
pub fn parse_config(content: &str) -> Result<KitsConfig> {
    match serde_json::from_str(content) {
        Ok(config) => Ok(config),
        Err(_) => Ok(serde_yaml::from_str(content)?),
    }
}

/// Loads the configuration of a template root, falling back to defaults when it has none.
pub fn get_config<P: AsRef<Path>>(template_root: P) -> Result<KitsConfig> {
    for file in CONFIG_FILES {
        let config_path = template_root.as_ref().join(file);
        if config_path.exists() {
            debug!("Loading configuration from {}", config_path.display());
            let content = std::fs::read_to_string(&config_path)?;
            return parse_config(&content);
        }
    }

    debug!("No configuration file found (tried: {}), using defaults", CONFIG_FILES.join(", "));
    Ok(KitsConfig::default())
}
