// SPDX-License-Identifier: PMPL-1.0-or-later
//! Configuration for accessibility-analyzer

use crate::error::{AnalyzerError, Result};
use crate::report::OutputFormat;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub rules: RulesConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Rule names to leave out of the registry, e.g. "color-contrast"
    pub disabled: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("accessibility-analyzer")
        .join("config.toml")
}

/// Load configuration; a missing file yields the defaults
pub fn load_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let content = std::fs::read_to_string(path)?;

    toml::from_str(&content)
        .map_err(|e| AnalyzerError::Config(format!("TOML parse error in {}: {}", path.display(), e)))
}

pub fn write_default_config(path: &Path) -> Result<()> {
    let config = Config::default();

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let content = toml::to_string_pretty(&config)
        .map_err(|e| AnalyzerError::Config(format!("TOML serialize error: {}", e)))?;

    std::fs::write(path, content)?;
    Ok(())
}
