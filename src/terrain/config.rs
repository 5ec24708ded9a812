// src/terrain/config.rs

use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Generator parameters as loaded from a TOML file. Every field is
/// optional in the file; missing fields take the generator defaults.
#[derive(Clone, Debug, Deserialize)]
pub struct GeneratorConfig {
    #[serde(default = "default_width")]
    pub width: i32,
    #[serde(default = "default_height")]
    pub height: i32,
    #[serde(default)]
    pub seed: i32,
    #[serde(default = "default_deepness")]
    pub deepness: f32,
    #[serde(default = "default_power")]
    pub power: f32,
    #[serde(default = "default_details")]
    pub details: f32,
}

fn default_width() -> i32 {
    1
}
fn default_height() -> i32 {
    1
}
fn default_deepness() -> f32 {
    100.0
}
fn default_power() -> f32 {
    1.0
}
fn default_details() -> f32 {
    1.0
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            seed: 0,
            deepness: default_deepness(),
            power: default_power(),
            details: default_details(),
        }
    }
}

pub fn load_config_from_path(path: &Path) -> Result<GeneratorConfig, ConfigError> {
    let s = fs::read_to_string(path)?;
    let cfg: GeneratorConfig = toml::from_str(&s)?;
    Ok(cfg)
}
