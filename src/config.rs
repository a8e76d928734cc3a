//! Inputs for the demo walkthrough, optionally read from a TOML file.
//!
//! Every field has a default, so an empty file (or no file at all) reproduces
//! the built-in sample run.

use crate::error::{Result, ToolkitError};
use crate::inventory::{airport_codes, Item};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub swap_left: String,
    pub swap_right: String,
    pub repeat_item: String,
    pub repeat_count: i64,
    pub numbers: Vec<i64>,
    pub conversions: Vec<String>,
    pub airports: BTreeMap<String, String>,
    pub lookup_target: String,
    pub lookup_item: Item,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            swap_left: "Arlong".to_string(),
            swap_right: "Park".to_string(),
            repeat_item: "generic".to_string(),
            repeat_count: 3,
            numbers: vec![10, 23, 61, 17, 15, 8],
            conversions: vec!["14".to_string(), "abc".to_string()],
            airports: airport_codes().into_iter().collect(),
            lookup_target: "Hong Kong International Airport".to_string(),
            lookup_item: Item::new(2, 3),
        }
    }
}

impl DemoConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|err| ToolkitError::Config(err.to_string()))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|err| {
            ToolkitError::Config(format!("failed to read {}: {err}", path.display()))
        })?;
        let config = Self::from_toml_str(&content)?;
        info!(path = %path.display(), "loaded demo config");
        Ok(config)
    }
}
