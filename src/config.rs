//! Code for the configuration of the AMS model.

use std::path::Path;

use anyhow::Result;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The configuration of the AMS model.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub struct Config {
    /// How raw records are parsed.
    #[serde(default)]
    pub parse: ParseConfig,
}

impl Config {
    /// Parse a configuration from a toml file.
    pub fn from_file(file: impl AsRef<Path>) -> Result<Self> {
        let config = std::fs::read_to_string(file)?;
        Self::from_str(&config)
    }

    /// Parse a configuration from a toml string.
    pub fn from_str(config: &str) -> Result<Self> {
        Ok(toml::from_str(config)?)
    }
}

/// How raw records are parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub struct ParseConfig {
    /// Fail on the first malformed record. When false, malformed records
    /// are logged and skipped.
    #[serde(default = "default_strict")]
    pub strict: bool,
}

fn default_strict() -> bool {
    true
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self { strict: default_strict() }
    }
}

impl ParseConfig {
    /// A config that skips malformed records.
    pub fn lenient() -> Self {
        Self { strict: false }
    }
}
