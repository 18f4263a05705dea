// src/config.rs
use std::fs;
use std::path::PathBuf;

use serde::Deserialize;

pub const CONFIG_FILE: &str = "taxonet.toml";

/// Optional local defaults for the CLI, read from `taxonet.toml` in the
/// working directory. Command-line flags take precedence.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub synsets: Option<PathBuf>,
    pub hypernyms: Option<PathBuf>,
}

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads `taxonet.toml` from the working directory if present.
    /// A missing or unparsable file leaves the defaults untouched.
    pub fn load_local_config(&mut self) {
        if let Ok(content) = fs::read_to_string(CONFIG_FILE) {
            if let Ok(parsed) = Self::parse(&content) {
                *self = parsed;
            }
        }
    }

    fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}
