//! Clearing defaults loaded from defaults.toml.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::PathBuf;

/// Default clearing targets, overridable from the command line
#[derive(Debug, Deserialize)]
pub struct Defaults {
    /// Directory to clear when none is given as an argument
    pub root: PathBuf,
    /// Subdirectory kept in place while its contents are cleared
    pub keep: String,
}

// Embed the TOML file directly in the binary at compile time
const DEFAULTS_TOML: &str = include_str!("../defaults.toml");

/// Parse the embedded defaults
pub fn load_defaults() -> Result<Defaults> {
    toml::from_str(DEFAULTS_TOML).context("Failed to parse embedded defaults TOML file")
}
