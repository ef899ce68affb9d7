//! CLI command implementations

pub mod check;
pub mod config;
pub mod simulate;

use anyhow::{Context, Result};
use storm_core::StormConfig;

/// Load `path` if given, otherwise fall back to the built-in defaults
pub(crate) fn load_config(path: Option<&str>) -> Result<StormConfig> {
    match path {
        Some(path) => StormConfig::load(path).with_context(|| format!("Failed to load config: {path}")),
        None => Ok(StormConfig::default()),
    }
}
