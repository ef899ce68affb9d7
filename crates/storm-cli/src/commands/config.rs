//! Print the effective configuration

use anyhow::{Context, Result};

pub fn run(config_path: Option<&str>) -> Result<()> {
    let config = super::load_config(config_path)?;
    let text = config
        .to_toml_string()
        .context("Failed to serialize config")?;
    print!("{text}");
    Ok(())
}
