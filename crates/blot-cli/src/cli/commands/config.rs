//! Config command handlers.

use anyhow::{Context, Result};
use blot_core::config::{Config, paths};

pub fn path() {
    println!("{}", paths::config_path().display());
}

pub fn init() -> Result<()> {
    let config_path = paths::config_path();
    Config::init(&config_path)
        .with_context(|| format!("init config at {}", config_path.display()))?;
    println!("Created config at {}", config_path.display());
    Ok(())
}

/// Persists a new base URL, preserving other user-set values and the
/// template's comments.
pub fn set_url(url: &str) -> Result<()> {
    let config_path = paths::config_path();
    Config::save_base_url_to(&config_path, url)
        .with_context(|| format!("update config at {}", config_path.display()))?;
    println!("Set base_url to {url}");
    Ok(())
}
