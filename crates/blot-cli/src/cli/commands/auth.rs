//! Login/logout command handlers.

use anyhow::{Context, Result};
use blot_core::auth::TokenStore;
use blot_core::config::Config;

use super::api_client;

pub async fn login(config: &Config, username: &str, password: &str) -> Result<()> {
    let client = api_client(config)?;
    let response = client
        .login(username, password)
        .await
        .map_err(|err| anyhow::anyhow!("{err}"))?;

    TokenStore::open_default()
        .save(&response.token)
        .context("save session token")?;

    println!("{}", response.message);
    Ok(())
}

/// Clears the persisted token. No network call; idempotent.
pub fn logout() -> Result<()> {
    TokenStore::open_default()
        .clear()
        .context("clear session token")?;
    println!("Goodbye!");
    Ok(())
}
