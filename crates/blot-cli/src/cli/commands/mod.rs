//! Command handlers for the non-interactive CLI.

pub mod articles;
pub mod auth;
pub mod config;

use anyhow::{Context, Result};
use blot_core::api::{ApiClient, ApiConfig, ApiError};
use blot_core::auth::TokenStore;
use blot_core::config::Config;

/// Builds the API client with the config/env base URL resolution.
pub fn api_client(config: &Config) -> Result<ApiClient> {
    let api_config = ApiConfig::from_env(Some(&config.base_url))?;
    Ok(ApiClient::new(api_config))
}

/// Loads the persisted session token, failing with a hint when absent.
pub fn session_token() -> Result<String> {
    TokenStore::open_default()
        .load()
        .context("load session token")?
        .context("Not logged in. Run `blot login` first.")
}

/// Maps an authenticated-call failure to a CLI error. A 401 clears the
/// persisted token, same as the forced logout in the TUI.
pub fn auth_failure(err: ApiError) -> anyhow::Error {
    if err.is_unauthorized() {
        if let Err(clear_err) = TokenStore::open_default().clear() {
            tracing::warn!(error = %clear_err, "failed to remove session token");
        }
        return anyhow::anyhow!("Session expired. Please log in again.");
    }
    anyhow::anyhow!("{err}")
}
