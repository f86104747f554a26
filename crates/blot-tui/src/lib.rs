//! Full-screen terminal client for the articles service.

pub mod common;
pub mod effects;
pub mod events;
pub mod features;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;

use std::io::{IsTerminal, stderr};

use anyhow::Result;
use blot_core::api::{ApiClient, ApiConfig};
use blot_core::auth::TokenStore;
use blot_core::config::Config;
pub use runtime::TuiRuntime;

/// Runs the interactive terminal client.
///
/// A session token persisted by a previous run is restored; if one exists
/// the app starts directly in the articles view and fetches the collection.
pub async fn run_interactive(config: &Config) -> Result<()> {
    // The TUI needs a terminal to render into.
    if !stderr().is_terminal() {
        anyhow::bail!(
            "Interactive mode requires a terminal.\n\
             Use `blot articles list` for non-interactive use."
        );
    }

    let api_config = ApiConfig::from_env(Some(&config.base_url))?;
    let client = ApiClient::new(api_config);

    let token_store = TokenStore::open_default();
    let token = match token_store.load() {
        Ok(token) => token,
        Err(err) => {
            // A corrupt token file should not brick the app; start logged out.
            tracing::warn!(error = %err, "failed to load session token");
            None
        }
    };

    let mut runtime = TuiRuntime::new(client, token_store, token, config.username.as_deref())?;
    runtime.run()?;

    Ok(())
}
