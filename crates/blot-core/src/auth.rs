//! Session token storage.
//!
//! Stores the bearer token in `<BLOT_HOME>/token.json` with restricted
//! permissions (0600). The token is an opaque string issued by the login
//! endpoint; it is never logged in full.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::config::paths;

/// On-disk token record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredToken {
    /// The opaque bearer token.
    pub token: String,
}

/// Persistent single-slot token store.
///
/// All operations are idempotent: loading with no file yields no token and
/// clearing an absent token is a no-op.
#[derive(Debug, Clone)]
pub struct TokenStore {
    path: PathBuf,
}

impl TokenStore {
    /// Creates a store at the default token path under BLOT_HOME.
    pub fn open_default() -> Self {
        Self {
            path: paths::token_path(),
        }
    }

    /// Creates a store at an explicit path (used by tests).
    pub fn open_at(path: PathBuf) -> Self {
        Self { path }
    }

    /// Loads the current token, if any.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(&self) -> Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read token from {}", self.path.display()))?;

        let stored: StoredToken = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse token file {}", self.path.display()))?;

        Ok(Some(stored.token))
    }

    /// Saves a token, replacing any previous one. Written with 0600
    /// permissions on unix.
    ///
    /// # Errors
    /// Returns an error if the operation fails.
    pub fn save(&self, token: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let stored = StoredToken {
            token: token.to_string(),
        };
        let contents = serde_json::to_string_pretty(&stored).context("Failed to serialize token")?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            let mut file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .mode(0o600)
                .open(&self.path)
                .with_context(|| format!("Failed to open {} for writing", self.path.display()))?;
            file.write_all(contents.as_bytes())
                .with_context(|| format!("Failed to write to {}", self.path.display()))?;
        }

        #[cfg(not(unix))]
        {
            fs::write(&self.path, contents)
                .with_context(|| format!("Failed to write to {}", self.path.display()))?;
        }

        Ok(())
    }

    /// Removes the stored token. No-op if no token is stored.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be removed.
    pub fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e)
                .with_context(|| format!("Failed to remove token file {}", self.path.display())),
        }
    }
}
