//! UI effect types.
//!
//! Effects are commands returned by the reducer that the runtime executes.
//! They represent I/O and task spawning only; the reducer never performs a
//! request or touches the token file itself.

use blot_core::articles::ArticlePayload;

use crate::common::TaskId;

/// Effects returned by the reducer for the runtime to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEffect {
    /// Quit the application.
    Quit,

    /// Persist the session token to the token store.
    PersistToken { token: String },

    /// Remove the persisted session token (logout or forced logout).
    ClearToken,

    /// Spawn the login request.
    SpawnLogin {
        task: TaskId,
        username: String,
        password: String,
    },

    /// Spawn a fetch of the full article collection.
    SpawnListArticles { task: TaskId },

    /// Spawn an article create request.
    SpawnCreateArticle {
        task: TaskId,
        payload: ArticlePayload,
    },

    /// Spawn an article update request.
    SpawnUpdateArticle {
        task: TaskId,
        id: u64,
        payload: ArticlePayload,
    },

    /// Spawn an article delete request.
    SpawnDeleteArticle { task: TaskId, id: u64 },
}
