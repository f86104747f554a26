//! UI event types.
//!
//! Every input to the reducer is a `UiEvent`: terminal input, the tick
//! timer, task lifecycle notifications, and request results. Request
//! results arrive wrapped in `TaskCompleted` so the reducer can drop
//! completions from superseded requests before looking at the payload.

use blot_core::api::{ApiError, ArticleListResponse, ArticleResponse, LoginResponse};
use crossterm::event::Event;

use crate::common::{TaskCompleted, TaskKind, TaskStarted};

/// Events processed by the reducer.
#[derive(Debug)]
pub enum UiEvent {
    /// Periodic tick for animations.
    Tick,

    /// Raw terminal input (keys, paste, resize).
    Terminal(Event),

    /// A request was spawned; records the active task id.
    TaskStarted { kind: TaskKind, started: TaskStarted },

    /// A request finished; carries the result event to dispatch if the
    /// completion is still the active one for its kind.
    TaskCompleted {
        kind: TaskKind,
        completed: TaskCompleted<Box<UiEvent>>,
    },

    /// Login request finished.
    LoginFinished {
        result: Result<LoginResponse, ApiError>,
    },

    /// Article list fetch finished.
    ArticlesListed {
        result: Result<ArticleListResponse, ApiError>,
    },

    /// Article create finished.
    ArticleCreated {
        result: Result<ArticleResponse, ApiError>,
    },

    /// Article update finished.
    ArticleUpdated {
        id: u64,
        result: Result<ArticleResponse, ApiError>,
    },

    /// Article delete finished. Carries the deleted id; the delete
    /// response body has no article payload.
    ArticleDeleted {
        id: u64,
        result: Result<String, ApiError>,
    },
}
