//! Application state composition.
//!
//! ```text
//! AppState
//! ├── view: View               (which screen is active)
//! ├── token: Option<String>    (session token, mirrors the token store)
//! ├── login: LoginState        (credentials form)
//! ├── articles: ArticlesState  (collection, selection, edit form)
//! ├── status: StatusState      (last operation message)
//! ├── task_seq: TaskSeq        (async task id generator)
//! └── tasks: Tasks             (per-kind task lifecycle state)
//! ```
//!
//! All mutation goes through the reducer in `update`; the runtime and the
//! renderer only read.

use crate::common::{TaskSeq, Tasks};
use crate::effects::UiEffect;
use crate::features::articles::ArticlesState;
use crate::features::login::LoginState;
use crate::features::statusline::StatusState;

/// The active screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Login,
    Articles,
}

/// Combined application state for the TUI.
pub struct AppState {
    /// Flag indicating the app should quit.
    pub should_quit: bool,
    /// Which screen is active.
    pub view: View,
    /// Current session token; `None` means logged out.
    pub token: Option<String>,
    /// Credentials form state.
    pub login: LoginState,
    /// Article list and edit form state.
    pub articles: ArticlesState,
    /// Last operation message.
    pub status: StatusState,
    /// Task id sequence for async operations.
    pub task_seq: TaskSeq,
    /// Task lifecycle state for async operations.
    pub tasks: Tasks,
    /// Spinner animation frame, advanced on each tick.
    pub spinner_frame: u8,
}

impl AppState {
    /// Creates the initial state. A persisted token puts the app straight
    /// into the articles view; otherwise the login form is shown.
    pub fn new(token: Option<String>, username_hint: Option<&str>) -> Self {
        let view = if token.is_some() {
            View::Articles
        } else {
            View::Login
        };
        let login = match username_hint {
            Some(name) => LoginState::with_username(name),
            None => LoginState::default(),
        };
        Self {
            should_quit: false,
            view,
            token,
            login,
            articles: ArticlesState::default(),
            status: StatusState::default(),
            task_seq: TaskSeq::default(),
            tasks: Tasks::default(),
            spinner_frame: 0,
        }
    }

    /// Effects to run before the first frame: a session restored from disk
    /// kicks off the initial article fetch.
    pub fn startup_effects(&mut self) -> Vec<UiEffect> {
        if self.token.is_none() {
            return vec![];
        }
        let task = self.task_seq.next_id();
        vec![UiEffect::SpawnListArticles { task }]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_persisted_token_skips_login() {
        let mut app = AppState::new(Some("tok".to_string()), None);
        assert_eq!(app.view, View::Articles);
        let effects = app.startup_effects();
        assert!(matches!(effects[..], [UiEffect::SpawnListArticles { .. }]));
    }

    #[test]
    fn test_no_token_starts_at_login() {
        let mut app = AppState::new(None, Some("alice"));
        assert_eq!(app.view, View::Login);
        assert!(app.startup_effects().is_empty());
        assert_eq!(app.login.username.value(), "alice");
    }
}
