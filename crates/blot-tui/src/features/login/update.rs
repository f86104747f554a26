//! Key handling for the login screen.

use crossterm::event::{KeyCode, KeyEvent};

use crate::effects::UiEffect;
use crate::state::AppState;

/// Handles a key press while the login view is active.
pub fn handle_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    match key.code {
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Down | KeyCode::Up => {
            app.login.toggle_focus();
            vec![]
        }
        KeyCode::Enter => submit(app),
        _ => {
            app.login.focused_field_mut().handle_key(key);
            vec![]
        }
    }
}

/// Issues the login request if both credentials are present.
fn submit(app: &mut AppState) -> Vec<UiEffect> {
    if app.tasks.login.is_running() {
        return vec![];
    }
    if !app.login.can_submit() {
        app.status
            .set_message("Username and password are required");
        return vec![];
    }

    app.status.clear();
    let task = app.task_seq.next_id();
    vec![UiEffect::SpawnLogin {
        task,
        username: app.login.username.value().to_string(),
        password: app.login.password.value().to_string(),
    }]
}
