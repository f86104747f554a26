//! Pure view/render functions for the TUI.
//!
//! Functions here take `&AppState`, draw to a ratatui frame, and never
//! mutate state or return effects.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};

use crate::features::articles::render::render_articles;
use crate::features::login::render::render_login;
use crate::features::statusline::render_status_line;
use crate::state::{AppState, View};

/// Height of the status line at the bottom.
const STATUS_HEIGHT: u16 = 1;

/// Renders the entire TUI to the frame.
pub fn render(app: &AppState, frame: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(STATUS_HEIGHT)])
        .split(frame.area());

    match app.view {
        View::Login => render_login(app, frame, chunks[0]),
        View::Articles => render_articles(app, frame, chunks[0]),
    }

    render_status_line(app, frame, chunks[1]);
}
