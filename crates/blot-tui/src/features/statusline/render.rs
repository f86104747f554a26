//! Status line rendering.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::state::AppState;

/// Spinner frames for the busy animation.
const SPINNER_FRAMES: &[&str] = &["◐", "◓", "◑", "◒"];

/// Renders the one-line status bar: spinner while any request is in flight,
/// then the last operation message.
pub fn render_status_line(app: &AppState, frame: &mut Frame, area: Rect) {
    let mut spans = Vec::new();

    if app.tasks.is_any_running() {
        let spinner = SPINNER_FRAMES[app.spinner_frame as usize % SPINNER_FRAMES.len()];
        spans.push(Span::styled(
            format!("{spinner} "),
            Style::default().fg(Color::Yellow),
        ));
    }

    if let Some(message) = app.status.message() {
        spans.push(Span::styled(
            message.to_string(),
            Style::default().fg(Color::Gray),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
