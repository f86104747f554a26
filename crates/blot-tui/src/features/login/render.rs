//! Login screen rendering.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::state::AppState;

use super::state::LoginField;

const FORM_WIDTH: u16 = 48;
const FORM_HEIGHT: u16 = 9;

/// Renders the centered credentials form.
pub fn render_login(app: &AppState, frame: &mut Frame, area: Rect) {
    let form_area = centered_rect(area, FORM_WIDTH, FORM_HEIGHT);

    let block = Block::default()
        .title(" blot — sign in ")
        .borders(Borders::ALL);
    let inner = block.inner(form_area);
    frame.render_widget(block, form_area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    render_field(
        frame,
        rows[1],
        "Username",
        app.login.username.value(),
        app.login.username.cursor(),
        app.login.focus == LoginField::Username,
        false,
    );
    render_field(
        frame,
        rows[3],
        "Password",
        app.login.password.value(),
        app.login.password.cursor(),
        app.login.focus == LoginField::Password,
        true,
    );

    let hint = Line::from(Span::styled(
        "Enter: sign in   Tab: switch field   Ctrl+C: quit",
        Style::default().fg(Color::DarkGray),
    ));
    frame.render_widget(Paragraph::new(hint), rows[5]);
}

fn render_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    value: &str,
    cursor: usize,
    focused: bool,
    masked: bool,
) {
    let label_style = if focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };

    let shown = if masked {
        "•".repeat(value.chars().count())
    } else {
        value.to_string()
    };

    let prefix = format!("{label}: ");
    let line = Line::from(vec![
        Span::styled(prefix.clone(), label_style),
        Span::raw(shown),
    ]);
    frame.render_widget(Paragraph::new(line), area);

    if focused {
        let x = area.x + prefix.chars().count() as u16 + cursor as u16;
        frame.set_cursor_position((x.min(area.right().saturating_sub(1)), area.y));
    }
}

/// Centers a fixed-size rect inside `area`, clamping to its bounds.
fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
