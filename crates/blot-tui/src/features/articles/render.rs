//! Articles screen rendering: list pane on the left, form pane on the right.

use blot_core::articles::{TEXT_MAX_LEN, TITLE_MAX_LEN, Topic};
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};

use crate::state::AppState;

use super::state::{ArticlesFocus, FormField};

/// Renders the articles view into `area`.
pub fn render_articles(app: &AppState, frame: &mut Frame, area: Rect) {
    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    render_list(app, frame, panes[0]);
    render_form(app, frame, panes[1]);
}

fn pane_border(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

fn render_list(app: &AppState, frame: &mut Frame, area: Rect) {
    let focused = app.articles.focus == ArticlesFocus::List;
    let title = format!(" Articles ({}) ", app.articles.store.len());
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(pane_border(focused));

    if app.articles.store.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            "No articles yet. Press 'n' to write one.",
            Style::default().fg(Color::DarkGray),
        )))
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = app
        .articles
        .store
        .items()
        .iter()
        .map(|article| {
            ListItem::new(Line::from(vec![
                Span::raw(article.title.clone()),
                Span::styled(
                    format!("  [{}]", article.topic),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut list_state = ListState::default().with_selected(Some(app.articles.selected));
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn render_form(app: &AppState, frame: &mut Frame, area: Rect) {
    let focused = app.articles.focus == ArticlesFocus::Form;
    let heading = match app.articles.edit_target.current_article(&app.articles.store) {
        Some(article) => format!(" Edit article #{} ", article.article_id),
        None => " Create article ".to_string(),
    };
    let block = Block::default()
        .title(heading)
        .borders(Borders::ALL)
        .border_style(pane_border(focused));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // title
            Constraint::Length(1), // text
            Constraint::Length(1), // topic
            Constraint::Length(1),
            Constraint::Min(0), // hints
        ])
        .split(inner);

    let form = &app.articles.form;
    let field_focused = |field: FormField| focused && form.field == field;

    render_text_row(
        frame,
        rows[0],
        &format!("Title ({}/{TITLE_MAX_LEN})", form.title.char_len()),
        form.title.value(),
        form.title.cursor(),
        field_focused(FormField::Title),
    );
    render_text_row(
        frame,
        rows[1],
        &format!("Text  ({}/{TEXT_MAX_LEN})", form.text.char_len()),
        form.text.value(),
        form.text.cursor(),
        field_focused(FormField::Text),
    );
    render_topic_row(frame, rows[2], form.topic, field_focused(FormField::Topic));

    let hints = if focused {
        "Enter: submit   Esc: cancel   ↑/↓: field   ←/→: topic"
    } else {
        "Enter: edit   n: new   d: delete   r: refresh   l: logout   Tab: form"
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            hints,
            Style::default().fg(Color::DarkGray),
        ))),
        rows[4],
    );
}

fn render_text_row(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    value: &str,
    cursor: usize,
    focused: bool,
) {
    let label_style = if focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };
    let prefix = format!("{label}: ");
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(prefix.clone(), label_style),
            Span::raw(value.to_string()),
        ])),
        area,
    );
    if focused {
        let x = area.x + prefix.chars().count() as u16 + cursor as u16;
        frame.set_cursor_position((x.min(area.right().saturating_sub(1)), area.y));
    }
}

fn render_topic_row(frame: &mut Frame, area: Rect, selected: Option<Topic>, focused: bool) {
    let label_style = if focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };

    let mut spans = vec![Span::styled("Topic: ", label_style)];
    for (i, topic) in Topic::all().iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        let style = if selected == Some(*topic) {
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(format!("[{topic}]"), style));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
