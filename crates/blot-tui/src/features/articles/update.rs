//! Key handling for the articles screen.
//!
//! The list pane navigates and triggers delete/refresh/logout; the form
//! pane edits the draft and submits. `Tab` switches panes, `Esc` in the
//! form cancels an edit in progress.

use crossterm::event::{KeyCode, KeyEvent};

use crate::effects::UiEffect;
use crate::state::{AppState, View};

use super::state::{ArticlesFocus, FormField};

/// Handles a key press while the articles view is active.
pub fn handle_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    if key.code == KeyCode::Tab || key.code == KeyCode::BackTab {
        app.articles.focus = match app.articles.focus {
            ArticlesFocus::List => ArticlesFocus::Form,
            ArticlesFocus::Form => ArticlesFocus::List,
        };
        return vec![];
    }

    match app.articles.focus {
        ArticlesFocus::List => handle_list_key(app, key),
        ArticlesFocus::Form => handle_form_key(app, key),
    }
}

fn handle_list_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            app.articles.select_prev();
            vec![]
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.articles.select_next();
            vec![]
        }
        KeyCode::Enter => {
            begin_edit(app);
            vec![]
        }
        KeyCode::Char('n') => {
            app.articles.reset_form();
            app.articles.focus = ArticlesFocus::Form;
            vec![]
        }
        KeyCode::Char('d') => delete_selected(app),
        KeyCode::Char('r') => refresh(app),
        KeyCode::Char('l') => logout(app),
        _ => vec![],
    }
}

fn handle_form_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    match key.code {
        KeyCode::Esc => {
            app.articles.reset_form();
            app.articles.focus = ArticlesFocus::List;
            vec![]
        }
        KeyCode::Down => {
            app.articles.form.next_field();
            vec![]
        }
        KeyCode::Up => {
            app.articles.form.prev_field();
            vec![]
        }
        KeyCode::Left if app.articles.form.field == FormField::Topic => {
            app.articles.form.cycle_topic(-1);
            vec![]
        }
        KeyCode::Right if app.articles.form.field == FormField::Topic => {
            app.articles.form.cycle_topic(1);
            vec![]
        }
        KeyCode::Char(' ') if app.articles.form.field == FormField::Topic => {
            app.articles.form.cycle_topic(1);
            vec![]
        }
        KeyCode::Enter => submit_form(app),
        _ => {
            if let Some(field) = app.articles.form.focused_field_mut() {
                field.handle_key(key);
            }
            vec![]
        }
    }
}

/// Loads the highlighted article into the form for editing.
fn begin_edit(app: &mut AppState) {
    let Some(article) = app.articles.selected_article().cloned() else {
        return;
    };
    app.articles.edit_target.select(article.article_id);
    app.articles.form.prefill(&article);
    app.articles.focus = ArticlesFocus::Form;
}

/// Submits the form as a create or an update, depending on the edit target.
fn submit_form(app: &mut AppState) -> Vec<UiEffect> {
    let Some(payload) = app.articles.form.draft().to_payload() else {
        app.status
            .set_message("Title, text, and a topic are required");
        return vec![];
    };

    app.status.clear();
    let task = app.task_seq.next_id();

    // A target left dangling by a concurrent delete falls back to create.
    match app.articles.edit_target.current_article(&app.articles.store) {
        Some(existing) => {
            let id = existing.article_id;
            vec![UiEffect::SpawnUpdateArticle { task, id, payload }]
        }
        None => vec![UiEffect::SpawnCreateArticle { task, payload }],
    }
}

fn delete_selected(app: &mut AppState) -> Vec<UiEffect> {
    let Some(article) = app.articles.selected_article() else {
        return vec![];
    };
    let id = article.article_id;
    app.status.clear();
    let task = app.task_seq.next_id();
    vec![UiEffect::SpawnDeleteArticle { task, id }]
}

fn refresh(app: &mut AppState) -> Vec<UiEffect> {
    app.status.clear();
    let task = app.task_seq.next_id();
    vec![UiEffect::SpawnListArticles { task }]
}

/// Local logout: no network call, token removed, back to the login form.
fn logout(app: &mut AppState) -> Vec<UiEffect> {
    app.token = None;
    app.view = View::Login;
    app.login = crate::features::login::LoginState::default();
    app.articles = super::state::ArticlesState::default();
    app.status.set_message("Goodbye!");
    vec![UiEffect::ClearToken]
}
