//! TUI reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(app, event)`
//! and executes the returned effects. Request results are dispatched through
//! `TaskCompleted`, which drops completions from superseded requests before
//! the payload is applied.

use blot_core::api::{ApiError, ArticleListResponse, ArticleResponse, LoginResponse};
use blot_core::articles::StoreOutcome;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::features::articles::ArticlesFocus;
use crate::features::login::LoginState;
use crate::features::{articles, login};
use crate::state::{AppState, View};

/// The main reducer function.
///
/// Takes the current state and an event, mutates state, and returns effects
/// for the runtime to execute.
pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Tick => {
            app.spinner_frame = app.spinner_frame.wrapping_add(1);
            vec![]
        }
        UiEvent::Terminal(term_event) => handle_terminal_event(app, term_event),
        UiEvent::TaskStarted { kind, started } => {
            app.tasks.state_mut(kind).on_started(started);
            vec![]
        }
        UiEvent::TaskCompleted { kind, completed } => {
            if !app.tasks.state_mut(kind).finish_if_active(completed.id) {
                tracing::debug!(?kind, "dropping completion from a superseded request");
                return vec![];
            }
            update(app, *completed.result)
        }
        UiEvent::LoginFinished { result } => handle_login_finished(app, result),
        UiEvent::ArticlesListed { result } => handle_articles_listed(app, result),
        UiEvent::ArticleCreated { result } => handle_article_created(app, result),
        UiEvent::ArticleUpdated { id, result } => handle_article_updated(app, id, result),
        UiEvent::ArticleDeleted { id, result } => handle_article_deleted(app, id, result),
    }
}

fn handle_terminal_event(app: &mut AppState, event: Event) -> Vec<UiEffect> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Paste(text) => {
            match app.view {
                View::Login => app.login.focused_field_mut().insert_str(&text),
                View::Articles => {
                    if app.articles.focus == ArticlesFocus::Form
                        && let Some(field) = app.articles.form.focused_field_mut()
                    {
                        field.insert_str(&text);
                    }
                }
            }
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key_event(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    if key.kind == KeyEventKind::Release {
        return vec![];
    }

    // Ctrl+C quits from anywhere.
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return vec![UiEffect::Quit];
    }

    match app.view {
        View::Login => login::update::handle_key(app, key),
        View::Articles => articles::update::handle_key(app, key),
    }
}

fn handle_login_finished(
    app: &mut AppState,
    result: Result<LoginResponse, ApiError>,
) -> Vec<UiEffect> {
    match result {
        Ok(response) => {
            let token = response.token;
            app.token = Some(token.clone());
            app.view = View::Articles;
            app.articles = crate::features::articles::ArticlesState::default();
            app.status.set_message(response.message);

            // Fetch the collection on entry to the articles view.
            let task = app.task_seq.next_id();
            vec![
                UiEffect::PersistToken { token },
                UiEffect::SpawnListArticles { task },
            ]
        }
        Err(err) => {
            // A rejected login is an ordinary failure, not a forced logout:
            // there is no session to tear down.
            app.status.set_message(err.message);
            app.login.reset_password();
            vec![]
        }
    }
}

fn handle_articles_listed(
    app: &mut AppState,
    result: Result<ArticleListResponse, ApiError>,
) -> Vec<UiEffect> {
    match result {
        Ok(response) => {
            app.articles.store.load(response.articles);
            app.articles.clamp_selection();
            app.status.set_message(response.message);
            vec![]
        }
        Err(err) => fail_authenticated(app, err),
    }
}

fn handle_article_created(
    app: &mut AppState,
    result: Result<ArticleResponse, ApiError>,
) -> Vec<UiEffect> {
    match result {
        Ok(response) => {
            app.articles.store.insert(response.article);
            app.articles.form.clear();
            app.articles.focus = ArticlesFocus::List;
            app.status.set_message(response.message);
            vec![]
        }
        Err(err) => fail_authenticated(app, err),
    }
}

fn handle_article_updated(
    app: &mut AppState,
    id: u64,
    result: Result<ArticleResponse, ApiError>,
) -> Vec<UiEffect> {
    match result {
        Ok(response) => {
            if app.articles.store.replace_by_id(id, response.article) == StoreOutcome::NotFound {
                tracing::warn!(id, "updated article is no longer in the collection");
            }
            app.articles.reset_form();
            app.articles.focus = ArticlesFocus::List;
            app.status.set_message(response.message);
            vec![]
        }
        Err(err) => fail_authenticated(app, err),
    }
}

fn handle_article_deleted(
    app: &mut AppState,
    id: u64,
    result: Result<String, ApiError>,
) -> Vec<UiEffect> {
    match result {
        Ok(message) => {
            app.articles.store.remove_by_id(id);
            app.articles.clamp_selection();
            if app.articles.edit_target.id() == Some(id) {
                app.articles.reset_form();
            }
            app.status.set_message(message);
            vec![]
        }
        Err(err) => fail_authenticated(app, err),
    }
}

/// Failure branch shared by every authenticated operation: a 401 tears the
/// session down, anything else becomes status text.
fn fail_authenticated(app: &mut AppState, err: ApiError) -> Vec<UiEffect> {
    if err.is_unauthorized() {
        return force_logout(app);
    }
    app.status.set_message(err.message);
    vec![]
}

/// Forced logout after the server rejected the session token.
fn force_logout(app: &mut AppState) -> Vec<UiEffect> {
    tracing::info!("session token rejected, returning to login");
    app.token = None;
    app.view = View::Login;
    app.login = LoginState::default();
    app.articles = crate::features::articles::ArticlesState::default();
    app.status.set_message("Session expired. Please log in again.");
    vec![UiEffect::ClearToken]
}

#[cfg(test)]
mod tests {
    use blot_core::api::{ApiErrorKind, MessageResponse};
    use blot_core::articles::{Article, Topic};
    use crossterm::event::KeyModifiers;

    use super::*;
    use crate::common::{TaskCompleted, TaskKind, TaskStarted};

    fn key(code: KeyCode) -> UiEvent {
        UiEvent::Terminal(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    fn type_str(app: &mut AppState, text: &str) {
        for ch in text.chars() {
            update(app, key(KeyCode::Char(ch)));
        }
    }

    fn article(id: u64, title: &str) -> Article {
        Article {
            article_id: id,
            title: title.to_string(),
            text: format!("{title} body"),
            topic: Topic::React,
        }
    }

    fn logged_in_app() -> AppState {
        let mut app = AppState::new(Some("tok".to_string()), None);
        let listed = UiEvent::ArticlesListed {
            result: Ok(ArticleListResponse {
                message: "Here are your articles".to_string(),
                articles: vec![article(1, "first"), article(2, "second")],
            }),
        };
        let effects = update(&mut app, listed);
        assert!(effects.is_empty());
        app
    }

    fn unauthorized() -> ApiError {
        ApiError {
            kind: ApiErrorKind::Unauthorized,
            message: "Invalid token".to_string(),
        }
    }

    #[test]
    fn test_login_success_persists_token_and_fetches() {
        let mut app = AppState::new(None, None);
        type_str(&mut app, "alice");
        update(&mut app, key(KeyCode::Tab));
        type_str(&mut app, "secret");

        let effects = update(&mut app, key(KeyCode::Enter));
        let [UiEffect::SpawnLogin {
            username, password, ..
        }] = &effects[..]
        else {
            panic!("expected a login spawn, got {effects:?}");
        };
        assert_eq!(username, "alice");
        assert_eq!(password, "secret");

        let effects = update(
            &mut app,
            UiEvent::LoginFinished {
                result: Ok(LoginResponse {
                    message: "Welcome back!".to_string(),
                    token: "fresh-token".to_string(),
                }),
            },
        );
        assert_eq!(app.view, View::Articles);
        assert_eq!(app.token.as_deref(), Some("fresh-token"));
        assert_eq!(app.status.message(), Some("Welcome back!"));
        assert!(matches!(
            effects[..],
            [
                UiEffect::PersistToken { .. },
                UiEffect::SpawnListArticles { .. }
            ]
        ));
    }

    #[test]
    fn test_login_failure_shows_message_and_keeps_view() {
        let mut app = AppState::new(None, None);
        let effects = update(
            &mut app,
            UiEvent::LoginFinished {
                result: Err(ApiError {
                    kind: ApiErrorKind::Status(403),
                    message: "Wrong password".to_string(),
                }),
            },
        );
        assert!(effects.is_empty());
        assert_eq!(app.view, View::Login);
        assert!(app.token.is_none());
        assert_eq!(app.status.message(), Some("Wrong password"));
    }

    #[test]
    fn test_empty_login_form_does_not_submit() {
        let mut app = AppState::new(None, None);
        let effects = update(&mut app, key(KeyCode::Enter));
        assert!(effects.is_empty());
        assert_eq!(
            app.status.message(),
            Some("Username and password are required")
        );
    }

    #[test]
    fn test_unauthorized_list_forces_logout() {
        let mut app = logged_in_app();
        let effects = update(
            &mut app,
            UiEvent::ArticlesListed {
                result: Err(unauthorized()),
            },
        );
        assert_eq!(effects, vec![UiEffect::ClearToken]);
        assert_eq!(app.view, View::Login);
        assert!(app.token.is_none());
        assert!(app.articles.store.is_empty());
        assert_eq!(
            app.status.message(),
            Some("Session expired. Please log in again.")
        );
    }

    #[test]
    fn test_other_failures_become_status_text() {
        let mut app = logged_in_app();
        let effects = update(
            &mut app,
            UiEvent::ArticleCreated {
                result: Err(ApiError {
                    kind: ApiErrorKind::Transport,
                    message: "Could not reach the articles service".to_string(),
                }),
            },
        );
        assert!(effects.is_empty());
        assert_eq!(app.view, View::Articles, "non-401 failures keep the session");
        assert_eq!(
            app.status.message(),
            Some("Could not reach the articles service")
        );
    }

    #[test]
    fn test_create_appends_and_clears_form() {
        let mut app = logged_in_app();
        app.articles.form.title.set_value("draft");

        let effects = update(
            &mut app,
            UiEvent::ArticleCreated {
                result: Ok(ArticleResponse {
                    message: "Article created".to_string(),
                    article: article(3, "third"),
                }),
            },
        );
        assert!(effects.is_empty());
        assert_eq!(app.articles.store.len(), 3);
        assert_eq!(app.articles.store.items()[2].article_id, 3);
        assert!(app.articles.form.title.is_empty());
        assert_eq!(app.status.message(), Some("Article created"));
    }

    #[test]
    fn test_edit_then_update_replaces_in_place_and_clears_target() {
        let mut app = logged_in_app();

        // Select the second row and open it for editing.
        update(&mut app, key(KeyCode::Down));
        update(&mut app, key(KeyCode::Enter));
        assert!(app.articles.is_editing());
        assert_eq!(app.articles.form.title.value(), "second");

        let effects = update(&mut app, key(KeyCode::Enter));
        let [UiEffect::SpawnUpdateArticle { id, payload, .. }] = &effects[..] else {
            panic!("expected an update spawn, got {effects:?}");
        };
        assert_eq!(*id, 2);
        assert_eq!(payload.title, "second");

        let effects = update(
            &mut app,
            UiEvent::ArticleUpdated {
                id: 2,
                result: Ok(ArticleResponse {
                    message: "Article updated".to_string(),
                    article: article(2, "second, revised"),
                }),
            },
        );
        assert!(effects.is_empty());
        let titles: Vec<&str> = app
            .articles
            .store
            .items()
            .iter()
            .map(|a| a.title.as_str())
            .collect();
        assert_eq!(titles, vec!["first", "second, revised"]);
        assert!(!app.articles.is_editing(), "edit target cleared after update");
    }

    #[test]
    fn test_delete_clears_matching_edit_target() {
        let mut app = logged_in_app();
        update(&mut app, key(KeyCode::Down));
        update(&mut app, key(KeyCode::Enter));
        assert!(app.articles.is_editing());

        let effects = update(
            &mut app,
            UiEvent::ArticleDeleted {
                id: 2,
                result: Ok("Article deleted".to_string()),
            },
        );
        assert!(effects.is_empty());
        assert_eq!(app.articles.store.len(), 1);
        assert!(!app.articles.is_editing());
        assert!(app.articles.form.title.is_empty());
        assert_eq!(app.articles.selected, 0);
    }

    #[test]
    fn test_incomplete_form_blocks_submit() {
        let mut app = logged_in_app();
        update(&mut app, key(KeyCode::Tab)); // focus the form
        type_str(&mut app, "Title only");

        let effects = update(&mut app, key(KeyCode::Enter));
        assert!(effects.is_empty());
        assert_eq!(
            app.status.message(),
            Some("Title, text, and a topic are required")
        );
    }

    #[test]
    fn test_logout_clears_session() {
        let mut app = logged_in_app();
        let effects = update(&mut app, key(KeyCode::Char('l')));
        assert_eq!(effects, vec![UiEffect::ClearToken]);
        assert_eq!(app.view, View::Login);
        assert!(app.token.is_none());
        assert_eq!(app.status.message(), Some("Goodbye!"));
    }

    #[test]
    fn test_stale_completion_is_dropped() {
        let mut app = logged_in_app();

        let first = app.task_seq.next_id();
        let second = app.task_seq.next_id();
        update(
            &mut app,
            UiEvent::TaskStarted {
                kind: TaskKind::ArticlesList,
                started: TaskStarted { id: first },
            },
        );
        update(
            &mut app,
            UiEvent::TaskStarted {
                kind: TaskKind::ArticlesList,
                started: TaskStarted { id: second },
            },
        );

        // The superseded request completes with a stale snapshot.
        let stale = UiEvent::TaskCompleted {
            kind: TaskKind::ArticlesList,
            completed: TaskCompleted {
                id: first,
                result: Box::new(UiEvent::ArticlesListed {
                    result: Ok(ArticleListResponse {
                        message: "stale".to_string(),
                        articles: vec![],
                    }),
                }),
            },
        };
        let effects = update(&mut app, stale);
        assert!(effects.is_empty());
        assert_eq!(app.articles.store.len(), 2, "stale result must not apply");
        assert!(app.tasks.articles_list.is_running());

        let fresh = UiEvent::TaskCompleted {
            kind: TaskKind::ArticlesList,
            completed: TaskCompleted {
                id: second,
                result: Box::new(UiEvent::ArticlesListed {
                    result: Ok(ArticleListResponse {
                        message: "fresh".to_string(),
                        articles: vec![article(9, "only")],
                    }),
                }),
            },
        };
        update(&mut app, fresh);
        assert_eq!(app.articles.store.len(), 1);
        assert!(!app.tasks.articles_list.is_running());
        assert_eq!(app.status.message(), Some("fresh"));
    }

    #[test]
    fn test_ctrl_c_quits() {
        let mut app = logged_in_app();
        let effects = update(
            &mut app,
            UiEvent::Terminal(Event::Key(KeyEvent::new(
                KeyCode::Char('c'),
                KeyModifiers::CONTROL,
            ))),
        );
        assert_eq!(effects, vec![UiEffect::Quit]);
    }

    #[test]
    fn test_delete_response_message_shown() {
        // MessageResponse is what the wire carries; the handler unwraps it
        // to the plain message before the reducer sees it.
        let response = MessageResponse {
            message: "Article deleted".to_string(),
        };
        let mut app = logged_in_app();
        update(
            &mut app,
            UiEvent::ArticleDeleted {
                id: 1,
                result: Ok(response.message),
            },
        );
        assert_eq!(app.status.message(), Some("Article deleted"));
        assert_eq!(app.articles.store.len(), 1);
    }
}
