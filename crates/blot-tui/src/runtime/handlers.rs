//! Effect handlers for the TUI runtime.
//!
//! Handlers are pure async functions that perform one request and return
//! the `UiEvent` carrying its result. The runtime spawns them via
//! `spawn_task`, which wraps the result in the task lifecycle events; the
//! handlers themselves never touch state.

use std::sync::Arc;

use blot_core::api::ApiClient;
use blot_core::articles::ArticlePayload;

use crate::events::UiEvent;

pub async fn login(client: Arc<ApiClient>, username: String, password: String) -> UiEvent {
    let result = client.login(&username, &password).await;
    UiEvent::LoginFinished { result }
}

pub async fn list_articles(client: Arc<ApiClient>, token: String) -> UiEvent {
    let result = client.list_articles(&token).await;
    UiEvent::ArticlesListed { result }
}

pub async fn create_article(
    client: Arc<ApiClient>,
    token: String,
    payload: ArticlePayload,
) -> UiEvent {
    let result = client.create_article(&token, &payload).await;
    UiEvent::ArticleCreated { result }
}

pub async fn update_article(
    client: Arc<ApiClient>,
    token: String,
    id: u64,
    payload: ArticlePayload,
) -> UiEvent {
    let result = client.update_article(&token, id, &payload).await;
    UiEvent::ArticleUpdated { id, result }
}

pub async fn delete_article(client: Arc<ApiClient>, token: String, id: u64) -> UiEvent {
    let result = client.delete_article(&token, id).await;
    UiEvent::ArticleDeleted {
        id,
        result: result.map(|response| response.message),
    }
}
