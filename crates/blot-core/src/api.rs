//! HTTP client for the articles service.
//!
//! One method per endpoint; every response body is a JSON envelope with at
//! least a `message` field. Authenticated calls send the raw session token
//! in the `Authorization` header. This layer does not retry and does not
//! mutate any client-side state; callers decide what a failure means.

use std::fmt;

use anyhow::Result;
use serde::Deserialize;
use serde_json::Value;

use crate::articles::{Article, ArticlePayload};

/// Default base URL for the articles service.
pub const DEFAULT_BASE_URL: &str = "http://localhost:9000";

/// Configuration for the API client.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    /// Creates a config from environment and config-file values.
    ///
    /// Base URL resolution order:
    /// 1. `BLOT_BASE_URL` env var (if set and non-empty)
    /// 2. `config_base_url` parameter (if Some and non-empty)
    /// 3. Default: `http://localhost:9000`
    ///
    /// # Errors
    /// Returns an error if the selected URL is not well-formed.
    pub fn from_env(config_base_url: Option<&str>) -> Result<Self> {
        if let Ok(env_url) = std::env::var("BLOT_BASE_URL") {
            let trimmed = env_url.trim();
            if !trimmed.is_empty() {
                validate_url(trimmed)?;
                return Ok(Self {
                    base_url: trimmed.to_string(),
                });
            }
        }

        if let Some(config_url) = config_base_url {
            let trimmed = config_url.trim();
            if !trimmed.is_empty() {
                validate_url(trimmed)?;
                return Ok(Self {
                    base_url: trimmed.to_string(),
                });
            }
        }

        Ok(Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }
}

/// Validates that a URL is well-formed.
fn validate_url(url: &str) -> Result<()> {
    url::Url::parse(url).map_err(|e| anyhow::anyhow!("Invalid base URL {url}: {e}"))?;
    Ok(())
}

/// Categories of API failures, mapped from the transport outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    /// HTTP 401 on any call. The session token is no longer accepted.
    Unauthorized,
    /// Any other non-2xx HTTP status.
    Status(u16),
    /// No usable response at all (connection refused, DNS, timeout).
    Transport,
    /// The response body did not match the expected envelope.
    Parse,
}

/// Failure from one API call, with a user-presentable message.
#[derive(Debug, Clone)]
pub struct ApiError {
    pub kind: ApiErrorKind,
    /// One-line summary suitable for the status line.
    pub message: String,
}

impl ApiError {
    pub fn is_unauthorized(&self) -> bool {
        self.kind == ApiErrorKind::Unauthorized
    }

    /// Builds an error from a non-2xx status and its body.
    ///
    /// Prefers the body's `message` field; falls back to "HTTP <status>".
    pub fn from_status(status: u16, body: &str) -> Self {
        let kind = if status == 401 {
            ApiErrorKind::Unauthorized
        } else {
            ApiErrorKind::Status(status)
        };

        let message = serde_json::from_str::<Value>(body)
            .ok()
            .and_then(|json| {
                json.get("message")
                    .and_then(|m| m.as_str())
                    .map(str::to_string)
            })
            .unwrap_or_else(|| format!("HTTP {status}"));

        Self { kind, message }
    }

    fn transport(err: &reqwest::Error) -> Self {
        tracing::warn!(error = %err, "request failed without a response");
        Self {
            kind: ApiErrorKind::Transport,
            message: "Could not reach the articles service".to_string(),
        }
    }

    fn parse(err: &reqwest::Error) -> Self {
        tracing::warn!(error = %err, "failed to decode response body");
        Self {
            kind: ApiErrorKind::Parse,
            message: "Unexpected response from the articles service".to_string(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ApiError {}

/// Result type for API operations.
pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Response from the login endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub message: String,
    pub token: String,
}

/// Response from the list endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ArticleListResponse {
    pub message: String,
    pub articles: Vec<Article>,
}

/// Response from the create and update endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct ArticleResponse {
    pub message: String,
    pub article: Article,
}

/// Response carrying only a message (delete endpoint).
#[derive(Debug, Clone, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Articles service client.
pub struct ApiClient {
    config: ApiConfig,
    http: reqwest::Client,
}

impl ApiClient {
    /// Creates a new client with the given configuration.
    ///
    /// # Panics
    /// - In test builds (`#[cfg(test)]`), panics if `base_url` is the
    ///   production default.
    /// - At runtime, panics if `BLOT_BLOCK_REAL_API=1` and `base_url` is the
    ///   production default.
    ///
    /// This prevents tests from accidentally making real network requests.
    /// Point `BLOT_BASE_URL` at a mock server instead.
    pub fn new(config: ApiConfig) -> Self {
        #[cfg(test)]
        if config.base_url == DEFAULT_BASE_URL {
            panic!(
                "Tests must not use the default service URL!\n\
                 Set BLOT_BASE_URL to a mock server (e.g., wiremock).\n\
                 Found base_url: {}",
                config.base_url
            );
        }

        #[cfg(not(test))]
        if std::env::var("BLOT_BLOCK_REAL_API").is_ok_and(|v| v == "1")
            && config.base_url == DEFAULT_BASE_URL
        {
            panic!(
                "BLOT_BLOCK_REAL_API=1 but trying to use the default service URL!\n\
                 Set BLOT_BASE_URL to a mock server.\n\
                 Found base_url: {}",
                config.base_url
            );
        }

        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    /// Exchanges credentials for a session token.
    pub async fn login(&self, username: &str, password: &str) -> ApiResult<LoginResponse> {
        let url = format!("{}/api/login", self.config.base_url);
        let request = self.http.post(url).json(&serde_json::json!({
            "username": username,
            "password": password,
        }));
        send(request).await
    }

    /// Fetches the full article collection.
    pub async fn list_articles(&self, token: &str) -> ApiResult<ArticleListResponse> {
        let url = format!("{}/api/articles", self.config.base_url);
        let request = self.http.get(url).header("Authorization", token);
        send(request).await
    }

    /// Creates an article; the server assigns the id.
    pub async fn create_article(
        &self,
        token: &str,
        payload: &ArticlePayload,
    ) -> ApiResult<ArticleResponse> {
        let url = format!("{}/api/articles", self.config.base_url);
        let request = self
            .http
            .post(url)
            .header("Authorization", token)
            .json(payload);
        send(request).await
    }

    /// Replaces an existing article's fields.
    pub async fn update_article(
        &self,
        token: &str,
        id: u64,
        payload: &ArticlePayload,
    ) -> ApiResult<ArticleResponse> {
        let url = format!("{}/api/articles/{id}", self.config.base_url);
        let request = self
            .http
            .put(url)
            .header("Authorization", token)
            .json(payload);
        send(request).await
    }

    /// Deletes an article by id.
    pub async fn delete_article(&self, token: &str, id: u64) -> ApiResult<MessageResponse> {
        let url = format!("{}/api/articles/{id}", self.config.base_url);
        let request = self.http.delete(url).header("Authorization", token);
        send(request).await
    }
}

/// Sends a request and decodes the envelope, mapping failures to [`ApiError`].
async fn send<T: serde::de::DeserializeOwned>(request: reqwest::RequestBuilder) -> ApiResult<T> {
    let response = request.send().await.map_err(|e| ApiError::transport(&e))?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ApiError::from_status(status.as_u16(), &body));
    }

    response.json::<T>().await.map_err(|e| ApiError::parse(&e))
}
