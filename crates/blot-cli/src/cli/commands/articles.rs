//! Article command handlers.

use anyhow::Result;
use blot_core::articles::{Article, ArticleDraft, Topic};
use blot_core::config::Config;

use super::{api_client, auth_failure, session_token};

pub async fn list(config: &Config) -> Result<()> {
    let client = api_client(config)?;
    let token = session_token()?;

    let response = client.list_articles(&token).await.map_err(auth_failure)?;

    println!("{}", response.message);
    if response.articles.is_empty() {
        println!("No articles.");
        return Ok(());
    }
    for article in &response.articles {
        print_article(article);
    }
    Ok(())
}

pub async fn create(config: &Config, title: &str, text: &str, topic: Topic) -> Result<()> {
    let payload = validated_payload(title, text, topic)?;
    let client = api_client(config)?;
    let token = session_token()?;

    let response = client
        .create_article(&token, &payload)
        .await
        .map_err(auth_failure)?;

    println!("{}", response.message);
    print_article(&response.article);
    Ok(())
}

pub async fn update(config: &Config, id: u64, title: &str, text: &str, topic: Topic) -> Result<()> {
    let payload = validated_payload(title, text, topic)?;
    let client = api_client(config)?;
    let token = session_token()?;

    let response = client
        .update_article(&token, id, &payload)
        .await
        .map_err(auth_failure)?;

    println!("{}", response.message);
    print_article(&response.article);
    Ok(())
}

pub async fn delete(config: &Config, id: u64) -> Result<()> {
    let client = api_client(config)?;
    let token = session_token()?;

    let response = client
        .delete_article(&token, id)
        .await
        .map_err(auth_failure)?;

    println!("{}", response.message);
    Ok(())
}

/// Applies the same presence/length checks as the TUI form before issuing
/// the request.
fn validated_payload(
    title: &str,
    text: &str,
    topic: Topic,
) -> Result<blot_core::articles::ArticlePayload> {
    let draft = ArticleDraft {
        title: title.to_string(),
        text: text.to_string(),
        topic: Some(topic),
    };
    draft.to_payload().ok_or_else(|| {
        anyhow::anyhow!(
            "Invalid article: title (1-{} chars) and text (1-{} chars) are required",
            blot_core::articles::TITLE_MAX_LEN,
            blot_core::articles::TEXT_MAX_LEN
        )
    })
}

fn print_article(article: &Article) {
    println!(
        "#{} [{}] {}\n    {}",
        article.article_id, article.topic, article.title, article.text
    );
}
