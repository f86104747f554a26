//! Article data model and the in-memory collection store.
//!
//! The store is the single owner of the article list; the UI reads
//! snapshots through borrows and mutates only through the operations here.
//! Replace/remove report an explicit [`StoreOutcome`] instead of silently
//! ignoring an unknown id.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Maximum title length accepted by the form.
pub const TITLE_MAX_LEN: usize = 50;
/// Maximum body text length accepted by the form.
pub const TEXT_MAX_LEN: usize = 200;

/// Fixed topic set served by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Topic {
    JavaScript,
    React,
    Node,
}

impl Topic {
    /// Returns all topics for iteration (e.g., in the form's picker).
    pub fn all() -> &'static [Topic] {
        &[Topic::JavaScript, Topic::React, Topic::Node]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Topic::JavaScript => "JavaScript",
            Topic::React => "React",
            Topic::Node => "Node",
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Topic {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "JavaScript" => Ok(Topic::JavaScript),
            "React" => Ok(Topic::React),
            "Node" => Ok(Topic::Node),
            _ => Err(format!("Unknown topic: {value}")),
        }
    }
}

/// An article as served by the backend.
///
/// `article_id` is server-assigned, immutable, and unique within the
/// collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub article_id: u64,
    pub title: String,
    pub text: String,
    pub topic: Topic,
}

/// Form payload for create/update requests.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ArticleDraft {
    pub title: String,
    pub text: String,
    pub topic: Option<Topic>,
}

impl ArticleDraft {
    /// Returns true when the draft can be submitted: title and text present
    /// (after trimming) and within length caps, topic chosen.
    ///
    /// Length caps match the form's input limits; the server is the real
    /// authority and re-checks on its side.
    pub fn is_submittable(&self) -> bool {
        let title = self.title.trim();
        let text = self.text.trim();
        !title.is_empty()
            && title.chars().count() <= TITLE_MAX_LEN
            && !text.is_empty()
            && text.chars().count() <= TEXT_MAX_LEN
            && self.topic.is_some()
    }

    /// Creates a draft pre-filled from an existing article (edit mode).
    pub fn from_article(article: &Article) -> Self {
        Self {
            title: article.title.clone(),
            text: article.text.clone(),
            topic: Some(article.topic),
        }
    }
}

/// Validated request body for create/update endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArticlePayload {
    pub title: String,
    pub text: String,
    pub topic: Topic,
}

impl ArticleDraft {
    /// Converts the draft into a wire payload, trimming title/text.
    /// Returns `None` when the draft is not submittable.
    pub fn to_payload(&self) -> Option<ArticlePayload> {
        if !self.is_submittable() {
            return None;
        }
        Some(ArticlePayload {
            title: self.title.trim().to_string(),
            text: self.text.trim().to_string(),
            topic: self.topic?,
        })
    }
}

/// Result of a store mutation that targets an id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreOutcome {
    /// The targeted article was found and the mutation applied.
    Applied,
    /// No article with the given id exists; state is unchanged.
    NotFound,
}

/// Ordered, in-memory article collection.
#[derive(Debug, Clone, Default)]
pub struct ArticleStore {
    items: Vec<Article>,
}

impl ArticleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the entire collection, preserving server order.
    pub fn load(&mut self, items: Vec<Article>) {
        self.items = items;
    }

    /// Appends an article. Id uniqueness is guaranteed by the server and
    /// not re-checked here.
    pub fn insert(&mut self, item: Article) {
        self.items.push(item);
    }

    /// Replaces the article with a matching id in place, preserving its
    /// position in the sequence.
    pub fn replace_by_id(&mut self, id: u64, item: Article) -> StoreOutcome {
        match self.items.iter_mut().find(|a| a.article_id == id) {
            Some(slot) => {
                *slot = item;
                StoreOutcome::Applied
            }
            None => StoreOutcome::NotFound,
        }
    }

    /// Removes the article with a matching id.
    pub fn remove_by_id(&mut self, id: u64) -> StoreOutcome {
        let before = self.items.len();
        self.items.retain(|a| a.article_id != id);
        if self.items.len() < before {
            StoreOutcome::Applied
        } else {
            StoreOutcome::NotFound
        }
    }

    pub fn get(&self, id: u64) -> Option<&Article> {
        self.items.iter().find(|a| a.article_id == id)
    }

    pub fn items(&self) -> &[Article] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// The article currently selected for editing, or none (create mode).
///
/// A target that no longer resolves to a stored article (e.g. after a
/// concurrent delete) behaves exactly like no target: there is a single
/// "no target" sentinel, `None`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EditTarget {
    id: Option<u64>,
}

impl EditTarget {
    pub fn select(&mut self, id: u64) {
        self.id = Some(id);
    }

    pub fn clear(&mut self) {
        self.id = None;
    }

    pub fn id(&self) -> Option<u64> {
        self.id
    }

    /// Returns true when no article is targeted (create mode).
    pub fn is_create_mode(&self, store: &ArticleStore) -> bool {
        self.current_article(store).is_none()
    }

    /// Resolves the target against the store. Stale targets yield `None`.
    pub fn current_article<'a>(&self, store: &'a ArticleStore) -> Option<&'a Article> {
        self.id.and_then(|id| store.get(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(id: u64, title: &str) -> Article {
        Article {
            article_id: id,
            title: title.to_string(),
            text: format!("text for {title}"),
            topic: Topic::React,
        }
    }

    #[test]
    fn test_topic_parse_and_serialize() {
        assert_eq!(Topic::from_str("JavaScript").unwrap(), Topic::JavaScript);
        assert_eq!(Topic::from_str("Node").unwrap(), Topic::Node);
        assert!(Topic::from_str("Rust").is_err());

        let json = serde_json::to_string(&Topic::React).unwrap();
        assert_eq!(json, "\"React\"");
    }

    #[test]
    fn test_load_replaces_everything() {
        let mut store = ArticleStore::new();
        store.load(vec![article(1, "old")]);
        store.load(vec![article(2, "a"), article(3, "b")]);

        let ids: Vec<u64> = store.items().iter().map(|a| a.article_id).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn test_replace_by_id_preserves_position() {
        let mut store = ArticleStore::new();
        store.load(vec![article(1, "a"), article(2, "b"), article(3, "c")]);

        let outcome = store.replace_by_id(2, article(2, "b2"));
        assert_eq!(outcome, StoreOutcome::Applied);

        let titles: Vec<&str> = store.items().iter().map(|a| a.title.as_str()).collect();
        assert_eq!(titles, vec!["a", "b2", "c"]);
    }

    #[test]
    fn test_replace_missing_id_is_explicit() {
        let mut store = ArticleStore::new();
        store.load(vec![article(1, "a")]);

        assert_eq!(
            store.replace_by_id(99, article(99, "ghost")),
            StoreOutcome::NotFound
        );
        assert_eq!(store.len(), 1);
        assert_eq!(store.items()[0].title, "a");
    }

    #[test]
    fn test_remove_by_id() {
        let mut store = ArticleStore::new();
        store.load(vec![article(1, "a"), article(2, "b")]);

        assert_eq!(store.remove_by_id(1), StoreOutcome::Applied);
        let ids: Vec<u64> = store.items().iter().map(|a| a.article_id).collect();
        assert_eq!(ids, vec![2]);

        assert_eq!(store.remove_by_id(1), StoreOutcome::NotFound);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_stale_edit_target_resolves_to_none() {
        let mut store = ArticleStore::new();
        store.load(vec![article(1, "a")]);

        let mut target = EditTarget::default();
        target.select(1);
        assert!(target.current_article(&store).is_some());

        store.remove_by_id(1);
        assert!(target.current_article(&store).is_none());
        assert!(target.is_create_mode(&store));
    }

    #[test]
    fn test_draft_submit_gating() {
        let mut draft = ArticleDraft::default();
        assert!(!draft.is_submittable());

        draft.title = "Hello".to_string();
        draft.text = "World".to_string();
        assert!(!draft.is_submittable(), "topic still missing");

        draft.topic = Some(Topic::Node);
        assert!(draft.is_submittable());

        draft.title = " ".to_string();
        assert!(!draft.is_submittable(), "whitespace-only title");

        draft.title = "x".repeat(TITLE_MAX_LEN + 1);
        assert!(!draft.is_submittable(), "title over cap");
    }
}
