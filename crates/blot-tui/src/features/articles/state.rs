//! Articles screen state: collection, list selection, and the edit form.

use blot_core::articles::{
    Article, ArticleDraft, ArticleStore, EditTarget, TEXT_MAX_LEN, TITLE_MAX_LEN, Topic,
};

use crate::common::TextField;

/// Which pane has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArticlesFocus {
    List,
    Form,
}

/// Which form field has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    Text,
    Topic,
}

/// The create/edit form. Length caps are enforced at input time; the
/// submit gate re-checks them through [`ArticleDraft::is_submittable`].
#[derive(Debug, Clone)]
pub struct ArticleForm {
    pub title: TextField,
    pub text: TextField,
    pub topic: Option<Topic>,
    pub field: FormField,
}

impl Default for ArticleForm {
    fn default() -> Self {
        Self {
            title: TextField::with_max_len(TITLE_MAX_LEN),
            text: TextField::with_max_len(TEXT_MAX_LEN),
            topic: None,
            field: FormField::Title,
        }
    }
}

impl ArticleForm {
    pub fn draft(&self) -> ArticleDraft {
        ArticleDraft {
            title: self.title.value().to_string(),
            text: self.text.value().to_string(),
            topic: self.topic,
        }
    }

    /// Loads an existing article's values for editing.
    pub fn prefill(&mut self, article: &Article) {
        self.title.set_value(&article.title);
        self.text.set_value(&article.text);
        self.topic = Some(article.topic);
        self.field = FormField::Title;
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn focused_field_mut(&mut self) -> Option<&mut TextField> {
        match self.field {
            FormField::Title => Some(&mut self.title),
            FormField::Text => Some(&mut self.text),
            FormField::Topic => None,
        }
    }

    pub fn next_field(&mut self) {
        self.field = match self.field {
            FormField::Title => FormField::Text,
            FormField::Text => FormField::Topic,
            FormField::Topic => FormField::Title,
        };
    }

    pub fn prev_field(&mut self) {
        self.field = match self.field {
            FormField::Title => FormField::Topic,
            FormField::Text => FormField::Title,
            FormField::Topic => FormField::Text,
        };
    }

    /// Steps the topic picker forward or backward through the fixed set.
    pub fn cycle_topic(&mut self, step: isize) {
        let topics = Topic::all();
        let current = self
            .topic
            .and_then(|t| topics.iter().position(|&candidate| candidate == t));
        let next = match current {
            Some(idx) => {
                let len = topics.len() as isize;
                ((idx as isize + step).rem_euclid(len)) as usize
            }
            None => {
                if step < 0 {
                    topics.len() - 1
                } else {
                    0
                }
            }
        };
        self.topic = Some(topics[next]);
    }
}

/// State for the whole articles screen.
#[derive(Debug, Clone)]
pub struct ArticlesState {
    pub store: ArticleStore,
    /// Index of the highlighted row in the list.
    pub selected: usize,
    pub focus: ArticlesFocus,
    pub form: ArticleForm,
    pub edit_target: EditTarget,
}

impl Default for ArticlesState {
    fn default() -> Self {
        Self {
            store: ArticleStore::new(),
            selected: 0,
            focus: ArticlesFocus::List,
            form: ArticleForm::default(),
            edit_target: EditTarget::default(),
        }
    }
}

impl ArticlesState {
    pub fn selected_article(&self) -> Option<&Article> {
        self.store.items().get(self.selected)
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.store.len() {
            self.selected += 1;
        }
    }

    /// Keeps the selection inside the list after the store shrank.
    pub fn clamp_selection(&mut self) {
        if self.store.is_empty() {
            self.selected = 0;
        } else if self.selected >= self.store.len() {
            self.selected = self.store.len() - 1;
        }
    }

    /// Whether the form is editing an existing article.
    pub fn is_editing(&self) -> bool {
        !self.edit_target.is_create_mode(&self.store)
    }

    /// Leaves edit mode and empties the form.
    pub fn reset_form(&mut self) {
        self.edit_target.clear();
        self.form.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(id: u64) -> Article {
        Article {
            article_id: id,
            title: format!("title {id}"),
            text: format!("text {id}"),
            topic: Topic::JavaScript,
        }
    }

    #[test]
    fn test_topic_cycle_wraps() {
        let mut form = ArticleForm::default();
        assert!(form.topic.is_none());

        form.cycle_topic(1);
        assert_eq!(form.topic, Some(Topic::JavaScript));
        form.cycle_topic(1);
        assert_eq!(form.topic, Some(Topic::React));
        form.cycle_topic(1);
        assert_eq!(form.topic, Some(Topic::Node));
        form.cycle_topic(1);
        assert_eq!(form.topic, Some(Topic::JavaScript));

        form.cycle_topic(-1);
        assert_eq!(form.topic, Some(Topic::Node));
    }

    #[test]
    fn test_prefill_and_reset() {
        let mut state = ArticlesState::default();
        state.store.load(vec![article(7)]);

        state.edit_target.select(7);
        let existing = state.store.get(7).cloned().unwrap();
        state.form.prefill(&existing);
        assert!(state.is_editing());
        assert_eq!(state.form.title.value(), "title 7");

        state.reset_form();
        assert!(!state.is_editing());
        assert!(state.form.title.is_empty());
        assert!(state.form.topic.is_none());
    }

    #[test]
    fn test_selection_clamped_after_removal() {
        let mut state = ArticlesState::default();
        state.store.load(vec![article(1), article(2)]);
        state.selected = 1;

        state.store.remove_by_id(2);
        state.clamp_selection();
        assert_eq!(state.selected, 0);

        state.store.remove_by_id(1);
        state.clamp_selection();
        assert_eq!(state.selected, 0);
    }
}
