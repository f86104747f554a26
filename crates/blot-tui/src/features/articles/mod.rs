//! Articles screen: the collection list and the create/edit form.

pub mod render;
pub mod state;
pub mod update;

pub use state::{ArticleForm, ArticlesFocus, ArticlesState, FormField};
