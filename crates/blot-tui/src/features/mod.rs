//! Feature modules, one directory per screen or widget.
//!
//! Each feature keeps its state, key handling, and rendering together:
//! - `login` - the credentials form shown before a session exists
//! - `articles` - the article list plus the create/edit form
//! - `statusline` - the one-line message bar with the busy spinner

pub mod articles;
pub mod login;
pub mod statusline;
