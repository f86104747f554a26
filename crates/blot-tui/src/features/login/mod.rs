//! Login screen: username/password form that starts a session.

pub mod render;
pub mod state;
pub mod update;

pub use state::{LoginField, LoginState};
