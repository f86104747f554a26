//! Status line state.

/// The last operation's one-line outcome message.
///
/// Every operation start clears the message; every completion overwrites it.
/// The busy flag is not stored here: it is derived from the task table so it
/// can never stay stuck after a completion.
#[derive(Debug, Clone, Default)]
pub struct StatusState {
    message: Option<String>,
}

impl StatusState {
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
    }

    /// Clears the message, called when a new operation starts.
    pub fn clear(&mut self) {
        self.message = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_overwritten() {
        let mut status = StatusState::default();
        assert!(status.message().is_none());

        status.set_message("Welcome back!");
        assert_eq!(status.message(), Some("Welcome back!"));

        status.clear();
        assert!(status.message().is_none());

        status.set_message("Article created");
        status.set_message("Article deleted");
        assert_eq!(status.message(), Some("Article deleted"));
    }
}
