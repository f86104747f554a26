//! Login form state.

use crate::common::TextField;

/// Which form field has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginField {
    Username,
    Password,
}

/// The credentials form.
#[derive(Debug, Clone)]
pub struct LoginState {
    pub username: TextField,
    pub password: TextField,
    pub focus: LoginField,
}

impl Default for LoginState {
    fn default() -> Self {
        Self {
            username: TextField::new(),
            password: TextField::new(),
            focus: LoginField::Username,
        }
    }
}

impl LoginState {
    /// Pre-fills the username (e.g. from config) and moves focus to the
    /// password field.
    pub fn with_username(username: &str) -> Self {
        let mut state = Self::default();
        state.username.set_value(username);
        if !username.is_empty() {
            state.focus = LoginField::Password;
        }
        state
    }

    pub fn focused_field_mut(&mut self) -> &mut TextField {
        match self.focus {
            LoginField::Username => &mut self.username,
            LoginField::Password => &mut self.password,
        }
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            LoginField::Username => LoginField::Password,
            LoginField::Password => LoginField::Username,
        };
    }

    /// Both credentials present after trimming.
    pub fn can_submit(&self) -> bool {
        !self.username.value().trim().is_empty() && !self.password.value().trim().is_empty()
    }

    /// Clears the password, keeping the username for a retry.
    pub fn reset_password(&mut self) {
        self.password.clear();
        self.focus = LoginField::Password;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_requires_both_fields() {
        let mut form = LoginState::default();
        assert!(!form.can_submit());

        form.username.set_value("alice");
        assert!(!form.can_submit());

        form.password.set_value("hunter2");
        assert!(form.can_submit());

        form.password.set_value("   ");
        assert!(!form.can_submit(), "whitespace-only password");
    }

    #[test]
    fn test_prefilled_username_focuses_password() {
        let form = LoginState::with_username("alice");
        assert_eq!(form.username.value(), "alice");
        assert_eq!(form.focus, LoginField::Password);
    }
}
