//! Login session state.
//!
//! Encapsulates the authentication flag, the recorded visitor name, the
//! login form's text buffers, and the last login error. The session is
//! in-memory only: relaunching the application always returns to the login
//! screen.

/// State related to the login gate and the current visitor.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    /// Whether the visitor has passed the login gate
    authenticated: bool,
    /// Name entered by the visitor at login
    visitor_name: Option<String>,
    /// Login form buffers
    username_input: String,
    password_input: String,
    name_input: String,
    /// Message shown for the last failed login attempt
    login_error: Option<String>,
}

impl SessionState {
    /// Creates a fresh, unauthenticated session.
    pub fn new() -> Self {
        Self::default()
    }

    // ===== Queries =====

    /// Returns true if the visitor has passed the login gate.
    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// Returns the visitor's name, once logged in.
    pub fn visitor_name(&self) -> Option<&str> {
        self.visitor_name.as_deref()
    }

    /// Returns the current login error message, if any.
    pub fn login_error(&self) -> Option<&str> {
        self.login_error.as_deref()
    }

    // ===== Form buffer access (for the login panel) =====

    pub fn username_input_mut(&mut self) -> &mut String {
        &mut self.username_input
    }

    pub fn password_input_mut(&mut self) -> &mut String {
        &mut self.password_input
    }

    pub fn name_input_mut(&mut self) -> &mut String {
        &mut self.name_input
    }

    /// Returns the form fields as (username, password, name).
    pub fn form_fields(&self) -> (&str, &str, &str) {
        (&self.username_input, &self.password_input, &self.name_input)
    }

    // ===== Mutations =====

    /// Marks the session authenticated for the given visitor and clears the
    /// form buffers.
    pub fn login(&mut self, visitor_name: String) {
        self.authenticated = true;
        self.visitor_name = Some(visitor_name);
        self.username_input.clear();
        self.password_input.clear();
        self.name_input.clear();
        self.login_error = None;
    }

    /// Records a failed login attempt.
    pub fn set_login_error(&mut self, message: String) {
        self.login_error = Some(message);
    }

    /// Ends the session and clears all visitor data.
    pub fn logout(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_sets_visitor_and_clears_buffers() {
        let mut session = SessionState::new();
        assert!(!session.is_authenticated());

        *session.username_input_mut() = "deck".to_string();
        *session.password_input_mut() = "secret".to_string();
        *session.name_input_mut() = "Ada".to_string();
        session.set_login_error("Invalid credentials".to_string());

        session.login("Ada".to_string());
        assert!(session.is_authenticated());
        assert_eq!(session.visitor_name(), Some("Ada"));
        assert_eq!(session.form_fields(), ("", "", ""));
        assert_eq!(session.login_error(), None);
    }

    #[test]
    fn logout_resets_everything() {
        let mut session = SessionState::new();
        session.login("Ada".to_string());

        session.logout();
        assert!(!session.is_authenticated());
        assert_eq!(session.visitor_name(), None);
    }
}
