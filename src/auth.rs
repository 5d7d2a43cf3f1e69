//! Shared-credential login gate.
//!
//! The deck is protected by one set of shared credentials; the login form
//! additionally captures the visitor's name so each viewing can be recorded
//! in the visitor log. There are no per-user accounts.

/// Username accepted by the gate.
pub const SHARED_USERNAME: &str = "deck";

/// Password accepted by the gate.
const SHARED_PASSWORD: &str = "tiles-open-2024";

/// Outcome of a login attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Credentials matched and a visitor name was supplied
    Success,
    /// One or more of username, password, or name was empty
    MissingFields,
    /// Username or password did not match the shared credentials
    InvalidCredentials,
}

impl LoginOutcome {
    /// Message shown to the visitor for a failed attempt.
    pub fn message(&self) -> &'static str {
        match self {
            LoginOutcome::Success => "Login successful",
            LoginOutcome::MissingFields => "Username, password, and name are required",
            LoginOutcome::InvalidCredentials => "Invalid credentials",
        }
    }
}

/// Checks whether the given credentials match the shared credentials.
pub fn verify_credentials(username: &str, password: &str) -> bool {
    username == SHARED_USERNAME && password == SHARED_PASSWORD
}

/// Validates a full login attempt: all fields present, credentials correct.
pub fn check_login(username: &str, password: &str, name: &str) -> LoginOutcome {
    if username.is_empty() || password.is_empty() || name.is_empty() {
        return LoginOutcome::MissingFields;
    }
    if verify_credentials(username, password) {
        LoginOutcome::Success
    } else {
        LoginOutcome::InvalidCredentials
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_login_succeeds() {
        assert_eq!(
            check_login(SHARED_USERNAME, "tiles-open-2024", "Ada"),
            LoginOutcome::Success
        );
    }

    #[test]
    fn wrong_password_is_rejected() {
        assert_eq!(
            check_login(SHARED_USERNAME, "guess", "Ada"),
            LoginOutcome::InvalidCredentials
        );
    }

    #[test]
    fn wrong_username_is_rejected() {
        assert_eq!(
            check_login("someone", "tiles-open-2024", "Ada"),
            LoginOutcome::InvalidCredentials
        );
    }

    #[test]
    fn empty_fields_are_rejected_before_credential_check() {
        assert_eq!(
            check_login("", "tiles-open-2024", "Ada"),
            LoginOutcome::MissingFields
        );
        assert_eq!(
            check_login(SHARED_USERNAME, "", "Ada"),
            LoginOutcome::MissingFields
        );
        assert_eq!(
            check_login(SHARED_USERNAME, "tiles-open-2024", ""),
            LoginOutcome::MissingFields
        );
    }
}
