//! Application-level coordination and workflow management.
//!
//! Handles high-level operations like the login workflow, logout, and
//! navigation requests coming from panels, keeping the panels themselves
//! free of state mutation logic.

use crate::app::AppState;
use tiledeck::{auth, LoginOutcome, NoHaptics, Router};

/// Coordinates application-level operations and workflows.
pub struct ApplicationCoordinator;

impl ApplicationCoordinator {
    /// Processes a submitted login form.
    ///
    /// On success the session becomes authenticated and the visit is
    /// appended to the visitor log. A log write failure does not block the
    /// login; it is reported and the visitor proceeds.
    pub fn handle_login(state: &mut AppState) {
        let (username, password, name) = state.session.form_fields();
        let (username, password, name) =
            (username.to_string(), password.to_string(), name.to_string());

        match auth::check_login(&username, &password, &name) {
            LoginOutcome::Success => {
                if let Some(log) = &state.visitor_log {
                    if let Err(e) = log.append(&name) {
                        tracing::warn!("visitor log write failed: {e:#}");
                    }
                }
                tracing::info!(visitor = %name, "login successful");
                state.session.login(name);
            }
            outcome => {
                tracing::info!(?outcome, "login rejected");
                state.session.set_login_error(outcome.message().to_string());
            }
        }
    }

    /// Ends the session and returns to the login screen.
    pub fn handle_logout(state: &mut AppState) {
        tracing::info!(visitor = ?state.session.visitor_name(), "logout");
        state.session.logout();
        state.page.go_home();
    }

    /// Handles a click on a home page navigation tile.
    pub fn handle_tile_clicked(state: &mut AppState, route: &str) {
        state.page.navigate_to(route);
    }

    /// Handles the header back button: previous page of the deck, or home
    /// when there is no previous page.
    pub fn handle_back(state: &mut AppState) {
        if !state.controller.retreat(&mut state.page, &mut NoHaptics) {
            state.page.go_home();
        }
    }

    /// Handles the header home button.
    pub fn handle_home(state: &mut AppState) {
        state.page.go_home();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tiledeck::auth::SHARED_USERNAME;

    fn filled_state(username: &str, password: &str, name: &str) -> AppState {
        let mut state = AppState::new();
        // Tests must not touch the real visitor log location
        state.visitor_log = None;
        *state.session.username_input_mut() = username.to_string();
        *state.session.password_input_mut() = password.to_string();
        *state.session.name_input_mut() = name.to_string();
        state
    }

    #[test]
    fn successful_login_authenticates() {
        let mut state = filled_state(SHARED_USERNAME, "tiles-open-2024", "Ada");
        ApplicationCoordinator::handle_login(&mut state);
        assert!(state.session.is_authenticated());
        assert_eq!(state.session.visitor_name(), Some("Ada"));
    }

    #[test]
    fn rejected_login_reports_error() {
        let mut state = filled_state(SHARED_USERNAME, "wrong", "Ada");
        ApplicationCoordinator::handle_login(&mut state);
        assert!(!state.session.is_authenticated());
        assert_eq!(state.session.login_error(), Some("Invalid credentials"));
    }

    #[test]
    fn back_retreats_through_deck_then_home() {
        let mut state = AppState::new();
        state.visitor_log = None;
        state.page.navigate_to("/governance");

        ApplicationCoordinator::handle_back(&mut state);
        assert_eq!(state.page.current_route(), "/vision");

        ApplicationCoordinator::handle_back(&mut state);
        assert_eq!(state.page.current_route(), "/");

        // At home, back stays home
        ApplicationCoordinator::handle_back(&mut state);
        assert_eq!(state.page.current_route(), "/");
    }

    #[test]
    fn back_from_unknown_route_goes_home() {
        let mut state = AppState::new();
        state.visitor_log = None;
        state.page.navigate_to("/not-in-deck");

        ApplicationCoordinator::handle_back(&mut state);
        assert_eq!(state.page.current_route(), "/");
    }

    #[test]
    fn logout_clears_session_and_returns_home() {
        let mut state = filled_state(SHARED_USERNAME, "tiles-open-2024", "Ada");
        ApplicationCoordinator::handle_login(&mut state);
        state.page.navigate_to("/vision");

        ApplicationCoordinator::handle_logout(&mut state);
        assert!(!state.session.is_authenticated());
        assert_eq!(state.page.current_route(), "/");
    }
}
