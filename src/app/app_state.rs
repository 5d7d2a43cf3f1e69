//! Centralized application state for the TileDeck GUI.
//!
//! Composes focused state components that each manage one aspect of the
//! application:
//! - Keeps invariants local within each component
//! - Allows borrow-checker friendly access to different state aspects
//! - Provides intent-revealing methods for state mutations

use crate::state::{PageState, SessionState, ThemeState};
use tiledeck::{SwipeConfig, SwipeNavigationController, VisitorLog};

/// Main application state composed of focused state components.
pub struct AppState {
    // ===== Focused State Components =====
    /// Login gate and visitor state
    pub session: SessionState,

    /// Current page route (the app-side Router)
    pub page: PageState,

    /// Theme and styling state
    pub theme: ThemeState,

    // ===== Top-Level State =====
    /// Swipe navigation controller over the deck's route list
    pub controller: SwipeNavigationController,

    /// Visitor log handle; None when no per-user data directory exists
    pub visitor_log: Option<VisitorLog>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Creates a new application state with default values.
    pub fn new() -> Self {
        Self {
            session: SessionState::new(),
            page: PageState::new(),
            theme: ThemeState::new(),
            controller: SwipeNavigationController::new(SwipeConfig::default()),
            visitor_log: open_visitor_log(),
        }
    }

    /// Creates a new AppState with theme and last route loaded from storage.
    pub fn with_theme_and_route(theme_name: String, route: String) -> Self {
        Self {
            session: SessionState::new(),
            page: PageState::with_route(route),
            theme: ThemeState::with_theme(theme_name),
            controller: SwipeNavigationController::new(SwipeConfig::default()),
            visitor_log: open_visitor_log(),
        }
    }

    /// Returns mutable references for input handling (splits borrows).
    pub fn for_input_handler(&mut self) -> (&mut SwipeNavigationController, &mut PageState) {
        (&mut self.controller, &mut self.page)
    }
}

fn open_visitor_log() -> Option<VisitorLog> {
    match VisitorLog::default_location() {
        Ok(log) => Some(log),
        Err(e) => {
            tracing::warn!("visitor log unavailable: {e:#}");
            None
        }
    }
}
