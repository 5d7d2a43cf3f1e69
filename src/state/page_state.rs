//! Current page state.
//!
//! Holds the route of the page currently shown and implements the
//! controller's `Router` trait, so swipe navigation, keyboard navigation,
//! and tile clicks all flow through the same state.

use tiledeck::Router;

/// State holding the currently displayed route.
#[derive(Debug, Clone)]
pub struct PageState {
    /// Route of the page currently shown
    current_route: String,
}

impl Default for PageState {
    fn default() -> Self {
        Self::new()
    }
}

impl PageState {
    /// Creates page state positioned at the home route.
    pub fn new() -> Self {
        Self {
            current_route: "/".to_string(),
        }
    }

    /// Creates page state positioned at a specific route
    /// (e.g. restored from storage).
    pub fn with_route(route: String) -> Self {
        Self {
            current_route: route,
        }
    }

    /// Returns to the home route.
    pub fn go_home(&mut self) {
        self.current_route = "/".to_string();
    }

    /// Returns true if the home page is shown.
    pub fn is_home(&self) -> bool {
        self.current_route == "/"
    }
}

impl Router for PageState {
    fn current_route(&self) -> &str {
        &self.current_route
    }

    fn navigate_to(&mut self, route: &str) {
        self.current_route = route.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_home() {
        let page = PageState::new();
        assert_eq!(page.current_route(), "/");
        assert!(page.is_home());
    }

    #[test]
    fn navigate_and_go_home() {
        let mut page = PageState::with_route("/vision".to_string());
        assert!(!page.is_home());

        page.navigate_to("/governance");
        assert_eq!(page.current_route(), "/governance");

        page.go_home();
        assert!(page.is_home());
    }
}
