pub mod auth;
pub mod content;
pub mod controller;
pub mod gesture;
pub mod theme;
pub mod visitor_log;

// Export gesture primitives
pub use gesture::{
    GestureState, SwipeDirection, TouchSample,
    HORIZONTAL_RATIO, MIN_INTENT_PX,
};

// Export the navigation controller and its collaborator traits
pub use controller::{
    Haptics, NavigationContext, NoHaptics, Router,
    SwipeConfig, SwipeNavigationController,
};

// Export the login gate
pub use auth::{check_login, verify_credentials, LoginOutcome, SHARED_USERNAME};

// Export the visitor log
pub use visitor_log::{VisitorLog, VisitorRecord};

// Export deck content
pub use content::{default_routes, page_for_route, Page, Section, Tile, DECK, TILES};

// Export theme support
pub use theme::{adjust_brightness, hex_to_color32, with_alpha, Theme, ThemeColors, ThemeManager};
