//! State management modules for the TileDeck GUI.
//!
//! This module contains state-only logic (no UI concerns):
//! - Session state (login gate, visitor name, form buffers)
//! - Page state (current route, the app-side Router implementation)
//! - Theme state (theme manager, current theme)

mod page_state;
mod session;
mod theme_state;

pub use page_state::PageState;
pub use session::SessionState;
pub use theme_state::ThemeState;
