//! UI components and rendering subsystem.
//!
//! This module contains all UI rendering:
//! - `panel_manager`: Orchestrates all panels and their layout
//! - `login_panel`: Login gate shown before the deck
//! - `header`: Top bar with navigation, theme selector, and logout
//! - `page_panel`: Central page content rendering
//! - `tile_grid`: Clickable navigation tiles on the home page
//! - `swipe_indicator`: Gesture feedback overlays and nav dots
//! - `status_bar`: Bottom status line
//! - `input`: Touch and keyboard input handling

pub mod header;
pub mod input;
pub mod login_panel;
pub mod page_panel;
pub mod panel_manager;
pub mod status_bar;
pub mod swipe_indicator;
pub mod tile_grid;

pub use panel_manager::{PanelInteraction, PanelManager};
