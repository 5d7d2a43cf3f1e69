//! Input handling subsystem for UI interactions.
//!
//! This module contains all input handling logic:
//! - Touch gesture handling (swipe navigation, scroll suppression)
//! - Keyboard navigation (arrow keys)

pub mod swipe_input_handler;
