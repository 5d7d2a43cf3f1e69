//! Swipe and keyboard input handling for deck navigation.
//!
//! Reduces the frame's raw egui touch events to `TouchSample`s and feeds
//! them to the swipe navigation controller in event order. While the
//! controller reports a horizontal gesture, page scrolling is suppressed so
//! the swipe does not also pan the content. Arrow keys navigate through the
//! same adjacency rules as swipes.

use eframe::egui;
use tiledeck::{NoHaptics, Router, SwipeNavigationController, TouchSample};

/// Result of swipe/keyboard input handling for one frame.
pub struct SwipeInputResult {
    /// True while a horizontal gesture is in progress; the page's scroll
    /// area must be disabled for this frame
    pub suppress_scroll: bool,
    /// True if a navigation was issued this frame
    pub navigated: bool,
}

/// Processes this frame's touch and keyboard events against the controller.
///
/// Touch events carry no per-event timestamp in egui, so all samples of a
/// frame share the frame time. That granularity is sufficient for the
/// velocity computed at gesture end.
pub fn handle_swipe_input(
    ctx: &egui::Context,
    controller: &mut SwipeNavigationController,
    router: &mut dyn Router,
) -> SwipeInputResult {
    let now_ms = ctx.input(|i| i.time) * 1000.0;
    let events = ctx.input(|i| i.events.clone());

    let mut suppress_scroll = false;
    let mut navigated = false;
    let mut haptics = NoHaptics;

    for event in events {
        if let egui::Event::Touch { id, phase, pos, .. } = event {
            match phase {
                egui::TouchPhase::Start => {
                    controller.on_touch_start(id.0, TouchSample::new(pos.x, pos.y, now_ms));
                }
                egui::TouchPhase::Move => {
                    if controller.on_touch_move(id.0, TouchSample::new(pos.x, pos.y, now_ms)) {
                        suppress_scroll = true;
                    }
                }
                egui::TouchPhase::End => {
                    if controller.on_touch_end(now_ms, router, &mut haptics) {
                        navigated = true;
                    }
                }
                egui::TouchPhase::Cancel => {
                    controller.on_touch_cancel();
                }
            }
        }
    }

    // A gesture that classified horizontal on an earlier frame keeps scroll
    // suppressed until it ends or is cancelled.
    if controller.gesture().is_active() {
        suppress_scroll = true;
    }

    if ctx.input(|i| i.key_pressed(egui::Key::ArrowRight)) {
        navigated |= controller.advance(router, &mut haptics);
    }
    if ctx.input(|i| i.key_pressed(egui::Key::ArrowLeft)) {
        navigated |= controller.retreat(router, &mut haptics);
    }

    SwipeInputResult {
        suppress_scroll,
        navigated,
    }
}
