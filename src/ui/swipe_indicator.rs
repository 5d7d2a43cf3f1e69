//! In-progress swipe feedback overlays.
//!
//! While a horizontal gesture is active, a chevron fades in on the side
//! the deck will navigate toward. A row of dots along the bottom shows the
//! current position in the deck.

use eframe::egui;
use egui::{Align2, FontId, Vec2};
use tiledeck::{with_alpha, NavigationContext, SwipeDirection, ThemeColors};

/// Swipe distance at which the chevron reaches full opacity.
const FULL_OPACITY_DISTANCE_PX: f32 = 150.0;

/// Renders the directional chevron for an in-progress horizontal swipe.
///
/// The chevron appears only when the deck can actually navigate that way:
/// a rightward swipe points back (left edge), a leftward swipe points
/// forward (right edge). Opacity and scale grow with swipe distance.
pub fn render_swipe_indicator(
    ctx: &egui::Context,
    direction: SwipeDirection,
    distance_px: f32,
    context: &NavigationContext,
    colors: &ThemeColors,
) {
    let (anchor, glyph, shown) = match direction {
        SwipeDirection::Right => (Align2::LEFT_CENTER, "‹", context.can_retreat),
        SwipeDirection::Left => (Align2::RIGHT_CENTER, "›", context.can_advance),
        SwipeDirection::None => return,
    };
    if !shown {
        return;
    }

    let opacity = chevron_opacity(distance_px);
    let scale = 0.8 + 0.4 * opacity;
    let alpha = (opacity * 255.0) as u8;

    egui::Area::new(egui::Id::new("swipe_indicator"))
        .anchor(anchor, Vec2::new(0.0, 0.0))
        .order(egui::Order::Foreground)
        .interactable(false)
        .show(ctx, |ui| {
            let size = Vec2::splat(72.0 * scale);
            let (rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());
            let painter = ui.painter();
            painter.circle_filled(
                rect.center(),
                rect.width() * 0.5,
                with_alpha(colors.panel_background, alpha / 2),
            );
            painter.text(
                rect.center(),
                Align2::CENTER_CENTER,
                glyph,
                FontId::proportional(40.0 * scale),
                with_alpha(colors.accent, alpha),
            );
        });
}

/// Renders the position dots along the bottom of the viewport.
///
/// Hidden when the current route is not part of the deck.
pub fn render_nav_dots(ctx: &egui::Context, context: &NavigationContext, colors: &ThemeColors) {
    let Some(current_index) = context.current_index else {
        return;
    };

    egui::Area::new(egui::Id::new("nav_dots"))
        .anchor(Align2::CENTER_BOTTOM, Vec2::new(0.0, -36.0))
        .order(egui::Order::Foreground)
        .interactable(false)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.spacing_mut().item_spacing = Vec2::new(8.0, 0.0);
                for index in 0..context.total_routes {
                    let (radius, color) = if index == current_index {
                        (4.5, colors.accent)
                    } else {
                        (3.0, with_alpha(colors.text_dim, 120))
                    };
                    let (rect, _) =
                        ui.allocate_exact_size(Vec2::splat(10.0), egui::Sense::hover());
                    ui.painter().circle_filled(rect.center(), radius, color);
                }
            });
        });
}

fn chevron_opacity(distance_px: f32) -> f32 {
    (distance_px / FULL_OPACITY_DISTANCE_PX).min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opacity_scales_with_distance_and_clamps() {
        assert!((chevron_opacity(75.0) - 0.5).abs() < 1e-6);
        assert_eq!(chevron_opacity(150.0), 1.0);
        assert_eq!(chevron_opacity(400.0), 1.0);
    }

    #[test]
    fn opacity_is_zero_at_gesture_start() {
        assert_eq!(chevron_opacity(0.0), 0.0);
    }
}
