//! Home page navigation tile grid.
//!
//! Renders one clickable tile per deck page. Tiles are plain data from
//! `tiledeck::content`; clicking a tile requests navigation to its route.

use crate::presentation::color_mapping;
use eframe::egui;
use egui::{Align2, Color32, FontId, Sense, Stroke, Vec2};
use tiledeck::{adjust_brightness, with_alpha, ThemeColors, TILES};

const TILE_SIZE: Vec2 = Vec2::new(170.0, 120.0);
const TILE_ROUNDING: f32 = 10.0;

/// Renders the tile grid and returns the route of a clicked tile, if any.
pub fn render_tile_grid(ui: &mut egui::Ui, colors: &ThemeColors) -> Option<String> {
    let mut clicked_route = None;

    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing = Vec2::splat(14.0);

        for (index, tile) in TILES.iter().enumerate() {
            let accent = color_mapping::tile_color(index, colors);
            let (rect, response) = ui.allocate_exact_size(TILE_SIZE, Sense::click());

            if ui.is_rect_visible(rect) {
                let hovered = response.hovered();
                let fill_accent = if hovered {
                    adjust_brightness(accent, 1.25)
                } else {
                    accent
                };

                let painter = ui.painter();
                painter.rect_filled(rect, TILE_ROUNDING, with_alpha(fill_accent, 36));
                painter.rect_stroke(
                    rect,
                    TILE_ROUNDING,
                    Stroke::new(1.0, with_alpha(fill_accent, 140)),
                    egui::StrokeKind::Inside,
                );

                painter.text(
                    rect.center() - Vec2::new(0.0, 14.0),
                    Align2::CENTER_CENTER,
                    tile.title,
                    FontId::proportional(16.0),
                    colors.text_strong,
                );
                painter.text(
                    rect.center() + Vec2::new(0.0, 14.0),
                    Align2::CENTER_CENTER,
                    truncate(tile.description, 32),
                    FontId::proportional(11.0),
                    colors.text_dim,
                );

                if hovered {
                    painter.rect_filled(rect, TILE_ROUNDING, with_alpha(Color32::WHITE, 8));
                }
            }

            if response.clicked() {
                clicked_route = Some(tile.route.to_string());
            }
        }
    });

    clicked_route
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max_chars.saturating_sub(1)).collect();
        format!("{}…", cut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_keeps_short_text() {
        assert_eq!(truncate("short", 10), "short");
    }

    #[test]
    fn truncate_cuts_long_text_with_ellipsis() {
        let long = "a very long tile description indeed";
        let out = truncate(long, 10);
        assert!(out.ends_with('…'));
        assert!(out.chars().count() <= 10);
    }
}
