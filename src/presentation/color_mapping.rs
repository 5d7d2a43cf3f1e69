//! Color mapping for navigation tiles and themed UI elements.
//!
//! Tile colors are assigned deterministically from the tile's position in
//! the grid, rotating through the theme's tile palette.

use egui::Color32;
use tiledeck::{ThemeColors, ThemeManager};

/// Returns a reference to the current theme's color palette.
///
/// Falls back to the Midnight palette if the named theme does not exist.
pub fn theme_colors<'a>(
    theme_manager: &'a ThemeManager,
    current_theme_name: &str,
) -> &'a ThemeColors {
    theme_manager
        .get_theme(current_theme_name)
        .map(|t| &t.colors)
        .unwrap_or_else(|| &theme_manager.get_theme("Midnight").unwrap().colors)
}

/// Returns the accent color for the tile at the given grid position.
pub fn tile_color(index: usize, colors: &ThemeColors) -> Color32 {
    colors.tile_palette[index % colors.tile_palette.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_theme_falls_back_to_midnight() {
        let manager = ThemeManager::new();
        let fallback = theme_colors(&manager, "NoSuchTheme");
        let midnight = &manager.get_theme("Midnight").unwrap().colors;
        assert_eq!(fallback.accent, midnight.accent);
    }

    #[test]
    fn tile_colors_rotate_through_palette() {
        let manager = ThemeManager::new();
        let colors = theme_colors(&manager, "Midnight");
        let n = colors.tile_palette.len();
        assert_eq!(tile_color(0, colors), tile_color(n, colors));
        assert_ne!(tile_color(0, colors), tile_color(1, colors));
    }
}
