//! Theme support for the TileDeck GUI.
//!
//! Provides the color palettes used by the deck pages and navigation tiles,
//! and a manager that applies a palette to egui visuals. Built-in themes:
//! Light, Dark, and Midnight (the deep-blue kiosk look used for
//! presentations).

use egui::Color32;
use std::collections::HashMap;

/// Number of distinct tile accent colors per theme.
pub const TILE_PALETTE_SIZE: usize = 6;

/// Complete color palette for a theme.
#[derive(Debug, Clone)]
pub struct ThemeColors {
    // Background colors
    pub background: Color32,
    pub panel_background: Color32,
    pub extreme_background: Color32,

    // Foreground colors
    pub text: Color32,
    pub text_dim: Color32,
    pub text_strong: Color32,

    // Interactive colors
    pub selection: Color32,
    pub hover: Color32,
    pub border: Color32,

    // Accent and feedback colors
    pub accent: Color32,
    pub error: Color32,
    pub warning: Color32,

    /// Rotating accent colors for the home page tile grid
    pub tile_palette: [Color32; TILE_PALETTE_SIZE],
}

/// A complete theme definition with metadata and color palette.
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub description: String,
    pub colors: ThemeColors,
}

/// Centralized theme manager providing access to all available themes.
pub struct ThemeManager {
    themes: HashMap<String, Theme>,
}

impl ThemeManager {
    /// Creates a new ThemeManager initialized with all built-in themes.
    pub fn new() -> Self {
        let mut themes = HashMap::new();

        themes.insert("Light".to_string(), light_theme());
        themes.insert("Dark".to_string(), dark_theme());
        themes.insert("Midnight".to_string(), midnight_theme());

        Self { themes }
    }

    /// Retrieves a theme by name.
    pub fn get_theme(&self, name: &str) -> Option<&Theme> {
        self.themes.get(name)
    }

    /// Returns a sorted list of all available theme names.
    pub fn list_themes(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.themes.keys().map(|s| s.as_str()).collect();
        names.sort();
        names
    }

    /// Applies a theme's colors to egui visuals.
    pub fn apply_theme(&self, theme: &Theme, visuals: &mut egui::Visuals) {
        let colors = &theme.colors;

        visuals.panel_fill = colors.panel_background;
        visuals.extreme_bg_color = colors.extreme_background;
        visuals.faint_bg_color = colors.hover;

        visuals.override_text_color = Some(colors.text);

        visuals.selection.bg_fill = colors.selection;
        visuals.selection.stroke.color = colors.accent;

        visuals.widgets.noninteractive.bg_fill = colors.panel_background;
        visuals.widgets.inactive.bg_fill = colors.hover;
        visuals.widgets.hovered.bg_fill = colors.hover;
        visuals.widgets.active.bg_fill = colors.selection;

        visuals.hyperlink_color = colors.accent;

        visuals.error_fg_color = colors.error;
        visuals.warn_fg_color = colors.warning;
    }
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Creates the Light theme.
fn light_theme() -> Theme {
    Theme {
        name: "Light".to_string(),
        description: "Light theme for bright rooms".to_string(),
        colors: ThemeColors {
            background: Color32::from_rgb(248, 248, 248),
            panel_background: Color32::from_rgb(248, 248, 248),
            extreme_background: Color32::from_rgb(255, 255, 255),

            text: Color32::from_rgb(20, 20, 20),
            text_dim: Color32::from_rgb(120, 120, 120),
            text_strong: Color32::from_rgb(0, 0, 0),

            selection: Color32::from_rgb(180, 200, 255),
            hover: Color32::from_rgb(220, 220, 220),
            border: Color32::from_rgb(160, 160, 160),

            accent: Color32::from_rgb(40, 100, 200),
            error: Color32::from_rgb(200, 40, 40),
            warning: Color32::from_rgb(230, 120, 20),

            tile_palette: [
                Color32::from_rgb(40, 100, 200),
                Color32::from_rgb(40, 160, 40),
                Color32::from_rgb(230, 120, 20),
                Color32::from_rgb(140, 60, 180),
                Color32::from_rgb(0, 160, 180),
                Color32::from_rgb(200, 40, 160),
            ],
        },
    }
}

/// Creates the Dark theme.
fn dark_theme() -> Theme {
    Theme {
        name: "Dark".to_string(),
        description: "Dark theme with neutral grays".to_string(),
        colors: ThemeColors {
            background: Color32::from_rgb(39, 39, 39),
            panel_background: Color32::from_rgb(39, 39, 39),
            extreme_background: Color32::from_rgb(16, 16, 16),

            text: Color32::from_rgb(235, 235, 235),
            text_dim: Color32::from_rgb(160, 160, 160),
            text_strong: Color32::from_rgb(255, 255, 255),

            selection: Color32::from_rgb(50, 80, 120),
            hover: Color32::from_rgb(70, 70, 70),
            border: Color32::from_rgb(100, 100, 100),

            accent: Color32::from_rgb(52, 152, 219),
            error: Color32::from_rgb(231, 76, 60),
            warning: Color32::from_rgb(243, 156, 18),

            tile_palette: [
                Color32::from_rgb(52, 152, 219),
                Color32::from_rgb(46, 204, 113),
                Color32::from_rgb(243, 156, 18),
                Color32::from_rgb(155, 89, 182),
                Color32::from_rgb(26, 188, 156),
                Color32::from_rgb(231, 76, 60),
            ],
        },
    }
}

/// Creates the Midnight theme, the default kiosk look.
fn midnight_theme() -> Theme {
    Theme {
        name: "Midnight".to_string(),
        description: "Deep blue presentation theme".to_string(),
        colors: ThemeColors {
            background: hex_to_color32("#0b1020"),
            panel_background: hex_to_color32("#0b1020"),
            extreme_background: hex_to_color32("#060912"),

            text: hex_to_color32("#e6e9f2"),
            text_dim: hex_to_color32("#8790ad"),
            text_strong: hex_to_color32("#ffffff"),

            selection: hex_to_color32("#1d2a4d"),
            hover: hex_to_color32("#16203c"),
            border: hex_to_color32("#2a3a5e"),

            accent: hex_to_color32("#5b8cff"),
            error: hex_to_color32("#ff5d5d"),
            warning: hex_to_color32("#ffb35c"),

            tile_palette: [
                hex_to_color32("#5b8cff"),
                hex_to_color32("#42c878"),
                hex_to_color32("#ffb35c"),
                hex_to_color32("#b06bff"),
                hex_to_color32("#35c4b5"),
                hex_to_color32("#ff6f91"),
            ],
        },
    }
}

/// Converts a hex color string (like "#0b1020") to Color32.
pub fn hex_to_color32(hex: &str) -> Color32 {
    let hex = hex.trim_start_matches('#');

    if hex.len() == 6 {
        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(0);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(0);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(0);
        Color32::from_rgb(r, g, b)
    } else {
        Color32::from_rgb(0, 0, 0) // Fallback to black
    }
}

/// Adjusts the brightness of a color by a factor (1.0 = no change, >1.0 = brighter, <1.0 = darker).
pub fn adjust_brightness(color: Color32, factor: f32) -> Color32 {
    let r = (color.r() as f32 * factor).min(255.0) as u8;
    let g = (color.g() as f32 * factor).min(255.0) as u8;
    let b = (color.b() as f32 * factor).min(255.0) as u8;
    Color32::from_rgb(r, g, b)
}

/// Sets the alpha channel of a color.
pub fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_premultiplied(color.r(), color.g(), color.b(), alpha)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_themes_are_available() {
        let manager = ThemeManager::new();
        assert_eq!(manager.list_themes(), vec!["Dark", "Light", "Midnight"]);
        assert!(manager.get_theme("Midnight").is_some());
        assert!(manager.get_theme("Dracula").is_none());
    }

    #[test]
    fn hex_parsing() {
        assert_eq!(hex_to_color32("#ff0000"), Color32::from_rgb(255, 0, 0));
        assert_eq!(hex_to_color32("0b1020"), Color32::from_rgb(11, 16, 32));
        // Malformed input falls back to black
        assert_eq!(hex_to_color32("#abc"), Color32::from_rgb(0, 0, 0));
    }

    #[test]
    fn brightness_saturates_at_white() {
        let bright = adjust_brightness(Color32::from_rgb(200, 200, 200), 2.0);
        assert_eq!(bright, Color32::from_rgb(255, 255, 255));
    }
}
