//! Status bar UI rendering.

use eframe::egui;
use egui::RichText;
use tiledeck::{NavigationContext, ThemeColors};

/// Renders the status bar at the bottom of the window.
///
/// Shows the position in the deck, the current route, and the visitor name.
pub fn render_status_bar(
    ui: &mut egui::Ui,
    context: &NavigationContext,
    route: &str,
    visitor_name: Option<&str>,
    colors: &ThemeColors,
) {
    ui.horizontal(|ui| {
        let position = match context.current_index {
            Some(index) => format!("Page {} of {}", index + 1, context.total_routes),
            None => "—".to_string(),
        };
        ui.label(RichText::new(position).strong().color(colors.text));

        ui.separator();
        ui.label(RichText::new(route).color(colors.text_dim));

        if let Some(name) = visitor_name {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(RichText::new(format!("Visitor: {}", name)).color(colors.text_dim));
            });
        }
    });
}
