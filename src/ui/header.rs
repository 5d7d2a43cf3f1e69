//! Application header UI rendering.
//!
//! Renders the top bar: back/home navigation, the theme selector, and the
//! signed-in visitor with a logout action.

use crate::app::AppState;
use crate::presentation::color_mapping;
use eframe::egui;
use egui::RichText;

/// Result of user interaction with the header.
pub enum HeaderInteraction {
    /// Back was clicked
    BackRequested,
    /// Home was clicked
    HomeRequested,
    /// A theme was selected from the dropdown
    ThemeSelected(String),
    /// Logout was clicked
    LogoutRequested,
}

/// Renders the header bar.
pub fn render_header(ui: &mut egui::Ui, state: &AppState) -> Option<HeaderInteraction> {
    let mut interaction = None;
    let colors = color_mapping::theme_colors(
        state.theme.theme_manager(),
        state.theme.current_theme_name(),
    );

    ui.horizontal(|ui| {
        if ui.button("⬅ Back").clicked() {
            interaction = Some(HeaderInteraction::BackRequested);
        }
        if ui.button("🏠 Home").clicked() {
            interaction = Some(HeaderInteraction::HomeRequested);
        }

        ui.separator();
        ui.label(RichText::new("TileDeck").strong().color(colors.text_strong));

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("Logout").clicked() {
                interaction = Some(HeaderInteraction::LogoutRequested);
            }

            if let Some(name) = state.session.visitor_name() {
                ui.label(RichText::new(name).color(colors.text_dim));
            }

            ui.separator();

            let mut selected = state.theme.current_theme_name().to_string();
            egui::ComboBox::from_id_salt("theme_selector")
                .selected_text(selected.clone())
                .show_ui(ui, |ui| {
                    for theme_name in state.theme.theme_manager().list_themes() {
                        if ui
                            .selectable_value(&mut selected, theme_name.to_string(), theme_name)
                            .clicked()
                        {
                            interaction = Some(HeaderInteraction::ThemeSelected(selected.clone()));
                        }
                    }
                });
        });
    });

    interaction
}
