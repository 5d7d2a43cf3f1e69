//! Login gate UI rendering.
//!
//! Renders the centered login form shown before the deck: shared username
//! and password plus the visitor's name for the visitor log.

use crate::state::SessionState;
use eframe::egui;
use egui::RichText;
use tiledeck::ThemeColors;

/// Result of user interaction with the login panel.
pub enum LoginPanelInteraction {
    /// The form was submitted (button click or Enter)
    Submitted,
}

/// Renders the login form.
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `session` - Mutable session state holding the form buffers
/// * `colors` - The current theme's color palette
pub fn render_login_panel(
    ui: &mut egui::Ui,
    session: &mut SessionState,
    colors: &ThemeColors,
) -> Option<LoginPanelInteraction> {
    let mut interaction = None;

    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height() * 0.18);
        ui.heading(RichText::new("TileDeck").size(32.0).color(colors.text_strong));
        ui.label(RichText::new("Enter the shared credentials to view the proposal").color(colors.text_dim));
        ui.add_space(24.0);

        let field_width = 260.0;

        let username = egui::TextEdit::singleline(session.username_input_mut())
            .hint_text("Username")
            .desired_width(field_width)
            .show(ui);
        ui.add_space(8.0);

        let password = egui::TextEdit::singleline(session.password_input_mut())
            .hint_text("Password")
            .password(true)
            .desired_width(field_width)
            .show(ui);
        ui.add_space(8.0);

        let name = egui::TextEdit::singleline(session.name_input_mut())
            .hint_text("Your name")
            .desired_width(field_width)
            .show(ui);
        ui.add_space(16.0);

        let enter_pressed = ui.input(|i| i.key_pressed(egui::Key::Enter));
        let field_submitted = enter_pressed
            && (username.response.lost_focus()
                || password.response.lost_focus()
                || name.response.lost_focus());

        if ui.button(RichText::new("Enter").size(16.0)).clicked() || field_submitted {
            interaction = Some(LoginPanelInteraction::Submitted);
        }

        if let Some(error) = session.login_error() {
            ui.add_space(12.0);
            ui.colored_label(colors.error, error);
        }
    });

    interaction
}
