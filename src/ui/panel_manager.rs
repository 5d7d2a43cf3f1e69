//! Panel orchestration and layout management.
//!
//! Coordinates all UI panels (login, header, page content, status) and runs
//! per-frame input handling so swipe state is up to date before the page is
//! drawn.

use crate::app::AppState;
use crate::presentation::color_mapping;
use crate::ui::input::swipe_input_handler;
use crate::ui::{header, login_panel, page_panel, status_bar, swipe_indicator};
use tiledeck::Router;

/// Result of panel interactions that need to be handled by the application coordinator.
pub enum PanelInteraction {
    /// The login form was submitted
    LoginSubmitted,
    /// Back was requested from the header
    BackRequested,
    /// Home was requested from the header
    HomeRequested,
    /// A theme was selected from the header dropdown
    ThemeSelected(String),
    /// Logout was requested from the header
    LogoutRequested,
    /// A navigation tile was clicked on the home page
    TileClicked(String),
}

/// Manages the layout and rendering of all UI panels.
pub struct PanelManager;

impl PanelManager {
    /// Renders all panels in the application window.
    ///
    /// This is the main entry point for rendering the entire UI, called from
    /// the eframe::App::update() implementation.
    pub fn render_all_panels(
        ctx: &egui::Context,
        state: &mut AppState,
    ) -> Option<PanelInteraction> {
        let mut interaction: Option<PanelInteraction> = None;

        // Get theme colors for rendering
        let theme_colors = color_mapping::theme_colors(
            state.theme.theme_manager(),
            state.theme.current_theme_name(),
        )
        .clone();

        // Login gate: until the visitor is signed in, only the form shows.
        if !state.session.is_authenticated() {
            egui::CentralPanel::default().show(ctx, |ui| {
                if let Some(login_panel::LoginPanelInteraction::Submitted) =
                    login_panel::render_login_panel(ui, &mut state.session, &theme_colors)
                {
                    interaction = Some(PanelInteraction::LoginSubmitted);
                }
            });
            return interaction;
        }

        // Touch and keyboard input, before any panel draws this frame.
        let input_result = {
            let (controller, page) = state.for_input_handler();
            swipe_input_handler::handle_swipe_input(ctx, controller, page)
        };

        // Header panel at the top
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            if let Some(header_interaction) = header::render_header(ui, state) {
                interaction = Some(match header_interaction {
                    header::HeaderInteraction::BackRequested => PanelInteraction::BackRequested,
                    header::HeaderInteraction::HomeRequested => PanelInteraction::HomeRequested,
                    header::HeaderInteraction::ThemeSelected(name) => {
                        PanelInteraction::ThemeSelected(name)
                    }
                    header::HeaderInteraction::LogoutRequested => {
                        PanelInteraction::LogoutRequested
                    }
                });
            }
        });

        let navigation_context = state.controller.navigation_context(&state.page);
        let current_route = state.page.current_route().to_string();

        // Status panel at the very bottom
        egui::TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
            status_bar::render_status_bar(
                ui,
                &navigation_context,
                &current_route,
                state.session.visitor_name(),
                &theme_colors,
            );
        });

        // Central panel: the current page
        let page_frame = egui::Frame::default()
            .inner_margin(egui::Margin::same(16))
            .fill(ctx.style().visuals.panel_fill);

        egui::CentralPanel::default()
            .frame(page_frame)
            .show(ctx, |ui| {
                if let Some(page_panel::PagePanelInteraction::TileClicked(route)) =
                    page_panel::render_page_panel(
                        ui,
                        &current_route,
                        input_result.suppress_scroll,
                        &theme_colors,
                    )
                {
                    interaction = Some(PanelInteraction::TileClicked(route));
                }
            });

        // Overlays on top of the page
        let gesture = state.controller.gesture();
        swipe_indicator::render_swipe_indicator(
            ctx,
            gesture.direction(),
            gesture.distance_px(),
            &navigation_context,
            &theme_colors,
        );
        swipe_indicator::render_nav_dots(ctx, &navigation_context, &theme_colors);

        // Keep animating while a gesture is in flight.
        if gesture.is_active() || input_result.navigated {
            ctx.request_repaint();
        }

        interaction
    }
}
