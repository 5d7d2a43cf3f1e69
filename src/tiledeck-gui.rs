//! TileDeck GUI Application
//!
//! Desktop kiosk for browsing a tile-based proposal deck with swipe
//! navigation. The viewer features:
//! - A login gate with a shared credential and a visitor log
//! - A home page of navigation tiles, one per deck page
//! - Touch swipe navigation between adjacent pages, with velocity-based
//!   flick detection and directional feedback overlays
//! - Arrow-key navigation through the same adjacency rules
//! - Multiple theme support with persistent preferences
//!
//! The application is built with a modular architecture:
//! - `app/` - Application state management and coordination
//! - `presentation/` - Visual styling and color mapping
//! - `ui/` - UI panel rendering, interaction, and input handling
//! - `state/` - State management for session, route, and theme

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use eframe::egui;

mod app;
mod presentation;
mod state;
mod ui;

use app::{AppState, ApplicationCoordinator, SettingsCoordinator, ThemeCoordinator};
use tiledeck::Router;
use ui::panel_manager::PanelManager;

const LAST_ROUTE_KEY: &str = "last_route";

/// Main application entry point that initializes and launches the TileDeck GUI.
fn main() -> eframe::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 760.0])
            .with_title("TileDeck"),
        ..Default::default()
    };

    eframe::run_native(
        "TileDeck",
        options,
        Box::new(|cc| Ok(Box::new(TileDeckApp::new(cc)))),
    )
}

/// The main TileDeck application.
///
/// Delegates most functionality to coordinators:
/// - `ApplicationCoordinator` handles login, logout, and navigation requests
/// - `ThemeCoordinator` handles theme persistence and application
/// - `PanelManager` handles UI panel layout and rendering
struct TileDeckApp {
    /// Centralized application state
    state: AppState,
}

impl Default for TileDeckApp {
    fn default() -> Self {
        Self {
            state: AppState::new(),
        }
    }
}

impl TileDeckApp {
    /// Creates a new app instance with theme and route loaded from persistent storage.
    fn new(cc: &eframe::CreationContext) -> Self {
        let current_theme_name = ThemeCoordinator::load_theme_from_storage(cc.storage);
        let last_route: String =
            SettingsCoordinator::load_setting_or(cc.storage, LAST_ROUTE_KEY, "/".to_string());

        Self {
            state: AppState::with_theme_and_route(current_theme_name, last_route),
        }
    }

    /// Handles panel interactions by delegating to ApplicationCoordinator.
    fn handle_panel_interaction(&mut self, interaction: ui::PanelInteraction) {
        match interaction {
            ui::PanelInteraction::LoginSubmitted => {
                ApplicationCoordinator::handle_login(&mut self.state);
            }
            ui::PanelInteraction::BackRequested => {
                ApplicationCoordinator::handle_back(&mut self.state);
            }
            ui::PanelInteraction::HomeRequested => {
                ApplicationCoordinator::handle_home(&mut self.state);
            }
            ui::PanelInteraction::ThemeSelected(theme_name) => {
                self.state.theme.set_theme(theme_name);
            }
            ui::PanelInteraction::LogoutRequested => {
                ApplicationCoordinator::handle_logout(&mut self.state);
            }
            ui::PanelInteraction::TileClicked(route) => {
                ApplicationCoordinator::handle_tile_clicked(&mut self.state, &route);
            }
        }
    }
}

impl eframe::App for TileDeckApp {
    /// Called when the app is being shut down - ensures preferences are saved.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        ThemeCoordinator::save_theme_to_storage(storage, self.state.theme.current_theme_name());
        SettingsCoordinator::save_setting(
            storage,
            LAST_ROUTE_KEY,
            &self.state.page.current_route().to_string(),
        );
    }

    /// Main update loop that renders all UI panels and handles application state.
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        // Apply current theme
        ThemeCoordinator::apply_current_theme(ctx, &self.state);

        // Persist preferences during frame (for crash resilience)
        if let Some(storage) = frame.storage_mut() {
            ThemeCoordinator::save_theme_to_storage(storage, self.state.theme.current_theme_name());
            SettingsCoordinator::save_setting(
                storage,
                LAST_ROUTE_KEY,
                &self.state.page.current_route().to_string(),
            );
        }

        // Render all panels and get interaction result
        if let Some(interaction) = PanelManager::render_all_panels(ctx, &mut self.state) {
            self.handle_panel_interaction(interaction);
        }
    }
}
