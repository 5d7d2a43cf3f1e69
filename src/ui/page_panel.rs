//! Central panel rendering for deck pages.
//!
//! The home page shows the navigation tile grid; every other deck page is
//! rendered from its content sections. Routes outside the deck fall back to
//! a not-found message.

use crate::ui::tile_grid;
use eframe::egui;
use egui::RichText;
use tiledeck::{content, ThemeColors};

/// Result of user interaction with the page panel.
pub enum PagePanelInteraction {
    /// A navigation tile was clicked
    TileClicked(String),
}

/// Renders the current page's content.
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `route` - The route of the page to render
/// * `suppress_scroll` - True while a horizontal swipe is in progress;
///   disables wheel/drag scrolling of the content for this frame
/// * `colors` - The current theme's color palette
pub fn render_page_panel(
    ui: &mut egui::Ui,
    route: &str,
    suppress_scroll: bool,
    colors: &ThemeColors,
) -> Option<PagePanelInteraction> {
    let mut interaction = None;

    egui::ScrollArea::vertical()
        .enable_scrolling(!suppress_scroll)
        .auto_shrink([false, false])
        .show(ui, |ui| {
            ui.add_space(12.0);

            match content::page_for_route(route) {
                Some(page) if page.route == "/" => {
                    render_page_header(ui, page, colors);
                    ui.add_space(18.0);
                    if let Some(clicked) = tile_grid::render_tile_grid(ui, colors) {
                        interaction = Some(PagePanelInteraction::TileClicked(clicked));
                    }
                }
                Some(page) => {
                    render_page_header(ui, page, colors);
                    ui.add_space(14.0);
                    for section in &page.sections {
                        ui.label(
                            RichText::new(section.heading)
                                .size(17.0)
                                .color(colors.text_strong),
                        );
                        ui.add_space(4.0);
                        ui.label(RichText::new(section.body).color(colors.text));
                        ui.add_space(14.0);
                    }
                }
                None => {
                    ui.add_space(40.0);
                    ui.vertical_centered(|ui| {
                        ui.heading(RichText::new("Page not found").color(colors.text_strong));
                        ui.label(
                            RichText::new(format!("No page exists at {}", route))
                                .color(colors.text_dim),
                        );
                    });
                }
            }

            // Room for the nav dots overlay.
            ui.add_space(48.0);
        });

    interaction
}

fn render_page_header(ui: &mut egui::Ui, page: &content::Page, colors: &ThemeColors) {
    ui.heading(RichText::new(page.title).size(26.0).color(colors.text_strong));
    if !page.subtitle.is_empty() {
        ui.label(RichText::new(page.subtitle).size(15.0).color(colors.text_dim));
    }
}
