//! Panel orchestration and layout management.
//!
//! The screen is a single centered column: header, progress panel, quote panel.

use crate::app::AppState;
use crate::ui::{header, progress_panel, quote_panel};

/// Result of panel interactions that need to be handled by the application coordinator.
pub enum PanelInteraction {
    /// User flipped the dark mode switch
    DarkModeToggled,
}

/// Manages the layout and rendering of all UI panels.
pub struct PanelManager;

impl PanelManager {
    /// Renders the whole screen.
    ///
    /// This is the main entry point for rendering, called from
    /// the eframe::App::update() implementation.
    pub fn render_all_panels(ctx: &egui::Context, state: &AppState) -> Option<PanelInteraction> {
        let mut interaction: Option<PanelInteraction> = None;

        let snapshot = state.presenter.snapshot();
        let theme_colors = state.theme.colors(snapshot.theme()).clone();

        let frame = egui::Frame::default()
            .inner_margin(egui::Margin::symmetric(15, 0))
            .fill(theme_colors.background);

        egui::CentralPanel::default().frame(frame).show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                header::render_header(ui, &state.fonts, &theme_colors);

                if let Some(progress_interaction) =
                    progress_panel::render_progress_panel(ui, &snapshot, &theme_colors)
                {
                    interaction = Some(match progress_interaction {
                        progress_panel::ProgressPanelInteraction::DarkModeToggled => {
                            PanelInteraction::DarkModeToggled
                        }
                    });
                }

                quote_panel::render_quote_panel(ui, &snapshot.quote, &state.fonts, &theme_colors);
            });
        });

        interaction
    }
}
