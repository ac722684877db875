//! Theme application and host appearance lookup.

use timeless::ThemeMode;
use crate::app::AppState;

/// Coordinates the light/dark palette with egui.
pub struct ThemeCoordinator;

impl ThemeCoordinator {
    /// The system's light/dark preference as reported by the windowing integration.
    pub fn host_theme(ctx: &egui::Context) -> Option<ThemeMode> {
        ctx.input(|i| i.raw.system_theme).map(ThemeMode::from)
    }

    /// Applies the presenter's current theme to the egui context.
    ///
    /// Called every frame to ensure theme is correctly applied.
    pub fn apply_current_theme(ctx: &egui::Context, state: &AppState) {
        let mode = state.presenter.theme();
        ctx.set_theme(egui::Theme::from(mode));
        ctx.set_visuals(state.theme.theme_manager().visuals(mode));
    }
}
