//! Header rendering
//!
//! The large `TIMELESS` heading at the top of the screen.

use eframe::egui;
use egui::{FontId, RichText};
use timeless::{FontSet, ThemeColors};

pub const TITLE_TEXT: &str = "TIMELESS";
const TITLE_FONT_SIZE: f32 = 80.0;

/// Renders the application title centered at the top.
pub fn render_header(ui: &mut egui::Ui, fonts: &FontSet, theme_colors: &ThemeColors) {
    ui.add_space(40.0);
    ui.label(
        RichText::new(TITLE_TEXT)
            .font(FontId::new(TITLE_FONT_SIZE, fonts.title_family()))
            .color(theme_colors.title),
    );
}
