//! Quote panel rendering
//!
//! Shows the current quote as `"quote" -author`, wrapped and scrollable when it
//! does not fit under the ring.

use eframe::egui;
use egui::{FontId, RichText};
use timeless::{FontSet, Quote, ThemeColors};

const QUOTE_FONT_SIZE: f32 = 50.0;

/// Renders the quote below the clock.
pub fn render_quote_panel(ui: &mut egui::Ui, quote: &Quote, fonts: &FontSet, theme_colors: &ThemeColors) {
    ui.add_space(20.0);
    egui::ScrollArea::vertical()
        .auto_shrink([false, true])
        .show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.add(
                    egui::Label::new(
                        RichText::new(quote.to_string())
                            .font(FontId::new(QUOTE_FONT_SIZE, fonts.quote_family()))
                            .color(theme_colors.quote),
                    )
                    .wrap(),
                );
            });
            ui.add_space(25.0);
        });
}
