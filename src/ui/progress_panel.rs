//! Progress panel rendering
//!
//! The middle of the screen: the progress ring, the dark mode switch under it
//! and the current 12-hour time.

use eframe::egui;
use egui::{FontId, RichText};
use timeless::{DisplaySnapshot, ThemeColors};

use crate::rendering::ring_renderer;
use crate::ui::toggle_switch::toggle_switch;

const SWITCH_LABEL_SIZE: f32 = 18.0;
const TIME_FONT_SIZE: f32 = 30.0;

/// Result of user interaction with the progress panel
pub enum ProgressPanelInteraction {
    /// User flipped the dark mode switch
    DarkModeToggled,
}

/// Renders the ring, switch and clock.
///
/// # Returns
/// * `Option<ProgressPanelInteraction>` - User interaction result
pub fn render_progress_panel(
    ui: &mut egui::Ui,
    snapshot: &DisplaySnapshot,
    theme_colors: &ThemeColors,
) -> Option<ProgressPanelInteraction> {
    let mut interaction = None;

    ui.add_space(20.0);
    ring_renderer::render_progress_ring(ui, snapshot, theme_colors);
    ui.add_space(5.0);

    // Dark mode thumb picks up the ring color so the switch matches the day
    let thumb = if snapshot.is_dark_mode {
        snapshot.stroke_color.color32()
    } else {
        theme_colors.switch_thumb
    };

    // Horizontal layouts don't center inside vertical_centered, so size the row first
    let row_width = 160.0;
    ui.allocate_ui_with_layout(
        egui::vec2(row_width, ui.spacing().interact_size.y),
        egui::Layout::left_to_right(egui::Align::Center),
        |ui| {
            ui.label(
                RichText::new("Dark Mode")
                    .size(SWITCH_LABEL_SIZE)
                    .color(theme_colors.text),
            );
            let mut is_dark = snapshot.is_dark_mode;
            if toggle_switch(ui, &mut is_dark, theme_colors.switch_track, thumb).changed() {
                interaction = Some(ProgressPanelInteraction::DarkModeToggled);
            }
        },
    );

    ui.add_space(5.0);
    ui.label(
        RichText::new(&snapshot.clock_text)
            .font(FontId::proportional(TIME_FONT_SIZE))
            .strong()
            .color(theme_colors.clock),
    );

    interaction
}
