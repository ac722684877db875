//! iOS-style on/off switch.
//!
//! egui only ships a checkbox; the dark mode control is drawn as a pill-shaped
//! track with a round thumb that slides between the two ends.

use eframe::egui;
use egui::{Color32, Stroke};

/// Draws a switch bound to `on` and returns its response.
///
/// The response is marked changed when the user clicks it.
pub fn toggle_switch(ui: &mut egui::Ui, on: &mut bool, track: Color32, thumb: Color32) -> egui::Response {
    let desired_size = ui.spacing().interact_size.y * egui::vec2(2.0, 1.0);
    let (rect, mut response) = ui.allocate_exact_size(desired_size, egui::Sense::click());

    if response.clicked() {
        *on = !*on;
        response.mark_changed();
    }
    response.widget_info(|| egui::WidgetInfo::selected(egui::WidgetType::Checkbox, ui.is_enabled(), *on, "Dark Mode"));

    if ui.is_rect_visible(rect) {
        let how_on = ui.ctx().animate_bool_responsive(response.id, *on);
        let radius = 0.5 * rect.height();

        ui.painter().rect(rect, radius, track, Stroke::NONE, egui::StrokeKind::Inside);

        let thumb_x = egui::lerp((rect.left() + radius)..=(rect.right() - radius), how_on);
        let thumb_center = egui::pos2(thumb_x, rect.center().y);
        ui.painter().circle_filled(thumb_center, 0.8 * radius, thumb);
    }

    response
}
