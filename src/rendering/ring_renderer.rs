//! Progress ring rendering
//!
//! Draws the circular day indicator: a faint full-circle track, an arc for the
//! part of the day still ahead starting at 12 o'clock, the remaining seconds in
//! the center and the `Day: NN% 😊` title under it.

use eframe::egui;
use egui::{Align2, FontId, Stroke};
use std::f32::consts::TAU;
use timeless::{DisplaySnapshot, ThemeColors};

use crate::utils::arc_points;

/// Ring radius at full size, in points.
pub const RING_RADIUS: f32 = 150.0;
/// Width of both the track and the active arc.
pub const RING_STROKE_WIDTH: f32 = 15.0;

const VALUE_FONT_SIZE: f32 = 40.0;
const TITLE_FONT_SIZE: f32 = 32.0;

/// Renders the progress ring, shrinking it to fit narrow windows.
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `snapshot` - Current display values
/// * `theme_colors` - Color palette for the current theme
pub fn render_progress_ring(ui: &mut egui::Ui, snapshot: &DisplaySnapshot, theme_colors: &ThemeColors) {
    let radius = fit_radius(ui.available_width());
    let side = 2.0 * radius + RING_STROKE_WIDTH;
    let (rect, _response) = ui.allocate_exact_size(egui::vec2(side, side), egui::Sense::hover());

    if !ui.is_rect_visible(rect) {
        return;
    }

    let painter = ui.painter_at(rect);
    let center = rect.center();
    let scale = radius / RING_RADIUS;

    // Inactive track
    painter.circle_stroke(center, radius, Stroke::new(RING_STROKE_WIDTH, theme_colors.ring_track));

    // Active arc: what is left of the day, clockwise from the top
    let points = arc_points(center, radius, -TAU / 4.0, snapshot.remaining_fraction());
    if points.len() >= 2 {
        painter.add(egui::Shape::line(
            points,
            Stroke::new(RING_STROKE_WIDTH, snapshot.stroke_color.color32()),
        ));
    }

    painter.text(
        center - egui::vec2(0.0, VALUE_FONT_SIZE * 0.5 * scale),
        Align2::CENTER_CENTER,
        ring_value_text(snapshot),
        FontId::proportional(VALUE_FONT_SIZE * scale),
        theme_colors.ring_text,
    );

    painter.text(
        center + egui::vec2(0.0, TITLE_FONT_SIZE * 0.75 * scale),
        Align2::CENTER_CENTER,
        snapshot.ring_title(),
        FontId::proportional(TITLE_FONT_SIZE * scale),
        theme_colors.ring_text,
    );
}

/// Center value of the ring: the bare count of seconds left, e.g. `86400`.
pub fn ring_value_text(snapshot: &DisplaySnapshot) -> String {
    snapshot.seconds_remaining.to_string()
}

/// Radius that fits `available_width`, never larger than [`RING_RADIUS`].
pub fn fit_radius(available_width: f32) -> f32 {
    ((available_width - RING_STROKE_WIDTH) / 2.0).clamp(RING_RADIUS / 3.0, RING_RADIUS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rand::{rngs::StdRng, SeedableRng};
    use std::time::Instant;
    use timeless::{DayProgressPresenter, FixedClock, Quote, QuoteCatalog};

    #[test]
    fn test_fit_radius() {
        assert_eq!(fit_radius(1000.0), RING_RADIUS);
        assert_eq!(fit_radius(215.0), 100.0);
        assert_eq!(fit_radius(0.0), RING_RADIUS / 3.0);
    }

    #[test]
    fn test_ring_value_has_no_separators() {
        let catalog = QuoteCatalog::new(vec![Quote::new("A", "X")]).unwrap();
        let clock = FixedClock::new(
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap(),
        );
        let presenter = DayProgressPresenter::new(catalog, clock, StdRng::seed_from_u64(7), Instant::now());
        assert_eq!(ring_value_text(&presenter.snapshot()), "86400");
    }
}
