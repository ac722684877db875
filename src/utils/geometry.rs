//! Geometry helpers for drawing the progress ring.

use eframe::egui::{pos2, Pos2};
use std::f32::consts::TAU;

/// Points along a clockwise circular arc in screen coordinates.
///
/// `start_angle` is in radians with 0 pointing right and `-TAU / 4` pointing
/// up. `fraction` is the share of a full turn to cover, clamped to `[0, 1]`.
/// Returns an empty vector for an empty arc.
pub fn arc_points(center: Pos2, radius: f32, start_angle: f32, fraction: f32) -> Vec<Pos2> {
    let fraction = fraction.clamp(0.0, 1.0);
    if fraction <= 0.0 {
        return Vec::new();
    }

    // Roughly one segment per 3 degrees keeps the arc smooth at large radii
    let segments = ((fraction * 120.0).ceil() as usize).max(2);
    let sweep = fraction * TAU;

    (0..=segments)
        .map(|i| {
            let angle = start_angle + sweep * (i as f32 / segments as f32);
            pos2(center.x + radius * angle.cos(), center.y + radius * angle.sin())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Pos2, b: Pos2) -> bool {
        (a - b).length() < 1e-3
    }

    #[test]
    fn test_empty_arc() {
        assert!(arc_points(pos2(0.0, 0.0), 10.0, 0.0, 0.0).is_empty());
    }

    #[test]
    fn test_quarter_arc_from_top_goes_clockwise() {
        let points = arc_points(pos2(0.0, 0.0), 10.0, -TAU / 4.0, 0.25);
        assert!(close(points[0], pos2(0.0, -10.0)));
        assert!(close(*points.last().unwrap(), pos2(10.0, 0.0)));
    }

    #[test]
    fn test_full_arc_closes() {
        let points = arc_points(pos2(5.0, 5.0), 10.0, -TAU / 4.0, 1.5);
        assert!(close(points[0], *points.last().unwrap()));
        assert_eq!(points.len(), 121);
    }
}
