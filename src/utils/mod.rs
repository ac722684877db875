//! Utility modules for the Timeless display.

pub mod geometry;

pub use geometry::arc_points;
