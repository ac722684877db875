//! Rendering subsystem for drawing the day progress
//!
//! - Ring rendering (track, remaining-time arc, center labels)

pub mod ring_renderer;
