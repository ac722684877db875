//! State management modules for the Timeless display.
//!
//! Derived display state lives in the presenter; this module holds what the
//! renderer needs besides it:
//! - Theme state (palettes for light and dark mode)

mod theme_state;

pub use theme_state::ThemeState;
