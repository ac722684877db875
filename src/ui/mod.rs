//! UI panel rendering subsystem
//!
//! This module contains the panel rendering logic for the Timeless display:
//! - Header (title)
//! - Progress panel (ring, dark mode switch, clock)
//! - Quote panel (scrollable rotating quote)
//! - Toggle switch widget
//! - Panel manager (layout and interaction collection)

pub mod header;
pub mod progress_panel;
pub mod quote_panel;
pub mod toggle_switch;
pub mod panel_manager;
