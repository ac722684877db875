//! Theme and styling state management.
//!
//! The current light/dark mode is owned by the presenter. This state only holds
//! the palettes the mode selects between.

use timeless::{ThemeColors, ThemeManager, ThemeMode};

/// State related to visual theme and styling.
pub struct ThemeState {
    /// Theme manager instance
    theme_manager: ThemeManager,
}

impl std::fmt::Debug for ThemeState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeState").finish_non_exhaustive()
    }
}

impl Default for ThemeState {
    fn default() -> Self {
        Self::new()
    }
}

impl ThemeState {
    pub fn new() -> Self {
        Self {
            theme_manager: ThemeManager::new(),
        }
    }

    /// Returns a reference to the theme manager.
    pub fn theme_manager(&self) -> &ThemeManager {
        &self.theme_manager
    }

    /// Returns the palette for `mode`.
    pub fn colors(&self, mode: ThemeMode) -> &ThemeColors {
        self.theme_manager.colors(mode)
    }
}
