//! Theme support module for the day progress display
//!
//! Two palettes, Light and Dark, for the day progress screen:
//! white background with near-black text, or pure black with white text.
//!
//! # Examples
//!
//! ```
//! use timeless::theme::{ThemeManager, ThemeMode};
//!
//! let manager = ThemeManager::new();
//! let dark = manager.colors(ThemeMode::Dark);
//! println!("Dark background: {:?}", dark.background);
//! ```

use egui::Color32;
use serde::{Deserialize, Serialize};

/// Light or dark presentation mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    pub fn is_dark(&self) -> bool {
        matches!(self, ThemeMode::Dark)
    }

    pub fn from_dark(is_dark: bool) -> Self {
        if is_dark {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        }
    }

    /// The opposite mode.
    pub fn toggled(&self) -> Self {
        Self::from_dark(!self.is_dark())
    }

    pub fn name(&self) -> &'static str {
        match self {
            ThemeMode::Light => "Light",
            ThemeMode::Dark => "Dark",
        }
    }
}

impl From<egui::Theme> for ThemeMode {
    fn from(theme: egui::Theme) -> Self {
        match theme {
            egui::Theme::Dark => ThemeMode::Dark,
            egui::Theme::Light => ThemeMode::Light,
        }
    }
}

impl From<ThemeMode> for egui::Theme {
    fn from(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Dark => egui::Theme::Dark,
            ThemeMode::Light => egui::Theme::Light,
        }
    }
}

/// Complete color palette for a theme, covering all UI elements
#[derive(Debug, Clone)]
pub struct ThemeColors {
    // Background colors
    pub background: Color32,

    // Foreground colors
    pub title: Color32,
    pub text: Color32,
    pub ring_text: Color32,
    pub clock: Color32,
    pub quote: Color32,

    // Progress ring track (inactive part)
    pub ring_track: Color32,

    // Dark mode switch
    pub switch_track: Color32,
    pub switch_thumb: Color32,
}

/// Provides the palette for each [`ThemeMode`] and applies it to egui visuals
pub struct ThemeManager {
    light: ThemeColors,
    dark: ThemeColors,
}

impl ThemeManager {
    pub fn new() -> Self {
        Self {
            light: light_colors(),
            dark: dark_colors(),
        }
    }

    /// Returns the palette for `mode`
    pub fn colors(&self, mode: ThemeMode) -> &ThemeColors {
        match mode {
            ThemeMode::Light => &self.light,
            ThemeMode::Dark => &self.dark,
        }
    }

    /// Applies a palette to egui visuals
    pub fn apply_theme(&self, mode: ThemeMode, visuals: &mut egui::Visuals) {
        let colors = self.colors(mode);

        // Override background colors
        visuals.panel_fill = colors.background;
        visuals.window_fill = colors.background;
        visuals.extreme_bg_color = colors.background;

        // Override text colors
        visuals.override_text_color = Some(colors.text);

        // Override widget colors
        visuals.widgets.noninteractive.bg_fill = colors.background;
        visuals.widgets.inactive.bg_fill = colors.switch_track;
        visuals.widgets.hovered.bg_fill = colors.switch_track;
        visuals.widgets.active.bg_fill = colors.switch_track;
    }

    /// Builds egui visuals for `mode` starting from egui's own light/dark defaults
    pub fn visuals(&self, mode: ThemeMode) -> egui::Visuals {
        let mut visuals = match mode {
            ThemeMode::Light => egui::Visuals::light(),
            ThemeMode::Dark => egui::Visuals::dark(),
        };
        self.apply_theme(mode, &mut visuals);
        visuals
    }
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new()
    }
}

fn light_colors() -> ThemeColors {
    ThemeColors {
        background: hex_to_color32("#ffffff"),

        title: hex_to_color32("#222222"),
        text: hex_to_color32("#000000"),
        ring_text: hex_to_color32("#000000"),
        clock: hex_to_color32("#333333"),
        quote: hex_to_color32("#333333"),

        ring_track: with_alpha(hex_to_color32("#d3d3d3"), 128),

        switch_track: hex_to_color32("#767577"),
        switch_thumb: hex_to_color32("#f4f3f4"),
    }
}

fn dark_colors() -> ThemeColors {
    ThemeColors {
        background: hex_to_color32("#000000"),

        title: hex_to_color32("#ffffff"),
        text: hex_to_color32("#ffffff"),
        ring_text: hex_to_color32("#ffffff"),
        clock: hex_to_color32("#ffffff"),
        quote: hex_to_color32("#ffffff"),

        ring_track: with_alpha(hex_to_color32("#d3d3d3"), 128),

        switch_track: hex_to_color32("#767577"),
        // Dark mode paints the thumb with the current stroke color instead
        switch_thumb: hex_to_color32("#f4f3f4"),
    }
}

/// Converts a hex color string (like "#3cb371") to Color32
pub fn hex_to_color32(hex: &str) -> Color32 {
    let hex = hex.trim_start_matches('#');

    if hex.len() == 6 {
        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(0);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(0);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(0);
        Color32::from_rgb(r, g, b)
    } else {
        Color32::from_rgb(0, 0, 0) // Fallback to black
    }
}

/// Returns `color` with the given alpha (unmultiplied)
pub fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_to_color32() {
        assert_eq!(hex_to_color32("#FFA500"), Color32::from_rgb(255, 165, 0));
        assert_eq!(hex_to_color32("3cb371"), Color32::from_rgb(60, 179, 113));
        assert_eq!(hex_to_color32("#fff"), Color32::from_rgb(0, 0, 0));
    }

    #[test]
    fn test_toggle_is_involution() {
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggled().toggled(), ThemeMode::Dark);
    }

    #[test]
    fn test_palettes_match_mode() {
        let manager = ThemeManager::new();
        assert_eq!(manager.colors(ThemeMode::Dark).background, Color32::BLACK);
        assert_eq!(manager.colors(ThemeMode::Light).background, Color32::WHITE);
        assert_eq!(manager.visuals(ThemeMode::Dark).panel_fill, Color32::BLACK);
    }

    #[test]
    fn test_clock_color_per_palette() {
        let manager = ThemeManager::new();
        assert_eq!(manager.colors(ThemeMode::Light).clock, hex_to_color32("#333333"));
        assert_ne!(manager.colors(ThemeMode::Light).clock, manager.colors(ThemeMode::Light).text);
        assert_eq!(manager.colors(ThemeMode::Dark).clock, Color32::WHITE);
    }

    #[test]
    fn test_mode_serde_lowercase() {
        let json = serde_json::to_string(&ThemeMode::Dark).unwrap();
        assert_eq!(json, "\"dark\"");
        let mode: ThemeMode = serde_json::from_str("\"light\"").unwrap();
        assert_eq!(mode, ThemeMode::Light);
    }
}
