//! Tier selection for the progress ring.
//!
//! Maps the percentage of the day elapsed onto discrete presentation tokens:
//! the ring's stroke color and the mood emoji in the ring title.
//! Tiers are half-open `[low, high)` except the last, which is closed at 100.

use egui::Color32;
use crate::theme::hex_to_color32;

/// Stroke color of the active part of the progress ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrokeColor {
    Green,
    Orange,
    Red,
}

impl StrokeColor {
    /// Hex code of the tier color.
    pub fn hex(&self) -> &'static str {
        match self {
            StrokeColor::Green => "#3cb371",
            StrokeColor::Orange => "#FFA500",
            StrokeColor::Red => "#FF0000",
        }
    }

    pub fn color32(&self) -> Color32 {
        hex_to_color32(self.hex())
    }
}

/// Mood shown next to the percentage in the ring title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EmojiTier {
    Content,
    Cheerful,
    Neutral,
    Tired,
    Sleepy,
}

impl EmojiTier {
    pub fn glyph(&self) -> &'static str {
        match self {
            EmojiTier::Content => "😊",
            EmojiTier::Cheerful => "😇",
            EmojiTier::Neutral => "🙂",
            EmojiTier::Tired => "🥱",
            EmojiTier::Sleepy => "😴",
        }
    }

    /// Lowercase token name, e.g. `"tired"`.
    pub fn name(&self) -> &'static str {
        match self {
            EmojiTier::Content => "content",
            EmojiTier::Cheerful => "cheerful",
            EmojiTier::Neutral => "neutral",
            EmojiTier::Tired => "tired",
            EmojiTier::Sleepy => "sleepy",
        }
    }
}

/// Selects the ring stroke color for `percent` elapsed.
///
/// | percent   | color  |
/// |-----------|--------|
/// | [0, 50)   | green  |
/// | [50, 80)  | orange |
/// | [80, 100] | red    |
pub fn select_stroke_color(percent: f64) -> StrokeColor {
    match percent {
        p if p < 50.0 => StrokeColor::Green,
        p if p < 80.0 => StrokeColor::Orange,
        _ => StrokeColor::Red,
    }
}

/// Selects the title emoji for `percent` elapsed.
pub fn select_emoji(percent: f64) -> EmojiTier {
    match percent {
        p if p < 20.0 => EmojiTier::Content,
        p if p < 50.0 => EmojiTier::Cheerful,
        p if p < 80.0 => EmojiTier::Neutral,
        p if p < 90.0 => EmojiTier::Tired,
        _ => EmojiTier::Sleepy,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stroke_color_boundaries() {
        assert_eq!(select_stroke_color(0.0), StrokeColor::Green);
        assert_eq!(select_stroke_color(49.9), StrokeColor::Green);
        assert_eq!(select_stroke_color(50.0), StrokeColor::Orange);
        assert_eq!(select_stroke_color(79.9), StrokeColor::Orange);
        assert_eq!(select_stroke_color(80.0), StrokeColor::Red);
        assert_eq!(select_stroke_color(100.0), StrokeColor::Red);
    }

    #[test]
    fn test_emoji_boundaries() {
        assert_eq!(select_emoji(0.0), EmojiTier::Content);
        assert_eq!(select_emoji(19.9), EmojiTier::Content);
        assert_eq!(select_emoji(20.0), EmojiTier::Cheerful);
        assert_eq!(select_emoji(49.9), EmojiTier::Cheerful);
        assert_eq!(select_emoji(50.0), EmojiTier::Neutral);
        assert_eq!(select_emoji(80.0), EmojiTier::Tired);
        assert_eq!(select_emoji(89.9), EmojiTier::Tired);
        assert_eq!(select_emoji(90.0), EmojiTier::Sleepy);
        assert_eq!(select_emoji(100.0), EmojiTier::Sleepy);
    }

    #[test]
    fn test_stroke_color_hex() {
        assert_eq!(StrokeColor::Green.color32(), Color32::from_rgb(0x3c, 0xb3, 0x71));
        assert_eq!(StrokeColor::Orange.color32(), Color32::from_rgb(0xff, 0xa5, 0x00));
        assert_eq!(StrokeColor::Red.color32(), Color32::from_rgb(0xff, 0x00, 0x00));
    }

    #[test]
    fn test_emoji_names() {
        assert_eq!(EmojiTier::Tired.name(), "tired");
        assert_eq!(EmojiTier::Sleepy.glyph(), "😴");
    }
}
