//! Custom font loading.
//!
//! The title and the quote use two display fonts read from a font directory at
//! startup. Loading is best effort: a missing or unreadable file is logged and
//! the text falls back to egui's proportional font. Nothing here aborts startup.

use anyhow::{Context, Result};
use egui::{FontData, FontDefinitions, FontFamily};
use std::path::Path;
use std::sync::Arc;

/// Font family used for the `TIMELESS` heading.
pub const TITLE_FONT: &str = "MonainnRegular";
/// Font family used for the quote text.
pub const QUOTE_FONT: &str = "BadUnicorn";

const TITLE_FONT_FILE: &str = "MonainnRegular.otf";
const QUOTE_FONT_FILE: &str = "BadUnicorn.ttf";

/// Records which custom families were registered with egui.
///
/// Referring to an unregistered `FontFamily::Name` makes egui panic, so callers
/// must go through [`FontSet::title_family`] and [`FontSet::quote_family`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FontSet {
    title_loaded: bool,
    quote_loaded: bool,
}

impl FontSet {
    /// Loads the custom fonts from `font_dir` and installs them into `ctx`.
    pub fn install(ctx: &egui::Context, font_dir: Option<&Path>) -> Self {
        let (definitions, set) = Self::build(font_dir);
        if set.any_loaded() {
            ctx.set_fonts(definitions);
        }
        set
    }

    /// Builds font definitions with whichever custom fonts could be read.
    pub fn build(font_dir: Option<&Path>) -> (FontDefinitions, FontSet) {
        let mut definitions = FontDefinitions::default();
        let mut set = FontSet::default();

        let Some(dir) = font_dir else {
            tracing::debug!("no font directory configured, using default fonts");
            return (definitions, set);
        };

        set.title_loaded = register(&mut definitions, dir, TITLE_FONT, TITLE_FONT_FILE);
        set.quote_loaded = register(&mut definitions, dir, QUOTE_FONT, QUOTE_FONT_FILE);
        (definitions, set)
    }

    pub fn any_loaded(&self) -> bool {
        self.title_loaded || self.quote_loaded
    }

    pub fn title_family(&self) -> FontFamily {
        if self.title_loaded {
            FontFamily::Name(TITLE_FONT.into())
        } else {
            FontFamily::Proportional
        }
    }

    pub fn quote_family(&self) -> FontFamily {
        if self.quote_loaded {
            FontFamily::Name(QUOTE_FONT.into())
        } else {
            FontFamily::Proportional
        }
    }
}

/// Adds one font family to `definitions`. Logs and returns false on failure.
fn register(definitions: &mut FontDefinitions, dir: &Path, family: &str, file: &str) -> bool {
    match read_font(&dir.join(file)) {
        Ok(data) => {
            definitions
                .font_data
                .insert(family.to_owned(), Arc::new(data));

            // Fall back to the default fonts for glyphs the display font lacks (emoji)
            let mut fonts = vec![family.to_owned()];
            if let Some(proportional) = definitions.families.get(&FontFamily::Proportional) {
                fonts.extend(proportional.iter().cloned());
            }
            definitions.families.insert(FontFamily::Name(family.into()), fonts);

            tracing::info!(family, "loaded custom font");
            true
        }
        Err(err) => {
            tracing::warn!(family, error = %format!("{:#}", err), "custom font unavailable, using default font");
            false
        }
    }
}

fn read_font(path: &Path) -> Result<FontData> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("failed to read font file `{}`", path.display()))?;
    Ok(FontData::from_owned(bytes))
}
