pub mod time_source;
pub mod day_clock;
pub mod tiers;
pub mod quotes;
pub mod schedule;
pub mod appearance;
pub mod presenter;
pub mod theme;
pub mod fonts;
pub mod config;
pub mod logging;

// Export time model
pub use time_source::{WallClock, SystemClock, FixedClock};
pub use day_clock::{
    DayClock, SECONDS_IN_DAY,
    compute_seconds_remaining, compute_percent_elapsed, format_clock_12h
};

// Export presentation tiers
pub use tiers::{StrokeColor, EmojiTier, select_stroke_color, select_emoji};

// Export quote catalog
pub use quotes::{Quote, QuoteCatalog, CatalogError};

// Export scheduling and host appearance
pub use schedule::{Interval, Schedule, ScheduledTask};
pub use appearance::AppearanceWatcher;

// Export presenter
pub use presenter::{DayProgressPresenter, DisplaySnapshot, PresenterUpdate};

// Export theme support
pub use theme::{ThemeMode, ThemeColors, ThemeManager, hex_to_color32, with_alpha};

// Export configuration, fonts and logging bootstrap
pub use config::{AppConfig, CommandLine, ConfigError};
pub use fonts::{FontSet, TITLE_FONT, QUOTE_FONT};
pub use logging::init_logging;
