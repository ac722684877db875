//! Centralized application state for the Timeless display.
//!
//! The presenter owns every derived value on screen. The rest of the state is
//! what the rendering layer needs alongside it: the palettes and which custom
//! fonts were installed.

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Instant;
use timeless::{AppConfig, DayProgressPresenter, FontSet, QuoteCatalog, SystemClock};

use crate::state::ThemeState;

/// Presenter as used by the running application.
pub type Presenter = DayProgressPresenter<SystemClock, StdRng>;

/// Main application state.
pub struct AppState {
    /// Day progress, clock, quote and theme mode
    pub presenter: Presenter,

    /// Theme palettes
    pub theme: ThemeState,

    /// Custom fonts that were successfully loaded
    pub fonts: FontSet,

    /// The host appearance is only known once egui has processed input,
    /// so the baseline is taken on the first frame
    host_baseline_pending: bool,

    /// Startup theme was forced by configuration
    explicit_theme: bool,
}

impl AppState {
    /// Creates the application state from resolved configuration.
    pub fn new(config: &AppConfig, catalog: QuoteCatalog, fonts: FontSet) -> Self {
        let start = Instant::now();
        let mut presenter = DayProgressPresenter::new(catalog, SystemClock, StdRng::from_entropy(), start)
            .with_periods(config.clock_period(), config.quote_period(), start);

        if let Some(mode) = config.initial_theme {
            presenter = presenter.with_theme(mode);
        }

        Self {
            presenter,
            theme: ThemeState::new(),
            fonts,
            host_baseline_pending: true,
            explicit_theme: config.initial_theme.is_some(),
        }
    }

    /// Returns true exactly once, on the first call.
    pub fn take_host_baseline_pending(&mut self) -> bool {
        std::mem::replace(&mut self.host_baseline_pending, false)
    }

    /// Whether the startup theme was chosen by configuration rather than the host.
    pub fn has_explicit_theme(&self) -> bool {
        self.explicit_theme
    }
}
