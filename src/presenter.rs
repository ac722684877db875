//! Day progress presenter.
//!
//! Owns all derived display state and recomputes it from three inputs:
//! - the clock task (default every second): seconds remaining, percent, tiers, clock text
//! - the quote task (default every 30 seconds): a fresh uniform random quote
//! - host appearance notifications and the user's dark mode toggle
//!
//! The presenter knows nothing about egui. The rendering layer calls [`DayProgressPresenter::poll`]
//! from its event loop, repaints when the returned [`PresenterUpdate`] says something
//! changed, and reads a flat [`DisplaySnapshot`].
//!
//! Theme precedence is last-writer-wins: a host appearance change after a manual
//! toggle replaces the user's choice.

use rand::Rng;
use std::time::{Duration, Instant};

use crate::appearance::AppearanceWatcher;
use crate::day_clock::{format_clock_12h, DayClock, SECONDS_IN_DAY};
use crate::quotes::{Quote, QuoteCatalog};
use crate::schedule::{Schedule, ScheduledTask};
use crate::theme::ThemeMode;
use crate::tiers::{select_emoji, select_stroke_color, EmojiTier, StrokeColor};
use crate::time_source::WallClock;

/// Default period of the clock task.
pub const DEFAULT_CLOCK_PERIOD: Duration = Duration::from_secs(1);
/// Default period of the quote rotation task.
pub const DEFAULT_QUOTE_PERIOD: Duration = Duration::from_secs(30);

/// Read-only view handed to the rendering layer.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplaySnapshot {
    pub seconds_remaining: u32,
    pub percent: f64,
    pub stroke_color: StrokeColor,
    pub emoji: EmojiTier,
    pub clock_text: String,
    pub quote: Quote,
    pub is_dark_mode: bool,
}

impl DisplaySnapshot {
    /// Title shown inside the ring, e.g. `Day: 42% 😇`.
    pub fn ring_title(&self) -> String {
        format!("Day: {}% {}", self.percent.floor() as u32, self.emoji.glyph())
    }

    /// Fraction of the day elapsed in `[0, 1]`.
    pub fn fraction(&self) -> f32 {
        (self.percent / 100.0).clamp(0.0, 1.0) as f32
    }

    /// Fraction of the day still ahead in `[0, 1]`; the ring's filled arc.
    pub fn remaining_fraction(&self) -> f32 {
        (self.seconds_remaining as f32 / SECONDS_IN_DAY as f32).clamp(0.0, 1.0)
    }

    pub fn theme(&self) -> ThemeMode {
        ThemeMode::from_dark(self.is_dark_mode)
    }
}

/// Which parts of the display changed during a presenter step.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PresenterUpdate {
    pub clock: bool,
    pub quote: bool,
    pub theme: bool,
}

impl PresenterUpdate {
    pub fn any(&self) -> bool {
        self.clock || self.quote || self.theme
    }

    pub fn merge(self, other: PresenterUpdate) -> PresenterUpdate {
        PresenterUpdate {
            clock: self.clock || other.clock,
            quote: self.quote || other.quote,
            theme: self.theme || other.theme,
        }
    }
}

/// Computes and holds the state of the day progress screen.
pub struct DayProgressPresenter<C: WallClock, R: Rng> {
    clock: C,
    rng: R,
    catalog: QuoteCatalog,
    schedule: Schedule,
    appearance: AppearanceWatcher,

    day: DayClock,
    clock_text: String,
    quote_index: usize,
    theme: ThemeMode,
    /// Set by the user toggle, cleared when the host changes appearance
    manual_override: bool,
    shut_down: bool,
}

impl<C: WallClock, R: Rng> std::fmt::Debug for DayProgressPresenter<C, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DayProgressPresenter")
            .field("day", &self.day)
            .field("clock_text", &self.clock_text)
            .field("quote_index", &self.quote_index)
            .field("theme", &self.theme)
            .field("shut_down", &self.shut_down)
            .finish_non_exhaustive()
    }
}

impl<C: WallClock, R: Rng> DayProgressPresenter<C, R> {
    /// Creates a presenter with default task periods, light theme and no host subscription baseline.
    ///
    /// The day clock and the first quote are computed immediately so the first
    /// frame has complete data.
    pub fn new(catalog: QuoteCatalog, clock: C, mut rng: R, start: Instant) -> Self {
        let now = clock.now();
        let quote_index = catalog.pick_index(&mut rng);

        Self {
            day: DayClock::at(now),
            clock_text: format_clock_12h(now),
            quote_index,
            clock,
            rng,
            catalog,
            schedule: Schedule::new(DEFAULT_CLOCK_PERIOD, DEFAULT_QUOTE_PERIOD, start),
            appearance: AppearanceWatcher::subscribe(None),
            theme: ThemeMode::Light,
            manual_override: false,
            shut_down: false,
        }
    }

    /// Replaces the task periods. The schedule restarts at `start`.
    pub fn with_periods(mut self, clock_period: Duration, quote_period: Duration, start: Instant) -> Self {
        self.schedule = Schedule::new(clock_period, quote_period, start);
        self
    }

    /// Adopts the host appearance at startup and uses it as the change baseline.
    pub fn with_host_theme(mut self, host: Option<ThemeMode>) -> Self {
        self.adopt_host_theme(host);
        self
    }

    /// Same as [`with_host_theme`](Self::with_host_theme) for an existing presenter.
    pub fn adopt_host_theme(&mut self, host: Option<ThemeMode>) {
        if self.shut_down {
            return;
        }
        if let Some(mode) = host {
            self.theme = mode;
        }
        self.watch_host_theme(host);
    }

    /// Records `host` as the change baseline without adopting it.
    ///
    /// Used when the startup theme was chosen explicitly.
    pub fn watch_host_theme(&mut self, host: Option<ThemeMode>) {
        if !self.shut_down {
            self.appearance = AppearanceWatcher::subscribe(host);
        }
    }

    /// Forces the startup theme regardless of the host appearance.
    pub fn with_theme(mut self, mode: ThemeMode) -> Self {
        self.theme = mode;
        self
    }

    // ===== Event Loop =====

    /// Runs the tasks due at `now` and reports what changed.
    ///
    /// Does nothing after [`shutdown`](Self::shutdown).
    pub fn poll(&mut self, now: Instant) -> PresenterUpdate {
        let mut update = PresenterUpdate::default();
        if self.shut_down {
            return update;
        }

        for task in self.schedule.poll(now) {
            match task {
                ScheduledTask::ClockTick => {
                    self.refresh_clock();
                    update.clock = true;
                }
                ScheduledTask::QuoteRotation => {
                    self.rotate_quote();
                    update.quote = true;
                }
            }
        }
        update
    }

    /// Time until the next task is due, for scheduling the next repaint.
    pub fn next_deadline(&self, now: Instant) -> Option<Duration> {
        self.schedule.time_until_next(now)
    }

    /// Recomputes the day clock and clock text from the wall clock.
    pub fn refresh_clock(&mut self) {
        let now = self.clock.now();
        let previous = self.day.seconds_remaining();
        self.day = DayClock::at(now);
        self.clock_text = format_clock_12h(now);

        if self.day.seconds_remaining() > previous {
            tracing::info!(seconds_remaining = self.day.seconds_remaining(), "new day started");
        }
    }

    /// Replaces the current quote with a uniform random pick (repeats allowed).
    pub fn rotate_quote(&mut self) {
        self.quote_index = self.catalog.pick_index(&mut self.rng);
        tracing::debug!(index = self.quote_index, "rotated quote");
    }

    // ===== Theme =====

    /// Handles the host's current appearance preference.
    ///
    /// Only a change relative to the last host value is applied. It overrides a
    /// manual toggle.
    pub fn on_host_appearance(&mut self, host: Option<ThemeMode>) -> PresenterUpdate {
        let Some(mode) = self.appearance.observe(host) else {
            return PresenterUpdate::default();
        };

        if self.manual_override && mode != self.theme {
            tracing::debug!(from = self.theme.name(), to = mode.name(), "host appearance replaced manual theme choice");
        }
        self.manual_override = false;

        let changed = self.theme != mode;
        self.theme = mode;
        PresenterUpdate {
            theme: changed,
            ..PresenterUpdate::default()
        }
    }

    /// Flips between light and dark mode independent of the host appearance.
    pub fn toggle_dark_mode(&mut self) -> ThemeMode {
        self.theme = self.theme.toggled();
        self.manual_override = true;
        tracing::debug!(theme = self.theme.name(), "dark mode toggled");
        self.theme
    }

    // ===== Queries =====

    pub fn theme(&self) -> ThemeMode {
        self.theme
    }

    pub fn is_dark_mode(&self) -> bool {
        self.theme.is_dark()
    }

    pub fn day_clock(&self) -> DayClock {
        self.day
    }

    pub fn current_quote(&self) -> &Quote {
        self.catalog.quote_at(self.quote_index)
    }

    pub fn catalog(&self) -> &QuoteCatalog {
        &self.catalog
    }

    pub fn is_shut_down(&self) -> bool {
        self.shut_down
    }

    /// Builds the flat view of everything the screen shows.
    pub fn snapshot(&self) -> DisplaySnapshot {
        let percent = self.day.percent_elapsed();
        DisplaySnapshot {
            seconds_remaining: self.day.seconds_remaining(),
            percent,
            stroke_color: select_stroke_color(percent),
            emoji: select_emoji(percent),
            clock_text: self.clock_text.clone(),
            quote: self.current_quote().clone(),
            is_dark_mode: self.theme.is_dark(),
        }
    }

    // ===== Lifecycle =====

    /// Cancels both tasks and the appearance subscription. Idempotent.
    pub fn shutdown(&mut self) {
        if self.shut_down {
            return;
        }
        self.schedule.cancel_all();
        self.appearance.unsubscribe();
        self.shut_down = true;
        tracing::debug!("presenter shut down");
    }
}

impl<C: WallClock, R: Rng> Drop for DayProgressPresenter<C, R> {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time_source::FixedClock;
    use chrono::{NaiveDate, NaiveDateTime};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::rc::Rc;

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 15)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    fn presenter_at(time: NaiveDateTime, start: Instant) -> (DayProgressPresenter<Rc<FixedClock>, StdRng>, Rc<FixedClock>) {
        let clock = Rc::new(FixedClock::new(time));
        let catalog = QuoteCatalog::new(vec![Quote::new("A", "X"), Quote::new("B", "Y")]).unwrap();
        let presenter = DayProgressPresenter::new(catalog, Rc::clone(&clock), StdRng::seed_from_u64(1), start);
        (presenter, clock)
    }

    #[test]
    fn test_initial_snapshot_is_complete() {
        let (presenter, _) = presenter_at(at(18, 0, 0), Instant::now());
        let snap = presenter.snapshot();
        assert_eq!(snap.seconds_remaining, 6 * 3600);
        assert_eq!(snap.percent, 75.0);
        assert_eq!(snap.stroke_color, StrokeColor::Orange);
        assert_eq!(snap.emoji, EmojiTier::Neutral);
        assert_eq!(snap.clock_text, "06:00 PM");
        assert!(snap.quote.quote == "A" || snap.quote.quote == "B");
        assert!(!snap.is_dark_mode);
        assert_eq!(snap.ring_title(), "Day: 75% 🙂");
    }

    #[test]
    fn test_clock_task_updates_every_second() {
        let start = Instant::now();
        let (mut presenter, clock) = presenter_at(at(21, 0, 59), start);

        assert!(!presenter.poll(start).any());

        clock.advance_secs(1);
        let update = presenter.poll(start + Duration::from_secs(1));
        assert!(update.clock);
        assert!(!update.quote);

        let snap = presenter.snapshot();
        assert_eq!(snap.clock_text, "09:01 PM");
        assert_eq!(snap.emoji, EmojiTier::Tired);
        assert_eq!(snap.stroke_color, StrokeColor::Red);
    }

    #[test]
    fn test_quote_rotates_on_thirty_second_period() {
        let start = Instant::now();
        let (mut presenter, _) = presenter_at(at(8, 0, 0), start);

        let rotations = (1..=90)
            .map(|s| presenter.poll(start + Duration::from_secs(s)))
            .filter(|u| u.quote)
            .count();
        assert_eq!(rotations, 3);
    }

    #[test]
    fn test_midnight_rollover_resets_progress() {
        let start = Instant::now();
        let (mut presenter, clock) = presenter_at(at(23, 59, 59), start);
        assert_eq!(presenter.snapshot().seconds_remaining, 1);

        clock.advance_secs(1);
        presenter.poll(start + Duration::from_secs(1));
        let snap = presenter.snapshot();
        assert_eq!(snap.seconds_remaining, 86_400);
        assert_eq!(snap.percent, 0.0);
        assert_eq!(snap.clock_text, "12:00 AM");
    }

    #[test]
    fn test_toggle_dark_mode_twice_restores() {
        let (mut presenter, _) = presenter_at(at(8, 0, 0), Instant::now());
        let original = presenter.is_dark_mode();
        presenter.toggle_dark_mode();
        assert_ne!(presenter.is_dark_mode(), original);
        presenter.toggle_dark_mode();
        assert_eq!(presenter.is_dark_mode(), original);
    }

    #[test]
    fn test_host_theme_at_startup() {
        let (presenter, _) = presenter_at(at(8, 0, 0), Instant::now());
        let presenter = presenter.with_host_theme(Some(ThemeMode::Dark));
        assert!(presenter.snapshot().is_dark_mode);
    }

    #[test]
    fn test_host_change_overrides_manual_toggle() {
        let (presenter, _) = presenter_at(at(8, 0, 0), Instant::now());
        let mut presenter = presenter.with_host_theme(Some(ThemeMode::Light));

        presenter.toggle_dark_mode();
        assert!(presenter.is_dark_mode());

        // Same host value again is not a change
        assert!(!presenter.on_host_appearance(Some(ThemeMode::Light)).any());
        assert!(presenter.is_dark_mode());

        // Host flips to dark: matches the manual choice, no visible change
        assert!(!presenter.on_host_appearance(Some(ThemeMode::Dark)).theme);

        // Host flips back to light: last writer wins
        assert!(presenter.on_host_appearance(Some(ThemeMode::Light)).theme);
        assert!(!presenter.is_dark_mode());
    }

    #[test]
    fn test_watch_host_theme_keeps_explicit_choice() {
        let (presenter, _) = presenter_at(at(8, 0, 0), Instant::now());
        let mut presenter = presenter.with_theme(ThemeMode::Light);
        presenter.watch_host_theme(Some(ThemeMode::Dark));
        assert!(!presenter.is_dark_mode());

        assert!(!presenter.on_host_appearance(Some(ThemeMode::Light)).theme);
        assert!(presenter.on_host_appearance(Some(ThemeMode::Dark)).theme);
        assert!(presenter.is_dark_mode());
    }

    #[test]
    fn test_remaining_fraction() {
        let (presenter, _) = presenter_at(at(18, 0, 0), Instant::now());
        let snap = presenter.snapshot();
        assert_eq!(snap.remaining_fraction(), 0.25);
        assert_eq!(snap.fraction(), 0.75);
    }

    #[test]
    fn test_shutdown_stops_all_updates() {
        let start = Instant::now();
        let (mut presenter, clock) = presenter_at(at(8, 0, 0), start);
        let before = presenter.snapshot();

        presenter.shutdown();
        assert!(presenter.is_shut_down());

        clock.advance_secs(120);
        assert!(!presenter.poll(start + Duration::from_secs(120)).any());
        assert!(!presenter.on_host_appearance(Some(ThemeMode::Dark)).any());
        assert_eq!(presenter.snapshot(), before);
        assert_eq!(presenter.next_deadline(start), None);

        // Second shutdown is harmless
        presenter.shutdown();
    }

    #[test]
    fn test_host_theme_ignored_after_shutdown() {
        let start = Instant::now();
        let (mut presenter, _) = presenter_at(at(8, 0, 0), start);
        presenter.adopt_host_theme(Some(ThemeMode::Light));
        presenter.shutdown();

        presenter.adopt_host_theme(Some(ThemeMode::Dark));
        assert!(!presenter.is_dark_mode());
        presenter.watch_host_theme(Some(ThemeMode::Dark));
        assert!(!presenter.on_host_appearance(Some(ThemeMode::Dark)).any());
        assert_eq!(presenter.theme(), ThemeMode::Light);
    }

    #[test]
    fn test_custom_periods() {
        let start = Instant::now();
        let (presenter, _) = presenter_at(at(8, 0, 0), start);
        let mut presenter = presenter.with_periods(Duration::from_secs(2), Duration::from_secs(10), start);

        assert_eq!(presenter.next_deadline(start), Some(Duration::from_secs(2)));
        assert!(!presenter.poll(start + Duration::from_secs(1)).clock);
        assert!(presenter.poll(start + Duration::from_secs(2)).clock);
        assert!(presenter.poll(start + Duration::from_secs(10)).quote);
    }
}
