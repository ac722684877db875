//! Wall-clock sources for the day progress model.
//!
//! The presenter never reads the system clock directly. It asks a [`WallClock`]
//! for the current local date and time, which lets tests pin the clock to
//! chosen instants (midnight, noon, one second before rollover).

use chrono::{Local, NaiveDateTime};
use std::cell::Cell;

/// Source of the current local date and time.
pub trait WallClock {
    /// Returns the current local wall-clock time.
    fn now(&self) -> NaiveDateTime;
}

/// Wall clock backed by the operating system's local time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl WallClock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Wall clock that returns a fixed, manually advanced time.
///
/// Used by tests and headless scenarios.
#[derive(Debug, Clone)]
pub struct FixedClock {
    current: Cell<NaiveDateTime>,
}

impl FixedClock {
    /// Creates a clock frozen at `at`.
    pub fn new(at: NaiveDateTime) -> Self {
        Self {
            current: Cell::new(at),
        }
    }

    /// Moves the clock to `at`.
    pub fn set(&self, at: NaiveDateTime) {
        self.current.set(at);
    }

    /// Advances the clock by `secs` seconds.
    pub fn advance_secs(&self, secs: i64) {
        self.current
            .set(self.current.get() + chrono::Duration::seconds(secs));
    }
}

impl WallClock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.current.get()
    }
}

impl<C: WallClock + ?Sized> WallClock for std::rc::Rc<C> {
    fn now(&self) -> NaiveDateTime {
        (**self).now()
    }
}
