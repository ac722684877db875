//! Periodic tasks driven by the UI event loop.
//!
//! The app is single-threaded: nothing runs in the background. Each task is an
//! [`Interval`] that remembers when it is next due, and the event loop polls
//! the [`Schedule`] once per frame. Polling reports which tasks fired so the
//! caller can recompute state and request a repaint.
//!
//! Both tasks are owned by the schedule and cancelled together, so no task can
//! fire after the owner is torn down.

use std::time::{Duration, Instant};

/// Identifies one of the presenter's recurring tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduledTask {
    /// Recompute remaining seconds and the clock text.
    ClockTick,
    /// Replace the current quote.
    QuoteRotation,
}

/// A cancellable recurring timer.
#[derive(Debug, Clone)]
pub struct Interval {
    period: Duration,
    /// `None` once cancelled
    next_due: Option<Instant>,
}

impl Interval {
    /// Creates an interval whose first firing is one `period` after `start`.
    ///
    /// A zero period is raised to one millisecond.
    pub fn new(period: Duration, start: Instant) -> Self {
        let period = period.max(Duration::from_millis(1));
        Self {
            period,
            next_due: Some(start + period),
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn is_cancelled(&self) -> bool {
        self.next_due.is_none()
    }

    /// Stops the interval. Later polls never fire.
    pub fn cancel(&mut self) {
        self.next_due = None;
    }

    /// Returns true if the interval is due at `now` and schedules the next firing.
    ///
    /// Missed periods (e.g. the window was hidden) collapse into one firing;
    /// the next deadline is realigned to the original cadence.
    pub fn poll(&mut self, now: Instant) -> bool {
        let Some(due) = self.next_due else {
            return false;
        };
        if now < due {
            return false;
        }

        let behind = now.duration_since(due);
        let skipped = (behind.as_nanos() / self.period.as_nanos()) as u32;
        self.next_due = Some(due + self.period * (skipped + 1));
        true
    }

    /// Time left until the next firing, or `None` if cancelled.
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.next_due.map(|due| due.saturating_duration_since(now))
    }
}

/// The two recurring tasks of the display, owned and torn down together.
#[derive(Debug, Clone)]
pub struct Schedule {
    clock: Interval,
    quote: Interval,
}

impl Schedule {
    pub fn new(clock_period: Duration, quote_period: Duration, start: Instant) -> Self {
        Self {
            clock: Interval::new(clock_period, start),
            quote: Interval::new(quote_period, start),
        }
    }

    /// Polls both tasks and returns the ones that fired, clock first.
    pub fn poll(&mut self, now: Instant) -> Vec<ScheduledTask> {
        let mut fired = Vec::with_capacity(2);
        if self.clock.poll(now) {
            fired.push(ScheduledTask::ClockTick);
        }
        if self.quote.poll(now) {
            fired.push(ScheduledTask::QuoteRotation);
        }
        fired
    }

    /// Earliest time until either task is due.
    pub fn time_until_next(&self, now: Instant) -> Option<Duration> {
        match (self.clock.time_until_due(now), self.quote.time_until_due(now)) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Cancels both tasks.
    pub fn cancel_all(&mut self) {
        self.clock.cancel();
        self.quote.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.clock.is_cancelled() && self.quote.is_cancelled()
    }

    pub fn clock_period(&self) -> Duration {
        self.clock.period()
    }

    pub fn quote_period(&self) -> Duration {
        self.quote.period()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEC: Duration = Duration::from_secs(1);

    #[test]
    fn test_interval_fires_each_period() {
        let start = Instant::now();
        let mut interval = Interval::new(SEC, start);

        assert!(!interval.poll(start));
        assert!(!interval.poll(start + Duration::from_millis(999)));
        assert!(interval.poll(start + SEC));
        assert!(!interval.poll(start + SEC));
        assert!(interval.poll(start + 2 * SEC));
    }

    #[test]
    fn test_interval_collapses_missed_periods() {
        let start = Instant::now();
        let mut interval = Interval::new(SEC, start);

        assert!(interval.poll(start + Duration::from_millis(5500)));
        assert!(!interval.poll(start + Duration::from_millis(5900)));
        assert_eq!(
            interval.time_until_due(start + Duration::from_millis(5500)),
            Some(Duration::from_millis(500))
        );
        assert!(interval.poll(start + 6 * SEC));
    }

    #[test]
    fn test_cancelled_interval_never_fires() {
        let start = Instant::now();
        let mut interval = Interval::new(SEC, start);
        interval.cancel();
        assert!(interval.is_cancelled());
        assert!(!interval.poll(start + 10 * SEC));
        assert_eq!(interval.time_until_due(start), None);
    }

    #[test]
    fn test_schedule_fires_at_configured_periods() {
        let start = Instant::now();
        let mut schedule = Schedule::new(SEC, 30 * SEC, start);

        let mut clock_ticks = 0;
        let mut rotations = 0;
        for s in 1..=60 {
            for task in schedule.poll(start + s * SEC) {
                match task {
                    ScheduledTask::ClockTick => clock_ticks += 1,
                    ScheduledTask::QuoteRotation => rotations += 1,
                }
            }
        }
        assert_eq!(clock_ticks, 60);
        assert_eq!(rotations, 2);
    }

    #[test]
    fn test_schedule_next_deadline() {
        let start = Instant::now();
        let schedule = Schedule::new(SEC, 30 * SEC, start);
        assert_eq!(schedule.time_until_next(start), Some(SEC));
    }

    #[test]
    fn test_schedule_cancel_all() {
        let start = Instant::now();
        let mut schedule = Schedule::new(SEC, 30 * SEC, start);
        schedule.cancel_all();
        assert!(schedule.is_cancelled());
        assert!(schedule.poll(start + 60 * SEC).is_empty());
        assert_eq!(schedule.time_until_next(start), None);
    }
}
