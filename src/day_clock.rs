//! Day progress model.
//!
//! Everything here is a pure function of a local wall-clock timestamp:
//! - seconds left until the next local midnight
//! - the percentage of the day already elapsed
//! - the 12-hour clock string shown under the progress ring
//!
//! There is no "new day" event. Rollover happens because the next evaluation
//! measures against the following midnight.

use chrono::{NaiveDateTime, Timelike};

/// Total seconds in a calendar day.
pub const SECONDS_IN_DAY: u32 = 24 * 60 * 60;

/// Returns the whole seconds left until the start of the next calendar day.
///
/// The result is `floor(next_midnight - now)` and always lies in `[0, 86400]`.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use timeless::compute_seconds_remaining;
///
/// let noon = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(12, 0, 0).unwrap();
/// assert_eq!(compute_seconds_remaining(noon), 43_200);
/// ```
pub fn compute_seconds_remaining(now: NaiveDateTime) -> u32 {
    let next_midnight = match now.date().succ_opt().and_then(|d| d.and_hms_opt(0, 0, 0)) {
        Some(m) => m,
        // Last representable day: treat as already at the end
        None => return 0,
    };

    // Duration is positive, so truncation is the floor
    let secs = (next_midnight - now).num_seconds();
    secs.clamp(0, SECONDS_IN_DAY as i64) as u32
}

/// Converts seconds remaining into the percentage of the day elapsed.
///
/// `86400` maps to `0.0` and `0` maps to `100.0`. Inputs above a full day are
/// clamped so the result never goes negative.
pub fn compute_percent_elapsed(seconds_remaining: u32) -> f64 {
    let remaining = seconds_remaining.min(SECONDS_IN_DAY);
    let total = SECONDS_IN_DAY as f64;
    (total - remaining as f64) / total * 100.0
}

/// Formats a timestamp as `HH:MM AM|PM`.
///
/// Hours are zero-padded and midnight/noon display as `12`. Seconds are not shown.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use timeless::format_clock_12h;
///
/// let t = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(13, 5, 9).unwrap();
/// assert_eq!(format_clock_12h(t), "01:05 PM");
/// ```
pub fn format_clock_12h(now: NaiveDateTime) -> String {
    let (is_pm, hour) = now.hour12();
    let suffix = if is_pm { "PM" } else { "AM" };
    format!("{:02}:{:02} {}", hour, now.minute(), suffix)
}

/// Snapshot of the day progress at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayClock {
    seconds_remaining: u32,
}

impl DayClock {
    /// Computes the day clock for `now`.
    pub fn at(now: NaiveDateTime) -> Self {
        Self {
            seconds_remaining: compute_seconds_remaining(now),
        }
    }

    /// Builds a day clock from a known remaining-seconds value (clamped to one day).
    pub fn from_seconds_remaining(seconds_remaining: u32) -> Self {
        Self {
            seconds_remaining: seconds_remaining.min(SECONDS_IN_DAY),
        }
    }

    pub fn seconds_remaining(&self) -> u32 {
        self.seconds_remaining
    }

    pub fn percent_elapsed(&self) -> f64 {
        compute_percent_elapsed(self.seconds_remaining)
    }
}
