//! Wall-clock sampling
//!
//! The face never reads the system clock directly. It goes through the
//! [`TimeSource`] trait so rendering stays a pure function of a sampled
//! [`TimeOfDay`] — tests pin the time, production uses [`SystemClock`].
//!
//! The host samples ONCE per frame and reuses the triple for all three
//! rings, so a frame can never show torn values across a second boundary.

use std::fmt;

use chrono::{Local, Timelike};

/// The three time-of-day components driving the rings
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimeOfDay {
    /// Hour of day, 0-23
    pub hour: u32,
    /// Minute of hour, 0-59
    pub minute: u32,
    /// Second of minute, 0-59
    pub second: u32,
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}

/// Source of the current time of day
///
/// No inputs, no failure modes. Kept as a trait so tests can substitute a
/// fixed time.
pub trait TimeSource {
    fn now(&self) -> TimeOfDay;
}

/// Production source backed by the system clock, in the local time zone
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl TimeSource for SystemClock {
    fn now(&self) -> TimeOfDay {
        let now = Local::now();
        TimeOfDay {
            hour: now.hour(),
            minute: now.minute(),
            second: now.second(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_clock_components_are_in_range() {
        let t = SystemClock.now();
        assert!(t.hour < 24);
        assert!(t.minute < 60);
        assert!(t.second < 60);
    }

    #[test]
    fn formats_zero_padded() {
        let t = TimeOfDay {
            hour: 7,
            minute: 4,
            second: 9,
        };
        assert_eq!(t.to_string(), "07:04:09");
    }
}
