//! Time of day on the shop floor.
//!
//! Clock times are whole minutes since midnight. Inputs only ever carry whole
//! minutes, so keeping the clock integral means the `HH:MM` rendering never
//! loses a minute to floating point truncation.

use std::fmt;
use std::ops::Add;

use serde::{Serialize, Serializer};

/// Minutes in one hour.
pub const MINUTES_PER_HOUR: u32 = 60;

/// Every line starts at 09:00.
pub const DAY_START: ClockTime = ClockTime::from_hm(9, 0);

/// An activity running past this point sends the line to lunch.
pub const LUNCH_START: ClockTime = ClockTime::from_hm(12, 0);

/// Work resumes at 13:00 after lunch.
pub const LUNCH_END: ClockTime = ClockTime::from_hm(13, 0);

/// The gym break never starts before 16:00.
pub const GYM_EARLIEST: ClockTime = ClockTime::from_hm(16, 0);

/// Activities must finish strictly before 17:00.
pub const SHIFT_END: ClockTime = ClockTime::from_hm(17, 0);

/// Fixed duration of a maintenance activity, in minutes.
pub const MAINTENANCE_MINUTES: u32 = 5;

/// A time of day, in minutes since midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ClockTime(u32);

impl ClockTime {
    /// Build a clock time from hours and minutes.
    #[must_use]
    pub const fn from_hm(hours: u32, minutes: u32) -> Self {
        Self(hours * MINUTES_PER_HOUR + minutes)
    }

    /// Hour component.
    #[must_use]
    pub const fn hour(self) -> u32 {
        self.0 / MINUTES_PER_HOUR
    }

    /// Minute component.
    #[must_use]
    pub const fn minute(self) -> u32 {
        self.0 % MINUTES_PER_HOUR
    }

    /// Advance by a number of minutes, saturating instead of overflowing.
    #[must_use]
    pub const fn plus_minutes(self, minutes: u32) -> Self {
        Self(self.0.saturating_add(minutes))
    }
}

impl Add<u32> for ClockTime {
    type Output = Self;

    fn add(self, minutes: u32) -> Self {
        self.plus_minutes(minutes)
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl Serialize for ClockTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
