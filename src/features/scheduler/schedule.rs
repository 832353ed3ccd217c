//! Schedule data produced by the scheduler.

use serde::Serialize;

use crate::core::ClockTime;

/// One row of a line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ScheduleEntry {
    /// A production step placed at `start`.
    Activity {
        /// Start time.
        start: ClockTime,
        /// Activity name.
        name: String,
        /// Duration in minutes.
        minutes: u32,
    },
    /// The lunch break.
    Lunch {
        /// Start time, always 12:00.
        start: ClockTime,
    },
    /// The closing gym break.
    Gym {
        /// Start time.
        start: ClockTime,
    },
}

impl ScheduleEntry {
    /// Start time of this entry.
    #[must_use]
    pub const fn start(&self) -> ClockTime {
        match self {
            Self::Activity { start, .. } | Self::Lunch { start } | Self::Gym { start } => *start,
        }
    }

    /// Whether this entry is a gym break.
    #[must_use]
    pub const fn is_gym(&self) -> bool {
        matches!(self, Self::Gym { .. })
    }

    /// Whether this entry is a lunch break.
    #[must_use]
    pub const fn is_lunch(&self) -> bool {
        matches!(self, Self::Lunch { .. })
    }
}

/// One shift, from 09:00 to its gym break.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleLine {
    /// 1-based line number.
    pub number: usize,
    /// Rows in time order; the last one is always the gym break.
    pub entries: Vec<ScheduleEntry>,
}

impl ScheduleLine {
    /// Activities placed on this line, in order.
    pub fn activities(&self) -> impl Iterator<Item = &ScheduleEntry> {
        self.entries
            .iter()
            .filter(|e| matches!(e, ScheduleEntry::Activity { .. }))
    }

    /// Whether the line breaks for lunch.
    #[must_use]
    pub fn has_lunch(&self) -> bool {
        self.entries.iter().any(ScheduleEntry::is_lunch)
    }
}

/// A complete schedule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Schedule {
    /// Lines in order.
    pub lines: Vec<ScheduleLine>,
}

impl Schedule {
    /// Number of lines.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }
}
