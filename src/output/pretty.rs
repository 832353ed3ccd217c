use serde::{Deserialize, Serialize};

use crate::core::clock::MAINTENANCE_MINUTES;
use crate::features::scheduler::{Schedule, ScheduleEntry, ScheduleLine};

/// Text used for line headers and break rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleLabels {
    /// Header word, rendered as `"<line_title> <n>:"`.
    pub line_title: String,
    /// Lunch row label.
    pub lunch: String,
    /// Gym row label.
    pub gym: String,
}

impl Default for ScheduleLabels {
    fn default() -> Self {
        Self {
            line_title: "Line".to_string(),
            lunch: "Lunch".to_string(),
            gym: "Gym break".to_string(),
        }
    }
}

/// Format a schedule as text, one block per line separated by a blank row.
#[must_use]
pub fn format_schedule_pretty(schedule: &Schedule, labels: &ScheduleLabels) -> String {
    schedule
        .lines
        .iter()
        .map(|line| format_line_pretty(line, labels))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Format one line: its header followed by a row per entry.
#[must_use]
pub fn format_line_pretty(line: &ScheduleLine, labels: &ScheduleLabels) -> String {
    let mut rows = Vec::with_capacity(line.entries.len() + 1);
    rows.push(format!("{} {}:", labels.line_title, line.number));
    rows.extend(line.entries.iter().map(|entry| format_entry_pretty(entry, labels)));
    rows.join("\n")
}

/// Format a single row.
///
/// Maintenance-length activities are shown without a duration.
#[must_use]
pub fn format_entry_pretty(entry: &ScheduleEntry, labels: &ScheduleLabels) -> String {
    match entry {
        ScheduleEntry::Activity {
            start,
            name,
            minutes,
        } if *minutes == MAINTENANCE_MINUTES => format!("{start} {name}"),
        ScheduleEntry::Activity {
            start,
            name,
            minutes,
        } => format!("{start} {name} {minutes}min"),
        ScheduleEntry::Lunch { start } => format!("{start} {}", labels.lunch),
        ScheduleEntry::Gym { start } => format!("{start} {}", labels.gym),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ClockTime;

    fn sample() -> Schedule {
        Schedule {
            lines: vec![
                ScheduleLine {
                    number: 1,
                    entries: vec![
                        ScheduleEntry::Activity {
                            start: ClockTime::from_hm(9, 0),
                            name: "Cooling".to_string(),
                            minutes: 5,
                        },
                        ScheduleEntry::Activity {
                            start: ClockTime::from_hm(9, 5),
                            name: "Cutting".to_string(),
                            minutes: 60,
                        },
                        ScheduleEntry::Gym {
                            start: ClockTime::from_hm(16, 0),
                        },
                    ],
                },
                ScheduleLine {
                    number: 2,
                    entries: vec![
                        ScheduleEntry::Lunch {
                            start: ClockTime::from_hm(12, 0),
                        },
                        ScheduleEntry::Gym {
                            start: ClockTime::from_hm(16, 0),
                        },
                    ],
                },
            ],
        }
    }

    #[test]
    fn test_format_schedule_pretty() {
        let text = format_schedule_pretty(&sample(), &ScheduleLabels::default());
        assert_eq!(
            text,
            "Line 1:\n09:00 Cooling\n09:05 Cutting 60min\n16:00 Gym break\n\nLine 2:\n12:00 Lunch\n16:00 Gym break"
        );
    }

    #[test]
    fn test_format_empty_schedule() {
        assert_eq!(format_schedule_pretty(&Schedule::default(), &ScheduleLabels::default()), "");
    }

    #[test]
    fn test_custom_labels() {
        let labels = ScheduleLabels {
            line_title: "Linha de montagem".to_string(),
            lunch: "Almoço".to_string(),
            gym: "Ginástica laboral".to_string(),
        };
        let text = format_schedule_pretty(&sample(), &labels);
        assert!(text.starts_with("Linha de montagem 1:\n"));
        assert!(text.contains("12:00 Almoço"));
        assert!(text.ends_with("16:00 Ginástica laboral"));
    }

    #[test]
    fn test_zero_minute_activity_keeps_suffix() {
        let entry = ScheduleEntry::Activity {
            start: ClockTime::from_hm(10, 0),
            name: "Inspection".to_string(),
            minutes: 0,
        };
        assert_eq!(format_entry_pretty(&entry, &ScheduleLabels::default()), "10:00 Inspection 0min");
    }
}
