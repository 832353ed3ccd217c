//! Places activities into lines, inserting lunch and gym breaks.

use tracing::{debug, info};

use super::schedule::{Schedule, ScheduleEntry, ScheduleLine};
use crate::core::clock::{DAY_START, GYM_EARLIEST, LUNCH_END, LUNCH_START, SHIFT_END};
use crate::core::{Activity, ActivityList, ClockTime};
use crate::error::AssemblyError;

/// A line that is still accepting activities.
#[derive(Debug)]
struct OpenLine {
    number: usize,
    clock: ClockTime,
    had_lunch: bool,
    placed: usize,
    entries: Vec<ScheduleEntry>,
}

impl OpenLine {
    const fn new(number: usize) -> Self {
        Self {
            number,
            clock: DAY_START,
            had_lunch: false,
            placed: 0,
            entries: Vec::new(),
        }
    }

    fn take_lunch(&mut self) {
        debug!(line = self.number, at = %self.clock, "lunch break");
        self.entries.push(ScheduleEntry::Lunch { start: LUNCH_START });
        self.had_lunch = true;
        self.clock = LUNCH_END;
    }

    fn place(&mut self, activity: &Activity) {
        self.entries.push(ScheduleEntry::Activity {
            start: self.clock,
            name: activity.name.clone(),
            minutes: activity.minutes,
        });
        self.clock = self.clock + activity.minutes;
        self.placed += 1;
    }

    fn close(mut self) -> ScheduleLine {
        let start = self.clock.max(GYM_EARLIEST);
        debug!(line = self.number, at = %start, "gym break closes line");
        self.entries.push(ScheduleEntry::Gym { start });
        ScheduleLine {
            number: self.number,
            entries: self.entries,
        }
    }
}

/// Build the schedule for `activities`, in list order.
///
/// Rules, per activity:
/// - running past 12:00, or starting once the clock has reached 12:00,
///   sends the line to lunch first and the activity starts at 13:00; an
///   activity finishing exactly at 12:00 stays in the morning and lunch is
///   only taken if another activity follows on the same line
/// - finishing at or after 17:00 closes the line with a gym break and the
///   activity opens the next line
///
/// The last line closes with a gym break at 16:00, or later if its last
/// activity ends after 16:00. An empty list still gives one line holding
/// just the gym break.
///
/// # Errors
///
/// Returns `AssemblyError::ActivityTooLong` if an activity cannot fit even
/// an empty line.
pub fn build_schedule(activities: &ActivityList) -> Result<Schedule, AssemblyError> {
    let mut lines = Vec::new();
    let mut line = OpenLine::new(1);

    for activity in activities {
        loop {
            if !line.had_lunch
                && (line.clock >= LUNCH_START || line.clock + activity.minutes > LUNCH_START)
            {
                line.take_lunch();
            }

            if line.clock + activity.minutes >= SHIFT_END {
                if line.placed == 0 {
                    return Err(AssemblyError::ActivityTooLong {
                        name: activity.name.clone(),
                        minutes: activity.minutes,
                    });
                }
                let next = OpenLine::new(line.number + 1);
                lines.push(std::mem::replace(&mut line, next).close());
                continue;
            }

            line.place(activity);
            break;
        }
    }

    lines.push(line.close());
    info!(
        lines = lines.len(),
        activities = activities.len(),
        "built schedule"
    );
    Ok(Schedule { lines })
}
