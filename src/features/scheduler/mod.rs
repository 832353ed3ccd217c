//! Assembly line scheduling.
//!
//! Activities are placed from 09:00 in list order. Each line gets one lunch
//! break at 12:00 and closes with a gym break; activities that would not
//! finish before 17:00 move to the next line.

mod engine;
mod schedule;

pub use engine::build_schedule;
pub use schedule::{Schedule, ScheduleEntry, ScheduleLine};

use crate::core::ActivityList;
use crate::error::AssemblyError;
use crate::output::{format_schedule_pretty, ScheduleLabels};

/// Schedule `activities` and render the result as text with default labels.
///
/// # Errors
///
/// Returns `AssemblyError::ActivityTooLong` if an activity cannot fit a line.
///
/// # Examples
///
/// ```
/// use assembly_line::core::ActivityList;
/// use assembly_line::features::scheduler::organize;
///
/// let activities: ActivityList = [("Step I", 180), ("Step II", 60)].into_iter().collect();
/// let text = organize(&activities).unwrap();
/// assert_eq!(
///     text,
///     "Line 1:\n09:00 Step I 180min\n12:00 Lunch\n13:00 Step II 60min\n16:00 Gym break"
/// );
/// ```
pub fn organize(activities: &ActivityList) -> Result<String, AssemblyError> {
    let schedule = build_schedule(activities)?;
    Ok(format_schedule_pretty(&schedule, &ScheduleLabels::default()))
}
