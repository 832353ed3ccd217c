//! JSON output formatting for assembly-line.

use serde_json::json;

use crate::error::AssemblyError;
use crate::features::scheduler::Schedule;

/// Format a schedule as JSON
///
/// # Errors
///
/// Returns `AssemblyError::Json` if JSON serialization fails.
pub fn format_schedule_json(schedule: &Schedule) -> Result<String, AssemblyError> {
    let output = json!({
        "line_count": schedule.line_count(),
        "lines": schedule.lines,
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ActivityList;
    use crate::features::scheduler::build_schedule;

    #[test]
    fn test_format_schedule_json() {
        let activities: ActivityList = [("Cutting", 180), ("Cooling", 5)].into_iter().collect();
        let schedule = build_schedule(&activities).unwrap();

        let json = format_schedule_json(&schedule).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["line_count"], 1);
        let entries = &value["lines"][0]["entries"];
        assert_eq!(value["lines"][0]["number"], 1);
        assert_eq!(entries[0]["kind"], "activity");
        assert_eq!(entries[0]["start"], "09:00");
        assert_eq!(entries[0]["name"], "Cutting");
        assert_eq!(entries[0]["minutes"], 180);
        assert_eq!(entries[1]["kind"], "lunch");
        assert_eq!(entries[1]["start"], "12:00");
        assert_eq!(entries[2]["start"], "13:00");
        assert_eq!(entries[3]["kind"], "gym");
        assert_eq!(entries[3]["start"], "16:00");
    }

    #[test]
    fn test_empty_list_json() {
        let schedule = build_schedule(&ActivityList::new()).unwrap();
        let json = format_schedule_json(&schedule).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["line_count"], 1);
        let entries = value["lines"][0]["entries"].as_array().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0]["kind"], "gym");
        assert_eq!(entries[0]["start"], "16:00");
    }
}
