//! Output formatting for assembly-line.
//!
//! This module renders a [`Schedule`] as plain text or JSON.

mod json;
mod pretty;

use crate::cli::args::OutputFormat;
use crate::error::AssemblyError;
use crate::features::scheduler::Schedule;

pub use json::*;
pub use pretty::*;

/// Format a schedule based on output format
///
/// # Errors
///
/// Returns `AssemblyError::Json` if JSON serialization fails.
pub fn format_schedule(
    schedule: &Schedule,
    format: OutputFormat,
    labels: &ScheduleLabels,
) -> Result<String, AssemblyError> {
    match format {
        OutputFormat::Pretty => Ok(format_schedule_pretty(schedule, labels)),
        OutputFormat::Json => format_schedule_json(schedule),
    }
}
