//! Read a whole activity file into an [`ActivityList`].

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, info, warn};

use super::parse_line;
use crate::core::ActivityList;
use crate::error::AssemblyError;

/// Read and parse the activity file at `path`.
///
/// # Errors
///
/// - `AssemblyError::SourceNotFound` if the file cannot be opened.
/// - `AssemblyError::SourceRead` if reading fails part way through.
/// - `AssemblyError::InvalidLine` for the first line the parser rejects.
pub fn read_activities(path: &Path) -> Result<ActivityList, AssemblyError> {
    let file = File::open(path).map_err(|e| {
        debug!(path = %path.display(), error = %e, "cannot open activity file");
        AssemblyError::SourceNotFound {
            path: path.to_path_buf(),
        }
    })?;

    let activities = parse_lines(BufReader::new(file), |source| AssemblyError::SourceRead {
        path: path.to_path_buf(),
        source,
    })?;

    info!(
        path = %path.display(),
        count = activities.len(),
        total_minutes = activities.total_minutes(),
        "read activity file"
    );
    Ok(activities)
}

/// Parse every line from `reader`, in order.
///
/// Every line must hold an activity, so a blank line is rejected like any
/// other line without a duration. Parsing stops at the first rejected line
/// and no partial result is returned.
///
/// # Errors
///
/// - `AssemblyError::SourceRead` if the reader fails.
/// - `AssemblyError::InvalidLine` for the first line the parser rejects.
pub fn parse_activities<R: BufRead>(reader: R) -> Result<ActivityList, AssemblyError> {
    parse_lines(reader, |source| AssemblyError::SourceRead {
        path: "<input>".into(),
        source,
    })
}

fn parse_lines<R, F>(reader: R, read_error: F) -> Result<ActivityList, AssemblyError>
where
    R: BufRead,
    F: Fn(std::io::Error) -> AssemblyError,
{
    let mut activities = ActivityList::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(&read_error)?;
        let line_number = idx + 1;

        let activity = parse_line(&line).map_err(|source| AssemblyError::InvalidLine {
            line_number,
            line: line.clone(),
            source,
        })?;

        debug!(line_number, name = %activity.name, minutes = activity.minutes, "parsed activity");
        let name = activity.name.clone();
        if let Some(previous) = activities.insert(activity) {
            warn!(line_number, %name, previous, "duplicate activity name overrides earlier duration");
        }
    }

    Ok(activities)
}
