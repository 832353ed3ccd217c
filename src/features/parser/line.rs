//! Single-line activity parser.
//!
//! Accepts lines like:
//! - "Cutting of steel sheets 60min"
//! - "Pieces washing - 45min"
//! - "Assembly line cooling - maintenance"
//! - "Assemblylinecooling-MAINTENANCE"

use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::clock::MAINTENANCE_MINUTES;
use crate::core::Activity;
use crate::error::LineError;

/// Trailing marker of a maintenance line, compared ignoring whitespace and case.
const MAINTENANCE_MARKER: &str = "- maintenance";

/// Suffix that must follow the duration digits.
const MINUTE_SUFFIX: &str = "min";

/// ASCII digits only; `\d` would also match other Unicode decimal digits.
static DIGIT_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[0-9]+").unwrap_or_else(|e| panic!("Invalid digit regex: {e}")));

/// Parse one input line into an activity.
///
/// # Errors
///
/// Returns a [`LineError`] describing the first rule the line breaks.
///
/// # Examples
///
/// ```
/// use assembly_line::features::parser::parse_line;
///
/// let activity = parse_line("Pieces washing - 45min").unwrap();
/// assert_eq!(activity.name, "Pieces washing");
/// assert_eq!(activity.minutes, 45);
///
/// let activity = parse_line("Assembly line cooling - maintenance").unwrap();
/// assert_eq!(activity.minutes, 5);
/// ```
pub fn parse_line(line: &str) -> Result<Activity, LineError> {
    let line = line.trim_end();

    if let Some(name) = maintenance_name(line) {
        return named(name, MAINTENANCE_MINUTES);
    }

    let digits = DIGIT_RUN.find(line).ok_or(LineError::NoDurationFound)?;
    if &line[digits.end()..] != MINUTE_SUFFIX {
        return Err(LineError::DurationSuffixMismatch);
    }

    let minutes = digits
        .as_str()
        .parse::<u32>()
        .map_err(|_| LineError::DurationOutOfRange(digits.as_str().to_string()))?;

    named(&line[..digits.start()], minutes)
}

/// If the line ends with the maintenance marker, return everything before it.
///
/// Walks the line backwards over non-whitespace characters and matches them
/// against the marker with whitespace removed.
fn maintenance_name(line: &str) -> Option<&str> {
    let mut tail = line
        .char_indices()
        .rev()
        .filter(|(_, c)| !c.is_whitespace());
    let mut cut = 0;

    for expected in MAINTENANCE_MARKER
        .chars()
        .rev()
        .filter(|c| !c.is_whitespace())
    {
        let (idx, found) = tail.next()?;
        if !found.eq_ignore_ascii_case(&expected) {
            return None;
        }
        cut = idx;
    }

    Some(&line[..cut])
}

fn named(raw: &str, minutes: u32) -> Result<Activity, LineError> {
    let name = strip_separators(raw);
    if name.is_empty() {
        return Err(LineError::MissingActivityName);
    }
    Ok(Activity::new(name, minutes))
}

/// Strip trailing whitespace and `-` separators, in any order.
fn strip_separators(raw: &str) -> &str {
    raw.trim_end_matches(|c: char| c.is_whitespace() || c == '-')
}
