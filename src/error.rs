//! Error types for assembly-line.
//!
//! Every error is fatal for the run: the parser stops at the first bad line
//! and the scheduler stops at the first activity it cannot place. `main` is
//! the only place that turns an error into a process exit.

use std::path::PathBuf;

use thiserror::Error;

/// Why a single input line was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LineError {
    /// The line has no digits and is not a maintenance line.
    #[error("no time in line")]
    NoDurationFound,

    /// A number was found but it is not a `<digits>min` suffix ending the line.
    #[error("number found inside the activity title")]
    DurationSuffixMismatch,

    /// The duration does not fit in a `u32`.
    #[error("duration {0} is out of range")]
    DurationOutOfRange(String),

    /// Nothing is left of the name once separators are stripped.
    #[error("activity has no name")]
    MissingActivityName,
}

/// Main error type for assembly-line operations.
#[derive(Error, Debug)]
pub enum AssemblyError {
    /// The input source could not be opened.
    #[error("the file {} could not be found", path.display())]
    SourceNotFound {
        /// Path that was tried.
        path: PathBuf,
    },

    /// The input source was opened but could not be fully read.
    #[error("there was a problem while reading the file {}: {source}", path.display())]
    SourceRead {
        /// Path being read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// A line of the input was rejected by the parser.
    #[error("line {line_number} ({line:?}): {source}")]
    InvalidLine {
        /// 1-based line number in the input.
        line_number: usize,
        /// The offending line as read.
        line: String,
        /// Rule that rejected the line.
        #[source]
        source: LineError,
    },

    /// An activity is longer than any line can hold.
    #[error("activity {name:?} ({minutes}min) does not fit in a single line")]
    ActivityTooLong {
        /// Activity name.
        name: String,
        /// Activity duration in minutes.
        minutes: u32,
    },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AssemblyError {
    /// Process exit status for this error.
    ///
    /// A missing input means there is nothing to schedule and exits with 0;
    /// everything else exits with 1.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::SourceNotFound { .. } => 0,
            Self::SourceRead { .. }
            | Self::InvalidLine { .. }
            | Self::ActivityTooLong { .. }
            | Self::Config(_)
            | Self::Json(_) => 1,
        }
    }
}
