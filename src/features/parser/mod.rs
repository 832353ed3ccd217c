//! Activity file parsing.
//!
//! Each input line describes one production step:
//! - "Cutting of steel sheets 60min"
//! - "Pieces washing - 45min"
//! - "Assembly line cooling - maintenance"

mod line;
mod reader;

pub use line::parse_line;
pub use reader::{parse_activities, read_activities};
