//! assembly-line - daily assembly line scheduler
//!
//! This crate parses a plain-text list of timed production steps and
//! organizes them into assembly lines with lunch and gym breaks.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod features;
pub mod output;

pub use cli::args::{Cli, OutputFormat};
pub use error::{AssemblyError, LineError};
pub use features::parser::{parse_activities, parse_line, read_activities};
pub use features::scheduler::{build_schedule, organize, Schedule};
