//! Command-line interface for assembly-line.

pub mod args;
