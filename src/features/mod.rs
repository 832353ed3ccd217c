//! Feature implementations for assembly-line.
//!
//! - Activity file parsing
//! - Line scheduling with lunch and gym breaks

pub mod parser;
pub mod scheduler;
