//! Core types shared by the parser, the scheduler and the output layer.

mod activity;
pub mod clock;

pub use activity::{Activity, ActivityList};
pub use clock::ClockTime;
