//! Configuration management for assembly-line.
//!
//! This module handles loading and saving configuration from `~/.assembly-line/`.

mod paths;
mod settings;

pub use paths::Paths;
pub use settings::{ColorSetting, Config, GeneralConfig, InputConfig};
