use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Parser, Debug)]
#[command(name = "assembly-line")]
#[command(about = "Organize timed production steps into daily assembly lines")]
#[command(long_about = "assembly-line - daily assembly line scheduler

Reads one production step per line and prints the day's assembly lines,
with a lunch break at 12:00 and a gym break closing every line.

INPUT FORMAT:
  Cutting of steel sheets 60min
  Pieces washing - 45min
  Assembly line cooling - maintenance      (always 5 minutes)

RULES:
  Lines start at 09:00.
  A step that would run past 12:00 starts after lunch, at 13:00.
  A step that would not finish before 17:00 starts a new line.
  The gym break starts at 16:00, or when the last step ends if later.

OUTPUT FORMATS:
  --output pretty    Plain text schedule (default)
  --output json      Machine-readable JSON for scripting")]
#[command(version)]
pub struct Cli {
    /// Activity file to schedule
    ///
    /// Defaults to the `input.path` config setting, which defaults to
    /// `input.txt` in the current directory.
    pub input: Option<PathBuf>,

    /// Output format for the schedule
    ///
    /// Defaults to the `general.default_output` config setting.
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Configuration file to use instead of ~/.assembly-line/config.yaml
    #[arg(long, env = "ASSEMBLY_LINE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Write the default configuration file and exit
    #[arg(long)]
    pub init_config: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Log filter directive implied by the verbosity flags.
    #[must_use]
    pub const fn log_directive(&self) -> &'static str {
        match self.verbose {
            0 => "assembly_line=warn",
            1 => "assembly_line=info",
            _ => "assembly_line=debug",
        }
    }
}

/// Output format for the schedule.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain text schedule.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}
