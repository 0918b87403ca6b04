use std::path::PathBuf;

use clap::Parser;

use crate::log::LogLevel;

/// Settings for a single `utf8-check` run, taken from the command line
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "utf8-check")]
#[command(about = "Check that a file is well-formed utf-8")]
pub struct Config {
    /// File to check
    pub path: PathBuf,

    /// Disable ANSI colour in log output
    #[arg(long = "no-color", action = clap::ArgAction::SetFalse)]
    pub use_ansi_color: bool,

    /// Only report errors, same as `--level error`
    #[arg(short, long, conflicts_with = "level")]
    pub quiet: bool,

    /// Minimum level of messages to print
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub level: LogLevel,
}

impl Config {
    pub fn minimum_level(&self) -> LogLevel {
        if self.quiet { LogLevel::Error } else { self.level }
    }
}
