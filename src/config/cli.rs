//! Argument declarations for the template binaries.
//!
//! Help output groups flags by the `help_heading` each one declares: required
//! flags come first under [`REQUIRED_HEADING`], everything else under
//! [`OPTIONAL_HEADING`]. The built-in help flag is replaced by one declared
//! here so it lands in the optional group too.

use crate::config::toml_config::{ColorMode, ConsoleStyle, FileMode, LoggerConfig};
use crate::utils::error::Result;
use clap::{ArgAction, Parser};
use num_bigint::BigInt;
use serde::{Serialize, Serializer};
use std::fmt::Display;
use std::path::PathBuf;

pub const REQUIRED_HEADING: &str = "Required arguments";
pub const OPTIONAL_HEADING: &str = "Optional arguments";

/// Compact JSON rendering of a parsed-arguments record, for debug logs.
pub fn describe<T: Serialize>(args: &T) -> Result<String> {
    Ok(serde_json::to_string(args)?)
}

/// Logs the parsed-arguments record at debug level. A record that cannot be
/// rendered is reported as a warning.
pub fn log_parsed<T: Serialize>(args: &T) {
    match describe(args) {
        Ok(parsed) => tracing::debug!("Parsed arguments: {}", parsed),
        Err(e) => tracing::warn!("Could not render parsed arguments: {}", e),
    }
}

fn as_display_string<T: Display, S: Serializer>(
    value: &T,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}

/// Display an integer raised to a power.
#[derive(Debug, Clone, Serialize, Parser)]
#[command(name = "power", disable_help_flag = true)]
pub struct PowerArgs {
    /// Display the given integer raised to the power given by -p
    #[arg(allow_negative_numbers = true)]
    #[serde(serialize_with = "as_display_string")]
    pub number: BigInt,

    /// Exponent to raise NUMBER to
    #[arg(
        short,
        long,
        allow_negative_numbers = true,
        help_heading = REQUIRED_HEADING
    )]
    pub power: i64,

    /// Verbosity (-v, -vv, etc) [default: 0]
    #[arg(short, long, action = ArgAction::Count, help_heading = OPTIONAL_HEADING)]
    pub verbose: u8,

    /// Print help
    #[arg(short, long, action = ArgAction::Help, help_heading = OPTIONAL_HEADING)]
    #[serde(skip)]
    help: Option<bool>,
}

/// Log one message per severity to the console and to a log file.
#[derive(Debug, Clone, Serialize, Parser)]
#[command(name = "color-log", disable_help_flag = true)]
pub struct ColorLogArgs {
    /// TOML file with [console] and [file] settings
    #[arg(short, long, value_name = "FILE", help_heading = OPTIONAL_HEADING)]
    pub config: Option<PathBuf>,

    /// Log file path (overrides the config file)
    #[arg(long, value_name = "PATH", help_heading = OPTIONAL_HEADING)]
    pub log_file: Option<PathBuf>,

    /// Console line layout (overrides the config file)
    #[arg(long, value_enum, help_heading = OPTIONAL_HEADING)]
    pub style: Option<ConsoleStyle>,

    /// When to color console output (overrides the config file)
    #[arg(long, value_enum, value_name = "WHEN", help_heading = OPTIONAL_HEADING)]
    pub color: Option<ColorMode>,

    /// Overwrite the log file instead of appending to it
    #[arg(long, help_heading = OPTIONAL_HEADING)]
    pub truncate: bool,

    /// Verbosity (-v, -vv, etc) [default: 0]
    #[arg(short, long, action = ArgAction::Count, help_heading = OPTIONAL_HEADING)]
    pub verbose: u8,

    /// Print help
    #[arg(short, long, action = ArgAction::Help, help_heading = OPTIONAL_HEADING)]
    #[serde(skip)]
    help: Option<bool>,
}

impl ColorLogArgs {
    /// The config file (or defaults) with command-line overrides applied.
    pub fn logger_config(&self) -> Result<LoggerConfig> {
        let mut config = match &self.config {
            Some(path) => LoggerConfig::from_file(path)?,
            None => LoggerConfig::default(),
        };

        if let Some(path) = &self.log_file {
            config.file.path = path.clone();
        }
        if let Some(style) = self.style {
            config.console.style = style;
        }
        if let Some(color) = self.color {
            config.console.color = color;
        }
        if self.truncate {
            config.file.mode = FileMode::Truncate;
        }

        Ok(config)
    }
}

/// Copy an input file to an output file or stdout.
#[derive(Debug, Clone, Serialize, Parser)]
#[command(name = "file-io", disable_help_flag = true)]
pub struct FileIoArgs {
    /// Input file ('-' reads stdin)
    pub infile: PathBuf,

    /// Output file ('-' writes stdout)
    #[arg(short, long, default_value = "-", help_heading = OPTIONAL_HEADING)]
    pub outfile: PathBuf,

    /// Verbosity (-v, -vv, etc) [default: 0]
    #[arg(short, long, action = ArgAction::Count, help_heading = OPTIONAL_HEADING)]
    pub verbose: u8,

    /// Print help
    #[arg(short, long, action = ArgAction::Help, help_heading = OPTIONAL_HEADING)]
    #[serde(skip)]
    help: Option<bool>,
}

/// List installed rpm packages whose name matches PACKAGE, sorted.
#[derive(Debug, Clone, Serialize, Parser)]
#[command(name = "pkg-query", disable_help_flag = true)]
pub struct PkgQueryArgs {
    /// Display the 'rpm -qa' lines containing this package name
    pub package: String,

    /// Program that prints the package listing
    #[arg(long, value_name = "PROGRAM", default_value = "rpm", help_heading = OPTIONAL_HEADING)]
    pub rpm: String,

    /// Match PACKAGE as a literal string instead of a regular expression
    #[arg(short = 'F', long, help_heading = OPTIONAL_HEADING)]
    pub fixed_strings: bool,

    /// Verbosity (-v, -vv, etc) [default: 0]
    #[arg(short, long, action = ArgAction::Count, help_heading = OPTIONAL_HEADING)]
    pub verbose: u8,

    /// Print help
    #[arg(short, long, action = ArgAction::Help, help_heading = OPTIONAL_HEADING)]
    #[serde(skip)]
    help: Option<bool>,
}
