//! Console + file logger with per-severity colors.
//!
//! A [`Logger`] owns its own `tracing` dispatcher instead of installing a
//! global subscriber. Two `fmt` layers hang off one registry: the console
//! layer (stderr by default) renders each line in the color of its severity,
//! the file layer writes one plain format. Both layers carry their own level
//! filter, so each destination decides independently whether a record
//! passes.
//!
//! `tracing` has no level above `ERROR`, so every record also carries a
//! `severity` field naming one of the five [`Severity`] values, plus the
//! caller's file and line.

use crate::config::toml_config::{ConsoleStyle, FileConfig, FileMode, LoggerConfig};
use crate::domain::model::Severity;
use crate::utils::error::{Result, TemplateError};
use crate::utils::validation::Validate;
use chrono::Local;
use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::{self, IsTerminal};
use std::panic::Location;
use std::path::Path;
use std::sync::Mutex;
use tracing::field::{Field, Visit};
use tracing::{Dispatch, Event, Level, Subscriber};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields, MakeWriter};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{Layer, Registry};

pub const GREY: &str = "\x1b[38;20m";
pub const CYAN: &str = "\x1b[36;20m";
pub const YELLOW: &str = "\x1b[33;20m";
pub const RED: &str = "\x1b[31;20m";
pub const BOLD_RED: &str = "\x1b[31;1m";
pub const RESET: &str = "\x1b[0m";

const TIME_FORMAT: &str = "%H:%M:%S";

pub fn color_for(severity: Severity) -> &'static str {
    match severity {
        Severity::Debug => GREY,
        Severity::Info => CYAN,
        Severity::Warning => YELLOW,
        Severity::Error => RED,
        Severity::Critical => BOLD_RED,
    }
}

fn severity_from_level(level: Level) -> Severity {
    match level {
        Level::ERROR => Severity::Error,
        Level::WARN => Severity::Warning,
        Level::INFO => Severity::Info,
        _ => Severity::Debug,
    }
}

fn severity_from_name(name: &str) -> Option<Severity> {
    Severity::ALL.into_iter().find(|s| s.name() == name)
}

fn level_filter(threshold: Severity) -> LevelFilter {
    match threshold {
        Severity::Debug => LevelFilter::DEBUG,
        Severity::Info => LevelFilter::INFO,
        Severity::Warning => LevelFilter::WARN,
        Severity::Error | Severity::Critical => LevelFilter::ERROR,
    }
}

/// Where a rendered line is going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    Console { style: ConsoleStyle, colored: bool },
    File,
}

/// The parts of a log record that end up on a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLine<'a> {
    pub severity: Severity,
    pub timestamp: &'a str,
    pub file: &'a str,
    pub line: u32,
    pub message: &'a str,
}

fn truncated(name: &str, width: usize) -> &str {
    name.get(..width).unwrap_or(name)
}

/// Renders one record for `destination`, without the trailing newline.
pub fn render(destination: Destination, record: &LogLine<'_>) -> String {
    let name = record.severity.name();
    match destination {
        Destination::Console { style, colored } => {
            let text = match style {
                ConsoleStyle::Simple => format!(
                    "[{} {}] {}",
                    truncated(name, 4),
                    record.timestamp,
                    record.message
                ),
                ConsoleStyle::Verbose => format!(
                    "[{} {} {}:{}] {}",
                    truncated(name, 1),
                    record.timestamp,
                    record.file,
                    record.line,
                    record.message
                ),
            };
            if colored {
                format!("{}{}{}", color_for(record.severity), text, RESET)
            } else {
                text
            }
        }
        Destination::File => format!(
            "[{} {} {}:{}] {}",
            truncated(name, 4),
            record.timestamp,
            record.file,
            record.line,
            record.message
        ),
    }
}

#[derive(Default)]
struct RecordVisitor {
    message: String,
    severity: Option<Severity>,
    file: Option<String>,
    line: Option<u32>,
}

impl Visit for RecordVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "severity" => self.severity = severity_from_name(value),
            "src_file" => self.file = Some(value.to_string()),
            "message" => self.message = value.to_string(),
            _ => {}
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        if field.name() == "src_line" {
            self.line = u32::try_from(value).ok();
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{:?}", value);
        }
    }
}

/// `FormatEvent` that renders records with [`render`].
#[derive(Debug, Clone, Copy)]
pub struct SeverityFormat {
    destination: Destination,
}

impl SeverityFormat {
    pub fn new(destination: Destination) -> Self {
        Self { destination }
    }
}

impl<S, N> FormatEvent<S, N> for SeverityFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let metadata = event.metadata();
        let mut visitor = RecordVisitor::default();
        event.record(&mut visitor);

        let severity = visitor
            .severity
            .unwrap_or_else(|| severity_from_level(*metadata.level()));
        let path = visitor
            .file
            .as_deref()
            .or_else(|| metadata.file())
            .unwrap_or("<unknown>");
        let file = Path::new(path)
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(path);
        let timestamp = Local::now().format(TIME_FORMAT).to_string();

        let record = LogLine {
            severity,
            timestamp: &timestamp,
            file,
            line: visitor.line.or_else(|| metadata.line()).unwrap_or(0),
            message: &visitor.message,
        };
        writeln!(writer, "{}", render(self.destination, &record))
    }
}

fn open_log_file(config: &FileConfig) -> Result<File> {
    let mut options = OpenOptions::new();
    match config.mode {
        FileMode::Append => options.create(true).append(true),
        FileMode::Truncate => options.create(true).write(true).truncate(true),
    };

    options
        .open(&config.path)
        .map_err(|source| TemplateError::LogFileError {
            path: config.path.display().to_string(),
            source,
        })
}

/// Logger writing every record to a console and to a log file.
///
/// The log file is closed when the logger is dropped.
pub struct Logger {
    dispatch: Dispatch,
    threshold: Severity,
}

impl Logger {
    /// Console on stderr, colored according to `config.console.color`.
    pub fn new(config: &LoggerConfig, verbosity: u8) -> Result<Self> {
        let colored = config.console.color.enabled(io::stderr().is_terminal());
        Self::with_console(config, verbosity, io::stderr, colored)
    }

    pub fn with_console<W>(
        config: &LoggerConfig,
        verbosity: u8,
        console: W,
        colored: bool,
    ) -> Result<Self>
    where
        W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
    {
        config.validate()?;

        let threshold = Severity::threshold(verbosity);
        let file = open_log_file(&config.file)?;

        let console_layer = tracing_subscriber::fmt::layer()
            .with_writer(console)
            .event_format(SeverityFormat::new(Destination::Console {
                style: config.console.style,
                colored,
            }))
            .with_filter(level_filter(threshold));

        let file_layer = tracing_subscriber::fmt::layer()
            .with_writer(Mutex::new(file))
            .event_format(SeverityFormat::new(Destination::File))
            .with_filter(level_filter(threshold));

        let subscriber = Registry::default().with(console_layer).with(file_layer);

        Ok(Self {
            dispatch: Dispatch::new(subscriber),
            threshold,
        })
    }

    pub fn threshold(&self) -> Severity {
        self.threshold
    }

    #[track_caller]
    pub fn log(&self, severity: Severity, message: &str) {
        let caller = Location::caller();
        let (src_file, src_line) = (caller.file(), caller.line());
        let name = severity.name();

        tracing::dispatcher::with_default(&self.dispatch, || match severity {
            Severity::Debug => {
                tracing::debug!(severity = name, src_file, src_line, "{}", message)
            }
            Severity::Info => {
                tracing::info!(severity = name, src_file, src_line, "{}", message)
            }
            Severity::Warning => {
                tracing::warn!(severity = name, src_file, src_line, "{}", message)
            }
            Severity::Error | Severity::Critical => {
                tracing::error!(severity = name, src_file, src_line, "{}", message)
            }
        });
    }

    #[track_caller]
    pub fn debug(&self, message: &str) {
        self.log(Severity::Debug, message);
    }

    #[track_caller]
    pub fn info(&self, message: &str) {
        self.log(Severity::Info, message);
    }

    #[track_caller]
    pub fn warning(&self, message: &str) {
        self.log(Severity::Warning, message);
    }

    #[track_caller]
    pub fn error(&self, message: &str) {
        self.log(Severity::Error, message);
    }

    #[track_caller]
    pub fn critical(&self, message: &str) {
        self.log(Severity::Critical, message);
    }
}
