use std::fmt;
use std::str::FromStr;

use fern::Dispatch;
use fern::colors::{Color, ColoredLevelConfig};
use log::LevelFilter;
use once_cell::sync::OnceCell;

use crate::constants::LOG_DATE_FORMAT;
use crate::errors::Result;

static LOGGER_INSTALLED: OnceCell<()> = OnceCell::new();

/// Verbosity level for logging
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Error messages only
    Error,
    /// Warning and error messages
    Warning,
    /// Info, warning, and error messages (default)
    #[default]
    Info,
    /// Debug, info, warning, and error messages
    Debug,
    /// Trace, debug, info, warning, and error messages
    Trace,
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "critical" | "fatal" | "error" => Ok(LogLevel::Error),
            "warn" | "warning" => Ok(LogLevel::Warning),
            "info" => Ok(LogLevel::Info),
            "debug" => Ok(LogLevel::Debug),
            "trace" => Ok(LogLevel::Trace),
            _ => Err(format!("Unknown log level: {s}")),
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl LogLevel {
    /// Resolve a level name, falling back to `Info` for anything unrecognised
    pub fn from_name(name: &str) -> Self {
        name.parse().unwrap_or_default()
    }

    /// Canonical upper-case name of the level
    pub fn name(&self) -> &'static str {
        match self {
            LogLevel::Error => "ERROR",
            LogLevel::Warning => "WARNING",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
            LogLevel::Trace => "TRACE",
        }
    }

    /// Convert verbosity level to log::LevelFilter
    pub fn to_level_filter(&self) -> LevelFilter {
        match self {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warning => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Initialise the process-wide logger with the specified verbosity level
///
/// Log lines go to stderr as `date - target - LEVEL - message`. The backend
/// is installed on the first call only; later calls just move the maximum
/// level, so calling this more than once is harmless.
pub fn init_logger(verbosity: LogLevel) -> Result<()> {
    if LOGGER_INSTALLED.get().is_none() {
        let colourise = atty::is(atty::Stream::Stderr);
        LOGGER_INSTALLED.get_or_try_init(|| build_dispatch(colourise).apply())?;
    }
    log::set_max_level(verbosity.to_level_filter());

    log::debug!("Logger initialized with verbosity level: {verbosity}");

    Ok(())
}

/// Initialise the logger from a level name, see [`LogLevel::from_name`]
pub fn init_logger_from_name(name: &str) -> Result<()> {
    init_logger(LogLevel::from_name(name))
}

// The dispatch itself lets everything through; `log::set_max_level` does the filtering.
fn build_dispatch(colourise: bool) -> Dispatch {
    let colors_level = ColoredLevelConfig::new()
        .error(Color::Red)
        .warn(Color::Yellow)
        .info(Color::Green)
        .debug(Color::White)
        .trace(Color::BrightBlack);

    Dispatch::new()
        .format(move |out, message, record| {
            let level = if colourise {
                colors_level.color(record.level()).to_string()
            } else {
                record.level().to_string()
            };
            out.finish(format_args!(
                "{} - {} - {} - {}",
                chrono::Local::now().format(LOG_DATE_FORMAT),
                record.target(),
                level,
                message
            ))
        })
        .level(LevelFilter::Trace)
        .chain(std::io::stderr())
}

/// Format a message with colour support
pub fn format_message(message: &str, colored_message: &str) -> String {
    if atty::is(atty::Stream::Stdout) {
        colored_message.to_string()
    } else {
        message.to_string()
    }
}
