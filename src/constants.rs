//! Constants used throughout the application
//!
//! This module centralises all constants used in the application to make
//! them easier to manage and update.

/// Prefix shared by every environment variable the application reads
pub const ENV_PREFIX: &str = "PROJECT_TEMPLATE_";

/// Environment variable suffix holding the log level name
pub const LOG_LEVEL_VARIABLE: &str = "LOG_LEVEL";

/// Environment variable suffix holding the debug switch
pub const DEBUG_VARIABLE: &str = "DEBUG";

/// Value substituted by the processor when no input is given
pub const DEFAULT_INPUT: &str = "default";

/// Heading printed above the processing summary
pub const APPLICATION_TITLE: &str = "Project Template Application";

/// Message printed when the supplied data fails validation
pub const INVALID_INPUT_MESSAGE: &str = "Invalid input provided";

/// Timestamp layout used by the log formatter
pub const LOG_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Help text for the data command-line option
pub const DATA_HELP: &str = "Data to process";

/// Help text for the debug command-line option
pub const DEBUG_HELP: &str = "Enable debug logging";

/// Help text for the format command-line option
pub const FORMAT_HELP: &str = "Output format of the processing result: text or yaml";
