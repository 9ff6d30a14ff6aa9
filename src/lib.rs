//! Project template: a small command-line application showing how settings,
//! logging, validation and processing are wired together.

pub use app::{execute, render_text, render_yaml, run};
pub use cli::{CliOptions, OutputFormat, build_command, get_options, try_get_options_from};
pub use errors::*;
pub use processor::{ProcessResult, Status, process_data};
pub use settings::Settings;
pub use validator::validate_input;

mod app;
mod cli;
pub mod constants;
mod errors;
pub mod logging;
mod processor;
mod settings;
mod validator;

pub mod prelude {
    pub use crate::errors::{Error, Result};
    pub use crate::errors::configuration_error;
    pub use crate::logging::{LogLevel, format_message, init_logger, init_logger_from_name};
    pub use crate::{CliOptions, ProcessResult, Settings, Status, process_data, run, validate_input};
}
