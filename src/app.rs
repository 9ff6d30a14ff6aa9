use std::io::{self, Write};

use colored::Colorize;
use log::{debug, error, info};

use crate::cli::{CliOptions, OutputFormat};
use crate::constants::{APPLICATION_TITLE, INVALID_INPUT_MESSAGE};
use crate::errors::Result;
use crate::logging::{format_message, init_logger};
use crate::processor::{ProcessResult, Status, process_data};
use crate::settings::Settings;
use crate::validator::validate_input;

/// Runs one invocation against the real environment and standard streams
///
/// Settings are read from the environment, the logger is configured at the
/// resulting level and the result is written to stdout.
///
/// # Errors
/// Returns an error if the settings are malformed, the logger cannot be
/// installed or stdout cannot be written
pub fn run(options: &CliOptions) -> Result<ProcessResult> {
    let settings = Settings::from_env()?.with_debug(options.debug);
    init_logger(settings.effective_log_level())?;
    debug!("Loaded settings: {settings:?}");

    let stdout = io::stdout();
    let stderr = io::stderr();
    execute(options, &mut stdout.lock(), &mut stderr.lock())
}

/// Validates, processes and renders a single request
///
/// Data that was given but fails validation is reported on `err` (or as a
/// rejected result in yaml mode) instead of being processed.
pub fn execute<O, E>(options: &CliOptions, out: &mut O, err: &mut E) -> Result<ProcessResult>
where
    O: Write,
    E: Write,
{
    info!("Starting {APPLICATION_TITLE}");

    if let Some(data) = options.data.as_deref() {
        if !validate_input(data) {
            error!("{INVALID_INPUT_MESSAGE}");
            let result = ProcessResult::rejected(data);
            match options.format {
                OutputFormat::Text => writeln!(err, "Error: {INVALID_INPUT_MESSAGE}")?,
                OutputFormat::Yaml => render_yaml(&result, out)?,
            }
            return Ok(result);
        }
    }

    let result = process_data(options.data.as_deref());
    info!("Processing completed successfully");

    match options.format {
        OutputFormat::Text => render_text(&result, out)?,
        OutputFormat::Yaml => render_yaml(&result, out)?,
    }
    out.flush()?;

    Ok(result)
}

/// Writes the human-readable summary of a result
pub fn render_text<W: Write>(result: &ProcessResult, out: &mut W) -> Result<()> {
    let status_line = format!("Status: {}", result.status);
    let colored_status_line = match result.status {
        Status::Success => status_line.green().to_string(),
        Status::Error => status_line.red().to_string(),
    };

    writeln!(out, "{APPLICATION_TITLE}")?;
    writeln!(out, "{}", format_message(&status_line, &colored_status_line))?;
    writeln!(out, "Input: {}", result.input)?;
    writeln!(out, "Processed: {}", result.processed)?;
    writeln!(out, "Timestamp: {}", result.timestamp)?;
    Ok(())
}

/// Writes a result as a yaml document
pub fn render_yaml<W: Write>(result: &ProcessResult, out: &mut W) -> Result<()> {
    let document = serde_yaml::to_string(result)?;
    out.write_all(document.as_bytes())?;
    Ok(())
}
