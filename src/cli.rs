use std::ffi::OsString;
use std::fmt;
use std::str::FromStr;

use clap::{
    Arg, ArgAction, ArgMatches, Command, command, crate_authors, crate_description, crate_name,
    crate_version,
};

use crate::constants::{DATA_HELP, DEBUG_HELP, FORMAT_HELP};

/// How the processing result is written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable summary
    #[default]
    Text,
    /// The serialised result
    Yaml,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "yaml" => Ok(OutputFormat::Yaml),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => f.write_str("text"),
            OutputFormat::Yaml => f.write_str("yaml"),
        }
    }
}

/// Options collected from the command line
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CliOptions {
    pub data: Option<String>,
    pub debug: bool,
    pub format: OutputFormat,
}

impl CliOptions {
    pub fn from_matches(matches: &ArgMatches) -> Self {
        CliOptions {
            data: matches.get_one::<String>("data").cloned(),
            debug: matches.get_flag("debug"),
            format: matches
                .get_one::<OutputFormat>("format")
                .copied()
                .unwrap_or_default(),
        }
    }
}

/// Builds the command-line interface
///
/// Defines the following arguments:
/// - `data`: Data to process
/// - `debug`: Enable debug logging
/// - `format`: Output format, `text` or `yaml`
pub fn build_command() -> Command {
    // define arg for the data to process
    let arg_data = Arg::new("data")
        .short('d')
        .long("data")
        .value_name("DATA")
        .help(DATA_HELP);

    // define arg for debug logging
    let arg_debug = Arg::new("debug")
        .long("debug")
        .help(DEBUG_HELP)
        .action(ArgAction::SetTrue);

    // define arg for output format
    let arg_format = Arg::new("format")
        .short('f')
        .long("format")
        .help(FORMAT_HELP)
        .value_name("FORMAT")
        .default_value("text")
        .value_parser(|value: &str| value.parse::<OutputFormat>());

    command!()
        .author(crate_authors!())
        .about(crate_description!())
        .name(crate_name!())
        .version(crate_version!())
        .arg(arg_data)
        .arg(arg_debug)
        .arg(arg_format)
}

/// Parses the process arguments
///
/// Exits with usage text on `--help`, `--version` or malformed arguments.
pub fn get_options() -> CliOptions {
    CliOptions::from_matches(&build_command().get_matches())
}

/// Parses the given arguments without exiting the process
///
/// # Errors
/// Returns the clap error for malformed arguments, `--help` and `--version`
pub fn try_get_options_from<I, T>(args: I) -> Result<CliOptions, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = build_command().try_get_matches_from(args)?;
    Ok(CliOptions::from_matches(&matches))
}
