use std::error::Error as StdError;
use std::fmt;
use std::io;

/// Custom error type for the Project Template application
#[derive(Debug)]
pub enum Error {
    /// An environment variable holds a value that cannot be converted
    Configuration {
        variable: String,
        value: String,
        detail: String,
    },
    /// The logging backend could not be installed
    Logging {
        source: Box<dyn StdError + Send + Sync>,
    },
    /// Writing the rendered result failed
    Output { source: io::Error },
    /// Serialising the result failed
    Serialization { source: serde_yaml::Error },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Configuration {
                variable,
                value,
                detail,
            } => {
                write!(f, "Invalid value '{value}' for {variable}: {detail}")
            }
            Error::Logging { source } => {
                write!(f, "Failed to initialise logging: {source}")
            }
            Error::Output { .. } => write!(f, "Failed to write output"),
            Error::Serialization { .. } => write!(f, "Failed to serialise result"),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::Logging { source } => Some(source.as_ref()),
            Error::Output { source } => Some(source),
            Error::Serialization { source } => Some(source),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Output { source: err }
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(err: serde_yaml::Error) -> Self {
        Error::Serialization { source: err }
    }
}

impl From<log::SetLoggerError> for Error {
    fn from(err: log::SetLoggerError) -> Self {
        Error::Logging {
            source: Box::new(err),
        }
    }
}

/// Custom Result type for the Project Template application
///
/// # Examples
/// ```
/// use project_template::prelude::{Result, configuration_error};
///
/// fn example_function(fail: bool) -> Result<String> {
///     if fail {
///         return Err(configuration_error("EXAMPLE", "value", "something went wrong"));
///     }
///     Ok("success".to_string())
/// }
///
/// assert!(example_function(false).is_ok());
/// assert!(example_function(true).is_err());
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// Helper function to create a configuration error
pub fn configuration_error(variable: &str, value: &str, detail: &str) -> Error {
    Error::Configuration {
        variable: variable.to_string(),
        value: value.to_string(),
        detail: detail.to_string(),
    }
}
