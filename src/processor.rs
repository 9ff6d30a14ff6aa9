use std::fmt;

use chrono::{SecondsFormat, Utc};
use log::info;
use serde::Serialize;

use crate::constants::DEFAULT_INPUT;

/// Outcome of a processing call
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Error,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Success => f.write_str("success"),
            Status::Error => f.write_str("error"),
        }
    }
}

/// Structured result of [`process_data`]
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ProcessResult {
    pub status: Status,
    pub input: String,
    pub processed: String,
    /// RFC 3339 UTC time at which the result was produced
    pub timestamp: String,
}

impl ProcessResult {
    /// Result for input the caller refused to process
    ///
    /// `processed` stays empty since no transformation took place.
    pub fn rejected(input: &str) -> Self {
        ProcessResult {
            status: Status::Error,
            input: input.to_string(),
            processed: String::new(),
            timestamp: now(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == Status::Success
    }
}

/// Upper-case the input and wrap it in a [`ProcessResult`]
///
/// Absent or empty input is replaced by `"default"` first. Validation is left
/// to the caller, so this never fails.
///
/// # Examples
/// ```
/// use project_template::{process_data, Status};
///
/// let result = process_data("hello");
/// assert_eq!(result.status, Status::Success);
/// assert_eq!(result.processed, "HELLO");
///
/// assert_eq!(process_data(None).input, "default");
/// ```
pub fn process_data<'a>(data: impl Into<Option<&'a str>>) -> ProcessResult {
    let input = match data.into() {
        Some(value) if !value.is_empty() => value,
        _ => {
            info!("No data provided, using default");
            DEFAULT_INPUT
        }
    };

    info!("Processing data: {input}");

    ProcessResult {
        status: Status::Success,
        input: input.to_string(),
        processed: input.to_uppercase(),
        timestamp: now(),
    }
}

fn now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    #[test]
    fn test_process_data_with_string_input() {
        let result = process_data("hello");

        assert_eq!(result.status, Status::Success);
        assert_eq!(result.input, "hello");
        assert_eq!(result.processed, "HELLO");
        assert!(!result.timestamp.is_empty());
    }

    #[test]
    fn test_process_data_with_none_input() {
        let result = process_data(None);

        assert_eq!(result.status, Status::Success);
        assert_eq!(result.input, "default");
        assert_eq!(result.processed, "DEFAULT");
    }

    #[test]
    fn test_process_data_with_empty_string() {
        let result = process_data("");

        assert_eq!(result.status, Status::Success);
        assert_eq!(result.input, "default");
        assert_eq!(result.processed, "DEFAULT");
    }

    #[test]
    fn test_process_data_keeps_whitespace_input() {
        // Only emptiness triggers the default; blank input is the validator's concern
        let result = process_data("   ");

        assert!(result.is_success());
        assert_eq!(result.input, "   ");
        assert_eq!(result.processed, "   ");
    }

    #[test]
    fn test_process_data_uppercases_unicode() {
        let result = process_data("straße ünïcode");
        assert_eq!(result.processed, "STRASSE ÜNÏCODE");
    }

    #[test]
    fn test_timestamp_is_rfc3339() {
        let result = process_data("time");
        assert!(
            DateTime::parse_from_rfc3339(&result.timestamp).is_ok(),
            "timestamp should parse as RFC 3339: {}",
            result.timestamp
        );
    }

    #[test]
    fn test_rejected_result() {
        let result = ProcessResult::rejected("   ");

        assert_eq!(result.status, Status::Error);
        assert!(!result.is_success());
        assert_eq!(result.input, "   ");
        assert!(result.processed.is_empty());
    }

    #[test]
    fn test_status_serialises_lowercase() {
        let yaml = serde_yaml::to_string(&process_data("x")).unwrap();
        assert!(yaml.contains("status: success"));
        assert!(yaml.contains("processed: X"));

        let yaml = serde_yaml::to_string(&ProcessResult::rejected("")).unwrap();
        assert!(yaml.contains("status: error"));
    }
}
