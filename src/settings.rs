//! Application settings read from prefixed environment variables.

use std::env;

use crate::constants::{DEBUG_VARIABLE, ENV_PREFIX, LOG_LEVEL_VARIABLE};
use crate::errors::{Result, configuration_error};
use crate::logging::LogLevel;

/// Typed configuration snapshot for one invocation
///
/// | Variable                     | Default |
/// |------------------------------|---------|
/// | `PROJECT_TEMPLATE_LOG_LEVEL` | `INFO`  |
/// | `PROJECT_TEMPLATE_DEBUG`     | `false` |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Settings {
    log_level: LogLevel,
    debug: bool,
}

impl Settings {
    /// Read settings from the process environment
    ///
    /// # Errors
    /// Returns a configuration error if `PROJECT_TEMPLATE_DEBUG` is not a
    /// boolean-like value
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build settings from an arbitrary variable lookup
    ///
    /// The lookup receives full variable names, prefix included. Unset
    /// variables keep their defaults and an unrecognised log level name
    /// resolves to `Info`.
    ///
    /// # Examples
    /// ```
    /// use project_template::Settings;
    /// use project_template::logging::LogLevel;
    ///
    /// let settings = Settings::from_lookup(|name| match name {
    ///     "PROJECT_TEMPLATE_LOG_LEVEL" => Some("warning".to_string()),
    ///     _ => None,
    /// })
    /// .unwrap();
    /// assert_eq!(settings.log_level(), LogLevel::Warning);
    /// assert!(!settings.debug());
    /// ```
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Settings::default();

        let log_level_name = variable_name(LOG_LEVEL_VARIABLE);
        if let Some(value) = lookup(&log_level_name) {
            settings.log_level = LogLevel::from_name(&value);
        }

        let debug_name = variable_name(DEBUG_VARIABLE);
        if let Some(value) = lookup(&debug_name) {
            settings.debug = parse_bool(&value).ok_or_else(|| {
                configuration_error(&debug_name, &value, "expected a boolean like true/false")
            })?;
        }

        Ok(settings)
    }

    /// Turn debug on when the command line asks for it
    ///
    /// A `false` here never switches off debug enabled through the environment.
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug |= debug;
        self
    }

    pub fn log_level(&self) -> LogLevel {
        self.log_level
    }

    pub fn debug(&self) -> bool {
        self.debug
    }

    /// Level the logger should run at: `Debug` in debug mode, else the configured one
    pub fn effective_log_level(&self) -> LogLevel {
        if self.debug {
            LogLevel::Debug
        } else {
            self.log_level
        }
    }
}

fn variable_name(suffix: &str) -> String {
    format!("{ENV_PREFIX}{suffix}")
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "t" | "yes" | "y" | "on" => Some(true),
        "0" | "false" | "f" | "no" | "n" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;

    fn lookup_from(
        pairs: &'static [(&'static str, &'static str)],
    ) -> impl Fn(&str) -> Option<String> {
        move |name: &str| {
            pairs
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| value.to_string())
        }
    }

    #[test]
    fn test_settings_default_values() {
        let settings = Settings::from_lookup(|_| None).unwrap();

        assert_eq!(settings.log_level(), LogLevel::Info);
        assert!(!settings.debug());
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_settings_log_level_from_variable() {
        let settings =
            Settings::from_lookup(lookup_from(&[("PROJECT_TEMPLATE_LOG_LEVEL", "DEBUG")])).unwrap();
        assert_eq!(settings.log_level(), LogLevel::Debug);
    }

    #[test]
    fn test_settings_debug_from_variable() {
        for value in ["true", "TRUE", "1", "yes", "on"] {
            let settings = Settings::from_lookup(|name| {
                (name == "PROJECT_TEMPLATE_DEBUG").then(|| value.to_string())
            })
            .unwrap();
            assert!(settings.debug(), "'{value}' should enable debug");
        }

        let settings =
            Settings::from_lookup(lookup_from(&[("PROJECT_TEMPLATE_DEBUG", "off")])).unwrap();
        assert!(!settings.debug());
    }

    #[test]
    fn test_settings_ignore_unprefixed_variables() {
        let settings = Settings::from_lookup(lookup_from(&[
            ("LOG_LEVEL", "ERROR"),
            ("DEBUG", "true"),
        ]))
        .unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_settings_reject_malformed_debug() {
        let error =
            Settings::from_lookup(lookup_from(&[("PROJECT_TEMPLATE_DEBUG", "maybe")])).unwrap_err();

        assert!(matches!(error, Error::Configuration { .. }));
        let message = error.to_string();
        assert!(message.contains("PROJECT_TEMPLATE_DEBUG"));
        assert!(message.contains("maybe"));
    }

    #[test]
    fn test_settings_unknown_log_level_falls_back_to_info() {
        for value in ["LOUD", "", "verbose"] {
            let settings = Settings::from_lookup(|name| {
                (name == "PROJECT_TEMPLATE_LOG_LEVEL").then(|| value.to_string())
            })
            .unwrap();
            assert_eq!(settings.log_level(), LogLevel::Info, "{value:?} should resolve to Info");
        }
    }

    #[test]
    fn test_settings_log_level_is_case_insensitive() {
        let settings = Settings::from_lookup(lookup_from(&[(
            "PROJECT_TEMPLATE_LOG_LEVEL",
            "Warning",
        )]))
        .unwrap();
        assert_eq!(settings.log_level(), LogLevel::Warning);
    }

    #[test]
    fn test_effective_log_level() {
        let settings =
            Settings::from_lookup(lookup_from(&[("PROJECT_TEMPLATE_LOG_LEVEL", "error")])).unwrap();
        assert_eq!(settings.effective_log_level(), LogLevel::Error);

        let settings = settings.with_debug(true);
        assert!(settings.debug());
        assert_eq!(settings.effective_log_level(), LogLevel::Debug);
    }

    #[test]
    fn test_with_debug_false_keeps_environment_debug() {
        let settings = Settings::from_lookup(lookup_from(&[("PROJECT_TEMPLATE_DEBUG", "true")]))
            .unwrap()
            .with_debug(false);
        assert!(settings.debug());
    }
}
