/// Check that a value carries some non-whitespace content
///
/// Absent values, empty strings and whitespace-only strings are invalid.
///
/// # Examples
/// ```
/// use project_template::validate_input;
///
/// assert!(validate_input("valid_input"));
/// assert!(!validate_input(""));
/// assert!(!validate_input(None));
/// ```
pub fn validate_input<'a>(input: impl Into<Option<&'a str>>) -> bool {
    input
        .into()
        .is_some_and(|value| !value.trim().is_empty())
}
