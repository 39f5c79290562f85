use regex::Regex;
use std::sync::OnceLock;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PathLiteralError {
    #[error("path is empty")]
    Empty,
    #[error("path contains a control character")]
    ControlCharacter,
    #[error("path must not start with `-`")]
    LeadingDash,
    #[error("invalid uri scheme `{0}`")]
    InvalidScheme(String),
    #[error("uri with scheme `{0}` has no location")]
    MissingLocation(String),
}

fn scheme_regex() -> &'static Regex {
    static SCHEME_REGEX: OnceLock<Regex> = OnceLock::new();
    SCHEME_REGEX.get_or_init(|| Regex::new(r"^[a-z][a-z0-9+.-]*$").expect("valid regex"))
}

fn flag_name_regex() -> &'static Regex {
    static FLAG_NAME_REGEX: OnceLock<Regex> = OnceLock::new();
    FLAG_NAME_REGEX.get_or_init(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("valid regex"))
}

/// Checks that `raw` is usable as a local path or a `scheme://location` URI
/// such as `latch:///data` or `s3://bucket/key`. A leading `-` is refused so the
/// value cannot be read as a flag by the pipeline runner.
pub fn check_path_literal(raw: &str) -> Result<(), PathLiteralError> {
    if raw.is_empty() {
        return Err(PathLiteralError::Empty);
    }
    if raw.chars().any(char::is_control) {
        return Err(PathLiteralError::ControlCharacter);
    }
    if raw.starts_with('-') {
        return Err(PathLiteralError::LeadingDash);
    }
    if let Some((scheme, location)) = raw.split_once("://") {
        if !scheme_regex().is_match(scheme) {
            return Err(PathLiteralError::InvalidScheme(scheme.to_string()));
        }
        if location.trim_start_matches('/').is_empty() {
            return Err(PathLiteralError::MissingLocation(scheme.to_string()));
        }
    }
    Ok(())
}

pub fn is_remote_path(raw: &str) -> bool {
    raw.split_once("://")
        .is_some_and(|(scheme, _)| scheme_regex().is_match(scheme))
}

/// Parameter keys double as `--key` flags for the pipeline runner.
pub fn is_valid_flag_name(key: &str) -> bool {
    flag_name_regex().is_match(key)
}

#[cfg(test)]
#[path = "paths_test.rs"]
mod tests;
