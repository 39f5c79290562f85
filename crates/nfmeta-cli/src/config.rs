use nfmeta_core::{render_issues, StructuredIssue};
use nfmeta_sdk::{parse_value, DocumentFormat};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum ValuesError {
    #[error("read values file failed `{path}`: {source}")]
    ReadFile {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("values file placeholder expansion failed: {0}")]
    Placeholder(String),
    #[error("values file parse failed:\n{}", render_issues(.0))]
    Parse(Vec<StructuredIssue>),
    #[error("values file must contain a mapping of parameter keys to values")]
    NotAMapping,
}

/// Loads a YAML or JSON mapping of parameter values. `${VAR}` placeholders in
/// string values are replaced from the environment after decoding.
pub fn load_argument_values(path: &Path) -> Result<Map<String, Value>, ValuesError> {
    let raw = fs::read_to_string(path).map_err(|source| ValuesError::ReadFile {
        path: path.display().to_string(),
        source,
    })?;
    let decoded = parse_value(raw.as_str(), DocumentFormat::from_path(path)).map_err(ValuesError::Parse)?;
    match expand_value_placeholders(decoded).map_err(ValuesError::Placeholder)? {
        Value::Object(values) => Ok(values),
        Value::Null => Ok(Map::new()),
        _ => Err(ValuesError::NotAMapping),
    }
}

fn expand_value_placeholders(value: Value) -> Result<Value, String> {
    match value {
        Value::String(text) => expand_env_placeholders(text.as_str()).map(Value::String),
        Value::Array(items) => items
            .into_iter()
            .map(expand_value_placeholders)
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        Value::Object(entries) => entries
            .into_iter()
            .map(|(key, item)| Ok((key, expand_value_placeholders(item)?)))
            .collect::<Result<Map<_, _>, String>>()
            .map(Value::Object),
        other => Ok(other),
    }
}

pub fn expand_env_placeholders(input: &str) -> Result<String, String> {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;
    while let Some(start) = rest.find("${") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find('}') else {
            return Err("unterminated env placeholder `${...`".to_string());
        };
        let key = &after[..end];
        if key.is_empty() {
            return Err("empty env placeholder `${}`".to_string());
        }
        let value = std::env::var(key)
            .map_err(|_| format!("missing env var for placeholder `${{{key}}}`"))?;
        out.push_str(value.as_str());
        rest = &after[end + 1..];
    }
    out.push_str(rest);
    Ok(out)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
