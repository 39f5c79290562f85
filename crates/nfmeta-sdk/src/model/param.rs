use crate::paths::{check_path_literal, PathLiteralError};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;
use std::fmt::{Display, Formatter};

/// Whether a path parameter names something to read or a destination to create.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PathParamKind {
    Input,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScalarKind {
    String,
    Integer,
    Float,
    Boolean,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamType {
    File(PathParamKind),
    Directory(PathParamKind),
    Scalar(ScalarKind),
}

impl ParamType {
    pub const fn input_file() -> Self {
        Self::File(PathParamKind::Input)
    }

    pub const fn input_directory() -> Self {
        Self::Directory(PathParamKind::Input)
    }

    pub const fn output_file() -> Self {
        Self::File(PathParamKind::Output)
    }

    pub const fn output_directory() -> Self {
        Self::Directory(PathParamKind::Output)
    }

    pub fn path_kind(self) -> Option<PathParamKind> {
        match self {
            Self::File(kind) | Self::Directory(kind) => Some(kind),
            Self::Scalar(_) => None,
        }
    }

    pub fn is_path(self) -> bool {
        self.path_kind().is_some()
    }

    pub fn is_output(self) -> bool {
        self.path_kind() == Some(PathParamKind::Output)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::File(_) => "file",
            Self::Directory(_) => "directory",
            Self::Scalar(ScalarKind::String) => "string",
            Self::Scalar(ScalarKind::Integer) => "integer",
            Self::Scalar(ScalarKind::Float) => "float",
            Self::Scalar(ScalarKind::Boolean) => "boolean",
        }
    }
}

/// A concrete parameter value, either a declared default or a supplied argument.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Path(String),
    String(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParamValueError {
    #[error("expected {expected} value, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },
    #[error("invalid path `{path}`: {source}")]
    InvalidPath {
        path: String,
        #[source]
        source: PathLiteralError,
    },
}

impl ParamValue {
    pub fn path(path: impl Into<String>) -> Self {
        Self::Path(path.into())
    }

    /// Decodes a JSON value according to the declared parameter type.
    pub fn from_json(param_type: ParamType, value: &Value) -> Result<Self, ParamValueError> {
        let mismatch = || ParamValueError::TypeMismatch {
            expected: param_type.label(),
            found: json_kind(value),
        };
        match param_type {
            ParamType::File(_) | ParamType::Directory(_) => {
                let path = value.as_str().ok_or_else(mismatch)?;
                check_path_literal(path).map_err(|source| ParamValueError::InvalidPath {
                    path: path.to_string(),
                    source,
                })?;
                Ok(Self::Path(path.to_string()))
            }
            ParamType::Scalar(ScalarKind::String) => {
                value.as_str().map(|text| Self::String(text.to_string())).ok_or_else(mismatch)
            }
            ParamType::Scalar(ScalarKind::Integer) => {
                value.as_i64().map(Self::Integer).ok_or_else(mismatch)
            }
            ParamType::Scalar(ScalarKind::Float) => {
                value.as_f64().map(Self::Float).ok_or_else(mismatch)
            }
            ParamType::Scalar(ScalarKind::Boolean) => {
                value.as_bool().map(Self::Boolean).ok_or_else(mismatch)
            }
        }
    }

    pub fn to_json(&self) -> Value {
        match self {
            Self::Path(text) | Self::String(text) => Value::String(text.clone()),
            Self::Integer(number) => Value::from(*number),
            Self::Float(number) => Value::from(*number),
            Self::Boolean(flag) => Value::Bool(*flag),
        }
    }

    pub fn matches(&self, param_type: ParamType) -> bool {
        matches!(
            (self, param_type),
            (Self::Path(_), ParamType::File(_) | ParamType::Directory(_))
                | (Self::String(_), ParamType::Scalar(ScalarKind::String))
                | (Self::Integer(_), ParamType::Scalar(ScalarKind::Integer))
                | (Self::Float(_), ParamType::Scalar(ScalarKind::Float))
                | (Self::Boolean(_), ParamType::Scalar(ScalarKind::Boolean))
        )
    }
}

impl Display for ParamValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Path(text) | Self::String(text) => f.write_str(text),
            Self::Integer(number) => write!(f, "{number}"),
            Self::Float(number) => write!(f, "{number}"),
            Self::Boolean(flag) => write!(f, "{flag}"),
        }
    }
}

impl Serialize for ParamValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Path(text) | Self::String(text) => serializer.serialize_str(text),
            Self::Integer(number) => serializer.serialize_i64(*number),
            Self::Float(number) => serializer.serialize_f64(*number),
            Self::Boolean(flag) => serializer.serialize_bool(*flag),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(number) if number.is_i64() || number.is_u64() => "integer",
        Value::Number(_) => "float",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Describes one workflow input or output as the hosting platform sees it.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterDescriptor {
    pub key: String,
    pub param_type: ParamType,
    pub default: Option<ParamValue>,
    /// Starts a new form section; `None` continues the section already open.
    pub section_title: Option<String>,
    pub description: String,
}

impl ParameterDescriptor {
    pub fn new(key: impl Into<String>, param_type: ParamType, description: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            param_type,
            default: None,
            section_title: None,
            description: description.into(),
        }
    }

    pub fn with_default(mut self, default: ParamValue) -> Self {
        self.default = Some(default);
        self
    }

    pub fn with_section_title(mut self, title: impl Into<String>) -> Self {
        self.section_title = Some(title.into());
        self
    }

    pub fn is_required(&self) -> bool {
        self.default.is_none()
    }
}

#[cfg(test)]
#[path = "param_test.rs"]
mod tests;
