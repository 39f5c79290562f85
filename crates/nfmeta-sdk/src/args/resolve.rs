use crate::model::{ParamType, ParamValue, ParamValueError, ParameterRegistry, PathParamKind};
use crate::paths::is_remote_path;
use nfmeta_core::{FieldPath, StructuredIssue};
use serde::Serialize;
use serde_json::{Map, Value};
use std::path::Path;
use tracing::debug;

const KIND: &str = "args_error";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ArgumentSource {
    Supplied,
    Default,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedArgument {
    pub key: String,
    #[serde(skip)]
    pub param_type: ParamType,
    pub value: ParamValue,
    pub source: ArgumentSource,
}

/// Concrete values for every declared parameter, in display order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedArguments {
    pub arguments: Vec<ResolvedArgument>,
}

impl ResolvedArguments {
    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.arguments
            .iter()
            .find(|argument| argument.key == key)
            .map(|argument| &argument.value)
    }

    /// `--key value` pairs for the pipeline runner.
    pub fn to_cli_args(&self) -> Vec<String> {
        self.arguments
            .iter()
            .flat_map(|argument| [format!("--{}", argument.key), argument.value.to_string()])
            .collect()
    }

    /// Reports local input paths that are missing or of the wrong kind.
    /// Remote URIs and output destinations are not checked.
    pub fn check_local_inputs(&self) -> Vec<StructuredIssue> {
        let mut issues = Vec::new();
        for argument in &self.arguments {
            if argument.param_type.path_kind() != Some(PathParamKind::Input) {
                continue;
            }
            let ParamValue::Path(raw) = &argument.value else {
                continue;
            };
            if is_remote_path(raw) {
                continue;
            }
            let path = Path::new(raw);
            let field_path = FieldPath::root().key(argument.key.as_str());
            if !path.exists() {
                issues.push(
                    StructuredIssue::error(
                        KIND,
                        field_path,
                        format!("input path `{raw}` does not exist"),
                        "args.input_missing",
                    )
                    .for_param(argument.key.as_str()),
                );
                continue;
            }
            let kind_ok = match argument.param_type {
                ParamType::File(_) => path.is_file(),
                ParamType::Directory(_) => path.is_dir(),
                ParamType::Scalar(_) => true,
            };
            if !kind_ok {
                issues.push(
                    StructuredIssue::error(
                        KIND,
                        field_path,
                        format!(
                            "input path `{raw}` is not a {}",
                            argument.param_type.label()
                        ),
                        "args.input_kind_mismatch",
                    )
                    .for_param(argument.key.as_str()),
                );
            }
        }
        StructuredIssue::sort_stable(&mut issues);
        issues
    }
}

/// Combines supplied values with declared defaults. A `null` value counts as
/// omitted. Every problem is reported, not just the first.
pub fn resolve_arguments(
    registry: &ParameterRegistry,
    supplied: &Map<String, Value>,
) -> Result<ResolvedArguments, Vec<StructuredIssue>> {
    let mut issues = Vec::new();
    let mut arguments = Vec::with_capacity(registry.len());

    for key in supplied.keys() {
        if !registry.contains(key) {
            issues.push(
                StructuredIssue::error(
                    KIND,
                    FieldPath::root().key(key.as_str()),
                    format!("`{key}` is not a declared parameter"),
                    "args.unknown_parameter",
                )
                .for_param(key.as_str()),
            );
        }
    }

    for param in registry {
        let field_path = FieldPath::root().key(param.key.as_str());
        let supplied_value = supplied.get(&param.key).filter(|value| !value.is_null());
        let resolved = match (supplied_value, &param.default) {
            (Some(raw), _) => match ParamValue::from_json(param.param_type, raw) {
                Ok(value) => Some((value, ArgumentSource::Supplied)),
                Err(error) => {
                    let reference = match &error {
                        ParamValueError::TypeMismatch { .. } => "args.type_mismatch",
                        ParamValueError::InvalidPath { .. } => "args.invalid_path",
                    };
                    issues.push(
                        StructuredIssue::error(
                            KIND,
                            field_path,
                            format!("value for `{}` is invalid: {error}", param.key),
                            reference,
                        )
                        .for_param(param.key.as_str()),
                    );
                    None
                }
            },
            (None, Some(default)) => Some((default.clone(), ArgumentSource::Default)),
            (None, None) => {
                issues.push(
                    StructuredIssue::error(
                        KIND,
                        field_path,
                        format!("required parameter `{}` has no value", param.key),
                        "args.required_missing",
                    )
                    .for_param(param.key.as_str()),
                );
                None
            }
        };

        if let Some((value, source)) = resolved {
            debug!(key = %param.key, ?source, "resolved parameter");
            arguments.push(ResolvedArgument {
                key: param.key.clone(),
                param_type: param.param_type,
                value,
                source,
            });
        }
    }

    if issues.is_empty() {
        Ok(ResolvedArguments { arguments })
    } else {
        StructuredIssue::sort_stable(&mut issues);
        Err(issues)
    }
}

#[cfg(test)]
#[path = "resolve_test.rs"]
mod tests;
