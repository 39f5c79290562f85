use crate::model::{ParamValue, ParameterDescriptor, ParameterRegistry};
use crate::paths::{check_path_literal, is_valid_flag_name};
use nfmeta_core::{FieldPath, StructuredIssue};
use serde_json::json;
use std::collections::HashMap;

const KIND: &str = "registry_error";

pub fn validate_parameter_registry(registry: &ParameterRegistry) -> Vec<StructuredIssue> {
    validate_parameters(registry.as_slice())
}

/// Structural checks over a parameter table in display order. Field paths
/// point into the exported document layout (`$.parameters[i]...`).
pub fn validate_parameters(params: &[ParameterDescriptor]) -> Vec<StructuredIssue> {
    let mut issues = Vec::new();
    let mut first_index_by_key: HashMap<&str, usize> = HashMap::new();

    for (index, param) in params.iter().enumerate() {
        let base = FieldPath::root().key("parameters").index(index);
        let key = param.key.as_str();

        if !is_valid_flag_name(key) {
            issues.push(
                StructuredIssue::error(
                    KIND,
                    base.clone().key("key"),
                    format!("parameter key `{key}` is not a valid flag name"),
                    "registry.param.key_format",
                )
                .for_param(key),
            );
        }

        if let Some(first_index) = first_index_by_key.get(key) {
            issues.push(
                StructuredIssue::error(
                    KIND,
                    base.clone().key("key"),
                    format!("duplicate parameter key `{key}` (first at parameters[{first_index}])"),
                    "registry.param.duplicate_key",
                )
                .for_param(key)
                .with_related(json!({ "first_index": first_index })),
            );
        } else {
            first_index_by_key.insert(key, index);
        }

        if param.description.trim().is_empty() {
            issues.push(
                StructuredIssue::warning(
                    KIND,
                    base.clone().key("description"),
                    format!("parameter `{key}` has no description"),
                    "registry.param.description_required",
                )
                .for_param(key),
            );
        }

        if param
            .section_title
            .as_deref()
            .is_some_and(|title| title.trim().is_empty())
        {
            issues.push(
                StructuredIssue::error(
                    KIND,
                    base.clone().key("section_title"),
                    "section title must not be blank; omit it to continue the open section",
                    "registry.param.section_title_blank",
                )
                .for_param(key),
            );
        }

        if let Some(default) = &param.default {
            if let Some(issue) = check_default(param, default, base.key("default")) {
                issues.push(issue);
            }
        }
    }

    StructuredIssue::sort_stable(&mut issues);
    issues
}

fn check_default(
    param: &ParameterDescriptor,
    default: &ParamValue,
    path: FieldPath,
) -> Option<StructuredIssue> {
    if !default.matches(param.param_type) {
        return Some(
            StructuredIssue::error(
                KIND,
                path,
                format!(
                    "default for `{}` does not match declared type {}",
                    param.key,
                    param.param_type.label()
                ),
                "registry.param.default_type_mismatch",
            )
            .for_param(param.key.as_str()),
        );
    }
    match default {
        ParamValue::Path(raw) => check_path_literal(raw).err().map(|error| {
            StructuredIssue::error(
                KIND,
                path,
                format!("default for `{}` is not a valid path: {error}", param.key),
                "registry.param.default_invalid_path",
            )
            .for_param(param.key.as_str())
        }),
        // JSON has no NaN or infinity; the exported default would read back as null.
        ParamValue::Float(number) if !number.is_finite() => Some(
            StructuredIssue::error(
                KIND,
                path,
                format!("default for `{}` must be a finite number, got {number}", param.key),
                "registry.param.default_non_finite",
            )
            .for_param(param.key.as_str()),
        ),
        _ => None,
    }
}

#[cfg(test)]
#[path = "registry_test.rs"]
mod tests;
