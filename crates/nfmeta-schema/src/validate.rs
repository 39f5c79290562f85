use jsonschema::JSONSchema;
use nfmeta_core::{FieldPath, FieldPathSegment, StructuredIssue};
use serde_json::Value;

use crate::registry::get_json_schema;

pub fn validate_schema_instance(schema_id: &str, instance: &Value) -> Vec<StructuredIssue> {
    let Some(schema) = get_json_schema(schema_id) else {
        return vec![schema_issue(
            FieldPath::root().key("schema"),
            format!("unknown schema id: {schema_id}"),
            "schema_registry.unknown_schema",
        )];
    };

    let schema_json: Value = match serde_json::from_str(schema.json) {
        Ok(value) => value,
        Err(err) => {
            return vec![schema_issue(
                FieldPath::root(),
                format!("embedded schema json parse failed: {err}"),
                "schema_registry.invalid_embedded_schema",
            )];
        }
    };

    let compiled = match JSONSchema::options().compile(&schema_json) {
        Ok(compiled) => compiled,
        Err(err) => {
            return vec![schema_issue(
                FieldPath::root(),
                format!("schema compile failed for {schema_id}: {err}"),
                "schema_registry.compile_failed",
            )];
        }
    };

    let mut issues = Vec::new();
    if let Err(errors) = compiled.validate(instance) {
        for error in errors {
            let path = json_pointer_to_field_path(error.instance_path.to_string().as_str());
            issues.push(schema_issue(path, error.to_string(), "json_schema.validation"));
        }
    }
    StructuredIssue::sort_stable(&mut issues);
    issues
}

fn schema_issue(field_path: FieldPath, message: String, reference: &str) -> StructuredIssue {
    StructuredIssue::error("schema_error", field_path, message, reference)
}

fn json_pointer_to_field_path(pointer: &str) -> FieldPath {
    let segments = pointer
        .split('/')
        .filter(|raw| !raw.is_empty())
        .map(|raw| raw.replace("~1", "/").replace("~0", "~"))
        .map(|decoded| match decoded.parse::<usize>() {
            Ok(index) => FieldPathSegment::Index(index),
            Err(_) => FieldPathSegment::Key(decoded),
        })
        .collect();
    FieldPath::from_segments(segments)
}

#[cfg(test)]
#[path = "validate_test.rs"]
mod tests;
