mod json;
mod yaml;

use crate::documents::WorkflowMetadataDocument;
use crate::model::WorkflowMetadata;
use nfmeta_core::{FieldPath, StructuredIssue};
use nfmeta_schema::validate_schema_instance;
use nfmeta_schema::versions::SCHEMA_WORKFLOW_0_0_1;
use serde_json::Value;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Auto,
    Json,
    Yaml,
}

impl DocumentFormat {
    /// `.json` is JSON, `.yaml`/`.yml` is YAML, anything else is sniffed.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::Json,
            Some("yaml") | Some("yml") => Self::Yaml,
            _ => Self::Auto,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseDocumentOptions {
    pub format: DocumentFormat,
    pub validate_schema: bool,
}

impl Default for ParseDocumentOptions {
    fn default() -> Self {
        Self {
            format: DocumentFormat::Auto,
            validate_schema: true,
        }
    }
}

pub fn parse_value(input: &str, format: DocumentFormat) -> Result<Value, Vec<StructuredIssue>> {
    match format {
        DocumentFormat::Auto if looks_like_json(input) => json::parse_json(input),
        DocumentFormat::Auto | DocumentFormat::Yaml => yaml::parse_yaml(input),
        DocumentFormat::Json => json::parse_json(input),
    }
}

pub fn parse_metadata_document(input: &str) -> Result<WorkflowMetadata, Vec<StructuredIssue>> {
    parse_metadata_document_with_options(input, ParseDocumentOptions::default())
}

pub fn parse_metadata_document_with_options(
    input: &str,
    options: ParseDocumentOptions,
) -> Result<WorkflowMetadata, Vec<StructuredIssue>> {
    let value = parse_value(input, options.format)?;
    let schema_id = extract_schema_id(&value)?;

    if schema_id != SCHEMA_WORKFLOW_0_0_1 {
        return Err(vec![StructuredIssue::error(
            "parse_error",
            FieldPath::root().key("schema"),
            format!("unsupported metadata schema: {schema_id}"),
            "parse.unsupported_schema",
        )]);
    }

    if options.validate_schema {
        let issues = validate_schema_instance(schema_id.as_str(), &value);
        if !issues.is_empty() {
            return Err(issues);
        }
    }

    let document = serde_json::from_value::<WorkflowMetadataDocument>(value).map_err(|err| {
        vec![StructuredIssue::error(
            "parse_error",
            FieldPath::root(),
            format!("typed parse failed for schema {schema_id}: {err}"),
            "parse.typed_deserialize_error",
        )]
    })?;
    document.into_metadata()
}

fn looks_like_json(input: &str) -> bool {
    let trimmed = input.trim_start();
    trimmed.starts_with('{') || trimmed.starts_with('[')
}

fn extract_schema_id(value: &Value) -> Result<String, Vec<StructuredIssue>> {
    value
        .as_object()
        .and_then(|obj| obj.get("schema"))
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| {
            vec![StructuredIssue::error(
                "parse_error",
                FieldPath::root(),
                "document must contain string field `schema`",
                "parse.schema_required",
            )]
        })
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
