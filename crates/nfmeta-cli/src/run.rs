use crate::cli::{ArgsCommand, OutputFormat, RegisterCommand, SchemaCommand, ValidateCommand};
use crate::config::{load_argument_values, ValuesError};
use nfmeta_core::{render_issues, StructuredIssue};
use nfmeta_sdk::{
    export_document_json, parse_metadata_document_with_options, register, render_form_text,
    resolve_arguments, validate_workflow_metadata, DocumentFormat, ParseDocumentOptions,
    WorkflowMetadata,
};
use serde_json::json;
use std::fs;
use tracing::info;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("workflow metadata is malformed:\n{}", render_issues(.0))]
    Declaration(Vec<StructuredIssue>),
    #[error("read file failed `{path}`: {source}")]
    ReadFile {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("metadata document `{path}` is invalid:\n{}", render_issues(.issues))]
    InvalidDocument {
        path: String,
        issues: Vec<StructuredIssue>,
    },
    #[error(transparent)]
    Values(#[from] ValuesError),
    #[error("argument values are invalid:\n{}", render_issues(.0))]
    InvalidArguments(Vec<StructuredIssue>),
    #[error("registration refused:\n{}", render_issues(.0))]
    Registration(Vec<StructuredIssue>),
    #[error("json encode failed: {0}")]
    JsonEncode(#[from] serde_json::Error),
}

fn declared_metadata() -> Result<WorkflowMetadata, CliError> {
    bacmag_metadata::workflow_metadata().map_err(CliError::Declaration)
}

pub fn execute_schema(command: &SchemaCommand) -> Result<String, CliError> {
    let metadata = declared_metadata()?;
    match command.format {
        OutputFormat::Json => Ok(export_document_json(&metadata)?),
        OutputFormat::Text => Ok(render_form_text(&metadata)),
    }
}

pub fn execute_validate(command: &ValidateCommand) -> Result<String, CliError> {
    let path = command.document.display().to_string();
    let text = fs::read_to_string(&command.document).map_err(|source| CliError::ReadFile {
        path: path.clone(),
        source,
    })?;
    let metadata = parse_metadata_document_with_options(
        text.as_str(),
        ParseDocumentOptions {
            format: DocumentFormat::from_path(&command.document),
            validate_schema: !command.skip_schema_check,
        },
    )
    .map_err(|issues| CliError::InvalidDocument {
        path: path.clone(),
        issues,
    })?;
    let warnings = validate_workflow_metadata(&metadata);
    let fingerprint = metadata.fingerprint()?;
    info!(document = %path, %fingerprint, "metadata document is valid");

    match command.format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&json!({
            "display_name": metadata.display_name(),
            "parameters": metadata.parameters().len(),
            "fingerprint": fingerprint,
            "issues": warnings,
        }))?),
        OutputFormat::Text => {
            let mut lines = vec![format!(
                "ok: {} ({} parameters, {})",
                metadata.display_name(),
                metadata.parameters().len(),
                fingerprint
            )];
            if !warnings.is_empty() {
                lines.push(render_issues(&warnings));
            }
            Ok(lines.join("\n"))
        }
    }
}

pub fn execute_args(command: &ArgsCommand) -> Result<String, CliError> {
    let metadata = declared_metadata()?;
    let values = load_argument_values(&command.values)?;
    let resolved =
        resolve_arguments(metadata.parameters(), &values).map_err(CliError::InvalidArguments)?;
    if command.check_paths {
        let issues = resolved.check_local_inputs();
        if !issues.is_empty() {
            return Err(CliError::InvalidArguments(issues));
        }
    }

    let cli_args = resolved.to_cli_args();
    match command.format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&json!({
            "arguments": resolved.arguments,
            "cli_args": cli_args,
        }))?),
        OutputFormat::Text => Ok(cli_args
            .chunks(2)
            .map(|pair| pair.join(" "))
            .collect::<Vec<_>>()
            .join("\n")),
    }
}

pub fn execute_register(command: &RegisterCommand) -> Result<String, CliError> {
    let metadata = declared_metadata()?;
    let handle = register(&metadata).map_err(CliError::Registration)?;
    match command.format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&handle)?),
        OutputFormat::Text => Ok(format!(
            "registered {} ({} parameters, {})",
            handle.display_name, handle.parameter_count, handle.fingerprint
        )),
    }
}

#[cfg(test)]
#[path = "run_test.rs"]
mod tests;
