use super::registry::validate_parameter_registry;
use crate::model::WorkflowMetadata;
use crate::paths::check_path_literal;
use nfmeta_core::{FieldPath, StructuredIssue};

const KIND: &str = "metadata_error";

pub fn validate_workflow_metadata(metadata: &WorkflowMetadata) -> Vec<StructuredIssue> {
    let mut issues = validate_parameter_registry(metadata.parameters());

    if metadata.display_name().trim().is_empty() {
        issues.push(StructuredIssue::error(
            KIND,
            FieldPath::root().key("display_name"),
            "display name must not be empty",
            "metadata.display_name_required",
        ));
    }

    if metadata.author().name.trim().is_empty() {
        issues.push(StructuredIssue::error(
            KIND,
            FieldPath::root().key("author").key("name"),
            "author name must not be empty",
            "metadata.author.name_required",
        ));
    }

    let resources = metadata.runtime_resources();
    for (field, amount) in [
        ("cpus", resources.cpus),
        ("memory_gib", resources.memory_gib),
        ("storage_gib", resources.storage_gib),
    ] {
        if amount == 0 {
            issues.push(StructuredIssue::error(
                KIND,
                FieldPath::root().key("runtime_resources").key(field),
                format!("runtime resource `{field}` must be > 0"),
                "metadata.resources.positive",
            ));
        }
    }

    if let Err(error) = check_path_literal(metadata.log_dir()) {
        issues.push(StructuredIssue::error(
            KIND,
            FieldPath::root().key("log_dir"),
            format!("log directory is not a valid path: {error}"),
            "metadata.log_dir.invalid_path",
        ));
    }

    StructuredIssue::sort_stable(&mut issues);
    issues
}

#[cfg(test)]
#[path = "metadata_test.rs"]
mod tests;
