//! Platform metadata for the bacMAGmining Nextflow workflow: display identity,
//! default compute request and the typed parameter form.

mod parameters;

use nfmeta_core::StructuredIssue;
use nfmeta_sdk::{validate_workflow_metadata, Author, RuntimeResources, WorkflowMetadata};

pub use parameters::generated_parameters;

pub const DISPLAY_NAME: &str = "bacMAGmining";
pub const AUTHOR_NAME: &str = "Elizabeth McDaniel";
pub const LOG_DIR: &str = "latch:///your_log_dir";
pub const RUNTIME_RESOURCES: RuntimeResources = RuntimeResources {
    cpus: 16,
    memory_gib: 32,
    storage_gib: 100,
};

/// Builds the workflow record. Any structural defect is returned instead of a
/// partially valid record; callers treat it as a startup fault.
pub fn workflow_metadata() -> Result<WorkflowMetadata, Vec<StructuredIssue>> {
    let metadata = WorkflowMetadata::new(
        DISPLAY_NAME,
        Author::new(AUTHOR_NAME),
        generated_parameters()?,
        RUNTIME_RESOURCES,
        LOG_DIR,
    );
    let issues = validate_workflow_metadata(&metadata);
    if StructuredIssue::has_errors(&issues) {
        return Err(issues);
    }
    Ok(metadata)
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
