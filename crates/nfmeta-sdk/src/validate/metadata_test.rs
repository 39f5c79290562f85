use super::validate_workflow_metadata;
use crate::model::{Author, ParamType, ParameterDescriptor, ParameterRegistry, RuntimeResources, WorkflowMetadata};

fn metadata(name: &str, author: &str, cpus: u32, log_dir: &str) -> WorkflowMetadata {
    let parameters = ParameterRegistry::builder()
        .param(ParameterDescriptor::new("outdir", ParamType::output_directory(), "Results"))
        .build()
        .expect("registry must build");
    WorkflowMetadata::new(
        name,
        Author::new(author),
        parameters,
        RuntimeResources {
            cpus,
            memory_gib: 8,
            storage_gib: 50,
        },
        log_dir,
    )
}

#[test]
fn well_formed_metadata_has_no_issues() {
    let issues = validate_workflow_metadata(&metadata("demo", "someone", 4, "latch:///logs"));
    assert!(issues.is_empty(), "{issues:?}");
}

#[test]
fn reports_each_metadata_defect() {
    let issues = validate_workflow_metadata(&metadata(" ", "", 0, ""));
    let references = issues
        .iter()
        .filter_map(|issue| issue.reference.as_deref())
        .collect::<Vec<_>>();
    assert!(references.contains(&"metadata.display_name_required"));
    assert!(references.contains(&"metadata.author.name_required"));
    assert!(references.contains(&"metadata.resources.positive"));
    assert!(references.contains(&"metadata.log_dir.invalid_path"));
    assert!(issues
        .iter()
        .any(|issue| issue.field_path.to_string() == "$.runtime_resources.cpus"));
}
