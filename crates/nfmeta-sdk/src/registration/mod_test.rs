use super::PlatformRegistry;
use crate::model::{
    Author, ParamType, ParameterDescriptor, ParameterRegistry, RuntimeResources, WorkflowMetadata,
};

fn metadata(cpus: u32) -> WorkflowMetadata {
    let parameters = ParameterRegistry::builder()
        .param(ParameterDescriptor::new("outdir", ParamType::output_directory(), "Results"))
        .build()
        .expect("registry must build");
    WorkflowMetadata::new(
        "demo",
        Author::new("someone"),
        parameters,
        RuntimeResources {
            cpus,
            memory_gib: 4,
            storage_gib: 10,
        },
        "latch:///logs",
    )
}

#[test]
fn registering_twice_returns_the_same_handle() {
    let registry = PlatformRegistry::new();
    let first = registry.register(&metadata(2)).expect("must register");
    let second = registry.register(&metadata(2)).expect("must be idempotent");
    assert_eq!(first, second);
    assert_eq!(first.parameter_count, 1);
    assert_eq!(registry.len(), 1);
    assert_eq!(registry.lookup("demo"), Some(first));
}

#[test]
fn conflicting_declaration_is_rejected() {
    let registry = PlatformRegistry::new();
    registry.register(&metadata(2)).expect("must register");
    let issues = registry.register(&metadata(4)).expect_err("must conflict");
    assert_eq!(issues[0].reference.as_deref(), Some("registration.conflict"));
    assert_eq!(registry.len(), 1);
}

#[test]
fn malformed_metadata_is_never_recorded() {
    let registry = PlatformRegistry::new();
    let issues = registry.register(&metadata(0)).expect_err("must refuse");
    assert!(issues
        .iter()
        .any(|issue| issue.reference.as_deref() == Some("metadata.resources.positive")));
    assert!(registry.is_empty());
}

#[test]
fn local_registries_do_not_touch_the_global_one() {
    let local = PlatformRegistry::new();
    local.register(&metadata(2)).expect("must register");
    assert!(PlatformRegistry::global().lookup("demo").is_none());
}
