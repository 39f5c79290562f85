use super::{render_issues, IssueSeverity, StructuredIssue};
use crate::FieldPath;

#[test]
fn errors_sort_before_warnings() {
    let mut issues = vec![
        StructuredIssue::warning(
            "registry_error",
            FieldPath::root().key("parameters").index(1).key("description"),
            "description is empty",
            "registry.param.description_required",
        ),
        StructuredIssue::error(
            "registry_error",
            FieldPath::root(),
            "duplicate key",
            "registry.param.duplicate_key",
        )
        .for_param("outdir"),
    ];

    StructuredIssue::sort_stable(&mut issues);

    assert_eq!(issues[0].severity, IssueSeverity::Error);
    assert_eq!(issues[0].param_key.as_deref(), Some("outdir"));
    assert_eq!(issues[1].severity, IssueSeverity::Warning);
}

#[test]
fn has_errors_ignores_warnings() {
    let warnings = vec![StructuredIssue::warning(
        "registry_error",
        FieldPath::root(),
        "soft",
        "registry.soft",
    )];
    assert!(!StructuredIssue::has_errors(&warnings));
}

#[test]
fn render_uses_reference_and_path() {
    let issues = vec![StructuredIssue::error(
        "args_error",
        FieldPath::root().key("outdir"),
        "required parameter has no value",
        "args.required_missing",
    )];
    assert_eq!(
        render_issues(&issues),
        "error args.required_missing at $.outdir: required parameter has no value"
    );
}

#[test]
fn severity_is_error_or_warning_only() {
    assert_eq!(
        serde_json::to_value(IssueSeverity::Warning).expect("encode"),
        serde_json::json!("warning")
    );
    assert!(serde_json::from_value::<IssueSeverity>(serde_json::json!("info")).is_err());
}
