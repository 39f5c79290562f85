use crate::field_path::FieldPath;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueSeverity {
    Error,
    Warning,
}

/// A diagnostic about a metadata declaration, a metadata document or a set of
/// supplied argument values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuredIssue {
    pub kind: String,
    pub severity: IssueSeverity,
    /// Parameter the issue is about, when it concerns a single parameter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub param_key: Option<String>,
    pub field_path: FieldPath,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related: Option<Value>,
}

impl StructuredIssue {
    pub fn error(
        kind: &str,
        field_path: FieldPath,
        message: impl Into<String>,
        reference: &str,
    ) -> Self {
        Self {
            kind: kind.to_string(),
            severity: IssueSeverity::Error,
            param_key: None,
            field_path,
            message: message.into(),
            reference: Some(reference.to_string()),
            related: None,
        }
    }

    pub fn warning(
        kind: &str,
        field_path: FieldPath,
        message: impl Into<String>,
        reference: &str,
    ) -> Self {
        Self {
            severity: IssueSeverity::Warning,
            ..Self::error(kind, field_path, message, reference)
        }
    }

    pub fn for_param(mut self, key: impl Into<String>) -> Self {
        self.param_key = Some(key.into());
        self
    }

    pub fn with_related(mut self, related: Value) -> Self {
        self.related = Some(related);
        self
    }

    pub fn is_error(&self) -> bool {
        self.severity == IssueSeverity::Error
    }

    pub fn has_errors(issues: &[Self]) -> bool {
        issues.iter().any(Self::is_error)
    }

    pub fn sort_stable(issues: &mut [Self]) {
        issues.sort_by(|left, right| {
            (
                left.severity,
                &left.kind,
                &left.field_path,
                &left.message,
                &left.param_key,
            )
                .cmp(&(
                    right.severity,
                    &right.kind,
                    &right.field_path,
                    &right.message,
                    &right.param_key,
                ))
        });
    }
}

/// One line per issue, `severity reference at path: message`.
pub fn render_issues(issues: &[StructuredIssue]) -> String {
    issues
        .iter()
        .map(|issue| {
            let severity = match issue.severity {
                IssueSeverity::Error => "error",
                IssueSeverity::Warning => "warning",
            };
            let reference = issue.reference.as_deref().unwrap_or(issue.kind.as_str());
            format!("{severity} {reference} at {}: {}", issue.field_path, issue.message)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
#[path = "issues_test.rs"]
mod tests;
