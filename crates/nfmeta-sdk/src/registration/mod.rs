use crate::model::WorkflowMetadata;
use crate::validate::validate_workflow_metadata;
use nfmeta_core::{FieldPath, StructuredIssue};
use serde::Serialize;
use serde_json::json;
use std::collections::BTreeMap;
use std::sync::{Mutex, OnceLock, PoisonError};
use tracing::{info, warn};

/// Receipt for a registered workflow declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistrationHandle {
    pub display_name: String,
    pub fingerprint: String,
    pub parameter_count: usize,
}

/// Registrations keyed by display name. One declaration per name; registering
/// the same declaration again returns the existing handle.
#[derive(Debug, Default)]
pub struct PlatformRegistry {
    entries: Mutex<BTreeMap<String, RegistrationHandle>>,
}

impl PlatformRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process-wide registry used by [`register`]. Lives until process exit.
    pub fn global() -> &'static PlatformRegistry {
        static GLOBAL: OnceLock<PlatformRegistry> = OnceLock::new();
        GLOBAL.get_or_init(PlatformRegistry::new)
    }

    pub fn register(
        &self,
        metadata: &WorkflowMetadata,
    ) -> Result<RegistrationHandle, Vec<StructuredIssue>> {
        let issues = validate_workflow_metadata(metadata);
        if StructuredIssue::has_errors(&issues) {
            warn!(
                workflow = metadata.display_name(),
                issues = issues.len(),
                "refusing to register malformed workflow metadata"
            );
            return Err(issues);
        }

        let fingerprint = metadata.fingerprint().map_err(|err| {
            vec![StructuredIssue::error(
                "registration_error",
                FieldPath::root(),
                format!("fingerprint failed: {err}"),
                "registration.fingerprint_failed",
            )]
        })?;

        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(existing) = entries.get(metadata.display_name()) {
            if existing.fingerprint == fingerprint {
                return Ok(existing.clone());
            }
            return Err(vec![StructuredIssue::error(
                "registration_error",
                FieldPath::root().key("display_name"),
                format!(
                    "workflow `{}` is already registered with a different declaration",
                    metadata.display_name()
                ),
                "registration.conflict",
            )
            .with_related(json!({
                "registered": existing.fingerprint,
                "incoming": fingerprint,
            }))]);
        }

        let handle = RegistrationHandle {
            display_name: metadata.display_name().to_string(),
            fingerprint,
            parameter_count: metadata.parameters().len(),
        };
        info!(
            workflow = %handle.display_name,
            fingerprint = %handle.fingerprint,
            parameters = handle.parameter_count,
            "registered workflow metadata"
        );
        entries.insert(handle.display_name.clone(), handle.clone());
        Ok(handle)
    }

    pub fn lookup(&self, display_name: &str) -> Option<RegistrationHandle> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(display_name)
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Registers `metadata` with the process-wide registry.
pub fn register(metadata: &WorkflowMetadata) -> Result<RegistrationHandle, Vec<StructuredIssue>> {
    PlatformRegistry::global().register(metadata)
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
