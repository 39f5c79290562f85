use super::registry::ParameterRegistry;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Author {
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    /// Profile URL shown next to the author name.
    #[serde(default)]
    pub github: Option<String>,
}

impl Author {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: None,
            github: None,
        }
    }
}

/// Default compute request for a run. Memory and storage are in GiB.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuntimeResources {
    pub cpus: u32,
    pub memory_gib: u32,
    pub storage_gib: u32,
}

/// Top-level declaration of a workflow: display identity, default resources,
/// log location and its parameter registry.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowMetadata {
    display_name: String,
    author: Author,
    parameters: ParameterRegistry,
    runtime_resources: RuntimeResources,
    log_dir: String,
}

impl WorkflowMetadata {
    pub fn new(
        display_name: impl Into<String>,
        author: Author,
        parameters: ParameterRegistry,
        runtime_resources: RuntimeResources,
        log_dir: impl Into<String>,
    ) -> Self {
        Self {
            display_name: display_name.into(),
            author,
            parameters,
            runtime_resources,
            log_dir: log_dir.into(),
        }
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn author(&self) -> &Author {
        &self.author
    }

    pub fn parameters(&self) -> &ParameterRegistry {
        &self.parameters
    }

    pub fn runtime_resources(&self) -> RuntimeResources {
        self.runtime_resources
    }

    pub fn log_dir(&self) -> &str {
        &self.log_dir
    }
}
