use crate::model::{
    Author, ParamType, ParamValue, ParameterDescriptor, ParameterRegistry, PathParamKind,
    RuntimeResources, ScalarKind, WorkflowMetadata,
};
use crate::validate::validate_workflow_metadata;
use nfmeta_core::{fingerprint_hex, FieldPath, StructuredIssue};
use nfmeta_schema::versions::SCHEMA_WORKFLOW_0_0_1;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Serialized form of [`WorkflowMetadata`] handed to the hosting platform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WorkflowMetadataDocument {
    pub schema: String,
    pub display_name: String,
    pub author: Author,
    /// Array rather than map so display order survives serialization.
    pub parameters: Vec<ParameterEntry>,
    pub runtime_resources: RuntimeResources,
    pub log_dir: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParameterEntry {
    pub key: String,
    #[serde(rename = "type")]
    pub param_type: ParamTypeEntry,
    #[serde(default)]
    pub default: Option<Value>,
    #[serde(default)]
    pub section_title: Option<String>,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ParamTypeEntry {
    File { direction: PathParamKind },
    Directory { direction: PathParamKind },
    Scalar { scalar: ScalarKind },
}

impl From<ParamType> for ParamTypeEntry {
    fn from(param_type: ParamType) -> Self {
        match param_type {
            ParamType::File(direction) => Self::File { direction },
            ParamType::Directory(direction) => Self::Directory { direction },
            ParamType::Scalar(scalar) => Self::Scalar { scalar },
        }
    }
}

impl From<ParamTypeEntry> for ParamType {
    fn from(entry: ParamTypeEntry) -> Self {
        match entry {
            ParamTypeEntry::File { direction } => Self::File(direction),
            ParamTypeEntry::Directory { direction } => Self::Directory(direction),
            ParamTypeEntry::Scalar { scalar } => Self::Scalar(scalar),
        }
    }
}

impl From<&ParameterDescriptor> for ParameterEntry {
    fn from(descriptor: &ParameterDescriptor) -> Self {
        Self {
            key: descriptor.key.clone(),
            param_type: descriptor.param_type.into(),
            default: descriptor.default.as_ref().map(ParamValue::to_json),
            section_title: descriptor.section_title.clone(),
            description: descriptor.description.clone(),
        }
    }
}

impl WorkflowMetadata {
    pub fn to_document(&self) -> WorkflowMetadataDocument {
        WorkflowMetadataDocument {
            schema: SCHEMA_WORKFLOW_0_0_1.to_string(),
            display_name: self.display_name().to_string(),
            author: self.author().clone(),
            parameters: self.parameters().iter().map(ParameterEntry::from).collect(),
            runtime_resources: self.runtime_resources(),
            log_dir: self.log_dir().to_string(),
        }
    }

    pub fn to_value(&self) -> serde_json::Result<Value> {
        serde_json::to_value(self.to_document())
    }

    /// Content hash of the exported document; equal declarations share it.
    pub fn fingerprint(&self) -> serde_json::Result<String> {
        fingerprint_hex(&self.to_value()?)
    }
}

impl WorkflowMetadataDocument {
    /// Rebuilds the typed record, refusing documents with any error-level
    /// structural issue.
    pub fn into_metadata(self) -> Result<WorkflowMetadata, Vec<StructuredIssue>> {
        let mut issues = Vec::new();
        let mut builder = ParameterRegistry::builder();

        for (index, entry) in self.parameters.into_iter().enumerate() {
            let param_type = ParamType::from(entry.param_type);
            let mut descriptor = ParameterDescriptor::new(entry.key, param_type, entry.description);
            descriptor.section_title = entry.section_title;
            if let Some(raw) = entry.default.as_ref().filter(|value| !value.is_null()) {
                match ParamValue::from_json(param_type, raw) {
                    Ok(value) => descriptor.default = Some(value),
                    Err(error) => issues.push(
                        StructuredIssue::error(
                            "document_error",
                            FieldPath::root().key("parameters").index(index).key("default"),
                            format!("default for `{}` is invalid: {error}", descriptor.key),
                            "document.param.default_invalid",
                        )
                        .for_param(descriptor.key.as_str()),
                    ),
                }
            }
            builder = builder.param(descriptor);
        }

        let parameters = match builder.build() {
            Ok(parameters) => parameters,
            Err(registry_issues) => {
                issues.extend(registry_issues);
                StructuredIssue::sort_stable(&mut issues);
                return Err(issues);
            }
        };
        if !issues.is_empty() {
            StructuredIssue::sort_stable(&mut issues);
            return Err(issues);
        }

        let metadata = WorkflowMetadata::new(
            self.display_name,
            self.author,
            parameters,
            self.runtime_resources,
            self.log_dir,
        );
        let issues = validate_workflow_metadata(&metadata);
        if StructuredIssue::has_errors(&issues) {
            return Err(issues);
        }
        Ok(metadata)
    }
}

pub fn export_document_json(metadata: &WorkflowMetadata) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&metadata.to_document())
}

#[cfg(test)]
#[path = "workflow_test.rs"]
mod tests;
