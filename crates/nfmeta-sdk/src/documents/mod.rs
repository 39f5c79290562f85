mod workflow;

pub use workflow::{export_document_json, ParamTypeEntry, ParameterEntry, WorkflowMetadataDocument};
