mod metadata;
mod registry;

pub use metadata::validate_workflow_metadata;
pub use registry::{validate_parameter_registry, validate_parameters};
