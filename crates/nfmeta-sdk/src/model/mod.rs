mod metadata;
mod param;
mod registry;

pub use metadata::{Author, RuntimeResources, WorkflowMetadata};
pub use param::{
    ParamType, ParamValue, ParamValueError, ParameterDescriptor, PathParamKind, ScalarKind,
};
pub use registry::{ParameterRegistry, ParameterRegistryBuilder, Section};
