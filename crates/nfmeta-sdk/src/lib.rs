pub mod args;
pub mod documents;
pub mod model;
pub mod parse;
pub mod paths;
pub mod preview;
pub mod registration;
pub mod validate;

pub use args::{resolve_arguments, ArgumentSource, ResolvedArgument, ResolvedArguments};
pub use documents::{export_document_json, ParamTypeEntry, ParameterEntry, WorkflowMetadataDocument};
pub use model::{
    Author, ParamType, ParamValue, ParamValueError, ParameterDescriptor, ParameterRegistry,
    ParameterRegistryBuilder, PathParamKind, RuntimeResources, ScalarKind, Section,
    WorkflowMetadata,
};
pub use parse::{
    parse_metadata_document, parse_metadata_document_with_options, parse_value, DocumentFormat,
    ParseDocumentOptions,
};
pub use paths::{check_path_literal, is_remote_path, is_valid_flag_name, PathLiteralError};
pub use preview::render_form_text;
pub use registration::{register, PlatformRegistry, RegistrationHandle};
pub use validate::{validate_parameter_registry, validate_parameters, validate_workflow_metadata};
