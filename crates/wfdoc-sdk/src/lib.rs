pub mod documents;
pub mod parse;
pub mod validate;

pub use documents::{CredentialRef, NodeCredentials, WorkflowDocument, WorkflowNode};
pub use parse::{
    parse_document, parse_document_value, parse_document_with_options, workflow_from_value,
    DocumentFormat, ParseDocumentOptions,
};
pub use validate::{
    validate_document_text, validate_with_engine, validate_workflow_semantics,
    validate_workflow_value, ValidateOptions, ValidationEngine, ValidationReport,
};
