mod integral;
mod workflow;

pub use workflow::{CredentialRef, NodeCredentials, WorkflowDocument, WorkflowNode};
