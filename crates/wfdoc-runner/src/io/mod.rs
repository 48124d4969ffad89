mod workspace;

pub use workspace::{validate_workspace, FileValidation, WorkspaceValidation};
