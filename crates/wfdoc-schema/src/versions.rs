pub const SCHEMA_WORKFLOW_EXPORT_1: &str = "wfdoc-workflow-export/1";
