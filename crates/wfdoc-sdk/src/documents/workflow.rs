use super::integral;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

/// Typed view of a workflow export. Members the export format leaves open are
/// kept as raw JSON; unknown top-level keys land in `extensions`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowDocument {
    pub id: String,
    pub name: String,
    pub version_id: String,
    pub created_at: String,
    pub updated_at: String,
    pub active: bool,
    #[serde(deserialize_with = "integral::integer")]
    pub trigger_count: Number,
    pub nodes: Vec<WorkflowNode>,
    pub settings: Map<String, Value>,
    pub connections: Map<String, Value>,
    pub static_data: Map<String, Value>,
    pub meta: Option<Map<String, Value>>,
    pub pin_data: Option<Map<String, Value>>,
    #[serde(flatten)]
    pub extensions: Map<String, Value>,
}

impl WorkflowDocument {
    pub fn node_by_name(&self, name: &str) -> Option<&WorkflowNode> {
        self.nodes.iter().find(|node| node.name == name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowNode {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub node_type: String,
    pub type_version: Number,
    #[serde(deserialize_with = "integral::integer_pair")]
    pub position: [Number; 2],
    pub parameters: Map<String, Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credentials: Option<NodeCredentials>,
    #[serde(flatten)]
    pub extensions: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeCredentials {
    #[serde(
        rename = "googleSheetsOAuth2Api",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub google_sheets_oauth2_api: Option<CredentialRef>,
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

/// Reference to a credential stored outside the export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CredentialRef {
    pub id: String,
    pub name: String,
    #[serde(flatten)]
    pub extensions: Map<String, Value>,
}
