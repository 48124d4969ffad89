use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmbeddedSchema {
    pub id: &'static str,
    pub json: &'static str,
}

impl EmbeddedSchema {
    pub fn to_value(&self) -> Result<Value, serde_json::Error> {
        serde_json::from_str(self.json)
    }
}
