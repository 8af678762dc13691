use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Serialize, Deserialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

/// Uniform result envelope returned by every tool operation.
///
/// Callers must rely on `success` alone; `message` is human-readable and
/// `output` carries the operation payload (string, index, slide list, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<Value>,
}

impl ToolResponse {
    pub fn ok_with(message: impl Into<String>, output: impl Into<Value>) -> Self {
        Self {
            success: true,
            message: message.into(),
            output: Some(output.into()),
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            output: None,
        }
    }
}
