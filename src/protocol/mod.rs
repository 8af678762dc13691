pub mod mcp;

pub use mcp::{ToolDefinition, ToolResponse};
