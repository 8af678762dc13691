use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{json, Value};

use crate::mcp::{handlers::handle_tool_call, tools::get_tools};
use crate::protocol::mcp::ToolResponse;

use super::state::AppState;

pub async fn health(State(state): State<AppState>) -> Json<Value> {
    let server = state.server.lock().await;
    Json(json!({
        "status": "ok",
        "project": server
            .active_project_path()
            .map(|p| p.display().to_string()),
        "slides": server.store().len(),
    }))
}

pub async fn status(State(state): State<AppState>) -> Json<Value> {
    let server = state.server.lock().await;
    let project = server.active_project_path();

    Json(json!({
        "state": if project.is_some() { "loaded" } else { "idle" },
        "project": project.map(|p| p.display().to_string()),
        "slides": server.store().len(),
    }))
}

pub async fn list_tools() -> Json<Value> {
    Json(json!({ "tools": get_tools() }))
}

pub async fn shutdown(State(state): State<AppState>) -> Json<Value> {
    let _ = state.shutdown_tx.send(true);
    Json(json!({ "message": "shutting down" }))
}

/// Tool dispatch endpoint. The response body is always the uniform envelope;
/// HTTP status stays 200 even for `success=false` so callers read exactly one
/// contract.
pub async fn call_tool(
    State(state): State<AppState>,
    Path(tool_name): Path<String>,
    Json(args): Json<Value>,
) -> Json<ToolResponse> {
    let mut server = state.server.lock().await;
    Json(handle_tool_call(&mut server, &tool_name, args).await)
}
