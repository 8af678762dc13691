//! End-to-end façade scenario: build a small deck through the tool surface
//! and verify what lands on disk.

use serde_json::{json, Value};
use tempfile::TempDir;

use slidev_mcp::mcp::handlers::handle_tool_call;
use slidev_mcp::protocol::ToolResponse;
use slidev_mcp::SlidevMcpServer;

async fn call(server: &mut SlidevMcpServer, tool: &str, args: Value) -> ToolResponse {
    handle_tool_call(server, tool, args).await
}

#[tokio::test]
async fn build_a_deck_from_scratch() {
    let dir = TempDir::new().unwrap();
    let root = dir.path().join("talk");
    let mut server = SlidevMcpServer::new();

    // Create: one starter slide from the template.
    let resp = call(
        &mut server,
        "create_slidev",
        json!({ "path": root.to_string_lossy(), "title": "Intro", "author": "Ada" }),
    )
    .await;
    assert!(resp.success, "{}", resp.message);

    let resp = call(&mut server, "get_all_slides", json!({})).await;
    assert_eq!(resp.output.unwrap().as_array().unwrap().len(), 1);

    // AddPage returns the previous length as the new index.
    let resp = call(
        &mut server,
        "add_page",
        json!({ "content": "Hello world", "layout": "default" }),
    )
    .await;
    assert!(resp.success);
    assert_eq!(resp.output, Some(json!(1)));

    // SetPage replaces in place.
    let resp = call(
        &mut server,
        "set_page",
        json!({ "index": 1, "content": "Goodbye", "layout": "center" }),
    )
    .await;
    assert!(resp.success);

    let resp = call(&mut server, "get_page", json!({ "index": 1 })).await;
    let page = resp.output.unwrap();
    let page = page.as_str().unwrap();
    assert!(page.contains("layout: center"));
    assert!(page.contains("Goodbye"));

    // Cover rewrite touches index 0 only.
    let resp = call(
        &mut server,
        "make_cover",
        json!({ "title": "Intro", "subtitle": "A Talk", "author": "Ada" }),
    )
    .await;
    assert!(resp.success);
    assert_eq!(resp.output, Some(json!(0)));

    // Reload from disk: the persisted file parses back to the same deck.
    let mut fresh = SlidevMcpServer::new();
    let resp = call(
        &mut fresh,
        "load_slidev",
        json!({ "path": root.to_string_lossy() }),
    )
    .await;
    assert!(resp.success, "{}", resp.message);
    let slides = resp.output.unwrap();
    let slides = slides.as_array().unwrap();
    assert_eq!(slides.len(), 2);
    assert!(slides[0].as_str().unwrap().contains("Intro"));
    assert!(slides[1].as_str().unwrap().contains("Goodbye"));
}

#[tokio::test]
async fn create_never_overwrites_an_existing_deck() {
    let dir = TempDir::new().unwrap();
    let root = dir.path().join("talk");
    std::fs::create_dir_all(&root).unwrap();
    std::fs::write(root.join("slides.md"), "# Precious content").unwrap();

    let mut server = SlidevMcpServer::new();
    let resp = call(
        &mut server,
        "create_slidev",
        json!({ "path": root.to_string_lossy(), "title": "Clobber", "author": "X" }),
    )
    .await;
    assert!(resp.success);
    assert_eq!(resp.output, Some(json!(["# Precious content"])));

    let on_disk = std::fs::read_to_string(root.join("slides.md")).unwrap();
    assert_eq!(on_disk, "# Precious content");
}
