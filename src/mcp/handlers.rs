use anyhow::{anyhow, Result};
use log::{debug, info};
use serde_json::{json, Value};

use crate::guide::SLIDEV_USAGE_GUIDE;
use crate::protocol::mcp::ToolResponse;
use crate::slides::generator::{self, DeckSpec, DeckStyle};
use crate::slides::{template, theme, CreateOutcome};
use crate::toolchain::{fetch_url, ExecOutcome};

use super::server::SlidevMcpServer;

/// Helper struct for extracting common tool arguments.
struct ToolArgs;

impl ToolArgs {
    fn require_str(args: &Value, key: &str) -> Result<String> {
        let Some(value) = args[key].as_str() else {
            return Err(anyhow!("Missing {}", key));
        };
        Ok(value.to_string())
    }

    fn optional_str(args: &Value, key: &str, default: &str) -> String {
        args[key].as_str().unwrap_or(default).to_string()
    }

    /// Slide indices arrive as JSON numbers; negative values are invalid
    /// input, not an offset convention.
    fn require_index(args: &Value) -> Result<usize> {
        let Some(index) = args["index"].as_i64() else {
            return Err(anyhow!("Missing index"));
        };
        if index < 0 {
            return Err(anyhow!("Invalid page index: {}", index));
        }
        Ok(index as usize)
    }
}

/// Dispatch a named tool call. Every failure, from a missing argument to an
/// I/O error, comes back inside the envelope; nothing propagates past here.
pub async fn handle_tool_call(
    server: &mut SlidevMcpServer,
    tool_name: &str,
    args: Value,
) -> ToolResponse {
    debug!("Tool call: {} {}", tool_name, args);

    let result = match tool_name {
        "create_slidev" => handle_create(server, &args),
        "load_slidev" => handle_load(server, &args),
        "make_cover" => handle_make_cover(server, &args),
        "add_page" => handle_add_page(server, &args),
        "set_page" => handle_set_page(server, &args),
        "get_page" => handle_get_page(server, &args),
        "get_all_slides" => handle_get_all_slides(server),
        "create_bulk_slides" => handle_create_bulk_slides(server, &args),
        "apply_theme" => handle_apply_theme(server, &args),
        "review_slides" => handle_review_slides(server),
        "check_environment" => handle_check_environment(server).await,
        "install_slidev" => handle_install_slidev(server).await,
        "start_slidev" => handle_start_slidev(server),
        "export_slidev" => handle_export_slidev(server, &args).await,
        "websearch" => handle_websearch(server, &args).await,
        "get_slidev_usage" => Ok(ToolResponse::ok_with(
            "Slidev usage guide",
            SLIDEV_USAGE_GUIDE,
        )),
        _ => Err(anyhow!("Unknown tool: {}", tool_name)),
    };

    result.unwrap_or_else(|e| ToolResponse::err(e.to_string()))
}

fn handle_create(server: &mut SlidevMcpServer, args: &Value) -> Result<ToolResponse> {
    let path = ToolArgs::require_str(args, "path")?;
    let title = ToolArgs::require_str(args, "title")?;
    let author = ToolArgs::require_str(args, "author")?;

    let root = std::path::PathBuf::from(&path);
    match server.store.create(&root, &title, &author) {
        Ok(CreateOutcome::Created) => {
            info!("Created Slidev project at {}", path);
            Ok(ToolResponse::ok_with(
                format!("Slidev project created and loaded at {}", path),
                path,
            ))
        }
        Ok(CreateOutcome::AlreadyExisted) => Ok(ToolResponse::ok_with(
            format!("Project already exists at {}, loaded its slides", path),
            server.store.active().map(|d| d.slide_texts()).unwrap_or_default(),
        )),
        Err(e) => Ok(ToolResponse::err(format!(
            "Failed to create Slidev project at {}: {}",
            path, e
        ))),
    }
}

fn handle_load(server: &mut SlidevMcpServer, args: &Value) -> Result<ToolResponse> {
    let path = ToolArgs::require_str(args, "path")?;
    let root = std::path::PathBuf::from(&path);

    match server.store.load(&root) {
        Ok(()) => Ok(ToolResponse::ok_with(
            format!("Slidev project loaded from {}", path),
            server
                .store
                .active()
                .map(|d| d.slide_texts())
                .unwrap_or_default(),
        )),
        Err(e) => Ok(ToolResponse::err(format!(
            "Failed to load Slidev project from {}: {}",
            path, e
        ))),
    }
}

fn handle_make_cover(server: &mut SlidevMcpServer, args: &Value) -> Result<ToolResponse> {
    let title = ToolArgs::require_str(args, "title")?;
    let subtitle = ToolArgs::optional_str(args, "subtitle", "");
    let author = ToolArgs::optional_str(args, "author", "");
    let background = ToolArgs::optional_str(args, "background", "");
    let custom_template = args["template"].as_str();

    if server.store.active().is_none() {
        return Err(anyhow!(
            "No active Slidev project. Please create or load one first."
        ));
    }

    let block = template::cover_block(&title, &subtitle, &author, &background, custom_template)?;
    server.store.set_cover(block)?;
    server.store.save()?;

    Ok(ToolResponse::ok_with("Cover page updated", 0))
}

fn handle_add_page(server: &mut SlidevMcpServer, args: &Value) -> Result<ToolResponse> {
    let content = ToolArgs::require_str(args, "content")?;
    let layout = ToolArgs::optional_str(args, "layout", "default");

    let index = server.store.push_page(template::page_block(&content, &layout))?;
    server.store.save()?;

    Ok(ToolResponse::ok_with(
        format!("Page added at index {}", index),
        index,
    ))
}

fn handle_set_page(server: &mut SlidevMcpServer, args: &Value) -> Result<ToolResponse> {
    let index = ToolArgs::require_index(args)?;
    let content = ToolArgs::require_str(args, "content")?;
    let layout = ToolArgs::optional_str(args, "layout", "default");

    server
        .store
        .set_page(index, template::page_block(&content, &layout))?;
    server.store.save()?;

    Ok(ToolResponse::ok_with(
        format!("Page {} updated", index),
        index,
    ))
}

fn handle_get_page(server: &SlidevMcpServer, args: &Value) -> Result<ToolResponse> {
    let index = ToolArgs::require_index(args)?;
    let text = server.store.page(index)?;
    Ok(ToolResponse::ok_with(
        format!("Content of page {}", index),
        text,
    ))
}

fn handle_get_all_slides(server: &SlidevMcpServer) -> Result<ToolResponse> {
    let Some(doc) = server.store.active() else {
        return Err(anyhow!(
            "No active Slidev project. Please create or load one first."
        ));
    };

    let slides: Vec<Value> = doc
        .slide_texts()
        .into_iter()
        .enumerate()
        .map(|(index, content)| json!({ "index": index, "content": content }))
        .collect();

    Ok(ToolResponse::ok_with(
        format!("Retrieved {} slides", slides.len()),
        slides,
    ))
}

fn handle_create_bulk_slides(server: &mut SlidevMcpServer, args: &Value) -> Result<ToolResponse> {
    let topic = ToolArgs::require_str(args, "topic")?;
    let slide_count = args["slide_count"].as_u64().unwrap_or(10) as usize;
    let style = DeckStyle::parse(&ToolArgs::optional_str(args, "style", "detailed"));
    let spec = DeckSpec {
        topic: topic.clone(),
        slide_count,
        style,
        include_animations: args["include_animations"].as_bool().unwrap_or(true),
        include_code: args["include_code"].as_bool().unwrap_or(false),
        include_images: args["include_images"].as_bool().unwrap_or(true),
    };

    if server.store.active().is_none() {
        return Err(anyhow!(
            "No active Slidev project. Please create or load one first."
        ));
    }

    let cover = template::cover_block(
        &topic,
        "A Comprehensive Overview",
        "",
        generator::COVER_BACKGROUND,
        None,
    )?;
    let mut pages = vec![cover];
    for slide in generator::generate_deck(&spec) {
        pages.push(template::page_block(&slide.content, slide.layout));
    }

    let count = pages.len();
    server.store.replace_pages(pages)?;
    server.store.save()?;
    info!("Generated {} slides for topic '{}'", count, topic);

    Ok(ToolResponse::ok_with(
        format!("Generated {} slides for topic: {}", count, topic),
        count,
    ))
}

fn handle_apply_theme(server: &mut SlidevMcpServer, args: &Value) -> Result<ToolResponse> {
    let theme_name = ToolArgs::require_str(args, "theme_name")?;

    let config = if theme_name == "custom" {
        let custom = args
            .get("custom_theme")
            .ok_or_else(|| anyhow!("Missing custom_theme for the custom theme"))?;
        serde_json::from_value::<theme::ThemeConfig>(custom.clone())
            .map_err(|e| anyhow!("Invalid custom_theme: {}", e))?
    } else {
        theme::preset(&theme_name).ok_or_else(|| anyhow!("Unknown theme: {}", theme_name))?
    };

    let Some(root) = server.active_project_path() else {
        return Err(anyhow!(
            "No active Slidev project. Please create or load one first."
        ));
    };
    let css_path = root.join("theme.css");
    std::fs::write(&css_path, theme::theme_css(&config))
        .map_err(|e| anyhow!("Failed to write {}: {}", css_path.display(), e))?;

    if !server.store.is_empty() {
        let cover = server.store.page(0)?.to_string();
        let updated = template::update_front_matter(&cover, "theme", &config.name);
        server.store.set_page(0, updated)?;
        server.store.save()?;
    }
    info!("Applied theme '{}'", config.name);

    Ok(ToolResponse::ok_with(
        format!("Applied theme: {}", config.name),
        config.name,
    ))
}

fn handle_review_slides(server: &SlidevMcpServer) -> Result<ToolResponse> {
    let Some(doc) = server.store.active() else {
        return Err(anyhow!(
            "No active Slidev project. Please create or load one first."
        ));
    };

    let texts = doc.slide_texts();
    let mut layouts: Vec<String> = Vec::new();
    let mut has_animations = false;
    let mut has_components = false;
    for slide in &texts {
        if let Some(layout) = layout_of(slide) {
            if !layouts.iter().any(|l| l.as_str() == layout) {
                layouts.push(layout.to_string());
            }
        }
        if ["v-click", "v-motion", "v-after"].iter().any(|m| slide.contains(m)) {
            has_animations = true;
        }
        if slide.contains('<') && slide.contains('>') {
            has_components = true;
        }
    }

    let mut suggestions: Vec<&str> = Vec::new();
    if texts.len() < 5 {
        suggestions.push("Consider adding more slides for a complete presentation");
    }
    if !has_animations {
        suggestions.push("Add animations (v-click, v-motion) to make slides more engaging");
    }
    if layouts.len() < 3 {
        suggestions.push("Use more varied layouts (two-cols, image-right, center) for visual interest");
    }
    if !has_components {
        suggestions.push("Consider using Slidev components like <Toc /> or <Tweet />");
    }

    Ok(ToolResponse::ok_with(
        format!("Reviewed {} slides", texts.len()),
        json!({
            "slide_count": texts.len(),
            "layouts": layouts,
            "has_animations": has_animations,
            "has_components": has_components,
            "suggestions": suggestions,
        }),
    ))
}

/// First `layout:` entry in a slide's front matter, if any.
fn layout_of(slide: &str) -> Option<&str> {
    slide
        .lines()
        .find_map(|line| line.trim().strip_prefix("layout:"))
        .map(str::trim)
}

async fn handle_check_environment(server: &SlidevMcpServer) -> Result<ToolResponse> {
    if !server.slidev.node_installed() {
        return Ok(ToolResponse::err(
            "Node.js is not installed. Please install Node.js first.",
        ));
    }

    match server.slidev.version().await {
        ExecOutcome::Completed(out) if out.success() => Ok(ToolResponse::ok_with(
            "Environment is ready",
            out.stdout.trim(),
        )),
        ExecOutcome::Completed(out) => Ok(ToolResponse::err(format!(
            "Slidev is not working: {}",
            diagnostic_text(&out.stderr, &out.stdout)
        ))),
        ExecOutcome::NotFound(_) => Ok(ToolResponse::err(
            "Slidev is not installed. Please install it first.",
        )),
        ExecOutcome::TimedOut(secs) => Ok(ToolResponse::err(format!(
            "slidev --version timed out after {}s",
            secs
        ))),
    }
}

async fn handle_install_slidev(server: &SlidevMcpServer) -> Result<ToolResponse> {
    if !server.slidev.node_installed() {
        return Ok(ToolResponse::err(
            "Node.js is not installed. Please install Node.js first.",
        ));
    }

    Ok(exec_envelope(
        server.slidev.install().await,
        "Slidev installed successfully",
    ))
}

fn handle_start_slidev(server: &SlidevMcpServer) -> Result<ToolResponse> {
    let Some(root) = server.active_project_path() else {
        return Err(anyhow!(
            "No active Slidev project. Please create or load one first."
        ));
    };

    // The dev server runs until interrupted, so hand back the invocation
    // instead of blocking the tool call on it.
    let command = server.slidev.preview_command(root);
    Ok(ToolResponse::ok_with(
        "Command to start the Slidev preview server",
        command,
    ))
}

async fn handle_export_slidev(server: &SlidevMcpServer, args: &Value) -> Result<ToolResponse> {
    let format = ToolArgs::optional_str(args, "format", "pdf");
    let Some(root) = server.active_project_path() else {
        return Err(anyhow!(
            "No active Slidev project. Please create or load one first."
        ));
    };
    let root = root.to_path_buf();

    Ok(exec_envelope(
        server.slidev.export(&root, &format).await,
        format!("Exported presentation as {}", format),
    ))
}

async fn handle_websearch(server: &SlidevMcpServer, args: &Value) -> Result<ToolResponse> {
    let url = ToolArgs::require_str(args, "url")?;

    match fetch_url(server.runner.as_ref(), &url).await {
        ExecOutcome::Completed(out) if out.success() && !out.stdout.trim().is_empty() => Ok(
            ToolResponse::ok_with("Successfully fetched webpage content", out.stdout),
        ),
        ExecOutcome::Completed(out) if out.success() => Ok(ToolResponse::err(format!(
            "Fetcher returned no content for {}",
            url
        ))),
        ExecOutcome::Completed(out) => Ok(ToolResponse::err(format!(
            "Failed to fetch {}: {}",
            url,
            diagnostic_text(&out.stderr, &out.stdout)
        ))),
        ExecOutcome::NotFound(program) => Ok(ToolResponse::err(format!(
            "Content fetcher '{}' is not installed",
            program
        ))),
        ExecOutcome::TimedOut(secs) => Ok(ToolResponse::err(format!(
            "Fetching {} timed out after {}s",
            url, secs
        ))),
    }
}

/// Map a subprocess outcome to the envelope, preferring captured stderr over
/// a generic message.
fn exec_envelope(outcome: ExecOutcome, success_message: impl Into<String>) -> ToolResponse {
    match outcome {
        ExecOutcome::Completed(out) if out.success() => {
            ToolResponse::ok_with(success_message, out.stdout)
        }
        ExecOutcome::Completed(out) => ToolResponse::err(format!(
            "Command failed: {}",
            diagnostic_text(&out.stderr, &out.stdout)
        )),
        ExecOutcome::NotFound(program) => {
            ToolResponse::err(format!("Command not found: {}", program))
        }
        ExecOutcome::TimedOut(secs) => {
            ToolResponse::err(format!("Command timed out after {}s", secs))
        }
    }
}

fn diagnostic_text<'a>(stderr: &'a str, stdout: &'a str) -> &'a str {
    if stderr.trim().is_empty() {
        stdout.trim()
    } else {
        stderr.trim()
    }
}
