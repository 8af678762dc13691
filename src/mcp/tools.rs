use crate::protocol::mcp::ToolDefinition;
use serde_json::json;

pub fn get_tools() -> Vec<ToolDefinition> {
    vec![
        // 1-2. Project lifecycle - one of these must come first.
        ToolDefinition {
            name: "create_slidev".to_string(),
            description: "Create a new Slidev project (or load it if one already exists at the path)"
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "path": { "type": "string", "description": "Project directory to create" },
                    "title": { "type": "string", "description": "Presentation title" },
                    "author": { "type": "string", "description": "Presentation author" }
                },
                "required": ["path", "title", "author"]
            }),
        },
        ToolDefinition {
            name: "load_slidev".to_string(),
            description: "Load an existing Slidev project from a directory".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "path": { "type": "string", "description": "Project directory containing slides.md" }
                },
                "required": ["path"]
            }),
        },
        // 3-7. Slide editing - the core workflow.
        ToolDefinition {
            name: "make_cover".to_string(),
            description: "Create or replace the cover page (slide 0)".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "title": { "type": "string", "description": "Cover title" },
                    "subtitle": { "type": "string", "description": "Cover subtitle" },
                    "author": { "type": "string", "description": "Author name" },
                    "background": { "type": "string", "description": "Background image URL" },
                    "template": {
                        "type": "string",
                        "description": "Optional body template; may reference {title}, {subtitle}, {author}, {date}"
                    }
                },
                "required": ["title"]
            }),
        },
        ToolDefinition {
            name: "add_page".to_string(),
            description: "Append a new slide, returning its index".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "content": { "type": "string", "description": "Markdown body of the slide" },
                    "layout": { "type": "string", "description": "Slidev layout name (default: \"default\")" }
                },
                "required": ["content"]
            }),
        },
        ToolDefinition {
            name: "set_page".to_string(),
            description: "Replace the slide at an index".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "index": { "type": "number", "description": "Slide index (0-based)" },
                    "content": { "type": "string", "description": "Markdown body of the slide" },
                    "layout": { "type": "string", "description": "Slidev layout name (default: \"default\")" }
                },
                "required": ["index", "content"]
            }),
        },
        ToolDefinition {
            name: "get_page".to_string(),
            description: "Get the raw text of the slide at an index".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "index": { "type": "number", "description": "Slide index (0-based)" }
                },
                "required": ["index"]
            }),
        },
        ToolDefinition {
            name: "get_all_slides".to_string(),
            description: "List every slide in the active project with its index".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {}
            }),
        },
        // 8-10. Whole-deck operations.
        ToolDefinition {
            name: "create_bulk_slides".to_string(),
            description: "Generate a complete deck for a topic, replacing the current slides"
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "topic": { "type": "string", "description": "Topic the deck is about" },
                    "slide_count": { "type": "number", "description": "Total slides including cover (default: 10)" },
                    "style": {
                        "type": "string",
                        "enum": ["minimal", "detailed", "visual", "academic"],
                        "description": "Presentation style (default: \"detailed\")"
                    },
                    "include_animations": { "type": "boolean", "description": "Wrap bullet lists in v-clicks (default: true)" },
                    "include_code": { "type": "boolean", "description": "Add code example slides (default: false)" },
                    "include_images": { "type": "boolean", "description": "Add image layouts in visual style (default: true)" }
                },
                "required": ["topic"]
            }),
        },
        ToolDefinition {
            name: "apply_theme".to_string(),
            description: "Apply a visual theme: writes theme.css and sets the cover's theme key"
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "theme_name": {
                        "type": "string",
                        "enum": ["corporate", "creative", "minimal", "dark", "custom"],
                        "description": "Built-in preset, or \"custom\" with custom_theme"
                    },
                    "custom_theme": {
                        "type": "object",
                        "description": "Custom theme settings (name, primary_color, secondary_color, background_color, font_family, font_size, custom_css)"
                    }
                },
                "required": ["theme_name"]
            }),
        },
        ToolDefinition {
            name: "review_slides".to_string(),
            description: "Analyze the deck and suggest improvements".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {}
            }),
        },
        // 11-14. External toolchain.
        ToolDefinition {
            name: "check_environment".to_string(),
            description: "Check that Node.js and the slidev CLI are installed".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {}
            }),
        },
        ToolDefinition {
            name: "install_slidev".to_string(),
            description: "Install the slidev CLI globally via npm".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {}
            }),
        },
        ToolDefinition {
            name: "start_slidev".to_string(),
            description: "Get the shell command that starts the interactive preview server"
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {}
            }),
        },
        ToolDefinition {
            name: "export_slidev".to_string(),
            description: "Export the presentation via the slidev CLI".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "format": { "type": "string", "description": "Export format (default: \"pdf\")" }
                }
            }),
        },
        // 15-16. Content sourcing.
        ToolDefinition {
            name: "websearch".to_string(),
            description: "Fetch a web page as markdown text for use as slide material".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "url": { "type": "string", "description": "URL to fetch" }
                },
                "required": ["url"]
            }),
        },
        ToolDefinition {
            name: "get_slidev_usage".to_string(),
            description: "Get the embedded guide to Slidev layouts, components and transitions"
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {}
            }),
        },
    ]
}
