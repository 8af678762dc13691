//! Theme presets and CSS generation for `apply_theme`.
//!
//! A theme is a small set of CSS variables written to the project's
//! `theme.css`, plus a `theme:` entry in the cover slide's front matter.

use serde::Deserialize;

/// Theme settings. Unset fields fall back to defaults when rendered.
#[derive(Debug, Clone, Deserialize)]
pub struct ThemeConfig {
    pub name: String,
    #[serde(default)]
    pub primary_color: Option<String>,
    #[serde(default)]
    pub secondary_color: Option<String>,
    #[serde(default)]
    pub background_color: Option<String>,
    #[serde(default)]
    pub font_family: Option<String>,
    #[serde(default)]
    pub font_size: Option<String>,
    #[serde(default)]
    pub custom_css: Option<String>,
}

/// Look up a built-in preset by name.
pub fn preset(name: &str) -> Option<ThemeConfig> {
    let (primary, secondary, background, font) = match name {
        "corporate" => ("#1E40AF", "#3B82F6", "#FFFFFF", "Inter, sans-serif"),
        "creative" => ("#7C3AED", "#EC4899", "#FDF4FF", "Poppins, sans-serif"),
        "minimal" => ("#18181B", "#71717A", "#FAFAFA", "Helvetica Neue, sans-serif"),
        "dark" => ("#10B981", "#34D399", "#111827", "JetBrains Mono, monospace"),
        _ => return None,
    };
    Some(ThemeConfig {
        name: name.to_string(),
        primary_color: Some(primary.to_string()),
        secondary_color: Some(secondary.to_string()),
        background_color: Some(background.to_string()),
        font_family: Some(font.to_string()),
        font_size: None,
        custom_css: None,
    })
}

/// Render the theme as the contents of a `theme.css` file.
pub fn theme_css(config: &ThemeConfig) -> String {
    format!(
        ":root {{\n  --slidev-theme-primary: {};\n  --slidev-theme-secondary: {};\n  --slidev-theme-background: {};\n  --slidev-theme-font: {};\n  --slidev-theme-font-size: {};\n}}\n{}",
        config.primary_color.as_deref().unwrap_or("#3B82F6"),
        config.secondary_color.as_deref().unwrap_or("#60A5FA"),
        config.background_color.as_deref().unwrap_or("#FFFFFF"),
        config.font_family.as_deref().unwrap_or("Inter, sans-serif"),
        config.font_size.as_deref().unwrap_or("16px"),
        config
            .custom_css
            .as_deref()
            .map(|css| format!("\n{}\n", css))
            .unwrap_or_default(),
    )
}
