//! Slide block generation: front matter assembly and cover templating.

use anyhow::{anyhow, Result};
use chrono::Local;

/// Named fields available to cover templates. Anything else in a `{...}`
/// placeholder is a caller error.
pub struct CoverFields<'a> {
    pub title: &'a str,
    pub subtitle: &'a str,
    pub author: &'a str,
    pub date: &'a str,
}

const ALLOWED_PLACEHOLDERS: &[&str] = &["title", "subtitle", "author", "date"];

/// Today as `YYYY-MM-DD`, the default for the cover `date` field.
pub fn current_date() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}

/// Substitute `{title}`, `{subtitle}`, `{author}` and `{date}` into a
/// caller-supplied template. A placeholder outside that set is rejected
/// rather than silently passed through.
pub fn render_template(template: &str, fields: &CoverFields<'_>) -> Result<String> {
    let mut out = String::with_capacity(template.len());
    let mut chars = template.char_indices();

    while let Some((start, c)) = chars.next() {
        if c != '{' {
            out.push(c);
            continue;
        }
        let Some(end) = template[start + 1..].find('}') else {
            return Err(anyhow!("Unclosed placeholder in template"));
        };
        let name = &template[start + 1..start + 1 + end];
        let value = match name {
            "title" => fields.title,
            "subtitle" => fields.subtitle,
            "author" => fields.author,
            "date" => fields.date,
            other => {
                return Err(anyhow!(
                    "Unknown placeholder '{{{}}}' in template; allowed: {}",
                    other,
                    ALLOWED_PLACEHOLDERS.join(", ")
                ))
            }
        };
        out.push_str(value);
        // Skip past the consumed placeholder body and its closing brace.
        for _ in 0..end + 1 {
            chars.next();
        }
    }

    Ok(out)
}

/// Build the cover slide: cover front matter, blank line, then either the
/// rendered caller template or the default title/subtitle/author body.
pub fn cover_block(
    title: &str,
    subtitle: &str,
    author: &str,
    background: &str,
    custom_template: Option<&str>,
) -> Result<String> {
    let date = current_date();
    let fields = CoverFields {
        title,
        subtitle,
        author,
        date: &date,
    };

    let body = match custom_template {
        Some(t) if !t.trim().is_empty() => render_template(t, &fields)?,
        _ => format!(
            "# {}\n## {}\n### Presented By {} at {}",
            title, subtitle, author, date
        ),
    };

    let mut front = vec![
        "---".to_string(),
        "theme: default".to_string(),
        "layout: cover".to_string(),
        "transition: slide-left".to_string(),
    ];
    if !background.is_empty() {
        front.push(format!("background: {}", background));
    }
    front.push("---".to_string());

    Ok(format!("{}\n\n{}", front.join("\n"), body))
}

/// Build an ordinary content slide for the given layout.
pub fn page_block(content: &str, layout: &str) -> String {
    format!(
        "---\nlayout: {}\ntransition: slide-left\n---\n\n{}",
        layout, content
    )
}

/// Set `key: value` in a slide's front matter, replacing an existing entry
/// or inserting before the closing fence. A slide without front matter gets
/// a new block prepended.
pub fn update_front_matter(slide: &str, key: &str, value: &str) -> String {
    let entry = format!("{}: {}", key, value);
    let mut lines: Vec<String> = slide.lines().map(str::to_string).collect();

    let opens = lines.first().map(|l| l.trim() == "---").unwrap_or(false);
    let close = if opens {
        lines
            .iter()
            .enumerate()
            .skip(1)
            .find(|(_, l)| l.trim() == "---")
            .map(|(i, _)| i)
    } else {
        None
    };

    match close {
        Some(close) => {
            let prefix = format!("{}:", key);
            if let Some(line) = lines[1..close]
                .iter_mut()
                .find(|l| l.trim_start().starts_with(&prefix))
            {
                *line = entry;
            } else {
                lines.insert(close, entry);
            }
            lines.join("\n")
        }
        None => format!("---\n{}\n---\n\n{}", entry, slide),
    }
}

/// Minimal starter document written by project creation: a single cover
/// slide with the supplied title and author filled in.
pub fn starter_document(title: &str, author: &str) -> String {
    format!(
        "---\ntheme: default\nlayout: cover\ntransition: slide-left\n---\n\n# {}\n## Subtitle\n\nPresented by {}\n",
        title, author
    )
}
