//! Bulk deck generation: turns a topic and style into a complete set of
//! slide bodies for `create_bulk_slides`. The texts are scaffolding for the
//! calling agent to refine with `set_page`, not finished prose.

/// Presentation style, steering which slide forms appear.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeckStyle {
    Minimal,
    Detailed,
    Visual,
    Academic,
}

impl DeckStyle {
    /// Unrecognized names fall back to the detailed style.
    pub fn parse(name: &str) -> Self {
        match name {
            "minimal" => Self::Minimal,
            "visual" => Self::Visual,
            "academic" => Self::Academic,
            _ => Self::Detailed,
        }
    }
}

pub struct DeckSpec {
    pub topic: String,
    pub slide_count: usize,
    pub style: DeckStyle,
    pub include_animations: bool,
    pub include_code: bool,
    pub include_images: bool,
}

/// One generated slide body plus the layout it should be wrapped with.
pub struct GeneratedSlide {
    pub layout: &'static str,
    pub content: String,
}

pub const COVER_BACKGROUND: &str = "https://source.unsplash.com/collection/94734566/1920x1080";

/// Cover, table of contents, introduction, summary and thank-you slides are
/// always present; the requested count buys content slides in between.
const RESERVED_SLIDES: usize = 5;

/// Generate every slide after the cover. The caller builds the cover itself
/// (it carries front matter the cover template already owns) and prepends it,
/// so the full deck has `max(slide_count, RESERVED_SLIDES + 1)` slides.
pub fn generate_deck(spec: &DeckSpec) -> Vec<GeneratedSlide> {
    let mut slides = vec![toc_slide(), intro_slide(spec)];

    let content_count = spec.slide_count.saturating_sub(RESERVED_SLIDES).max(1);
    let kinds = content_kinds(spec);
    for i in 0..content_count {
        slides.push(content_slide(spec, kinds[i % kinds.len()]));
    }

    slides.push(summary_slide(spec));
    slides.push(thank_you_slide());
    slides
}

#[derive(Debug, Clone, Copy)]
enum ContentKind {
    Bullets,
    TwoCols,
    ImageText,
    Quote,
    Code,
}

fn content_kinds(spec: &DeckSpec) -> Vec<ContentKind> {
    match spec.style {
        DeckStyle::Minimal => vec![ContentKind::Bullets, ContentKind::Quote],
        DeckStyle::Visual => {
            let mut kinds = vec![ContentKind::Bullets, ContentKind::TwoCols];
            if spec.include_images {
                kinds.push(ContentKind::ImageText);
            }
            kinds
        }
        DeckStyle::Detailed | DeckStyle::Academic => {
            let mut kinds = vec![
                ContentKind::Bullets,
                ContentKind::TwoCols,
                ContentKind::Quote,
            ];
            if spec.include_code {
                kinds.push(ContentKind::Code);
            }
            kinds
        }
    }
}

fn bullet_list(points: &[String], animated: bool) -> String {
    let list = points
        .iter()
        .map(|p| format!("- {}", p))
        .collect::<Vec<_>>()
        .join("\n");
    if animated {
        format!("<v-clicks>\n\n{}\n\n</v-clicks>", list)
    } else {
        list
    }
}

fn toc_slide() -> GeneratedSlide {
    GeneratedSlide {
        layout: "default",
        content: "# Table of Contents\n\n<Toc />".to_string(),
    }
}

fn intro_slide(spec: &DeckSpec) -> GeneratedSlide {
    let mut points = vec![
        format!("Understanding the fundamentals of {}", spec.topic),
        "Key concepts and terminology".to_string(),
        "Current state and applications".to_string(),
    ];
    match spec.style {
        DeckStyle::Detailed | DeckStyle::Academic => {
            points.push("Historical context and evolution".to_string());
            points.push("Theoretical foundations".to_string());
        }
        DeckStyle::Visual => {
            points.push("Visual representations and diagrams".to_string());
        }
        DeckStyle::Minimal => {}
    }

    GeneratedSlide {
        layout: "default",
        content: format!(
            "# Introduction\n\n{}",
            bullet_list(&points, spec.include_animations)
        ),
    }
}

fn content_slide(spec: &DeckSpec, kind: ContentKind) -> GeneratedSlide {
    match kind {
        ContentKind::Bullets => GeneratedSlide {
            layout: "default",
            content: format!(
                "# {} - Key Points\n\n{}",
                spec.topic,
                bullet_list(
                    &[
                        "First important aspect to consider".to_string(),
                        "Secondary consideration with details".to_string(),
                        "Third point with practical implications".to_string(),
                    ],
                    spec.include_animations
                )
            ),
        },
        ContentKind::TwoCols => GeneratedSlide {
            layout: "two-cols",
            content: format!(
                "# Comparison\n\n### Traditional approach\n- Manual processes\n- Limited scalability\n\n::right::\n\n### {} today\n- Automated workflows\n- Reliable results",
                spec.topic
            ),
        },
        ContentKind::ImageText => GeneratedSlide {
            layout: "image-right",
            content: "# Visual Representation\n\nThis diagram illustrates the key concepts and how they connect into a cohesive system.".to_string(),
        },
        ContentKind::Quote => GeneratedSlide {
            layout: "quote",
            content: format!(
                "> \"Every advance in {} began as an idea someone refused to abandon.\"",
                spec.topic
            ),
        },
        ContentKind::Code => GeneratedSlide {
            layout: "default",
            content: format!(
                "# Implementation Example\n\nA minimal sketch of the ideas behind {}:\n\n```ts\ninterface Solution {{\n  process(input: Data): Result;\n}}\n```",
                spec.topic
            ),
        },
    }
}

fn summary_slide(spec: &DeckSpec) -> GeneratedSlide {
    GeneratedSlide {
        layout: "default",
        content: format!(
            "# Key Takeaways\n\n{}",
            bullet_list(
                &[
                    format!("Deep insights into {}", spec.topic),
                    "Practical approaches and methods".to_string(),
                    "Next steps and recommendations".to_string(),
                ],
                spec.include_animations
            )
        ),
    }
}

fn thank_you_slide() -> GeneratedSlide {
    GeneratedSlide {
        layout: "center",
        content: "# Thank You!\n\nQuestions?".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(slide_count: usize, style: DeckStyle) -> DeckSpec {
        DeckSpec {
            topic: "Rust".to_string(),
            slide_count,
            style,
            include_animations: true,
            include_code: false,
            include_images: true,
        }
    }

    #[test]
    fn deck_plus_cover_matches_requested_count() {
        // 10 requested = cover + 9 generated here.
        assert_eq!(generate_deck(&spec(10, DeckStyle::Detailed)).len(), 9);
    }

    #[test]
    fn tiny_requests_still_get_a_complete_deck() {
        // Below the reserved minimum: toc, intro, one content slide,
        // summary, thank-you.
        assert_eq!(generate_deck(&spec(3, DeckStyle::Minimal)).len(), 5);
    }

    #[test]
    fn minimal_style_sticks_to_plain_layouts() {
        for slide in generate_deck(&spec(12, DeckStyle::Minimal)) {
            assert!(
                ["default", "quote", "center"].contains(&slide.layout),
                "{}",
                slide.layout
            );
        }
    }

    #[test]
    fn animations_flag_controls_v_clicks() {
        let mut with = spec(8, DeckStyle::Detailed);
        let deck = generate_deck(&with);
        assert!(deck.iter().any(|s| s.content.contains("<v-clicks>")));

        with.include_animations = false;
        let deck = generate_deck(&with);
        assert!(!deck.iter().any(|s| s.content.contains("<v-clicks>")));
    }

    #[test]
    fn code_slides_only_appear_when_asked_for() {
        let mut s = spec(20, DeckStyle::Academic);
        assert!(!generate_deck(&s).iter().any(|sl| sl.content.contains("```")));
        s.include_code = true;
        assert!(generate_deck(&s).iter().any(|sl| sl.content.contains("```")));
    }

    #[test]
    fn topic_shows_up_in_the_generated_content() {
        let deck = generate_deck(&spec(10, DeckStyle::Visual));
        assert!(deck.iter().any(|s| s.content.contains("Rust")));
    }
}
