//! Front-matter-delimited slide splitting.
//!
//! A `slides.md` file is a sequence of blocks, each optionally opening with a
//! YAML front matter section fenced by `---` lines. The same `---` token that
//! fences front matter also separates slides, so the scanner has to track
//! whether it is currently inside a front matter block to tell the two apart.

/// One slide, stored as raw text. The text is trimmed and never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    pub raw_text: String,
}

impl Slide {
    fn new(raw_text: impl Into<String>) -> Self {
        Self {
            raw_text: raw_text.into(),
        }
    }
}

const DELIMITER: &str = "---";

/// Split raw document text into slides.
///
/// A `---` line outside front matter either opens the first slide's front
/// matter (empty buffer) or starts the next slide (non-empty buffer); inside
/// front matter it closes the fence. Everything else accumulates verbatim.
/// Slides that trim to nothing are dropped, so a run of consecutive
/// delimiters never yields an empty slide, and input with no delimiters at
/// all yields exactly one slide.
pub fn parse_slides(content: &str) -> Vec<Slide> {
    fn flush(buf: &mut Vec<&str>, out: &mut Vec<Slide>) {
        let text = buf.join("\n");
        let trimmed = text.trim();
        if !trimmed.is_empty() {
            out.push(Slide::new(trimmed));
        }
        buf.clear();
    }

    let mut slides: Vec<Slide> = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    let mut in_front_matter = false;

    for line in content.lines() {
        if line.trim() == DELIMITER && !in_front_matter {
            if current.is_empty() {
                in_front_matter = true;
                current.push(line);
            } else {
                flush(&mut current, &mut slides);
                current.push(line);
                in_front_matter = true;
            }
        } else if line.trim() == DELIMITER && in_front_matter {
            current.push(line);
            in_front_matter = false;
        } else {
            current.push(line);
        }
    }

    flush(&mut current, &mut slides);
    slides
}

/// Flatten slides back to document text: trimmed slide texts joined by a
/// blank line. Not a byte-for-byte inverse of [`parse_slides`] (incidental
/// whitespace is not preserved), but re-parsing the output is stable.
pub fn serialize_slides(slides: &[Slide]) -> String {
    slides
        .iter()
        .map(|s| s.raw_text.trim())
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn texts(slides: &[Slide]) -> Vec<&str> {
        slides.iter().map(|s| s.raw_text.as_str()).collect()
    }

    #[test]
    fn no_delimiters_yields_single_slide() {
        let slides = parse_slides("# Hello\n\nsome body text\n");
        assert_eq!(texts(&slides), vec!["# Hello\n\nsome body text"]);
    }

    #[rstest]
    #[case("")]
    #[case("   \n\n  \t\n")]
    fn empty_input_yields_no_slides(#[case] input: &str) {
        assert!(parse_slides(input).is_empty());
    }

    #[test]
    fn front_matter_stays_inside_its_slide() {
        let input = "---\nlayout: cover\n---\n\n# Title\n";
        let slides = parse_slides(input);
        assert_eq!(texts(&slides), vec!["---\nlayout: cover\n---\n\n# Title"]);
    }

    #[test]
    fn delimiter_after_body_starts_next_slide() {
        let input = "---\nlayout: cover\n---\n\n# One\n\n---\nlayout: center\n---\n\n# Two\n";
        let slides = parse_slides(input);
        assert_eq!(slides.len(), 2);
        assert!(slides[0].raw_text.contains("# One"));
        assert!(slides[1].raw_text.starts_with("---\nlayout: center"));
        assert!(slides[1].raw_text.contains("# Two"));
    }

    #[test]
    fn consecutive_delimiters_produce_no_empty_slide() {
        // "---" then "---" with nothing between: the pair reads as an empty
        // front matter block, and the empty-trim rule drops nothing real.
        let slides = parse_slides("# A\n\n---\n---\n\n# B\n");
        assert_eq!(slides.len(), 2);
        assert_eq!(slides[0].raw_text, "# A");
        assert_eq!(slides[1].raw_text, "---\n---\n\n# B");
    }

    #[test]
    fn dash_run_inside_front_matter_closes_it() {
        // The closing fence must not be mistaken for a slide separator.
        let input = "---\ntheme: default\nlayout: cover\n---\nbody\n---\nlayout: two-cols\n---\nsecond";
        let slides = parse_slides(input);
        assert_eq!(slides.len(), 2);
        assert!(slides[0].raw_text.ends_with("body"));
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        let slides = parse_slides("\n\n  \n# Only\n\n\n");
        assert_eq!(texts(&slides), vec!["# Only"]);
    }

    #[rstest]
    #[case(vec!["# A"])]
    #[case(vec!["---\nlayout: cover\n---\n\n# A", "# B", "---\nlayout: center\n---\n\nC"])]
    fn reparse_of_serialized_output_is_stable(#[case] raw: Vec<&str>) {
        let slides: Vec<Slide> = raw
            .into_iter()
            .map(|t| Slide {
                raw_text: t.to_string(),
            })
            .collect();
        let round = parse_slides(&serialize_slides(&slides));
        assert_eq!(round, slides);
    }

    #[test]
    fn serialize_joins_with_blank_line() {
        let slides = vec![
            Slide {
                raw_text: "# A".into(),
            },
            Slide {
                raw_text: "# B".into(),
            },
        ];
        assert_eq!(serialize_slides(&slides), "# A\n\n# B");
    }
}
