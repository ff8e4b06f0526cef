//! Body analysis for MDX sources: headings and plain-text excerpts

use lazy_static::lazy_static;
use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};
use regex::Regex;

lazy_static! {
    /// MDX module statements (`import X from "..."`, `export const ...`)
    static ref MDX_ESM: Regex = Regex::new(r"(?m)^(import|export)\s.*$").unwrap();
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
}

/// A heading found in the body, used for in-page navigation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    pub level: u8,
    pub text: String,
    pub anchor: String,
}

/// Extracts structure from markdown/MDX bodies without rendering them
#[derive(Debug, Clone, Default)]
pub struct MarkdownAnalyzer {
    excerpt_length: usize,
}

impl MarkdownAnalyzer {
    pub fn new(excerpt_length: usize) -> Self {
        Self { excerpt_length }
    }

    fn parser(body: &str) -> Parser<'_> {
        let options = Options::ENABLE_TABLES
            | Options::ENABLE_FOOTNOTES
            | Options::ENABLE_STRIKETHROUGH
            | Options::ENABLE_TASKLISTS
            | Options::ENABLE_HEADING_ATTRIBUTES;
        Parser::new_ext(body, options)
    }

    /// Collect headings in document order
    pub fn headings(&self, body: &str) -> Vec<Heading> {
        let body = strip_mdx_esm(body);
        let mut headings = Vec::new();
        let mut current: Option<(u8, String)> = None;

        for event in Self::parser(&body) {
            match event {
                Event::Start(Tag::Heading { level, .. }) => {
                    current = Some((level as u8, String::new()));
                }
                Event::Text(text) | Event::Code(text) => {
                    if let Some((_, buf)) = current.as_mut() {
                        buf.push_str(&text);
                    }
                }
                Event::End(TagEnd::Heading(_)) => {
                    if let Some((level, text)) = current.take() {
                        let text = text.trim().to_string();
                        if !text.is_empty() {
                            headings.push(Heading {
                                level,
                                anchor: slug::slugify(&text),
                                text,
                            });
                        }
                    }
                }
                _ => {}
            }
        }

        headings
    }

    /// Plain-text excerpt of the prose, cut at a word boundary.
    /// Headings, code blocks and embedded components are left out.
    pub fn excerpt(&self, body: &str) -> Option<String> {
        if self.excerpt_length == 0 {
            return None;
        }

        let body = strip_mdx_esm(body);
        let mut text = String::new();
        let mut skip_depth = 0usize;

        for event in Self::parser(&body) {
            match event {
                Event::Start(Tag::Heading { .. }) | Event::Start(Tag::CodeBlock(_)) => {
                    skip_depth += 1;
                }
                Event::End(TagEnd::Heading(_)) | Event::End(TagEnd::CodeBlock) => {
                    skip_depth = skip_depth.saturating_sub(1);
                }
                Event::Text(t) | Event::Code(t) if skip_depth == 0 => {
                    text.push_str(&t);
                }
                Event::SoftBreak | Event::HardBreak | Event::End(TagEnd::Paragraph) => {
                    text.push(' ');
                }
                _ => {}
            }
            if text.chars().count() > self.excerpt_length * 2 {
                break;
            }
        }

        let text = WHITESPACE.replace_all(text.trim(), " ").to_string();
        if text.is_empty() {
            return None;
        }
        Some(truncate_words(&text, self.excerpt_length))
    }
}

fn strip_mdx_esm(body: &str) -> std::borrow::Cow<'_, str> {
    MDX_ESM.replace_all(body, "")
}

/// Truncate to at most `max` characters, preferring the last word boundary
fn truncate_words(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let cut: String = text.chars().take(max).collect();
    let cut = match cut.rfind(' ') {
        Some(pos) if pos > 0 => &cut[..pos],
        _ => cut.as_str(),
    };
    format!("{}...", cut.trim_end_matches([',', '.', ';', ':']))
}

#[cfg(test)]
mod tests {
    use super::*;

    const BODY: &str = r#"import Step from "../components/Step"

## Getting Started

Install **Rust** with `rustup`.

<Step number={1}>
Run the installer.
</Step>

```bash
curl https://sh.rustup.rs | sh
```

### Hello `World`

Print a greeting.
"#;

    #[test]
    fn test_headings() {
        let headings = MarkdownAnalyzer::new(0).headings(BODY);
        assert_eq!(headings.len(), 2);
        assert_eq!(headings[0].level, 2);
        assert_eq!(headings[0].text, "Getting Started");
        assert_eq!(headings[0].anchor, "getting-started");
        assert_eq!(headings[1].level, 3);
        assert_eq!(headings[1].text, "Hello World");
    }

    #[test]
    fn test_excerpt_skips_code_headings_and_imports() {
        let excerpt = MarkdownAnalyzer::new(200).excerpt(BODY).unwrap();
        assert!(excerpt.starts_with("Install Rust with rustup."));
        assert!(excerpt.contains("Print a greeting."));
        assert!(!excerpt.contains("import"));
        assert!(!excerpt.contains("curl"));
        assert!(!excerpt.contains("Getting Started"));
    }

    #[test]
    fn test_excerpt_truncates_on_word() {
        let excerpt = MarkdownAnalyzer::new(12)
            .excerpt("The quick brown fox jumps.")
            .unwrap();
        assert_eq!(excerpt, "The quick...");
    }

    #[test]
    fn test_excerpt_disabled_or_empty() {
        assert_eq!(MarkdownAnalyzer::new(0).excerpt("Some text"), None);
        assert_eq!(MarkdownAnalyzer::new(50).excerpt("## Only a heading"), None);
    }
}
