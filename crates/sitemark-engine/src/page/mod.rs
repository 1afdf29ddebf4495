//! # Pages
//!
//! Wraps a rendered document in an HTML template.
//!
//! Templates are plain text with `{{ Title }}` and `{{ Content }}`
//! placeholders; every occurrence of each is replaced.

use crate::error::{Error, Result};
use crate::parsing::{blocks::kinds::CodeFence, markdown_to_html};

/// The text of the first level-one heading outside fenced code.
///
/// # Errors
/// [`Error::MissingTitle`] when the document has no `# ` line.
pub fn extract_title(doc: &str) -> Result<String> {
    let mut in_fence = false;
    for line in doc.lines() {
        if CodeFence::is_fence_line(line) && !CodeFence::is_single_line(line) {
            in_fence = !in_fence;
            continue;
        }
        if in_fence {
            continue;
        }
        if let Some(title) = line.trim_start().strip_prefix("# ") {
            return Ok(title.trim().to_string());
        }
    }
    Err(Error::MissingTitle)
}

/// An HTML page template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    text: String,
}

impl Template {
    pub const TITLE: &'static str = "{{ Title }}";
    pub const CONTENT: &'static str = "{{ Content }}";

    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Neither value is scanned for placeholders after insertion.
    pub fn render(&self, title: &str, content: &str) -> String {
        self.text
            .split(Self::CONTENT)
            .map(|part| part.replace(Self::TITLE, title))
            .collect::<Vec<_>>()
            .join(content)
    }
}

/// Converts `markdown` and places it in `template`.
pub fn render_page(markdown: &str, template: &Template) -> Result<String> {
    let content = markdown_to_html(markdown)?;
    let title = extract_title(markdown)?;
    Ok(template.render(&title, &content))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("# Hello World\nThis is some content.", "Hello World")]
    #[case("#    Extra Spaces    \nMore content.", "Extra Spaces")]
    #[case("Intro\n\n## Sub\n# Real Title", "Real Title")]
    #[case("```\n# not a title\n```\n# Title", "Title")]
    fn title_is_first_h1(#[case] doc: &str, #[case] expected: &str) {
        assert_eq!(extract_title(doc).unwrap(), expected);
    }

    #[test]
    fn missing_title_fails() {
        assert_eq!(
            extract_title("This markdown has no title\nJust content."),
            Err(Error::MissingTitle)
        );
    }

    #[test]
    fn template_replaces_every_placeholder() {
        let template = Template::new("<title>{{ Title }}</title><h1>{{ Title }}</h1>{{ Content }}");
        assert_eq!(
            template.render("Hi", "<p>x</p>"),
            "<title>Hi</title><h1>Hi</h1><p>x</p>"
        );
    }

    #[test]
    fn content_is_not_rescanned_for_placeholders() {
        let template = Template::new("{{ Content }}|{{ Title }}");
        assert_eq!(template.render("T", "{{ Title }}"), "{{ Title }}|T");
    }

    #[test]
    fn render_page_fills_template() {
        let template = Template::new("<html><head><title>{{ Title }}</title></head><body>{{ Content }}</body></html>");
        let page = render_page("# Tolkien Fan Club\n\nHere's the **deal**", &template).unwrap();
        insta::assert_snapshot!(page, @"<html><head><title>Tolkien Fan Club</title></head><body><div><h1>Tolkien Fan Club</h1><p>Here's the <b>deal</b></p></div></body></html>");
    }
}
