use crate::error::Result;
use crate::nodes::{ContainerNode, LeafNode, Node};

use super::{
    blocks::{
        BlockKind, ClassifiedBlock, ListKind,
        kinds::{CodeFence, Heading},
    },
    inline::{parse_spans, spans_to_nodes},
    nesting::{build_list_node, build_quote_node},
};

/// Converts one classified block to its node.
///
/// - Paragraph → `p`, lines trimmed and joined with one space
/// - Heading → `h1`–`h6`
/// - Code → `pre` holding one verbatim `code` leaf
/// - Lists and quotes → the nesting builders
pub fn block_to_node(block: &ClassifiedBlock) -> Result<Node> {
    let node: Node = match block.kind {
        BlockKind::Paragraph => paragraph_node(&block.text)?.into(),
        BlockKind::Heading => heading_node(&block.text)?.into(),
        BlockKind::Code => code_node(&block.text)?.into(),
        BlockKind::Quote => build_quote_node(&block.text)?.into(),
        BlockKind::UnorderedList => build_list_node(&block.text, ListKind::Unordered)?.into(),
        BlockKind::OrderedList => build_list_node(&block.text, ListKind::Ordered)?.into(),
    };
    Ok(node)
}

fn inline_container(tag: &str, text: &str) -> Result<ContainerNode> {
    ContainerNode::with_placeholder(tag, spans_to_nodes(&parse_spans(text)?)?)
}

fn joined_lines<'a>(lines: impl Iterator<Item = &'a str>) -> String {
    lines
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn paragraph_node(text: &str) -> Result<ContainerNode> {
    inline_container("p", &joined_lines(text.lines()))
}

fn heading_node(text: &str) -> Result<ContainerNode> {
    let mut lines = text.lines();
    let first = lines.next().unwrap_or_default();
    let level = Heading::level(first).unwrap_or(1);
    let content = joined_lines(std::iter::once(Heading::strip(first)).chain(lines));
    inline_container(&format!("h{level}"), &content)
}

fn code_node(text: &str) -> Result<ContainerNode> {
    let parts = CodeFence::parts(text);
    let mut code = LeafNode::new(Some("code"), parts.body)?;
    if let Some(lang) = parts.info {
        code = code.with_attr("class", format!("language-{lang}"));
    }
    ContainerNode::new("pre", vec![code.into()])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn html(text: &str) -> String {
        block_to_node(&ClassifiedBlock::new(text))
            .unwrap()
            .to_html()
            .unwrap()
    }

    #[test]
    fn paragraph_lines_are_joined() {
        assert_eq!(
            html("This is **bolded** paragraph\n  text in a p\ntag here"),
            "<p>This is <b>bolded</b> paragraph text in a p tag here</p>"
        );
    }

    #[rstest]
    #[case("# One", "<h1>One</h1>")]
    #[case("### Three", "<h3>Three</h3>")]
    #[case("###### Six", "<h6>Six</h6>")]
    #[case("## With `code`", "<h2>With <code>code</code></h2>")]
    #[case("# Title\ncontinued", "<h1>Title continued</h1>")]
    fn headings(#[case] text: &str, #[case] expected: &str) {
        assert_eq!(html(text), expected);
    }

    #[test]
    fn code_is_not_span_parsed() {
        assert_eq!(
            html("```\nThis is text that _should_ remain\nthe **same** even with inline stuff\n```"),
            "<pre><code>This is text that _should_ remain\nthe **same** even with inline stuff</code></pre>"
        );
    }

    #[test]
    fn code_info_string_becomes_class() {
        assert_eq!(
            html("```rust\nlet x = 1;\n```"),
            r#"<pre><code class="language-rust">let x = 1;</code></pre>"#
        );
    }

    #[test]
    fn unterminated_fence_fails_as_paragraph() {
        assert!(matches!(
            block_to_node(&ClassifiedBlock::new("```\nprint('Hello')")),
            Err(Error::UnmatchedDelimiter { .. })
        ));
    }

    #[test]
    fn lists_and_quotes_use_nesting_builders() {
        assert_eq!(html("1. a\n2. b"), "<ol><li>a</li><li>b</li></ol>");
        assert_eq!(html("> quoted"), "<blockquote>quoted</blockquote>");
    }
}
