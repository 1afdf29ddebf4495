use crate::error::Result;
use crate::nodes::{ContainerNode, LeafNode, Node};

/// The six inline span kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpanKind {
    Plain,
    Bold,
    Italic,
    Code,
    Link,
    Image,
}

/// A parsed inline span.
///
/// Bold and italic spans own their nested spans; code spans hold literal text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Span {
    Plain(String),
    Bold(Vec<Span>),
    Italic(Vec<Span>),
    Code(String),
    Link { text: String, url: String },
    Image { alt: String, url: String },
}

impl Span {
    pub fn kind(&self) -> SpanKind {
        match self {
            Span::Plain(_) => SpanKind::Plain,
            Span::Bold(_) => SpanKind::Bold,
            Span::Italic(_) => SpanKind::Italic,
            Span::Code(_) => SpanKind::Code,
            Span::Link { .. } => SpanKind::Link,
            Span::Image { .. } => SpanKind::Image,
        }
    }

    /// Text content: nested spans are flattened, images yield their alt text.
    pub fn text(&self) -> String {
        match self {
            Span::Plain(s) | Span::Code(s) => s.clone(),
            Span::Bold(children) | Span::Italic(children) => {
                children.iter().map(Span::text).collect()
            }
            Span::Link { text, .. } => text.clone(),
            Span::Image { alt, .. } => alt.clone(),
        }
    }

    pub fn url(&self) -> Option<&str> {
        match self {
            Span::Link { url, .. } | Span::Image { url, .. } => Some(url),
            _ => None,
        }
    }

    pub fn to_node(&self) -> Result<Node> {
        let node: Node = match self {
            Span::Plain(s) => LeafNode::text(s.as_str()).into(),
            Span::Bold(children) => {
                ContainerNode::with_placeholder("b", spans_to_nodes(children)?)?.into()
            }
            Span::Italic(children) => {
                ContainerNode::with_placeholder("i", spans_to_nodes(children)?)?.into()
            }
            Span::Code(s) => LeafNode::new(Some("code"), s.as_str())?.into(),
            Span::Link { text, url } => LeafNode::new(Some("a"), text.as_str())?
                .with_attr("href", url.as_str())
                .into(),
            Span::Image { alt, url } => LeafNode::new(Some("img"), "")?
                .with_attr("src", url.as_str())
                .with_attr("alt", alt.as_str())
                .into(),
        };
        Ok(node)
    }
}

/// Converts spans to nodes, preserving order.
pub fn spans_to_nodes(spans: &[Span]) -> Result<Vec<Node>> {
    spans.iter().map(Span::to_node).collect()
}
