//! Node tree → HTML text.
//!
//! Values are written verbatim; only attribute values are escaped.

use crate::error::{Error, Result};
use crate::nodes::{AttrValue, Attributes, ContainerNode, LeafNode, Node};

/// Elements written as `<tag />` with no content or closing tag.
pub const VOID_TAGS: [&str; 4] = ["img", "hr", "br", "input"];

/// Serializes `node` depth-first.
pub fn render(node: &Node) -> Result<String> {
    let mut out = String::new();
    write_node(&mut out, node)?;
    Ok(out)
}

impl Node {
    pub fn to_html(&self) -> Result<String> {
        render(self)
    }
}

impl LeafNode {
    pub fn to_html(&self) -> Result<String> {
        let mut out = String::new();
        write_leaf(&mut out, self)?;
        Ok(out)
    }
}

impl ContainerNode {
    pub fn to_html(&self) -> Result<String> {
        let mut out = String::new();
        write_container(&mut out, self)?;
        Ok(out)
    }
}

fn write_node(out: &mut String, node: &Node) -> Result<()> {
    match node {
        Node::Leaf(leaf) => write_leaf(out, leaf),
        Node::Container(container) => write_container(out, container),
    }
}

fn write_leaf(out: &mut String, leaf: &LeafNode) -> Result<()> {
    let Some(tag) = leaf.tag() else {
        out.push_str(leaf.value());
        return Ok(());
    };
    let attrs = render_attributes(leaf.attrs())?;
    if is_void(tag) {
        out.push_str(&format!("<{tag}{attrs} />"));
    } else {
        out.push_str(&format!("<{tag}{attrs}>{}</{tag}>", leaf.value()));
    }
    Ok(())
}

fn write_container(out: &mut String, container: &ContainerNode) -> Result<()> {
    let tag = container.tag();
    let attrs = render_attributes(container.attrs())?;
    if is_void(tag) {
        out.push_str(&format!("<{tag}{attrs} />"));
        return Ok(());
    }
    out.push_str(&format!("<{tag}{attrs}>"));
    for child in container.children() {
        write_node(out, child)?;
    }
    out.push_str(&format!("</{tag}>"));
    Ok(())
}

/// Renders attributes as ` key="value"` pairs in map order.
///
/// `true` renders as a bare key; `false` and `Null` are omitted.
pub fn render_attributes(attrs: &Attributes) -> Result<String> {
    let mut out = String::new();
    for (key, value) in attrs.iter() {
        match value {
            AttrValue::Null | AttrValue::Bool(false) => {}
            AttrValue::Bool(true) => out.push_str(&format!(" {key}")),
            AttrValue::Str(s) => out.push_str(&format!(
                " {key}=\"{}\"",
                html_escape::encode_double_quoted_attribute(s)
            )),
            AttrValue::Int(n) => out.push_str(&format!(" {key}=\"{n}\"")),
            AttrValue::Float(n) => out.push_str(&format!(" {key}=\"{n}\"")),
            AttrValue::Map(_) => {
                return Err(Error::NestedAttribute {
                    key: key.to_string(),
                });
            }
        }
    }
    Ok(out)
}

fn is_void(tag: &str) -> bool {
    VOID_TAGS.iter().any(|v| v.eq_ignore_ascii_case(tag))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn text(s: &str) -> Node {
        LeafNode::text(s).into()
    }

    #[test]
    fn untagged_leaf_renders_raw_value() {
        assert_eq!(render(&text("a < b")).unwrap(), "a < b");
    }

    #[test]
    fn tagged_leaf_wraps_value() {
        let node: Node = LeafNode::new(Some("b"), "bold").unwrap().into();
        assert_eq!(render(&node).unwrap(), "<b>bold</b>");
    }

    #[test]
    fn image_is_self_closing() {
        let node: Node = LeafNode::new(Some("img"), "")
            .unwrap()
            .with_attr("src", "x.png")
            .with_attr("alt", "a")
            .into();
        assert_eq!(render(&node).unwrap(), r#"<img src="x.png" alt="a" />"#);
    }

    #[test]
    fn void_tag_match_ignores_case() {
        let node: Node = LeafNode::new(Some("BR"), "ignored").unwrap().into();
        assert_eq!(render(&node).unwrap(), "<BR />");
    }

    #[test]
    fn boolean_and_null_attributes() {
        let node: Node = LeafNode::new(Some("input"), "")
            .unwrap()
            .with_attr("type", "checkbox")
            .with_attr("checked", true)
            .with_attr("disabled", false)
            .with_attr("name", Option::<&str>::None)
            .into();
        assert_eq!(
            render(&node).unwrap(),
            r#"<input type="checkbox" checked />"#
        );
    }

    #[test]
    fn numeric_attributes() {
        let node: Node = LeafNode::new(Some("td"), "x")
            .unwrap()
            .with_attr("colspan", 2i64)
            .with_attr("weight", 0.5)
            .into();
        assert_eq!(
            render(&node).unwrap(),
            r#"<td colspan="2" weight="0.5">x</td>"#
        );
    }

    #[test]
    fn attribute_values_are_escaped() {
        let node: Node = LeafNode::new(Some("a"), "link")
            .unwrap()
            .with_attr("href", r#"/search?q="x"&y=1"#)
            .into();
        assert_eq!(
            render(&node).unwrap(),
            r#"<a href="/search?q=&quot;x&quot;&amp;y=1">link</a>"#
        );
    }

    #[test]
    fn nested_attribute_map_fails() {
        let nested: Attributes = [("inner", "x")].into_iter().collect();
        let node: Node = LeafNode::new(Some("p"), "x")
            .unwrap()
            .with_attr("data", nested)
            .into();
        assert_eq!(
            render(&node).unwrap_err(),
            Error::NestedAttribute { key: "data".into() }
        );
    }

    #[test]
    fn container_concatenates_children_without_whitespace() {
        let node: Node = ContainerNode::new(
            "p",
            vec![
                text("Hello, "),
                ContainerNode::new("b", vec![text("world")]).unwrap().into(),
                text("!"),
            ],
        )
        .unwrap()
        .into();
        insta::assert_snapshot!(render(&node).unwrap(), @"<p>Hello, <b>world</b>!</p>");
    }

    #[test]
    fn container_attributes_render_on_opening_tag() {
        let node: Node = ContainerNode::new("div", vec![text("x")])
            .unwrap()
            .with_attr("class", "page")
            .into();
        assert_eq!(render(&node).unwrap(), r#"<div class="page">x</div>"#);
    }

    #[test]
    fn attributes_render_at_every_level_of_a_tree() {
        let node: Node = ContainerNode::new(
            "p",
            vec![
                LeafNode::new(Some("img"), "")
                    .unwrap()
                    .with_attr("src", "a.png")
                    .with_attr("hidden", true)
                    .into(),
                LeafNode::new(Some("a"), "go")
                    .unwrap()
                    .with_attr("href", "/x?a=1&b=2")
                    .into(),
            ],
        )
        .unwrap()
        .with_attr("data-n", 3i64)
        .into();
        assert_eq!(
            render(&node).unwrap(),
            r#"<p data-n="3"><img src="a.png" hidden /><a href="/x?a=1&amp;b=2">go</a></p>"#
        );
    }

    #[test]
    fn empty_document_renders_empty_div() {
        let node: Node = ContainerNode::document(vec![]).into();
        assert_eq!(render(&node).unwrap(), "<div></div>");
    }

    #[test]
    fn rendering_is_idempotent() {
        let node: Node = ContainerNode::new(
            "ul",
            vec![ContainerNode::new("li", vec![text("one")]).unwrap().into()],
        )
        .unwrap()
        .into();
        assert_eq!(render(&node).unwrap(), render(&node).unwrap());
    }
}
