use crate::error::{Error, Result};

use super::attributes::{AttrValue, Attributes};

/// A node with no children: either tagged content or raw pass-through text.
#[derive(Debug, Clone, PartialEq)]
pub struct LeafNode {
    tag: Option<String>,
    value: String,
    attrs: Attributes,
}

impl LeafNode {
    /// Creates a leaf. `tag: None` renders `value` verbatim.
    pub fn new(tag: Option<&str>, value: impl Into<String>) -> Result<Self> {
        if let Some(tag) = tag {
            validate_tag(tag)?;
        }
        Ok(Self {
            tag: tag.map(str::to_string),
            value: value.into(),
            attrs: Attributes::new(),
        })
    }

    /// Untagged text leaf. Infallible since there is no tag to validate.
    pub fn text(value: impl Into<String>) -> Self {
        Self {
            tag: None,
            value: value.into(),
            attrs: Attributes::new(),
        }
    }

    #[must_use]
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.attrs.insert(key, value);
        self
    }

    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn attrs(&self) -> &Attributes {
        &self.attrs
    }
}

/// A tagged node owning an ordered, non-empty list of children.
///
/// The only container allowed to be empty is the document root built by
/// [`ContainerNode::document`].
#[derive(Debug, Clone, PartialEq)]
pub struct ContainerNode {
    tag: String,
    children: Vec<Node>,
    attrs: Attributes,
}

impl ContainerNode {
    pub const DOCUMENT_TAG: &'static str = "div";

    pub fn new(tag: &str, children: Vec<Node>) -> Result<Self> {
        if tag.is_empty() {
            return Err(Error::MissingTag);
        }
        validate_tag(tag)?;
        if children.is_empty() {
            return Err(Error::EmptyChildren {
                tag: tag.to_string(),
            });
        }
        Ok(Self {
            tag: tag.to_string(),
            children,
            attrs: Attributes::new(),
        })
    }

    /// Like [`ContainerNode::new`], but an empty `children` list is replaced by
    /// a single empty text leaf.
    pub fn with_placeholder(tag: &str, mut children: Vec<Node>) -> Result<Self> {
        if children.is_empty() {
            children.push(Node::Leaf(LeafNode::text("")));
        }
        Self::new(tag, children)
    }

    /// The document root. Zero children means an empty document.
    pub fn document(children: Vec<Node>) -> Self {
        Self {
            tag: Self::DOCUMENT_TAG.to_string(),
            children,
            attrs: Attributes::new(),
        }
    }

    #[must_use]
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.attrs.insert(key, value);
        self
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn attrs(&self) -> &Attributes {
        &self.attrs
    }
}

/// A node in the output tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Leaf(LeafNode),
    Container(ContainerNode),
}

impl Node {
    pub fn tag(&self) -> Option<&str> {
        match self {
            Node::Leaf(leaf) => leaf.tag(),
            Node::Container(container) => Some(container.tag()),
        }
    }

    pub fn attrs(&self) -> &Attributes {
        match self {
            Node::Leaf(leaf) => leaf.attrs(),
            Node::Container(container) => container.attrs(),
        }
    }

    /// Children of a container; empty for leaves.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Leaf(_) => &[],
            Node::Container(container) => container.children(),
        }
    }

    /// Concatenated text of every leaf below this node.
    pub fn text_content(&self) -> String {
        match self {
            Node::Leaf(leaf) => leaf.value().to_string(),
            Node::Container(container) => container
                .children()
                .iter()
                .map(Node::text_content)
                .collect(),
        }
    }
}

impl From<LeafNode> for Node {
    fn from(leaf: LeafNode) -> Self {
        Node::Leaf(leaf)
    }
}

impl From<ContainerNode> for Node {
    fn from(container: ContainerNode) -> Self {
        Node::Container(container)
    }
}

fn validate_tag(tag: &str) -> Result<()> {
    let valid = tag
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic())
        && tag.chars().all(|c| c.is_ascii_alphanumeric() || c == '-');
    if valid {
        Ok(())
    } else {
        Err(Error::InvalidTag {
            tag: tag.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn container_requires_tag() {
        let err = ContainerNode::new("", vec![LeafNode::text("x").into()]).unwrap_err();
        assert_eq!(err, Error::MissingTag);
    }

    #[test]
    fn container_requires_children() {
        let err = ContainerNode::new("p", vec![]).unwrap_err();
        assert_eq!(err, Error::EmptyChildren { tag: "p".into() });
    }

    #[test]
    fn placeholder_substitutes_single_empty_leaf() {
        let node = ContainerNode::with_placeholder("li", vec![]).unwrap();
        assert_eq!(node.children(), &[Node::Leaf(LeafNode::text(""))]);
    }

    #[test]
    fn document_tolerates_no_children() {
        let doc = ContainerNode::document(vec![]);
        assert_eq!(doc.tag(), "div");
        assert!(doc.children().is_empty());
    }

    #[test]
    fn leaf_rejects_tag_starting_with_digit() {
        let err = LeafNode::new(Some("1p"), "x").unwrap_err();
        assert_eq!(err, Error::InvalidTag { tag: "1p".into() });
    }

    #[test]
    fn text_content_flattens_children() {
        let node: Node = ContainerNode::new(
            "p",
            vec![
                LeafNode::text("a ").into(),
                ContainerNode::new("b", vec![LeafNode::text("b").into()])
                    .unwrap()
                    .into(),
            ],
        )
        .unwrap()
        .into();
        assert_eq!(node.text_content(), "a b");
    }
}
