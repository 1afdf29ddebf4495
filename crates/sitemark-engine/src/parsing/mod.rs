//! # Parsing
//!
//! Markdown text to a node tree.
//!
//! ## Pipeline
//!
//! 1. **`blocks`**: segment the document and classify each block
//! 2. **`convert`**: turn each block into a node, using **`inline`** for
//!    span text and **`nesting`** for lists and quotes
//! 3. Collect the block nodes under a `div` document root

pub mod blocks;
pub mod convert;
pub mod inline;
pub mod nesting;

use crate::error::Result;
use crate::nodes::ContainerNode;

pub use blocks::parse_blocks;
pub use convert::block_to_node;

/// Converts a markdown document to its node tree.
///
/// The root is always a `div`; a blank document gives a root with no
/// children.
///
/// # Errors
/// The first inline or nesting error of any block.
pub fn markdown_to_node(doc: &str) -> Result<ContainerNode> {
    let children = parse_blocks(doc)
        .iter()
        .map(block_to_node)
        .collect::<Result<Vec<_>>>()?;
    log::debug!("converted document into {} block nodes", children.len());
    Ok(ContainerNode::document(children))
}

/// Converts a markdown document to an HTML fragment.
pub fn markdown_to_html(doc: &str) -> Result<String> {
    markdown_to_node(doc)?.to_html()
}
