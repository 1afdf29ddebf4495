//! # sitemark-engine
//!
//! Markdown to HTML for static sites.
//!
//! ```text
//! markdown ──segment──▶ blocks ──classify──▶ kinds ──convert──▶ nodes ──render──▶ HTML
//! ```
//!
//! - **`parsing`**: blocks, inline spans, list/quote nesting, conversion
//! - **`nodes`**: the HTML node tree
//! - **`render`**: node tree to HTML text
//! - **`page`**: title extraction and template substitution
//! - **`io`**: file-system helpers for site generation

pub mod error;
pub mod io;
pub mod nodes;
pub mod page;
pub mod parsing;
pub mod render;


// Re-export key types for easier usage
pub use error::{Error, MAX_NESTING_DEPTH, Result};
pub use io::IoError;
pub use nodes::{AttrValue, Attributes, ContainerNode, LeafNode, Node};
pub use page::{Template, extract_title, render_page};
pub use parsing::{
    blocks::{BlockKind, ClassifiedBlock, ListKind, classify, segment},
    inline::{Span, SpanKind, parse_spans},
    markdown_to_html, markdown_to_node,
};
pub use render::render;
