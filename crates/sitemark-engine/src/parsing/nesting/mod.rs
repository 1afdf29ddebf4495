//! # Nesting
//!
//! Builds nested containers for list and quote blocks.
//!
//! - **`list`**: indentation-driven `ul`/`ol` trees; `parse_list_items` and
//!   `nest_list_items` expose the flat and nested intermediate states
//! - **`quote`**: `blockquote` trees from repeated `>` prefixes
//!
//! Both builders stop at [`MAX_NESTING_DEPTH`](crate::error::MAX_NESTING_DEPTH).

pub mod list;
pub mod quote;

pub use list::{ListItem, build_list_node, nest_list_items, parse_list_items};
pub use quote::build_quote_node;
