//! # Block Kinds
//!
//! Block-specific types that own their syntax markers.
//!
//! - **`BlockQuote`**: `>` prefix
//! - **`CodeFence`**: ```` ``` ```` fence and info string
//! - **`Heading`**: `#` markers, levels 1–6
//! - **`ListMarker`**: `- `, `* ` and `N. ` item markers

pub mod block_quote;
pub mod code_fence;
pub mod heading;
pub mod list_marker;

pub use block_quote::BlockQuote;
pub use code_fence::{CodeFence, FencedCode};
pub use heading::Heading;
pub use list_marker::{ListMarker, Marker};
