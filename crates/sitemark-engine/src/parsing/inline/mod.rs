//! # Inline Parsing
//!
//! Turns the text of a paragraph, heading or list item into [`Span`]s.
//!
//! ## Architecture
//!
//! Parsing runs one extraction pass per syntax over the spans still marked
//! plain, in a fixed priority order:
//! code → `**` → `__` → `*` → `_` → links → images.
//!
//! - Code spans are raw zones: nothing inside them is parsed or unescaped
//! - Bold and italic contents are parsed again, one level deeper
//! - Link and image syntax is atomic for the emphasis passes
//!
//! ## Modules
//!
//! - **`types`**: `Span` enum and its node conversion
//! - **`kinds`**: delimiter constants and link/image patterns
//! - **`cursor`**: `Cursor` for byte-wise marker scanning
//! - **`parser`**: `parse_spans()` main entry point

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::parse_spans;
pub use types::{Span, SpanKind, spans_to_nodes};
