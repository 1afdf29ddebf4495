//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters.
//!
//! ## Types
//!
//! - **`CodeSpan`**: `` TICK = "`" `` - raw zone that suppresses other parsing
//! - **`Emphasis`**: `**`/`__` (bold) and `*`/`_` (italic)
//! - **`Delimiter`**: paired-marker table in extraction order
//! - **`Link`** / **`Image`**: `[text](url)` and `![alt](url)` patterns
//!
//! ## Design Principle
//!
//! All delimiter constants live here, not scattered in parser code.

pub mod code_span;
pub mod emphasis;
pub mod link;

pub use code_span::CodeSpan;
pub use emphasis::{Delimiter, Emphasis};
pub use link::{Image, Link};
