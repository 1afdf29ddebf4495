//! # Block Parsing
//!
//! Splits a document into raw blocks and decides each block's kind.
//!
//! ## Parsing Phases
//!
//! 1. **Segmentation** (`segment`): a `Segmenter` consumes lines and emits
//!    raw blocks as they close
//! 2. **Classification** (`classify`): each raw block is classified on its
//!    own, without reference to its neighbours
//!
//! ## Modules
//!
//! - **`types`**: `BlockKind`, `ListKind`, `ClassifiedBlock`
//! - **`kinds`**: block-specific types with owned markers
//! - **`indent`**: indentation width with tab expansion
//! - **`segment`** / **`classify`**: the two phases
//!
//! ## Key Invariants
//!
//! - Fenced code blocks are raw zones: blank lines and markers inside them
//!   never split the block
//! - Classification never fails; malformed syntax is a paragraph

pub mod classify;
pub mod indent;
pub mod kinds;
pub mod segment;
pub mod types;

pub use classify::classify;
pub use segment::{Segmenter, segment};
pub use types::{BlockKind, ClassifiedBlock, ListKind};

/// Segments `doc` and classifies every block.
pub fn parse_blocks(doc: &str) -> Vec<ClassifiedBlock> {
    segment(doc).into_iter().map(ClassifiedBlock::new).collect()
}
