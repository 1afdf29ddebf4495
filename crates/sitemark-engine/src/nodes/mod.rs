//! # Node Model
//!
//! The tagged tree every parsing stage produces and the renderer consumes.
//!
//! - **`node`**: `Node` (leaf or container), `LeafNode`, `ContainerNode`
//! - **`attributes`**: ordered, flat attribute maps (`Attributes`, `AttrValue`)
//!
//! Containers are validated at construction: a tag is required and the child
//! list must be non-empty, except for the document root.

pub mod attributes;
pub mod node;

pub use attributes::{AttrValue, Attributes};
pub use node::{ContainerNode, LeafNode, Node};
