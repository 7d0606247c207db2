//! Glint DOM - Retained document model for the Glint page engine
//!
//! A slim document tree suitable for driving page interactivity without a
//! full browser: elements with cached id/class lookup, text nodes, and
//! per-element layout rectangles supplied by the embedder.

#![no_std]

extern crate alloc;

pub mod document;
pub mod geometry;
pub mod node;

pub use document::Document;
pub use geometry::Rect;
pub use node::{Attribute, Node, NodeData, NodeId, NodeType};

/// Prelude for common imports
pub mod prelude {
    pub use crate::{Attribute, Document, Node, NodeData, NodeId, NodeType, Rect};
}
