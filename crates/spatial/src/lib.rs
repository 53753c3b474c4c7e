//! Region quadtree spatial index.
//!
//! This crate contains:
//! - [`Region`] and [`Item`] rectangle primitives
//! - [`SpatialNode`] - one region of space, splitting at capacity
//! - [`SpatialIndex`] - the tree root, with full rebuild on resize

mod index;
mod node;
mod region;

pub use index::SpatialIndex;
pub use node::{SpatialNode, MAX_ITEMS_PER_NODE};
pub use region::{Item, Region};
