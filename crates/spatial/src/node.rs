//! Quadtree node: one region of space and the items stored inside it.
//!
//! A node starts as a leaf and holds items directly. Once the direct
//! count exceeds [`MAX_ITEMS_PER_NODE`] it splits into four quadrant
//! children and routes its items down. Items that intersect a node but
//! cannot be handed to any single child stay behind in the node's
//! unhandled bucket.

use crate::region::{Item, Region};
use glam::IVec2;
use tracing::trace;

/// Direct items a leaf holds before it splits into quadrants.
pub const MAX_ITEMS_PER_NODE: usize = 100;

/// One region of space at one depth of the tree.
#[derive(Debug)]
pub struct SpatialNode {
    region: Region,
    depth: u32,
    /// Items kept at this node because they intersect no child, or do
    /// not intersect the node's region at all.
    unhandled: Vec<Item>,
    state: NodeState,
}

/// A node either holds items itself or has exactly four children,
/// never both.
#[derive(Debug)]
enum NodeState {
    Leaf { items: Vec<Item> },
    Split { children: Box<[SpatialNode; 4]> },
}

impl SpatialNode {
    /// Create an empty leaf covering `region` at the root depth.
    pub fn new(region: Region) -> Self {
        Self::with_depth(region, 0)
    }

    fn with_depth(region: Region, depth: u32) -> Self {
        Self {
            region,
            depth,
            unhandled: Vec::new(),
            state: NodeState::Leaf { items: Vec::new() },
        }
    }

    /// The rectangle this node covers.
    #[inline]
    pub fn region(&self) -> Region {
        self.region
    }

    /// Distance from the root (root = 0). Only used for styling the
    /// drawn borders, never by the algorithms.
    #[inline]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Whether this node has been split into quadrants.
    #[inline]
    pub fn is_split(&self) -> bool {
        matches!(self.state, NodeState::Split { .. })
    }

    /// The four quadrant children, or `None` for a leaf.
    pub fn children(&self) -> Option<&[SpatialNode; 4]> {
        match &self.state {
            NodeState::Leaf { .. } => None,
            NodeState::Split { children } => Some(children),
        }
    }

    /// Items stored directly at this node. Empty once split.
    pub fn direct_items(&self) -> &[Item] {
        match &self.state {
            NodeState::Leaf { items } => items,
            NodeState::Split { .. } => &[],
        }
    }

    /// Add an item to this subtree. Never fails: an item outside the
    /// node's region is kept in the unhandled bucket instead.
    pub fn insert(&mut self, item: Item) {
        if !self.region.intersects(&item.region()) {
            self.unhandled.push(item);
            return;
        }

        match &mut self.state {
            NodeState::Split { children } => {
                route_item(children, &mut self.unhandled, item);
            }
            NodeState::Leaf { items } => {
                items.push(item);
                if items.len() > MAX_ITEMS_PER_NODE {
                    self.split();
                }
            }
        }
    }

    /// Split this leaf into four quadrant children and route its items
    /// down. No-op on a node that is already split.
    ///
    /// Children are half the node's size plus one unit on each axis,
    /// so adjacent quadrants overlap by a one-unit border and integer
    /// rounding leaves no gaps.
    pub fn split(&mut self) {
        let NodeState::Leaf { items } = &mut self.state else {
            return;
        };
        let items = std::mem::take(items);

        let split_point = self.region.midpoint();
        let split_size = IVec2::new(self.region.width / 2 + 1, self.region.height / 2 + 1);

        // Routing order: top-left, top-right, bottom-right, bottom-left.
        let mut children = Box::new([
            self.child(Region::from_corner_size(self.region.origin(), split_size)),
            self.child(Region::from_corner_size(
                IVec2::new(split_point.x, self.region.y),
                split_size,
            )),
            self.child(Region::from_corner_size(split_point, split_size)),
            self.child(Region::from_corner_size(
                IVec2::new(self.region.x, split_point.y),
                split_size,
            )),
        ]);

        trace!(depth = self.depth, items = items.len(), region = ?self.region, "splitting node");

        for item in items {
            route_item(&mut children, &mut self.unhandled, item);
        }
        self.state = NodeState::Split { children };
    }

    fn child(&self, region: Region) -> SpatialNode {
        Self::with_depth(region, self.depth + 1)
    }

    /// Collect the items stored in nodes whose regions intersect the
    /// query rectangle.
    ///
    /// A leaf returns its direct items as-is; the caller only descends
    /// into children whose regions intersect, so non-matching subtrees
    /// are pruned wholesale. Unhandled items are never returned.
    pub fn query(&self, region: Region) -> Vec<Item> {
        let mut result = Vec::new();
        self.query_into(&region, &mut result);
        result
    }

    fn query_into(&self, region: &Region, out: &mut Vec<Item>) {
        match &self.state {
            NodeState::Leaf { items } => out.extend_from_slice(items),
            NodeState::Split { children } => {
                for child in children.iter() {
                    if child.region.intersects(region) {
                        child.query_into(region, out);
                    }
                }
            }
        }
    }

    /// Every item owned by this subtree, unhandled buckets included.
    pub fn collect_all(&self) -> Vec<Item> {
        let mut result = Vec::new();
        self.collect_into(&mut result);
        result
    }

    fn collect_into(&self, out: &mut Vec<Item>) {
        out.extend_from_slice(&self.unhandled);
        match &self.state {
            NodeState::Leaf { items } => out.extend_from_slice(items),
            NodeState::Split { children } => {
                for child in children.iter() {
                    child.collect_into(out);
                }
            }
        }
    }

    /// Drop all items and children, reverting to an empty leaf over
    /// the same region.
    pub fn cleanup(&mut self) {
        self.unhandled.clear();
        self.state = NodeState::Leaf { items: Vec::new() };
    }

    /// Total unhandled items in this subtree.
    pub fn unhandled_count(&self) -> usize {
        let mut count = self.unhandled.len();
        if let NodeState::Split { children } = &self.state {
            for child in children.iter() {
                count += child.unhandled_count();
            }
        }
        count
    }

    /// Walk the subtree, calling `f` for every node whose region
    /// intersects the viewport. Each node checks its own region but
    /// children are always descended into, matching a border-drawing
    /// pass over the tree.
    pub fn visit_visible<F: FnMut(&SpatialNode)>(&self, viewport: &Region, f: &mut F) {
        if self.region.intersects(viewport) {
            f(self);
        }
        if let NodeState::Split { children } = &self.state {
            for child in children.iter() {
                child.visit_visible(viewport, f);
            }
        }
    }
}

/// Hand an item to the first child whose region intersects it.
///
/// The one-unit quadrant overlap means an item can intersect two
/// adjacent children; the first match in routing order wins, so every
/// item is stored exactly once.
fn route_item(children: &mut [SpatialNode; 4], unhandled: &mut Vec<Item>, item: Item) {
    for child in children.iter_mut() {
        if child.region.intersects(&item.region()) {
            child.insert(item);
            return;
        }
    }
    unhandled.push(item);
}
