//! Tree root: delegates to a [`SpatialNode`] and adds full rebuild.

use crate::node::SpatialNode;
use crate::region::{Item, Region};
use tracing::debug;

/// Mutable quadtree index over a bounding region.
///
/// Owns the root node and everything below it. The one operation the
/// root has that inner nodes do not is [`resize`](Self::resize), which
/// rebuilds the whole tree over a new bounding region.
#[derive(Debug)]
pub struct SpatialIndex {
    root: SpatialNode,
}

impl SpatialIndex {
    /// Create an empty index bound to `region`.
    pub fn new(region: Region) -> Self {
        Self {
            root: SpatialNode::new(region),
        }
    }

    /// The current bounding region.
    #[inline]
    pub fn region(&self) -> Region {
        self.root.region()
    }

    /// The root node, for border-drawing traversals.
    #[inline]
    pub fn root(&self) -> &SpatialNode {
        &self.root
    }

    /// Add an item to the index.
    #[inline]
    pub fn insert(&mut self, item: Item) {
        self.root.insert(item);
    }

    /// Items stored in nodes intersecting the query rectangle.
    #[inline]
    pub fn query(&self, region: Region) -> Vec<Item> {
        self.root.query(region)
    }

    /// Every stored item, unhandled ones included.
    #[inline]
    pub fn collect_all(&self) -> Vec<Item> {
        self.root.collect_all()
    }

    /// Total number of stored items.
    pub fn total_count(&self) -> usize {
        self.root.collect_all().len()
    }

    /// Items that could not be placed under any node region.
    #[inline]
    pub fn unhandled_count(&self) -> usize {
        self.root.unhandled_count()
    }

    /// Visit every node whose region intersects the viewport.
    #[inline]
    pub fn visit_visible<F: FnMut(&SpatialNode)>(&self, viewport: &Region, f: &mut F) {
        self.root.visit_visible(viewport, f);
    }

    /// Rebuild the tree over a new bounding region.
    ///
    /// Collects every item (unhandled buckets included), discards the
    /// tree structure, rebinds the root to `new_region` and reinserts
    /// the items in collection order. Item-to-node assignment is fully
    /// recomputed; nothing is lost or duplicated.
    pub fn resize(&mut self, new_region: Region) {
        let items = self.root.collect_all();
        // Replacing the root discards the old tree structure outright.
        self.root = SpatialNode::new(new_region);

        debug!(items = items.len(), region = ?new_region, "rebuilding index");
        for item in items {
            self.root.insert(item);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::MAX_ITEMS_PER_NODE;

    fn item(x: i32, y: i32, width: i32, height: i32) -> Item {
        Item::new(Region::new(x, y, width, height))
    }

    /// Sorted key list for multiset comparison.
    fn keys(items: &[Item]) -> Vec<(i32, i32)> {
        let mut keys: Vec<(i32, i32)> = items
            .iter()
            .map(|it| (it.region().x, it.region().y))
            .collect();
        keys.sort_unstable();
        keys
    }

    #[test]
    fn test_query_hits_and_misses() {
        let mut index = SpatialIndex::new(Region::new(0, 0, 100, 100));
        index.insert(item(10, 10, 5, 5));

        let found = index.query(Region::new(0, 0, 50, 50));
        assert_eq!(found.len(), 1);
        assert_eq!(found[0], item(10, 10, 5, 5));
    }

    #[test]
    fn test_query_misses_after_split() {
        let mut index = SpatialIndex::new(Region::new(0, 0, 100, 100));
        index.insert(item(10, 10, 5, 5));
        // Pad the top-left with enough items to force a split, so the
        // probe in the bottom-right prunes down to an empty quadrant.
        for i in 0..MAX_ITEMS_PER_NODE as i32 {
            index.insert(item(i % 30, i / 3, 2, 2));
        }
        assert!(index.root().is_split());

        assert!(index.query(Region::new(60, 60, 10, 10)).is_empty());
        assert_eq!(
            index.query(Region::new(0, 0, 50, 50)).len(),
            MAX_ITEMS_PER_NODE + 1
        );
    }

    #[test]
    fn test_no_loss_or_duplication() {
        let mut index = SpatialIndex::new(Region::new(0, 0, 400, 400));
        let mut inserted = Vec::new();
        for i in 0..500 {
            let it = item(i * 11 % 450 - 20, i * 17 % 450 - 20, 20, 20);
            inserted.push(it);
            index.insert(it);
        }

        let collected = index.collect_all();
        assert_eq!(collected.len(), inserted.len());
        assert_eq!(keys(&collected), keys(&inserted));
        assert_eq!(index.total_count(), inserted.len());
    }

    #[test]
    fn test_resize_to_same_region_is_exact() {
        let mut index = SpatialIndex::new(Region::new(0, 0, 300, 300));
        for i in 0..400 {
            index.insert(item(i * 13 % 350 - 25, i * 7 % 350 - 25, 15, 15));
        }
        let before = index.collect_all();
        let unhandled_before = index.unhandled_count();

        index.resize(Region::new(0, 0, 300, 300));

        let after = index.collect_all();
        assert_eq!(keys(&after), keys(&before));
        assert_eq!(index.unhandled_count(), unhandled_before);
        assert_eq!(index.region(), Region::new(0, 0, 300, 300));
    }

    #[test]
    fn test_resize_reassigns_outside_items() {
        let mut index = SpatialIndex::new(Region::new(0, 0, 10, 10));
        index.insert(item(20, 20, 5, 5));
        assert_eq!(index.unhandled_count(), 1);

        // Growing the region makes the item placeable again.
        index.resize(Region::new(0, 0, 100, 100));
        assert_eq!(index.unhandled_count(), 0);
        assert_eq!(index.query(Region::new(15, 15, 20, 20)).len(), 1);

        // Shrinking it back demotes the item to unhandled again.
        index.resize(Region::new(0, 0, 10, 10));
        assert_eq!(index.unhandled_count(), 1);
        assert_eq!(index.total_count(), 1);
        assert!(index.query(Region::new(0, 0, 100, 100)).is_empty());
    }

    #[test]
    fn test_resize_empty_index() {
        let mut index = SpatialIndex::new(Region::new(0, 0, 50, 50));
        index.resize(Region::new(10, 10, 80, 80));

        assert_eq!(index.region(), Region::new(10, 10, 80, 80));
        assert_eq!(index.total_count(), 0);
        assert!(!index.root().is_split());
    }

    #[test]
    fn test_visit_visible_from_root() {
        let mut index = SpatialIndex::new(Region::new(0, 0, 100, 100));
        for i in 0..(MAX_ITEMS_PER_NODE as i32 + 1) {
            index.insert(item(i % 90, i % 90, 3, 3));
        }
        assert!(index.root().is_split());

        let mut count = 0;
        index.visit_visible(&Region::new(0, 0, 100, 100), &mut |_| count += 1);
        assert!(count >= 5); // root plus at least its four children
    }
}
