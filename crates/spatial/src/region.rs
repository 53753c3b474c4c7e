//! Rectangle primitives shared by nodes and items.

use glam::IVec2;

/// Axis-aligned rectangle over integer coordinates.
///
/// Used both as node coverage and as item extent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Region {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Region {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    /// Create a region from a corner point and a size.
    #[inline]
    pub fn from_corner_size(corner: IVec2, size: IVec2) -> Self {
        Self {
            x: corner.x,
            y: corner.y,
            width: size.x,
            height: size.y,
        }
    }

    /// Top-left corner.
    #[inline]
    pub fn origin(&self) -> IVec2 {
        IVec2::new(self.x, self.y)
    }

    /// Size as a vector.
    #[inline]
    pub fn size(&self) -> IVec2 {
        IVec2::new(self.width, self.height)
    }

    /// Center point, rounded toward the origin corner.
    #[inline]
    pub fn midpoint(&self) -> IVec2 {
        IVec2::new(self.x + self.width / 2, self.y + self.height / 2)
    }

    /// Check if two regions overlap.
    ///
    /// Strict overlap: regions that merely share an edge do not
    /// intersect. The checks are open-interval, so a zero-area region
    /// still intersects a region it lies strictly inside of, but
    /// never one whose boundary it sits on.
    #[inline]
    pub fn intersects(&self, other: &Region) -> bool {
        other.x < self.x + self.width
            && self.x < other.x + other.width
            && other.y < self.y + self.height
            && self.y < other.y + other.height
    }
}

/// An entry stored in the index.
///
/// The extent is fixed at creation; the index never moves an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Item {
    region: Region,
}

impl Item {
    #[inline]
    pub const fn new(region: Region) -> Self {
        Self { region }
    }

    /// The item's spatial extent.
    #[inline]
    pub fn region(&self) -> Region {
        self.region
    }
}
