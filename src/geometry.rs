//! Geometry primitives: Offset and Region, in terminal cells.

use std::ops::{Add, Sub};

// ---------------------------------------------------------------------------
// Offset
// ---------------------------------------------------------------------------

/// A 2D integer offset (x, y) in terminal cells.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Offset {
    pub x: i32,
    pub y: i32,
}

impl Offset {
    pub const ZERO: Offset = Offset { x: 0, y: 0 };

    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Add for Offset {
    type Output = Offset;
    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Offset::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Offset {
    type Output = Offset;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Offset::new(self.x - rhs.x, self.y - rhs.y)
    }
}

// ---------------------------------------------------------------------------
// Region
// ---------------------------------------------------------------------------

/// A rectangular region in terminal cells defined by position and size.
///
/// The stepper uses it both for rendering and for hit testing touches.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Region {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Region {
    /// An empty region at the origin.
    pub const EMPTY: Region = Region { x: 0, y: 0, width: 0, height: 0 };

    /// Create a new region.
    #[inline]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    /// The right edge (exclusive): `x + width`.
    #[inline]
    pub const fn right(self) -> i32 {
        self.x + self.width
    }

    /// The bottom edge (exclusive): `y + height`.
    #[inline]
    pub const fn bottom(self) -> i32 {
        self.y + self.height
    }

    /// The top-left corner as an [`Offset`].
    #[inline]
    pub const fn offset(self) -> Offset {
        Offset { x: self.x, y: self.y }
    }

    /// Whether the region has no area.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Whether the point (x, y) lies inside this region.
    #[inline]
    pub const fn contains(self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Whether `point` lies inside this region.
    #[inline]
    pub const fn contains_offset(self, point: Offset) -> bool {
        self.contains(point.x, point.y)
    }

    /// Split horizontally at `offset` cells from the top edge.
    ///
    /// Returns `(top, bottom)`. The offset is clamped to `[0, height]`.
    #[inline]
    pub const fn split_horizontal(self, offset: i32) -> (Region, Region) {
        let clamped = if offset < 0 {
            0
        } else if offset > self.height {
            self.height
        } else {
            offset
        };
        let top = Region { x: self.x, y: self.y, width: self.width, height: clamped };
        let bottom = Region {
            x: self.x,
            y: self.y + clamped,
            width: self.width,
            height: self.height - clamped,
        };
        (top, bottom)
    }

    /// Split into an upper and a lower half.
    ///
    /// The upper half takes the middle row when the height is odd, so a row
    /// `y` is in the upper half exactly when `2 * (y - self.y) < height`.
    #[inline]
    pub const fn split_halves(self) -> (Region, Region) {
        self.split_horizontal((self.height + 1) / 2)
    }

    /// Row index (absolute) of the vertical centre, rounding up.
    #[inline]
    pub const fn center_row(self) -> i32 {
        self.y + (self.height - 1) / 2
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // ── Offset ───────────────────────────────────────────────────────

    #[test]
    fn offset_arithmetic() {
        let a = Offset::new(3, 4);
        let b = Offset::new(1, 2);
        assert_eq!(a + b, Offset::new(4, 6));
        assert_eq!(a - b, Offset::new(2, 2));
        assert_eq!(Offset::default(), Offset::ZERO);
    }

    // ── Region ───────────────────────────────────────────────────────

    #[test]
    fn region_edges() {
        let r = Region::new(2, 3, 10, 5);
        assert_eq!(r.right(), 12);
        assert_eq!(r.bottom(), 8);
        assert_eq!(r.offset(), Offset::new(2, 3));
    }

    #[test]
    fn region_contains_is_exclusive_at_far_edges() {
        let r = Region::new(0, 0, 4, 2);
        assert!(r.contains(0, 0));
        assert!(r.contains(3, 1));
        assert!(!r.contains(4, 0));
        assert!(!r.contains(0, 2));
        assert!(!r.contains(-1, 0));
        assert!(r.contains_offset(Offset::new(2, 1)));
    }

    #[test]
    fn region_is_empty() {
        assert!(Region::EMPTY.is_empty());
        assert!(Region::new(0, 0, 0, 3).is_empty());
        assert!(Region::new(0, 0, 3, -1).is_empty());
        assert!(!Region::new(0, 0, 1, 1).is_empty());
    }

    #[test]
    fn split_horizontal_clamps() {
        let r = Region::new(0, 0, 5, 4);
        let (top, bottom) = r.split_horizontal(10);
        assert_eq!(top.height, 4);
        assert_eq!(bottom.height, 0);
        let (top, bottom) = r.split_horizontal(-2);
        assert_eq!(top.height, 0);
        assert_eq!(bottom, r);
    }

    #[test]
    fn split_halves_even_height() {
        let (up, down) = Region::new(1, 10, 3, 4).split_halves();
        assert_eq!(up, Region::new(1, 10, 3, 2));
        assert_eq!(down, Region::new(1, 12, 3, 2));
    }

    #[test]
    fn split_halves_odd_height_gives_middle_row_to_top() {
        let (up, down) = Region::new(0, 0, 3, 3).split_halves();
        assert_eq!(up.height, 2);
        assert_eq!(down.height, 1);
        assert_eq!(down.y, 2);

        let (up, down) = Region::new(0, 0, 3, 1).split_halves();
        assert_eq!(up.height, 1);
        assert!(down.is_empty());
    }

    #[test]
    fn center_row() {
        assert_eq!(Region::new(0, 0, 1, 1).center_row(), 0);
        assert_eq!(Region::new(0, 0, 1, 2).center_row(), 0);
        assert_eq!(Region::new(0, 5, 1, 3).center_row(), 6);
        assert_eq!(Region::new(0, 5, 1, 4).center_row(), 6);
    }
}
