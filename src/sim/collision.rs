//! Axis-aligned rectangle overlap tests
//!
//! Every collision in the game reduces to a rectangle-vs-rectangle overlap
//! check on the integer pixel grid: ball against paddle, ball against brick.

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle on the pixel grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub pos: IVec2,
    /// Extent in pixels
    pub size: IVec2,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self {
            pos: IVec2::new(x, y),
            size: IVec2::new(w, h),
        }
    }

    /// One past the right edge
    #[inline]
    pub fn right(&self) -> i32 {
        self.pos.x + self.size.x
    }

    /// One past the bottom edge
    #[inline]
    pub fn bottom(&self) -> i32 {
        self.pos.y + self.size.y
    }

    /// Two rectangles overlap iff each one's start is strictly less than the
    /// other's end on both axes. Edge-touching rectangles do not overlap.
    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.pos.x < other.right()
            && other.pos.x < self.right()
            && self.pos.y < other.bottom()
            && other.pos.y < self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap_basic() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(5, 5, 10, 10);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_edge_touch_is_not_overlap() {
        let a = Rect::new(0, 0, 10, 10);
        // Left edge of b is exactly a's right edge
        let b = Rect::new(10, 0, 10, 10);
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));

        // Same on the vertical axis
        let c = Rect::new(0, 10, 10, 10);
        assert!(!a.overlaps(&c));
        assert!(!c.overlaps(&a));

        // One pixel of penetration does overlap
        let d = Rect::new(9, 9, 10, 10);
        assert!(a.overlaps(&d));
    }

    #[test]
    fn test_containment_overlaps() {
        let outer = Rect::new(0, 0, 20, 20);
        let inner = Rect::new(5, 5, 3, 3);
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
        assert!(outer.overlaps(&outer));
    }

    #[test]
    fn test_disjoint_miss() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(50, 0, 10, 10);
        assert!(!a.overlaps(&b));
        // Overlap on x alone is not enough
        let c = Rect::new(0, 40, 10, 10);
        assert!(!a.overlaps(&c));
    }
}
