//! Rectangle primitive for atlas placement.
//!
//! Coordinates are integer atlas cells with a top-left origin: U increases
//! to the right, V increases downward. A rectangle at `(u, v)` with size
//! `(w, h)` occupies the half-open cell range `[u, u+w) x [v, v+h)`.

use serde::{Deserialize, Serialize};

/// The corner of a candidate rectangle that lands on a suggested point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UvCorner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

/// A candidate placement adjacent to an already-placed rectangle.
///
/// `uv` is a point one cell outside the suggesting rectangle; `corner` names
/// which corner of the rectangle being placed should land on that point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub uv: (i32, i32),
    pub corner: UvCorner,
}

impl Suggestion {
    pub fn new(uv: (i32, i32), corner: UvCorner) -> Self {
        Self { uv, corner }
    }
}

/// An axis-aligned rectangle in atlas cell space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UvRect {
    size: (i32, i32),
    uv: (i32, i32),
    is_mapped: bool,
}

impl UvRect {
    /// Create an unplaced rectangle at the origin.
    ///
    /// Panics if either dimension is not positive.
    pub fn new(size: (i32, i32)) -> Self {
        assert!(size.0 > 0 && size.1 > 0, "rectangle size must be positive");
        Self {
            size,
            uv: (0, 0),
            is_mapped: false,
        }
    }

    /// Create a rectangle fixed at a known position.
    ///
    /// Panics if either dimension is not positive.
    pub fn with_uv(size: (i32, i32), uv: (i32, i32)) -> Self {
        assert!(size.0 > 0 && size.1 > 0, "rectangle size must be positive");
        Self {
            size,
            uv,
            is_mapped: true,
        }
    }

    pub fn size(&self) -> (i32, i32) {
        self.size
    }

    pub fn uv(&self) -> (i32, i32) {
        self.uv
    }

    /// True once a real placement has been committed.
    pub fn is_mapped(&self) -> bool {
        self.is_mapped
    }

    pub(crate) fn set_uv(&mut self, uv: (i32, i32)) {
        self.uv = uv;
    }

    /// Check whether this rectangle overlaps another.
    ///
    /// Overlap is strict on both axes, so rectangles that merely share an
    /// edge or a corner do not collide.
    pub fn collides(&self, other: &UvRect) -> bool {
        let self_x = (self.uv.0, self.uv.0 + self.size.0);
        let self_y = (self.uv.1, self.uv.1 + self.size.1);
        let other_x = (other.uv.0, other.uv.0 + other.size.0);
        let other_y = (other.uv.1, other.uv.1 + other.size.1);
        self_x.0 < other_x.1 && other_x.0 < self_x.1 && self_y.0 < other_y.1 && other_y.0 < self_y.1
    }

    /// Generate the eight candidate placements touching this rectangle.
    ///
    /// Reading the rectangle like a clock face, two points per side:
    /// top-left, top-right, right-top, right-bottom, bottom-right,
    /// bottom-left, left-bottom, left-top. Each point sits one cell outside
    /// the rectangle on its side.
    pub fn suggest_positions(&self) -> Vec<Suggestion> {
        let ss = (self.size.0 - 1, self.size.1 - 1);
        let (u, v) = self.uv;
        vec![
            Suggestion::new((u, v - 1), UvCorner::BottomLeft),
            Suggestion::new((u + ss.0, v - 1), UvCorner::BottomRight),
            Suggestion::new((u + ss.0 + 1, v), UvCorner::TopLeft),
            Suggestion::new((u + ss.0 + 1, v + ss.1), UvCorner::BottomLeft),
            Suggestion::new((u + ss.0, v + ss.1 + 1), UvCorner::TopRight),
            Suggestion::new((u, v + ss.1 + 1), UvCorner::TopLeft),
            Suggestion::new((u - 1, v + ss.1), UvCorner::BottomRight),
            Suggestion::new((u - 1, v), UvCorner::TopRight),
        ]
    }

    /// Move this rectangle so the suggestion's named corner lands exactly
    /// on the suggested point.
    pub fn apply_suggestion(&mut self, suggestion: Suggestion) {
        let ss = (self.size.0 - 1, self.size.1 - 1);
        let (u, v) = suggestion.uv;
        self.uv = match suggestion.corner {
            UvCorner::TopLeft => (u, v),
            UvCorner::TopRight => (u - ss.0, v),
            UvCorner::BottomLeft => (u, v - ss.1),
            UvCorner::BottomRight => (u - ss.0, v - ss.1),
        };
    }
}
