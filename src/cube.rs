//! Six-face composite box for cube UV layouts.
//!
//! A cuboid with dimensions `width x depth x height` unfolds into the fixed
//! cross layout used by the cube-UV convention: right, front, left and back
//! side by side in a lower strip, with top and bottom in a second strip
//! stacked above the front and left faces.

use crate::rect::{Suggestion, UvRect};
use serde::{Deserialize, Serialize};

/// The six faces of a cuboid, in cross-layout order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Face {
    Right,
    Front,
    Left,
    Back,
    Top,
    Bottom,
}

impl Face {
    /// All six faces in cross-layout order.
    pub const ALL: [Face; 6] = [
        Face::Right,
        Face::Front,
        Face::Left,
        Face::Back,
        Face::Top,
        Face::Bottom,
    ];

    /// Lowercase face name, matching the serialized form.
    pub fn name(&self) -> &'static str {
        match self {
            Face::Right => "right",
            Face::Front => "front",
            Face::Left => "left",
            Face::Back => "back",
            Face::Top => "top",
            Face::Bottom => "bottom",
        }
    }
}

/// The unfolded UV footprint of one cuboid.
///
/// The six face rectangles sit at fixed offsets from the composite's anchor
/// and always move together; `set_uv` repositions all of them atomically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CubeUv {
    width: i32,
    depth: i32,
    height: i32,
    uv: (i32, i32),
    is_mapped: bool,
    right: UvRect,
    front: UvRect,
    left: UvRect,
    back: UvRect,
    top: UvRect,
    bottom: UvRect,
}

impl CubeUv {
    /// Create an unplaced cube footprint at the origin.
    ///
    /// Panics if any dimension is not positive.
    pub fn new(width: i32, depth: i32, height: i32) -> Self {
        let mut cube = Self::build(width, depth, height);
        cube.set_uv((0, 0));
        cube
    }

    /// Create a cube footprint fixed at a known position.
    ///
    /// Panics if any dimension is not positive.
    pub fn with_uv(width: i32, depth: i32, height: i32, uv: (i32, i32)) -> Self {
        let mut cube = Self::build(width, depth, height);
        cube.set_uv(uv);
        cube.is_mapped = true;
        cube
    }

    fn build(width: i32, depth: i32, height: i32) -> Self {
        assert!(
            width > 0 && depth > 0 && height > 0,
            "cube dimensions must be positive"
        );
        Self {
            width,
            depth,
            height,
            uv: (0, 0),
            is_mapped: false,
            right: UvRect::new((depth, height)),
            front: UvRect::new((width, height)),
            left: UvRect::new((depth, height)),
            back: UvRect::new((width, height)),
            top: UvRect::new((width, depth)),
            bottom: UvRect::new((width, depth)),
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn depth(&self) -> i32 {
        self.depth
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// The cuboid dimensions as a `(width, depth, height)` triple.
    pub fn dimensions(&self) -> (i32, i32, i32) {
        (self.width, self.depth, self.height)
    }

    /// Anchor of the composite (top-left of its bounding rectangle).
    pub fn uv(&self) -> (i32, i32) {
        self.uv
    }

    /// True once a real placement has been committed.
    pub fn is_mapped(&self) -> bool {
        self.is_mapped
    }

    pub(crate) fn mark_mapped(&mut self) {
        self.is_mapped = true;
    }

    /// Size of the bounding rectangle enclosing all six faces.
    pub fn bound_size(&self) -> (i32, i32) {
        (2 * self.depth + 2 * self.width, self.height + self.depth)
    }

    /// The bounding rectangle at the current position.
    pub fn bounds(&self) -> UvRect {
        UvRect::with_uv(self.bound_size(), self.uv)
    }

    /// One face rectangle at its current position.
    pub fn face(&self, face: Face) -> &UvRect {
        match face {
            Face::Right => &self.right,
            Face::Front => &self.front,
            Face::Left => &self.left,
            Face::Back => &self.back,
            Face::Top => &self.top,
            Face::Bottom => &self.bottom,
        }
    }

    /// Move the composite, repositioning all six faces by their fixed
    /// offsets in one step.
    pub fn set_uv(&mut self, uv: (i32, i32)) {
        let (u, v) = uv;
        let (w, d) = (self.width, self.depth);
        self.uv = uv;
        self.right.set_uv((u, v + d));
        self.front.set_uv((u + d, v + d));
        self.left.set_uv((u + d + w, v + d));
        self.back.set_uv((u + 2 * d + w, v + d));
        self.top.set_uv((u + d, v));
        self.bottom.set_uv((u + d + w, v));
    }

    /// Check whether any of this cube's faces overlaps another cube's
    /// bounding rectangle.
    ///
    /// The test is face-vs-bounds rather than face-vs-face: the empty
    /// corners of `other`'s bounding box count as occupied, while this
    /// cube's own empty corners stay free.
    pub fn collides(&self, other: &CubeUv) -> bool {
        let other_bounds = other.bounds();
        Face::ALL
            .iter()
            .any(|&f| self.face(f).collides(&other_bounds))
    }

    /// Candidate placements along the composite's outer silhouette.
    ///
    /// A curated subset of the face rectangles' suggestions: only the ones
    /// facing outward from the silhouette. The retained index sets per face
    /// are a fixed table, not derived from the geometry.
    pub fn suggest_positions(&self) -> Vec<Suggestion> {
        let mut result = Vec::with_capacity(12);
        for (face, keep) in [
            (Face::Right, [0, 5, 6]),
            (Face::Top, [0, 6, 7]),
            (Face::Bottom, [1, 2, 3]),
            (Face::Back, [1, 3, 4]),
        ] {
            let all = self.face(face).suggest_positions();
            result.extend(keep.iter().map(|&i| all[i]));
        }
        result
    }

    /// Move the composite so the suggestion's named corner of its bounding
    /// rectangle lands exactly on the suggested point.
    pub fn apply_suggestion(&mut self, suggestion: Suggestion) {
        let mut bounds = self.bounds();
        bounds.apply_suggestion(suggestion);
        self.set_uv(bounds.uv());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rect::UvCorner;

    #[test]
    fn test_bound_size() {
        let cube = CubeUv::new(4, 3, 5);
        assert_eq!(cube.bound_size(), (14, 8));
    }

    #[test]
    fn test_face_layout() {
        let cube = CubeUv::with_uv(4, 3, 5, (10, 20));
        assert_eq!(cube.face(Face::Right).uv(), (10, 23));
        assert_eq!(cube.face(Face::Right).size(), (3, 5));
        assert_eq!(cube.face(Face::Front).uv(), (13, 23));
        assert_eq!(cube.face(Face::Front).size(), (4, 5));
        assert_eq!(cube.face(Face::Left).uv(), (17, 23));
        assert_eq!(cube.face(Face::Left).size(), (3, 5));
        assert_eq!(cube.face(Face::Back).uv(), (20, 23));
        assert_eq!(cube.face(Face::Back).size(), (4, 5));
        assert_eq!(cube.face(Face::Top).uv(), (13, 20));
        assert_eq!(cube.face(Face::Top).size(), (4, 3));
        assert_eq!(cube.face(Face::Bottom).uv(), (17, 20));
        assert_eq!(cube.face(Face::Bottom).size(), (4, 3));
    }

    #[test]
    fn test_faces_move_together() {
        let mut cube = CubeUv::new(2, 2, 2);
        let offsets: Vec<_> = Face::ALL
            .iter()
            .map(|&f| {
                let (fu, fv) = cube.face(f).uv();
                (fu - cube.uv().0, fv - cube.uv().1)
            })
            .collect();

        cube.set_uv((31, 7));
        for (&f, &(du, dv)) in Face::ALL.iter().zip(&offsets) {
            assert_eq!(cube.face(f).uv(), (31 + du, 7 + dv));
        }
    }

    #[test]
    fn test_curated_suggestion_count() {
        let cube = CubeUv::new(2, 2, 2);
        assert_eq!(cube.suggest_positions().len(), 12);
    }

    #[test]
    fn test_apply_suggestion_moves_bounding_rect() {
        let mut cube = CubeUv::new(3, 2, 4);
        // bound size (10, 6); anchoring the bottom-right corner at (9, 5)
        // puts the composite at the origin.
        cube.apply_suggestion(Suggestion::new((9, 5), UvCorner::BottomRight));
        assert_eq!(cube.uv(), (0, 0));
        cube.apply_suggestion(Suggestion::new((4, 7), UvCorner::TopLeft));
        assert_eq!(cube.uv(), (4, 7));
        assert_eq!(cube.face(Face::Right).uv(), (4, 9));
    }

    #[test]
    fn test_collision_uses_other_bounds() {
        // The top-left corner of a cube's bounding box holds no face, but
        // it still blocks other cubes: the test is face-vs-bounds.
        let a = CubeUv::with_uv(2, 2, 2, (0, 0));
        let mut b = CubeUv::new(1, 1, 1);
        b.set_uv((-2, -1));
        // b's lower strip reaches only into a's empty corner cells, so the
        // collision is asymmetric.
        assert!(b.collides(&a));
        assert!(!a.collides(&b));
    }

    #[test]
    #[should_panic]
    fn test_zero_dimension_panics() {
        CubeUv::new(2, 0, 2);
    }
}
