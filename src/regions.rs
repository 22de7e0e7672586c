//! Normalized UV regions for the UV-writing step.
//!
//! Converts a planned cube's integer face cells into [0,1] texture
//! coordinates against the declared atlas size. Coordinates keep the
//! packer's convention (top-left origin, V down); hosts with a different
//! UV origin flip on their side.

use crate::cube::{CubeUv, Face};
use crate::rect::UvRect;
use serde::{Deserialize, Serialize};

/// A region within the texture atlas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AtlasRegion {
    /// U coordinate of the left edge (0-1).
    pub u_min: f32,
    /// V coordinate of the top edge (0-1).
    pub v_min: f32,
    /// U coordinate of the right edge (0-1).
    pub u_max: f32,
    /// V coordinate of the bottom edge (0-1).
    pub v_max: f32,
}

impl AtlasRegion {
    /// Normalize an integer cell rectangle against the atlas size.
    pub fn from_cells(rect: &UvRect, atlas_width: i32, atlas_height: i32) -> Self {
        let (u, v) = rect.uv();
        let (w, h) = rect.size();
        Self {
            u_min: u as f32 / atlas_width as f32,
            v_min: v as f32 / atlas_height as f32,
            u_max: (u + w) as f32 / atlas_width as f32,
            v_max: (v + h) as f32 / atlas_height as f32,
        }
    }

    /// Get the width of this region in UV space.
    pub fn width(&self) -> f32 {
        self.u_max - self.u_min
    }

    /// Get the height of this region in UV space.
    pub fn height(&self) -> f32 {
        self.v_max - self.v_min
    }

    /// Transform a local UV coordinate (0-1) to atlas coordinate.
    pub fn transform_uv(&self, u: f32, v: f32) -> [f32; 2] {
        [self.u_min + u * self.width(), self.v_min + v * self.height()]
    }
}

/// One face's atlas region plus the flips the host applies when painting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FaceUv {
    pub region: AtlasRegion,
    pub flip_x: bool,
    pub flip_y: bool,
}

/// Normalized regions for all six faces of a planned cube.
///
/// With `mirror`, the left and right faces swap strip positions and the
/// faces carry flip flags (side and top/bottom faces flip horizontally,
/// front and back vertically), matching the engine's mirrored-cube UV
/// convention.
pub fn face_regions(
    cube: &CubeUv,
    atlas_width: i32,
    atlas_height: i32,
    mirror: bool,
) -> [(Face, FaceUv); 6] {
    Face::ALL.map(|face| {
        let rect = match (mirror, face) {
            (true, Face::Left) => cube.face(Face::Right),
            (true, Face::Right) => cube.face(Face::Left),
            _ => cube.face(face),
        };
        let (flip_x, flip_y) = if mirror {
            match face {
                Face::Front | Face::Back => (false, true),
                _ => (true, false),
            }
        } else {
            (false, false)
        };
        (
            face,
            FaceUv {
                region: AtlasRegion::from_cells(rect, atlas_width, atlas_height),
                flip_x,
                flip_y,
            },
        )
    })
}
