//! # Cube UV Packer
//!
//! A Rust library for planning UV texture-atlas layouts for Minecraft-style
//! cube models.
//!
//! ## Overview
//!
//! Each cuboid shape unfolds into the fixed six-rectangle cross layout used
//! by the cube-UV convention. This library takes plain shape descriptors
//! (dimensions, optional group key, optional pre-existing placement) and
//! computes non-overlapping integer placements for every shape inside a
//! bounded texture atlas. Shapes sharing a group key and exact dimensions
//! share one placement; placements the model author already committed are
//! kept as fixed obstacles.
//!
//! ## Quick Start
//!
//! ```
//! use cube_uv_packer::{pack_uv, AtlasConfig, ShapeDescriptor};
//!
//! # fn main() -> cube_uv_packer::Result<()> {
//! let shapes = vec![
//!     ShapeDescriptor::new("head", 8, 8, 8),
//!     ShapeDescriptor::new("arm_l", 4, 4, 12).with_group("arm"),
//!     ShapeDescriptor::new("arm_r", 4, 4, 12).with_group("arm"),
//! ];
//!
//! let set = pack_uv(&shapes, &AtlasConfig::new(64))?;
//! let head = set.get("head").unwrap();
//! println!("head is at {:?}", head.uv());
//! # Ok(()) }
//! ```
//!
//! The planned `CubeSet` carries integer cell placements; use
//! [`face_regions`] to turn one cube into the normalized [0,1] per-face
//! regions that a UV-writing step paints into a mesh.

pub mod cube;
pub mod error;
pub mod mapping;
pub mod packer;
pub mod rect;
pub mod regions;

// Re-export main types for convenience
pub use cube::{CubeUv, Face};
pub use error::{PackError, Result};
pub use mapping::{CubeSet, ShapeDescriptor};
pub use packer::plan;
pub use rect::{Suggestion, UvCorner, UvRect};
pub use regions::{face_regions, AtlasRegion, FaceUv};

use serde::{Deserialize, Serialize};

/// Texture atlas bounds for one packing run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AtlasConfig {
    /// Atlas width in cells.
    pub width: i32,
    /// Atlas height in cells; `None` allows unbounded vertical growth.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<i32>,
}

impl Default for AtlasConfig {
    fn default() -> Self {
        Self {
            width: 64,
            height: None,
        }
    }
}

impl AtlasConfig {
    /// Create a config with the given width and unbounded height.
    ///
    /// Panics if `width` is not positive.
    pub fn new(width: i32) -> Self {
        assert!(width > 0, "atlas width must be positive");
        Self {
            width,
            height: None,
        }
    }

    /// Limit the atlas height.
    pub fn with_height(mut self, height: i32) -> Self {
        assert!(height > 0, "atlas height must be positive");
        self.height = Some(height);
        self
    }
}

/// Build the cube mapping from shape descriptors and plan all placements.
///
/// Convenience wrapper over [`CubeSet::build`] and [`CubeSet::plan`];
/// an unsatisfiable layout becomes [`PackError::LayoutInfeasible`]. The
/// caller may retry with larger bounds.
pub fn pack_uv(descriptors: &[ShapeDescriptor], config: &AtlasConfig) -> Result<CubeSet> {
    let mut set = CubeSet::build(descriptors)?;
    if set.plan(config.width, config.height) {
        Ok(set)
    } else {
        Err(PackError::LayoutInfeasible {
            width: config.width,
            height: config.height,
        })
    }
}
