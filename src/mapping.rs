//! Shape descriptors and the name -> cube mapping.
//!
//! This is the boundary between the host application and the packer: the
//! scene walker hands over plain descriptors, and the built `CubeSet` hands
//! final placements back to the UV-writing step. No host objects cross it.

use crate::cube::CubeUv;
use crate::error::{PackError, Result};
use crate::packer;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One exportable cuboid shape, as reported by the host scene walker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShapeDescriptor {
    /// Unique shape name (typically the host object name).
    pub name: String,
    pub width: i32,
    pub depth: i32,
    pub height: i32,
    /// Shapes sharing a group key and exact dimensions share one placement.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    /// A placement the model author already committed; honored verbatim.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub existing_uv: Option<(i32, i32)>,
}

impl ShapeDescriptor {
    pub fn new(name: impl Into<String>, width: i32, depth: i32, height: i32) -> Self {
        Self {
            name: name.into(),
            width,
            depth,
            height,
            group: None,
            existing_uv: None,
        }
    }

    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    pub fn with_existing_uv(mut self, uv: (i32, i32)) -> Self {
        self.existing_uv = Some(uv);
        self
    }
}

/// The deduplicated cube footprints for one packing run.
///
/// Cubes live in an arena in descriptor order; names resolve to arena
/// slots, and grouped shapes resolve to the same slot, so repositioning a
/// shared cube moves every shape that references it.
#[derive(Debug, Clone)]
pub struct CubeSet {
    cubes: Vec<CubeUv>,
    names: HashMap<String, usize>,
}

impl CubeSet {
    /// Build the cube arena from shape descriptors.
    ///
    /// Descriptor order is preserved in the arena, which keeps packer
    /// tie-breaking stable for equal-width cubes. Descriptors with a
    /// pre-existing placement become fixed, already-mapped cubes and are
    /// never registered for group reuse.
    pub fn build(descriptors: &[ShapeDescriptor]) -> Result<CubeSet> {
        let mut cubes: Vec<CubeUv> = Vec::new();
        let mut names: HashMap<String, usize> = HashMap::new();
        let mut groups: HashMap<(String, i32, i32, i32), usize> = HashMap::new();

        for desc in descriptors {
            if desc.width <= 0 || desc.depth <= 0 || desc.height <= 0 {
                return Err(PackError::InvalidShape {
                    name: desc.name.clone(),
                    width: desc.width,
                    depth: desc.depth,
                    height: desc.height,
                });
            }
            let (w, d, h) = (desc.width, desc.depth, desc.height);

            let slot = if let Some(uv) = desc.existing_uv {
                cubes.push(CubeUv::with_uv(w, d, h, uv));
                cubes.len() - 1
            } else if let Some(group) = &desc.group {
                let key = (group.clone(), w, d, h);
                match groups.get(&key) {
                    Some(&slot) => slot,
                    None => {
                        cubes.push(CubeUv::new(w, d, h));
                        groups.insert(key, cubes.len() - 1);
                        cubes.len() - 1
                    }
                }
            } else {
                cubes.push(CubeUv::new(w, d, h));
                cubes.len() - 1
            };
            names.insert(desc.name.clone(), slot);
        }

        Ok(CubeSet { cubes, names })
    }

    /// Plan placements for every unmapped cube in the set.
    ///
    /// Returns `false` if the shapes do not fit within the bounds.
    pub fn plan(&mut self, max_width: i32, max_height: Option<i32>) -> bool {
        packer::plan(&mut self.cubes, max_width, max_height)
    }

    /// Look up the cube a shape name resolves to.
    pub fn get(&self, name: &str) -> Option<&CubeUv> {
        self.names.get(name).map(|&slot| &self.cubes[slot])
    }

    /// Iterate over `(name, cube)` pairs, in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CubeUv)> {
        self.names
            .iter()
            .map(|(name, &slot)| (name.as_str(), &self.cubes[slot]))
    }

    /// The distinct cubes, in descriptor order.
    pub fn cubes(&self) -> &[CubeUv] {
        &self.cubes
    }

    /// Number of named shapes (grouped shapes each count once by name).
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grouped_shapes_share_one_cube() {
        let descriptors = vec![
            ShapeDescriptor::new("arm_l", 3, 3, 3).with_group("arm"),
            ShapeDescriptor::new("arm_r", 3, 3, 3).with_group("arm"),
            ShapeDescriptor::new("head", 3, 3, 3),
        ];
        let mut set = CubeSet::build(&descriptors).unwrap();
        assert_eq!(set.cubes().len(), 2);
        assert!(set.plan(32, None));

        let arm_l = set.get("arm_l").unwrap().uv();
        let arm_r = set.get("arm_r").unwrap().uv();
        let head = set.get("head").unwrap().uv();
        assert_eq!(arm_l, arm_r);
        assert_ne!(arm_l, head);
    }

    #[test]
    fn test_group_requires_exact_dimensions() {
        let descriptors = vec![
            ShapeDescriptor::new("a", 3, 3, 3).with_group("limb"),
            ShapeDescriptor::new("b", 3, 3, 4).with_group("limb"),
        ];
        let set = CubeSet::build(&descriptors).unwrap();
        assert_eq!(set.cubes().len(), 2);
    }

    #[test]
    fn test_same_dimensions_different_groups_stay_apart() {
        let descriptors = vec![
            ShapeDescriptor::new("a", 2, 2, 2).with_group("x"),
            ShapeDescriptor::new("b", 2, 2, 2).with_group("y"),
        ];
        let set = CubeSet::build(&descriptors).unwrap();
        assert_eq!(set.cubes().len(), 2);
    }

    #[test]
    fn test_existing_uv_is_honored() {
        let descriptors = vec![
            ShapeDescriptor::new("fixed", 2, 2, 2).with_existing_uv((6, 3)),
            ShapeDescriptor::new("free", 2, 2, 2),
        ];
        let mut set = CubeSet::build(&descriptors).unwrap();
        assert!(set.plan(32, None));
        assert_eq!(set.get("fixed").unwrap().uv(), (6, 3));
        assert!(set.get("free").unwrap().is_mapped());
    }

    #[test]
    fn test_existing_uv_not_registered_for_group_reuse() {
        // A manually placed shape must not donate its placement to the
        // group; the grouped shape gets its own cube.
        let descriptors = vec![
            ShapeDescriptor::new("fixed", 2, 2, 2)
                .with_group("g")
                .with_existing_uv((6, 3)),
            ShapeDescriptor::new("free", 2, 2, 2).with_group("g"),
        ];
        let set = CubeSet::build(&descriptors).unwrap();
        assert_eq!(set.cubes().len(), 2);
        assert!(!set.get("free").unwrap().is_mapped());
    }

    #[test]
    fn test_invalid_dimensions_rejected() {
        let descriptors = vec![ShapeDescriptor::new("bad", 2, 0, 2)];
        let err = CubeSet::build(&descriptors).unwrap_err();
        assert!(matches!(err, PackError::InvalidShape { .. }));
    }

    #[test]
    fn test_descriptor_json_round_trip() {
        let desc = ShapeDescriptor::new("body", 4, 2, 6).with_group("torso");
        let json = serde_json::to_string(&desc).unwrap();
        // Optional fields stay out of the wire format when unset.
        assert!(!json.contains("existing_uv"));
        let back: ShapeDescriptor = serde_json::from_str(&json).unwrap();
        assert_eq!(back, desc);

        let minimal: ShapeDescriptor =
            serde_json::from_str(r#"{"name":"head","width":2,"depth":2,"height":2}"#).unwrap();
        assert_eq!(minimal.group, None);
        assert_eq!(minimal.existing_uv, None);
    }

    #[test]
    fn test_empty_set() {
        let mut set = CubeSet::build(&[]).unwrap();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        assert!(set.plan(8, Some(8)));
    }
}
