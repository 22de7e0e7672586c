//! Greedy frontier packer for cube UV footprints.
//!
//! Candidate positions are discovered lazily: the queue starts with the
//! atlas origin and grows only from boxes that were actually placed or that
//! rejected a placement, which keeps the candidate set small compared to
//! shelf or grid packers.

use crate::cube::CubeUv;
use crate::rect::{Suggestion, UvCorner};
use std::collections::HashSet;

/// Plan placements for every unmapped cube in the slice.
///
/// Cubes that are already mapped act as fixed obstacles and are never
/// moved. The atlas is `max_width` cells wide; `max_height` of `None`
/// allows unbounded vertical growth. Placement is deterministic for a
/// given slice order.
///
/// Returns `false` as soon as some cube cannot be placed (that cube's
/// position is reset to the origin; earlier placements are kept).
pub fn plan(cubes: &mut [CubeUv], max_width: i32, max_height: Option<i32>) -> bool {
    // Widest bounding rectangles first; sort_by is stable, so equal widths
    // keep the caller's insertion order.
    let mut order: Vec<usize> = (0..cubes.len()).collect();
    order.sort_by(|&a, &b| cubes[b].bound_size().0.cmp(&cubes[a].bound_size().0));

    let mut mapped: Vec<usize> = Vec::new();
    let mut unmapped: Vec<usize> = Vec::new();
    for &i in &order {
        if cubes[i].is_mapped() {
            mapped.push(i);
        } else {
            unmapped.push(i);
        }
    }

    let point_in_bounds = |(u, v): (i32, i32)| {
        u >= 0 && v >= 0 && u < max_width && max_height.map_or(true, |h| v < h)
    };
    let rect_in_bounds = |(u, v): (i32, i32), (w, h): (i32, i32)| {
        u >= 0 && v >= 0 && u + w <= max_width && max_height.map_or(true, |mh| v + h <= mh)
    };

    let mut suggestions: Vec<Suggestion> = vec![Suggestion::new((0, 0), UvCorner::TopLeft)];
    // Boxes whose suggestion lists were already appended to the queue.
    let mut authors: HashSet<usize> = HashSet::new();

    for &bi in &unmapped {
        let mut i = 0;
        let mut placed = false;
        while i < suggestions.len() {
            let suggestion = suggestions[i];
            cubes[bi].apply_suggestion(suggestion);

            // An unreachable anchor point is useless for every future box.
            if !point_in_bounds(suggestion.uv) {
                suggestions.remove(i);
                continue;
            }

            // A box that spills over the edge here leaves the suggestion
            // in the queue for smaller boxes.
            if rect_in_bounds(cubes[bi].uv(), cubes[bi].bound_size()) {
                let collision = mapped.iter().find(|&&mi| cubes[bi].collides(&cubes[mi]));
                match collision {
                    Some(&mi) => {
                        if authors.insert(mi) {
                            let more = cubes[mi].suggest_positions();
                            suggestions.extend(more);
                        }
                    }
                    None => {
                        cubes[bi].mark_mapped();
                        mapped.push(bi);
                        let own = cubes[bi].suggest_positions();
                        suggestions.extend(own);
                        suggestions.remove(i);
                        placed = true;
                        break;
                    }
                }
            }

            i += 1;
        }

        if !placed {
            cubes[bi].set_uv((0, 0));
            return false;
        }
    }
    true
}
