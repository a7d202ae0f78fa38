//! Rigid motions that map a tile onto its neighbors.
//!
//! A [`Transform`] is a tagged value, not a closure, so it can be inspected,
//! serialized, and replayed by the tiling generator. Its translation part is
//! *anchored to vertices of the polygon it is applied to* rather than stored
//! as a fixed vector: when the generator applies a transform to an already
//! moved (or mirrored) copy of the seed, the anchors conjugate the motion
//! into that copy's frame automatically. Resolving a transform against the
//! seed polygon yields the plain affine form used on the wire.

use serde::Serialize;

use crate::geometry::{Point, Polygon};

/// A neighbor-producing rigid motion, with vertex-anchored translation.
///
/// Vertex indices refer to the polygon the transform is applied to; the seed
/// polygon's vertex `k` is where boundary position `k + 1` starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Transform {
    /// Translate by `vertex[to] - vertex[from]`.
    Translate { from_vertex: usize, to_vertex: usize },
    /// Rotate about `vertex[pivot]` by `angle` degrees, then translate the
    /// pivot onto `vertex[to]` (a pure rotation when `to == pivot`).
    Rotate {
        angle: i32,
        pivot_vertex: usize,
        to_vertex: usize,
    },
    /// Mirror across the line at `angle` degrees through `vertex[pivot]`,
    /// then translate the pivot onto `vertex[to]`.
    Mirror {
        angle: i32,
        pivot_vertex: usize,
        to_vertex: usize,
    },
}

impl Transform {
    /// Apply to a polygon, producing the neighbor copy.
    ///
    /// Panics if a vertex index is out of range; the isometry builder only
    /// ever emits indices below the boundary length, so an overrun is a bug
    /// in the caller, not bad user input.
    pub fn apply(&self, poly: &Polygon) -> Polygon {
        match *self {
            Transform::Translate { from_vertex, to_vertex } => {
                let v = poly.points[to_vertex] - poly.points[from_vertex];
                poly.translated(v)
            }
            Transform::Rotate { angle, pivot_vertex, to_vertex } => {
                let v = poly.points[to_vertex] - poly.points[pivot_vertex];
                poly.rotated(angle, pivot_vertex).translated(v)
            }
            Transform::Mirror { angle, pivot_vertex, to_vertex } => {
                let v = poly.points[to_vertex] - poly.points[pivot_vertex];
                poly.mirrored(angle, pivot_vertex).translated(v)
            }
        }
    }

    /// Resolve the anchors against the seed polygon, producing the canonical
    /// affine representation.
    pub fn to_affine(&self, seed: &Polygon) -> AffineMap {
        match *self {
            Transform::Translate { from_vertex, to_vertex } => AffineMap::Translate {
                vec: seed.points[to_vertex] - seed.points[from_vertex],
            },
            Transform::Rotate { angle, pivot_vertex, to_vertex } => AffineMap::Rotate {
                angle,
                pivot_vertex_index: pivot_vertex,
                then_translate: seed.points[to_vertex] - seed.points[pivot_vertex],
            },
            Transform::Mirror { angle, pivot_vertex, to_vertex } => AffineMap::Mirror {
                angle,
                pivot_vertex_index: pivot_vertex,
                then_translate: seed.points[to_vertex] - seed.points[pivot_vertex],
            },
        }
    }
}

/// The flat affine form of a transform, resolved against the seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum AffineMap {
    Translate {
        vec: Point,
    },
    Rotate {
        angle: i32,
        pivot_vertex_index: usize,
        then_translate: Point,
    },
    Mirror {
        angle: i32,
        pivot_vertex_index: usize,
        then_translate: Point,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Polygon {
        Polygon::new(vec![
            Point::new(0, 0),
            Point::new(0, -1),
            Point::new(1, -1),
            Point::new(1, 0),
        ])
    }

    #[test]
    fn translate_is_anchored_to_vertices() {
        let t = Transform::Translate { from_vertex: 0, to_vertex: 2 };
        let moved = t.apply(&square());
        assert_eq!(moved.points[0], Point::new(1, -1));
        // Applied to the moved copy, the same transform keeps marching.
        let again = t.apply(&moved);
        assert_eq!(again.points[0], Point::new(2, -2));
    }

    #[test]
    fn rotation_keeps_pivot_then_translates() {
        let t = Transform::Rotate { angle: 90, pivot_vertex: 0, to_vertex: 3 };
        let img = t.apply(&square());
        // Pivot lands on vertex 3.
        assert_eq!(img.points[0], Point::new(1, 0));
        // (0,-1) about (0,0) under 90 goes to (-1,0), then shifts by (1,0).
        assert_eq!(img.points[1], Point::new(0, 0));
    }

    #[test]
    fn anchored_mirror_conjugates_under_motion() {
        // A mirror applied twice returns to the original footprint shifted
        // along the glide axis, never flipped twice in place.
        let t = Transform::Mirror { angle: 0, pivot_vertex: 0, to_vertex: 3 };
        let once = t.apply(&square());
        let twice = t.apply(&once);
        assert_eq!(twice.points[0], square().points[0] + Point::new(2, 0));
    }

    #[test]
    fn affine_resolution_matches_apply() {
        let t = Transform::Rotate { angle: 180, pivot_vertex: 1, to_vertex: 2 };
        let affine = t.to_affine(&square());
        assert_eq!(
            affine,
            AffineMap::Rotate {
                angle: 180,
                pivot_vertex_index: 1,
                then_translate: Point::new(1, 0),
            }
        );
    }

    #[test]
    fn serializes_with_op_tags() {
        let t = Transform::Translate { from_vertex: 2, to_vertex: 0 };
        let js = serde_json::to_string(&t).unwrap();
        assert_eq!(js, r#"{"op":"translate","from_vertex":2,"to_vertex":0}"#);
        let a = AffineMap::Mirror {
            angle: -45,
            pivot_vertex_index: 3,
            then_translate: Point::new(0, 2),
        };
        let js = serde_json::to_string(&a).unwrap();
        assert_eq!(
            js,
            r#"{"op":"mirror","angle":-45,"pivot_vertex_index":3,"then_translate":[0,2]}"#
        );
    }
}
