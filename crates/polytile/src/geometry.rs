//! Core geometry types for polytile.
//!
//! Everything lives on the integer lattice. The y-axis points *down* (screen
//! convention), so "up" is negative y. All other modules must stay consistent
//! with this orientation; the rotation and mirror formulas below are the
//! single source of truth for it.

use std::ops::{Add, Neg, Sub};

use serde::ser::SerializeSeq;
use serde::{Serialize, Serializer};

/// A 2D lattice point (also used as a displacement vector).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    #[inline]
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// The origin.
    #[inline]
    pub fn zero() -> Self {
        Self { x: 0, y: 0 }
    }
}

impl Add for Point {
    type Output = Point;
    #[inline]
    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;
    #[inline]
    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Point {
    type Output = Point;
    #[inline]
    fn neg(self) -> Point {
        Point::new(-self.x, -self.y)
    }
}

// Points serialize as `[x, y]` pairs, matching the wire format the
// factorization output promises.
impl Serialize for Point {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(2))?;
        seq.serialize_element(&self.x)?;
        seq.serialize_element(&self.y)?;
        seq.end()
    }
}

/// A lattice polygon as an ordered vertex sequence.
///
/// Equality is strict sequence equality: two polygons tracing the same region
/// from different start vertices are *different* values. The tiling
/// generator's dedup depends on this, so no canonicalization happens here.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Polygon {
    pub points: Vec<Point>,
}

impl Polygon {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Bounding box as (min_x, min_y, max_x, max_y).
    pub fn bounding_box(&self) -> Option<(i64, i64, i64, i64)> {
        let first = self.points.first()?;
        let mut bb = (first.x, first.y, first.x, first.y);
        for p in &self.points[1..] {
            bb.0 = bb.0.min(p.x);
            bb.1 = bb.1.min(p.y);
            bb.2 = bb.2.max(p.x);
            bb.3 = bb.3.max(p.y);
        }
        Some(bb)
    }

    /// Translate every vertex by `v`.
    pub fn translated(&self, v: Point) -> Polygon {
        Polygon::new(self.points.iter().map(|&p| p + v).collect())
    }

    /// Scale every vertex by an integer factor about the origin.
    pub fn scaled(&self, factor: i64) -> Polygon {
        Polygon::new(
            self.points
                .iter()
                .map(|p| Point::new(p.x * factor, p.y * factor))
                .collect(),
        )
    }

    /// Rotate about the `pivot`-th vertex by `angle` degrees.
    ///
    /// With the y-axis pointing down:
    /// 180 maps (dx, dy) to (-dx, -dy), 90 to (dy, -dx), -90 to (-dy, dx).
    pub fn rotated(&self, angle: i32, pivot: usize) -> Polygon {
        let p = self.points[pivot];
        Polygon::new(
            self.points
                .iter()
                .map(|&v| {
                    let d = v - p;
                    let r = match angle {
                        180 | -180 => Point::new(-d.x, -d.y),
                        90 => Point::new(d.y, -d.x),
                        -90 => Point::new(-d.y, d.x),
                        _ => panic!("rotation angle must be 90, -90 or 180, got {}", angle),
                    };
                    p + r
                })
                .collect(),
        )
    }

    /// Mirror across the line through the `pivot`-th vertex at `angle`
    /// degrees from the x-axis.
    ///
    /// -45 maps (dx, dy) to (-dy, -dx), 0 to (dx, -dy), 45 to (dy, dx),
    /// 90 to (-dx, dy).
    pub fn mirrored(&self, angle: i32, pivot: usize) -> Polygon {
        let p = self.points[pivot];
        Polygon::new(
            self.points
                .iter()
                .map(|&v| {
                    let d = v - p;
                    let r = match angle {
                        -45 => Point::new(-d.y, -d.x),
                        0 => Point::new(d.x, -d.y),
                        45 => Point::new(d.y, d.x),
                        90 => Point::new(-d.x, d.y),
                        _ => panic!("mirror angle must be -45, 0, 45 or 90, got {}", angle),
                    };
                    p + r
                })
                .collect(),
        )
    }

    /// True iff at least one vertex lies inside the centered window
    /// `[-w/2, w/2] x [-h/2, h/2]`.
    pub fn touches_window(&self, w: i64, h: i64) -> bool {
        self.points
            .iter()
            .any(|p| 2 * p.x.abs() <= w && 2 * p.y.abs() <= h)
    }
}

impl Serialize for Polygon {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.points.iter())
    }
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
    fn bounding_box_of_square() {
        assert_eq!(square().bounding_box(), Some((0, -1, 1, 0)));
        assert_eq!(Polygon::new(vec![]).bounding_box(), None);
    }

    #[test]
    fn translate_shifts_all_vertices() {
        let moved = square().translated(Point::new(3, -2));
        assert_eq!(moved.points[0], Point::new(3, -2));
        assert_eq!(moved.points[2], Point::new(4, -3));
    }

    #[test]
    fn rotation_about_vertex() {
        // Rotate the square a quarter turn about its first vertex.
        let r = square().rotated(90, 0);
        // (0,-1) -> (dy,-dx) = (-1,0)
        assert_eq!(r.points[1], Point::new(-1, 0));
        // 180 about the same vertex undoes twice applied 90s.
        let twice = square().rotated(90, 0).rotated(90, 0);
        assert_eq!(twice, square().rotated(180, 0));
    }

    #[test]
    fn mirror_is_involutive() {
        for angle in [-45, 0, 45, 90] {
            let m = square().mirrored(angle, 0).mirrored(angle, 0);
            assert_eq!(m, square(), "mirror at {} should be involutive", angle);
        }
    }

    #[test]
    fn window_test_uses_half_extent() {
        let far = square().translated(Point::new(10, 0));
        assert!(!far.touches_window(8, 8));
        assert!(far.touches_window(20, 2));
        assert!(square().touches_window(2, 2));
    }

    #[test]
    fn point_serializes_as_pair() {
        let js = serde_json::to_string(&Point::new(3, -1)).unwrap();
        assert_eq!(js, "[3,-1]");
    }
}
