// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use crate::{
    geometry::{
        intersection::{FindIntersection, Intersection, Quantity},
        line::Line3,
        segment::{Segment2, Segment3},
        triangle::{Shape, Triangle},
        vector::{Vector2, Vector3},
    },
    numeric::scalar::Scalar,
};

impl<T: Scalar> FindIntersection<Line3<T>> for Triangle<T> {
    type Output = Segment3<T>;

    fn find_intersection(&self, line: &Line3<T>) -> Intersection<Segment3<T>> {
        if !self.is_valid() || !line.is_valid() {
            return Intersection::Error;
        }
        let plane = self.plane();
        match plane.find_intersection(line) {
            Intersection::One(p) => {
                if self.contains(&p) {
                    Intersection::One(Segment3::point(p))
                } else {
                    Intersection::None
                }
            }
            Intersection::Same => clip_coplanar_line(self, line),
            Intersection::None | Intersection::Interval(_) => Intersection::None,
            Intersection::Error => Intersection::Error,
        }
    }
}

impl<T: Scalar> FindIntersection<Segment3<T>> for Triangle<T> {
    type Output = Segment3<T>;

    fn find_intersection(&self, seg: &Segment3<T>) -> Intersection<Segment3<T>> {
        if !self.is_valid() || !seg.is_valid() {
            return Intersection::Error;
        }
        if seg.is_point() {
            return if self.contains(&seg.point) {
                Intersection::One(Segment3::point(seg.point))
            } else {
                Intersection::None
            };
        }
        match self.find_intersection(&seg.line()) {
            Intersection::One(part) | Intersection::Interval(part) => part.find_intersection(seg),
            Intersection::Error => Intersection::Error,
            _ => Intersection::None,
        }
    }
}

/// Clips a line lying in the triangle's plane.
///
/// The vertices are classified by their signed offset from the line,
/// measured along the in-plane perpendicular `d x n`. Vertices on the line
/// and sign changes along edges yield the clip points, which are then
/// ordered along the line.
fn clip_coplanar_line<T: Scalar>(tri: &Triangle<T>, line: &Line3<T>) -> Intersection<Segment3<T>> {
    let dir = line.direction.normalized();
    let side = dir.cross(&tri.normal()).normalized();
    let verts = tri.vertices();
    let offsets = verts.map(|v| side.dot(&(v - line.point)));
    let signs = offsets.map(|o| o.sign());

    if signs.iter().all(|s| *s > 0) || signs.iter().all(|s| *s < 0) {
        return Intersection::None;
    }

    let mut hits: Vec<Vector3<T>> = Vec::with_capacity(3);
    for i in 0..3 {
        if signs[i] == 0 {
            hits.push(verts[i]);
        }
        let j = (i + 1) % 3;
        if signs[i] * signs[j] < 0 {
            let t = offsets[i] / (offsets[i] - offsets[j]);
            hits.push(verts[i] + (verts[j] - verts[i]) * t);
        }
    }

    let mut params = hits.iter().map(|h| (*h - line.point).dot(&dir));
    let Some(first) = params.next() else {
        return Intersection::None;
    };
    let (lo, hi) = params.fold((first, first), |(lo, hi), t| (lo.min(t), hi.max(t)));

    let from = line.point + dir * lo;
    let to = line.point + dir * hi;
    if hi - lo <= T::length_eps() {
        Intersection::One(Segment3::point(from.midpoint(&to)))
    } else {
        Intersection::Interval(Segment3::new(&from, &to))
    }
}

/// Coplanar overlap test in 2D, after dropping the dominant axis of the
/// shared normal: vertex containment either way, then edge crossings.
fn coplanar_overlap<T: Scalar>(a: &Triangle<T>, b: &Triangle<T>) -> bool {
    let drop = a.normal().dominant_axis();
    let pa = a.vertices().map(|v| v.project_2d(drop));
    let pb = b.vertices().map(|v| v.project_2d(drop));

    if pa.iter().any(|p| point_in_triangle_2d(p, &pb))
        || pb.iter().any(|p| point_in_triangle_2d(p, &pa))
    {
        return true;
    }

    let edges = |t: &[Vector2<T>; 3]| {
        [
            Segment2::new(&t[0], &t[1]),
            Segment2::new(&t[1], &t[2]),
            Segment2::new(&t[2], &t[0]),
        ]
    };
    let ea = edges(&pa);
    let eb = edges(&pb);
    ea.iter()
        .any(|s| eb.iter().any(|r| s.find_intersection(r).is_hit()))
}

/// Return true if 2D point `p` lies inside (or on) the triangle `tri`.
fn point_in_triangle_2d<T: Scalar>(p: &Vector2<T>, tri: &[Vector2<T>; 3]) -> bool {
    let area = (tri[1] - tri[0]).perp_dot(&(tri[2] - tri[0]));
    if area == T::zero() {
        return false;
    }
    let orient = area.signum();
    (0..3).all(|i| {
        let a = tri[i];
        let b = tri[(i + 1) % 3];
        let edge = b - a;
        let len = edge.norm();
        // signed distance of p to the edge line, positive inside
        edge.perp_dot(&(*p - a)) * orient / len >= -T::length_eps()
    })
}

/// Classifies how two triangles meet.
///
/// 1. NaN or infinite coordinates in either operand give `Error`.
/// 2. Boxes that do not overlap give `None` before any plane is built.
/// 3. Collinear vertex sets are handled as the segment or point they span.
/// 4. Coplanar triangles are tested in 2D; equal ones give `Same`.
/// 5. Otherwise both triangles are clipped against the line where their
///    planes cross, and the two clipped parts are intersected.
pub fn tri_tri_intersection<T: Scalar>(a: &Triangle<T>, b: &Triangle<T>) -> Quantity {
    if !a.is_finite() || !b.is_finite() {
        return Quantity::Error;
    }
    if !a.area().intersects(&b.area()) {
        return Quantity::None;
    }

    match (a.shape(), b.shape()) {
        (Shape::Triangle, Shape::Triangle) => {}
        (Shape::Triangle, other) => return triangle_vs_degenerate(a, other),
        (other, Shape::Triangle) => return triangle_vs_degenerate(b, other),
        (sa, sb) => {
            return as_segment(sa).find_intersection(&as_segment(sb)).quantity();
        }
    }

    let line = match a.plane().find_intersection(&b.plane()) {
        Intersection::Interval(line) => line,
        Intersection::Same => {
            return if a == b {
                Quantity::Same
            } else if coplanar_overlap(a, b) {
                Quantity::Interval
            } else {
                Quantity::None
            };
        }
        Intersection::None | Intersection::One(_) => return Quantity::None,
        Intersection::Error => return Quantity::Error,
    };

    let part_a = match a.find_intersection(&line) {
        Intersection::One(s) | Intersection::Interval(s) => s,
        other => return other.quantity(),
    };
    let part_b = match b.find_intersection(&line) {
        Intersection::One(s) | Intersection::Interval(s) => s,
        other => return other.quantity(),
    };
    part_a.find_intersection(&part_b).quantity()
}

/// Boolean form of [`tri_tri_intersection`]. `Error` is not a hit.
pub fn tri_tri_intersects<T: Scalar>(a: &Triangle<T>, b: &Triangle<T>) -> bool {
    tri_tri_intersection(a, b).is_hit()
}

fn as_segment<T: Scalar>(shape: Shape<T>) -> Segment3<T> {
    match shape {
        Shape::Segment(s) => s,
        Shape::Point(p) => Segment3::point(p),
        // only called on degenerate shapes
        Shape::Triangle => Segment3::point(Vector3::nan()),
    }
}

fn triangle_vs_degenerate<T: Scalar>(tri: &Triangle<T>, shape: Shape<T>) -> Quantity {
    tri.find_intersection(&as_segment(shape)).quantity()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tri(c: [f64; 9]) -> Triangle<f64> {
        Triangle::from_coords(c)
    }

    #[test]
    fn line_through_interior_point() {
        let t = tri([0.0, 0.0, 0.0, 4.0, 0.0, 0.0, 0.0, 4.0, 0.0]);
        let line = Line3::new(Vector3::new(1.0, 1.0, 5.0), Vector3::new(0.0, 0.0, -1.0));
        assert_eq!(
            t.find_intersection(&line),
            Intersection::One(Segment3::point(Vector3::new(1.0, 1.0, 0.0)))
        );
    }

    #[test]
    fn coplanar_line_is_clipped_by_edges() {
        let t = tri([0.0, 0.0, 0.0, 4.0, 0.0, 0.0, 0.0, 4.0, 0.0]);
        let line = Line3::new(Vector3::new(-3.0, 1.0, 0.0), Vector3::new(1.0, 0.0, 0.0));
        assert_eq!(
            t.find_intersection(&line),
            Intersection::Interval(Segment3::new(
                &Vector3::new(0.0, 1.0, 0.0),
                &Vector3::new(3.0, 1.0, 0.0)
            ))
        );
    }

    #[test]
    fn coplanar_line_through_single_vertex() {
        let t = tri([0.0, 0.0, 0.0, 4.0, 0.0, 0.0, 0.0, 4.0, 0.0]);
        let line = Line3::new(Vector3::new(4.0, 0.0, 0.0), Vector3::new(1.0, 1.0, 0.0));
        assert_eq!(
            t.find_intersection(&line),
            Intersection::One(Segment3::point(Vector3::new(4.0, 0.0, 0.0)))
        );

        let miss = Line3::new(Vector3::new(5.0, 5.0, 0.0), Vector3::new(1.0, -1.0, 0.0));
        assert_eq!(t.find_intersection(&miss).quantity(), Quantity::None);
    }

    #[test]
    fn coplanar_line_along_an_edge() {
        let t = tri([0.0, 0.0, 0.0, 4.0, 0.0, 0.0, 0.0, 4.0, 0.0]);
        let line = Line3::new(Vector3::new(-1.0, 0.0, 0.0), Vector3::new(2.0, 0.0, 0.0));
        assert_eq!(
            t.find_intersection(&line),
            Intersection::Interval(Segment3::new(
                &Vector3::new(0.0, 0.0, 0.0),
                &Vector3::new(4.0, 0.0, 0.0)
            ))
        );
    }

    #[test]
    fn star_of_david_overlaps_without_contained_vertices() {
        let up = tri([0.0, 3.0, 0.0, -3.0, -1.5, 0.0, 3.0, -1.5, 0.0]);
        let down = tri([0.0, -3.0, 0.0, -3.0, 1.5, 0.0, 3.0, 1.5, 0.0]);
        assert_eq!(tri_tri_intersection(&up, &down), Quantity::Interval);
    }

    #[test]
    fn coplanar_apart() {
        let a = tri([0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0]);
        let b = tri([1.0, 1.0, 0.0, 2.0, 1.0, 0.0, 1.0, 2.0, 0.0]);
        assert_eq!(tri_tri_intersection(&a, &b), Quantity::None);
    }

    #[test]
    fn identical_triangles_are_same() {
        let a = tri([0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0]);
        let b = tri([0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0]);
        assert_eq!(tri_tri_intersection(&a, &b), Quantity::Same);
    }

    #[test]
    fn nan_is_error() {
        let a = tri([0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0]);
        let b = tri([f64::NAN, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0]);
        assert_eq!(tri_tri_intersection(&a, &b), Quantity::Error);
        assert!(!tri_tri_intersects(&a, &b));
    }
}
