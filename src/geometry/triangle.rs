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

use std::cmp::Ordering;

use crate::{
    geometry::{
        aabb::Aabb3,
        plane::Plane,
        segment::Segment3,
        vector::Vector3,
    },
    numeric::scalar::Scalar,
};

/// A triangle in 3D.
///
/// Vertices are kept sorted by magnitude (ties broken lexicographically), so
/// triangles built from any permutation of the same three points compare
/// equal.
#[derive(Clone, Copy, Debug)]
pub struct Triangle<T: Scalar> {
    vertices: [Vector3<T>; 3],
}

/// What a triangle's vertex set actually spans.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape<T: Scalar> {
    Triangle,
    /// Collinear vertices: the segment between the two farthest ones.
    Segment(Segment3<T>),
    Point(Vector3<T>),
}

fn canonical_order<T: Scalar>(a: &Vector3<T>, b: &Vector3<T>) -> Ordering {
    a.norm_squared()
        .partial_cmp(&b.norm_squared())
        .unwrap_or(Ordering::Equal)
        .then_with(|| {
            a.iter()
                .zip(b.iter())
                .map(|(x, y)| x.partial_cmp(y).unwrap_or(Ordering::Equal))
                .find(|o| *o != Ordering::Equal)
                .unwrap_or(Ordering::Equal)
        })
}

impl<T: Scalar> Triangle<T> {
    pub fn new(a: Vector3<T>, b: Vector3<T>, c: Vector3<T>) -> Self {
        let mut vertices = [a, b, c];
        vertices.sort_by(canonical_order);
        Triangle { vertices }
    }

    /// Builds a triangle from 9 coordinates `x0 y0 z0 x1 ... z2`.
    pub fn from_coords(c: [T; 9]) -> Self {
        Triangle::new(
            Vector3::new(c[0], c[1], c[2]),
            Vector3::new(c[3], c[4], c[5]),
            Vector3::new(c[6], c[7], c[8]),
        )
    }

    pub fn vertices(&self) -> &[Vector3<T>; 3] {
        &self.vertices
    }

    pub fn edges(&self) -> [Segment3<T>; 3] {
        let [a, b, c] = &self.vertices;
        [Segment3::new(a, b), Segment3::new(b, c), Segment3::new(c, a)]
    }

    /// No NaN or infinite coordinates.
    pub fn is_finite(&self) -> bool {
        self.vertices.iter().all(|v| v.is_finite())
    }

    /// Finite and non-collinear.
    pub fn is_valid(&self) -> bool {
        self.is_finite() && matches!(self.shape(), Shape::Triangle)
    }

    pub fn shape(&self) -> Shape<T> {
        let [a, b, c] = &self.vertices;
        let ab = *b - *a;
        let ac = *c - *a;
        if !ab.is_zero() && !ac.is_zero() && !ab.is_collinear(&ac) {
            return Shape::Triangle;
        }
        let pairs = [(a, b), (b, c), (c, a)];
        let (p, q) = pairs
            .into_iter()
            .max_by(|x, y| {
                x.0.distance_to(x.1)
                    .partial_cmp(&y.0.distance_to(y.1))
                    .unwrap_or(Ordering::Equal)
            })
            .unwrap_or((a, b));
        if p.distance_to(q) <= T::length_eps() {
            Shape::Point(p.midpoint(q))
        } else {
            Shape::Segment(Segment3::new(p, q))
        }
    }

    pub fn plane(&self) -> Plane<T> {
        let [a, b, c] = &self.vertices;
        Plane::from_points(a, b, c)
    }

    /// Unit normal following the canonical vertex order.
    pub fn normal(&self) -> Vector3<T> {
        self.plane().normal
    }

    pub fn area(&self) -> Aabb3<T> {
        let [a, b, c] = &self.vertices;
        Aabb3::new(*a, *b).union(&Aabb3::new(*c, *c))
    }

    /// Whether `p` lies on the triangle, boundary included.
    ///
    /// `p` must be within the length tolerance of the plane, and its signed
    /// distance to each edge line (measured inward) must not fall below
    /// `-length_eps`.
    pub fn contains(&self, p: &Vector3<T>) -> bool {
        if !self.is_valid() || !p.is_valid() {
            return false;
        }
        let n = self.normal();
        if n.dot(&(*p - self.vertices[0])).abs() > T::length_eps() {
            return false;
        }
        (0..3).all(|i| {
            let a = self.vertices[i];
            let b = self.vertices[(i + 1) % 3];
            let edge = b - a;
            let inward = n.cross(&edge).normalized();
            inward.dot(&(*p - a)) >= -T::length_eps()
        })
    }
}

impl<T: Scalar> PartialEq for Triangle<T> {
    fn eq(&self, other: &Self) -> bool {
        self.vertices == other.vertices
    }
}
