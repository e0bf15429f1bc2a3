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
        intersection::{FindIntersection, Intersection},
        line::Line3,
        vector::Vector3,
    },
    numeric::scalar::Scalar,
};

/// A plane through `point`, spanned by `u` and `v`.
#[derive(Clone, Copy, Debug)]
pub struct Plane<T: Scalar> {
    pub point: Vector3<T>,
    pub u: Vector3<T>,
    pub v: Vector3<T>,
    /// Unit normal `u x v`; NaN when `u` and `v` are collinear.
    pub normal: Vector3<T>,
}

impl<T: Scalar> Plane<T> {
    pub fn new(point: Vector3<T>, u: Vector3<T>, v: Vector3<T>) -> Self {
        let normal = if u.is_collinear(&v) {
            Vector3::nan()
        } else {
            u.cross(&v).normalized()
        };
        Plane {
            point,
            u,
            v,
            normal,
        }
    }

    pub fn from_points(a: &Vector3<T>, b: &Vector3<T>, c: &Vector3<T>) -> Self {
        Plane::new(*a, *b - *a, *c - *a)
    }

    pub fn is_valid(&self) -> bool {
        self.point.is_valid() && self.u.is_valid() && self.v.is_valid() && self.normal.is_valid()
    }

    /// `n . x` for every `x` on the plane.
    pub fn offset(&self) -> T {
        self.normal.dot(&self.point)
    }

    pub fn signed_distance(&self, p: &Vector3<T>) -> T {
        self.normal.dot(&(*p - self.point))
    }

    pub fn contains(&self, p: &Vector3<T>) -> bool {
        self.signed_distance(p).abs() <= T::length_eps()
    }
}

/// Two planes are equal when they are the same set of points.
impl<T: Scalar> PartialEq for Plane<T> {
    fn eq(&self, other: &Self) -> bool {
        self.is_valid()
            && other.is_valid()
            && self.normal.is_collinear(&other.normal)
            && self.contains(&other.point)
    }
}

impl<T: Scalar> FindIntersection for Plane<T> {
    type Output = Line3<T>;

    /// The crossing line is `c1 n1 + c2 n2 + t (n1 x n2)`, with `c1, c2`
    /// solving the 2x2 system `n_i . p = h_i`.
    fn find_intersection(&self, other: &Self) -> Intersection<Line3<T>> {
        if !self.is_valid() || !other.is_valid() {
            return Intersection::Error;
        }
        let n1 = &self.normal;
        let n2 = &other.normal;

        if n1.is_collinear(n2) {
            return if self.contains(&other.point) {
                Intersection::Same
            } else {
                Intersection::None
            };
        }

        let h1 = self.offset();
        let h2 = other.offset();
        let k = n1.dot(n2);
        let det = T::one() - k * k;

        let c1 = (h1 - h2 * k) / det;
        let c2 = (h2 - h1 * k) / det;
        let point = n1.scale(c1) + n2.scale(c2);
        let direction = n1.cross(n2).normalized();

        Intersection::Interval(Line3::new(point, direction))
    }
}

impl<T: Scalar> FindIntersection<Line3<T>> for Plane<T> {
    type Output = Vector3<T>;

    fn find_intersection(&self, line: &Line3<T>) -> Intersection<Vector3<T>> {
        if !self.is_valid() || !line.is_valid() {
            return Intersection::Error;
        }
        let dir = line.direction.normalized();
        let denom = self.normal.dot(&dir);

        if denom.abs() <= T::direction_eps() {
            return if self.contains(&line.point) {
                Intersection::Same
            } else {
                Intersection::None
            };
        }

        let t = -self.signed_distance(&line.point) / denom;
        Intersection::One(line.point + dir * t)
    }
}
