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
        vector::Vector,
    },
    numeric::scalar::Scalar,
};

/// An infinite line through `point` along `direction`.
#[derive(Clone, Copy, Debug)]
pub struct Line<T: Scalar, const N: usize> {
    pub point: Vector<T, N>,
    pub direction: Vector<T, N>,
}

pub type Line2<T> = Line<T, 2>;
pub type Line3<T> = Line<T, 3>;

impl<T: Scalar, const N: usize> Line<T, N> {
    pub fn new(point: Vector<T, N>, direction: Vector<T, N>) -> Self {
        Self { point, direction }
    }

    /// Line through two points, directed from `a` to `b`.
    pub fn through(a: &Vector<T, N>, b: &Vector<T, N>) -> Self {
        Self::new(*a, *b - *a)
    }

    pub fn is_valid(&self) -> bool {
        self.point.is_valid()
            && self.direction.is_valid()
            && self.direction.norm_squared() > T::zero()
    }

    pub fn point_at(&self, t: T) -> Vector<T, N> {
        self.point + self.direction * t
    }

    /// Parameter of the orthogonal projection of `p` onto the line, in
    /// units of `direction`.
    pub fn project(&self, p: &Vector<T, N>) -> T {
        (*p - self.point).dot(&self.direction) / self.direction.norm_squared()
    }

    pub fn distance_to(&self, p: &Vector<T, N>) -> T {
        let foot = self.point_at(self.project(p));
        foot.distance_to(p)
    }

    pub fn contains(&self, p: &Vector<T, N>) -> bool {
        self.distance_to(p) <= T::length_eps()
    }
}

/// Two lines are equal when they are the same set of points.
impl<T: Scalar, const N: usize> PartialEq for Line<T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.is_valid()
            && other.is_valid()
            && self.direction.is_collinear(&other.direction)
            && self.contains(&other.point)
    }
}

impl<T: Scalar, const N: usize> FindIntersection for Line<T, N> {
    type Output = Vector<T, N>;

    /// Solves `p1 + t d1 = p2 + s d2` in the least-squares sense. In 3D
    /// the two closest points must coincide for a hit.
    fn find_intersection(&self, other: &Self) -> Intersection<Vector<T, N>> {
        if !self.is_valid() || !other.is_valid() {
            return Intersection::Error;
        }

        let d1 = &self.direction;
        let d2 = &other.direction;
        let w = other.point - self.point;

        let a = d1.dot(d1);
        let b = d1.dot(d2);
        let c = d2.dot(d2);
        let e = w.dot(d1);
        let f = w.dot(d2);

        if d1.is_collinear(d2) {
            return if self.contains(&other.point) {
                Intersection::Same
            } else {
                Intersection::None
            };
        }

        let det = a * c - b * b;
        let t = (e * c - b * f) / det;
        let s = (b * e - a * f) / det;
        let q1 = self.point_at(t);
        let q2 = other.point_at(s);

        if q1.distance_to(&q2) > T::length_eps() {
            // skew
            return Intersection::None;
        }
        Intersection::One(q1.midpoint(&q2))
    }
}
