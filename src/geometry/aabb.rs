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
        segment::Segment1,
        vector::{Vector, Vector3},
    },
    numeric::scalar::Scalar,
};

/// An axis‐aligned bounding box in N dimensions.
#[derive(Clone, Copy, Debug)]
pub struct Aabb<T: Scalar, const N: usize> {
    pub min: Vector<T, N>,
    pub max: Vector<T, N>,
}

pub type Aabb3<T> = Aabb<T, 3>;

impl<T: Scalar, const N: usize> Aabb<T, N> {
    /// Box spanned by two opposite corners, in any order.
    pub fn new(a: Vector<T, N>, b: Vector<T, N>) -> Self {
        Aabb {
            min: a.min_by_coord(&b),
            max: a.max_by_coord(&b),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.min.is_valid() && self.max.is_valid()
    }

    pub fn union(&self, other: &Self) -> Self {
        Aabb {
            min: self.min.min_by_coord(&other.min),
            max: self.max.max_by_coord(&other.max),
        }
    }

    /// Extent along axis `i` as a scalar interval.
    pub fn axis(&self, i: usize) -> Segment1<T> {
        Segment1::new(self.min[i], self.max[i])
    }

    /// Does this AABB intersect `other`? Boxes closer than the length
    /// tolerance count as touching.
    pub fn intersects(&self, other: &Self) -> bool {
        (0..N).all(|i| self.axis(i).intersects(&other.axis(i)))
    }

    /// Is `other` inside this box, within the length tolerance?
    pub fn contains(&self, other: &Self) -> bool {
        if !self.is_valid() || !other.is_valid() {
            return false;
        }
        let eps = T::length_eps();
        (0..N).all(|i| other.min[i] >= self.min[i] - eps && other.max[i] <= self.max[i] + eps)
    }

    pub fn center(&self) -> Vector<T, N> {
        self.min.midpoint(&self.max)
    }

    /// Length along axis `i`.
    pub fn extent(&self, i: usize) -> T {
        self.max[i] - self.min[i]
    }
}

impl<T: Scalar> Aabb<T, 3> {
    /// The 8 boxes obtained by bisecting along every axis. Bit `k` of the
    /// index selects the upper half along axis `k`.
    pub fn octants(&self) -> [Aabb<T, 3>; 8] {
        let c = self.center();
        std::array::from_fn(|idx| {
            let mut lo = self.min;
            let mut hi = c;
            for axis in 0..3 {
                if idx & (1 << axis) != 0 {
                    lo[axis] = c[axis];
                    hi[axis] = self.max[axis];
                }
            }
            Aabb { min: lo, max: hi }
        })
    }

    /// Index of the single octant that holds `area` with at least `margin`
    /// clearance from every center plane, or `None` if it straddles or
    /// touches one.
    pub fn octant_of(&self, area: &Aabb<T, 3>, margin: T) -> Option<usize> {
        let c: Vector3<T> = self.center();
        let mut idx = 0;
        for axis in 0..3 {
            if area.max[axis] < c[axis] - margin {
                continue;
            } else if area.min[axis] > c[axis] + margin {
                idx |= 1 << axis;
            } else {
                return None;
            }
        }
        Some(idx)
    }
}

impl<T: Scalar, const N: usize> PartialEq for Aabb<T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.min == other.min && self.max == other.max
    }
}

impl<T: Scalar, const N: usize> FindIntersection for Aabb<T, N> {
    type Output = Aabb<T, N>;

    /// The overlap box. `One` when it collapses to a point.
    fn find_intersection(&self, other: &Self) -> Intersection<Aabb<T, N>> {
        if !self.is_valid() || !other.is_valid() {
            return Intersection::Error;
        }
        let mut min = self.min;
        let mut max = self.max;
        let mut all_points = true;
        for i in 0..N {
            match self.axis(i).find_intersection(&other.axis(i)) {
                Intersection::One(s) => {
                    min[i] = s.a();
                    max[i] = s.b();
                }
                Intersection::Interval(s) => {
                    min[i] = s.a();
                    max[i] = s.b();
                    all_points = false;
                }
                _ => return Intersection::None,
            }
        }
        let overlap = Aabb { min, max };
        if all_points {
            Intersection::One(overlap)
        } else {
            Intersection::Interval(overlap)
        }
    }
}
