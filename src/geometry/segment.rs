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
        line::Line,
        vector::Vector,
    },
    numeric::scalar::Scalar,
};

/// A closed scalar interval `[a, b]`. Construction swaps reversed bounds.
#[derive(Clone, Copy, Debug)]
pub struct Segment1<T: Scalar> {
    a: T,
    b: T,
}

impl<T: Scalar> Segment1<T> {
    pub fn new(a: T, b: T) -> Self {
        if b < a { Self { a: b, b: a } } else { Self { a, b } }
    }

    pub fn point(x: T) -> Self {
        Self { a: x, b: x }
    }

    pub fn a(&self) -> T {
        self.a
    }

    pub fn b(&self) -> T {
        self.b
    }

    pub fn is_valid(&self) -> bool {
        !self.a.is_nan() && !self.b.is_nan()
    }

    pub fn length(&self) -> T {
        self.b - self.a
    }

    pub fn contains(&self, x: T) -> bool {
        let eps = T::length_eps();
        x >= self.a - eps && x <= self.b + eps
    }
}

impl<T: Scalar> PartialEq for Segment1<T> {
    fn eq(&self, other: &Self) -> bool {
        self.a.approx_eq(other.a) && self.b.approx_eq(other.b)
    }
}

impl<T: Scalar> FindIntersection for Segment1<T> {
    type Output = Segment1<T>;

    fn find_intersection(&self, other: &Self) -> Intersection<Segment1<T>> {
        if !self.is_valid() || !other.is_valid() {
            return Intersection::Error;
        }
        let lo = self.a.max(other.a);
        let hi = self.b.min(other.b);
        let eps = T::length_eps();

        if hi < lo - eps {
            Intersection::None
        } else if hi - lo <= eps {
            Intersection::One(Segment1::point((lo + hi) * T::half()))
        } else {
            Intersection::Interval(Segment1::new(lo, hi))
        }
    }
}

/// The bounded part `point + t * direction`, `t` in `[0, 1]`, of a line.
#[derive(Clone, Copy, Debug)]
pub struct Segment<T: Scalar, const N: usize> {
    pub point: Vector<T, N>,
    pub direction: Vector<T, N>,
}

pub type Segment2<T> = Segment<T, 2>;
pub type Segment3<T> = Segment<T, 3>;

impl<T: Scalar, const N: usize> Segment<T, N> {
    /// Segment from endpoint `a` to endpoint `b`.
    pub fn new(a: &Vector<T, N>, b: &Vector<T, N>) -> Self {
        Self {
            point: *a,
            direction: *b - *a,
        }
    }

    /// A point-degenerate segment.
    pub fn point(p: Vector<T, N>) -> Self {
        Self {
            point: p,
            direction: Vector::zero(),
        }
    }

    pub fn a(&self) -> Vector<T, N> {
        self.point
    }

    pub fn b(&self) -> Vector<T, N> {
        self.point + self.direction
    }

    pub fn is_valid(&self) -> bool {
        self.point.is_valid() && self.direction.is_valid()
    }

    pub fn is_point(&self) -> bool {
        self.direction.is_zero()
    }

    pub fn length(&self) -> T {
        self.direction.norm()
    }

    pub fn line(&self) -> Line<T, N> {
        Line::new(self.point, self.direction)
    }

    pub fn contains(&self, p: &Vector<T, N>) -> bool {
        if self.is_point() {
            return self.point == *p;
        }
        let line = self.line();
        if !line.contains(p) {
            return false;
        }
        let len = self.length();
        let t = (*p - self.point).dot(&self.direction) / len;
        Segment1::new(T::zero(), len).contains(t)
    }

    /// This segment and `other` as intervals on this segment's arc-length
    /// axis. Both are assumed to lie on the same line.
    fn project_pair(&self, other: &Self) -> (Segment1<T>, Segment1<T>, Vector<T, N>) {
        let len = self.length();
        let unit = self.direction.scale(T::one() / len);
        let ta = (other.a() - self.point).dot(&unit);
        let tb = (other.b() - self.point).dot(&unit);
        (Segment1::new(T::zero(), len), Segment1::new(ta, tb), unit)
    }
}

/// Endpoint equality, in either orientation.
impl<T: Scalar, const N: usize> PartialEq for Segment<T, N> {
    fn eq(&self, other: &Self) -> bool {
        (self.a() == other.a() && self.b() == other.b())
            || (self.a() == other.b() && self.b() == other.a())
    }
}

impl<T: Scalar, const N: usize> FindIntersection for Segment<T, N> {
    type Output = Segment<T, N>;

    fn find_intersection(&self, other: &Self) -> Intersection<Segment<T, N>> {
        if !self.is_valid() || !other.is_valid() {
            return Intersection::Error;
        }

        match (self.is_point(), other.is_point()) {
            (true, true) => {
                return if self.point == other.point {
                    Intersection::One(Segment::point(self.point.midpoint(&other.point)))
                } else {
                    Intersection::None
                };
            }
            (true, false) => {
                return if other.contains(&self.point) {
                    Intersection::One(Segment::point(self.point))
                } else {
                    Intersection::None
                };
            }
            (false, true) => {
                return if self.contains(&other.point) {
                    Intersection::One(Segment::point(other.point))
                } else {
                    Intersection::None
                };
            }
            (false, false) => {}
        }

        match self.line().find_intersection(&other.line()) {
            Intersection::One(p) => {
                if self.contains(&p) && other.contains(&p) {
                    Intersection::One(Segment::point(p))
                } else {
                    Intersection::None
                }
            }
            Intersection::Same => {
                let (own, theirs, unit) = self.project_pair(other);
                own.find_intersection(&theirs).map(|s| {
                    Segment::new(&(self.point + unit * s.a()), &(self.point + unit * s.b()))
                })
            }
            Intersection::Interval(_) | Intersection::None => Intersection::None,
            Intersection::Error => Intersection::Error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Vector2, Vector3, intersection::Quantity};

    #[test]
    fn reversed_bounds_are_swapped() {
        let s = Segment1::new(5.0, -10.0);
        assert_eq!(s.a(), -10.0);
        assert_eq!(s.b(), 5.0);
    }

    #[test]
    fn segment1_touching_and_overlapping() {
        let s = Segment1::new(-10.0, 5.0);
        assert_eq!(
            s.find_intersection(&Segment1::new(5.0, 10.0)),
            Intersection::One(Segment1::new(5.0, 5.0))
        );
        assert_eq!(
            s.find_intersection(&Segment1::new(-100.0, 213.0)),
            Intersection::Interval(Segment1::new(-10.0, 5.0))
        );
        assert_eq!(
            s.find_intersection(&Segment1::new(6.0, 10.0)).quantity(),
            Quantity::None
        );
    }

    #[test]
    fn segment1_nan_is_error() {
        let s = Segment1::new(0.0, 1.0);
        assert_eq!(
            s.find_intersection(&Segment1::new(f64::NAN, 1.0)).quantity(),
            Quantity::Error
        );
    }

    #[test]
    fn crossing_segments_2d() {
        let s1 = Segment2::new(&Vector2::new(0.0, 0.0), &Vector2::new(2.0, 2.0));
        let s2 = Segment2::new(&Vector2::new(0.0, 2.0), &Vector2::new(2.0, 0.0));
        assert_eq!(
            s1.find_intersection(&s2),
            Intersection::One(Segment2::point(Vector2::new(1.0, 1.0)))
        );
    }

    #[test]
    fn lines_cross_outside_the_segments() {
        let s1 = Segment2::new(&Vector2::new(0.0, 0.0), &Vector2::new(1.0, 0.0));
        let s2 = Segment2::new(&Vector2::new(2.0, -1.0), &Vector2::new(2.0, 1.0));
        assert_eq!(s1.find_intersection(&s2).quantity(), Quantity::None);
    }

    #[test]
    fn collinear_overlap_3d() {
        let s1 = Segment3::new(&Vector3::new(0.0, 0.0, 0.0), &Vector3::new(2.0, 0.0, 0.0));
        let s2 = Segment3::new(&Vector3::new(3.0, 0.0, 0.0), &Vector3::new(1.0, 0.0, 0.0));
        assert_eq!(
            s1.find_intersection(&s2),
            Intersection::Interval(Segment3::new(
                &Vector3::new(1.0, 0.0, 0.0),
                &Vector3::new(2.0, 0.0, 0.0)
            ))
        );
    }

    #[test]
    fn collinear_end_to_end_touch() {
        let s1 = Segment3::new(&Vector3::new(0.0, 0.0, 0.0), &Vector3::new(1.0, 1.0, 1.0));
        let s2 = Segment3::new(&Vector3::new(1.0, 1.0, 1.0), &Vector3::new(3.0, 3.0, 3.0));
        assert_eq!(
            s1.find_intersection(&s2),
            Intersection::One(Segment3::point(Vector3::new(1.0, 1.0, 1.0)))
        );
    }

    #[test]
    fn point_segment_against_segment() {
        let p = Segment3::point(Vector3::new(0.5, 0.0, 0.0));
        let s = Segment3::new(&Vector3::new(0.0, 0.0, 0.0), &Vector3::new(1.0, 0.0, 0.0));
        assert_eq!(p.find_intersection(&s).quantity(), Quantity::One);
        assert_eq!(s.find_intersection(&p).quantity(), Quantity::One);

        let q = Segment3::point(Vector3::new(1.5, 0.0, 0.0));
        assert_eq!(q.find_intersection(&s).quantity(), Quantity::None);
    }
}
