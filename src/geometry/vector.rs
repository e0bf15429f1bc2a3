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

use std::ops::{Add, AddAssign, Index, IndexMut, Mul, Neg, Sub, SubAssign};

use crate::numeric::scalar::Scalar;

/// A coordinate tuple in N dimensions, used both as a point and as a
/// displacement.
#[derive(Clone, Copy, Debug)]
pub struct Vector<T: Scalar, const N: usize> {
    pub coords: [T; N],
}

pub type Vector2<T> = Vector<T, 2>;
pub type Vector3<T> = Vector<T, 3>;

impl<T: Scalar, const N: usize> Vector<T, N> {
    pub fn from_coords(coords: [T; N]) -> Self {
        Self { coords }
    }

    pub fn zero() -> Self {
        Self {
            coords: [T::zero(); N],
        }
    }

    /// The invalid vector, returned wherever a result is undefined.
    pub fn nan() -> Self {
        Self {
            coords: [T::nan(); N],
        }
    }

    pub fn is_valid(&self) -> bool {
        self.coords.iter().all(|c| !c.is_nan())
    }

    /// No NaN and no infinite coordinate.
    pub fn is_finite(&self) -> bool {
        self.coords.iter().all(|c| c.is_finite())
    }

    pub fn dot(&self, other: &Self) -> T {
        self.coords
            .iter()
            .zip(other.coords.iter())
            .fold(T::zero(), |acc, (a, b)| acc + *a * *b)
    }

    pub fn norm_squared(&self) -> T {
        self.dot(self)
    }

    pub fn norm(&self) -> T {
        self.norm_squared().sqrt()
    }

    /// Unit vector in the same direction, or [`Vector::nan`] for a zero or
    /// invalid input.
    pub fn normalized(&self) -> Self {
        let n = self.norm();
        if !self.is_valid() || n == T::zero() {
            return Self::nan();
        }
        self.scale(T::one() / n)
    }

    pub fn scale(&self, k: T) -> Self {
        Self {
            coords: self.coords.map(|c| c * k),
        }
    }

    /// True when the length is within the length tolerance.
    pub fn is_zero(&self) -> bool {
        self.norm() <= T::length_eps()
    }

    /// Direction test: the sine of the angle between the two vectors is
    /// within the direction tolerance. A zero vector is collinear with
    /// everything.
    pub fn is_collinear(&self, other: &Self) -> bool {
        let aa = self.norm_squared();
        let bb = other.norm_squared();
        if aa == T::zero() || bb == T::zero() {
            return true;
        }
        let ab = self.dot(other);
        // Lagrange identity: |a x b|^2 = |a|^2 |b|^2 - (a.b)^2, in any dimension.
        let cross_sq = (aa * bb - ab * ab).max(T::zero());
        let eps = T::direction_eps();
        cross_sq <= eps * eps * aa * bb
    }

    pub fn distance_to(&self, other: &Self) -> T {
        (*other - *self).norm()
    }

    pub fn midpoint(&self, other: &Self) -> Self {
        (*self + *other).scale(T::half())
    }

    /// Component-wise minimum.
    pub fn min_by_coord(&self, other: &Self) -> Self {
        let mut out = *self;
        for i in 0..N {
            out.coords[i] = self.coords[i].min(other.coords[i]);
        }
        out
    }

    /// Component-wise maximum.
    pub fn max_by_coord(&self, other: &Self) -> Self {
        let mut out = *self;
        for i in 0..N {
            out.coords[i] = self.coords[i].max(other.coords[i]);
        }
        out
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.coords.iter()
    }

    pub fn to_f64(&self) -> [f64; N] {
        self.coords.map(|c| c.to_f64_lossy())
    }
}

impl<T: Scalar> Vector<T, 2> {
    pub fn new(x: T, y: T) -> Self {
        Self { coords: [x, y] }
    }

    pub fn x(&self) -> T {
        self.coords[0]
    }

    pub fn y(&self) -> T {
        self.coords[1]
    }

    /// The scalar 2D cross product.
    pub fn perp_dot(&self, other: &Self) -> T {
        self.coords[0] * other.coords[1] - self.coords[1] * other.coords[0]
    }
}

impl<T: Scalar> Vector<T, 3> {
    pub fn new(x: T, y: T, z: T) -> Self {
        Self { coords: [x, y, z] }
    }

    pub fn x(&self) -> T {
        self.coords[0]
    }

    pub fn y(&self) -> T {
        self.coords[1]
    }

    pub fn z(&self) -> T {
        self.coords[2]
    }

    pub fn cross(&self, other: &Self) -> Self {
        let [ax, ay, az] = self.coords;
        let [bx, by, bz] = other.coords;
        Self::new(ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx)
    }

    /// Drops axis `drop`, keeping the other two in ascending order.
    pub fn project_2d(&self, drop: usize) -> Vector2<T> {
        match drop {
            0 => Vector2::new(self.coords[1], self.coords[2]),
            1 => Vector2::new(self.coords[0], self.coords[2]),
            _ => Vector2::new(self.coords[0], self.coords[1]),
        }
    }

    /// Index of the coordinate with the largest magnitude.
    pub fn dominant_axis(&self) -> usize {
        let a = self.coords.map(|c| c.abs());
        if a[0] >= a[1] && a[0] >= a[2] {
            0
        } else if a[1] >= a[2] {
            1
        } else {
            2
        }
    }
}

impl<T: Scalar, const N: usize> Default for Vector<T, N> {
    fn default() -> Self {
        Self::zero()
    }
}

/// Component-wise comparison within the length tolerance.
impl<T: Scalar, const N: usize> PartialEq for Vector<T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.coords
            .iter()
            .zip(other.coords.iter())
            .all(|(a, b)| a.approx_eq(*b))
    }
}

impl<T: Scalar, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;
    fn index(&self, i: usize) -> &Self::Output {
        &self.coords[i]
    }
}

impl<T: Scalar, const N: usize> IndexMut<usize> for Vector<T, N> {
    fn index_mut(&mut self, i: usize) -> &mut Self::Output {
        &mut self.coords[i]
    }
}

impl<T: Scalar, const N: usize> Add for Vector<T, N> {
    type Output = Self;
    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

impl<T: Scalar, const N: usize> AddAssign for Vector<T, N> {
    fn add_assign(&mut self, rhs: Self) {
        for (a, b) in self.coords.iter_mut().zip(rhs.coords) {
            *a = *a + b;
        }
    }
}

impl<T: Scalar, const N: usize> Sub for Vector<T, N> {
    type Output = Self;
    fn sub(mut self, rhs: Self) -> Self {
        self -= rhs;
        self
    }
}

impl<T: Scalar, const N: usize> SubAssign for Vector<T, N> {
    fn sub_assign(&mut self, rhs: Self) {
        for (a, b) in self.coords.iter_mut().zip(rhs.coords) {
            *a = *a - b;
        }
    }
}

impl<T: Scalar, const N: usize> Mul<T> for Vector<T, N> {
    type Output = Self;
    fn mul(self, k: T) -> Self {
        self.scale(k)
    }
}

impl<T: Scalar, const N: usize> Neg for Vector<T, N> {
    type Output = Self;
    fn neg(self) -> Self {
        Self {
            coords: self.coords.map(|c| -c),
        }
    }
}

impl<T: Scalar, const N: usize> From<[T; N]> for Vector<T, N> {
    fn from(coords: [T; N]) -> Self {
        Self { coords }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scaled_directions_stay_collinear() {
        let dirs = [
            Vector3::new(0.1, 0.7, 0.3),
            Vector3::new(-3.3, 0.01, 7.9),
            Vector3::new(1e-3, 2e-3, -7e-4),
        ];
        let factors = [0.3, 1.7, -2.3, 3.141_592_653, 1e3, -1e-2, 0.1 + 0.2];
        for d in dirs {
            for k in factors {
                assert!(d.is_collinear(&d.scale(k)), "{d:?} * {k}");
            }
        }
        let flat = Vector2::new(0.1, 0.7);
        assert!(flat.is_collinear(&(flat * 0.3)));
    }

    #[test]
    fn small_angles_are_not_collinear() {
        let a = Vector3::new(1.0, 0.0, 0.0);
        let b = Vector3::new(1.0, 1e-5, 0.0);
        assert!(!a.is_collinear(&b));
        assert!(a.is_collinear(&Vector3::zero()));
    }

    #[test]
    fn normalizing_zero_gives_nan() {
        assert!(!Vector3::<f64>::zero().normalized().is_valid());
        let n = Vector3::new(3.0, 0.0, 4.0).normalized();
        assert_eq!(n, Vector3::new(0.6, 0.0, 0.8));
    }
}
