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

use num_traits::Float;
use std::fmt::Debug;

/// Floating point coordinate type used throughout the geometry layer.
///
/// Two tolerance domains are carried per type. Lengths (point equality,
/// containment, distances) are compared against `length_eps`; directions
/// (parallelism and collinearity) against `direction_eps`, expressed as the
/// sine of the angle between them.
pub trait Scalar: Float + Debug + Default + Send + Sync + 'static {
    fn length_eps() -> Self;

    /// Compared squared against squared sines, so it must stay well above
    /// the square root of the machine epsilon.
    fn direction_eps() -> Self;

    /// Converts an `f64` literal into this scalar type.
    fn lit(value: f64) -> Self;

    fn to_f64_lossy(self) -> f64;

    #[inline(always)]
    fn approx_eq(self, other: Self) -> bool {
        (self - other).abs() <= Self::length_eps()
    }

    #[inline(always)]
    fn is_approx_zero(self) -> bool {
        self.abs() <= Self::length_eps()
    }

    /// Returns -1, 0, or +1 using the length tolerance as the dead zone.
    fn sign(self) -> i8 {
        if self > Self::length_eps() {
            1
        } else if self < -Self::length_eps() {
            -1
        } else {
            0
        }
    }

    fn half() -> Self {
        Self::lit(0.5)
    }
}

impl Scalar for f64 {
    #[inline(always)]
    fn length_eps() -> Self {
        1e-6
    }

    #[inline(always)]
    fn direction_eps() -> Self {
        1e-7
    }

    #[inline(always)]
    fn lit(value: f64) -> Self {
        value
    }

    #[inline(always)]
    fn to_f64_lossy(self) -> f64 {
        self
    }
}

impl Scalar for f32 {
    #[inline(always)]
    fn length_eps() -> Self {
        1e-4
    }

    #[inline(always)]
    fn direction_eps() -> Self {
        1e-3
    }

    #[inline(always)]
    fn lit(value: f64) -> Self {
        value as f32
    }

    #[inline(always)]
    fn to_f64_lossy(self) -> f64 {
        self as f64
    }
}
