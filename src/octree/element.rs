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
    geometry::{Aabb3, Triangle, tri_tri_intersect::tri_tri_intersects},
    numeric::scalar::Scalar,
};

/// Anything that can report an axis-aligned box around itself.
pub trait Bounded {
    type Scalar: Scalar;

    fn area(&self) -> Aabb3<Self::Scalar>;
}

/// Exact pairwise test used by the narrow phase.
pub trait Intersects {
    fn intersects(&self, other: &Self) -> bool;
}

impl<T: Scalar> Bounded for Triangle<T> {
    type Scalar = T;

    fn area(&self) -> Aabb3<T> {
        Triangle::area(self)
    }
}

impl<T: Scalar> Intersects for Triangle<T> {
    fn intersects(&self, other: &Self) -> bool {
        tri_tri_intersects(self, other)
    }
}

impl<E: Bounded> Bounded for &E {
    type Scalar = E::Scalar;

    fn area(&self) -> Aabb3<E::Scalar> {
        (**self).area()
    }
}

impl<E: Intersects> Intersects for &E {
    fn intersects(&self, other: &Self) -> bool {
        (**self).intersects(*other)
    }
}

impl<T: Scalar> Bounded for Aabb3<T> {
    type Scalar = T;

    fn area(&self) -> Aabb3<T> {
        *self
    }
}

impl<T: Scalar> Intersects for Aabb3<T> {
    fn intersects(&self, other: &Self) -> bool {
        Aabb3::intersects(self, other)
    }
}
