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

/// Classification of an intersection between two primitives.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Quantity {
    None,
    One,
    Interval,
    Same,
    /// One of the operands failed its own validity check.
    Error,
}

impl Quantity {
    /// Whether the primitives share at least one point.
    pub fn is_hit(self) -> bool {
        matches!(self, Quantity::One | Quantity::Interval | Quantity::Same)
    }
}

/// Result of a pairwise intersection. `One` and `Interval` carry the
/// geometry where it is bounded; `Same` means the operands coincide.
#[derive(Clone, Debug, PartialEq)]
pub enum Intersection<G> {
    None,
    One(G),
    Interval(G),
    Same,
    Error,
}

impl<G> Intersection<G> {
    pub fn quantity(&self) -> Quantity {
        match self {
            Intersection::None => Quantity::None,
            Intersection::One(_) => Quantity::One,
            Intersection::Interval(_) => Quantity::Interval,
            Intersection::Same => Quantity::Same,
            Intersection::Error => Quantity::Error,
        }
    }

    pub fn into_geometry(self) -> Option<G> {
        match self {
            Intersection::One(g) | Intersection::Interval(g) => Some(g),
            _ => None,
        }
    }

    pub fn is_hit(&self) -> bool {
        self.quantity().is_hit()
    }

    pub fn map<H, F: FnOnce(G) -> H>(self, f: F) -> Intersection<H> {
        match self {
            Intersection::None => Intersection::None,
            Intersection::One(g) => Intersection::One(f(g)),
            Intersection::Interval(g) => Intersection::Interval(f(g)),
            Intersection::Same => Intersection::Same,
            Intersection::Error => Intersection::Error,
        }
    }
}

/// Pairwise intersection between two primitive kinds.
pub trait FindIntersection<Rhs = Self> {
    type Output;

    fn find_intersection(&self, other: &Rhs) -> Intersection<Self::Output>;

    /// `Error` never counts as an intersection.
    fn intersects(&self, other: &Rhs) -> bool {
        self.find_intersection(other).is_hit()
    }
}
