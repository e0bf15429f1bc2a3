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

//! Detection of intersecting pairs in a triangle soup.
//!
//! The [`geometry`] module holds the primitives and their pairwise
//! intersection predicates, [`octree`] the spatial index that prunes the
//! candidate pairs, and [`scene`] ties both together.

pub mod error;
pub mod geometry;
pub mod io;
pub mod numeric;
pub mod octree;
pub mod scene;

pub use error::{ConfigError, InputError, OctreeError};
pub use geometry::{
    Aabb3, FindIntersection, Intersection, Quantity, Triangle, Vector3, tri_tri_intersection,
    tri_tri_intersects,
};
pub use numeric::scalar::Scalar;
pub use octree::{Octree, OctreeConfig, QueryStats};
pub use scene::{Report, Scene};
