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

use std::collections::BTreeSet;

use rand::Rng;
use tracing::{info, warn};

use crate::{
    error::OctreeError,
    geometry::{Aabb3, Triangle, Vector3, tri_tri_intersect::tri_tri_intersects},
    numeric::scalar::Scalar,
    octree::{OctreeConfig, Octree, Pair, QueryStats, brute_force_intersections},
};

/// A flat list of triangles to be checked for mutual intersections.
#[derive(Clone, Debug, Default)]
pub struct Scene<T: Scalar> {
    triangles: Vec<Triangle<T>>,
}

/// Outcome of an intersection query over a [`Scene`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Report {
    /// Intersecting pairs `(i, j)`, `i < j`, as scene indices.
    pub pairs: BTreeSet<Pair>,
    /// Triangles with NaN or infinite coordinates, excluded from the query.
    pub rejected: Vec<usize>,
    pub stats: QueryStats,
}

impl Report {
    /// Indices of the triangles taking part in at least one pair.
    pub fn indices(&self) -> BTreeSet<usize> {
        self.pairs.iter().flat_map(|&(i, j)| [i, j]).collect()
    }
}

impl<T: Scalar> Scene<T> {
    pub fn new(triangles: Vec<Triangle<T>>) -> Self {
        Scene { triangles }
    }

    /// Builds a scene from 9 coordinates per triangle. Trailing values that
    /// do not form a whole triangle are ignored.
    pub fn from_coords(coords: &[T]) -> Self {
        let triangles = coords
            .chunks_exact(9)
            .map(|c| {
                Triangle::new(
                    Vector3::new(c[0], c[1], c[2]),
                    Vector3::new(c[3], c[4], c[5]),
                    Vector3::new(c[6], c[7], c[8]),
                )
            })
            .collect();
        Scene { triangles }
    }

    /// Random triangles with vertices inside `[0, extent]^3`, each fitting a
    /// box of side `max_size`.
    pub fn random<R: Rng>(rng: &mut R, count: usize, extent: f64, max_size: f64) -> Self {
        let size = max_size.min(extent).max(0.0);
        let triangles = (0..count)
            .map(|_| {
                let anchor: [f64; 3] =
                    std::array::from_fn(|_| rng.random_range(0.0..=(extent - size)));
                let mut vertex = || {
                    Vector3::new(
                        T::lit(anchor[0] + rng.random_range(0.0..=size)),
                        T::lit(anchor[1] + rng.random_range(0.0..=size)),
                        T::lit(anchor[2] + rng.random_range(0.0..=size)),
                    )
                };
                let (a, b, c) = (vertex(), vertex(), vertex());
                Triangle::new(a, b, c)
            })
            .collect();
        Scene { triangles }
    }

    pub fn triangles(&self) -> &[Triangle<T>] {
        &self.triangles
    }

    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Indices of triangles carrying NaN or infinite coordinates.
    pub fn rejected(&self) -> Vec<usize> {
        self.triangles
            .iter()
            .enumerate()
            .filter(|(_, t)| !t.is_finite())
            .map(|(i, _)| i)
            .collect()
    }

    fn accepted(&self) -> impl Iterator<Item = (usize, &Triangle<T>)> {
        self.triangles.iter().enumerate().filter(|(_, t)| t.is_finite())
    }

    /// Union of the boxes of all accepted triangles.
    pub fn bounds(&self) -> Option<Aabb3<T>> {
        self.accepted()
            .map(|(_, t)| t.area())
            .reduce(|acc, a| acc.union(&a))
    }

    fn report_rejected(&self) -> Vec<usize> {
        let rejected = self.rejected();
        for i in &rejected {
            warn!(triangle = i, "triangle has invalid coordinates, excluded");
        }
        rejected
    }

    /// Builds the octree over the accepted triangles and collects every
    /// intersecting pair.
    pub fn find_intersections(&self, config: OctreeConfig) -> Result<Report, OctreeError> {
        let rejected = self.report_rejected();
        let mut stats = QueryStats::new();
        let Some(bounds) = self.bounds() else {
            return Ok(Report {
                pairs: BTreeSet::new(),
                rejected,
                stats,
            });
        };

        let mut tree = Octree::with_config(bounds, config);
        let mut index = Vec::with_capacity(self.triangles.len());
        for (i, t) in self.accepted() {
            tree.add(t)?;
            index.push(i);
        }
        tree.msplit();

        let pairs = tree
            .intersections_with(&mut stats, |a, b| tri_tri_intersects(*a, *b))
            .into_iter()
            .map(|(a, b)| (index[a], index[b]))
            .collect();

        info!(
            triangles = index.len(),
            nodes = tree.node_count(),
            depth = tree.depth(),
            tests = stats.pair_tests,
            hits = stats.hits,
            "octree query finished"
        );
        Ok(Report {
            pairs,
            rejected,
            stats,
        })
    }

    /// The all-pairs reference path.
    pub fn brute_force(&self) -> Report {
        let rejected = self.report_rejected();
        let mut stats = QueryStats::new();
        let (index, accepted): (Vec<usize>, Vec<&Triangle<T>>) = self.accepted().unzip();
        let pairs = brute_force_intersections(&accepted, &mut stats, |a, b| {
            tri_tri_intersects(*a, *b)
        })
        .into_iter()
        .map(|(a, b)| (index[a], index[b]))
        .collect();

        info!(
            triangles = index.len(),
            tests = stats.pair_tests,
            hits = stats.hits,
            "brute-force query finished"
        );
        Report {
            pairs,
            rejected,
            stats,
        }
    }
}
