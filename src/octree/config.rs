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

use crate::error::ConfigError;

/// Subdivision policy of an [`Octree`](crate::octree::Octree).
///
/// The settings change the shape of the tree, never the set of pairs a
/// query reports.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OctreeConfig {
    /// A leaf splits only if the elements that would stay behind make up at
    /// most this fraction of its current elements.
    pub residual_ratio: f64,
    /// Leaves holding fewer elements are never split.
    pub min_split_items: usize,
    /// Leaves at this level are never split. The root is level 0.
    pub max_depth: usize,
}

impl Default for OctreeConfig {
    fn default() -> Self {
        OctreeConfig {
            residual_ratio: 0.5,
            min_split_items: 2,
            max_depth: 32,
        }
    }
}

impl OctreeConfig {
    pub fn with_residual_ratio(mut self, ratio: f64) -> Self {
        self.residual_ratio = ratio;
        self
    }

    pub fn with_min_split_items(mut self, items: usize) -> Self {
        self.min_split_items = items;
        self
    }

    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.residual_ratio) {
            return Err(ConfigError::ResidualRatio(self.residual_ratio));
        }
        if self.min_split_items < 2 {
            return Err(ConfigError::MinSplitItems(self.min_split_items));
        }
        if self.max_depth == 0 {
            return Err(ConfigError::ZeroDepth);
        }
        Ok(())
    }

    /// Whether a leaf of `total` elements, `staying` of which would not fit a
    /// single child, is worth splitting.
    pub(crate) fn should_split(&self, staying: usize, total: usize) -> bool {
        total > 0 && (staying as f64) <= self.residual_ratio * total as f64
    }
}
