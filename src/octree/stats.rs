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

use std::ops::AddAssign;

/// Counters filled in by a query. Passed by `&mut` into the comparison
/// routines; nothing is kept in global state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct QueryStats {
    /// Narrow-phase predicate invocations.
    pub pair_tests: usize,
    /// Invocations that reported an intersection.
    pub hits: usize,
    pub nodes_visited: usize,
}

impl QueryStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record(&mut self, hit: bool) {
        self.pair_tests += 1;
        if hit {
            self.hits += 1;
        }
    }
}

impl AddAssign for QueryStats {
    fn add_assign(&mut self, rhs: Self) {
        self.pair_tests += rhs.pair_tests;
        self.hits += rhs.hits;
        self.nodes_visited += rhs.nodes_visited;
    }
}
