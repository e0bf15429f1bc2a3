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

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum OctreeError {
    /// The element's box is not inside the tree's root box. The root must be
    /// sized from the union of all inputs before insertion.
    #[error("element box {min:?}..{max:?} lies outside the tree bounds {root_min:?}..{root_max:?}")]
    OutOfBounds {
        min: [f64; 3],
        max: [f64; 3],
        root_min: [f64; 3],
        root_max: [f64; 3],
    },
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("residual ratio must lie in [0, 1], got {0}")]
    ResidualRatio(f64),
    #[error("min_split_items must be at least 2, got {0}")]
    MinSplitItems(usize),
    #[error("max_depth must be positive")]
    ZeroDepth,
}

#[derive(Debug, Error)]
pub enum InputError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("input is empty, expected a triangle count")]
    MissingCount,
    #[error("invalid triangle count {0:?}")]
    InvalidCount(String),
    #[error("invalid number {token:?} at position {position}")]
    InvalidNumber { token: String, position: usize },
    #[error("expected {expected} coordinates, found {found}")]
    Truncated { expected: usize, found: usize },
    #[error("line {line}: {message}")]
    Obj { line: usize, message: String },
}
