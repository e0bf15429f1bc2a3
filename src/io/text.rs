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

use std::{
    io::{self, BufRead, Write},
    str::FromStr,
};

use crate::{error::InputError, geometry::Triangle, numeric::scalar::Scalar};

/// Reads `N` followed by `N * 9` whitespace-separated coordinates.
///
/// Tokens past the last triangle are ignored.
pub fn read_triangles<T, R>(reader: R) -> Result<Vec<Triangle<T>>, InputError>
where
    T: Scalar + FromStr,
    R: BufRead,
{
    let mut tokens = Vec::new();
    for line in reader.lines() {
        let line = line?;
        tokens.extend(line.split_whitespace().map(str::to_owned));
    }
    let mut tokens = tokens.into_iter().enumerate();

    let (_, count) = tokens.next().ok_or(InputError::MissingCount)?;
    let expected = count
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_mul(9))
        .ok_or_else(|| InputError::InvalidCount(count.clone()))?;

    let mut coords: Vec<T> = Vec::new();
    for (position, token) in tokens.take(expected) {
        let value = token
            .parse::<T>()
            .map_err(|_| InputError::InvalidNumber { token, position })?;
        coords.push(value);
    }
    if coords.len() < expected {
        return Err(InputError::Truncated {
            expected,
            found: coords.len(),
        });
    }

    Ok(coords
        .chunks_exact(9)
        .map(|c| {
            let mut buf = [T::zero(); 9];
            buf.copy_from_slice(c);
            Triangle::from_coords(buf)
        })
        .collect())
}

/// Writes triangles in the format accepted by [`read_triangles`].
pub fn write_triangles<T: Scalar, W: Write>(
    mut out: W,
    triangles: &[Triangle<T>],
) -> io::Result<()> {
    writeln!(out, "{}", triangles.len())?;
    for t in triangles {
        let coords: Vec<String> = t
            .vertices()
            .iter()
            .flat_map(|v| v.to_f64())
            .map(|c| c.to_string())
            .collect();
        writeln!(out, "{}", coords.join(" "))?;
    }
    out.flush()
}

/// One index per line, in the iterator's order.
pub fn write_indices<W, I>(mut out: W, indices: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = usize>,
{
    for i in indices {
        writeln!(out, "{i}")?;
    }
    out.flush()
}
