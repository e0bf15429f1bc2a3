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
    fs::File,
    io::{BufRead, BufReader, Write},
    path::Path,
    str::FromStr,
};

use crate::{
    error::InputError,
    geometry::{Triangle, Vector3},
    numeric::scalar::Scalar,
};

/// Reads a Wavefront OBJ file as a triangle soup.
pub fn load_obj<T, P>(path: P) -> Result<Vec<Triangle<T>>, InputError>
where
    T: Scalar + FromStr,
    P: AsRef<Path>,
{
    let file = File::open(path)?;
    read_obj(BufReader::new(file))
}

/// Reads `v` and `f` records; everything else is ignored.
///
/// Faces accept 1-based and negative (relative) indices in the `i`, `i/t`,
/// `i//n` and `i/t/n` forms. Polygons are fan-triangulated from their first
/// vertex.
pub fn read_obj<T, R>(reader: R) -> Result<Vec<Triangle<T>>, InputError>
where
    T: Scalar + FromStr,
    R: BufRead,
{
    let mut vertices: Vec<Vector3<T>> = Vec::new();
    let mut triangles = Vec::new();

    for (n, line) in reader.lines().enumerate() {
        let line = line?;
        let number = n + 1;
        let err = |message: String| InputError::Obj {
            line: number,
            message,
        };

        let mut parts = line.split_whitespace();
        match parts.next() {
            Some("v") => {
                let mut coords = [T::zero(); 3];
                for c in coords.iter_mut() {
                    let token = parts
                        .next()
                        .ok_or_else(|| err("vertex needs 3 coordinates".into()))?;
                    *c = token
                        .parse()
                        .map_err(|_| err(format!("invalid coordinate {token:?}")))?;
                }
                vertices.push(Vector3::new(coords[0], coords[1], coords[2]));
            }
            Some("f") => {
                let corners = parts
                    .map(|token| resolve_index(token, vertices.len()).map_err(&err))
                    .collect::<Result<Vec<_>, _>>()?;
                if corners.len() < 3 {
                    return Err(err(format!(
                        "face needs at least 3 vertices, got {}",
                        corners.len()
                    )));
                }
                for k in 1..corners.len() - 1 {
                    triangles.push(Triangle::new(
                        vertices[corners[0]],
                        vertices[corners[k]],
                        vertices[corners[k + 1]],
                    ));
                }
            }
            _ => {}
        }
    }

    Ok(triangles)
}

/// Maps one face token to a 0-based vertex index.
fn resolve_index(token: &str, count: usize) -> Result<usize, String> {
    let head = token.split('/').next().unwrap_or(token);
    let index: i64 = head
        .parse()
        .map_err(|_| format!("invalid vertex reference {token:?}"))?;
    let resolved = match index {
        0 => None,
        i if i > 0 => usize::try_from(i - 1).ok(),
        i => usize::try_from(i.unsigned_abs())
            .ok()
            .and_then(|back| count.checked_sub(back)),
    };
    resolved
        .filter(|&i| i < count)
        .ok_or_else(|| format!("vertex reference {index} out of range ({count} vertices)"))
}

/// Writes each triangle as its own three vertices and one face.
pub fn write_obj<T: Scalar, W: Write>(
    mut out: W,
    triangles: &[Triangle<T>],
) -> std::io::Result<()> {
    for t in triangles {
        for v in t.vertices() {
            let [x, y, z] = v.to_f64();
            writeln!(out, "v {x} {y} {z}")?;
        }
    }
    for i in 0..triangles.len() {
        let base = 3 * i + 1;
        writeln!(out, "f {} {} {}", base, base + 1, base + 2)?;
    }
    out.flush()
}
