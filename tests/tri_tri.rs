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

use trisect::geometry::{Quantity, Triangle, Vector3, tri_tri_intersection, tri_tri_intersects};

fn tri(c: [f64; 9]) -> Triangle<f64> {
    Triangle::from_coords(c)
}

#[test]
fn vertical_needle_touches_the_floor() {
    let floor = tri([0.0, 0.0, 0.0, 0.0, 10.0, 0.0, 15.0, 0.0, 0.0]);
    let needle = tri([1.0, 1.0, 0.0, 1.0, 1.0, 1.0, 1.0, 1.0, -1.0]);
    assert!(tri_tri_intersects(&floor, &needle));
    assert!(tri_tri_intersects(&needle, &floor));
    assert_eq!(tri_tri_intersection(&floor, &needle), Quantity::One);
}

#[test]
fn stacked_triangles_are_rejected_by_their_boxes() {
    let low = tri([0.0, 0.0, 0.0, 1.0, 0.0, 1.0, 0.0, 1.0, 0.5]);
    let high = tri([0.0, 0.0, 5.0, 1.0, 0.0, 6.0, 0.0, 1.0, 5.5]);
    assert_eq!(tri_tri_intersection(&low, &high), Quantity::None);
}

#[test]
fn coplanar_contained_triangle() {
    let outer = tri([0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0]);
    let inner = tri([0.1, 0.1, 0.0, 0.9, 0.1, 0.0, 0.1, 0.9, 0.0]);
    let far = tri([2.0, 2.0, 0.0, 3.0, 2.0, 0.0, 2.0, 3.0, 0.0]);
    assert!(tri_tri_intersects(&outer, &inner));
    assert!(tri_tri_intersects(&inner, &outer));
    assert!(!tri_tri_intersects(&outer, &far));
}

#[test]
fn coplanar_triangles_sharing_a_vertex() {
    let a = tri([0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0]);
    let b = tri([0.0, 0.0, 0.0, -1.0, 0.0, 0.0, 0.0, -1.0, 0.0]);
    assert!(tri_tri_intersects(&a, &b));
}

#[test]
fn crossing_through_the_interior() {
    let floor = tri([0.0, 0.0, 0.0, 4.0, 0.0, 0.0, 0.0, 4.0, 0.0]);
    let wall = tri([1.0, 1.0, -1.0, 1.0, 1.0, 1.0, 2.0, 1.0, 0.0]);
    assert_eq!(tri_tri_intersection(&floor, &wall), Quantity::Interval);
    assert!(tri_tri_intersects(&wall, &floor));

    let wide = tri([-1.0, 1.0, -1.0, 5.0, 1.0, -1.0, 2.0, 1.0, 2.0]);
    assert!(tri_tri_intersects(&floor, &wide));
}

#[test]
fn wall_beside_the_triangle_misses() {
    let floor = tri([0.0, 0.0, 0.0, 4.0, 0.0, 0.0, 0.0, 4.0, 0.0]);
    // reaches z = 0 only past the floor's hypotenuse
    let wall = tri([3.6, 0.5, -1.0, 3.6, 0.5, 1.0, 5.0, 0.5, 0.0]);
    assert!(!tri_tri_intersects(&floor, &wall));
}

#[test]
fn vertex_permutations_give_the_same_answer() {
    let a = [0.0, 0.0, 0.0, 4.0, 0.0, 0.0, 0.0, 4.0, 0.0];
    let b = [1.0, 1.0, -1.0, 1.0, 1.0, 1.0, 2.0, 1.0, 0.0];
    let rotated = [b[3], b[4], b[5], b[6], b[7], b[8], b[0], b[1], b[2]];
    assert_eq!(tri(b), tri(rotated));
    assert_eq!(
        tri_tri_intersection(&tri(a), &tri(b)),
        tri_tri_intersection(&tri(a), &tri(rotated))
    );
}

#[test]
fn degenerate_against_degenerate() {
    let seg_a = tri([0.0, 0.0, 0.0, 1.0, 1.0, 0.0, 2.0, 2.0, 0.0]);
    let seg_b = tri([0.0, 2.0, 0.0, 1.0, 1.0, 0.0, 2.0, 0.0, 0.0]);
    let dot = tri([1.0, 1.0, 0.0, 1.0, 1.0, 0.0, 1.0, 1.0, 0.0]);
    let far_dot = tri([1.0, 1.5, 0.0, 1.0, 1.5, 0.0, 1.0, 1.5, 0.0]);
    assert_eq!(tri_tri_intersection(&seg_a, &seg_b), Quantity::One);
    assert!(tri_tri_intersects(&seg_a, &dot));
    assert!(!tri_tri_intersects(&seg_a, &far_dot));
}

#[test]
fn nan_coordinates_are_errors() {
    let good = tri([0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0]);
    let bad = tri([0.0, f64::NAN, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0]);
    assert_eq!(tri_tri_intersection(&good, &bad), Quantity::Error);
    assert_eq!(tri_tri_intersection(&bad, &good), Quantity::Error);
    assert!(!tri_tri_intersects(&bad, &bad));
}

#[test]
fn single_precision_scene() {
    let floor = Triangle::<f32>::from_coords([0.0, 0.0, 0.0, 4.0, 0.0, 0.0, 0.0, 4.0, 0.0]);
    let wall = Triangle::<f32>::from_coords([1.0, 1.0, -1.0, 1.0, 1.0, 1.0, 2.0, 1.0, 0.0]);
    assert!(tri_tri_intersects(&floor, &wall));
}

/// Maps plane coordinates `(s, t)` onto a tilted, skewed basis.
fn tilted(points: [(f64, f64); 3]) -> Triangle<f64> {
    let o = Vector3::new(1.3, -0.7, 2.1);
    let u = Vector3::new(0.3, 0.9, -0.4);
    let v = Vector3::new(-0.8, 0.2, 0.5);
    let [a, b, c] = points.map(|(s, t)| o + u * s + v * t);
    Triangle::new(a, b, c)
}

#[test]
fn coplanar_triangles_in_a_tilted_plane() {
    let outer = tilted([(0.0, 0.0), (4.0, 0.0), (0.0, 4.0)]);
    let inner = tilted([(0.5, 0.5), (2.0, 0.5), (0.5, 2.0)]);
    assert_eq!(tri_tri_intersection(&outer, &inner), Quantity::Interval);
    assert_eq!(tri_tri_intersection(&inner, &outer), Quantity::Interval);

    let up = tilted([(0.0, 3.0), (-3.0, -1.5), (3.0, -1.5)]);
    let down = tilted([(0.0, -3.0), (-3.0, 1.5), (3.0, 1.5)]);
    assert!(tri_tri_intersects(&up, &down));

    let a = tilted([(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)]);
    let b = tilted([(1.0, 1.0), (2.0, 1.0), (1.0, 2.0)]);
    assert!(!tri_tri_intersects(&a, &b));
}

#[test]
fn shallow_dihedral_crossing() {
    let floor = tri([0.0, 0.0, 0.0, 10.0, 0.0, 0.0, 0.0, 10.0, 0.0]);
    // crosses z = 0 along x = 3, y in [1.8, 4.8]
    let ramp = tri([1.0, 1.0, -0.02, 1.0, 6.0, -0.02, 6.0, 3.0, 0.03]);
    assert_eq!(tri_tri_intersection(&floor, &ramp), Quantity::Interval);
    assert_eq!(tri_tri_intersection(&ramp, &floor), Quantity::Interval);
}

#[test]
fn infinite_coordinates_are_errors() {
    let good = tri([0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0]);
    let far = tri([0.0, 0.0, f64::INFINITY, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0]);
    assert_eq!(tri_tri_intersection(&good, &far), Quantity::Error);
}
