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

use trisect::geometry::{
    FindIntersection, Intersection, Line3, Plane, Quantity, Segment1, Segment2, Segment3,
    Triangle, Vector2, Vector3,
};

fn v3(x: f64, y: f64, z: f64) -> Vector3<f64> {
    Vector3::new(x, y, z)
}

#[test]
fn interval_touching_at_an_end() {
    let a = Segment1::new(-10.0, 5.0);
    let b = Segment1::new(5.0, 10.0);
    assert_eq!(a.find_intersection(&b), Intersection::One(Segment1::point(5.0)));
    assert_eq!(
        a.find_intersection(&b).into_geometry(),
        Some(Segment1::new(5.0, 5.0))
    );
}

#[test]
fn interval_inside_another() {
    let a = Segment1::new(-10.0, 5.0);
    let b = Segment1::new(-100.0, 213.0);
    assert_eq!(
        a.find_intersection(&b),
        Intersection::Interval(Segment1::new(-10.0, 5.0))
    );
    // reversed bounds are normalized on construction
    assert_eq!(Segment1::new(5.0, -10.0), a);
    assert_eq!(
        a.find_intersection(&Segment1::new(6.0, 7.0)).quantity(),
        Quantity::None
    );
}

#[test]
fn crossing_lines_meet_at_one_point() {
    let a = Line3::new(v3(-2.0, 0.0, 0.0), v3(1.0, 0.0, 0.0));
    let b = Line3::new(v3(3.0, 4.0, 0.0), v3(0.0, -2.0, 0.0));
    assert_eq!(a.find_intersection(&b), Intersection::One(v3(3.0, 0.0, 0.0)));
}

#[test]
fn parallel_lines() {
    let a = Line3::new(v3(0.0, 0.0, 0.0), v3(1.0, 1.0, 0.0));
    let same = Line3::new(v3(5.0, 5.0, 0.0), v3(-2.0, -2.0, 0.0));
    let apart = Line3::new(v3(0.0, 1.0, 0.0), v3(1.0, 1.0, 0.0));
    assert_eq!(a.find_intersection(&same), Intersection::Same);
    assert_eq!(a.find_intersection(&apart), Intersection::None);
}

#[test]
fn skew_lines_do_not_meet() {
    let a = Line3::new(v3(0.0, 0.0, 0.0), v3(1.0, 0.0, 0.0));
    let b = Line3::new(v3(0.0, 0.0, 1.0), v3(0.0, 1.0, 0.0));
    assert_eq!(a.find_intersection(&b).quantity(), Quantity::None);
}

#[test]
fn zero_direction_is_an_error() {
    let a = Line3::new(v3(0.0, 0.0, 0.0), v3(0.0, 0.0, 0.0));
    let b = Line3::new(v3(0.0, 0.0, 0.0), v3(1.0, 0.0, 0.0));
    assert_eq!(a.find_intersection(&b), Intersection::Error);
}

#[test]
fn crossing_segments_in_the_plane() {
    let a = Segment2::new(&Vector2::new(0.0, 0.0), &Vector2::new(2.0, 2.0));
    let b = Segment2::new(&Vector2::new(0.0, 2.0), &Vector2::new(2.0, 0.0));
    assert_eq!(
        a.find_intersection(&b),
        Intersection::One(Segment2::point(Vector2::new(1.0, 1.0)))
    );

    let short = Segment2::new(&Vector2::new(0.0, 2.0), &Vector2::new(0.5, 1.5));
    assert_eq!(a.find_intersection(&short).quantity(), Quantity::None);
}

#[test]
fn overlapping_collinear_segments() {
    let a = Segment3::new(&v3(0.0, 0.0, 0.0), &v3(4.0, 0.0, 0.0));
    let b = Segment3::new(&v3(6.0, 0.0, 0.0), &v3(2.0, 0.0, 0.0));
    assert_eq!(
        a.find_intersection(&b),
        Intersection::Interval(Segment3::new(&v3(2.0, 0.0, 0.0), &v3(4.0, 0.0, 0.0)))
    );

    let touching = Segment3::new(&v3(4.0, 0.0, 0.0), &v3(9.0, 0.0, 0.0));
    assert_eq!(a.find_intersection(&touching).quantity(), Quantity::One);
}

#[test]
fn crossing_planes_meet_in_a_line() {
    let xy = Plane::from_points(&v3(0.0, 0.0, 0.0), &v3(1.0, 0.0, 0.0), &v3(0.0, 1.0, 0.0));
    let x2 = Plane::from_points(&v3(2.0, 0.0, 0.0), &v3(2.0, 1.0, 0.0), &v3(2.0, 0.0, 1.0));
    let expected = Line3::new(v3(2.0, 7.0, 0.0), v3(0.0, 1.0, 0.0));
    assert_eq!(xy.find_intersection(&x2), Intersection::Interval(expected));
}

#[test]
fn parallel_planes() {
    let xy = Plane::from_points(&v3(0.0, 0.0, 0.0), &v3(1.0, 0.0, 0.0), &v3(0.0, 1.0, 0.0));
    let shifted = Plane::from_points(&v3(0.0, 0.0, 3.0), &v3(1.0, 0.0, 3.0), &v3(0.0, 1.0, 3.0));
    let again = Plane::from_points(&v3(5.0, 5.0, 0.0), &v3(0.0, 2.0, 0.0), &v3(3.0, 1.0, 0.0));
    assert_eq!(xy.find_intersection(&shifted), Intersection::None);
    assert_eq!(xy.find_intersection(&again), Intersection::Same);
}

#[test]
fn line_hits_plane_once() {
    let xy = Plane::from_points(&v3(0.0, 0.0, 0.0), &v3(1.0, 0.0, 0.0), &v3(0.0, 1.0, 0.0));
    let line = Line3::new(v3(1.0, 2.0, 3.0), v3(0.0, 0.0, -1.0));
    assert_eq!(xy.find_intersection(&line), Intersection::One(v3(1.0, 2.0, 0.0)));

    let lying = Line3::new(v3(1.0, 2.0, 0.0), v3(1.0, 0.0, 0.0));
    assert_eq!(xy.find_intersection(&lying), Intersection::Same);
}

#[test]
fn triangle_clips_a_line() {
    let t = Triangle::new(v3(0.0, 0.0, 0.0), v3(0.0, 10.0, 0.0), v3(15.0, 0.0, 0.0));

    let vertical = Line3::new(v3(1.0, 1.0, 1.0), v3(0.0, 0.0, 1.0));
    assert_eq!(
        t.find_intersection(&vertical),
        Intersection::One(Segment3::point(v3(1.0, 1.0, 0.0)))
    );

    let outside = Line3::new(v3(20.0, 20.0, 1.0), v3(0.0, 0.0, 1.0));
    assert_eq!(t.find_intersection(&outside).quantity(), Quantity::None);

    let in_plane = Line3::new(v3(-5.0, 2.0, 0.0), v3(1.0, 0.0, 0.0));
    assert_eq!(t.find_intersection(&in_plane).quantity(), Quantity::Interval);
}

#[test]
fn collinear_triangle_cannot_clip() {
    let flat = Triangle::new(v3(0.0, 0.0, 0.0), v3(1.0, 1.0, 1.0), v3(2.0, 2.0, 2.0));
    let line = Line3::new(v3(0.0, 0.0, 0.0), v3(1.0, 0.0, 0.0));
    assert!(!flat.is_valid());
    assert_eq!(flat.find_intersection(&line), Intersection::Error);
}

#[test]
fn collinear_segments_along_a_generic_direction() {
    let d = v3(0.1, 0.7, 0.3);
    let o = v3(0.0, 0.0, 0.0);
    let a = Segment3::new(&o, &d);
    let b = Segment3::new(&d.scale(0.3), &d.scale(2.0));
    assert_eq!(
        a.find_intersection(&b),
        Intersection::Interval(Segment3::new(&d.scale(0.3), &d))
    );

    let start = v3(-1.3, 2.9, 0.4);
    let dir = v3(0.37, -1.21, 0.83);
    let long = Segment3::new(&start, &(start + dir));
    let tail = Segment3::new(&(start + dir * 0.25), &(start + dir * 1.5));
    assert_eq!(long.find_intersection(&tail).quantity(), Quantity::Interval);
    assert_eq!(long.line().find_intersection(&tail.line()), Intersection::Same);
}
