// Copyright 2025 the Slicer2D Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A 6x6 outer square with four 1x1 holes at the corners of a 4x4
//! inner frame, cut horizontally at y = 0, should produce exactly two
//! output polygons, each containing two holes.

use slicer_core::{PolygonWithHoles, RefRect, Segment, slice_to_meshes};
use slicer_geometry::{Loop, Point};

fn corner_hole(cx0: f64, cy0: f64) -> Loop {
    let mut hole = Loop::new(vec![
        Point::new(cx0, cy0),
        Point::new(cx0 + 1.0, cy0),
        Point::new(cx0 + 1.0, cy0 + 1.0),
        Point::new(cx0, cy0 + 1.0),
    ]);
    hole.normalize_winding(false);
    hole
}

fn main() {
    tracing_subscriber::fmt::init();

    let outer = Loop::new(vec![
        Point::new(-3.0, -3.0),
        Point::new(3.0, -3.0),
        Point::new(3.0, 3.0),
        Point::new(-3.0, 3.0),
    ]);
    let holes = vec![
        corner_hole(-2.0, -2.0),
        corner_hole(1.0, -2.0),
        corner_hole(1.0, 1.0),
        corner_hole(-2.0, 1.0),
    ];

    let polygon = PolygonWithHoles::new(outer, holes);
    let cut = Segment::new(Point::new(-4.0, 0.0), Point::new(4.0, 0.0));
    let rect = RefRect::new(-3.0, -3.0, 6.0, 6.0);

    let output = slice_to_meshes(&polygon, cut, rect);
    println!("produced {} polygon(s)", output.polygons.len());
    for (i, polygon) in output.polygons.iter().enumerate() {
        println!(" polygon {i}: {} hole(s)", polygon.holes.len());
    }
}
