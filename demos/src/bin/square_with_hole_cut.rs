// Copyright 2025 the Slicer2D Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A square with a central square hole, cut horizontally through the
//! middle, should produce two polygons, each an outer rectangle with a
//! rectangular notch.

use slicer_core::{PolygonWithHoles, RefRect, Segment, slice_to_meshes};
use slicer_geometry::{Loop, Point};

fn main() {
    tracing_subscriber::fmt::init();

    let outer = Loop::new(vec![
        Point::new(-2.0, -2.0),
        Point::new(2.0, -2.0),
        Point::new(2.0, 2.0),
        Point::new(-2.0, 2.0),
    ]);
    let mut hole = Loop::new(vec![
        Point::new(-1.0, 1.0),
        Point::new(1.0, 1.0),
        Point::new(1.0, -1.0),
        Point::new(-1.0, -1.0),
    ]);
    hole.normalize_winding(false);

    let polygon = PolygonWithHoles::new(outer, vec![hole]);
    let cut = Segment::new(Point::new(-3.0, 0.0), Point::new(3.0, 0.0));
    let rect = RefRect::new(-2.0, -2.0, 4.0, 4.0);

    let output = slice_to_meshes(&polygon, cut, rect);
    println!("produced {} polygon(s)", output.polygons.len());
    let total_area: f64 = output.polygons.iter().map(PolygonWithHoles::signed_area).sum();
    println!("summed signed area: {total_area}");
}
