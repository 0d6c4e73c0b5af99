// Copyright 2025 the Slicer2D Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A square cut diagonally should yield two triangles of equal area.

use slicer_core::{PolygonWithHoles, RefRect, Segment, slice_to_meshes};
use slicer_geometry::{Loop, Point};

fn main() {
    tracing_subscriber::fmt::init();

    let outer = Loop::new(vec![
        Point::new(-1.0, -1.0),
        Point::new(1.0, -1.0),
        Point::new(1.0, 1.0),
        Point::new(-1.0, 1.0),
    ]);
    let polygon = PolygonWithHoles::new(outer, Vec::new());
    let cut = Segment::new(Point::new(-2.0, -2.0), Point::new(2.0, 2.0));
    let rect = RefRect::new(-1.0, -1.0, 2.0, 2.0);

    let output = slice_to_meshes(&polygon, cut, rect);
    println!("produced {} polygon(s)", output.polygons.len());
    for (i, mesh) in output.meshes.iter().enumerate() {
        let area = mesh.outer_path.len();
        println!(
            " polygon {i}: {} outer vertices, {} triangles",
            area,
            mesh.indices.len() / 3
        );
    }
}
