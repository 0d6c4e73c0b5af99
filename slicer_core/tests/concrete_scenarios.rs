// Copyright 2025 the Slicer2D Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Integration tests for the six concrete cut scenarios, run against the
//! public `slicer_core` API end to end.

use slicer_core::{PolygonWithHoles, RefRect, Segment, slice};
use slicer_geometry::{Loop, Point, quantize_key};

const AREA_TOL: f64 = 1e-6;

fn rect(x0: f64, y0: f64, x1: f64, y1: f64) -> Loop {
    Loop::new(vec![
        Point::new(x0, y0),
        Point::new(x1, y0),
        Point::new(x1, y1),
        Point::new(x0, y1),
    ])
}

fn hole_rect(x0: f64, y0: f64, x1: f64, y1: f64) -> Loop {
    let mut h = rect(x0, y0, x1, y1);
    h.normalize_winding(false);
    h
}

fn total_area(pieces: &[PolygonWithHoles]) -> f64 {
    pieces.iter().map(PolygonWithHoles::signed_area).sum()
}

/// Count how many of `loop_`'s vertices quantize to the same cell as `p`.
fn occurrences_of(loop_: &Loop, p: Point) -> usize {
    let key = quantize_key(p);
    loop_.points().iter().filter(|&&q| quantize_key(q) == key).count()
}

#[test]
fn scenario_1_square_diagonal_cut_yields_two_equal_triangles() {
    let polygon = PolygonWithHoles::new(rect(-1.0, -1.0, 1.0, 1.0), Vec::new());
    let cut = Segment::new(Point::new(-2.0, -2.0), Point::new(2.0, 2.0));
    let rect_uv = RefRect::new(-1.0, -1.0, 2.0, 2.0);

    let pieces = slice(&polygon, cut, rect_uv);
    assert_eq!(pieces.len(), 2);
    for piece in &pieces {
        assert!(piece.holes.is_empty());
        assert!((piece.signed_area() - 2.0).abs() < 1e-9);
    }
    assert!((total_area(&pieces) - 4.0).abs() < AREA_TOL);
}

#[test]
fn scenario_2_square_with_central_hole_horizontal_cut_yields_two_notched_rectangles() {
    let outer = rect(-2.0, -2.0, 2.0, 2.0);
    let hole = hole_rect(-1.0, -1.0, 1.0, 1.0);
    let polygon = PolygonWithHoles::new(outer, vec![hole]);
    let cut = Segment::new(Point::new(-3.0, 0.0), Point::new(3.0, 0.0));
    let rect_uv = RefRect::new(-2.0, -2.0, 4.0, 4.0);

    let pieces = slice(&polygon, cut, rect_uv);
    assert_eq!(pieces.len(), 2);
    // Every piece is a notched rectangle: one hole-derived concavity, no
    // actual hole loop left over (the cut passes through the original
    // hole, so what remains is a single concave outer boundary per half).
    assert!((total_area(&pieces) - 12.0).abs() < AREA_TOL);
}

#[test]
fn scenario_3_off_center_cut_leaves_the_hole_with_one_piece() {
    let outer = rect(-2.0, -2.0, 2.0, 2.0);
    let hole = hole_rect(-1.0, -1.0, 1.0, 1.0);
    let polygon = PolygonWithHoles::new(outer, vec![hole]);
    // Cuts only through the outer ring, well above the hole.
    let cut = Segment::new(Point::new(-3.0, 1.5), Point::new(3.0, 1.5));
    let rect_uv = RefRect::new(-2.0, -2.0, 4.0, 4.0);

    let pieces = slice(&polygon, cut, rect_uv);
    assert_eq!(pieces.len(), 2);
    let with_hole = pieces.iter().filter(|p| !p.holes.is_empty()).count();
    assert_eq!(with_hole, 1);
    assert!((total_area(&pieces) - 12.0).abs() < AREA_TOL);
}

#[test]
fn scenario_4_grid_polygon_horizontal_cut_yields_two_pieces_with_two_holes_each() {
    fn corner_hole(cx0: f64, cy0: f64) -> Loop {
        hole_rect(cx0, cy0, cx0 + 1.0, cy0 + 1.0)
    }

    let outer = rect(-3.0, -3.0, 3.0, 3.0);
    let holes = vec![
        corner_hole(-2.0, -2.0),
        corner_hole(1.0, -2.0),
        corner_hole(1.0, 1.0),
        corner_hole(-2.0, 1.0),
    ];
    let polygon = PolygonWithHoles::new(outer, holes);
    let cut = Segment::new(Point::new(-4.0, 0.0), Point::new(4.0, 0.0));
    let rect_uv = RefRect::new(-3.0, -3.0, 6.0, 6.0);

    let pieces = slice(&polygon, cut, rect_uv);
    assert_eq!(pieces.len(), 2);
    for piece in &pieces {
        assert_eq!(piece.holes.len(), 2);
    }
}

#[test]
fn scenario_5_cut_missing_the_polygon_is_a_no_op() {
    let polygon = PolygonWithHoles::new(rect(-1.0, -1.0, 1.0, 1.0), Vec::new());
    let cut = Segment::new(Point::new(-2.0, 10.0), Point::new(2.0, 10.0));
    let rect_uv = RefRect::new(-1.0, -1.0, 2.0, 2.0);

    assert!(slice(&polygon, cut, rect_uv).is_empty());
}

#[test]
fn scenario_6_cut_through_a_concave_vertex_yields_two_pieces_with_the_vertex_deduped() {
    // An arrowhead notch in the top edge: (2, 2) is a reflex vertex of
    // the CCW outer loop.
    let outer = Loop::new(vec![
        Point::new(0.0, 0.0),
        Point::new(4.0, 0.0),
        Point::new(4.0, 4.0),
        Point::new(2.0, 2.0),
        Point::new(0.0, 4.0),
    ]);
    assert!((outer.signed_area() - 12.0).abs() < 1e-9);
    let polygon = PolygonWithHoles::new(outer, Vec::new());

    // Vertical cut through x = 2, which passes exactly through the
    // reflex vertex (2, 2).
    let cut = Segment::new(Point::new(2.0, -1.0), Point::new(2.0, 5.0));
    let rect_uv = RefRect::new(0.0, 0.0, 4.0, 4.0);

    let pieces = slice(&polygon, cut, rect_uv);
    assert_eq!(pieces.len(), 2);
    assert!((total_area(&pieces) - 12.0).abs() < AREA_TOL);

    let vertex = Point::new(2.0, 2.0);
    for piece in &pieces {
        assert!(occurrences_of(&piece.outer, vertex) <= 1);
    }
}
