//! Unit tests for the public geometry helpers.

use resizable_element::geometry::{
    edges_diff, grid_cell, new_bounding_rectangle, resize_cursor, snap_grid, snap_to_grid,
    total_diff_magnitude,
};
use resizable_element::{
    Delta, Edge, Edges, EdgesDiff, Rectangle, ResizeCursors, SnapGrid, SnapSizes,
};

#[test]
fn test_snap_sequence_quantizes_by_rounding() {
    let grid = SnapGrid { x: 10.0, y: 1.0 };

    let snapped: Vec<f64> = [3.0, 7.0, 12.0]
        .into_iter()
        .map(|dx| snap_to_grid(Delta::new(dx, 0.0), grid).x)
        .collect();

    assert_eq!(snapped, vec![0.0, 10.0, 10.0]);
}

#[test]
fn test_grid_cells_use_ceiling() {
    let grid = SnapGrid { x: 10.0, y: 10.0 };

    assert_eq!(grid_cell(Delta::new(3.0, 0.0), grid), grid_cell(Delta::new(7.0, 0.0), grid));
    assert_ne!(grid_cell(Delta::new(7.0, 0.0), grid), grid_cell(Delta::new(12.0, 0.0), grid));
    assert_eq!(grid_cell(Delta::new(-3.0, 10.0), grid), (-0.0, 1.0));
}

#[test]
fn test_diff_and_magnitude() {
    let start = Rectangle::from_origin_size(0.0, 0.0, 100.0, 100.0);
    let edges = Edges::of(&[Edge::Left, Edge::Bottom]);
    let moved = new_bounding_rectangle(&start, &edges, -12.0, 4.0);

    let diff = edges_diff(&edges, &start, &moved);

    assert_eq!(
        diff,
        EdgesDiff {
            left: Some(-12.0),
            bottom: Some(4.0),
            ..Default::default()
        }
    );
    assert_eq!(total_diff_magnitude(&diff), 12.0);
    assert_eq!(total_diff_magnitude(&EdgesDiff::default()), 0.0);
}

#[test]
fn test_custom_cursor_table() {
    let cursors = ResizeCursors {
        left_or_right: "ew-resize".to_string(),
        ..Default::default()
    };

    assert_eq!(resize_cursor(&Edges::of(&[Edge::Left]), &cursors), "ew-resize");
    assert_eq!(resize_cursor(&Edges::of(&[Edge::Bottom]), &cursors), "row-resize");
    assert_eq!(resize_cursor(&Edges::none(), &cursors), "");
}

#[test]
fn test_snap_grid_needs_active_edge() {
    let sizes = SnapSizes::default().with(Edge::Top, 6.0).with(Edge::Right, 9.0);

    let grid = snap_grid(&Edges::of(&[Edge::Bottom, Edge::Right]), &sizes);
    assert_eq!(grid, SnapGrid { x: 9.0, y: 1.0 });

    let inactive = Edges::none().with(Edge::Top, false);
    assert_eq!(snap_grid(&inactive, &sizes), SnapGrid::default());
}
