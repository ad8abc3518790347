//! Pure geometry for resizing.
//!
//! Everything here is stateless: rectangle recomputation from a pointer
//! delta, element geometry capture, cursor selection, per-edge diffs and
//! snap-grid quantization.

use crate::host::ElementMetrics;
use crate::types::{
    Delta, Edge, Edges, EdgesDiff, GhostPositioning, Rectangle, ResizeCursors, SnapGrid, SnapSizes,
};
use once_cell::sync::Lazy;
use regex::Regex;

/// Matches `translate(Xpx, Ypx)` and `translate3d(Xpx, Ypx, Z)`.
static TRANSLATE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"translate(?:3d)?\(\s*(-?[0-9]*\.?[0-9]+)px\s*,\s*(-?[0-9]*\.?[0-9]+)px")
        .expect("translate pattern is valid")
});

/// Apply a pointer delta to the active sides of `start`.
///
/// Inactive sides keep their starting value; height and width are
/// recomputed from the sides. Scroll offsets are not carried over.
pub fn new_bounding_rectangle(start: &Rectangle, edges: &Edges, dx: f64, dy: f64) -> Rectangle {
    let mut top = start.top;
    let mut bottom = start.bottom;
    let mut left = start.left;
    let mut right = start.right;

    if edges.is_active(Edge::Top) {
        top += dy;
    }
    if edges.is_active(Edge::Bottom) {
        bottom += dy;
    }
    if edges.is_active(Edge::Left) {
        left += dx;
    }
    if edges.is_active(Edge::Right) {
        right += dx;
    }

    Rectangle::from_sides(top, bottom, left, right)
}

/// Pixel translation of the last `translate`/`translate3d` in a transform.
pub fn parse_translate(transform: &str) -> Option<(f64, f64)> {
    let caps = TRANSLATE_RE.captures_iter(transform).last()?;
    let x = caps.get(1)?.as_str().parse().ok()?;
    let y = caps.get(2)?.as_str().parse().ok()?;
    Some((x, y))
}

/// Capture an element's rectangle for the given ghost positioning.
///
/// Any CSS translate on the element is subtracted so the rectangle reflects
/// its untransformed layout position.
pub fn element_rect(metrics: &ElementMetrics, positioning: GhostPositioning) -> Rectangle {
    let (translate_x, translate_y) = metrics
        .active_transform()
        .filter(|t| t.contains("translate"))
        .and_then(parse_translate)
        .unwrap_or((0.0, 0.0));

    match positioning {
        GhostPositioning::Absolute => {
            let top = metrics.offset_top - translate_y;
            let left = metrics.offset_left - translate_x;
            Rectangle {
                top,
                bottom: top + metrics.offset_height,
                left,
                right: left + metrics.offset_width,
                height: metrics.offset_height,
                width: metrics.offset_width,
                scroll_top: None,
                scroll_left: None,
            }
        }
        GhostPositioning::Fixed => {
            let bounds = &metrics.bounding;
            Rectangle {
                top: bounds.top - translate_y,
                bottom: bounds.bottom - translate_y,
                left: bounds.left - translate_x,
                right: bounds.right - translate_x,
                height: bounds.height,
                width: bounds.width,
                scroll_top: Some(metrics.scroll_top),
                scroll_left: Some(metrics.scroll_left),
            }
        }
    }
}

/// Cursor for an edge combination; corners win over single axes.
pub fn resize_cursor<'a>(edges: &Edges, cursors: &'a ResizeCursors) -> &'a str {
    let top = edges.is_active(Edge::Top);
    let bottom = edges.is_active(Edge::Bottom);
    let left = edges.is_active(Edge::Left);
    let right = edges.is_active(Edge::Right);

    if left && top {
        &cursors.top_left
    } else if right && top {
        &cursors.top_right
    } else if left && bottom {
        &cursors.bottom_left
    } else if right && bottom {
        &cursors.bottom_right
    } else if left || right {
        &cursors.left_or_right
    } else if top || bottom {
        &cursors.top_or_bottom
    } else {
        ""
    }
}

/// Per-side delta between two rectangles, for every side present in `edges`.
pub fn edges_diff(edges: &Edges, initial: &Rectangle, new: &Rectangle) -> EdgesDiff {
    let mut diff = EdgesDiff::default();
    for edge in edges.present() {
        diff.set(edge, new.edge(edge) - initial.edge(edge));
    }
    diff
}

/// Largest absolute per-side delta; 0 for an empty diff.
pub fn total_diff_magnitude(diff: &EdgesDiff) -> f64 {
    diff.entries()
        .map(|(_, value)| value.abs())
        .fold(0.0, f64::max)
}

/// Snap grid for a drag on `edges`.
///
/// Left takes precedence over right for the x step, top over bottom for the
/// y step; a size only applies when its side is active.
pub fn snap_grid(edges: &Edges, sizes: &SnapSizes) -> SnapGrid {
    let mut grid = SnapGrid::default();

    let pick = |first: Edge, second: Edge| {
        [first, second]
            .into_iter()
            .find_map(|edge| sizes.get(edge).filter(|_| edges.is_active(edge)))
    };

    if let Some(x) = pick(Edge::Left, Edge::Right) {
        grid.x = x;
    }
    if let Some(y) = pick(Edge::Top, Edge::Bottom) {
        grid.y = y;
    }
    grid
}

/// Grid cell a delta falls in, by ceiling. Used to detect cell changes.
pub fn grid_cell(delta: Delta, grid: SnapGrid) -> (f64, f64) {
    ((delta.x / grid.x).ceil(), (delta.y / grid.y).ceil())
}

/// Delta rounded to the nearest grid multiple. Used for placement.
///
/// Halfway values round toward positive infinity on both axes.
pub fn snap_to_grid(delta: Delta, grid: SnapGrid) -> Delta {
    Delta::new(round_half_up(delta.x, grid.x), round_half_up(delta.y, grid.y))
}

fn round_half_up(value: f64, step: f64) -> f64 {
    ((value / step) + 0.5).floor() * step
}
