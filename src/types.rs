//! Core types for the resize system.
//!
//! This module defines the geometry snapshots, edge sets and notification
//! payloads shared by the controller, the handles and the pure geometry
//! helpers.

use crate::constants::{
    CURSOR_BOTTOM_LEFT, CURSOR_BOTTOM_RIGHT, CURSOR_LEFT_OR_RIGHT, CURSOR_TOP_LEFT,
    CURSOR_TOP_OR_BOTTOM, CURSOR_TOP_RIGHT, NO_SNAP,
};
use crate::pointer::RawPointerEvent;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

// ============================================================================
// Edges
// ============================================================================

/// One side of an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Edge {
    Top,
    Bottom,
    Left,
    Right,
}

impl Edge {
    /// All edges in declaration order.
    pub const ALL: [Edge; 4] = [Edge::Top, Edge::Bottom, Edge::Left, Edge::Right];
}

/// The set of sides a drag affects.
///
/// Each side is tri-state: absent, present but inactive, or active. Only
/// active sides move when the pointer moves, but every *present* side shows
/// up in the [`EdgesDiff`] computed for it, and a set with any present side
/// counts as non-empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Edges {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bottom: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right: Option<bool>,
}

impl Edges {
    /// Empty edge set (a press with it can only ever be a click).
    pub fn none() -> Self {
        Self::default()
    }

    /// All four sides active.
    pub fn all() -> Self {
        Self::of(&Edge::ALL)
    }

    /// Build a set where the given sides are active.
    pub fn of(edges: &[Edge]) -> Self {
        let mut set = Self::default();
        for edge in edges {
            set.set(*edge, true);
        }
        set
    }

    /// Builder-style setter.
    pub fn with(mut self, edge: Edge, active: bool) -> Self {
        self.set(edge, active);
        self
    }

    pub fn set(&mut self, edge: Edge, active: bool) {
        *self.slot_mut(edge) = Some(active);
    }

    /// Returns true if the side is present and active.
    #[inline]
    pub fn is_active(&self, edge: Edge) -> bool {
        self.slot(edge).unwrap_or(false)
    }

    /// Returns true if the side is present, active or not.
    #[inline]
    pub fn is_present(&self, edge: Edge) -> bool {
        self.slot(edge).is_some()
    }

    /// Returns true if no side is present at all.
    pub fn is_empty(&self) -> bool {
        Edge::ALL.iter().all(|edge| !self.is_present(*edge))
    }

    /// Present sides in declaration order.
    pub fn present(&self) -> impl Iterator<Item = Edge> + '_ {
        Edge::ALL.into_iter().filter(|edge| self.is_present(*edge))
    }

    fn slot(&self, edge: Edge) -> Option<bool> {
        match edge {
            Edge::Top => self.top,
            Edge::Bottom => self.bottom,
            Edge::Left => self.left,
            Edge::Right => self.right,
        }
    }

    fn slot_mut(&mut self, edge: Edge) -> &mut Option<bool> {
        match edge {
            Edge::Top => &mut self.top,
            Edge::Bottom => &mut self.bottom,
            Edge::Left => &mut self.left,
            Edge::Right => &mut self.right,
        }
    }
}

/// Signed pixel delta per side between two rectangles.
///
/// Carries exactly the sides present in the [`Edges`] it was computed for.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EdgesDiff {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bottom: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right: Option<f64>,
}

impl EdgesDiff {
    pub fn get(&self, edge: Edge) -> Option<f64> {
        match edge {
            Edge::Top => self.top,
            Edge::Bottom => self.bottom,
            Edge::Left => self.left,
            Edge::Right => self.right,
        }
    }

    pub fn set(&mut self, edge: Edge, value: f64) {
        let slot = match edge {
            Edge::Top => &mut self.top,
            Edge::Bottom => &mut self.bottom,
            Edge::Left => &mut self.left,
            Edge::Right => &mut self.right,
        };
        *slot = Some(value);
    }

    /// Present entries in declaration order.
    pub fn entries(&self) -> impl Iterator<Item = (Edge, f64)> + '_ {
        Edge::ALL
            .into_iter()
            .filter_map(|edge| self.get(edge).map(|value| (edge, value)))
    }
}

// ============================================================================
// Geometry
// ============================================================================

/// Axis-aligned bounding rectangle snapshot.
///
/// `height` and `width` are always `bottom - top` and `right - left` for
/// rectangles built by this crate. Scroll offsets are only captured for
/// fixed-positioned starting rectangles.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rectangle {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
    pub height: f64,
    pub width: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scroll_top: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scroll_left: Option<f64>,
}

impl Rectangle {
    /// Build a rectangle from its sides, deriving height and width.
    pub fn from_sides(top: f64, bottom: f64, left: f64, right: f64) -> Self {
        Self {
            top,
            bottom,
            left,
            right,
            height: bottom - top,
            width: right - left,
            scroll_top: None,
            scroll_left: None,
        }
    }

    /// Build a rectangle from its top-left corner and size.
    pub fn from_origin_size(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self::from_sides(top, top + height, left, left + width)
    }

    /// Value of one side.
    #[inline]
    pub fn edge(&self, edge: Edge) -> f64 {
        match edge {
            Edge::Top => self.top,
            Edge::Bottom => self.bottom,
            Edge::Left => self.left,
            Edge::Right => self.right,
        }
    }

    /// Returns true if both dimensions are strictly positive.
    pub fn has_positive_size(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }
}

/// A pointer displacement in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Delta {
    pub x: f64,
    pub y: f64,
}

impl Delta {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Quantization step per axis, derived per session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SnapGrid {
    pub x: f64,
    pub y: f64,
}

impl Default for SnapGrid {
    fn default() -> Self {
        Self {
            x: NO_SNAP,
            y: NO_SNAP,
        }
    }
}

/// Configured snap size per side; unset or zero sides do not snap.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SnapSizes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bottom: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right: Option<f64>,
}

impl SnapSizes {
    /// Builder-style setter.
    pub fn with(mut self, edge: Edge, size: f64) -> Self {
        let slot = match edge {
            Edge::Top => &mut self.top,
            Edge::Bottom => &mut self.bottom,
            Edge::Left => &mut self.left,
            Edge::Right => &mut self.right,
        };
        *slot = Some(size);
        self
    }

    /// Snap size for a side, ignoring unset and zero entries.
    pub fn get(&self, edge: Edge) -> Option<f64> {
        let size = match edge {
            Edge::Top => self.top,
            Edge::Bottom => self.bottom,
            Edge::Left => self.left,
            Edge::Right => self.right,
        };
        size.filter(|s| *s != 0.0)
    }

    pub fn entries(&self) -> impl Iterator<Item = (Edge, f64)> + '_ {
        Edge::ALL
            .into_iter()
            .filter_map(|edge| self.get(edge).map(|size| (edge, size)))
    }
}

// ============================================================================
// Presentation
// ============================================================================

/// How the ghost preview is positioned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GhostPositioning {
    /// Relative to the viewport; geometry from the bounding client rect.
    #[default]
    Fixed,
    /// Relative to the offset parent; geometry from offset metrics.
    Absolute,
}

/// Cursor labels shown while resizing, by edge combination.
///
/// Missing entries in a deserialized table fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResizeCursors {
    pub top_left: String,
    pub top_right: String,
    pub bottom_left: String,
    pub bottom_right: String,
    pub left_or_right: String,
    pub top_or_bottom: String,
}

impl Default for ResizeCursors {
    fn default() -> Self {
        Self {
            top_left: CURSOR_TOP_LEFT.to_string(),
            top_right: CURSOR_TOP_RIGHT.to_string(),
            bottom_left: CURSOR_BOTTOM_LEFT.to_string(),
            bottom_right: CURSOR_BOTTOM_RIGHT.to_string(),
            left_or_right: CURSOR_LEFT_OR_RIGHT.to_string(),
            top_or_bottom: CURSOR_TOP_OR_BOTTOM.to_string(),
        }
    }
}

// ============================================================================
// Notifications
// ============================================================================

/// Payload of resize-start, resizing and resize-end notifications.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResizeEvent {
    pub edges: EdgesDiff,
    pub rectangle: Rectangle,
}

/// Payload of the clicked notification: a press released before the move
/// threshold was crossed.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClickEvent {
    pub client_x: f64,
    pub client_y: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event: Option<Arc<RawPointerEvent>>,
}
