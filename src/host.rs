//! Host element abstraction.
//!
//! The controller never touches a real UI tree. The host implements
//! [`ElementHost`] for the element being resized: it reports geometry, sets
//! cursors and classes, and owns the ghost preview clone.

use crate::error::ResizeResult;
use crate::types::{GhostPositioning, Rectangle};

/// A layout-relative bounding box as reported by `getBoundingClientRect`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ClientRect {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
    pub width: f64,
    pub height: f64,
}

impl ClientRect {
    pub fn from_origin_size(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            top,
            bottom: top + height,
            left,
            right: left + width,
            width,
            height,
        }
    }
}

/// Geometry and transform snapshot of the resizing element.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ElementMetrics {
    pub offset_top: f64,
    pub offset_left: f64,
    pub offset_width: f64,
    pub offset_height: f64,
    pub bounding: ClientRect,
    pub scroll_top: f64,
    pub scroll_left: f64,
    /// Inline `transform` style
    pub transform: Option<String>,
    pub ms_transform: Option<String>,
    pub moz_transform: Option<String>,
    pub o_transform: Option<String>,
}

impl ElementMetrics {
    /// First non-empty transform, standard property before vendor prefixes.
    pub fn active_transform(&self) -> Option<&str> {
        [
            &self.transform,
            &self.ms_transform,
            &self.moz_transform,
            &self.o_transform,
        ]
        .into_iter()
        .filter_map(|t| t.as_deref())
        .find(|t| !t.is_empty())
    }
}

/// Initial styling of a freshly cloned ghost.
#[derive(Debug, Clone, Copy)]
pub struct GhostInit<'a> {
    pub positioning: GhostPositioning,
    /// Starting rectangle; also carries the scroll offsets to copy
    pub rect: &'a Rectangle,
    pub cursor: &'a str,
    pub class: &'a str,
}

/// The element a [`ResizeController`](crate::ResizeController) is attached to.
pub trait ElementHost {
    /// Opaque handle to a ghost clone.
    type Ghost;

    /// Current geometry of the element.
    fn metrics(&self) -> ElementMetrics;

    /// Set the document-wide cursor; an empty string resets it.
    fn set_document_cursor(&mut self, cursor: &str);

    /// Set the element's own cursor; an empty string resets it.
    fn set_element_cursor(&mut self, cursor: &str);

    /// Add or remove a class on the element.
    fn set_class(&mut self, class: &str, enabled: bool);

    /// Deep-clone the element, insert the clone next to it, hide the
    /// original and style the clone from `init`.
    fn create_ghost(&mut self, init: &GhostInit<'_>) -> ResizeResult<Self::Ghost>;

    /// Move/resize the ghost to `rect`.
    fn update_ghost(&mut self, ghost: &mut Self::Ghost, rect: &Rectangle);

    /// Remove the ghost and make the original visible again.
    fn remove_ghost(&mut self, ghost: Self::Ghost);
}
