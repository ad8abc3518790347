//! Resize state machine - the single in-progress session of a controller.
//!
//! ## State Transitions
//!
//! ```text
//! Idle     -> Armed       (pointer down with edges, threshold > 0)
//! Idle     -> Dragging    (pointer down with edges, threshold <= 0)
//! Armed    -> Dragging    (first accepted move at/over the threshold)
//! Armed    -> Idle        (pointer up: click)
//! Dragging -> Idle        (pointer up: resize end)
//! Any      -> Armed/...   (second pointer down: previous session dropped)
//! ```

use crate::types::{Edges, Rectangle};

/// Data of one press-drag-release.
#[derive(Debug, Clone)]
pub struct ResizeSession<G> {
    pub edges: Edges,
    pub starting_rect: Rectangle,
    /// Last accepted rectangle
    pub current_rect: Rectangle,
    /// Ghost preview, only while dragging with ghosts enabled
    pub ghost: Option<G>,
}

impl<G> ResizeSession<G> {
    pub fn new(edges: Edges, starting_rect: Rectangle) -> Self {
        Self {
            edges,
            starting_rect,
            current_rect: starting_rect,
            ghost: None,
        }
    }
}

/// Resize state of one controller.
#[derive(Debug, Clone, Default)]
pub enum ResizeState<G> {
    /// No press in progress
    #[default]
    Idle,

    /// Pressed on edges but not yet past the move threshold; a release now
    /// is a click
    Armed(ResizeSession<G>),

    /// Resize visible: notifications flow and the ghost (if any) follows
    Dragging(ResizeSession<G>),
}

impl<G> ResizeState<G> {
    /// Returns true if the state is Idle
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Returns true if a press is waiting for the threshold
    pub fn is_armed(&self) -> bool {
        matches!(self, Self::Armed(_))
    }

    /// Returns true if a resize is visible
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging(_))
    }

    pub fn session(&self) -> Option<&ResizeSession<G>> {
        match self {
            Self::Armed(session) | Self::Dragging(session) => Some(session),
            Self::Idle => None,
        }
    }

    pub fn session_mut(&mut self) -> Option<&mut ResizeSession<G>> {
        match self {
            Self::Armed(session) | Self::Dragging(session) => Some(session),
            Self::Idle => None,
        }
    }

    /// Edges of the current session
    pub fn edges(&self) -> Option<Edges> {
        self.session().map(|s| s.edges)
    }

    /// Last accepted rectangle of the current session
    pub fn current_rect(&self) -> Option<Rectangle> {
        self.session().map(|s| s.current_rect)
    }

    /// Promote an armed session to dragging. No-op in other states.
    pub fn make_visible(&mut self) {
        if let Self::Armed(_) = self {
            if let Self::Armed(session) = std::mem::take(self) {
                *self = Self::Dragging(session);
            }
        }
    }

    /// Reset to Idle, returning the session and whether it was visible
    pub fn take(&mut self) -> Option<(ResizeSession<G>, bool)> {
        match std::mem::take(self) {
            Self::Idle => None,
            Self::Armed(session) => Some((session, false)),
            Self::Dragging(session) => Some((session, true)),
        }
    }
}
