//! Pointer down handling - arm a session, start a visible resize.

use super::state::{ResizeSession, ResizeState};
use super::{DragTracker, ResizeController};
use crate::constants::{RESIZE_ACTIVE_CLASS, RESIZE_GHOST_ELEMENT_CLASS};
use crate::geometry;
use crate::host::{ElementHost, GhostInit};
use crate::pointer::PointerSignal;
use crate::types::{Edges, ResizeEvent};
use tracing::{debug, warn};

impl<H: ElementHost> ResizeController<H> {
    pub(super) fn handle_pointer_down(&mut self, signal: &PointerSignal) {
        // Every press restarts drag tracking, with or without edges
        self.drag = Some(DragTracker::new(signal.x, signal.y));

        let edges = signal.edges.unwrap_or_default();
        if edges.is_empty() {
            return;
        }

        // A second press replaces the session without ending it
        if let Some((previous, visible)) = self.state.take() {
            if let Some(ghost) = previous.ghost {
                self.host.remove_ghost(ghost);
            }
            debug!(visible, "Replacing unfinished resize session");
        }

        let starting_rect =
            geometry::element_rect(&self.host.metrics(), self.config.ghost_element_positioning);
        self.state = ResizeState::Armed(ResizeSession::new(edges, starting_rect));
        debug!(?edges, x = signal.x, y = signal.y, "Resize armed");

        if self.config.starts_on_press() {
            self.start_visible_resize();
        }
    }

    /// Promote the armed session: cursor, active class, optional ghost and
    /// the resize-start notification.
    pub(super) fn start_visible_resize(&mut self) {
        self.state.make_visible();
        let Some(session) = self.state.session() else {
            return;
        };
        let edges = session.edges;
        let starting_rect = session.starting_rect;

        let cursor = geometry::resize_cursor(&edges, &self.config.resize_cursors);
        self.host.set_document_cursor(cursor);
        self.host.set_class(RESIZE_ACTIVE_CLASS, true);

        if self.config.enable_ghost_resize {
            let init = GhostInit {
                positioning: self.config.ghost_element_positioning,
                rect: &starting_rect,
                cursor,
                class: RESIZE_GHOST_ELEMENT_CLASS,
            };
            match self.host.create_ghost(&init) {
                Ok(ghost) => {
                    if let Some(session) = self.state.session_mut() {
                        session.ghost = Some(ghost);
                    }
                }
                Err(err) => warn!(%err, "Ghost preview unavailable, resizing without it"),
            }
        }

        debug!(?edges, cursor, "Resize started");
        self.resize_start.emit_with(|| ResizeEvent {
            edges: geometry::edges_diff(&edges, &starting_rect, &starting_rect),
            rectangle: geometry::new_bounding_rectangle(&starting_rect, &Edges::none(), 0.0, 0.0),
        });
    }
}
