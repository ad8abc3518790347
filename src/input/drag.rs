//! Pointer move handling - the resize pipeline.

use super::ResizeController;
use crate::constants::SLOW_MOVE_MS;
use crate::geometry;
use crate::host::ElementHost;
use crate::perf;
use crate::pointer::PointerSignal;
use crate::profile_scope;
use crate::types::{ResizeEvent, SnapGrid};
use tracing::trace;

impl<H: ElementHost> ResizeController<H> {
    pub(super) fn handle_pointer_move(&mut self, signal: &PointerSignal) {
        let ((), elapsed_ms) = perf::measure(|| self.resize_to_pointer(signal));
        self.move_stats.record(elapsed_ms);
    }

    fn resize_to_pointer(&mut self, signal: &PointerSignal) {
        profile_scope!("pointer_move", SLOW_MOVE_MS);

        let grid = self.snap_grid();

        // Moves are only tracked between a press and its release
        let Some(tracker) = self.drag.as_mut() else {
            return;
        };

        let delta = tracker.delta_to(signal.x, signal.y);

        if let Some(previous) = tracker.previous.replace(delta) {
            if geometry::grid_cell(previous, grid) == geometry::grid_cell(delta, grid) {
                trace!(dx = delta.x, dy = delta.y, "Move stays in grid cell");
                return;
            }
        }

        let Some(session) = self.state.session() else {
            return;
        };

        let snapped = geometry::snap_to_grid(delta, grid);
        let rect = geometry::new_bounding_rectangle(
            &session.starting_rect,
            &session.edges,
            snapped.x,
            snapped.y,
        );

        if !self.config.allow_negative_resizes && !rect.has_positive_size() {
            trace!(width = rect.width, height = rect.height, "Dropping non-positive size");
            return;
        }

        let diff = geometry::edges_diff(&session.edges, &session.starting_rect, &rect);
        if let Some(validate) = &self.config.validate_resize {
            let candidate = ResizeEvent {
                edges: diff,
                rectangle: rect,
            };
            if !validate(&candidate) {
                trace!("Resize rejected by validator");
                return;
            }
        }

        if self.state.is_armed()
            && geometry::total_diff_magnitude(&diff) >= self.config.resize_move_threshold
        {
            self.start_visible_resize();
        }

        if self.state.is_dragging() {
            if let Some(ghost) = self.state.session_mut().and_then(|s| s.ghost.as_mut()) {
                self.host.update_ghost(ghost, &rect);
            }
            self.resizing.emit_with(|| ResizeEvent {
                edges: diff,
                rectangle: rect,
            });
        }

        if let Some(session) = self.state.session_mut() {
            session.current_rect = rect;
        }
    }

    /// Snap grid of the current session, `{1, 1}` when idle.
    pub fn snap_grid(&self) -> SnapGrid {
        self.state
            .edges()
            .map(|edges| geometry::snap_grid(&edges, &self.config.resize_snap_grid))
            .unwrap_or_default()
    }
}
