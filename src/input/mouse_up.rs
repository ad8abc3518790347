//! Pointer up handling - finish the resize or report a click.

use super::ResizeController;
use crate::constants::RESIZE_ACTIVE_CLASS;
use crate::geometry;
use crate::host::ElementHost;
use crate::pointer::PointerSignal;
use crate::types::{ClickEvent, ResizeEvent};
use tracing::{debug, trace};

impl<H: ElementHost> ResizeController<H> {
    pub(super) fn handle_pointer_up(&mut self, signal: &PointerSignal) {
        self.drag = None;

        let Some((session, visible)) = self.state.take() else {
            trace!("Pointer up without a session");
            return;
        };

        if visible {
            self.host.set_class(RESIZE_ACTIVE_CLASS, false);
            self.host.set_document_cursor("");
            self.host.set_element_cursor("");

            let diff = geometry::edges_diff(&session.edges, &session.starting_rect, &session.current_rect);
            debug!(
                width = session.current_rect.width,
                height = session.current_rect.height,
                "Resize ended"
            );
            self.resize_end.emit_with(|| ResizeEvent {
                edges: diff,
                rectangle: session.current_rect,
            });

            if let Some(ghost) = session.ghost {
                self.host.remove_ghost(ghost);
            }
        } else {
            debug!(x = signal.x, y = signal.y, "Press released below threshold");
            self.clicked.emit_with(|| ClickEvent {
                client_x: signal.x,
                client_y: signal.y,
                event: signal.raw.clone(),
            });
        }
    }
}
