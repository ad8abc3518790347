//! Resize handles - elements that drive the resize of another element.
//!
//! A handle is bound to one element and a fixed set of edges. Presses on it
//! arm the owning controller with those edges; while pressed it listens for
//! moves on itself and forwards them, and releases end the interaction.
//!
//! ## Controller binding
//!
//! ```text
//! direct sink set?          -> use it
//! named container set?      -> resolve through the ControllerDirectory
//! neither / unresolved      -> ResizeError
//! ```

use crate::error::{ResizeError, ResizeResult};
use crate::input::LocalPointerSink;
use crate::pointer::{PointerEventKind, PointerPhase, PointerSignal, RawPointerEvent};
use crate::types::Edges;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, trace};

/// Move kinds a pressed handle listens for on itself.
const LOCAL_MOVE_KINDS: [PointerEventKind; 2] =
    [PointerEventKind::TouchMove, PointerEventKind::MouseMove];

/// Host binding to the handle element.
pub trait HandleElement {
    /// Install a listener for `kind` on the handle element.
    fn listen(&mut self, kind: PointerEventKind);

    /// Remove the listener for `kind` from the handle element.
    fn unlisten(&mut self, kind: PointerEventKind);
}

/// Resizable containers registered by name, for handles that refer to their
/// controller declaratively.
#[derive(Debug, Default)]
pub struct ControllerDirectory {
    sinks: RwLock<HashMap<String, LocalPointerSink>>,
}

impl ControllerDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) the controller behind `name`.
    pub fn register(&self, name: impl Into<String>, sink: LocalPointerSink) {
        let name = name.into();
        debug!(%name, "Registered resizable container");
        self.sinks.write().insert(name, sink);
    }

    /// Remove a registration. Returns true if it existed.
    pub fn unregister(&self, name: &str) -> bool {
        self.sinks.write().remove(name).is_some()
    }

    pub fn resolve(&self, name: &str) -> Option<LocalPointerSink> {
        self.sinks.read().get(name).cloned()
    }

    pub fn len(&self) -> usize {
        self.sinks.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.sinks.read().is_empty()
    }
}

#[derive(Debug, Clone)]
struct ContainerRef {
    directory: Arc<ControllerDirectory>,
    name: String,
}

/// Forwards pointer events captured on a handle element to a controller.
pub struct ResizeHandle<E: HandleElement> {
    element: E,
    edges: Edges,
    controller: Option<LocalPointerSink>,
    container: Option<ContainerRef>,
    /// Local move listeners installed
    listening: bool,
}

impl<E: HandleElement> ResizeHandle<E> {
    pub fn new(element: E, edges: Edges) -> Self {
        Self {
            element,
            edges,
            controller: None,
            container: None,
            listening: false,
        }
    }

    /// Bind directly to a controller. Takes precedence over a container.
    pub fn with_controller(mut self, sink: LocalPointerSink) -> Self {
        self.controller = Some(sink);
        self
    }

    /// Bind to the container registered under `name`, resolved on each press.
    pub fn with_container(mut self, directory: Arc<ControllerDirectory>, name: impl Into<String>) -> Self {
        self.container = Some(ContainerRef {
            directory,
            name: name.into(),
        });
        self
    }

    pub fn set_controller(&mut self, sink: Option<LocalPointerSink>) {
        self.controller = sink;
    }

    pub fn edges(&self) -> Edges {
        self.edges
    }

    pub fn set_edges(&mut self, edges: Edges) {
        self.edges = edges;
    }

    pub fn element(&self) -> &E {
        &self.element
    }

    /// Returns true while the handle is pressed and listening for moves.
    pub fn is_listening(&self) -> bool {
        self.listening
    }

    /// The controller this handle currently drives.
    pub fn resolve(&self) -> ResizeResult<LocalPointerSink> {
        if let Some(sink) = &self.controller {
            return Ok(sink.clone());
        }
        match &self.container {
            Some(container) => container
                .directory
                .resolve(&container.name)
                .ok_or_else(|| ResizeError::UnknownContainer(container.name.clone())),
            None => Err(ResizeError::MissingController),
        }
    }

    /// Handle a native event fired on the handle element.
    ///
    /// Fails only when the handle cannot find its controller.
    pub fn handle_event(&mut self, raw: RawPointerEvent) -> ResizeResult<()> {
        let Some((x, y)) = raw.target_coords() else {
            trace!(kind = raw.kind.dom_name(), "Handle event without pointer position");
            return Ok(());
        };

        match raw.kind.phase() {
            PointerPhase::Down => {
                let sink = self.resolve()?;
                if let Err(err) = raw.prevent_default() {
                    debug!(%err, "Ignoring refused preventDefault on handle press");
                }
                self.attach_local_listeners();
                sink.send(PointerSignal::local(
                    PointerPhase::Down,
                    x,
                    y,
                    self.edges,
                    Some(Arc::new(raw)),
                ));
            }
            PointerPhase::Move => {
                if !self.listening {
                    return Ok(());
                }
                let sink = self.resolve()?;
                sink.send(PointerSignal::local(
                    PointerPhase::Move,
                    x,
                    y,
                    self.edges,
                    Some(Arc::new(raw)),
                ));
            }
            PointerPhase::Up => {
                self.detach_local_listeners();
                let sink = self.resolve()?;
                sink.send(PointerSignal::local(
                    PointerPhase::Up,
                    x,
                    y,
                    self.edges,
                    Some(Arc::new(raw)),
                ));
            }
        }
        Ok(())
    }

    fn attach_local_listeners(&mut self) {
        if self.listening {
            return;
        }
        for kind in LOCAL_MOVE_KINDS {
            self.element.listen(kind);
        }
        self.listening = true;
    }

    fn detach_local_listeners(&mut self) {
        if !self.listening {
            return;
        }
        for kind in LOCAL_MOVE_KINDS {
            self.element.unlisten(kind);
        }
        self.listening = false;
    }
}

impl<E: HandleElement> Drop for ResizeHandle<E> {
    fn drop(&mut self) {
        self.detach_local_listeners();
    }
}
