//! Shared document-level pointer source.
//!
//! One [`PointerSource`] exists per document. It owns the native listener
//! set and fans normalized events out to every subscribed controller, so
//! adding resizable elements never adds document listeners.
//!
//! ## Listener lifecycle
//!
//! ```text
//! acquire(phase): 0 -> 1   attach native listeners for the phase
//! acquire(phase): n -> n+1 no-op
//! release(phase): 1 -> 0   detach native listeners for the phase
//! ```
//!
//! [`Subscription`] guards pair a sink registration with an acquire and
//! release on drop.

use super::event::{PointerEvent, PointerEventKind, PointerPhase, PointerSignal, RawPointerEvent};
use once_cell::sync::OnceCell;
use parking_lot::Mutex;
use std::sync::Arc;
use std::sync::mpsc::Sender;
use tracing::{debug, trace, warn};

/// Host binding to the document the pointer source listens on.
pub trait DocumentListeners: Send {
    /// Whether the environment supports touch input. Queried once.
    fn supports_touch(&self) -> bool;

    /// Install the native listener for `kind` on the document.
    fn listen(&mut self, kind: PointerEventKind);

    /// Remove the native listener for `kind` from the document.
    fn unlisten(&mut self, kind: PointerEventKind);
}

#[derive(Default)]
struct Channel {
    ref_count: usize,
    sinks: Vec<(u64, Sender<PointerSignal>)>,
}

struct SourceState {
    document: Box<dyn DocumentListeners>,
    channels: [Channel; 3],
    next_sink_id: u64,
}

/// Reference-counted multiplexer of document pointer events.
pub struct PointerSource {
    touch: bool,
    state: Mutex<SourceState>,
}

impl PointerSource {
    /// Create a source bound to a document. Touch support is evaluated here
    /// and cached for the source's lifetime.
    pub fn new(document: impl DocumentListeners + 'static) -> Self {
        Self::from_boxed(Box::new(document))
    }

    fn from_boxed(document: Box<dyn DocumentListeners>) -> Self {
        let touch = document.supports_touch();
        debug!(touch, "Pointer source created");
        Self {
            touch,
            state: Mutex::new(SourceState {
                document,
                channels: Default::default(),
                next_sink_id: 0,
            }),
        }
    }

    pub fn supports_touch(&self) -> bool {
        self.touch
    }

    /// Take a reference on a channel, attaching native listeners on the first.
    /// Returns the new reference count.
    pub fn acquire(&self, phase: PointerPhase) -> usize {
        let mut state = self.state.lock();
        let count = {
            let channel = &mut state.channels[phase.index()];
            channel.ref_count += 1;
            channel.ref_count
        };
        if count == 1 {
            for kind in phase.native_kinds(self.touch) {
                state.document.listen(kind);
            }
            debug!(?phase, "Attached document pointer listeners");
        }
        count
    }

    /// Drop a reference on a channel, detaching native listeners on the last.
    /// Returns the new reference count.
    pub fn release(&self, phase: PointerPhase) -> usize {
        let mut state = self.state.lock();
        let count = {
            let channel = &mut state.channels[phase.index()];
            if channel.ref_count == 0 {
                warn!(?phase, "Pointer channel released more often than acquired");
                return 0;
            }
            channel.ref_count -= 1;
            channel.ref_count
        };
        if count == 0 {
            for kind in phase.native_kinds(self.touch) {
                state.document.unlisten(kind);
            }
            debug!(?phase, "Detached document pointer listeners");
        }
        count
    }

    /// Register `sink` on a channel for as long as the returned guard lives.
    pub fn subscribe(self: &Arc<Self>, phase: PointerPhase, sink: Sender<PointerSignal>) -> Subscription {
        let id = {
            let mut state = self.state.lock();
            let id = state.next_sink_id;
            state.next_sink_id += 1;
            state.channels[phase.index()].sinks.push((id, sink));
            id
        };
        self.acquire(phase);
        Subscription {
            source: Arc::clone(self),
            phase,
            id,
        }
    }

    fn unsubscribe(&self, phase: PointerPhase, id: u64) {
        self.state.lock().channels[phase.index()]
            .sinks
            .retain(|(sink_id, _)| *sink_id != id);
        self.release(phase);
    }

    /// Deliver a native event to the channel it belongs to.
    ///
    /// Events for channels with no listeners attached, touch events on a
    /// source without touch support, and touch events without a touch point
    /// are ignored. Returns the number of sinks reached.
    pub fn dispatch(&self, raw: RawPointerEvent) -> usize {
        let phase = raw.kind.phase();
        if raw.kind.is_touch() && !self.touch {
            trace!(kind = raw.kind.dom_name(), "Ignoring touch event without touch support");
            return 0;
        }

        let state = self.state.lock();
        let channel = &state.channels[phase.index()];
        if channel.ref_count == 0 {
            return 0;
        }

        let Some(event) = PointerEvent::from_raw(raw) else {
            return 0;
        };

        let signal = PointerSignal::from_event(phase, &event);
        channel
            .sinks
            .iter()
            .filter(|(_, sink)| sink.send(signal.clone()).is_ok())
            .count()
    }

    /// Current reference count of a channel.
    pub fn ref_count(&self, phase: PointerPhase) -> usize {
        self.state.lock().channels[phase.index()].ref_count
    }

    pub fn subscriber_count(&self, phase: PointerPhase) -> usize {
        self.state.lock().channels[phase.index()].sinks.len()
    }

    /// Returns true if native listeners are attached for the channel.
    pub fn is_listening(&self, phase: PointerPhase) -> bool {
        self.ref_count(phase) > 0
    }

    /// Detach every native listener and forget all sinks.
    ///
    /// Outstanding [`Subscription`] guards become no-ops.
    pub fn shutdown(&self) {
        let mut state = self.state.lock();
        for phase in PointerPhase::ALL {
            let was_listening = {
                let channel = &mut state.channels[phase.index()];
                let listening = channel.ref_count > 0;
                channel.ref_count = 0;
                channel.sinks.clear();
                listening
            };
            if was_listening {
                for kind in phase.native_kinds(self.touch) {
                    state.document.unlisten(kind);
                }
            }
        }
        debug!("Pointer source shut down");
    }
}

/// Keeps a sink registered on a pointer channel; unregisters on drop.
pub struct Subscription {
    source: Arc<PointerSource>,
    phase: PointerPhase,
    id: u64,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        let registered = self.source.state.lock().channels[self.phase.index()]
            .sinks
            .iter()
            .any(|(id, _)| *id == self.id);
        // A shut-down source already cleared the sink and its reference.
        if registered {
            self.source.unsubscribe(self.phase, self.id);
        }
    }
}

type DocumentFactory = Box<dyn Fn() -> Box<dyn DocumentListeners> + Send + Sync>;

/// Lazily creates and hands out the single pointer source of a document.
///
/// Every controller of a document takes its source from the same registry,
/// so all of them share one set of document listeners.
pub struct PointerRegistry {
    factory: DocumentFactory,
    source: OnceCell<Arc<PointerSource>>,
}

impl PointerRegistry {
    /// `factory` binds to the document on first use.
    pub fn new<D, F>(factory: F) -> Self
    where
        D: DocumentListeners + 'static,
        F: Fn() -> D + Send + Sync + 'static,
    {
        Self {
            factory: Box::new(move || Box::new(factory())),
            source: OnceCell::new(),
        }
    }

    /// The document's pointer source; the same `Arc` on every call.
    pub fn pointer_source(&self) -> Arc<PointerSource> {
        Arc::clone(
            self.source
                .get_or_init(|| Arc::new(PointerSource::from_boxed((self.factory)()))),
        )
    }

    /// Returns true once the source has been created.
    pub fn is_initialized(&self) -> bool {
        self.source.get().is_some()
    }

    /// Tear down the document listeners at application shutdown.
    pub fn shutdown(&self) {
        if let Some(source) = self.source.get() {
            source.shutdown();
        }
    }
}
