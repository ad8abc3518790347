//! Pointer input handling for one resizable element.
//!
//! This module implements the resize interaction for a single element: it
//! turns the shared document pointer stream, merged with events forwarded by
//! handles, into resize sessions and lifecycle notifications.
//!
//! ## Architecture
//!
//! The controller uses an explicit state machine ([`ResizeState`]) for the
//! in-progress session. Global and handle-forwarded events land in one queue
//! and are processed in delivery order by [`ResizeController::poll`].
//!
//! ## Modules
//!
//! - `state` - Resize state machine enum and helper methods
//! - `mouse_down` - Pointer down handling (arm, start visible resize)
//! - `drag` - Pointer move pipeline (snap, dedup, validate, notify)
//! - `mouse_up` - Pointer up handling (resize end or click)
//! - `throttle` - Move rate limiting
//! - `emitter` - Notification listener lists

mod drag;
mod emitter;
mod mouse_down;
mod mouse_up;
mod state;
mod throttle;

pub use emitter::EventEmitter;
pub use state::{ResizeSession, ResizeState};
pub use throttle::MoveThrottle;

use crate::config::ResizableConfig;
use crate::constants::RESIZE_ACTIVE_CLASS;
use crate::host::ElementHost;
use crate::perf::OperationStats;
use crate::pointer::{PointerPhase, PointerRegistry, PointerSignal, PointerSource, Subscription};
use crate::types::{ClickEvent, Delta, Rectangle, ResizeEvent};
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::Instant;
use tracing::{debug, trace};

/// Sending side of a controller's queue, handed to handles.
///
/// Cloning is cheap; every clone feeds the same controller.
#[derive(Debug, Clone)]
pub struct LocalPointerSink {
    sender: Sender<PointerSignal>,
}

impl LocalPointerSink {
    /// Queue a signal. Returns false once the controller is gone.
    pub fn send(&self, signal: PointerSignal) -> bool {
        match self.sender.send(signal) {
            Ok(()) => true,
            Err(_) => {
                trace!("Dropping pointer signal for destroyed controller");
                false
            }
        }
    }
}

/// Pointer position bookkeeping between a press and its release.
#[derive(Debug, Clone, Copy)]
struct DragTracker {
    start_x: f64,
    start_y: f64,
    /// Raw delta of the last move, for grid-cell change detection
    previous: Option<Delta>,
}

impl DragTracker {
    fn new(x: f64, y: f64) -> Self {
        Self {
            start_x: x,
            start_y: y,
            previous: None,
        }
    }

    fn delta_to(&self, x: f64, y: f64) -> Delta {
        Delta::new(x - self.start_x, y - self.start_y)
    }
}

/// Per-element resize state machine.
pub struct ResizeController<H: ElementHost> {
    host: H,
    config: ResizableConfig,
    state: ResizeState<H::Ghost>,
    drag: Option<DragTracker>,
    throttle: MoveThrottle<PointerSignal>,

    // Input
    queue: Option<Receiver<PointerSignal>>,
    local: Sender<PointerSignal>,
    subscriptions: Vec<Subscription>,

    // Notifications
    resize_start: EventEmitter<ResizeEvent>,
    resizing: EventEmitter<ResizeEvent>,
    resize_end: EventEmitter<ResizeEvent>,
    clicked: EventEmitter<ClickEvent>,

    move_stats: OperationStats,
}

impl<H: ElementHost> ResizeController<H> {
    /// Attach a controller to `host`, subscribing to all three channels of
    /// the document's pointer source.
    pub fn new(host: H, config: ResizableConfig, source: &Arc<PointerSource>) -> Self {
        let (sender, receiver) = mpsc::channel();
        let subscriptions = PointerPhase::ALL
            .into_iter()
            .map(|phase| source.subscribe(phase, sender.clone()))
            .collect();
        let throttle = MoveThrottle::new(config.throttle_window());

        debug!("Resize controller attached");
        Self {
            host,
            config,
            state: ResizeState::Idle,
            drag: None,
            throttle,
            queue: Some(receiver),
            local: sender,
            subscriptions,
            resize_start: EventEmitter::default(),
            resizing: EventEmitter::default(),
            resize_end: EventEmitter::default(),
            clicked: EventEmitter::default(),
            move_stats: OperationStats::default(),
        }
    }

    /// Attach using the registry's shared pointer source.
    pub fn with_registry(host: H, config: ResizableConfig, registry: &PointerRegistry) -> Self {
        Self::new(host, config, &registry.pointer_source())
    }

    /// Sink for handle-forwarded pointer events.
    pub fn local_sink(&self) -> LocalPointerSink {
        LocalPointerSink {
            sender: self.local.clone(),
        }
    }

    // ------------------------------------------------------------------------
    // Notifications
    // ------------------------------------------------------------------------

    pub fn on_resize_start(&mut self, listener: impl FnMut(&ResizeEvent) + 'static) {
        self.resize_start.subscribe(listener);
    }

    pub fn on_resizing(&mut self, listener: impl FnMut(&ResizeEvent) + 'static) {
        self.resizing.subscribe(listener);
    }

    pub fn on_resize_end(&mut self, listener: impl FnMut(&ResizeEvent) + 'static) {
        self.resize_end.subscribe(listener);
    }

    pub fn on_click(&mut self, listener: impl FnMut(&ClickEvent) + 'static) {
        self.clicked.subscribe(listener);
    }

    // ------------------------------------------------------------------------
    // Event processing
    // ------------------------------------------------------------------------

    /// Process every queued pointer signal in delivery order, then release a
    /// throttled move whose window has elapsed. Returns the number of
    /// signals taken off the queue.
    pub fn poll(&mut self, now: Instant) -> usize {
        let Some(queue) = &self.queue else {
            return 0;
        };
        let signals: Vec<PointerSignal> = queue.try_iter().collect();
        let count = signals.len();

        self.throttle.set_window(self.config.throttle_window());
        for signal in signals {
            self.handle_signal(signal, now);
        }
        if let Some(pending) = self.throttle.flush_due(now) {
            self.handle_pointer_move(&pending);
        }
        count
    }

    fn handle_signal(&mut self, signal: PointerSignal, now: Instant) {
        match signal.phase {
            PointerPhase::Down => {
                self.flush_pending_move();
                self.handle_pointer_down(&signal);
            }
            PointerPhase::Move => {
                self.prevent_move_default(&signal);
                if let Some(signal) = self.throttle.offer(signal, now) {
                    self.handle_pointer_move(&signal);
                }
            }
            PointerPhase::Up => {
                self.flush_pending_move();
                self.handle_pointer_up(&signal);
            }
        }
    }

    fn flush_pending_move(&mut self) {
        if let Some(pending) = self.throttle.flush() {
            self.handle_pointer_move(&pending);
        }
    }

    /// Moves during a session must not scroll or select.
    fn prevent_move_default(&self, signal: &PointerSignal) {
        if self.state.is_idle() {
            return;
        }
        if let Some(raw) = &signal.raw {
            if let Err(err) = raw.prevent_default() {
                debug!(%err, "Ignoring refused preventDefault");
            }
        }
    }

    // ------------------------------------------------------------------------
    // Teardown
    // ------------------------------------------------------------------------

    /// Unsubscribe from the pointer source, close the queue and abandon any
    /// session without a resize-end notification. Idempotent.
    pub fn destroy(&mut self) {
        if self.queue.is_none() {
            return;
        }
        self.subscriptions.clear();
        self.queue = None;
        self.throttle.reset();
        self.drag = None;

        if let Some((session, visible)) = self.state.take() {
            if let Some(ghost) = session.ghost {
                self.host.remove_ghost(ghost);
            }
            if visible {
                self.host.set_class(RESIZE_ACTIVE_CLASS, false);
            }
            debug!(visible, "Abandoned resize session on teardown");
        }
        self.host.set_document_cursor("");
        debug!("Resize controller destroyed");
    }

    pub fn is_destroyed(&self) -> bool {
        self.queue.is_none()
    }

    // ------------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------------

    pub fn state(&self) -> &ResizeState<H::Ghost> {
        &self.state
    }

    /// Returns true while a resize is visible.
    pub fn is_resizing(&self) -> bool {
        self.state.is_dragging()
    }

    /// Last accepted rectangle of the current session.
    pub fn current_rect(&self) -> Option<Rectangle> {
        self.state.current_rect()
    }

    pub fn has_pending_move(&self) -> bool {
        self.throttle.has_pending()
    }

    pub fn config(&self) -> &ResizableConfig {
        &self.config
    }

    /// Configuration changes apply from the next processed event.
    pub fn config_mut(&mut self) -> &mut ResizableConfig {
        &mut self.config
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Timing of processed pointer moves.
    pub fn move_stats(&self) -> &OperationStats {
        &self.move_stats
    }
}

impl<H: ElementHost> Drop for ResizeController<H> {
    fn drop(&mut self) {
        self.destroy();
    }
}
