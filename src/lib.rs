//! Interactive element resizing driven by pointer drags.
//!
//! ## Modules
//!
//! - `pointer` - Shared document pointer source and event normalization
//! - `geometry` - Pure rectangle, cursor and snap-grid math
//! - `input` - Per-element resize controller and its state machine
//! - `handle` - Handle elements forwarding events to a controller
//! - `host` - Traits the host UI implements for the resized element
//! - `config` - Per-element configuration
//!
//! ## Wiring
//!
//! ```ignore
//! let registry = PointerRegistry::new(|| MyDocument::new());
//! let mut controller = ResizeController::with_registry(element, ResizableConfig::default(), &registry);
//! controller.on_resize_end(|event| println!("{:?}", event.rectangle));
//!
//! let mut handle = ResizeHandle::new(handle_element, Edges::of(&[Edge::Right]))
//!     .with_controller(controller.local_sink());
//!
//! // host event loop
//! registry.pointer_source().dispatch(raw_event);
//! controller.poll(Instant::now());
//! ```

pub mod config;
pub mod constants;
pub mod error;
pub mod geometry;
pub mod handle;
pub mod host;
pub mod input;
pub mod logging;
pub mod perf;
pub mod pointer;
pub mod types;

pub use config::{ResizableConfig, ValidateResize};
pub use error::{ResizeError, ResizeResult};
pub use handle::{ControllerDirectory, HandleElement, ResizeHandle};
pub use host::{ClientRect, ElementHost, ElementMetrics, GhostInit};
pub use input::{LocalPointerSink, ResizeController, ResizeSession, ResizeState};
pub use pointer::{
    DocumentListeners, PointerEvent, PointerEventKind, PointerPhase, PointerRegistry, PointerSignal,
    PointerSource, RawPointerEvent, TouchPoint,
};
pub use types::{
    ClickEvent, Delta, Edge, Edges, EdgesDiff, GhostPositioning, Rectangle, ResizeCursors,
    ResizeEvent, SnapGrid, SnapSizes,
};
