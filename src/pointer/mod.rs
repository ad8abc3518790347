//! Document-wide pointer input.
//!
//! ## Modules
//!
//! - `event` - Raw native events, normalized coordinates, queue signals
//! - `source` - Reference-counted document listener multiplexer and its registry

mod event;
mod source;

pub use event::{
    PointerEvent, PointerEventKind, PointerPhase, PointerSignal, RawPointerEvent, TouchPoint,
};
pub use source::{DocumentListeners, PointerRegistry, PointerSource, Subscription};
