//! Raw pointer events and their normalized form.
//!
//! Hosts translate native mouse/touch events into [`RawPointerEvent`]; the
//! pointer source normalizes them into [`PointerEvent`] coordinates before
//! broadcasting.

use crate::error::{ResizeError, ResizeResult};
use crate::types::Edges;
use serde::Serialize;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Native event types the resize system listens for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerEventKind {
    MouseDown,
    MouseMove,
    MouseUp,
    TouchStart,
    TouchMove,
    TouchEnd,
    TouchCancel,
}

impl PointerEventKind {
    /// Which broadcast channel the kind feeds.
    pub fn phase(self) -> PointerPhase {
        match self {
            Self::MouseDown | Self::TouchStart => PointerPhase::Down,
            Self::MouseMove | Self::TouchMove => PointerPhase::Move,
            Self::MouseUp | Self::TouchEnd | Self::TouchCancel => PointerPhase::Up,
        }
    }

    pub fn is_touch(self) -> bool {
        matches!(
            self,
            Self::TouchStart | Self::TouchMove | Self::TouchEnd | Self::TouchCancel
        )
    }

    /// DOM event name.
    pub fn dom_name(self) -> &'static str {
        match self {
            Self::MouseDown => "mousedown",
            Self::MouseMove => "mousemove",
            Self::MouseUp => "mouseup",
            Self::TouchStart => "touchstart",
            Self::TouchMove => "touchmove",
            Self::TouchEnd => "touchend",
            Self::TouchCancel => "touchcancel",
        }
    }
}

/// The three broadcast channels of a pointer source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerPhase {
    Down,
    Move,
    Up,
}

impl PointerPhase {
    pub const ALL: [PointerPhase; 3] = [PointerPhase::Down, PointerPhase::Move, PointerPhase::Up];

    /// Native kinds that feed this channel; touch kinds only when supported.
    pub fn native_kinds(self, touch: bool) -> Vec<PointerEventKind> {
        let (mouse, touch_kinds): (PointerEventKind, &[PointerEventKind]) = match self {
            Self::Down => (PointerEventKind::MouseDown, &[PointerEventKind::TouchStart]),
            Self::Move => (PointerEventKind::MouseMove, &[PointerEventKind::TouchMove]),
            Self::Up => (
                PointerEventKind::MouseUp,
                &[PointerEventKind::TouchEnd, PointerEventKind::TouchCancel],
            ),
        };
        let mut kinds = vec![mouse];
        if touch {
            kinds.extend_from_slice(touch_kinds);
        }
        kinds
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Self::Down => 0,
            Self::Move => 1,
            Self::Up => 2,
        }
    }
}

/// One touch point of a touch event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TouchPoint {
    pub client_x: f64,
    pub client_y: f64,
}

impl TouchPoint {
    pub fn new(client_x: f64, client_y: f64) -> Self {
        Self { client_x, client_y }
    }
}

/// A native pointer event as reported by the host.
///
/// `prevent_default` records the request in a shared flag the host reads
/// back after dispatch; events from passive listeners refuse it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPointerEvent {
    pub kind: PointerEventKind,
    pub client_x: f64,
    pub client_y: f64,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub touches: Vec<TouchPoint>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub changed_touches: Vec<TouchPoint>,
    /// Active touches that started on the element the listener sits on.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub target_touches: Vec<TouchPoint>,
    pub cancelable: bool,
    #[serde(skip)]
    default_prevented: Arc<AtomicBool>,
}

impl RawPointerEvent {
    /// A mouse event at client coordinates.
    pub fn mouse(kind: PointerEventKind, client_x: f64, client_y: f64) -> Self {
        Self {
            kind,
            client_x,
            client_y,
            touches: Vec::new(),
            changed_touches: Vec::new(),
            target_touches: Vec::new(),
            cancelable: true,
            default_prevented: Arc::new(AtomicBool::new(false)),
        }
    }

    /// A touch event with its active and changed touch lists.
    pub fn touch(
        kind: PointerEventKind,
        touches: Vec<TouchPoint>,
        changed_touches: Vec<TouchPoint>,
    ) -> Self {
        Self {
            kind,
            client_x: 0.0,
            client_y: 0.0,
            touches,
            changed_touches,
            target_touches: Vec::new(),
            cancelable: true,
            default_prevented: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Set the touches that started on the listening element.
    pub fn with_target_touches(mut self, target_touches: Vec<TouchPoint>) -> Self {
        self.target_touches = target_touches;
        self
    }

    /// Mark the event as coming from a passive listener.
    pub fn passive(mut self) -> Self {
        self.cancelable = false;
        self
    }

    /// Ask the host to cancel the event's default action.
    pub fn prevent_default(&self) -> ResizeResult<()> {
        if !self.cancelable {
            return Err(ResizeError::host(format!(
                "unable to preventDefault inside passive {} listener",
                self.kind.dom_name()
            )));
        }
        self.default_prevented.store(true, Ordering::Relaxed);
        Ok(())
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented.load(Ordering::Relaxed)
    }

    /// Client coordinates of the pointer this event reports.
    ///
    /// Mouse events use their own coordinates; touchstart/touchmove the first
    /// active touch; touchend/touchcancel the first changed touch. Touch
    /// events without the relevant touch yield `None`.
    pub fn client_coords(&self) -> Option<(f64, f64)> {
        let point = match self.kind {
            PointerEventKind::MouseDown | PointerEventKind::MouseMove | PointerEventKind::MouseUp => {
                return Some((self.client_x, self.client_y));
            }
            PointerEventKind::TouchStart | PointerEventKind::TouchMove => self.touches.first(),
            PointerEventKind::TouchEnd | PointerEventKind::TouchCancel => {
                self.changed_touches.first()
            }
        };
        point.map(|p| (p.client_x, p.client_y))
    }

    /// Client coordinates as seen by a listener on a specific element.
    ///
    /// Same as [`client_coords`](Self::client_coords), except touchmove reads
    /// the first target touch so touches elsewhere on the page are ignored.
    pub fn target_coords(&self) -> Option<(f64, f64)> {
        match self.kind {
            PointerEventKind::TouchMove => self
                .target_touches
                .first()
                .map(|p| (p.client_x, p.client_y)),
            _ => self.client_coords(),
        }
    }
}

/// A normalized pointer position with its originating event.
#[derive(Debug, Clone)]
pub struct PointerEvent {
    pub x: f64,
    pub y: f64,
    pub raw: Arc<RawPointerEvent>,
}

impl PointerEvent {
    /// Normalize a raw event; `None` for touch events without a touch point.
    pub fn from_raw(raw: RawPointerEvent) -> Option<Self> {
        let (x, y) = raw.client_coords()?;
        Some(Self {
            x,
            y,
            raw: Arc::new(raw),
        })
    }
}

/// One entry of a controller's input queue.
///
/// Document-wide events arrive without edges; handle-forwarded events carry
/// the edges of the handle that produced them.
#[derive(Debug, Clone)]
pub struct PointerSignal {
    pub phase: PointerPhase,
    pub x: f64,
    pub y: f64,
    pub edges: Option<Edges>,
    pub raw: Option<Arc<RawPointerEvent>>,
}

impl PointerSignal {
    pub fn from_event(phase: PointerPhase, event: &PointerEvent) -> Self {
        Self {
            phase,
            x: event.x,
            y: event.y,
            edges: None,
            raw: Some(Arc::clone(&event.raw)),
        }
    }

    /// A signal forwarded by a handle.
    pub fn local(phase: PointerPhase, x: f64, y: f64, edges: Edges, raw: Option<Arc<RawPointerEvent>>) -> Self {
        Self {
            phase,
            x,
            y,
            edges: Some(edges),
            raw,
        }
    }
}
