//! Time-based throttling of pointer moves.
//!
//! The first move after a quiet window passes straight through. Moves inside
//! the window replace each other as a single pending move, which is released
//! once the window has elapsed or flushed unconditionally before a press or
//! release is handled, so the last position of a drag always reaches the
//! pipeline.

use std::time::{Duration, Instant};

#[derive(Debug)]
pub struct MoveThrottle<T> {
    window: Duration,
    last_emit: Option<Instant>,
    pending: Option<T>,
}

impl<T> MoveThrottle<T> {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            last_emit: None,
            pending: None,
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    pub fn set_window(&mut self, window: Duration) {
        self.window = window;
    }

    fn window_open(&self, now: Instant) -> bool {
        match self.last_emit {
            None => true,
            Some(last) => now.saturating_duration_since(last) >= self.window,
        }
    }

    /// Offer a move; returns it if it may be processed now.
    pub fn offer(&mut self, item: T, now: Instant) -> Option<T> {
        if self.window.is_zero() || self.window_open(now) {
            self.last_emit = Some(now);
            self.pending = None;
            return Some(item);
        }
        self.pending = Some(item);
        None
    }

    /// Release the pending move if its window has elapsed.
    pub fn flush_due(&mut self, now: Instant) -> Option<T> {
        if self.pending.is_some() && self.window_open(now) {
            self.last_emit = Some(now);
            return self.pending.take();
        }
        None
    }

    /// Release the pending move regardless of timing.
    pub fn flush(&mut self) -> Option<T> {
        self.pending.take()
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Forget timing and any pending move.
    pub fn reset(&mut self) {
        self.last_emit = None;
        self.pending = None;
    }
}
