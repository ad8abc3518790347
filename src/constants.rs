//! Crate-wide constants.
//!
//! Centralizes default configuration values and the class/cursor names
//! applied to elements while a resize is in progress.

// ============================================================================
// Timing & Thresholds
// ============================================================================

/// Default pointer-move throttle window in milliseconds
pub const MOUSE_MOVE_THROTTLE_MS: u64 = 50;

/// Move threshold that disables click detection (resize starts on press)
pub const DISABLE_CLICK_MOVE_THRESHOLD: f64 = 0.0;

/// Snap size used on an axis with no configured snap grid
pub const NO_SNAP: f64 = 1.0;

// ============================================================================
// Element Classes
// ============================================================================

/// Class added to the resizing element while a resize is visible
pub const RESIZE_ACTIVE_CLASS: &str = "resize-active";

/// Class added to the ghost clone of the resizing element
pub const RESIZE_GHOST_ELEMENT_CLASS: &str = "resize-ghost-element";

// ============================================================================
// Cursors
// ============================================================================

pub const CURSOR_TOP_LEFT: &str = "nw-resize";
pub const CURSOR_TOP_RIGHT: &str = "ne-resize";
pub const CURSOR_BOTTOM_LEFT: &str = "sw-resize";
pub const CURSOR_BOTTOM_RIGHT: &str = "se-resize";
pub const CURSOR_LEFT_OR_RIGHT: &str = "col-resize";
pub const CURSOR_TOP_OR_BOTTOM: &str = "row-resize";

// ============================================================================
// Logging
// ============================================================================

/// Filter directive used when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "resizable_element=info";

/// Pipeline runs slower than this are reported by the profiler
pub const SLOW_MOVE_MS: f64 = 4.0;
