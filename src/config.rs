//! Per-element resize configuration.
//!
//! Every [`ResizeController`](crate::ResizeController) owns its own
//! `ResizableConfig`; nothing here is shared between elements. The struct
//! deserializes from the same camelCase keys the host exposes as element
//! attributes, with every key optional.

use crate::constants::{DISABLE_CLICK_MOVE_THRESHOLD, MOUSE_MOVE_THROTTLE_MS};
use crate::error::{ResizeError, ResizeResult};
use crate::types::{Edge, GhostPositioning, ResizeCursors, ResizeEvent, SnapSizes};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tracing::warn;

/// Callback deciding whether a candidate resize is accepted.
pub type ValidateResize = Arc<dyn Fn(&ResizeEvent) -> bool + Send + Sync>;

#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResizableConfig {
    /// Called before each resizing notification; `false` drops the move
    #[serde(skip)]
    pub validate_resize: Option<ValidateResize>,
    /// Show a temporary clone between resize start and end
    pub enable_ghost_resize: bool,
    /// Per-side snap step in pixels
    pub resize_snap_grid: SnapSizes,
    pub resize_cursors: ResizeCursors,
    pub ghost_element_positioning: GhostPositioning,
    /// Accept rectangles with zero or negative width/height
    pub allow_negative_resizes: bool,
    /// Minimum time between processed pointer moves
    #[serde(rename = "mouseMoveThrottleMS")]
    pub mouse_move_throttle_ms: u64,
    /// Pointer travel needed before a press becomes a resize; `<= 0`
    /// starts resizing on press and disables click detection
    pub resize_move_threshold: f64,
}

impl Default for ResizableConfig {
    fn default() -> Self {
        Self {
            validate_resize: None,
            enable_ghost_resize: false,
            resize_snap_grid: SnapSizes::default(),
            resize_cursors: ResizeCursors::default(),
            ghost_element_positioning: GhostPositioning::default(),
            allow_negative_resizes: false,
            mouse_move_throttle_ms: MOUSE_MOVE_THROTTLE_MS,
            resize_move_threshold: DISABLE_CLICK_MOVE_THRESHOLD,
        }
    }
}

impl fmt::Debug for ResizableConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResizableConfig")
            .field("validate_resize", &self.validate_resize.as_ref().map(|_| "<fn>"))
            .field("enable_ghost_resize", &self.enable_ghost_resize)
            .field("resize_snap_grid", &self.resize_snap_grid)
            .field("resize_cursors", &self.resize_cursors)
            .field("ghost_element_positioning", &self.ghost_element_positioning)
            .field("allow_negative_resizes", &self.allow_negative_resizes)
            .field("mouse_move_throttle_ms", &self.mouse_move_throttle_ms)
            .field("resize_move_threshold", &self.resize_move_threshold)
            .finish()
    }
}

impl ResizableConfig {
    /// Parse and validate a JSON configuration.
    pub fn from_json_str(json: &str) -> ResizeResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a JSON configuration file.
    pub fn load_from_path(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(ResizeError::from)
            .with_context(|| format!("reading resize config {}", path.display()))?;
        Self::from_json_str(&json)
            .with_context(|| format!("parsing resize config {}", path.display()))
    }

    /// Reject values the pipeline cannot work with.
    pub fn validate(&self) -> ResizeResult<()> {
        for (edge, size) in self.resize_snap_grid.entries() {
            if !size.is_finite() || size < 0.0 {
                return Err(ResizeError::InvalidConfig(format!(
                    "snap grid for {edge:?} must be a positive number of pixels, got {size}"
                )));
            }
        }
        if self.resize_move_threshold.is_nan() {
            return Err(ResizeError::InvalidConfig(
                "resize move threshold must be a number".to_string(),
            ));
        }
        Ok(())
    }

    /// Throttle window as a duration.
    pub fn throttle_window(&self) -> Duration {
        Duration::from_millis(self.mouse_move_throttle_ms)
    }

    /// Returns true if a press starts resizing immediately.
    pub fn starts_on_press(&self) -> bool {
        self.resize_move_threshold <= 0.0
    }

    // ------------------------------------------------------------------------
    // Builder-style setters
    // ------------------------------------------------------------------------

    pub fn with_validate_resize(
        mut self,
        validate: impl Fn(&ResizeEvent) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.validate_resize = Some(Arc::new(validate));
        self
    }

    pub fn with_ghost_resize(mut self, enabled: bool) -> Self {
        self.enable_ghost_resize = enabled;
        self
    }

    /// Ignored, with a warning, unless `size` is a finite non-negative number.
    pub fn with_snap(mut self, edge: Edge, size: f64) -> Self {
        if !size.is_finite() || size < 0.0 {
            warn!(?edge, size, "Ignoring invalid snap size");
            return self;
        }
        self.resize_snap_grid = self.resize_snap_grid.with(edge, size);
        self
    }

    pub fn with_cursors(mut self, cursors: ResizeCursors) -> Self {
        self.resize_cursors = cursors;
        self
    }

    pub fn with_ghost_positioning(mut self, positioning: GhostPositioning) -> Self {
        self.ghost_element_positioning = positioning;
        self
    }

    pub fn with_negative_resizes(mut self, allowed: bool) -> Self {
        self.allow_negative_resizes = allowed;
        self
    }

    pub fn with_throttle_ms(mut self, ms: u64) -> Self {
        self.mouse_move_throttle_ms = ms;
        self
    }

    /// A NaN threshold is ignored with a warning.
    pub fn with_move_threshold(mut self, pixels: f64) -> Self {
        if pixels.is_nan() {
            warn!("Ignoring NaN resize move threshold");
            return self;
        }
        self.resize_move_threshold = pixels;
        self
    }
}
