//! Snapshot tests using the insta crate.
//!
//! Notification payloads and configuration are serialized for hosts, so
//! their JSON shape is pinned here.
//!
//! To update snapshots after intentional changes:
//! ```sh
//! cargo insta test --accept
//! ```

use resizable_element::{
    ClickEvent, Edge, EdgesDiff, GhostPositioning, PointerEventKind, RawPointerEvent, Rectangle,
    ResizableConfig, ResizeEvent,
};
use std::sync::Arc;

// ============================================================================
// Notification Payloads
// ============================================================================

#[test]
fn snapshot_resize_event() {
    let event = ResizeEvent {
        edges: EdgesDiff {
            bottom: Some(4.5),
            left: Some(-12.5),
            ..Default::default()
        },
        rectangle: Rectangle::from_sides(10.25, 64.5, -2.5, 97.75),
    };

    insta::assert_json_snapshot!(event, @r#"
    {
      "edges": {
        "bottom": 4.5,
        "left": -12.5
      },
      "rectangle": {
        "top": 10.25,
        "bottom": 64.5,
        "left": -2.5,
        "right": 97.75,
        "height": 54.25,
        "width": 100.25
      }
    }
    "#);
}

#[test]
fn snapshot_click_event() {
    let click = ClickEvent {
        client_x: 12.5,
        client_y: 7.5,
        event: Some(Arc::new(RawPointerEvent::mouse(
            PointerEventKind::MouseUp,
            12.5,
            7.5,
        ))),
    };

    insta::assert_json_snapshot!(click, @r#"
    {
      "clientX": 12.5,
      "clientY": 7.5,
      "event": {
        "kind": "mouseup",
        "clientX": 12.5,
        "clientY": 7.5,
        "cancelable": true
      }
    }
    "#);
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn snapshot_config() {
    let config = ResizableConfig::default()
        .with_ghost_resize(true)
        .with_snap(Edge::Right, 7.5)
        .with_ghost_positioning(GhostPositioning::Absolute)
        .with_throttle_ms(16)
        .with_move_threshold(2.5)
        .with_validate_resize(|_| true);

    insta::assert_json_snapshot!(config, @r#"
    {
      "enableGhostResize": true,
      "resizeSnapGrid": {
        "right": 7.5
      },
      "resizeCursors": {
        "topLeft": "nw-resize",
        "topRight": "ne-resize",
        "bottomLeft": "sw-resize",
        "bottomRight": "se-resize",
        "leftOrRight": "col-resize",
        "topOrBottom": "row-resize"
      },
      "ghostElementPositioning": "absolute",
      "allowNegativeResizes": false,
      "mouseMoveThrottleMS": 16,
      "resizeMoveThreshold": 2.5
    }
    "#);
}
