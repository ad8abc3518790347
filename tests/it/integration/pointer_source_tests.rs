//! Document pointer source shared by several controllers.

use crate::helpers::{FakeDocument, FakeElement, Notifications, TestControllerBuilder};
use resizable_element::{
    Edge, Edges, PointerEventKind, PointerPhase, PointerRegistry, PointerSignal, RawPointerEvent,
    ResizableConfig, ResizeController, TouchPoint,
};
use std::sync::Arc;
use std::time::Instant;

fn registry_for(document: &FakeDocument) -> PointerRegistry {
    let document = document.clone();
    PointerRegistry::new(move || document.clone())
}

#[test]
fn test_registry_hands_out_one_source() {
    let registry = PointerRegistry::new(FakeDocument::default);
    assert!(!registry.is_initialized());

    let a = registry.pointer_source();
    let b = registry.pointer_source();

    assert!(registry.is_initialized());
    assert!(Arc::ptr_eq(&a, &b));
}

#[test]
fn test_controllers_share_document_listeners() {
    let document = FakeDocument::default();
    let registry = registry_for(&document);

    let first = ResizeController::with_registry(FakeElement::new(), ResizableConfig::default(), &registry);
    let second = ResizeController::with_registry(FakeElement::new(), ResizableConfig::default(), &registry);

    let source = registry.pointer_source();
    assert_eq!(document.attach_calls(), 3);
    for phase in PointerPhase::ALL {
        assert_eq!(source.ref_count(phase), 2);
        assert_eq!(source.subscriber_count(phase), 2);
    }

    drop(first);
    assert_eq!(source.subscriber_count(PointerPhase::Move), 1);
    assert_eq!(document.attached().len(), 3);
    drop(second);
    assert!(document.attached().is_empty());
    assert_eq!(document.attach_calls(), 3);
}

#[test]
fn test_events_broadcast_to_every_controller() {
    let document = FakeDocument::default();
    let registry = registry_for(&document);
    let config = ResizableConfig::default().with_throttle_ms(0);

    let mut first = ResizeController::with_registry(FakeElement::new(), config.clone(), &registry);
    let mut second = ResizeController::with_registry(FakeElement::new(), config, &registry);
    let first_events = Notifications::attach(&mut first);
    let second_events = Notifications::attach(&mut second);

    // Only the first element is pressed on an edge
    first.local_sink().send(PointerSignal::local(
        PointerPhase::Down,
        0.0,
        0.0,
        Edges::of(&[Edge::Right]),
        None,
    ));
    let source = registry.pointer_source();
    assert_eq!(source.dispatch(RawPointerEvent::mouse(PointerEventKind::MouseDown, 0.0, 0.0)), 2);
    assert_eq!(source.dispatch(RawPointerEvent::mouse(PointerEventKind::MouseMove, 5.0, 0.0)), 2);

    let now = Instant::now();
    first.poll(now);
    second.poll(now);

    assert_eq!(first_events.names(), vec!["start", "resizing"]);
    assert!(second_events.all().is_empty());
}

#[test]
fn test_touch_listeners_when_supported() {
    let rig = TestControllerBuilder::new()
        .with_document(FakeDocument::with_touch())
        .build();

    let attached = rig.document.attached();
    assert_eq!(attached.len(), 7);
    assert!(attached.contains(&PointerEventKind::TouchStart));
    assert!(attached.contains(&PointerEventKind::TouchCancel));
    assert!(rig.source.supports_touch());
}

#[test]
fn test_touch_drag_through_document() {
    let mut rig = TestControllerBuilder::new()
        .with_document(FakeDocument::with_touch())
        .build();

    rig.press(Edges::of(&[Edge::Right]), 0.0, 0.0);
    rig.dispatch(RawPointerEvent::touch(
        PointerEventKind::TouchMove,
        vec![TouchPoint::new(10.0, 0.0), TouchPoint::new(90.0, 90.0)],
        Vec::new(),
    ));
    rig.dispatch(RawPointerEvent::touch(
        PointerEventKind::TouchEnd,
        Vec::new(),
        vec![TouchPoint::new(10.0, 0.0)],
    ));

    assert_eq!(rig.events.names(), vec!["start", "resizing", "end"]);
    assert_eq!(rig.events.ends()[0].edges.right, Some(10.0));
}

#[test]
fn test_touch_without_point_is_dropped() {
    let mut rig = TestControllerBuilder::new()
        .with_document(FakeDocument::with_touch())
        .build();

    let reached = rig.dispatch(RawPointerEvent::touch(
        PointerEventKind::TouchMove,
        Vec::new(),
        vec![TouchPoint::new(1.0, 1.0)],
    ));
    assert_eq!(reached, 0);
}

#[test]
fn test_touch_ignored_without_support() {
    let mut rig = TestControllerBuilder::new().build();

    assert_eq!(rig.document.attached().len(), 3);
    let reached = rig.dispatch(RawPointerEvent::touch(
        PointerEventKind::TouchStart,
        vec![TouchPoint::new(1.0, 1.0)],
        Vec::new(),
    ));
    assert_eq!(reached, 0);
}

#[test]
fn test_registry_shutdown_detaches_listeners() {
    let document = FakeDocument::default();
    let registry = registry_for(&document);
    let controller = ResizeController::with_registry(FakeElement::new(), ResizableConfig::default(), &registry);
    assert_eq!(document.attached().len(), 3);

    registry.shutdown();
    assert!(document.attached().is_empty());

    // Late teardown of the controller is harmless
    drop(controller);
    assert_eq!(registry.pointer_source().ref_count(PointerPhase::Move), 0);
}
