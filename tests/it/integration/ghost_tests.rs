//! Ghost preview lifecycle.

use crate::helpers::{FakeElement, TestControllerBuilder};
use resizable_element::constants::RESIZE_GHOST_ELEMENT_CLASS;
use resizable_element::{Edge, Edges, GhostPositioning, Rectangle};

fn scrolled_element() -> FakeElement {
    let mut element = FakeElement::with_rect(10.0, 20.0, 100.0, 50.0);
    element.metrics.scroll_top = 5.0;
    element.metrics.scroll_left = 7.0;
    element
}

#[test]
fn test_ghost_created_at_starting_rect() {
    let mut rig = TestControllerBuilder::new()
        .with_ghost()
        .with_element(scrolled_element())
        .build();

    rig.press(Edges::of(&[Edge::Bottom, Edge::Right]), 0.0, 0.0);

    let log = rig.log.lock();
    assert_eq!(log.ghosts.len(), 1);
    let ghost = &log.ghosts[0];
    assert_eq!(ghost.position, GhostPositioning::Fixed);
    assert_eq!(ghost.rect.top, 20.0);
    assert_eq!(ghost.rect.left, 10.0);
    assert_eq!(ghost.rect.width, 100.0);
    assert_eq!(ghost.rect.height, 50.0);
    assert_eq!(ghost.rect.scroll_top, Some(5.0));
    assert_eq!(ghost.rect.scroll_left, Some(7.0));
    assert_eq!(ghost.cursor, "se-resize");
    assert_eq!(ghost.class, RESIZE_GHOST_ELEMENT_CLASS);
    assert!(log.original_hidden);
}

#[test]
fn test_ghost_follows_accepted_moves_and_is_removed() {
    let mut rig = TestControllerBuilder::new()
        .with_ghost()
        .with_element(scrolled_element())
        .build();

    rig.press(Edges::of(&[Edge::Bottom, Edge::Right]), 0.0, 0.0);
    rig.move_to(15.0, 5.0);
    {
        let log = rig.log.lock();
        assert_eq!(
            log.ghosts[0].updates,
            vec![Rectangle::from_sides(20.0, 75.0, 10.0, 125.0)]
        );
    }

    rig.release(15.0, 5.0);
    let log = rig.log.lock();
    assert!(log.ghosts[0].removed);
    assert!(!log.original_hidden);
    assert_eq!(log.live_ghosts(), 0);
}

#[test]
fn test_absolute_ghost_uses_offset_geometry() {
    let mut element = FakeElement::with_rect(10.0, 20.0, 100.0, 50.0);
    element.metrics.offset_left = 3.0;
    element.metrics.offset_top = 4.0;
    let mut rig = TestControllerBuilder::new()
        .with_config(|c| {
            c.with_ghost_resize(true)
                .with_ghost_positioning(GhostPositioning::Absolute)
        })
        .with_element(element)
        .build();

    rig.press(Edges::of(&[Edge::Right]), 0.0, 0.0);

    let log = rig.log.lock();
    let ghost = &log.ghosts[0];
    assert_eq!(ghost.position, GhostPositioning::Absolute);
    assert_eq!(ghost.rect.left, 3.0);
    assert_eq!(ghost.rect.top, 4.0);
    assert_eq!(ghost.rect.scroll_top, None);
}

#[test]
fn test_ghost_waits_for_threshold() {
    let mut rig = TestControllerBuilder::new()
        .with_ghost()
        .with_threshold(5.0)
        .build();

    rig.press(Edges::of(&[Edge::Right]), 0.0, 0.0);
    rig.move_to(2.0, 0.0);
    assert!(rig.log.lock().ghosts.is_empty());

    rig.move_to(6.0, 0.0);
    assert_eq!(rig.log.lock().live_ghosts(), 1);
}

#[test]
fn test_click_never_creates_ghost() {
    let mut rig = TestControllerBuilder::new()
        .with_ghost()
        .with_threshold(5.0)
        .build();

    rig.press(Edges::of(&[Edge::Right]), 0.0, 0.0);
    rig.release(0.0, 0.0);

    assert!(rig.log.lock().ghosts.is_empty());
    assert_eq!(rig.events.names(), vec!["click"]);
}

#[test]
fn test_failed_ghost_does_not_block_resize() {
    let mut element = FakeElement::new();
    element.fail_ghost = true;
    let mut rig = TestControllerBuilder::new()
        .with_ghost()
        .with_element(element)
        .build();

    rig.press(Edges::of(&[Edge::Right]), 0.0, 0.0);
    rig.move_to(10.0, 0.0);
    rig.release(10.0, 0.0);

    assert!(rig.log.lock().ghosts.is_empty());
    assert_eq!(rig.events.names(), vec!["start", "resizing", "end"]);
}

#[test]
fn test_no_ghost_unless_enabled() {
    let mut rig = TestControllerBuilder::new().build();

    rig.press(Edges::of(&[Edge::Right]), 0.0, 0.0);
    rig.move_to(10.0, 0.0);

    assert!(rig.log.lock().ghosts.is_empty());
}
