//! Unit tests for subscriber setup.

use resizable_element::logging;

#[test]
fn test_init_is_idempotent() {
    logging::init();

    // A global subscriber now exists, whoever installed it
    assert!(!logging::init());
    assert!(!logging::init_with_filter("resizable_element=trace"));
}
