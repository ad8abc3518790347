//! Unit tests for perf module.

use resizable_element::perf::{
    OperationStats, ScopedTimer, is_profiling_enabled, measure, set_profiling_enabled,
};

#[test]
fn test_operation_stats_recording() {
    let mut stats = OperationStats::default();
    assert_eq!(stats.min_ms(), None);
    assert_eq!(stats.average(), 0.0);

    stats.record(5.0);
    stats.record(10.0);
    stats.record(15.0);

    assert_eq!(stats.count(), 3);
    assert!((stats.average() - 10.0).abs() < 0.001);
    assert_eq!(stats.min_ms(), Some(5.0));
    assert_eq!(stats.max_ms(), 15.0);
}

#[test]
fn test_stats_average_over_retained_window() {
    let mut stats = OperationStats::default();
    for _ in 0..100 {
        stats.record(1.0);
    }
    for _ in 0..100 {
        stats.record(3.0);
    }

    assert_eq!(stats.count(), 200);
    assert!((stats.average() - 3.0).abs() < 0.001);
    assert_eq!(stats.min_ms(), Some(1.0));
}

#[test]
fn test_measure_returns_value() {
    let (value, elapsed) = measure(|| 21 * 2);

    assert_eq!(value, 42);
    assert!(elapsed >= 0.0);
}

#[test]
fn test_scoped_timer_creation() {
    // High threshold: dropping it must stay quiet
    let timer = ScopedTimer::new("pointer_move", 1000.0);
    assert_eq!(timer.name(), "pointer_move");
    assert!(timer.elapsed_ms() >= 0.0);
}

#[test]
fn test_runtime_profiling_toggle() {
    let initial = is_profiling_enabled();

    set_profiling_enabled(!initial);
    assert_eq!(is_profiling_enabled(), !initial);

    set_profiling_enabled(initial);
    assert_eq!(is_profiling_enabled(), initial);
}
