//! Unit tests for perf module.

use postercanvas::perf::{OperationStats, ScopedTimer, measure, operation_stats, record_operation};

#[test]
fn test_scoped_timer_creation() {
    // The timer should not warn because threshold is high
    let timer = ScopedTimer::new("test_op", 1000.0);
    assert!(timer.elapsed_ms() >= 0.0);
}

#[test]
fn test_operation_stats_average() {
    let mut stats = OperationStats::default();
    stats.record(5.0);
    stats.record(10.0);
    stats.record(15.0);

    // Average should be (5 + 10 + 15) / 3 = 10
    assert!((stats.average() - 10.0).abs() < 0.001);
    assert_eq!(stats.max(), 15.0);
    assert_eq!(stats.count(), 3);
}

#[test]
fn test_operation_stats_evicts_old_samples() {
    let mut stats = OperationStats::default();
    stats.record(1000.0);
    for _ in 0..100 {
        stats.record(1.0);
    }

    // The outlier fell out of the window but still counts toward max
    assert!((stats.average() - 1.0).abs() < 0.001);
    assert_eq!(stats.max(), 1000.0);
    assert_eq!(stats.count(), 101);
}

#[test]
fn test_empty_stats_average_is_zero() {
    assert_eq!(OperationStats::default().average(), 0.0);
}

#[test]
fn test_global_operation_stats() {
    // Unique name so parallel tests don't interfere
    record_operation("perf_tests::global", 2.0);
    record_operation("perf_tests::global", 4.0);

    let stats = operation_stats("perf_tests::global").unwrap();
    assert_eq!(stats.count(), 2);
    assert!((stats.average() - 3.0).abs() < 0.001);
    assert!(operation_stats("perf_tests::never_recorded").is_none());
}

#[test]
fn test_measure_returns_result() {
    let (value, elapsed) = measure(|| 21 * 2);
    assert_eq!(value, 42);
    assert!(elapsed >= 0.0);
}
