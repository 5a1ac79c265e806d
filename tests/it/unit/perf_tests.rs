//! Unit tests for perf module.

use showcase::perf::{measure, PerfMonitor, ScopedTimer};

#[test]
fn test_perf_monitor_basic() {
    let mut monitor = PerfMonitor::new();

    monitor.begin_frame();
    let time = monitor.end_frame();

    assert!(time.is_some());
    assert!(time.unwrap() >= 0.0);
    assert_eq!(monitor.total_frames(), 1);
}

#[test]
fn test_end_frame_without_begin() {
    let mut monitor = PerfMonitor::new();
    assert_eq!(monitor.end_frame(), None);
    assert_eq!(monitor.total_frames(), 0);
}

#[test]
fn test_operation_stats_recording() {
    let mut monitor = PerfMonitor::new();

    monitor.record_operation("carousel_layout", 5.0);
    monitor.record_operation("carousel_layout", 10.0);
    monitor.record_operation("carousel_layout", 15.0);

    let stats = monitor.get_operation_stats("carousel_layout").unwrap();
    assert!((stats.average() - 10.0).abs() < 0.001);
    assert_eq!(stats.max(), 15.0);
    assert_eq!(stats.count(), 3);
}

#[test]
fn test_reset_clears_everything() {
    let mut monitor = PerfMonitor::new();
    monitor.begin_frame();
    monitor.end_frame();
    monitor.record_operation("momentum_tick", 1.0);

    monitor.reset();
    assert_eq!(monitor.total_frames(), 0);
    assert_eq!(monitor.average_frame_time(), 0.0);
    assert!(monitor.get_operation_stats("momentum_tick").is_none());
}

#[test]
fn test_frame_summary_statistics() {
    let mut monitor = PerfMonitor::new();
    monitor.record_frame(10.0);
    monitor.record_frame(40.0);

    assert_eq!(monitor.total_frames(), 2);
    assert_eq!(monitor.max_frame_time(), 40.0);
    assert_eq!(monitor.average_frame_time(), 25.0);
    assert_eq!(monitor.estimated_fps(), 40.0);
    // Only the 40ms frame exceeds twice the 60 FPS budget
    assert_eq!(monitor.slow_frame_percentage(), 50.0);
}

#[test]
fn test_summary_logged_only_when_slow() {
    let mut monitor = PerfMonitor::new();
    assert!(!monitor.log_summary_if_slow());

    monitor.record_frame(8.0);
    assert!(!monitor.log_summary_if_slow());

    monitor.record_frame(60.0);
    monitor.record_operation("carousel_layout", 3.0);
    assert!(monitor.log_summary_if_slow());
}

#[test]
fn test_empty_monitor_reports_zero() {
    let monitor = PerfMonitor::new();
    assert_eq!(monitor.estimated_fps(), 0.0);
    assert_eq!(monitor.slow_frame_percentage(), 0.0);
    assert_eq!(monitor.max_frame_time(), 0.0);
}

#[test]
fn test_scoped_timer_creation() {
    // High threshold: dropping must not warn or panic
    let _timer = ScopedTimer::new("test_op", 1000.0);
}

#[test]
fn test_measure_returns_result() {
    let (value, elapsed) = measure(|| 21 * 2);
    assert_eq!(value, 42);
    assert!(elapsed >= 0.0);
}
