use super::*;

#[test]
fn first_call_passes_immediately() {
    let mut gate = ThrottleGate::new(100);
    assert!(gate.try_pass(5_000.0));
}

#[test]
fn calls_inside_interval_are_dropped() {
    let mut gate = ThrottleGate::new(100);
    assert!(gate.try_pass(0.0));
    assert!(!gate.try_pass(16.0));
    assert!(!gate.try_pass(99.9));
    assert!(gate.try_pass(100.0));
}

#[test]
fn dropped_calls_do_not_extend_the_interval() {
    let mut gate = ThrottleGate::new(100);
    assert!(gate.try_pass(0.0));
    assert!(!gate.try_pass(90.0));
    assert!(gate.try_pass(110.0));
    assert!(!gate.try_pass(150.0));
    assert!(gate.try_pass(210.0));
}

#[test]
fn steady_scroll_stream_runs_once_per_interval() {
    let mut gate = ThrottleGate::new(100);
    let passes = (0..60).map(|frame| f64::from(frame) * 16.0).filter(|t| gate.try_pass(*t)).count();
    // 60 frames at 16ms span 944ms.
    assert_eq!(passes, 9);
}

#[test]
fn single_call_fires_after_wait() {
    let mut gate = DebounceGate::new(250);
    assert_eq!(gate.call(1_000.0), 1_250.0);
    assert!(!gate.due(1_249.0));
    assert!(gate.due(1_250.0));
    assert!(!gate.is_pending());
}

#[test]
fn each_call_pushes_the_deadline_back() {
    let mut gate = DebounceGate::new(250);
    let first = gate.call(0.0);
    let second = gate.call(200.0);
    assert!(second > first);
    assert!(!gate.due(first));
    assert!(gate.due(second));
}

#[test]
fn resize_burst_fires_once() {
    let mut gate = DebounceGate::new(250);
    let mut deadlines = (0..10).map(|i| gate.call(f64::from(i) * 30.0)).collect::<Vec<_>>();
    let last = deadlines.pop().unwrap_or_default();
    // Every superseded timer finds nothing due.
    assert!(deadlines.iter().all(|d| !gate.due(*d)));
    assert!(gate.due(last));
    assert!(!gate.due(last + 1_000.0));
}

#[test]
fn nothing_is_due_before_any_call() {
    let mut gate = DebounceGate::new(250);
    assert!(!gate.is_pending());
    assert!(!gate.due(10_000.0));
}
