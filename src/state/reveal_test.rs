use super::*;

#[test]
fn tracker_starts_hidden() {
    let tracker = RevealTracker::new(3);
    assert_eq!(tracker.len(), 3);
    assert_eq!(tracker.state(0), Some(RevealState::Hidden));
    assert_eq!(tracker.revealed_count(), 0);
    assert!(RevealTracker::default().is_empty());
}

#[test]
fn reveal_fires_exactly_once_under_repeated_intersections() {
    let mut tracker = RevealTracker::new(2);
    let fired = (0..10).filter(|_| tracker.reveal(1)).count();
    assert_eq!(fired, 1);
    assert_eq!(tracker.state(1), Some(RevealState::Revealed));
    assert_eq!(tracker.state(0), Some(RevealState::Hidden));
}

#[test]
fn reveal_out_of_range_is_ignored() {
    let mut tracker = RevealTracker::new(1);
    assert!(!tracker.reveal(5));
    assert_eq!(tracker.state(5), None);
}

#[test]
fn schedule_uses_batch_position_not_hit_rank() {
    let steps = reveal_schedule(&[false, true, false, true], 100);
    assert_eq!(
        steps,
        vec![RevealStep { batch_index: 1, delay_ms: 100 }, RevealStep { batch_index: 3, delay_ms: 300 }]
    );
}

#[test]
fn schedule_first_entry_has_no_delay() {
    let steps = reveal_schedule(&[true, true], 100);
    assert_eq!(steps[0].delay_ms, 0);
    assert_eq!(steps[1].delay_ms, 100);
}

#[test]
fn schedule_ignores_batches_without_hits() {
    assert!(reveal_schedule(&[false, false], 100).is_empty());
    assert!(reveal_schedule(&[], 100).is_empty());
}

#[test]
fn hidden_style_arms_transition() {
    assert!(HIDDEN_STYLE.contains(&("opacity", "0")));
    assert!(REVEALED_STYLE.contains(&("opacity", "1")));
}
