use super::*;

fn run_to_end(animation: &mut CounterAnimation) -> Vec<CounterFrame> {
    let mut frames = Vec::new();
    for _ in 0..1_000 {
        let frame = animation.tick();
        frames.push(frame);
        if let CounterFrame::Done(_) = frame {
            break;
        }
    }
    frames
}

// =============================================================
// parse_leading_int
// =============================================================

#[test]
fn parses_plain_and_decorated_numbers() {
    assert_eq!(parse_leading_int("100"), Some(100));
    assert_eq!(parse_leading_int("  42 projetos"), Some(42));
    assert_eq!(parse_leading_int("5+"), Some(5));
    assert_eq!(parse_leading_int("1,200"), Some(1));
    assert_eq!(parse_leading_int("-7"), Some(-7));
    assert_eq!(parse_leading_int("+3"), Some(3));
}

#[test]
fn rejects_text_without_leading_digits() {
    assert_eq!(parse_leading_int(""), None);
    assert_eq!(parse_leading_int("abc"), None);
    assert_eq!(parse_leading_int("+"), None);
    assert_eq!(parse_leading_int("~5"), None);
}

#[test]
fn target_prefers_data_attribute() {
    assert_eq!(counter_target(Some("250"), "0"), Some(250));
    assert_eq!(counter_target(Some(""), "12"), Some(12));
    assert_eq!(counter_target(None, "12+"), Some(12));
    assert_eq!(counter_target(Some("many"), "12"), None);
}

// =============================================================
// CounterAnimation
// =============================================================

#[test]
fn zero_to_hundred_lands_exactly_on_target() {
    let mut animation = CounterAnimation::new(0, 100, 2000);
    let frames = run_to_end(&mut animation);
    assert_eq!(frames.last(), Some(&CounterFrame::Done(100)));
    assert!(frames.iter().all(|f| f.value() <= 100));
    // 2000ms / 16ms = 125 steps, allowing one extra for float accumulation.
    assert!((125..=126).contains(&frames.len()), "frames={}", frames.len());
    assert!(animation.is_done());
}

#[test]
fn intermediate_values_are_monotonic_and_floored() {
    let mut animation = CounterAnimation::new(0, 100, 2000);
    let frames = run_to_end(&mut animation);
    assert_eq!(frames[0], CounterFrame::Running(0));
    assert!(frames.windows(2).all(|w| w[0].value() <= w[1].value()));
}

#[test]
fn counting_down_never_undershoots() {
    let mut animation = CounterAnimation::new(50, 10, 160);
    let frames = run_to_end(&mut animation);
    assert_eq!(frames.len(), 10);
    assert_eq!(frames.last(), Some(&CounterFrame::Done(10)));
    assert!(frames.iter().all(|f| f.value() >= 10));
}

#[test]
fn equal_start_and_target_finishes_immediately() {
    let mut animation = CounterAnimation::new(7, 7, 2000);
    assert_eq!(animation.tick(), CounterFrame::Done(7));
    assert!(animation.is_done());
}

#[test]
fn ticks_after_done_keep_target() {
    let mut animation = CounterAnimation::new(0, 3, 16);
    assert_eq!(animation.tick(), CounterFrame::Done(3));
    assert_eq!(animation.tick(), CounterFrame::Done(3));
}

#[test]
fn short_duration_uses_at_least_one_step() {
    let mut animation = CounterAnimation::new(0, 40, 0);
    assert_eq!(animation.tick(), CounterFrame::Done(40));
}
