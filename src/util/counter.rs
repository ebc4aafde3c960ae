//! Numeric counter animation.
//!
//! A counter steps from its displayed value to a target in fixed 16 ms ticks
//! (`duration / 16` of them). Intermediate values are floored; the tick that
//! reaches or passes the target writes the target itself, so the rendered
//! value never overshoots.

#[cfg(test)]
#[path = "counter_test.rs"]
mod counter_test;

#[cfg(feature = "hydrate")]
use gloo_timers::callback::{Interval, Timeout};
#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::rc::Rc;

pub const COUNTER_TICK_MS: u32 = 16;

/// Parse the leading base-10 integer of `text`, like JavaScript's `parseInt`.
///
/// Leading whitespace and one sign are accepted; parsing stops at the first
/// non-digit (`"1,200+"` is `1`). Returns `None` when no digit is found.
#[must_use]
pub fn parse_leading_int(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }
    let magnitude = rest[..digits_len].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}

/// Counter target: `data-target` when present and non-empty, else the text.
#[must_use]
pub fn counter_target(data_target: Option<&str>, text: &str) -> Option<i64> {
    match data_target.filter(|raw| !raw.is_empty()) {
        Some(raw) => parse_leading_int(raw),
        None => parse_leading_int(text),
    }
}

/// Value to render after one tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CounterFrame {
    Running(i64),
    Done(i64),
}

impl CounterFrame {
    #[must_use]
    pub fn value(self) -> i64 {
        match self {
            Self::Running(v) | Self::Done(v) => v,
        }
    }
}

/// Stepping state of one counter.
#[derive(Clone, Debug, PartialEq)]
pub struct CounterAnimation {
    current: f64,
    target: i64,
    increment: f64,
    done: bool,
}

impl CounterAnimation {
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn new(start: i64, target: i64, duration_ms: u32) -> Self {
        let steps = (f64::from(duration_ms) / f64::from(COUNTER_TICK_MS)).max(1.0);
        let increment = (target as f64 - start as f64) / steps;
        Self { current: start as f64, target, increment, done: false }
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Advance one tick.
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    pub fn tick(&mut self) -> CounterFrame {
        if self.done || self.increment == 0.0 {
            self.done = true;
            return CounterFrame::Done(self.target);
        }
        self.current += self.increment;
        let target = self.target as f64;
        let reached = (self.increment > 0.0 && self.current >= target) || (self.increment < 0.0 && self.current <= target);
        if reached {
            self.done = true;
            CounterFrame::Done(self.target)
        } else {
            CounterFrame::Running(self.current.floor() as i64)
        }
    }
}

/// Animate the text of `element` from its current number to `target`.
#[cfg(feature = "hydrate")]
pub fn animate_number(element: &web_sys::Element, target: i64, duration_ms: u32) {
    let start = element
        .text_content()
        .as_deref()
        .and_then(parse_leading_int)
        .unwrap_or(0);
    let mut animation = CounterAnimation::new(start, target, duration_ms);

    let element = element.clone();
    let holder: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));
    let holder_for_tick = Rc::clone(&holder);
    let interval = Interval::new(COUNTER_TICK_MS, move || {
        let frame = animation.tick();
        element.set_text_content(Some(&frame.value().to_string()));
        if let CounterFrame::Done(_) = frame {
            // The interval cannot be dropped from inside its own callback.
            if let Some(interval) = holder_for_tick.borrow_mut().take() {
                Timeout::new(0, move || drop(interval)).forget();
            }
        }
    });
    *holder.borrow_mut() = Some(interval);
}
