//! One-way reveal bookkeeping for scroll-triggered animations.
//!
//! Elements move from hidden to revealed once and never back. The same latch
//! guards stat counters so each one starts at most once.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

/// Elements faded in by the reveal observer.
pub const REVEAL_SELECTOR: &str = ".skill-card, .timeline-item, .contact-form, .contact-info";
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// Inline styles armed before observation, as `(property, value)`.
pub const HIDDEN_STYLE: [(&str, &str); 3] = [
    ("opacity", "0"),
    ("transform", "translateY(20px)"),
    ("transition", "opacity 0.6s ease-out, transform 0.6s ease-out"),
];
pub const REVEALED_STYLE: [(&str, &str); 2] = [("opacity", "1"), ("transform", "translateY(0)")];

pub const COUNTER_SELECTOR: &str = ".stat-number";
pub const COUNTER_THRESHOLD: f64 = 0.5;

/// Whole sections toggled by class on scroll.
pub const SECTION_SELECTOR: &str = ".reveal-section";
pub const SECTION_VISIBLE_CLASS: &str = "is-visible";
pub const SECTION_VIEWPORT_TOLERANCE_PX: f64 = 100.0;

/// Visibility of one observed element.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealState {
    #[default]
    Hidden,
    Revealed,
}

/// At-most-once latch over a fixed list of elements.
#[derive(Clone, Debug, Default)]
pub struct RevealTracker {
    states: Vec<RevealState>,
}

impl RevealTracker {
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self { states: vec![RevealState::Hidden; len] }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    #[must_use]
    pub fn state(&self, index: usize) -> Option<RevealState> {
        self.states.get(index).copied()
    }

    /// Mark an element revealed. Returns `true` only on the first call.
    pub fn reveal(&mut self, index: usize) -> bool {
        match self.states.get_mut(index) {
            Some(state @ RevealState::Hidden) => {
                *state = RevealState::Revealed;
                true
            }
            _ => false,
        }
    }

    #[must_use]
    pub fn revealed_count(&self) -> usize {
        self.states.iter().filter(|s| **s == RevealState::Revealed).count()
    }
}

/// A reveal scheduled from one observer batch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RevealStep {
    /// Position of the entry within the batch.
    pub batch_index: usize,
    pub delay_ms: u32,
}

/// Stagger the intersecting entries of one observer batch.
///
/// The delay is `batch_index * step_ms`, where the index counts every entry
/// in the batch, intersecting or not.
#[must_use]
pub fn reveal_schedule(intersecting: &[bool], step_ms: u32) -> Vec<RevealStep> {
    intersecting
        .iter()
        .enumerate()
        .filter(|(_, hit)| **hit)
        .map(|(batch_index, _)| RevealStep {
            batch_index,
            delay_ms: u32::try_from(batch_index).map_or(u32::MAX, |i| i.saturating_mul(step_ms)),
        })
        .collect()
}
