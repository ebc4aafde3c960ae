//! Scroll-triggered reveals and stat counters.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use web_sys::{Element, Event};

use crate::config::PortfolioConfig;
use crate::state::reveal::{
    COUNTER_SELECTOR, COUNTER_THRESHOLD, HIDDEN_STYLE, REVEAL_ROOT_MARGIN, REVEAL_SELECTOR, REVEAL_THRESHOLD,
    REVEALED_STYLE, RevealTracker, SECTION_SELECTOR, SECTION_VIEWPORT_TOLERANCE_PX, SECTION_VISIBLE_CLASS,
    reveal_schedule,
};
use crate::util::counter::{animate_number, counter_target};
use crate::util::dom;
use crate::util::timing::throttle;
use crate::util::viewport::element_in_viewport;

pub struct AnimationManager {
    reveal_targets: usize,
    counters: usize,
    sections: usize,
}

impl AnimationManager {
    pub fn mount(config: &PortfolioConfig) -> Self {
        let reveal_targets = dom::query_all(REVEAL_SELECTOR);
        let counters = dom::query_all(COUNTER_SELECTOR);
        let sections = dom::query_all(SECTION_SELECTOR);
        let manager = Self { reveal_targets: reveal_targets.len(), counters: counters.len(), sections: sections.len() };

        setup_reveal_observer(reveal_targets, config.animation_delay);
        setup_counter_observer(counters, config.counter_duration);
        setup_section_reveal(sections, config.throttle_delay);

        log::debug!(
            "animation manager mounted: {} reveal targets, {} counters, {} sections",
            manager.reveal_targets,
            manager.counters,
            manager.sections
        );
        manager
    }

    pub fn reveal_target_count(&self) -> usize {
        self.reveal_targets
    }

    pub fn counter_count(&self) -> usize {
        self.counters
    }

    pub fn section_count(&self) -> usize {
        self.sections
    }
}

/// Arm hidden styles and fade elements in, staggered by batch position.
fn setup_reveal_observer(targets: Vec<Element>, step_ms: u32) {
    for target in &targets {
        dom::set_styles(target, &HIDDEN_STYLE);
    }
    if targets.is_empty() {
        return;
    }

    let tracker = Rc::new(RefCell::new(RevealTracker::new(targets.len())));
    let observed = targets.clone();
    let Some(observer) = dom::intersection_observer(Some(REVEAL_ROOT_MARGIN), REVEAL_THRESHOLD, move |entries, observer| {
        let hits = entries.iter().map(web_sys::IntersectionObserverEntry::is_intersecting).collect::<Vec<_>>();
        for step in reveal_schedule(&hits, step_ms) {
            let element = entries[step.batch_index].target();
            observer.unobserve(&element);
            let Some(index) = observed.iter().position(|t| *t == element) else {
                continue;
            };
            if !tracker.borrow_mut().reveal(index) {
                continue;
            }
            Timeout::new(step.delay_ms, move || dom::set_styles(&element, &REVEALED_STYLE)).forget();
        }
    }) else {
        // Without an observer, show everything rather than leave it hidden.
        for target in &targets {
            dom::set_styles(target, &REVEALED_STYLE);
        }
        return;
    };
    for target in &targets {
        observer.observe(target);
    }
}

/// Start each counter the first time it is half visible.
fn setup_counter_observer(counters: Vec<Element>, duration_ms: u32) {
    if counters.is_empty() {
        return;
    }
    let tracker = Rc::new(RefCell::new(RevealTracker::new(counters.len())));
    let observed = counters.clone();
    let Some(observer) = dom::intersection_observer(None, COUNTER_THRESHOLD, move |entries, observer| {
        for entry in entries.iter().filter(|entry| entry.is_intersecting()) {
            let element = entry.target();
            observer.unobserve(&element);
            let Some(index) = observed.iter().position(|c| *c == element) else {
                continue;
            };
            if tracker.borrow_mut().reveal(index) {
                start_counter(&element, duration_ms);
            }
        }
    }) else {
        return;
    };
    for counter in &counters {
        observer.observe(counter);
    }
}

fn start_counter(element: &Element, duration_ms: u32) {
    let data_target = element.get_attribute("data-target");
    let text = element.text_content().unwrap_or_default();
    match counter_target(data_target.as_deref(), &text) {
        Some(target) => animate_number(element, target, duration_ms),
        None => log::debug!("stat counter without a numeric target: {text:?}"),
    }
}

/// Mark `.reveal-section` elements visible once they are inside the viewport.
fn setup_section_reveal(sections: Vec<Element>, throttle_ms: u32) {
    if sections.is_empty() {
        return;
    }
    let reveal_in_view = move || {
        for section in &sections {
            if element_in_viewport(section, SECTION_VIEWPORT_TOLERANCE_PX) {
                dom::add_class(section, SECTION_VISIBLE_CLASS);
            }
        }
    };
    reveal_in_view();
    if let Some(window) = dom::window() {
        let mut on_scroll = throttle(throttle_ms, reveal_in_view);
        dom::listen(&window, "scroll", move |_: Event| on_scroll());
    }
}
