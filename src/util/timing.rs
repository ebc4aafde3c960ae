//! Throttle and debounce for high-frequency window events.
//!
//! Throttle is leading-edge: the first call runs immediately and later calls
//! are dropped until the interval has passed. Debounce runs once after the
//! last call has been quiet for the wait period.

#[cfg(test)]
#[path = "timing_test.rs"]
mod timing_test;

#[cfg(feature = "hydrate")]
use gloo_timers::callback::Timeout;
#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::rc::Rc;

/// Clock-driven gate behind [`throttle`].
#[derive(Clone, Debug)]
pub struct ThrottleGate {
    limit_ms: f64,
    last_pass_ms: Option<f64>,
}

impl ThrottleGate {
    #[must_use]
    pub fn new(limit_ms: u32) -> Self {
        Self { limit_ms: f64::from(limit_ms), last_pass_ms: None }
    }

    /// Returns `true` if a call at `now_ms` may run.
    pub fn try_pass(&mut self, now_ms: f64) -> bool {
        match self.last_pass_ms {
            Some(last) if now_ms - last < self.limit_ms => false,
            _ => {
                self.last_pass_ms = Some(now_ms);
                true
            }
        }
    }
}

/// Clock-driven core of [`debounce`]: every call pushes the deadline back
/// and only the latest deadline fires.
#[derive(Clone, Debug)]
pub struct DebounceGate {
    wait_ms: f64,
    deadline_ms: Option<f64>,
}

impl DebounceGate {
    #[must_use]
    pub fn new(wait_ms: u32) -> Self {
        Self { wait_ms: f64::from(wait_ms), deadline_ms: None }
    }

    /// Record a call at `now_ms`; returns the new deadline.
    pub fn call(&mut self, now_ms: f64) -> f64 {
        let deadline = now_ms + self.wait_ms;
        self.deadline_ms = Some(deadline);
        deadline
    }

    /// Returns `true` once when the pending deadline has been reached.
    pub fn due(&mut self, now_ms: f64) -> bool {
        match self.deadline_ms {
            Some(deadline) if now_ms >= deadline => {
                self.deadline_ms = None;
                true
            }
            _ => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.deadline_ms.is_some()
    }
}

/// Wrap `f` so it runs at most once per `limit_ms`.
#[cfg(feature = "hydrate")]
pub fn throttle<F>(limit_ms: u32, mut f: F) -> impl FnMut()
where
    F: FnMut() + 'static,
{
    let mut gate = ThrottleGate::new(limit_ms);
    move || {
        if gate.try_pass(js_sys::Date::now()) {
            f();
        }
    }
}

/// Wrap `f` so it runs once `wait_ms` after the latest call.
///
/// The timer checks the gate against the deadline it was scheduled for, so a
/// timer that fires a little early still counts and a superseded one never
/// runs `f`.
#[cfg(feature = "hydrate")]
pub fn debounce<F>(wait_ms: u32, f: F) -> impl FnMut()
where
    F: Fn() + 'static,
{
    let f = Rc::new(f);
    let gate = Rc::new(RefCell::new(DebounceGate::new(wait_ms)));
    let mut pending: Option<Timeout> = None;
    move || {
        let deadline = gate.borrow_mut().call(js_sys::Date::now());
        let f = Rc::clone(&f);
        let gate = Rc::clone(&gate);
        // Dropping the previous handle clears its timer.
        drop(pending.replace(Timeout::new(wait_ms, move || {
            if gate.borrow_mut().due(deadline) {
                f();
            }
        })));
    }
}
