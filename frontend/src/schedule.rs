//! Delayed continuations. The page uses `gloo-timers`; tests drive a manual
//! clock instead.

use gloo_timers::callback::Timeout;

pub trait Scheduler {
    /// Runs `task` once, `delay_ms` milliseconds from now.
    fn after(&self, delay_ms: u32, task: Box<dyn FnOnce()>);
}

/// `setTimeout`-backed scheduler. Pending tasks are never cancelled.
#[derive(Clone, Copy, Default)]
pub struct Timeouts;

impl Scheduler for Timeouts {
    fn after(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        Timeout::new(delay_ms, task).forget();
    }
}
