//! Count-up animation for the hero statistics.

#[cfg(test)]
#[path = "counter_test.rs"]
mod counter_test;

use crate::config::COUNTER_DURATION_MS;
use crate::dom::{parse_int, Dom};

pub const STATS_SECTION: &str = ".hero-stats";
pub const COUNTERS: &str = ".stat-number";

pub fn ease_out_cubic(progress: f64) -> f64 {
    1.0 - (1.0 - progress).powi(3)
}

/// Value shown `elapsed` milliseconds into the animation.
pub fn value_at(target: i64, elapsed: f64) -> i64 {
    let progress = (elapsed / COUNTER_DURATION_MS).clamp(0.0, 1.0);
    (ease_out_cubic(progress) * target as f64).floor() as i64
}

pub struct Counter<N> {
    node: N,
    target: i64,
    start: f64,
}

impl<N> Counter<N> {
    /// Reads the target from `data-count`; missing or malformed targets count
    /// to zero.
    pub fn new<D: Dom<Node = N>>(dom: &D, node: N, start: f64) -> Self {
        let target = dom
            .attr(&node, "data-count")
            .and_then(|raw| parse_int(&raw))
            .unwrap_or(0);
        Self { node, target, start }
    }

    #[cfg(test)]
    pub fn target(&self) -> i64 {
        self.target
    }

    /// Renders the frame for timestamp `now`. Returns whether another frame
    /// is needed.
    pub fn tick<D: Dom<Node = N>>(&self, dom: &D, now: f64) -> bool {
        let elapsed = now - self.start;
        dom.set_text(&self.node, &value_at(self.target, elapsed).to_string());
        elapsed < COUNTER_DURATION_MS
    }
}

/// One counter per `.stat-number` on the page, all starting at `start`.
pub fn counters<D: Dom>(dom: &D, start: f64) -> Vec<Counter<D::Node>> {
    dom.select_all(COUNTERS)
        .into_iter()
        .map(|node| Counter::new(dom, node, start))
        .collect()
}

/// Latches on the first report that the stats are visible; the counters run
/// once per page load.
#[derive(Default)]
pub struct CounterTrigger {
    fired: bool,
}

impl CounterTrigger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` exactly once: for the first report with `visible` set.
    pub fn fire(&mut self, visible: bool) -> bool {
        if !visible || self.fired {
            return false;
        }
        self.fired = true;
        true
    }
}
