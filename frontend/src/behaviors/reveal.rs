//! One-shot entrance animations for `[data-animate]` elements.

use crate::dom::{parse_int, Dom};
use crate::schedule::Scheduler;

pub const ANIMATED: &str = "[data-animate]";
pub const REVEALED_CLASS: &str = "animate-in";

/// Delay before revealing, from `data-delay`. Missing, malformed or negative
/// values mean no delay.
pub fn reveal_delay<D: Dom>(dom: &D, node: &D::Node) -> u32 {
    dom.attr(node, "data-delay")
        .and_then(|raw| parse_int(&raw))
        .map(|ms| ms.clamp(0, i64::from(u32::MAX)) as u32)
        .unwrap_or(0)
}

pub fn reveal<D: Dom>(dom: &D, node: &D::Node) {
    dom.set_class(node, REVEALED_CLASS, true);
}

/// Elements still waiting for their first intersection.
pub struct PendingReveals<N> {
    pending: Vec<N>,
}

impl<N: PartialEq> PendingReveals<N> {
    pub fn new(pending: Vec<N>) -> Self {
        Self { pending }
    }

    /// Called for every intersection the host reports. Returns `true` only on
    /// the first one for `node`; after that the node is no longer pending.
    pub fn take(&mut self, node: &N) -> bool {
        match self.pending.iter().position(|n| n == node) {
            Some(index) => {
                self.pending.swap_remove(index);
                true
            }
            None => false,
        }
    }

    /// Handles one intersection report. On the first report for `node` the
    /// reveal is scheduled after its `data-delay`; returns whether that
    /// happened, after which the node no longer needs observing.
    pub fn on_intersect<D>(&mut self, dom: &D, node: N, scheduler: &impl Scheduler) -> bool
    where
        D: Dom<Node = N> + Clone + 'static,
        N: 'static,
    {
        if !self.take(&node) {
            return false;
        }
        let delay = reveal_delay(dom, &node);
        let dom = dom.clone();
        scheduler.after(delay, Box::new(move || reveal(&dom, &node)));
        true
    }
}
