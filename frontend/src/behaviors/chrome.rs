//! Navbar styling and active-link highlighting driven by scroll position.

#[cfg(test)]
#[path = "chrome_test.rs"]
mod chrome_test;

use crate::config::{ACTIVE_LINK_COLOR, NAVBAR_SCROLL_THRESHOLD, SECTION_LOOKAHEAD};
use crate::dom::Dom;

pub const SECTIONS: &str = ".section, .hero";
pub const NAV_LINKS: &str = ".nav-links a:not(.nav-cta)";

/// Index of the last section, in document order, whose top (less the
/// lookahead) has been scrolled past.
pub fn current_section(section_tops: &[f64], scroll_y: f64) -> Option<usize> {
    section_tops
        .iter()
        .rposition(|top| scroll_y >= top - SECTION_LOOKAHEAD)
}

pub struct ScrollChrome<N> {
    navbar: Option<N>,
    sections: Vec<N>,
    links: Vec<N>,
}

impl<N: Clone> ScrollChrome<N> {
    /// Collects the navbar, the page sections and the navigation links
    /// (call-to-action links excluded) present on the page.
    pub fn discover<D: Dom<Node = N>>(dom: &D) -> Self {
        Self {
            navbar: dom.by_id("navbar"),
            sections: dom.select_all(SECTIONS),
            links: dom.select_all(NAV_LINKS),
        }
    }

    pub fn on_scroll<D: Dom<Node = N>>(&self, dom: &D, scroll_y: f64) {
        if let Some(navbar) = &self.navbar {
            dom.set_class(navbar, "scrolled", scroll_y > NAVBAR_SCROLL_THRESHOLD);
        }

        let tops: Vec<f64> = self.sections.iter().map(|s| dom.offset_top(s)).collect();
        let current = current_section(&tops, scroll_y)
            .and_then(|index| dom.attr(&self.sections[index], "id"))
            .map(|id| format!("#{id}"));

        for link in &self.links {
            dom.set_style(link, "color", "");
            if current.is_some() && dom.attr(link, "href") == current {
                dom.set_style(link, "color", ACTIVE_LINK_COLOR);
            }
        }
    }
}
