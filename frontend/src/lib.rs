//! Client-side behaviors for the WebAroundUs marketing site.
//!
//! The markup is served as-is; this crate attaches to it at load time and
//! handles the language toggle and the small interactive touches on the page.

pub mod app;
pub mod config;
pub mod dom;
pub mod locale;
pub mod preference;
pub mod schedule;
pub mod switcher;

pub mod behaviors {
    pub mod anchor_scroll;
    pub mod chrome;
    pub mod contact_form;
    pub mod counter;
    pub mod faq;
    pub mod glow;
    pub mod mobile_nav;
    pub mod parallax;
    pub mod reveal;
    pub mod tilt;
}

pub use app::start;
