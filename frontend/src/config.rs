use log::Level;

pub const LANG_STORAGE_KEY: &str = "webaroundus-lang";

pub const NAVBAR_SCROLL_THRESHOLD: f64 = 50.0;
pub const SECTION_LOOKAHEAD: f64 = 100.0;
pub const ACTIVE_LINK_COLOR: &str = "#818cf8";

pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
pub const STATS_THRESHOLD: f64 = 0.5;

pub const COUNTER_DURATION_MS: f64 = 2000.0;
pub const ACK_RESTORE_DELAY_MS: u32 = 3000;

pub const TILT_DEGREES: f64 = 5.0;
pub const TILT_LIFT_PX: f64 = 8.0;
pub const TILT_PERSPECTIVE_PX: f64 = 1000.0;

pub const PARALLAX_FACTOR: f64 = 0.3;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose while running under trunk serve
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
