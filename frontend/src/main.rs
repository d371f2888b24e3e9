use log::{error, info};
use webaroundus::config;

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting WebAroundUs site behaviors");
    if let Err(err) = webaroundus::start() {
        error!("Failed to attach site behaviors: {:?}", err);
    }
}
