pub mod app;
pub mod projections;
pub mod shared;

use app::App;
use leptos::prelude::*;
use shared::config::{load_config, AppConfig};
use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub fn hydrate() {
    let (config, config_error) = match load_config() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    // initializes logging using the `log` crate
    _ = console_log::init_with_level(config.log_level());
    console_error_panic_hook::set_once();

    if let Some(e) = config_error {
        log::error!("Failed to load config, using defaults: {:#}", e);
    }
    log::info!("Mounting \"{}\"", config.app.title);

    leptos::mount::mount_to_body(move || view! { <App config=config /> });
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
