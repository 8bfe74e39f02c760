pub mod app;
pub mod config;
pub mod dashboards;
pub mod layout;
pub mod pegging;
pub mod planning;
pub mod shared;

use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub fn hydrate() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    // resolve the backend base URL once, before any panel mounts
    let api = config::ApiConfig::init();
    log::info!("PCP 360 starting, backend at {}", api.base_url());

    leptos::mount::mount_to_body(app::App);
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
