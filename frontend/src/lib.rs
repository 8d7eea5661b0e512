pub mod api;
pub mod components;
pub mod config;
pub mod pages;
pub mod router;
pub mod state;
pub mod utils;

#[cfg(test)]
mod test_support;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::error_1(&format!("logger init failed: {}", err).into());
    }
    log::info!("Starting GoPlan frontend (wasm)");

    // window.__GOPLAN_ENV (env.js) wins over ./config.json; loading is non-blocking.
    leptos::spawn_local(async move {
        config::init().await;
    });

    router::mount_app();
}
