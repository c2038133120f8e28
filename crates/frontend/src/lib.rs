pub mod app;
pub mod app_shell;
pub mod dashboards;
pub mod domain;
pub mod layout;
pub mod shared;

use leptos::task::spawn_local;
use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub fn hydrate() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    // config.toml is optional; mount once it resolved either way
    spawn_local(async {
        let config = shared::config::fetch_config().await;
        leptos::mount::mount_to_body(move || leptos::view! { <app::App config=config /> });
    });
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
