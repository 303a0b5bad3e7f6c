pub mod shared;
pub mod usecases;

use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub fn hydrate() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    usecases::u508_preview_url_additions::mount_when_ready();
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
