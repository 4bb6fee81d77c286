//! FontPair Pro Web App (Leptos + WASM)

mod app;
pub mod components;
pub mod clipboard;
pub mod font_loader;

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"ロガーは初期化済みです".into());
    }
    log::info!("FontPair Pro starting");
    leptos::mount::mount_to_body(app::App);
}
