#![forbid(unsafe_code)]
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod api;
pub mod app;
pub mod components;
pub mod config;
pub mod dom;
pub mod pages;
pub mod router;
pub mod store;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    // Land on the home route when the page is opened without a hash.
    if dom::window().location().hash().unwrap_or_default().is_empty() {
        router::push_path("/");
    }
    yew::Renderer::<app::App>::new().render();
}
