#[cfg(any(feature = "ssr", feature = "hydrate", feature = "csr"))]
pub mod app;
pub mod deck;
pub mod error;
#[cfg(feature = "csr")]
pub mod mount;
pub mod pagination;
pub mod portfolio;
pub mod reveal;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
