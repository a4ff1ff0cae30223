// lib.rs - Root module for the storefront library
//
// The library carries the whole application: the web_app module tree plus
// the fixture catalog shared by the demo item provider and the tests.

pub mod fixtures;
pub mod web_app;

use cfg_if::cfg_if;

cfg_if! {
    if #[cfg(feature = "hydrate")] {
        use wasm_bindgen::prelude::wasm_bindgen;

        /// WASM entry point: hydrate the server-rendered page.
        #[wasm_bindgen]
        pub fn hydrate() {
            console_error_panic_hook::set_once();
            leptos::mount::hydrate_body(web_app::App);
        }
    }
}
