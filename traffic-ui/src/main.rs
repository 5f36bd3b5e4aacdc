//! TrafficAI web client.
//!
//! Client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. Serves the marketing landing page and the incidents
//! dashboard; the dashboard runs over a fixed in-memory demo set, so the
//! app has no backend to talk to.

use leptos::*;

mod app;
mod components;
mod pages;

fn main() {
    // Surface WASM panics in the browser console.
    console_error_panic_hook::set_once();

    logging::log!("trafficai ui starting");
    mount_to_body(|| view! { <app::App /> });
}
