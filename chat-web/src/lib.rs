//! Gemini Chat Web Frontend
//!
//! Leptos CSR app: a single chat page backed by the chatbot API, with
//! history persisted in browser localStorage.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

pub mod app;
pub mod components;
pub mod pages;
pub mod services;
pub mod state;
pub mod utils;

use app::App;

#[wasm_bindgen(start)]
pub fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Gemini Chat starting...");

    leptos::mount::mount_to_body(|| view! { <App/> });
}
