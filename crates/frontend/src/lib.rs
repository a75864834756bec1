//! The Guardians - Yew WASM client
//!
//! Mobile-styled web UI for the family financial-safety service:
//! group invites, transfer confirmation, and fraud-education quizzes.

mod app;
mod components;
mod pages;
mod services;
mod session;

pub use app::App;

use wasm_bindgen::prelude::*;

/// WASM entry point.
#[wasm_bindgen(start)]
pub fn main() {
    yew::Renderer::<App>::new().render();
}
