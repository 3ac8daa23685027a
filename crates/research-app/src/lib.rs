//! Research App — WASM entry point.
//!
//! This crate is the composition root (DI wiring layer). It assembles the
//! browser adapters, stores and controllers, and hands them to the page.

mod app;
mod bindings;

#[cfg(test)]
mod tests;

pub use app::ResearchApp;
pub use bindings::WebHandle;

use wasm_bindgen::prelude::*;

/// WASM entry point — runs once when the module loads.
#[wasm_bindgen(start)]
pub fn main() {
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    wasm_logger::init(wasm_logger::Config::new(level));
    log::info!("Research client starting...");
}
