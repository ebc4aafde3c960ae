//! Client behavior for a static single-page portfolio.
//!
//! The markup and styles ship as plain HTML/CSS; this crate compiles to
//! WebAssembly and wires up theme switching, navigation, scroll reveals,
//! stat counters and the contact form.
//!
//! LAYOUT
//! ======
//! `config`, `state`, `net` and most of `util` are plain Rust and build and
//! test natively. `app`, `managers` and `util::dom` touch the browser and
//! only exist with the `hydrate` feature.

pub mod config;
pub mod net;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
pub mod app;
#[cfg(feature = "hydrate")]
pub mod managers;

#[cfg(feature = "hydrate")]
use wasm_bindgen::prelude::wasm_bindgen;

/// WASM entry point.
#[cfg(feature = "hydrate")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&format!("logger already initialized: {err}").into());
    }
    app::install_error_hooks();
    app::run_when_ready(|| {
        let config = config::PortfolioConfig::load();
        app::boot(&config);
    });
}
