//! Icon Button WASM Module
//!
//! Core logic for the Icon Button block editor: a sanitizer that turns
//! untrusted SVG icons into renderable element trees, and the pure
//! derivations (labels, classes, styles, theme context) behind the block's
//! controls and saved markup.

pub mod api;
pub mod button;
pub mod models;
pub mod svg;
pub mod utils;

// Re-export commonly used types
pub use models::{ButtonAttributes, ThemeContext, ThemePalette};
pub use svg::{render, render_with_options, ElementNode, NodeChild, RenderOptions, SizeHint};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        wasm_warn!("Logger already initialized: {}", e);
    }

    log::info!("Icon Button WASM module initialized");
}
