//! Icon Button WASM API
//!
//! This module provides the JavaScript-facing API for the Icon Button block.
//! Every export is a thin wrapper: arguments are deserialized, handed to the
//! pure Rust modules, and results serialized back.
//!
//! # Module Structure
//!
//! - `helpers`: Shared utilities for serialization, argument conversion,
//!   error handling and console logging
//! - `icon`: SVG icon rendering and the icon catalog
//! - `button`: Block attribute derivations, theme context, text and version helpers

pub mod helpers;
pub mod button;
pub mod icon;

pub use button::*;
pub use icon::{get_icon_catalog, parse_svg, parse_svg_with_options, serialize_svg_tree};
