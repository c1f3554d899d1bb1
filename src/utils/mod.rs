//! Utility modules for the Icon Button block
//!
//! Small pure helpers shared by the SVG sanitizer and the button
//! derivations.

pub mod color;
pub mod number;
pub mod text;
pub mod version;

// Re-export commonly used functions
pub use color::is_dark;
pub use number::{format_number, parse_float_prefix};
pub use text::sanitize_plain_text;
pub use version::is_version_at_least;
