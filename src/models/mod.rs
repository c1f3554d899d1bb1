//! Data models for the Icon Button block
//!
//! Plain serde types exchanged with the editor: block attributes, the theme
//! palette, and the icon catalog.

pub mod button;
pub mod icons;
pub mod theme;

pub use button::{ButtonAttributes, IconPosition, StyleVariant};
pub use icons::{default_icons, filter_icons, IconOption};
pub use theme::{PaletteColor, ThemeContext, ThemeMode, ThemePalette};
