//! Icon button derivations
//!
//! Pure functions from block attributes (and an explicit theme context) to
//! the values the editor and the saved markup need.

pub mod aria;
pub mod classes;
pub mod markup;
pub mod style;

pub use aria::{aria_label, link_destination};
pub use classes::{icon_size_px, link_classes, rel_attribute, theme_class};
pub use markup::button_markup;
pub use style::{
    default_colors, inline_style, is_default_color, resolve_style_variant, DefaultColors,
    InlineStyle, StyleVariantUpdate,
};
