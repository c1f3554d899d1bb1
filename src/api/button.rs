//! Button API: block attribute derivations, theme and text helpers

use wasm_bindgen::prelude::*;

use super::helpers::{deserialize, deserialize_or_default, serialize};
use crate::button;
use crate::models::{ButtonAttributes, ThemeContext, ThemePalette};
use crate::utils;

fn attributes(attrs_js: JsValue) -> Result<ButtonAttributes, JsValue> {
    deserialize(attrs_js, "Invalid button attributes")
}

/// Accessible label for a button.
#[wasm_bindgen(js_name = generateAriaLabel)]
pub fn generate_aria_label(attrs_js: JsValue) -> Result<String, JsValue> {
    Ok(button::aria_label(&attributes(attrs_js)?))
}

/// `rel` attribute for the button link, or `undefined` when empty.
#[wasm_bindgen(js_name = getRelAttribute)]
pub fn get_rel_attribute(attrs_js: JsValue) -> Result<Option<String>, JsValue> {
    Ok(button::rel_attribute(&attributes(attrs_js)?))
}

/// Class list for the button link.
#[wasm_bindgen(js_name = getLinkClasses)]
pub fn get_link_classes(attrs_js: JsValue) -> Result<String, JsValue> {
    Ok(button::link_classes(&attributes(attrs_js)?))
}

/// Wrapper classes for a stored theme context.
#[wasm_bindgen(js_name = getThemeClass)]
pub fn get_theme_class(theme_context: &str) -> String {
    button::theme_class(theme_context)
}

/// Icon font size for a size name.
#[wasm_bindgen(js_name = getIconSizePx)]
pub fn get_icon_size_px(icon_size: &str) -> String {
    button::icon_size_px(icon_size).to_string()
}

/// Inline style object for the link, or `null` when unstyled.
#[wasm_bindgen(js_name = getButtonInlineStyle)]
pub fn get_button_inline_style(attrs_js: JsValue) -> Result<JsValue, JsValue> {
    serialize(
        &button::inline_style(&attributes(attrs_js)?),
        "Failed to serialize inline style",
    )
}

/// Default background and text colors for a style variant.
#[wasm_bindgen(js_name = getDefaultColors)]
pub fn get_default_colors(
    variant: &str,
    base_color: &str,
    contrast_color: &str,
) -> Result<JsValue, JsValue> {
    serialize(
        &button::default_colors(variant, base_color, contrast_color),
        "Failed to serialize default colors",
    )
}

/// Whether a color is unset or equal to the default.
#[wasm_bindgen(js_name = isDefaultColor)]
pub fn is_default_color(current: Option<String>, default_color: &str) -> bool {
    button::is_default_color(current.as_deref(), default_color)
}

/// Attribute update for a block style change, or `null` when nothing
/// changes.
#[wasm_bindgen(js_name = resolveStyleVariant)]
pub fn resolve_style_variant(
    class_name: &str,
    style_variant: &str,
    palette_js: JsValue,
) -> Result<JsValue, JsValue> {
    let palette: ThemePalette = deserialize_or_default(palette_js, "Invalid theme palette")?;
    let theme = ThemeContext::from_palette(&palette);
    serialize(
        &button::resolve_style_variant(class_name, style_variant, &theme),
        "Failed to serialize style update",
    )
}

/// Theme context (mode, base and contrast colors) from the editor palette.
#[wasm_bindgen(js_name = getThemeContext)]
pub fn get_theme_context(palette_js: JsValue) -> Result<JsValue, JsValue> {
    let palette: ThemePalette = deserialize_or_default(palette_js, "Invalid theme palette")?;
    serialize(&ThemeContext::from_palette(&palette), "Failed to serialize theme context")
}

/// Whether a CSS color is dark.
#[wasm_bindgen(js_name = checkIsDark)]
pub fn check_is_dark(color: &str) -> bool {
    utils::is_dark(color)
}

/// Strip characters not allowed in labels and tooltips.
#[wasm_bindgen(js_name = sanitizePlainText)]
pub fn sanitize_plain_text(text: &str) -> String {
    utils::sanitize_plain_text(text)
}

/// Compare the host editor version against a target version.
#[wasm_bindgen(js_name = isVersionGreaterOrEqual)]
pub fn is_version_greater_or_equal(version: Option<String>, target_version: &str) -> bool {
    utils::is_version_at_least(version.as_deref(), target_version)
}

/// Saved front-end markup tree for a button.
#[wasm_bindgen(js_name = renderButtonMarkup)]
pub fn render_button_markup(attrs_js: JsValue) -> Result<JsValue, JsValue> {
    serialize(
        &button::button_markup(&attributes(attrs_js)?),
        "Failed to serialize button markup",
    )
}
