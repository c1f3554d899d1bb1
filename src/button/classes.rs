//! CSS class, `rel` and icon-size derivations

use crate::models::{ButtonAttributes, ThemeMode};

/// Block wrapper class
pub const BLOCK_CLASS: &str = "wp-block-dgdev-icon-button";

/// Class on the button's link element
pub const LINK_CLASS: &str = "wp-block-dgdev-icon-button__link";

/// `rel` tokens required on external links
pub const EXTERNAL_REL: &str = "noreferrer noopener";

/// Font size for an icon size name. Unknown names get the medium size.
pub fn icon_size_px(icon_size: &str) -> &'static str {
    match icon_size {
        "small" => "16px",
        "medium" => "20px",
        "large" => "24px",
        "xLarge" => "28px",
        _ => "20px",
    }
}

/// Classes for the button link: base class, style variant, and the
/// `no-text` / `external-link` modifiers when they apply.
pub fn link_classes(attrs: &ButtonAttributes) -> String {
    let variant = if attrs.style_variant.is_empty() {
        "fill"
    } else {
        attrs.style_variant.as_str()
    };

    let mut classes = vec![LINK_CLASS.to_string(), format!("is-style-{}", variant)];
    if !attrs.show_text || attrs.button_text.is_empty() {
        classes.push("no-text".to_string());
    }
    if attrs.is_external_link {
        classes.push("external-link".to_string());
    }
    classes.join(" ")
}

/// Wrapper classes for a stored theme context (`light` unless `dark`).
pub fn theme_class(theme_context: &str) -> String {
    format!("{} is-theme-{}", BLOCK_CLASS, ThemeMode::from_name(theme_context).name())
}

/// The `rel` attribute for the link.
///
/// External links gain `noreferrer noopener` when missing; internal links
/// lose it. Returns `None` when nothing is left.
pub fn rel_attribute(attrs: &ButtonAttributes) -> Option<String> {
    let rel = attrs.rel.as_deref().filter(|r| !r.is_empty());

    let updated = if attrs.is_external_link {
        match rel {
            Some(r) if r.contains(EXTERNAL_REL) => r.to_string(),
            Some(r) => format!("{} {}", r, EXTERNAL_REL),
            None => EXTERNAL_REL.to_string(),
        }
    } else {
        match rel {
            Some(r) if r.contains(EXTERNAL_REL) => {
                r.replacen(EXTERNAL_REL, "", 1).trim().to_string()
            }
            Some(r) => r.to_string(),
            None => return None,
        }
    };

    (!updated.is_empty()).then_some(updated)
}
