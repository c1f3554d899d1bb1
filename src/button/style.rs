//! Inline style and color-default derivations

use serde::{Deserialize, Serialize};

use crate::models::{ButtonAttributes, StyleVariant, ThemeContext};
use crate::utils::number::format_number;

const TRANSPARENT: &str = "transparent";

/// Inline style for the button link. Unset properties are omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl InlineStyle {
    pub fn is_empty(&self) -> bool {
        self.declarations().is_empty()
    }

    /// CSS property/value pairs in declaration order
    pub fn declarations(&self) -> Vec<(&'static str, &str)> {
        [
            ("border-radius", &self.border_radius),
            ("background-color", &self.background_color),
            ("background-image", &self.background_image),
            ("color", &self.color),
        ]
        .into_iter()
        .filter_map(|(prop, value)| value.as_deref().map(|v| (prop, v)))
        .collect()
    }

    /// Render as a `style` attribute value
    pub fn to_css(&self) -> String {
        self.declarations()
            .iter()
            .map(|(prop, value)| format!("{}:{}", prop, value))
            .collect::<Vec<_>>()
            .join(";")
    }
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

/// Inline style from the button's custom colors and radius.
///
/// `None` when the button uses no custom styling. Outline buttons always
/// get a transparent background; otherwise a gradient takes precedence over
/// a solid background color.
pub fn inline_style(attrs: &ButtonAttributes) -> Option<InlineStyle> {
    let has_radius = attrs.border_radius != 0.0 && !attrs.border_radius.is_nan();
    if !has_radius
        && attrs.background_color.is_empty()
        && attrs.text_color.is_empty()
        && attrs.gradient.is_empty()
    {
        return None;
    }

    let mut style = InlineStyle {
        border_radius: has_radius.then(|| format!("{}px", format_number(attrs.border_radius))),
        color: non_empty(&attrs.text_color),
        ..InlineStyle::default()
    };

    match attrs.variant() {
        StyleVariant::Outline => style.background_color = Some(TRANSPARENT.to_string()),
        StyleVariant::Fill if !attrs.gradient.is_empty() => {
            style.background_image = non_empty(&attrs.gradient)
        }
        StyleVariant::Fill => style.background_color = non_empty(&attrs.background_color),
    }

    (!style.is_empty()).then_some(style)
}

/// Colors a button shows when the user has not picked any
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DefaultColors {
    pub default_background_color: String,
    pub default_text_color: String,
}

/// Default colors for a style variant: outline is transparent with contrast
/// text, fill is a contrast background with base-colored text.
pub fn default_colors(variant: &str, base_color: &str, contrast_color: &str) -> DefaultColors {
    match StyleVariant::from_name(variant) {
        StyleVariant::Outline => DefaultColors {
            default_background_color: TRANSPARENT.to_string(),
            default_text_color: contrast_color.to_string(),
        },
        StyleVariant::Fill => DefaultColors {
            default_background_color: contrast_color.to_string(),
            default_text_color: base_color.to_string(),
        },
    }
}

/// Whether `current` still is the default: unset, empty, or equal.
pub fn is_default_color(current: Option<&str>, default_color: &str) -> bool {
    match current {
        None | Some("") => true,
        Some(color) => color == default_color,
    }
}

/// Attribute changes when the editor switches block style
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleVariantUpdate {
    pub style_variant: String,
    /// `None` clears the stored color
    pub text_color: Option<String>,
    /// `None` clears the stored color
    pub background_color: Option<String>,
}

/// Work out the attribute update for the block's current class list.
///
/// The variant is read from the first `is-style-*` class (`fill` when there
/// is none). Returns `None` when the class list is empty or the variant is
/// unchanged.
pub fn resolve_style_variant(
    class_name: &str,
    current: &str,
    theme: &ThemeContext,
) -> Option<StyleVariantUpdate> {
    if class_name.is_empty() {
        return None;
    }

    let variant = class_name
        .split_whitespace()
        .find_map(|class| class.strip_prefix("is-style-"))
        .unwrap_or("fill");
    if variant == current {
        return None;
    }

    Some(match StyleVariant::from_name(variant) {
        StyleVariant::Outline => StyleVariantUpdate {
            style_variant: variant.to_string(),
            text_color: Some(theme.contrast_color.clone()),
            background_color: Some(TRANSPARENT.to_string()),
        },
        StyleVariant::Fill => StyleVariantUpdate {
            style_variant: variant.to_string(),
            text_color: None,
            background_color: None,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_custom_style() {
        assert_eq!(inline_style(&ButtonAttributes::default()), None);
    }

    #[test]
    fn test_fill_with_colors() {
        let attrs = ButtonAttributes {
            border_radius: 8.0,
            background_color: "#0073aa".to_string(),
            text_color: "#ffffff".to_string(),
            ..ButtonAttributes::default()
        };
        let style = inline_style(&attrs).unwrap();

        assert_eq!(style.border_radius.as_deref(), Some("8px"));
        assert_eq!(style.background_color.as_deref(), Some("#0073aa"));
        assert_eq!(style.to_css(), "border-radius:8px;background-color:#0073aa;color:#ffffff");
    }

    #[test]
    fn test_gradient_beats_background() {
        let attrs = ButtonAttributes {
            background_color: "#000".to_string(),
            gradient: "linear-gradient(red, blue)".to_string(),
            ..ButtonAttributes::default()
        };
        let style = inline_style(&attrs).unwrap();

        assert_eq!(style.background_image.as_deref(), Some("linear-gradient(red, blue)"));
        assert_eq!(style.background_color, None);
    }

    #[test]
    fn test_outline_is_transparent() {
        let attrs = ButtonAttributes {
            style_variant: "outline".to_string(),
            background_color: "#000".to_string(),
            text_color: "#333".to_string(),
            ..ButtonAttributes::default()
        };
        let style = inline_style(&attrs).unwrap();

        assert_eq!(style.background_color.as_deref(), Some("transparent"));
        assert_eq!(style.color.as_deref(), Some("#333"));
    }

    #[test]
    fn test_default_colors() {
        let fill = default_colors("fill", "#fff", "#111");
        assert_eq!(fill.default_background_color, "#111");
        assert_eq!(fill.default_text_color, "#fff");

        let outline = default_colors("outline", "#fff", "#111");
        assert_eq!(outline.default_background_color, "transparent");
        assert_eq!(outline.default_text_color, "#111");
    }

    #[test]
    fn test_is_default_color() {
        assert!(is_default_color(None, "#fff"));
        assert!(is_default_color(Some(""), "#fff"));
        assert!(is_default_color(Some("#fff"), "#fff"));
        assert!(!is_default_color(Some("#000"), "#fff"));
    }

    #[test]
    fn test_resolve_style_variant() {
        let theme = ThemeContext::default();

        let update = resolve_style_variant("wp-block is-style-outline", "fill", &theme).unwrap();
        assert_eq!(update.style_variant, "outline");
        assert_eq!(update.text_color.as_deref(), Some("#000000"));
        assert_eq!(update.background_color.as_deref(), Some("transparent"));

        let update = resolve_style_variant("wp-block", "outline", &theme).unwrap();
        assert_eq!(update.style_variant, "fill");
        assert_eq!(update.text_color, None);

        assert_eq!(resolve_style_variant("is-style-fill", "fill", &theme), None);
        assert_eq!(resolve_style_variant("", "outline", &theme), None);
    }
}
