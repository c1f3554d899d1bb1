//! Icon Button block attributes
//!
//! Mirrors the attribute schema the block registers with the editor. Values
//! arrive from JavaScript in camelCase; every field has the block's default
//! so partial attribute objects deserialize cleanly.

use serde::{Deserialize, Serialize};

/// Attributes of a single icon button
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ButtonAttributes {
    pub button_text: String,
    pub show_text: bool,
    pub url: String,
    pub rel: Option<String>,
    pub target: Option<String>,
    pub is_external_link: bool,
    pub icon_label: String,
    pub icon_type: String,
    pub font_awesome_icon: String,
    pub icon_position: String,
    pub icon_animation: String,
    pub icon_size: String,
    pub border_radius: f64,
    pub background_color: String,
    pub text_color: String,
    pub gradient: String,
    pub style_variant: String,
    pub has_default_colors: bool,
    pub theme_context: String,
    pub tooltip: String,
    pub aria_label: String,
}

impl Default for ButtonAttributes {
    fn default() -> Self {
        Self {
            button_text: "Add".to_string(),
            show_text: false,
            url: "#".to_string(),
            rel: None,
            target: None,
            is_external_link: false,
            icon_label: String::new(),
            icon_type: "font-awesome".to_string(),
            font_awesome_icon: "fas fa-add".to_string(),
            icon_position: "before".to_string(),
            icon_animation: String::new(),
            icon_size: "medium".to_string(),
            border_radius: 0.0,
            background_color: String::new(),
            text_color: String::new(),
            gradient: String::new(),
            style_variant: "fill".to_string(),
            has_default_colors: true,
            theme_context: "light".to_string(),
            tooltip: "Add".to_string(),
            aria_label: String::new(),
        }
    }
}

impl ButtonAttributes {
    pub fn variant(&self) -> StyleVariant {
        StyleVariant::from_name(&self.style_variant)
    }

    pub fn position(&self) -> IconPosition {
        IconPosition::from_name(&self.icon_position)
    }
}

/// Block style variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StyleVariant {
    Fill,
    Outline,
}

impl StyleVariant {
    /// `outline` is the only non-default variant; anything else is `fill`.
    pub fn from_name(name: &str) -> StyleVariant {
        match name {
            "outline" => StyleVariant::Outline,
            _ => StyleVariant::Fill,
        }
    }
}

/// Where the icon sits relative to the button text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum IconPosition {
    Before,
    After,
    /// Unrecognized value: neither text slot is rendered
    Other,
}

impl IconPosition {
    pub fn from_name(name: &str) -> IconPosition {
        match name {
            "before" => IconPosition::Before,
            "after" => IconPosition::After,
            _ => IconPosition::Other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_attributes_take_block_defaults() {
        let json = r#"{"buttonText":"Buy","isExternalLink":true}"#;
        let attrs: ButtonAttributes = serde_json::from_str(json).unwrap();

        assert_eq!(attrs.button_text, "Buy");
        assert!(attrs.is_external_link);
        assert_eq!(attrs.url, "#");
        assert_eq!(attrs.icon_size, "medium");
        assert_eq!(attrs.variant(), StyleVariant::Fill);
        assert_eq!(attrs.rel, None);
    }

    #[test]
    fn test_style_variant_names() {
        assert_eq!(StyleVariant::from_name("outline"), StyleVariant::Outline);
        assert_eq!(StyleVariant::from_name(""), StyleVariant::Fill);
        assert_eq!(StyleVariant::from_name("ghost"), StyleVariant::Fill);
    }
}
