//! Theme palette and the light/dark context derived from it
//!
//! The editor's color settings are handed in as a [`ThemePalette`] value;
//! nothing here reads host state on its own.

use serde::{Deserialize, Serialize};

use crate::utils::color::is_dark;

const FALLBACK_BASE: &str = "#ffffff";
const FALLBACK_CONTRAST: &str = "#000000";

/// Slugs that may name the page background color
const BASE_SLUGS: [&str; 2] = ["base", "background"];

/// Slugs that may name the main text color
const CONTRAST_SLUGS: [&str; 2] = ["contrast", "foreground"];

/// One named color from the theme's palette
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteColor {
    pub slug: String,
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// The theme palette as configured in the editor
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemePalette {
    #[serde(default)]
    pub colors: Vec<PaletteColor>,
}

impl ThemePalette {
    /// First color whose slug is one of `slugs`, skipping empty values.
    pub fn find(&self, slugs: &[&str]) -> Option<&str> {
        self.colors
            .iter()
            .find(|c| slugs.contains(&c.slug.as_str()))
            .map(|c| c.color.as_str())
            .filter(|color| !color.is_empty())
    }
}

/// Whether the page behind the block is light or dark
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    /// Mode for a background color.
    pub fn for_background(color: &str) -> ThemeMode {
        if is_dark(color) {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        }
    }

    /// Parse a stored `themeContext` attribute; anything but `dark` is light.
    pub fn from_name(name: &str) -> ThemeMode {
        match name {
            "dark" => ThemeMode::Dark,
            _ => ThemeMode::Light,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }
}

/// Resolved theme colors for the block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeContext {
    pub theme_context: ThemeMode,
    pub base_color: String,
    pub contrast_color: String,
}

impl Default for ThemeContext {
    fn default() -> Self {
        Self {
            theme_context: ThemeMode::Light,
            base_color: FALLBACK_BASE.to_string(),
            contrast_color: FALLBACK_CONTRAST.to_string(),
        }
    }
}

impl ThemeContext {
    /// Resolve base and contrast colors from the palette.
    ///
    /// Falls back to a light white/black context when either color is
    /// missing.
    pub fn from_palette(palette: &ThemePalette) -> ThemeContext {
        let Some(base) = palette.find(&BASE_SLUGS) else {
            log::warn!("Background color variable not found, using fallback");
            return ThemeContext::default();
        };
        let Some(contrast) = palette.find(&CONTRAST_SLUGS) else {
            log::warn!("Text color variable not found, using fallback");
            return ThemeContext::default();
        };

        ThemeContext {
            theme_context: ThemeMode::for_background(base),
            base_color: base.to_string(),
            contrast_color: contrast.to_string(),
        }
    }
}
