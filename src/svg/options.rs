//! Render configuration

use serde::{Deserialize, Serialize};

/// Settings for an SVG render pass
///
/// The allow-lists are fixed; everything here only tunes scaling and the
/// limits applied to untrusted markup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RenderOptions {
    /// Display size the source stroke widths are designed for
    pub reference_size: f64,

    /// Stroke width assumed when a stroked path declares none
    pub default_stroke_width: f64,

    /// Fill applied to the root when the source sets none
    pub default_fill: String,

    /// Deepest element nesting accepted
    pub max_depth: usize,

    /// Maximum number of XML nodes the parser will build
    pub nodes_limit: u32,

    /// Whether a DOCTYPE declaration is accepted (design tools emit them)
    pub allow_dtd: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            reference_size: 16.0,
            default_stroke_width: 1.0,
            default_fill: "currentColor".to_string(),
            max_depth: 128,
            nodes_limit: 50_000,
            allow_dtd: true,
        }
    }
}

impl RenderOptions {
    pub(crate) fn parsing_options(&self) -> roxmltree::ParsingOptions {
        roxmltree::ParsingOptions {
            allow_dtd: self.allow_dtd,
            nodes_limit: self.nodes_limit,
        }
    }
}
