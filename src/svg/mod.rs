//! SVG icon sanitizer
//!
//! Turns untrusted SVG markup into a tree of [`ElementNode`] descriptors that
//! a UI framework can render directly.
//!
//! # Pipeline
//!
//! 1. `presanitize`: regex scrub of `<script>` blocks and `on*="..."` handlers
//! 2. parse with `roxmltree`
//! 3. `sanitize`: rebuild the tree from allow-listed elements and attributes,
//!    rescaling `stroke-width` on stroked paths; namespaced attributes
//!    (`xml:space`, `xlink:*`) are skipped here
//! 4. apply the requested size to the root
//! 5. default the root `fill` to `currentColor`
//! 6. convert to descriptors (camelCase props, `className`)
//!
//! [`render`] never fails: it yields `None` for blank input, a fallback node
//! when the markup is broken, or the sanitized tree.

pub mod allow_list;
pub mod error;
pub mod fallback;
pub mod node;
pub mod options;
pub mod presanitize;
pub mod sanitize;
pub mod serialize;
pub mod size;

pub use allow_list::{SvgAttribute, SvgTag};
pub use error::{SvgError, SvgResult};
pub use fallback::{fallback_node, FallbackKind};
pub use node::{ElementNode, NodeChild};
pub use options::RenderOptions;
pub use presanitize::presanitize;
pub use sanitize::sanitize_svg;
pub use size::SizeHint;

/// Result of a render call
#[derive(Debug, Clone, PartialEq)]
pub enum RenderOutcome {
    /// No usable input; nothing to render
    Empty,
    /// Input was rejected; the node is a placeholder
    Fallback(FallbackKind, ElementNode),
    /// Sanitized icon
    Icon(ElementNode),
}

impl RenderOutcome {
    pub fn into_node(self) -> Option<ElementNode> {
        match self {
            RenderOutcome::Empty => None,
            RenderOutcome::Fallback(_, node) | RenderOutcome::Icon(node) => Some(node),
        }
    }

    pub fn is_icon(&self) -> bool {
        matches!(self, RenderOutcome::Icon(_))
    }
}

/// Render `svg` at an optional display size with default options.
pub fn render(svg: &str, size: Option<&SizeHint>) -> Option<ElementNode> {
    render_outcome(svg, size, &RenderOptions::default()).into_node()
}

/// Render `svg` with explicit [`RenderOptions`].
pub fn render_with_options(
    svg: &str,
    size: Option<&SizeHint>,
    options: &RenderOptions,
) -> Option<ElementNode> {
    render_outcome(svg, size, options).into_node()
}

/// Render and report which of the three outcomes applied.
///
/// Input that is only whitespace or byte-order marks counts as blank.
pub fn render_outcome(
    svg: &str,
    size: Option<&SizeHint>,
    options: &RenderOptions,
) -> RenderOutcome {
    if is_blank(svg) {
        return RenderOutcome::Empty;
    }

    match sanitize_svg(svg, size, options) {
        Ok(node) => RenderOutcome::Icon(node),
        Err(err) => {
            log::warn!("Icon render failed: {}", err);
            let kind = err.fallback_kind();
            RenderOutcome::Fallback(kind, fallback_node(kind))
        }
    }
}

fn is_blank(svg: &str) -> bool {
    svg.chars().all(|c| c.is_whitespace() || c == '\u{feff}')
}
