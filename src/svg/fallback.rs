//! Placeholder nodes rendered instead of an icon that failed to load

use serde::{Deserialize, Serialize};

use super::node::ElementNode;

/// Visible marker shown inside a fallback node
pub const FALLBACK_GLYPH: &str = "⚠️";

/// Which failure a fallback node reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FallbackKind {
    /// The markup could not be parsed
    Unavailable,
    /// Sanitizing failed for another reason
    CouldNotLoad,
}

impl FallbackKind {
    pub fn label(self) -> &'static str {
        match self {
            FallbackKind::Unavailable => "Icon unavailable",
            FallbackKind::CouldNotLoad => "Icon could not be loaded",
        }
    }

    pub fn class_name(self) -> &'static str {
        match self {
            FallbackKind::Unavailable => "dgdevicob-icon-fallback",
            FallbackKind::CouldNotLoad => "dgdevicob-icon-error",
        }
    }
}

/// Build the fallback node for `kind`: a `span` with an accessible label,
/// a hover title, and the warning glyph.
pub fn fallback_node(kind: FallbackKind) -> ElementNode {
    ElementNode::new("span")
        .with_attr("className", kind.class_name())
        .with_attr("aria-label", kind.label())
        .with_attr("title", kind.label())
        .with_text(FALLBACK_GLYPH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_labels_are_distinct() {
        let unavailable = fallback_node(FallbackKind::Unavailable);
        let error = fallback_node(FallbackKind::CouldNotLoad);

        assert_eq!(unavailable.attr("aria-label"), Some("Icon unavailable"));
        assert_eq!(error.attr("aria-label"), Some("Icon could not be loaded"));
        assert_ne!(unavailable, error);
        assert_eq!(unavailable.text_content(), FALLBACK_GLYPH);
    }

    #[test]
    fn test_fallback_is_deterministic() {
        assert_eq!(
            fallback_node(FallbackKind::Unavailable),
            fallback_node(FallbackKind::Unavailable)
        );
    }
}
