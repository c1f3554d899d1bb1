//! Error types for SVG sanitizing
//!
//! None of these reach the caller of [`crate::svg::render`]: each maps to one
//! of the two fallback nodes.

use thiserror::Error;

use super::fallback::FallbackKind;

/// Reasons a sanitize pass could not produce an icon tree
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SvgError {
    /// Markup is not well-formed XML
    #[error("SVG parse error: {0}")]
    Parse(String),

    /// Root element is not an allowed SVG element
    #[error("root element <{0}> is not allowed")]
    DisallowedRoot(String),

    /// Element nesting exceeds the configured depth
    #[error("SVG nesting exceeds {max} levels")]
    TooDeep { max: usize },

    /// Document exceeds the configured node count
    #[error("SVG document too large: {0}")]
    TooLarge(String),

    /// Descriptor tree could not be written back out as markup
    #[error("SVG serialization failed: {0}")]
    Serialize(String),
}

impl SvgError {
    /// Which fallback node stands in for this error
    pub fn fallback_kind(&self) -> FallbackKind {
        match self {
            SvgError::Parse(_) => FallbackKind::Unavailable,
            SvgError::DisallowedRoot(_)
            | SvgError::TooDeep { .. }
            | SvgError::TooLarge(_)
            | SvgError::Serialize(_) => FallbackKind::CouldNotLoad,
        }
    }
}

impl From<roxmltree::Error> for SvgError {
    fn from(err: roxmltree::Error) -> Self {
        match err {
            roxmltree::Error::NodesLimitReached => SvgError::TooLarge(err.to_string()),
            _ => SvgError::Parse(err.to_string()),
        }
    }
}

pub type SvgResult<T> = Result<T, SvgError>;
