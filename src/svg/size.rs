//! Display size hints for rendered icons

use serde::{Deserialize, Serialize};

use crate::utils::number::{format_number, parse_float_prefix};

/// Requested display size, as the editor passes it: `"24"`, `"24px"` or `24`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SizeHint {
    Number(f64),
    Text(String),
}

impl SizeHint {
    /// Value written verbatim to the root `width` and `height`.
    ///
    /// Empty strings, zero and `NaN` mean "no size requested".
    pub fn attribute_value(&self) -> Option<String> {
        match self {
            SizeHint::Text(text) if text.is_empty() => None,
            SizeHint::Text(text) => Some(text.clone()),
            SizeHint::Number(n) if *n == 0.0 || n.is_nan() => None,
            SizeHint::Number(n) => Some(format_number(*n)),
        }
    }

    /// Numeric size used to scale stroke widths, if one can be read.
    ///
    /// Zero is treated like an unreadable size.
    pub fn scale_basis(&self) -> Option<f64> {
        let value = match self {
            SizeHint::Number(n) => Some(*n),
            SizeHint::Text(text) => parse_float_prefix(text),
        };
        value.filter(|v| *v != 0.0 && !v.is_nan())
    }
}

impl From<&str> for SizeHint {
    fn from(value: &str) -> Self {
        SizeHint::Text(value.to_string())
    }
}

impl From<String> for SizeHint {
    fn from(value: String) -> Self {
        SizeHint::Text(value)
    }
}

impl From<f64> for SizeHint {
    fn from(value: f64) -> Self {
        SizeHint::Number(value)
    }
}
