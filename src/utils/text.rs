//! Plain-text sanitizing for user-entered labels (button text, tooltips)

use once_cell::sync::Lazy;
use regex::Regex;

static DISALLOWED_TEXT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\p{L}0-9\s'.,!?-]").expect("plain text pattern is valid"));

/// Strip everything but letters, digits, whitespace and `'.,!?-`.
pub fn sanitize_plain_text(text: &str) -> String {
    DISALLOWED_TEXT.replace_all(text, "").into_owned()
}
