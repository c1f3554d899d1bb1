//! Text-level scrubbing that runs before the XML parser sees the markup

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;

/// `<script ...>...</script>` blocks, shortest match, any case
static SCRIPT_BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<script\b.*?</script\s*>").expect("script pattern is valid"));

/// Inline `on<word>="..."` handler attributes, any case
static EVENT_HANDLER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)\bon\w+\s*=\s*(?:"[^"]*"|'[^']*')"#).expect("event handler pattern is valid")
});

/// Remove script blocks and inline event handlers from raw SVG text.
///
/// Borrows the input unchanged when there is nothing to remove.
pub fn presanitize(svg: &str) -> Cow<'_, str> {
    match SCRIPT_BLOCK.replace_all(svg, "") {
        Cow::Borrowed(text) => EVENT_HANDLER.replace_all(text, ""),
        Cow::Owned(text) => Cow::Owned(EVENT_HANDLER.replace_all(&text, "").into_owned()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_removes_script_blocks() {
        let input = concat!(
            r#"<svg><script>alert(1)</script><path d="M0 0"/>"#,
            r#"<SCRIPT type="text/javascript">x()</SCRIPT></svg>"#
        );
        assert_eq!(presanitize(input), r#"<svg><path d="M0 0"/></svg>"#);
    }

    #[test]
    fn test_script_match_is_not_greedy() {
        let input = "<svg><script>a()</script><g/><script>b()</script></svg>";
        assert_eq!(presanitize(input), "<svg><g/></svg>");
    }

    #[test]
    fn test_removes_event_handlers() {
        let input = r#"<svg onload="alert(1)"><path ONCLICK='steal()' d="M0 0"/></svg>"#;
        assert_eq!(presanitize(input), r#"<svg ><path  d="M0 0"/></svg>"#);
    }

    #[test]
    fn test_leaves_clean_markup_borrowed() {
        let input = r#"<svg viewBox="0 0 16 16"><path d="M0 0" class="icon"/></svg>"#;
        assert!(matches!(presanitize(input), Cow::Borrowed(_)));
    }
}
