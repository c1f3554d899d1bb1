//! Accessible label synthesis for icon buttons

use url::Url;

use crate::models::ButtonAttributes;

/// Build the `aria-label` for a button from its attributes.
///
/// Format: `"{text} button state: {fill|outlined}, {destination}"`, where
/// the text is the button text, or the icon label when the button has no
/// text.
pub fn aria_label(attrs: &ButtonAttributes) -> String {
    let meaning = if attrs.button_text.is_empty() {
        attrs.icon_label.as_str()
    } else {
        attrs.button_text.as_str()
    };
    let state = match attrs.style_variant.as_str() {
        "fill" | "" => "fill",
        _ => "outlined",
    };

    format!("{} button state: {}, {}", meaning, state, link_destination(attrs))
}

/// Describe where the button's link leads. Empty when there is no link or
/// the URL has no path to name.
pub fn link_destination(attrs: &ButtonAttributes) -> String {
    if attrs.is_external_link {
        return "Button leads to an external link".to_string();
    }

    let url = attrs.url.as_str();
    if url.is_empty() {
        return String::new();
    }
    if url == "#" {
        return "Button leads to current page".to_string();
    }
    if let Some(anchor) = url.strip_prefix('#') {
        return format!("Button leads to the {} section", anchor.replace('-', " "));
    }

    match Url::parse(url) {
        Ok(parsed) => match parsed.path().split('/').filter(|part| !part.is_empty()).last() {
            Some(slug) => format!("Button leads to the {}", slug.replace('-', " ")),
            None => String::new(),
        },
        Err(err) => {
            log::error!("Button leads to {}: {}", url, err);
            format!("Button leads to {}", url)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attrs(url: &str) -> ButtonAttributes {
        ButtonAttributes {
            url: url.to_string(),
            ..ButtonAttributes::default()
        }
    }

    #[test]
    fn test_destinations() {
        assert_eq!(link_destination(&attrs("#")), "Button leads to current page");
        assert_eq!(
            link_destination(&attrs("#contact-form")),
            "Button leads to the contact form section"
        );
        assert_eq!(
            link_destination(&attrs("https://example.com/shop/summer-sale/")),
            "Button leads to the summer sale"
        );
        assert_eq!(link_destination(&attrs("https://example.com/")), "");
        assert_eq!(link_destination(&attrs("/about-us")), "Button leads to /about-us");
        assert_eq!(link_destination(&attrs("")), "");
    }

    #[test]
    fn test_external_link_wins() {
        let attrs = ButtonAttributes {
            url: "https://example.com/page".to_string(),
            is_external_link: true,
            ..ButtonAttributes::default()
        };
        assert_eq!(link_destination(&attrs), "Button leads to an external link");
    }

    #[test]
    fn test_label_uses_icon_label_without_text() {
        let attrs = ButtonAttributes {
            button_text: String::new(),
            icon_label: "Cart".to_string(),
            style_variant: "outline".to_string(),
            ..ButtonAttributes::default()
        };
        assert_eq!(aria_label(&attrs), "Cart button state: outlined, Button leads to current page");
    }

    #[test]
    fn test_label_for_default_button() {
        assert_eq!(
            aria_label(&ButtonAttributes::default()),
            "Add button state: fill, Button leads to current page"
        );
    }
}
