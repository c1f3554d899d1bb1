//! Saved front-end markup for an icon button
//!
//! Produces the same kind of descriptor tree as the SVG sanitizer, so the
//! editor preview and the saved post content come from one place.

use super::aria::aria_label;
use super::classes::{icon_size_px, link_classes, rel_attribute, theme_class};
use super::style::inline_style;
use crate::models::{ButtonAttributes, IconPosition};
use crate::svg::ElementNode;

const FONT_AWESOME: &str = "font-awesome";

/// Build the saved markup tree for a button.
pub fn button_markup(attrs: &ButtonAttributes) -> ElementNode {
    let wrapper = ElementNode::new("div").with_attr("className", theme_class(&attrs.theme_context));

    let feedback = ElementNode::new("div")
        .with_attr("className", "wp-block-dgdev-icon-button__feedback sr-only")
        .with_attr("aria-live", "polite");

    wrapper.with_child(link(attrs)).with_child(feedback)
}

fn link(attrs: &ButtonAttributes) -> ElementNode {
    let target = attrs
        .target
        .as_deref()
        .filter(|t| !t.is_empty())
        .unwrap_or("_self");
    let title = [attrs.tooltip.as_str(), attrs.icon_label.as_str()]
        .into_iter()
        .find(|t| !t.is_empty())
        .unwrap_or("");
    let label = if attrs.aria_label.is_empty() {
        aria_label(attrs)
    } else {
        attrs.aria_label.clone()
    };

    let mut link = ElementNode::new("a")
        .with_attr("href", attrs.url.as_str())
        .with_attr("target", target)
        .with_attr("className", link_classes(attrs))
        .with_attr("title", title)
        .with_attr("aria-label", label);
    if let Some(rel) = rel_attribute(attrs) {
        link = link.with_attr("rel", rel);
    }
    if let Some(style) = inline_style(attrs) {
        link = link.with_attr("style", style.to_css());
    }

    link.with_child(content(attrs))
}

fn content(attrs: &ButtonAttributes) -> ElementNode {
    let mut content =
        ElementNode::new("div").with_attr("className", "wp-block-dgdev-icon-button__text");
    let position = attrs.position();

    if position == IconPosition::After && attrs.show_text {
        content = content.with_child(text_span("text-span-before", &attrs.button_text));
    }
    if attrs.icon_type == FONT_AWESOME && !attrs.font_awesome_icon.is_empty() {
        let class = format!("{} {}", attrs.font_awesome_icon, attrs.icon_animation);
        content = content.with_child(
            ElementNode::new("i")
                .with_attr("className", class.trim())
                .with_attr("style", format!("font-size:{}", icon_size_px(&attrs.icon_size)))
                .with_attr("aria-hidden", "true"),
        );
    }
    if position == IconPosition::Before && attrs.show_text {
        content = content.with_child(text_span("text-span-after", &attrs.button_text));
    }
    content
}

fn text_span(class: &str, text: &str) -> ElementNode {
    ElementNode::new("span").with_attr("className", class).with_text(text)
}
