//! Structural sanitize pass
//!
//! Reads the parsed document and builds a fresh tree that only holds
//! allow-listed elements and attributes. The parsed document is never
//! mutated; a dropped element simply contributes nothing to its parent.

use std::collections::BTreeMap;

use roxmltree::Node;

use super::allow_list::{SvgAttribute, SvgTag, SVG_NAMESPACE, XHTML_NAMESPACE};
use super::error::{SvgError, SvgResult};
use super::node::{ElementNode, NodeChild};
use super::options::RenderOptions;
use super::presanitize::presanitize;
use super::size::SizeHint;
use crate::utils::number::{format_number, parse_float_or};

/// Run the full pipeline: scrub, parse, sanitize, size, default fill,
/// convert to descriptors.
pub fn sanitize_svg(
    input: &str,
    size: Option<&SizeHint>,
    options: &RenderOptions,
) -> SvgResult<ElementNode> {
    let cleaned = presanitize(input);
    let doc = roxmltree::Document::parse_with_options(&cleaned, options.parsing_options())?;
    let root_node = doc.root_element();

    let sanitizer = Sanitizer::new(size, options);
    let mut root = sanitizer
        .element(root_node, 0)?
        .ok_or_else(|| SvgError::DisallowedRoot(root_node.tag_name().name().to_string()))?;

    if let Some(value) = size.and_then(SizeHint::attribute_value) {
        root.attributes.insert(SvgAttribute::Width, value.clone());
        root.attributes.insert(SvgAttribute::Height, value);
    }

    root.attributes
        .entry(SvgAttribute::Fill)
        .or_insert_with(|| options.default_fill.clone());

    Ok(root.into_node(""))
}

/// Sanitized element, still carrying typed tag and attribute names
#[derive(Debug)]
struct CleanElement {
    tag: SvgTag,
    attributes: BTreeMap<SvgAttribute, String>,
    children: Vec<CleanChild>,
}

#[derive(Debug)]
enum CleanChild {
    Element(CleanElement),
    Text(String),
}

impl CleanElement {
    /// Convert to a descriptor. `prefix` is the parent's key path, empty for
    /// the root, which gets no key.
    fn into_node(self, prefix: &str) -> ElementNode {
        let tag = self.tag.name();
        let key = (!prefix.is_empty()).then(|| format!("{}{}", prefix, tag));

        let attributes = self
            .attributes
            .into_iter()
            .map(|(attr, value)| (attr.prop_name().to_string(), value))
            .collect();

        let children = self
            .children
            .into_iter()
            .enumerate()
            .map(|(index, child)| match child {
                CleanChild::Element(element) => {
                    NodeChild::Element(element.into_node(&format!("{}{}-{}-", prefix, tag, index)))
                }
                CleanChild::Text(text) => NodeChild::Text(text),
            })
            .collect();

        ElementNode {
            tag: tag.to_string(),
            attributes,
            children,
            key,
        }
    }
}

struct Sanitizer<'a> {
    options: &'a RenderOptions,
    stroke_scale: f64,
}

impl<'a> Sanitizer<'a> {
    fn new(size: Option<&SizeHint>, options: &'a RenderOptions) -> Self {
        let reference = if options.reference_size > 0.0 {
            options.reference_size
        } else {
            RenderOptions::default().reference_size
        };
        let requested = size.and_then(SizeHint::scale_basis).unwrap_or(reference);

        Self {
            options,
            stroke_scale: requested / reference,
        }
    }

    /// Sanitize one element and its subtree. `Ok(None)` means the element is
    /// not allowed and is dropped along with everything inside it.
    fn element(&self, node: Node<'_, '_>, depth: usize) -> SvgResult<Option<CleanElement>> {
        if depth > self.options.max_depth {
            return Err(SvgError::TooDeep {
                max: self.options.max_depth,
            });
        }

        let tag = match allowed_tag(node) {
            Some(tag) => tag,
            None => {
                log::debug!("Dropping disallowed element <{}>", node.tag_name().name());
                return Ok(None);
            }
        };

        let mut attributes = BTreeMap::new();
        for attr in node.attributes() {
            // `xml:space`, `xlink:href`, `serif:id` and the like. Namespace
            // declarations (`xmlns:*`) never show up as attributes.
            if attr.namespace().is_some() {
                continue;
            }
            let Some(known) = SvgAttribute::from_name(attr.name()) else {
                log::debug!("Dropping attribute {} on <{}>", attr.name(), tag.name());
                continue;
            };
            if known == SvgAttribute::Style && has_script_url(attr.value()) {
                log::warn!("Dropping {} on <{}>: script URL in value", attr.name(), tag.name());
                continue;
            }
            attributes.insert(known, attr.value().to_string());
        }

        if tag == SvgTag::Path && attributes.contains_key(&SvgAttribute::Stroke) {
            let base = parse_float_or(
                attributes.get(&SvgAttribute::StrokeWidth).map(String::as_str),
                self.options.default_stroke_width,
            );
            attributes.insert(SvgAttribute::StrokeWidth, format_number(base * self.stroke_scale));
        }

        let mut children = Vec::new();
        for child in node.children() {
            if child.is_element() {
                if let Some(element) = self.element(child, depth + 1)? {
                    children.push(CleanChild::Element(element));
                }
            } else if child.is_text() {
                if let Some(text) = child.text() {
                    children.push(CleanChild::Text(text.to_string()));
                }
            }
        }

        Ok(Some(CleanElement {
            tag,
            attributes,
            children,
        }))
    }
}

/// Allowed tag for an element in the SVG, XHTML or no namespace, else
/// `None`.
fn allowed_tag(node: Node<'_, '_>) -> Option<SvgTag> {
    match node.tag_name().namespace() {
        None | Some(SVG_NAMESPACE) | Some(XHTML_NAMESPACE) => {
            SvgTag::from_name(node.tag_name().name())
        }
        Some(_) => None,
    }
}

/// Whether a `style` value smuggles a `javascript:` URL, allowing for case
/// tricks and embedded whitespace or control characters.
fn has_script_url(value: &str) -> bool {
    let compact: String = value
        .chars()
        .filter(|c| !c.is_whitespace() && !c.is_control())
        .flat_map(char::to_lowercase)
        .collect();
    compact.contains("javascript:")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sanitize(svg: &str, size: Option<&str>) -> SvgResult<ElementNode> {
        let size = size.map(SizeHint::from);
        sanitize_svg(svg, size.as_ref(), &RenderOptions::default())
    }

    #[test]
    fn test_keys_follow_position() {
        let svg = r#"<svg><g><path d="M0 0"/></g><circle r="1"/></svg>"#;
        let root = sanitize(svg, None).unwrap();

        assert_eq!(root.key, None);
        let g = root.child_elements().next().unwrap();
        assert_eq!(g.key.as_deref(), Some("svg-0-g"));
        let path = g.child_elements().next().unwrap();
        assert_eq!(path.key.as_deref(), Some("svg-0-g-0-path"));
        let circle = root.child_elements().nth(1).unwrap();
        assert_eq!(circle.key.as_deref(), Some("svg-1-circle"));
    }

    #[test]
    fn test_disallowed_root_is_an_error() {
        let err = sanitize("<html><svg/></html>", None).unwrap_err();
        assert_eq!(err, SvgError::DisallowedRoot("html".to_string()));
    }

    #[test]
    fn test_depth_limit() {
        let options = RenderOptions {
            max_depth: 2,
            ..RenderOptions::default()
        };
        let svg = "<svg><g><g><g/></g></g></svg>";

        let err = sanitize_svg(svg, None, &options).unwrap_err();
        assert_eq!(err, SvgError::TooDeep { max: 2 });
    }

    #[test]
    fn test_foreign_namespace_elements_are_dropped() {
        let svg = concat!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" xmlns:x="urn:x">"#,
            r#"<x:path d="M0 0"/><path d="M1 1"/></svg>"#
        );
        let root = sanitize(svg, None).unwrap();

        let paths: Vec<_> = root.child_elements().collect();
        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].attr("d"), Some("M1 1"));
    }

    #[test]
    fn test_xhtml_namespace_root_is_accepted() {
        let svg = r#"<svg xmlns="http://www.w3.org/1999/xhtml" viewBox="0 0 8 8"><rect/></svg>"#;
        let root = sanitize(svg, None).unwrap();

        assert_eq!(root.tag, "svg");
        assert_eq!(root.attr("viewBox"), Some("0 0 8 8"));
        assert_eq!(root.child_elements().next().map(|e| e.tag.as_str()), Some("rect"));
    }

    #[test]
    fn test_namespaced_attributes_are_dropped() {
        let svg = concat!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" xmlns:serif="http://www.serif.com/" "#,
            r#"xml:space="preserve" serif:id="Layer" viewBox="0 0 8 8"/>"#
        );
        let root = sanitize(svg, None).unwrap();

        let names: Vec<&str> = root.attributes.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["fill", "viewBox"]);
    }

    #[test]
    fn test_script_urls_are_dropped_from_style() {
        let svg = r#"<svg><path d="M0 0" style="fill:url( JavaScript:alert(1))" class="a"/></svg>"#;
        let root = sanitize(svg, None).unwrap();
        let path = root.child_elements().next().unwrap();

        assert_eq!(path.attr("style"), None);
        assert_eq!(path.attr("className"), Some("a"));
    }

    #[test]
    fn test_script_text_in_plain_attributes_is_kept() {
        let svg = r#"<svg aria-label="JavaScript: logo" id="js" class="javascript:x"/>"#;
        let root = sanitize(svg, None).unwrap();

        assert_eq!(root.attr("ariaLabel"), Some("JavaScript: logo"));
        assert_eq!(root.attr("id"), Some("js"));
        assert_eq!(root.attr("className"), Some("javascript:x"));
    }

    #[test]
    fn test_stroke_width_added_when_missing() {
        let root = sanitize(r#"<svg><path stroke="red" d="M0 0"/></svg>"#, Some("20")).unwrap();
        let path = root.child_elements().next().unwrap();
        assert_eq!(path.attr("strokeWidth"), Some("1.25"));
    }

    #[test]
    fn test_unstroked_paths_are_not_rescaled() {
        let svg = r#"<svg><path stroke-width="2" d="M0 0"/></svg>"#;
        let root = sanitize(svg, Some("32")).unwrap();
        let path = root.child_elements().next().unwrap();
        assert_eq!(path.attr("strokeWidth"), Some("2"));
    }
}
