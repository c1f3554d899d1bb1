//! Descriptor tree back to SVG markup
//!
//! Used for previews and for storing a sanitized copy of an icon. Prop names
//! are mapped back to their SVG spelling (`strokeWidth` to `stroke-width`,
//! `className` to `class`); names the allow-list does not know are written
//! as they are.

use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use super::allow_list::{SvgAttribute, SVG_NAMESPACE};
use super::error::{SvgError, SvgResult};
use super::node::{ElementNode, NodeChild};

impl ElementNode {
    /// Serialize this tree as standalone markup.
    ///
    /// An `svg` root without an explicit `xmlns` gets the SVG namespace.
    pub fn to_svg_string(&self) -> SvgResult<String> {
        let mut writer = Writer::new(Vec::new());
        write_element(&mut writer, self, true)?;
        String::from_utf8(writer.into_inner()).map_err(|e| SvgError::Serialize(e.to_string()))
    }
}

fn write_element(writer: &mut Writer<Vec<u8>>, node: &ElementNode, is_root: bool) -> SvgResult<()> {
    let mut start = BytesStart::new(node.tag.as_str());
    if is_root && node.tag == "svg" && !node.attributes.contains_key("xmlns") {
        start.push_attribute(("xmlns", SVG_NAMESPACE));
    }
    for (prop, value) in &node.attributes {
        start.push_attribute((attribute_name(prop), value.as_str()));
    }

    if node.children.is_empty() {
        return write_event(writer, Event::Empty(start));
    }

    write_event(writer, Event::Start(start))?;
    for child in &node.children {
        match child {
            NodeChild::Element(element) => write_element(writer, element, false)?,
            NodeChild::Text(text) => write_event(writer, Event::Text(BytesText::new(text)))?,
        }
    }
    write_event(writer, Event::End(BytesEnd::new(node.tag.as_str())))
}

fn write_event(writer: &mut Writer<Vec<u8>>, event: Event<'_>) -> SvgResult<()> {
    writer
        .write_event(event)
        .map_err(|e| SvgError::Serialize(e.to_string()))
}

fn attribute_name(prop: &str) -> &str {
    SvgAttribute::from_prop_name(prop)
        .map(SvgAttribute::name)
        .unwrap_or(prop)
}
