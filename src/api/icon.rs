//! Icon API: SVG rendering and the icon catalog

use wasm_bindgen::prelude::*;

use super::helpers::{
    deserialize, deserialize_or_default, operation_error, serialize, size_hint_from_js,
};
use crate::models::{default_icons, filter_icons};
use crate::svg::{self, ElementNode, RenderOptions};
use crate::{wasm_error, wasm_warn};

/// Sanitize an SVG string into an element descriptor tree.
///
/// # Parameters
/// - `svg`: SVG markup; anything other than a string renders nothing
/// - `size`: optional display size (`"24"`, `"24px"` or `24`)
///
/// # Returns
/// `null`, a fallback element, or the sanitized tree. Never throws.
#[wasm_bindgen(js_name = parseSvg)]
pub fn parse_svg(svg: JsValue, size: JsValue) -> JsValue {
    render_to_js(svg, size, &RenderOptions::default())
}

/// Same as `parseSvg`, with explicit render options.
///
/// Throws only when `options` cannot be read.
#[wasm_bindgen(js_name = parseSvgWithOptions)]
pub fn parse_svg_with_options(
    svg: JsValue,
    size: JsValue,
    options: JsValue,
) -> Result<JsValue, JsValue> {
    let options: RenderOptions = deserialize_or_default(options, "Invalid render options")?;
    Ok(render_to_js(svg, size, &options))
}

fn render_to_js(svg: JsValue, size: JsValue, options: &RenderOptions) -> JsValue {
    let Some(markup) = svg.as_string() else {
        if !svg.is_undefined() && !svg.is_null() {
            wasm_warn!("parseSvg: expected an SVG string, got {:?}", svg);
        }
        return JsValue::NULL;
    };

    let size = size_hint_from_js(&size);
    match svg::render_with_options(&markup, size.as_ref(), options) {
        Some(node) => serialize(&node, "Failed to serialize icon tree").unwrap_or_else(|_| {
            wasm_error!("parseSvg: returning null after serialization failure");
            JsValue::NULL
        }),
        None => JsValue::NULL,
    }
}

/// Serialize an element descriptor tree back to SVG markup.
#[wasm_bindgen(js_name = serializeSvgTree)]
pub fn serialize_svg_tree(tree: JsValue) -> Result<String, JsValue> {
    let node: ElementNode = deserialize(tree, "Invalid element tree")?;
    node.to_svg_string().map_err(|e| operation_error(e.to_string()))
}

/// Default icons, optionally filtered by a label search.
#[wasm_bindgen(js_name = getIconCatalog)]
pub fn get_icon_catalog(query: Option<String>) -> Result<JsValue, JsValue> {
    let icons = default_icons();
    let icons = match query.as_deref() {
        Some(q) => filter_icons(&icons, q),
        None => icons,
    };
    serialize(&icons, "Failed to serialize icon catalog")
}
