//! WASM build test
//!
//! Checks that the JavaScript-facing exports behave when called with the
//! kinds of values the editor passes.

use iconic_button_wasm::api::*;
use iconic_button_wasm::ElementNode;
use serde::Serialize;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn js(value: serde_json::Value) -> JsValue {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .expect("JSON values convert to JS")
}

fn tree(value: JsValue) -> ElementNode {
    serde_wasm_bindgen::from_value(value).expect("export should return an element tree")
}

#[wasm_bindgen_test]
fn test_parse_svg_rejects_non_strings() {
    assert!(parse_svg(JsValue::from(42), JsValue::UNDEFINED).is_null());
    assert!(parse_svg(JsValue::NULL, JsValue::UNDEFINED).is_null());
    assert!(parse_svg(JsValue::UNDEFINED, JsValue::from("24")).is_null());
    assert!(parse_svg(JsValue::from(""), JsValue::UNDEFINED).is_null());
}

#[wasm_bindgen_test]
fn test_parse_svg_returns_tree() {
    let svg = JsValue::from(r#"<svg viewBox="0 0 16 16"><path stroke="red" d="M0 0"/></svg>"#);
    let root = tree(parse_svg(svg, JsValue::from(32)));

    assert_eq!(root.tag, "svg");
    assert_eq!(root.attr("width"), Some("32"));
    assert_eq!(root.attr("fill"), Some("currentColor"));
    let path = root.child_elements().next().unwrap();
    assert_eq!(path.attr("strokeWidth"), Some("2"));
    assert_eq!(path.key.as_deref(), Some("svg-0-path"));
}

#[wasm_bindgen_test]
fn test_parse_svg_fallback_for_broken_markup() {
    let root = tree(parse_svg(JsValue::from("<notxml"), JsValue::UNDEFINED));
    assert_eq!(root.tag, "span");
    assert_eq!(root.attr("aria-label"), Some("Icon unavailable"));
}

#[wasm_bindgen_test]
fn test_parse_svg_with_options() {
    let options = js(serde_json::json!({ "defaultFill": "none" }));
    let result =
        parse_svg_with_options(JsValue::from("<svg/>"), JsValue::UNDEFINED, options).unwrap();

    assert_eq!(tree(result).attr("fill"), Some("none"));
}

#[wasm_bindgen_test]
fn test_serialize_svg_tree() {
    let svg = JsValue::from(r#"<svg class="i"><circle r="1"/></svg>"#);
    let root = parse_svg(svg, JsValue::UNDEFINED);
    let markup = serialize_svg_tree(root).unwrap();

    assert!(markup.starts_with(r#"<svg xmlns="http://www.w3.org/2000/svg""#));
    assert!(markup.contains(r#"class="i""#));
}

#[wasm_bindgen_test]
fn test_button_exports() {
    let attrs = js(serde_json::json!({
        "buttonText": "Go",
        "url": "#top",
        "isExternalLink": false
    }));

    let label = generate_aria_label(attrs.clone()).unwrap();
    assert_eq!(label, "Go button state: fill, Button leads to the top section");
    assert_eq!(get_rel_attribute(attrs.clone()).unwrap(), None);
    assert!(get_button_inline_style(attrs.clone()).unwrap().is_null());

    let markup = tree(render_button_markup(attrs).unwrap());
    assert_eq!(markup.tag, "div");
}

#[wasm_bindgen_test]
fn test_theme_helpers() {
    assert!(check_is_dark("#000000"));
    assert!(!check_is_dark("rgba(0, 0, 0, 0)"));
    assert_eq!(get_theme_class("dark"), "wp-block-dgdev-icon-button is-theme-dark");
    assert_eq!(get_icon_size_px("small"), "16px");
    assert!(is_default_color(None, "#fff"));
    assert!(is_version_greater_or_equal(Some("6.8+".to_string()), "6.5"));
    assert_eq!(sanitize_plain_text("Hi <b>"), "Hi b");

    let ctx = get_theme_context(JsValue::UNDEFINED).unwrap();
    let ctx: serde_json::Value = serde_wasm_bindgen::from_value(ctx).unwrap();
    assert_eq!(ctx["themeContext"], "light");
}

#[wasm_bindgen_test]
fn test_icon_catalog() {
    let catalog = get_icon_catalog(Some("star".to_string())).unwrap();
    let icons: Vec<serde_json::Value> = serde_wasm_bindgen::from_value(catalog).unwrap();

    assert_eq!(icons.len(), 1);
    assert_eq!(icons[0]["value"], "fas fa-star");
}
