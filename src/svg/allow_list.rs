//! Fixed allow-lists of SVG elements and attributes
//!
//! Anything not named here is removed by the sanitizer. The lists are closed
//! enums rather than string tables so that the sanitized tree can only ever
//! carry a permitted name.

/// SVG namespace URI
pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// XHTML namespace URI; SVG inlined in HTML sometimes declares it
pub const XHTML_NAMESPACE: &str = "http://www.w3.org/1999/xhtml";

/// Permitted SVG element tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SvgTag {
    Svg,
    G,
    Path,
    Circle,
    Rect,
    Line,
    Polyline,
    Polygon,
    Text,
    Tspan,
    Title,
    Desc,
}

impl SvgTag {
    pub const ALL: [SvgTag; 12] = [
        SvgTag::Svg,
        SvgTag::G,
        SvgTag::Path,
        SvgTag::Circle,
        SvgTag::Rect,
        SvgTag::Line,
        SvgTag::Polyline,
        SvgTag::Polygon,
        SvgTag::Text,
        SvgTag::Tspan,
        SvgTag::Title,
        SvgTag::Desc,
    ];

    /// Look up a tag by name, ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<SvgTag> {
        Self::ALL
            .iter()
            .copied()
            .find(|tag| tag.name().eq_ignore_ascii_case(name))
    }

    pub fn name(self) -> &'static str {
        match self {
            SvgTag::Svg => "svg",
            SvgTag::G => "g",
            SvgTag::Path => "path",
            SvgTag::Circle => "circle",
            SvgTag::Rect => "rect",
            SvgTag::Line => "line",
            SvgTag::Polyline => "polyline",
            SvgTag::Polygon => "polygon",
            SvgTag::Text => "text",
            SvgTag::Tspan => "tspan",
            SvgTag::Title => "title",
            SvgTag::Desc => "desc",
        }
    }
}

/// Permitted SVG attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SvgAttribute {
    ViewBox,
    Width,
    Height,
    Fill,
    Stroke,
    StrokeWidth,
    StrokeLinecap,
    StrokeLinejoin,
    D,
    Cx,
    Cy,
    R,
    X,
    Y,
    X1,
    X2,
    Y1,
    Y2,
    Points,
    Transform,
    Style,
    Class,
    Id,
    Role,
    AriaHidden,
    AriaLabel,
}

impl SvgAttribute {
    pub const ALL: [SvgAttribute; 26] = [
        SvgAttribute::ViewBox,
        SvgAttribute::Width,
        SvgAttribute::Height,
        SvgAttribute::Fill,
        SvgAttribute::Stroke,
        SvgAttribute::StrokeWidth,
        SvgAttribute::StrokeLinecap,
        SvgAttribute::StrokeLinejoin,
        SvgAttribute::D,
        SvgAttribute::Cx,
        SvgAttribute::Cy,
        SvgAttribute::R,
        SvgAttribute::X,
        SvgAttribute::Y,
        SvgAttribute::X1,
        SvgAttribute::X2,
        SvgAttribute::Y1,
        SvgAttribute::Y2,
        SvgAttribute::Points,
        SvgAttribute::Transform,
        SvgAttribute::Style,
        SvgAttribute::Class,
        SvgAttribute::Id,
        SvgAttribute::Role,
        SvgAttribute::AriaHidden,
        SvgAttribute::AriaLabel,
    ];

    /// Look up an attribute by its SVG name, ignoring ASCII case.
    ///
    /// Event handlers (`on*`) never match, whatever the list contains.
    pub fn from_name(name: &str) -> Option<SvgAttribute> {
        if is_event_handler(name) {
            return None;
        }
        Self::ALL
            .iter()
            .copied()
            .find(|attr| attr.name().eq_ignore_ascii_case(name))
    }

    /// Look up an attribute by the prop name used in element descriptors.
    pub fn from_prop_name(prop: &str) -> Option<SvgAttribute> {
        Self::ALL.iter().copied().find(|attr| attr.prop_name() == prop)
    }

    /// Canonical SVG spelling
    pub fn name(self) -> &'static str {
        match self {
            SvgAttribute::ViewBox => "viewBox",
            SvgAttribute::Width => "width",
            SvgAttribute::Height => "height",
            SvgAttribute::Fill => "fill",
            SvgAttribute::Stroke => "stroke",
            SvgAttribute::StrokeWidth => "stroke-width",
            SvgAttribute::StrokeLinecap => "stroke-linecap",
            SvgAttribute::StrokeLinejoin => "stroke-linejoin",
            SvgAttribute::D => "d",
            SvgAttribute::Cx => "cx",
            SvgAttribute::Cy => "cy",
            SvgAttribute::R => "r",
            SvgAttribute::X => "x",
            SvgAttribute::Y => "y",
            SvgAttribute::X1 => "x1",
            SvgAttribute::X2 => "x2",
            SvgAttribute::Y1 => "y1",
            SvgAttribute::Y2 => "y2",
            SvgAttribute::Points => "points",
            SvgAttribute::Transform => "transform",
            SvgAttribute::Style => "style",
            SvgAttribute::Class => "class",
            SvgAttribute::Id => "id",
            SvgAttribute::Role => "role",
            SvgAttribute::AriaHidden => "aria-hidden",
            SvgAttribute::AriaLabel => "aria-label",
        }
    }

    /// Name as a UI-framework prop: kebab-case becomes camelCase and
    /// `class` becomes `className`.
    pub fn prop_name(self) -> &'static str {
        match self {
            SvgAttribute::StrokeWidth => "strokeWidth",
            SvgAttribute::StrokeLinecap => "strokeLinecap",
            SvgAttribute::StrokeLinejoin => "strokeLinejoin",
            SvgAttribute::Class => "className",
            SvgAttribute::AriaHidden => "ariaHidden",
            SvgAttribute::AriaLabel => "ariaLabel",
            other => other.name(),
        }
    }
}

/// Whether an attribute name is an inline event handler (`onclick`, `ONLOAD`).
pub fn is_event_handler(name: &str) -> bool {
    name.get(..2).is_some_and(|prefix| prefix.eq_ignore_ascii_case("on"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_lookup_is_case_insensitive() {
        assert_eq!(SvgTag::from_name("PATH"), Some(SvgTag::Path));
        assert_eq!(SvgTag::from_name("svg"), Some(SvgTag::Svg));
        assert_eq!(SvgTag::from_name("foreignObject"), None);
        assert_eq!(SvgTag::from_name("script"), None);
    }

    #[test]
    fn test_attribute_lookup() {
        assert_eq!(SvgAttribute::from_name("viewbox"), Some(SvgAttribute::ViewBox));
        assert_eq!(SvgAttribute::from_name("stroke-width"), Some(SvgAttribute::StrokeWidth));
        assert_eq!(SvgAttribute::from_name("onclick"), None);
        assert_eq!(SvgAttribute::from_name("data-x"), None);
        assert_eq!(SvgAttribute::from_name("xlink:href"), None);
    }

    #[test]
    fn test_prop_names() {
        assert_eq!(SvgAttribute::StrokeLinejoin.prop_name(), "strokeLinejoin");
        assert_eq!(SvgAttribute::AriaHidden.prop_name(), "ariaHidden");
        assert_eq!(SvgAttribute::Class.prop_name(), "className");
        assert_eq!(SvgAttribute::ViewBox.prop_name(), "viewBox");
        for attr in SvgAttribute::ALL {
            assert!(!attr.prop_name().contains('-'), "{:?}", attr);
            assert_eq!(SvgAttribute::from_prop_name(attr.prop_name()), Some(attr));
        }
    }

    #[test]
    fn test_event_handler_detection() {
        assert!(is_event_handler("onload"));
        assert!(is_event_handler("OnMouseOver"));
        assert!(!is_event_handler("opacity"));
        assert!(!is_event_handler("o"));
    }
}
