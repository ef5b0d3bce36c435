//! Integration tests for computed values: serialization round trips and
//! `inherit` resolution.

use kestrel_css::parser::{apply_declaration, parse_property};
use kestrel_css::style::{
    BoxProperties, Color, ComputedValue, Display, FontWeight, Inheritable, Margin, PropertyName,
};
use kestrel_css::tokenizer::CSSTokenizer;
use kestrel_css::values::{ColorValue, Length, LengthUnit};

/// Parse `text` into an element whose parent has default styles, compute
/// it, and return the computed longhand.
fn computed(name: PropertyName, text: &str) -> ComputedValue {
    let mut parent = BoxProperties::new();
    parent.compute(None);

    let mut props = BoxProperties::new();
    let outcome = apply_declaration(&mut props, name.as_ref(), &CSSTokenizer::tokenize(text));
    assert!(outcome.is_applied(), "{name}: {text} was rejected: {outcome:?}");
    props.compute(Some(&parent));
    props.get(name).unwrap()
}

fn assert_round_trip(name: PropertyName, text: &str) {
    let value = computed(name, text);
    let serialized = value.to_string();
    let reparsed = parse_property(name, &CSSTokenizer::tokenize(&serialized))
        .unwrap_or_else(|e| panic!("{name}: {serialized:?} from {text:?} failed: {e}"));
    assert_eq!(reparsed, vec![(name, value)], "{name}: {text:?} -> {serialized:?}");
}

#[test]
fn test_border_image_slice_round_trip() {
    for text in ["100%", "10% 20 fill", "fill 1 2 3 4", "10 / 5%", "1 2 / 3 fill"] {
        assert_round_trip(PropertyName::BorderImageSlice, text);
    }
}

#[test]
fn test_background_size_round_trip() {
    for text in ["cover", "contain", "auto", "10px", "50% auto", "1em / 2em", "auto 3px"] {
        assert_round_trip(PropertyName::BackgroundSize, text);
    }
}

#[test]
fn test_display_round_trip() {
    let keywords = [
        "inline",
        "block",
        "list-item",
        "run-in",
        "inline-block",
        "table",
        "inline-table",
        "table-row-group",
        "table-header-group",
        "table-footer-group",
        "table-row",
        "table-column-group",
        "table-column",
        "table-cell",
        "table-caption",
        "none",
    ];
    for text in keywords {
        assert_round_trip(PropertyName::Display, text);
    }
}

#[test]
fn test_other_families_round_trip() {
    let cases = [
        (PropertyName::MarginTop, "-2em"),
        (PropertyName::PaddingLeft, "5%"),
        (PropertyName::BorderTopWidth, "thick"),
        (PropertyName::BorderLeftColor, "currentcolor"),
        (PropertyName::BorderTopLeftRadius, "5px 10%"),
        (PropertyName::BorderImageSource, "url(img.png)"),
        (PropertyName::BorderImageWidth, "auto 2 / 10px"),
        (PropertyName::OutlineColor, "invert"),
        (PropertyName::BackgroundColor, "rgba(255, 0, 0, 0.5)"),
        (PropertyName::BackgroundRepeat, "repeat-x, space round, no-repeat"),
        (PropertyName::BoxShadow, "inset 1px 2px 3px red, 0 0 blue"),
        (PropertyName::BoxShadow, "none"),
        (PropertyName::Position, "fixed"),
        (PropertyName::Overflow, "scroll"),
        (PropertyName::Clear, "both"),
        (PropertyName::Left, "-3px"),
        (PropertyName::MaxHeight, "none"),
        (PropertyName::Color, "#0a0b0c"),
        (PropertyName::FontFamily, "\"Times New Roman\", Georgia Pro, serif"),
        (PropertyName::FontSize, "x-large"),
        (PropertyName::FontSize, "1.5em"),
        (PropertyName::FontStyle, "italic"),
        (PropertyName::FontWeight, "700"),
        (PropertyName::TextDecoration, "blink underline"),
        (PropertyName::ListStyleType, "upper-greek"),
        (PropertyName::VerticalAlign, "text-top"),
        (PropertyName::VerticalAlign, "-10%"),
        (
            PropertyName::Content,
            "\"a\" counter(item, upper-roman) counters(s, \".\") attr(title) open-quote",
        ),
    ];
    for (name, text) in cases {
        assert_round_trip(name, text);
    }
}

#[test]
fn test_serialization_is_canonical() {
    assert_eq!(computed(PropertyName::Color, "RED").to_string(), "#ff0000");
    assert_eq!(
        computed(PropertyName::BackgroundSize, "10px").to_string(),
        "10px auto"
    );
    assert_eq!(
        computed(PropertyName::BackgroundRepeat, "no-repeat repeat").to_string(),
        "repeat-y"
    );
    assert_eq!(
        computed(PropertyName::TextDecoration, "blink underline").to_string(),
        "underline blink"
    );
    assert_eq!(
        computed(PropertyName::BorderImageSlice, "7 7 7 7").to_string(),
        "7"
    );
}

#[test]
fn test_inherit_copies_parent_value() {
    let mut parent = BoxProperties::new();
    parent.margin.top = Margin::Length(Length {
        value: 3.0,
        unit: LengthUnit::Em,
    });
    parent.font_weight = FontWeight::Numeric(900);
    parent.compute(None);

    let mut child = BoxProperties::new();
    for (name, value) in [("margin-top", "inherit"), ("font-weight", "inherit")] {
        let _ = apply_declaration(&mut child, name, &CSSTokenizer::tokenize(value));
    }
    child.compute(Some(&parent));
    assert_eq!(child.margin.top, parent.margin.top);
    assert_eq!(child.font_weight, FontWeight::Numeric(900));
}

#[test]
fn test_root_inherit_falls_back_to_initial() {
    let mut root = BoxProperties::new();
    let _ = apply_declaration(&mut root, "display", &CSSTokenizer::tokenize("inherit"));
    root.compute(None);
    assert_eq!(root.color, Color::initial());
    assert_eq!(root.color, Color::Rgba(ColorValue::BLACK));
    // initial inline, then blockified at the root
    assert_eq!(root.display, Display::Block);
}

#[test]
fn test_inherited_properties_default_to_parent() {
    let mut parent = BoxProperties::new();
    let _ = apply_declaration(&mut parent, "color", &CSSTokenizer::tokenize("blue"));
    let _ = apply_declaration(&mut parent, "margin-left", &CSSTokenizer::tokenize("9px"));
    parent.compute(None);

    let mut child = BoxProperties::new();
    child.compute(Some(&parent));
    assert_eq!(child.color, Color::Rgba(ColorValue::rgb(0, 0, 255)));
    assert_eq!(child.margin.left, Margin::initial());
}
