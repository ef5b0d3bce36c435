//! Integration tests for property parsing, shorthand expansion and
//! declaration rejection.

use kestrel_common::warning::take_warnings;
use kestrel_css::error::ParseError;
use kestrel_css::parser::{ParseOutcome, apply_declaration, parse_declaration_block, parse_property};
use kestrel_css::style::{
    BorderColor, BorderRadius, BorderStyle, BorderWidth, BoxProperties, ComputedValue, Display,
    Margin, OutlineColor, PropertyName,
};
use kestrel_css::tokenizer::{CSSTokenizer, Token};
use kestrel_css::values::{Axes, ColorValue, Length, LengthPercentage};
use quickcheck_macros::quickcheck;
use strum::IntoEnumIterator;

fn parse(name: PropertyName, text: &str) -> Result<Vec<(PropertyName, ComputedValue)>, ParseError> {
    parse_property(name, &CSSTokenizer::tokenize(text))
}

fn apply(props: &mut BoxProperties, name: &str, text: &str) -> ParseOutcome {
    apply_declaration(props, name, &CSSTokenizer::tokenize(text))
}

fn margin_px(value: i16) -> ComputedValue {
    ComputedValue::Margin(Margin::Length(Length::px(f32::from(value))))
}

#[quickcheck]
fn edge_shorthand_expands_clockwise(count: u8, values: (i16, i16, i16, i16)) -> bool {
    let all = [values.0, values.1, values.2, values.3];
    let given = &all[..usize::from(count % 4) + 1];
    let text = given
        .iter()
        .map(|v| format!("{v}px"))
        .collect::<Vec<_>>()
        .join(" ");

    // top, right, bottom, left
    let sources: [usize; 4] = match given.len() {
        1 => [0, 0, 0, 0],
        2 => [0, 1, 0, 1],
        3 => [0, 1, 2, 1],
        _ => [0, 1, 2, 3],
    };
    let expected: Vec<_> = PropertyName::Margin
        .longhands()
        .into_iter()
        .zip(sources)
        .map(|(name, source)| (name, margin_px(given[source])))
        .collect();

    parse(PropertyName::Margin, &text) == Ok(expected)
}

#[test]
fn test_border_width_single_value_sets_every_side() {
    let mut props = BoxProperties::new();
    assert!(apply(&mut props, "border-width", "2px").is_applied());
    let two = BorderWidth::Length(Length::px(2.0));
    assert_eq!(props.border_width.top, two);
    assert_eq!(props.border_width.right, two);
    assert_eq!(props.border_width.bottom, two);
    assert_eq!(props.border_width.left, two);
}

#[test]
fn test_border_radius_axes_expand_independently() {
    let changes = parse(PropertyName::BorderRadius, "10px 5px / 20px 8px").unwrap();
    let radius = |h: f32, v: f32| {
        ComputedValue::BorderRadius(BorderRadius::Radius(Axes {
            horizontal: LengthPercentage::Length(Length::px(h)),
            vertical: LengthPercentage::Length(Length::px(v)),
        }))
    };
    assert_eq!(
        changes,
        vec![
            (PropertyName::BorderTopRightRadius, radius(10.0, 20.0)),
            (PropertyName::BorderBottomRightRadius, radius(5.0, 8.0)),
            (PropertyName::BorderBottomLeftRadius, radius(10.0, 20.0)),
            (PropertyName::BorderTopLeftRadius, radius(5.0, 8.0)),
        ]
    );
}

#[test]
fn test_border_radius_without_slash_copies_horizontal() {
    let changes = parse(PropertyName::BorderRadius, "4px 10%").unwrap();
    let ComputedValue::BorderRadius(BorderRadius::Radius(top_right)) = &changes[0].1 else {
        panic!("expected a radius, got {:?}", changes[0].1);
    };
    assert_eq!(top_right.horizontal, top_right.vertical);
    let ComputedValue::BorderRadius(BorderRadius::Radius(bottom_right)) = &changes[1].1 else {
        panic!("expected a radius, got {:?}", changes[1].1);
    };
    assert_eq!(bottom_right.horizontal, LengthPercentage::Percentage(10.0));
}

#[test]
fn test_inherit_sets_every_longhand_of_every_property() {
    for name in PropertyName::iter() {
        let changes = parse(name, " INHERIT ").unwrap();
        let names: Vec<_> = changes.iter().map(|(n, _)| *n).collect();
        assert_eq!(names, name.longhands(), "{name}");
        for (longhand, value) in changes {
            assert_eq!(value, value.to_inherit(), "{name} -> {longhand}");
        }
    }
}

#[test]
fn test_inherit_mixed_with_values_is_rejected() {
    assert!(parse(PropertyName::Margin, "inherit 1px").is_err());
    assert!(parse(PropertyName::Border, "1px inherit").is_err());
    assert!(parse(PropertyName::FontFamily, "Arial, inherit").is_err());
}

#[test]
fn test_malformed_declarations_leave_properties_untouched() {
    let cases = [
        ("margin", "1px 2px 3px 4px 5px"),
        ("border-width", "2px red"),
        ("display", "blocky"),
        ("border", "1px solid red 2px"),
        ("color", "#12"),
        ("box-shadow", "1px"),
        ("font-weight", "450"),
        ("border-radius", "1px / 2px / 3px"),
        ("width", "-3px"),
        ("margin-top", ""),
        ("margin-top", "3"),
        ("padding", "-1px"),
        ("colour", "red"),
        ("content", "url(a b.png)"),
        ("border-image-source", "url(a\"b)"),
        ("content", "\"abc\n"),
        ("font-family", "\"Times\n"),
        ("margin", "1e39px"),
    ];
    for (name, value) in cases {
        let mut props = BoxProperties::new();
        let _ = apply(&mut props, "margin", "7px");
        let snapshot = props.clone();
        let outcome = apply(&mut props, name, value);
        assert!(
            matches!(outcome, ParseOutcome::Rejected(_)),
            "{name}: {value} was accepted"
        );
        assert_eq!(props, snapshot, "{name}: {value} changed the target");
    }
}

#[test]
fn test_rejection_reasons() {
    assert_eq!(
        parse(PropertyName::Margin, "1px 2px 3px 4px 5px"),
        Err(ParseError::TooManyValues { max: 4 })
    );
    assert_eq!(
        parse(PropertyName::Display, "blocky"),
        Err(ParseError::InvalidKeyword("blocky".to_string()))
    );
    assert_eq!(
        parse(PropertyName::BorderWidth, "2px red"),
        Err(ParseError::TrailingTokens("red".to_string()))
    );
    assert_eq!(parse(PropertyName::MarginTop, "   "), Err(ParseError::EmptyValue));
    assert!(matches!(
        parse(PropertyName::Color, "#12"),
        Err(ParseError::InvalidColor(_))
    ));
    assert!(matches!(
        parse(PropertyName::Width, "-3px"),
        Err(ParseError::InvalidLength(_))
    ));
}

#[test]
fn test_out_of_range_numbers_are_rejected() {
    assert!(matches!(
        parse(PropertyName::Width, "1e39px"),
        Err(ParseError::InvalidLength(_))
    ));
    assert!(matches!(
        parse(PropertyName::Width, "1e39%"),
        Err(ParseError::InvalidLength(_))
    ));
    assert!(parse(PropertyName::Margin, "0 -1e39px").is_err());
    assert!(parse(PropertyName::Width, "1e38px").is_ok());
}

#[test]
fn test_rejected_declarations_are_reported() {
    let _ = take_warnings();
    let mut props = BoxProperties::new();
    let _ = apply(&mut props, "margin", "1px 2px 3px 4px 5px");
    let _ = apply(&mut props, "margin", "1px");
    let warnings = take_warnings();
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].contains("margin"), "{warnings:?}");
}

#[test]
fn test_border_shorthand_resets_omitted_components() {
    let mut props = BoxProperties::new();
    assert!(apply(&mut props, "border-top-width", "thick").is_applied());
    assert!(apply(&mut props, "border-top", "red dashed").is_applied());
    assert_eq!(props.border_width.top, BorderWidth::Medium);
    assert_eq!(props.border_style.top, BorderStyle::Dashed);
    assert_eq!(
        props.border_color.top,
        BorderColor::Rgba(ColorValue::rgb(255, 0, 0))
    );
    assert_eq!(props.border_style.bottom, BorderStyle::None);
}

#[test]
fn test_border_shorthand_sets_all_twelve_longhands() {
    let changes = parse(PropertyName::Border, "solid 1px currentcolor").unwrap();
    assert_eq!(changes.len(), 12);
    let mut props = BoxProperties::new();
    assert!(props.apply(&changes));
    assert_eq!(props.border_style.left, BorderStyle::Solid);
    assert_eq!(props.border_color.right, BorderColor::CurrentColor);
}

#[test]
fn test_border_shorthand_rejects_repeated_component() {
    assert!(parse(PropertyName::Border, "solid dotted").is_err());
}

#[test]
fn test_outline_accepts_invert() {
    let mut props = BoxProperties::new();
    assert!(apply(&mut props, "outline", "invert dotted thin").is_applied());
    assert_eq!(props.outline_color, OutlineColor::Invert);
    assert_eq!(props.outline_style, BorderStyle::Dotted);
    assert_eq!(props.outline_width, BorderWidth::Thin);
}

#[test]
fn test_detached_minus_reads_as_negative_margin() {
    let tokens = vec![
        Token::Delim('-'),
        Token::dimension(4.0, "px"),
        Token::Null,
    ];
    assert_eq!(
        parse_property(PropertyName::MarginLeft, &tokens),
        Ok(vec![(PropertyName::MarginLeft, margin_px(-4))])
    );
}

#[test]
fn test_declaration_block_round_trip() {
    let mut props = BoxProperties::new();
    let block = "margin: 1px 2px; DISPLAY: inline-block; bogus; width: 10%";
    for (name, tokens) in parse_declaration_block(block) {
        let _ = apply_declaration(&mut props, &name, &tokens);
    }
    assert_eq!(props.margin.top, Margin::Length(Length::px(1.0)));
    assert_eq!(props.margin.left, Margin::Length(Length::px(2.0)));
    assert_eq!(props.display, Display::InlineBlock);
    assert_eq!(
        props.get(PropertyName::Width).map(|v| v.to_string()),
        Some("10%".to_string())
    );
}

#[test]
fn test_later_declarations_win() {
    let mut props = BoxProperties::new();
    let _ = apply(&mut props, "margin", "5px");
    let _ = apply(&mut props, "margin-left", "auto");
    let _ = apply(&mut props, "margin", "bogus");
    assert_eq!(props.margin.top, Margin::Length(Length::px(5.0)));
    assert_eq!(props.margin.left, Margin::Auto);
}
