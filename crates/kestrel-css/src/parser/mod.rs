//! Property parser registry and declaration entry points.
//!
//! [CSS 2.1 § 4.1.8 Declarations and properties](https://www.w3.org/TR/CSS2/syndata.html#declaration)
//!
//! Every property name is owned by exactly one [`PropertyParser`] in a
//! fixed table. A parser turns the tokens of a declaration value into a
//! [`ChangeSet`]: the longhands it sets and their computed values. Nothing
//! is written to a [`BoxProperties`] until the whole value has parsed.

mod box_model;
mod components;
mod decoration;
mod longhand;
mod shorthand;
mod text;

use kestrel_common::warning::warn_once;

use crate::error::{ParseError, ParseResult};
use crate::style::{BoxProperties, ComputedValue, PropertyName};
use crate::tokenizer::{CSSTokenizer, Token, TokenStream};

pub use longhand::LonghandParser;
pub use shorthand::{BorderRadiusParser, BorderShorthandParser, EdgeShorthandParser};

/// The longhands a declaration sets, in the order they were expanded.
pub type ChangeSet = Vec<(PropertyName, ComputedValue)>;

/// A parser for one or more property names.
///
/// Parsers are stateless; the same instance serves every declaration of the
/// names it owns.
pub trait PropertyParser: Sync {
    /// The property names this parser owns.
    fn names(&self) -> &'static [PropertyName];

    /// Parse the value of a declaration of `name`.
    ///
    /// The parser may stop before the end of the stream; the caller rejects
    /// any leftover tokens.
    ///
    /// # Errors
    ///
    /// Returns the reason the value does not match the property's grammar.
    fn parse(&self, name: PropertyName, stream: &mut TokenStream<'_>) -> ParseResult<ChangeSet>;
}

/// The result of applying one declaration.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseOutcome {
    /// The declaration was valid; these longhands were written.
    Applied(ChangeSet),
    /// The declaration was ignored and the target left untouched.
    Rejected(ParseError),
}

impl ParseOutcome {
    /// True for [`ParseOutcome::Applied`].
    #[must_use]
    pub const fn is_applied(&self) -> bool {
        matches!(self, Self::Applied(_))
    }
}

static MARGIN_SIDES: LonghandParser = LonghandParser::new(
    &[
        PropertyName::MarginTop,
        PropertyName::MarginRight,
        PropertyName::MarginBottom,
        PropertyName::MarginLeft,
    ],
    box_model::margin,
);
static PADDING_SIDES: LonghandParser = LonghandParser::new(
    &[
        PropertyName::PaddingTop,
        PropertyName::PaddingRight,
        PropertyName::PaddingBottom,
        PropertyName::PaddingLeft,
    ],
    box_model::padding,
);
static BORDER_SIDE_WIDTHS: LonghandParser = LonghandParser::new(
    &[
        PropertyName::BorderTopWidth,
        PropertyName::BorderRightWidth,
        PropertyName::BorderBottomWidth,
        PropertyName::BorderLeftWidth,
        PropertyName::OutlineWidth,
    ],
    box_model::border_width,
);
static BORDER_SIDE_STYLES: LonghandParser = LonghandParser::new(
    &[
        PropertyName::BorderTopStyle,
        PropertyName::BorderRightStyle,
        PropertyName::BorderBottomStyle,
        PropertyName::BorderLeftStyle,
        PropertyName::OutlineStyle,
    ],
    box_model::border_style,
);
static BORDER_SIDE_COLORS: LonghandParser = LonghandParser::new(
    &[
        PropertyName::BorderTopColor,
        PropertyName::BorderRightColor,
        PropertyName::BorderBottomColor,
        PropertyName::BorderLeftColor,
    ],
    box_model::border_color,
);
static CORNER_RADII: LonghandParser = LonghandParser::new(
    &[
        PropertyName::BorderTopRightRadius,
        PropertyName::BorderBottomRightRadius,
        PropertyName::BorderBottomLeftRadius,
        PropertyName::BorderTopLeftRadius,
    ],
    box_model::corner_radius,
);
static OUTLINE_COLOR: LonghandParser =
    LonghandParser::new(&[PropertyName::OutlineColor], box_model::outline_color);
static OFFSETS: LonghandParser = LonghandParser::new(
    &[
        PropertyName::Top,
        PropertyName::Right,
        PropertyName::Bottom,
        PropertyName::Left,
    ],
    box_model::offset,
);
static SIZES: LonghandParser =
    LonghandParser::new(&[PropertyName::Width, PropertyName::Height], box_model::size);
static MIN_SIZES: LonghandParser = LonghandParser::new(
    &[PropertyName::MinWidth, PropertyName::MinHeight],
    box_model::min_size,
);
static MAX_SIZES: LonghandParser = LonghandParser::new(
    &[PropertyName::MaxWidth, PropertyName::MaxHeight],
    box_model::max_size,
);
static BORDER_IMAGE_SOURCE: LonghandParser = LonghandParser::new(
    &[PropertyName::BorderImageSource],
    decoration::border_image_source,
);
static BORDER_IMAGE_SLICE: LonghandParser = LonghandParser::new(
    &[PropertyName::BorderImageSlice],
    decoration::border_image_slice,
);
static BORDER_IMAGE_WIDTH: LonghandParser = LonghandParser::new(
    &[PropertyName::BorderImageWidth],
    decoration::border_image_width,
);
static COLOR: LonghandParser = LonghandParser::new(&[PropertyName::Color], decoration::color);
static BACKGROUND_COLOR: LonghandParser = LonghandParser::new(
    &[PropertyName::BackgroundColor],
    decoration::background_color,
);
static BACKGROUND_REPEAT: LonghandParser = LonghandParser::new(
    &[PropertyName::BackgroundRepeat],
    decoration::background_repeat,
);
static BACKGROUND_SIZE: LonghandParser = LonghandParser::new(
    &[PropertyName::BackgroundSize],
    decoration::background_size,
);
static BOX_SHADOW: LonghandParser =
    LonghandParser::new(&[PropertyName::BoxShadow], decoration::box_shadow);
static DISPLAY: LonghandParser = LonghandParser::new(&[PropertyName::Display], text::display);
static POSITION: LonghandParser = LonghandParser::new(&[PropertyName::Position], text::position);
static FLOAT: LonghandParser = LonghandParser::new(&[PropertyName::Float], text::float);
static CLEAR: LonghandParser = LonghandParser::new(&[PropertyName::Clear], text::clear);
static OVERFLOW: LonghandParser = LonghandParser::new(&[PropertyName::Overflow], text::overflow);
static FONT_FAMILY: LonghandParser =
    LonghandParser::new(&[PropertyName::FontFamily], text::font_family);
static FONT_SIZE: LonghandParser = LonghandParser::new(&[PropertyName::FontSize], text::font_size);
static FONT_STYLE: LonghandParser =
    LonghandParser::new(&[PropertyName::FontStyle], text::font_style);
static FONT_WEIGHT: LonghandParser =
    LonghandParser::new(&[PropertyName::FontWeight], text::font_weight);
static TEXT_DECORATION: LonghandParser =
    LonghandParser::new(&[PropertyName::TextDecoration], text::text_decoration);
static LIST_STYLE_TYPE: LonghandParser =
    LonghandParser::new(&[PropertyName::ListStyleType], text::list_style_type);
static VERTICAL_ALIGN: LonghandParser =
    LonghandParser::new(&[PropertyName::VerticalAlign], text::vertical_align);
static CONTENT: LonghandParser = LonghandParser::new(&[PropertyName::Content], text::content);

static MARGIN: EdgeShorthandParser = EdgeShorthandParser::new(
    &[PropertyName::Margin],
    box_model::margin_component,
    "a margin width",
);
static PADDING: EdgeShorthandParser = EdgeShorthandParser::new(
    &[PropertyName::Padding],
    box_model::padding_component,
    "a padding width",
);
static BORDER_WIDTH: EdgeShorthandParser = EdgeShorthandParser::new(
    &[PropertyName::BorderWidth],
    box_model::border_width_component,
    "a border width",
);
static BORDER_STYLE: EdgeShorthandParser = EdgeShorthandParser::new(
    &[PropertyName::BorderStyle],
    box_model::border_style_component,
    "a border style",
);
static BORDER_COLOR: EdgeShorthandParser = EdgeShorthandParser::new(
    &[PropertyName::BorderColor],
    box_model::border_color_component,
    "a border color",
);

/// Every parser, each owning a disjoint set of names.
static PARSERS: &[&dyn PropertyParser] = &[
    &MARGIN_SIDES,
    &PADDING_SIDES,
    &BORDER_SIDE_WIDTHS,
    &BORDER_SIDE_STYLES,
    &BORDER_SIDE_COLORS,
    &CORNER_RADII,
    &OUTLINE_COLOR,
    &OFFSETS,
    &SIZES,
    &MIN_SIZES,
    &MAX_SIZES,
    &BORDER_IMAGE_SOURCE,
    &BORDER_IMAGE_SLICE,
    &BORDER_IMAGE_WIDTH,
    &COLOR,
    &BACKGROUND_COLOR,
    &BACKGROUND_REPEAT,
    &BACKGROUND_SIZE,
    &BOX_SHADOW,
    &DISPLAY,
    &POSITION,
    &FLOAT,
    &CLEAR,
    &OVERFLOW,
    &FONT_FAMILY,
    &FONT_SIZE,
    &FONT_STYLE,
    &FONT_WEIGHT,
    &TEXT_DECORATION,
    &LIST_STYLE_TYPE,
    &VERTICAL_ALIGN,
    &CONTENT,
    &MARGIN,
    &PADDING,
    &BORDER_WIDTH,
    &BORDER_STYLE,
    &BORDER_COLOR,
    &BorderRadiusParser,
    &BorderShorthandParser,
];

/// The parser that owns `name`.
#[must_use]
pub fn parser_for(name: PropertyName) -> Option<&'static dyn PropertyParser> {
    PARSERS.iter().copied().find(|parser| parser.names().contains(&name))
}

/// Parse the value of a declaration of `name` into the longhands it sets.
///
/// [§ 6.2.1 The 'inherit' value](https://www.w3.org/TR/CSS2/cascade.html#value-def-inherit)
///
/// A value consisting of `inherit` alone sets every longhand of `name` to
/// `inherit`. That is decided before the property's own grammar runs.
///
/// # Errors
///
/// Returns why the value was rejected: an empty value, a grammar mismatch,
/// or tokens left over after a complete value.
pub fn parse_property(name: PropertyName, tokens: &[Token]) -> ParseResult<ChangeSet> {
    let mut stream = TokenStream::new(tokens);
    stream.expect_not_empty()?;

    if stream.is_sole_keyword("inherit") {
        return Ok(inherit_all(name));
    }

    let parser = parser_for(name).ok_or_else(|| ParseError::UnknownProperty(name.to_string()))?;
    let changes = parser.parse(name, &mut stream)?;
    stream.expect_exhausted()?;
    Ok(changes)
}

fn inherit_all(name: PropertyName) -> ChangeSet {
    let initial = BoxProperties::new();
    name.longhands()
        .into_iter()
        .filter_map(|longhand| {
            initial
                .get(longhand)
                .map(|value| (longhand, value.to_inherit()))
        })
        .collect()
}

/// [§ 4.2 Rules for handling parsing errors](https://www.w3.org/TR/CSS2/syndata.html#parsing-errors)
///
/// Parse one declaration and, if it is valid, write it into `properties`.
///
/// "User agents must ignore a declaration with an unknown property."
/// "User agents must ignore a declaration with an illegal value."
///
/// A rejected declaration leaves `properties` exactly as it was and is
/// reported through [`debug_parse_error`].
pub fn apply_declaration(
    properties: &mut BoxProperties,
    name: &str,
    tokens: &[Token],
) -> ParseOutcome {
    let name = name.trim();
    let result = name
        .parse::<PropertyName>()
        .map_err(|_| ParseError::UnknownProperty(name.to_string()))
        .and_then(|property| parse_property(property, tokens));

    match result.and_then(|changes| write_changes(properties, name, changes)) {
        Ok(changes) => ParseOutcome::Applied(changes),
        Err(error) => {
            debug_parse_error(name, tokens, &error);
            ParseOutcome::Rejected(error)
        }
    }
}

/// Write a parser's output into `properties` as one unit.
fn write_changes(
    properties: &mut BoxProperties,
    name: &str,
    changes: ChangeSet,
) -> ParseResult<ChangeSet> {
    if properties.apply(&changes) {
        Ok(changes)
    } else {
        Err(ParseError::MismatchedValue(name.to_string()))
    }
}

/// Report a rejected declaration. Never fails.
pub fn debug_parse_error(property: &str, tokens: &[Token], error: &ParseError) {
    let value: String = tokens.iter().map(ToString::to_string).collect();
    warn_once(
        "CSS",
        &format!("ignoring '{property}: {}': {error}", value.trim()),
    );
}

/// [§ 4.1.8 Declarations and properties](https://www.w3.org/TR/CSS2/syndata.html#declaration)
///
/// Split `name: value; name: value` into names and value tokens. Each value
/// ends with [`Token::Null`]. Parts without a name and a colon are reported
/// and skipped.
#[must_use]
pub fn parse_declaration_block(text: &str) -> Vec<(String, Vec<Token>)> {
    let tokens = CSSTokenizer::tokenize(text);
    let mut declarations = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (i, token) in tokens.iter().enumerate() {
        match token {
            Token::Function(_) | Token::Delim('(') => depth += 1,
            Token::Delim(')') => depth = depth.saturating_sub(1),
            Token::Delim(';') | Token::Null if depth == 0 || token.is_null() => {
                if let Some(declaration) = split_declaration(&tokens[start..i]) {
                    declarations.push(declaration);
                }
                start = i + 1;
            }
            _ => {}
        }
    }
    declarations
}

fn split_declaration(tokens: &[Token]) -> Option<(String, Vec<Token>)> {
    let mut stream = TokenStream::new(tokens);
    if stream.is_exhausted() {
        return None;
    }
    let name = match stream.next() {
        Some(Token::Ident(name)) if matches!(stream.peek(), Some(Token::Delim(':'))) => {
            stream.advance();
            name.clone()
        }
        _ => {
            let text: String = tokens.iter().map(ToString::to_string).collect();
            warn_once(
                "CSS",
                &format!("ignoring malformed declaration '{}'", text.trim()),
            );
            return None;
        }
    };
    let mut value: Vec<Token> = std::iter::from_fn(|| stream.next_raw().cloned()).collect();
    value.push(Token::Null);
    Some((name, value))
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn every_property_has_exactly_one_parser() {
        for name in PropertyName::iter() {
            let owners = PARSERS
                .iter()
                .filter(|parser| parser.names().contains(&name))
                .count();
            assert_eq!(owners, 1, "{name}");
        }
    }

    #[test]
    fn mismatched_changes_leave_the_record_untouched() {
        use crate::style::{Margin, Padding};

        let mut props = BoxProperties::new();
        let before = props.clone();
        let changes = vec![
            (PropertyName::MarginTop, ComputedValue::Margin(Margin::Auto)),
            (PropertyName::MarginBottom, ComputedValue::Padding(Padding::Inherit)),
        ];
        let error = write_changes(&mut props, "margin", changes).unwrap_err();
        assert_eq!(error, ParseError::MismatchedValue("margin".to_string()));
        assert_eq!(props, before);
    }

    #[test]
    fn declaration_block_splits_on_semicolons() {
        let declarations = parse_declaration_block("margin: 1px 2px; color : red ;; bogus");
        let names: Vec<&str> = declarations.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, ["margin", "color"]);
        assert_eq!(declarations[0].1.last(), Some(&Token::Null));
    }

    #[test]
    fn semicolons_inside_functions_do_not_split() {
        let declarations = parse_declaration_block("content: attr(x;y); color: red");
        assert_eq!(declarations.len(), 2);
    }
}
