//! Readers for visual formatting keywords, fonts, text and generated content.

use std::str::FromStr;

use crate::error::{ParseError, ParseResult};
use crate::style::{
    AbsoluteSize, Clear, ComputedValue, Content, ContentItem, Display, FamilyName, Float,
    FontFamily, FontSize, FontStyle, FontWeight, GenericFamily, ListStyleType, Overflow,
    Position, TextDecoration, VerticalAlign, VerticalAlignKeyword,
};
use crate::tokenizer::{Token, TokenStream};
use crate::values::LengthPercentage;

use super::box_model::keyword;
use super::components::{
    Sign, expect_close, expect_ident, expect_string, read_comma_list, read_ident, read_keyword,
    read_length_percentage, reject, required,
};

pub(super) fn display(stream: &mut TokenStream<'_>) -> ParseResult<ComputedValue> {
    keyword::<Display>(stream, "a display type").map(ComputedValue::Display)
}

pub(super) fn position(stream: &mut TokenStream<'_>) -> ParseResult<ComputedValue> {
    keyword::<Position>(stream, "a positioning scheme").map(ComputedValue::Position)
}

pub(super) fn float(stream: &mut TokenStream<'_>) -> ParseResult<ComputedValue> {
    keyword::<Float>(stream, "a float side").map(ComputedValue::Float)
}

pub(super) fn clear(stream: &mut TokenStream<'_>) -> ParseResult<ComputedValue> {
    keyword::<Clear>(stream, "a clear side").map(ComputedValue::Clear)
}

pub(super) fn overflow(stream: &mut TokenStream<'_>) -> ParseResult<ComputedValue> {
    keyword::<Overflow>(stream, "an overflow mode").map(ComputedValue::Overflow)
}

pub(super) fn font_style(stream: &mut TokenStream<'_>) -> ParseResult<ComputedValue> {
    keyword::<FontStyle>(stream, "a font style").map(ComputedValue::FontStyle)
}

pub(super) fn list_style_type(stream: &mut TokenStream<'_>) -> ParseResult<ComputedValue> {
    keyword::<ListStyleType>(stream, "a list style type").map(ComputedValue::ListStyleType)
}

/// [§ 15.3 'font-family'](https://www.w3.org/TR/CSS2/fonts.html#font-family-prop)
pub(super) fn font_family(stream: &mut TokenStream<'_>) -> ParseResult<ComputedValue> {
    let families = read_comma_list(stream, family_name)?;
    Ok(ComputedValue::FontFamily(FontFamily::Families(families)))
}

/// "Font family names must either be given quoted as strings, or unquoted as
/// a sequence of one or more identifiers."
fn family_name(stream: &mut TokenStream<'_>) -> ParseResult<FamilyName> {
    match stream.peek() {
        Some(Token::String(name)) => {
            stream.advance();
            Ok(FamilyName::Named(name.clone()))
        }
        Some(Token::Ident(_)) => {
            let mut words = Vec::new();
            while let Some(Token::Ident(word)) = stream.peek() {
                if word.eq_ignore_ascii_case("inherit") {
                    return Err(ParseError::InvalidKeyword(word.clone()));
                }
                words.push(word.as_str());
                stream.advance();
            }
            // "Generic font family names are keywords and must NOT be quoted."
            if let [word] = words.as_slice()
                && let Ok(generic) = GenericFamily::from_str(word)
            {
                return Ok(FamilyName::Generic(generic));
            }
            Ok(FamilyName::Named(words.join(" ")))
        }
        other => Err(ParseError::unexpected("a font family", other)),
    }
}

/// [§ 15.7 'font-size'](https://www.w3.org/TR/CSS2/fonts.html#font-size-props)
///
/// "Negative values are not allowed."
pub(super) fn font_size(stream: &mut TokenStream<'_>) -> ParseResult<ComputedValue> {
    let size = if let Some(absolute) = read_ident::<AbsoluteSize>(stream) {
        FontSize::Absolute(absolute)
    } else if stream.eat_ident("larger") {
        FontSize::Larger
    } else if stream.eat_ident("smaller") {
        FontSize::Smaller
    } else {
        let value = read_length_percentage(stream, Sign::NonNegative)?;
        match required(value, stream, "a font size")? {
            LengthPercentage::Length(l) => FontSize::Length(l),
            LengthPercentage::Percentage(p) => FontSize::Percentage(p),
        }
    };
    Ok(ComputedValue::FontSize(size))
}

/// [§ 15.6 'font-weight'](https://www.w3.org/TR/CSS2/fonts.html#font-boldness)
pub(super) fn font_weight(stream: &mut TokenStream<'_>) -> ParseResult<ComputedValue> {
    let weight = match stream.peek() {
        Some(Token::Number(n)) => numeric_weight(*n)?,
        Some(Token::Ident(ident)) => match ident.to_ascii_lowercase().as_str() {
            "normal" => FontWeight::Normal,
            "bold" => FontWeight::Bold,
            "bolder" => FontWeight::Bolder,
            "lighter" => FontWeight::Lighter,
            _ => return Err(ParseError::InvalidKeyword(ident.clone())),
        },
        other => return Err(ParseError::unexpected("a font weight", other)),
    };
    stream.advance();
    Ok(ComputedValue::FontWeight(weight))
}

#[allow(
    clippy::float_cmp,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
fn numeric_weight(value: f32) -> ParseResult<FontWeight> {
    let valid = value.fract() == 0.0 && (100.0..=900.0).contains(&value) && value % 100.0 == 0.0;
    if valid {
        Ok(FontWeight::Numeric(value as u16))
    } else {
        Err(ParseError::InvalidKeyword(value.to_string()))
    }
}

/// [§ 16.3.1 'text-decoration'](https://www.w3.org/TR/CSS2/text.html#lining-striking-props)
pub(super) fn text_decoration(stream: &mut TokenStream<'_>) -> ParseResult<ComputedValue> {
    const LINES: [&str; 4] = ["underline", "overline", "line-through", "blink"];

    if stream.eat_ident("none") {
        return Ok(ComputedValue::TextDecoration(TextDecoration::None));
    }
    let mut set = [false; 4];
    while let Some(Token::Ident(ident)) = stream.peek() {
        let Some(index) = LINES.iter().position(|line| ident.eq_ignore_ascii_case(line)) else {
            return Err(ParseError::InvalidKeyword(ident.clone()));
        };
        if set[index] {
            return Err(ParseError::DuplicateKeyword(ident.clone()));
        }
        set[index] = true;
        stream.advance();
    }
    if !set.contains(&true) {
        return Err(reject(stream, "a text decoration"));
    }
    let [underline, overline, line_through, blink] = set;
    Ok(ComputedValue::TextDecoration(TextDecoration::Lines {
        underline,
        overline,
        line_through,
        blink,
    }))
}

/// [§ 10.8.1 'vertical-align'](https://www.w3.org/TR/CSS2/visudet.html#propdef-vertical-align)
pub(super) fn vertical_align(stream: &mut TokenStream<'_>) -> ParseResult<ComputedValue> {
    if let Some(keyword) = read_ident::<VerticalAlignKeyword>(stream) {
        return Ok(ComputedValue::VerticalAlign(VerticalAlign::Keyword(keyword)));
    }
    let value = read_length_percentage(stream, Sign::Any)?;
    Ok(ComputedValue::VerticalAlign(
        match required(value, stream, "a vertical alignment")? {
            LengthPercentage::Length(l) => VerticalAlign::Length(l),
            LengthPercentage::Percentage(p) => VerticalAlign::Percentage(p),
        },
    ))
}

/// [§ 12.2 The 'content' property](https://www.w3.org/TR/CSS2/generate.html#content)
pub(super) fn content(stream: &mut TokenStream<'_>) -> ParseResult<ComputedValue> {
    if stream.eat_ident("normal") {
        return Ok(ComputedValue::Content(Content::Normal));
    }
    if stream.eat_ident("none") {
        return Ok(ComputedValue::Content(Content::None));
    }
    let mut items = Vec::new();
    while let Some(item) = content_item(stream)? {
        items.push(item);
    }
    if items.is_empty() {
        return Err(reject(stream, "generated content"));
    }
    Ok(ComputedValue::Content(Content::Items(items)))
}

fn content_item(stream: &mut TokenStream<'_>) -> ParseResult<Option<ContentItem>> {
    let item = match stream.peek() {
        Some(Token::String(text)) => ContentItem::String(text.clone()),
        Some(Token::Url(url)) => ContentItem::Url(url.clone()),
        Some(Token::Ident(ident)) => match ident.to_ascii_lowercase().as_str() {
            "open-quote" => ContentItem::OpenQuote,
            "close-quote" => ContentItem::CloseQuote,
            "no-open-quote" => ContentItem::NoOpenQuote,
            "no-close-quote" => ContentItem::NoCloseQuote,
            _ => return Ok(None),
        },
        Some(Token::Function(name)) => {
            let name = name.to_ascii_lowercase();
            stream.advance();
            return content_function(&name, stream).map(Some);
        }
        _ => return Ok(None),
    };
    stream.advance();
    Ok(Some(item))
}

/// The arguments of `url()`, `attr()`, `counter()` or `counters()`, up to
/// and including the closing parenthesis.
fn content_function(name: &str, stream: &mut TokenStream<'_>) -> ParseResult<ContentItem> {
    let item = match name {
        "url" => ContentItem::Url(expect_string(stream, "a quoted URL")?),
        "attr" => ContentItem::Attr(expect_ident(stream, "an attribute name")?),
        // "counter(name) or counter(name, style)"
        "counter" => {
            let name = expect_ident(stream, "a counter name")?;
            ContentItem::Counter {
                name,
                style: counter_style(stream)?,
            }
        }
        // "counters(name, string) or counters(name, string, style)"
        "counters" => {
            let name = expect_ident(stream, "a counter name")?;
            if !stream.eat_delim(',') {
                return Err(ParseError::unexpected("','", stream.peek()));
            }
            let separator = expect_string(stream, "a counter separator")?;
            ContentItem::Counters {
                name,
                separator,
                style: counter_style(stream)?,
            }
        }
        _ => return Err(ParseError::InvalidKeyword(format!("{name}("))),
    };
    expect_close(stream)?;
    Ok(item)
}

/// `, <list-style-type>` or nothing; "The default style is 'decimal'."
fn counter_style(stream: &mut TokenStream<'_>) -> ParseResult<ListStyleType> {
    if !stream.eat_delim(',') {
        return Ok(ListStyleType::Decimal);
    }
    let style = read_keyword::<ListStyleType>(stream);
    required(style, stream, "a counter style")
}
