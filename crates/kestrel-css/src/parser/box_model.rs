//! Readers for box edges, borders, offsets and sizes.

use std::str::FromStr;

use crate::error::{ParseError, ParseResult};
use crate::style::{
    BorderColor, BorderRadius, BorderStyle, BorderWidth, ComputedValue, Inheritable, Margin,
    MaxSize, MinSize, Offset, OutlineColor, Padding, Size,
};
use crate::tokenizer::TokenStream;
use crate::values::{Axes, LengthPercentage};

use super::components::{
    Sign, read_color, read_keyword, read_length, read_length_percentage, required,
};

/// Read a whole-value keyword of family `T`.
pub(super) fn keyword<T: FromStr + Inheritable>(
    stream: &mut TokenStream<'_>,
    expected: &'static str,
) -> ParseResult<T> {
    let value = read_keyword::<T>(stream);
    required(value, stream, expected)
}

// Components: one value of a possibly multi-value declaration.

pub(super) fn margin_component(stream: &mut TokenStream<'_>) -> ParseResult<Option<ComputedValue>> {
    if stream.eat_ident("auto") {
        return Ok(Some(ComputedValue::Margin(Margin::Auto)));
    }
    Ok(read_length_percentage(stream, Sign::Any)?.map(|value| {
        ComputedValue::Margin(match value {
            LengthPercentage::Length(l) => Margin::Length(l),
            LengthPercentage::Percentage(p) => Margin::Percentage(p),
        })
    }))
}

pub(super) fn padding_component(
    stream: &mut TokenStream<'_>,
) -> ParseResult<Option<ComputedValue>> {
    Ok(read_length_percentage(stream, Sign::NonNegative)?.map(|value| {
        ComputedValue::Padding(match value {
            LengthPercentage::Length(l) => Padding::Length(l),
            LengthPercentage::Percentage(p) => Padding::Percentage(p),
        })
    }))
}

/// `thin | medium | thick | <length>`
pub(super) fn read_border_width(stream: &mut TokenStream<'_>) -> ParseResult<Option<BorderWidth>> {
    if stream.eat_ident("thin") {
        return Ok(Some(BorderWidth::Thin));
    }
    if stream.eat_ident("medium") {
        return Ok(Some(BorderWidth::Medium));
    }
    if stream.eat_ident("thick") {
        return Ok(Some(BorderWidth::Thick));
    }
    Ok(read_length(stream, Sign::NonNegative)?.map(BorderWidth::Length))
}

pub(super) fn border_width_component(
    stream: &mut TokenStream<'_>,
) -> ParseResult<Option<ComputedValue>> {
    Ok(read_border_width(stream)?.map(ComputedValue::BorderWidth))
}

// Shares the fallible signature of the other edge component readers.
#[allow(clippy::unnecessary_wraps)]
pub(super) fn border_style_component(
    stream: &mut TokenStream<'_>,
) -> ParseResult<Option<ComputedValue>> {
    Ok(read_keyword::<BorderStyle>(stream).map(ComputedValue::BorderStyle))
}

/// `<color> | currentcolor`
pub(super) fn read_border_color(stream: &mut TokenStream<'_>) -> ParseResult<Option<BorderColor>> {
    if stream.eat_ident("currentcolor") {
        return Ok(Some(BorderColor::CurrentColor));
    }
    Ok(read_color(stream)?.map(BorderColor::Rgba))
}

pub(super) fn border_color_component(
    stream: &mut TokenStream<'_>,
) -> ParseResult<Option<ComputedValue>> {
    Ok(read_border_color(stream)?.map(ComputedValue::BorderColor))
}

/// `<color> | invert`
pub(super) fn read_outline_color(
    stream: &mut TokenStream<'_>,
) -> ParseResult<Option<OutlineColor>> {
    if stream.eat_ident("invert") {
        return Ok(Some(OutlineColor::Invert));
    }
    Ok(read_color(stream)?.map(OutlineColor::Rgba))
}

/// One non-negative radius.
pub(super) fn radius_component(
    stream: &mut TokenStream<'_>,
) -> ParseResult<Option<LengthPercentage>> {
    read_length_percentage(stream, Sign::NonNegative)
}

// Whole values of single longhands.

pub(super) fn margin(stream: &mut TokenStream<'_>) -> ParseResult<ComputedValue> {
    let value = margin_component(stream)?;
    required(value, stream, "a margin width")
}

pub(super) fn padding(stream: &mut TokenStream<'_>) -> ParseResult<ComputedValue> {
    let value = padding_component(stream)?;
    required(value, stream, "a padding width")
}

pub(super) fn border_width(stream: &mut TokenStream<'_>) -> ParseResult<ComputedValue> {
    let value = border_width_component(stream)?;
    required(value, stream, "a border width")
}

pub(super) fn border_style(stream: &mut TokenStream<'_>) -> ParseResult<ComputedValue> {
    keyword(stream, "a border style").map(ComputedValue::BorderStyle)
}

pub(super) fn border_color(stream: &mut TokenStream<'_>) -> ParseResult<ComputedValue> {
    let value = border_color_component(stream)?;
    required(value, stream, "a border color")
}

pub(super) fn outline_color(stream: &mut TokenStream<'_>) -> ParseResult<ComputedValue> {
    let value = read_outline_color(stream)?;
    required(value, stream, "an outline color").map(ComputedValue::OutlineColor)
}

/// [§ 5.1 Curve Radii](https://www.w3.org/TR/css-backgrounds-3/#border-radius)
///
/// "Value: `<length-percentage>{1,2}`"
pub(super) fn corner_radius(stream: &mut TokenStream<'_>) -> ParseResult<ComputedValue> {
    let first = radius_component(stream)?;
    let horizontal = required(first, stream, "a corner radius")?;
    let vertical = radius_component(stream)?.unwrap_or(horizontal);
    if radius_component(stream)?.is_some() {
        return Err(ParseError::TooManyValues { max: 2 });
    }
    Ok(ComputedValue::BorderRadius(BorderRadius::Radius(Axes {
        horizontal,
        vertical,
    })))
}

/// `top`, `right`, `bottom`, `left`: `<length> | <percentage> | auto`
pub(super) fn offset(stream: &mut TokenStream<'_>) -> ParseResult<ComputedValue> {
    if stream.eat_ident("auto") {
        return Ok(ComputedValue::Offset(Offset::Auto));
    }
    let value = read_length_percentage(stream, Sign::Any)?;
    Ok(ComputedValue::Offset(
        match required(value, stream, "an offset")? {
            LengthPercentage::Length(l) => Offset::Length(l),
            LengthPercentage::Percentage(p) => Offset::Percentage(p),
        },
    ))
}

/// `width`, `height`: `<length> | <percentage> | auto`
pub(super) fn size(stream: &mut TokenStream<'_>) -> ParseResult<ComputedValue> {
    if stream.eat_ident("auto") {
        return Ok(ComputedValue::Size(Size::Auto));
    }
    let value = read_length_percentage(stream, Sign::NonNegative)?;
    Ok(ComputedValue::Size(match required(value, stream, "a size")? {
        LengthPercentage::Length(l) => Size::Length(l),
        LengthPercentage::Percentage(p) => Size::Percentage(p),
    }))
}

/// `min-width`, `min-height`: `<length> | <percentage>`
pub(super) fn min_size(stream: &mut TokenStream<'_>) -> ParseResult<ComputedValue> {
    let value = read_length_percentage(stream, Sign::NonNegative)?;
    Ok(ComputedValue::MinSize(
        match required(value, stream, "a minimum size")? {
            LengthPercentage::Length(l) => MinSize::Length(l),
            LengthPercentage::Percentage(p) => MinSize::Percentage(p),
        },
    ))
}

/// `max-width`, `max-height`: `<length> | <percentage> | none`
pub(super) fn max_size(stream: &mut TokenStream<'_>) -> ParseResult<ComputedValue> {
    if stream.eat_ident("none") {
        return Ok(ComputedValue::MaxSize(MaxSize::None));
    }
    let value = read_length_percentage(stream, Sign::NonNegative)?;
    Ok(ComputedValue::MaxSize(
        match required(value, stream, "a maximum size")? {
            LengthPercentage::Length(l) => MaxSize::Length(l),
            LengthPercentage::Percentage(p) => MaxSize::Percentage(p),
        },
    ))
}
