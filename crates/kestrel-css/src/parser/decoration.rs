//! Readers for colors, backgrounds, shadows and border images.

use crate::error::{ParseError, ParseResult};
use crate::style::{
    BackgroundColor, BackgroundRepeat, BackgroundSize, BackgroundSizeAxis, BorderImageSlice,
    BorderImageSource, BorderImageWidth, BoxShadow, Color, ComputedValue, ImageWidth,
    NumberOrPercentage, RepeatKeyword, RepeatStyle, Shadow,
};
use crate::tokenizer::{Token, TokenStream};
use crate::values::{Axes, Edges, Length};

use super::components::{
    Measure, Sign, expect_close, expect_string, read_color, read_comma_list, read_ident,
    read_length, read_length_percentage, read_measure, read_two_axis, reject, required,
};

/// [§ 14.1 'color'](https://www.w3.org/TR/CSS2/colors.html#colors)
pub(super) fn color(stream: &mut TokenStream<'_>) -> ParseResult<ComputedValue> {
    let value = read_color(stream)?;
    required(value, stream, "a color").map(|c| ComputedValue::Color(Color::Rgba(c)))
}

/// [§ 14.2.1 'background-color'](https://www.w3.org/TR/CSS2/colors.html#propdef-background-color)
pub(super) fn background_color(stream: &mut TokenStream<'_>) -> ParseResult<ComputedValue> {
    let value = read_color(stream)?;
    required(value, stream, "a color")
        .map(|c| ComputedValue::BackgroundColor(BackgroundColor::Rgba(c)))
}

/// [§ 3.4 'background-repeat'](https://www.w3.org/TR/css-backgrounds-3/#background-repeat)
///
/// "`<repeat-style>` = repeat-x | repeat-y | [repeat | space | round | no-repeat]{1,2}"
pub(super) fn background_repeat(stream: &mut TokenStream<'_>) -> ParseResult<ComputedValue> {
    let layers = read_comma_list(stream, repeat_style)?;
    Ok(ComputedValue::BackgroundRepeat(BackgroundRepeat::Repeats(
        layers,
    )))
}

fn repeat_style(stream: &mut TokenStream<'_>) -> ParseResult<RepeatStyle> {
    // "'repeat-x': Computes to 'repeat no-repeat'."
    if stream.eat_ident("repeat-x") {
        return Ok(RepeatStyle {
            horizontal: RepeatKeyword::Repeat,
            vertical: RepeatKeyword::NoRepeat,
        });
    }
    // "'repeat-y': Computes to 'no-repeat repeat'."
    if stream.eat_ident("repeat-y") {
        return Ok(RepeatStyle {
            horizontal: RepeatKeyword::NoRepeat,
            vertical: RepeatKeyword::Repeat,
        });
    }
    let first = read_ident::<RepeatKeyword>(stream);
    let horizontal = required(first, stream, "a repeat style")?;
    // "If only one keyword is given, it applies to both axes."
    let vertical = read_ident::<RepeatKeyword>(stream).unwrap_or(horizontal);
    Ok(RepeatStyle {
        horizontal,
        vertical,
    })
}

/// [§ 3.9 'background-size'](https://www.w3.org/TR/css-backgrounds-3/#background-size)
///
/// The two axes may also be separated by `/`.
pub(super) fn background_size(stream: &mut TokenStream<'_>) -> ParseResult<ComputedValue> {
    let size = if stream.eat_ident("cover") {
        BackgroundSize::Cover
    } else if stream.eat_ident("contain") {
        BackgroundSize::Contain
    } else {
        let first = background_size_axis(stream)?;
        let horizontal = required(first, stream, "a background size")?;
        let vertical = if stream.eat_delim('/') {
            let second = background_size_axis(stream)?;
            required(second, stream, "a background size")?
        } else {
            background_size_axis(stream)?.unwrap_or(BackgroundSizeAxis::Auto)
        };
        BackgroundSize::Size(Axes {
            horizontal,
            vertical,
        })
    };
    Ok(ComputedValue::BackgroundSize(size))
}

fn background_size_axis(stream: &mut TokenStream<'_>) -> ParseResult<Option<BackgroundSizeAxis>> {
    if stream.eat_ident("auto") {
        return Ok(Some(BackgroundSizeAxis::Auto));
    }
    Ok(read_length_percentage(stream, Sign::NonNegative)?.map(BackgroundSizeAxis::Size))
}

/// [§ 7.1 'box-shadow'](https://www.w3.org/TR/css-backgrounds-3/#box-shadow)
pub(super) fn box_shadow(stream: &mut TokenStream<'_>) -> ParseResult<ComputedValue> {
    if stream.eat_ident("none") {
        return Ok(ComputedValue::BoxShadow(BoxShadow::None));
    }
    let shadows = read_comma_list(stream, shadow)?;
    Ok(ComputedValue::BoxShadow(BoxShadow::Shadows(shadows)))
}

/// `inset? <length>{2,4} <color>?`
fn shadow(stream: &mut TokenStream<'_>) -> ParseResult<Shadow> {
    let inset = stream.eat_ident("inset");
    let mut lengths = Vec::with_capacity(4);
    while let Some(length) = read_length(stream, Sign::Any)? {
        if lengths.len() == 4 {
            return Err(ParseError::TooManyValues { max: 4 });
        }
        lengths.push(length);
    }
    let [offset_x, offset_y, rest @ ..] = lengths.as_slice() else {
        return Err(reject(stream, "a shadow offset"));
    };
    let blur = rest.first().copied().unwrap_or_else(Length::zero);
    if blur.is_negative() {
        return Err(ParseError::InvalidLength(blur.to_string()));
    }
    let spread = rest.get(1).copied().unwrap_or_else(Length::zero);
    let color = read_color(stream)?;
    Ok(Shadow {
        inset,
        offset_x: *offset_x,
        offset_y: *offset_y,
        blur,
        spread,
        color,
    })
}

/// [§ 6.2 'border-image-source'](https://www.w3.org/TR/css-backgrounds-3/#border-image-source)
pub(super) fn border_image_source(stream: &mut TokenStream<'_>) -> ParseResult<ComputedValue> {
    if stream.eat_ident("none") {
        return Ok(ComputedValue::BorderImageSource(BorderImageSource::None));
    }
    let url = match stream.peek() {
        Some(Token::Url(url)) => {
            stream.advance();
            url.clone()
        }
        Some(Token::Function(name)) if name.eq_ignore_ascii_case("url") => {
            stream.advance();
            let url = expect_string(stream, "a quoted URL")?;
            expect_close(stream)?;
            url
        }
        other => return Err(ParseError::unexpected("none or an image URL", other)),
    };
    Ok(ComputedValue::BorderImageSource(BorderImageSource::Url(
        url,
    )))
}

/// [§ 6.3 'border-image-slice'](https://www.w3.org/TR/css-backgrounds-3/#border-image-slice)
///
/// `fill` may come before or after the offsets.
pub(super) fn border_image_slice(stream: &mut TokenStream<'_>) -> ParseResult<ComputedValue> {
    let leading_fill = stream.eat_ident("fill");
    let (horizontal, vertical) = read_two_axis(stream, slice_component, "a slice offset")?;
    let fill = leading_fill || stream.eat_ident("fill");
    Ok(ComputedValue::BorderImageSlice(BorderImageSlice::Slice {
        edges: edges_of_axes(horizontal, vertical),
        fill,
    }))
}

fn slice_component(stream: &mut TokenStream<'_>) -> ParseResult<Option<NumberOrPercentage>> {
    match read_measure(stream, Sign::NonNegative)? {
        None => Ok(None),
        Some(Measure::Number(n)) => Ok(Some(NumberOrPercentage::Number(n))),
        Some(Measure::Percentage(p)) => Ok(Some(NumberOrPercentage::Percentage(p))),
        Some(Measure::Length(l)) => Err(ParseError::InvalidLength(l.to_string())),
    }
}

/// [§ 6.4 'border-image-width'](https://www.w3.org/TR/css-backgrounds-3/#border-image-width)
pub(super) fn border_image_width(stream: &mut TokenStream<'_>) -> ParseResult<ComputedValue> {
    let (horizontal, vertical) = read_two_axis(stream, image_width_component, "an image width")?;
    Ok(ComputedValue::BorderImageWidth(BorderImageWidth::Widths(
        edges_of_axes(horizontal, vertical),
    )))
}

fn image_width_component(stream: &mut TokenStream<'_>) -> ParseResult<Option<ImageWidth>> {
    if stream.eat_ident("auto") {
        return Ok(Some(ImageWidth::Auto));
    }
    Ok(read_measure(stream, Sign::NonNegative)?.map(|measure| match measure {
        Measure::Length(l) => ImageWidth::Length(l),
        Measure::Percentage(p) => ImageWidth::Percentage(p),
        Measure::Number(n) => ImageWidth::Number(n),
    }))
}

fn edges_of_axes<T: Copy>(horizontal: [T; 4], vertical: [T; 4]) -> Edges<Axes<T>> {
    let axes = |i: usize| Axes {
        horizontal: horizontal[i],
        vertical: vertical[i],
    };
    Edges {
        top: axes(0),
        right: axes(1),
        bottom: axes(2),
        left: axes(3),
    }
}
