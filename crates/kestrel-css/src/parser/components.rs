//! Component readers shared by the property parsers.
//!
//! A reader returning `Ok(None)` saw a token it does not handle and left the
//! stream where it was, so callers can try another reader or stop a list.
//! `Err` means the token was meant for this reader but is malformed.

use std::str::FromStr;

use crate::error::{ParseError, ParseResult};
use crate::style::Inheritable;
use crate::tokenizer::{Token, TokenStream};
use crate::values::{
    ColorValue, Length, LengthPercentage, expand_four, parse_color, parse_length,
};

/// Whether a numeric reader accepts values below zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Sign {
    Any,
    NonNegative,
}

/// A numeric token after sign folding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Measure {
    Length(Length),
    Percentage(f32),
    Number(f32),
}

impl Measure {
    fn is_negative(self) -> bool {
        match self {
            Self::Length(l) => l.is_negative(),
            Self::Percentage(v) | Self::Number(v) => v < 0.0,
        }
    }

    /// False once the tokenizer's number overflowed to an infinity.
    const fn is_finite(self) -> bool {
        match self {
            Self::Length(l) => l.value.is_finite(),
            Self::Percentage(v) | Self::Number(v) => v.is_finite(),
        }
    }
}

/// Consume the next numeric token.
///
/// A `-` delimiter directly followed by a number is read as one negative
/// number, for token producers that do not fuse the sign.
pub(crate) fn next_numeric(stream: &mut TokenStream<'_>) -> Option<Token> {
    match stream.peek()? {
        Token::Delim('-') => {
            let negated = stream.peek_adjacent()?.negated()?;
            stream.advance();
            let _ = stream.next_raw();
            Some(negated)
        }
        token if token.is_numeric() => {
            stream.advance();
            Some(token.clone())
        }
        _ => None,
    }
}

/// Read a length, percentage or plain number.
pub(crate) fn read_measure(
    stream: &mut TokenStream<'_>,
    sign: Sign,
) -> ParseResult<Option<Measure>> {
    let mut lookahead = stream.clone();
    let Some(token) = next_numeric(&mut lookahead) else {
        return Ok(None);
    };
    let measure = match &token {
        Token::Dimension { .. } => Measure::Length(
            parse_length(&token).ok_or_else(|| ParseError::InvalidLength(token.to_string()))?,
        ),
        Token::Percentage(p) => Measure::Percentage(*p),
        Token::Number(n) => Measure::Number(*n),
        _ => return Ok(None),
    };
    if !measure.is_finite() {
        return Err(ParseError::InvalidLength(token.to_string()));
    }
    if sign == Sign::NonNegative && measure.is_negative() {
        return Err(ParseError::InvalidLength(token.to_string()));
    }
    *stream = lookahead;
    Ok(Some(measure))
}

/// Read a `<length>`. Only `0` may omit the unit.
pub(crate) fn read_length(stream: &mut TokenStream<'_>, sign: Sign) -> ParseResult<Option<Length>> {
    match read_measure(stream, sign)? {
        None => Ok(None),
        Some(Measure::Length(l)) => Ok(Some(l)),
        Some(Measure::Number(n)) => unitless_zero(n).map(Some),
        Some(Measure::Percentage(p)) => Err(ParseError::InvalidLength(format!("{p}%"))),
    }
}

/// Read a `<length>` or `<percentage>`.
pub(crate) fn read_length_percentage(
    stream: &mut TokenStream<'_>,
    sign: Sign,
) -> ParseResult<Option<LengthPercentage>> {
    match read_measure(stream, sign)? {
        None => Ok(None),
        Some(Measure::Length(l)) => Ok(Some(LengthPercentage::Length(l))),
        Some(Measure::Number(n)) => unitless_zero(n).map(|l| Some(LengthPercentage::Length(l))),
        Some(Measure::Percentage(p)) => Ok(Some(LengthPercentage::Percentage(p))),
    }
}

#[allow(clippy::float_cmp)]
fn unitless_zero(number: f32) -> ParseResult<Length> {
    if number == 0.0 {
        Ok(Length::zero())
    } else {
        Err(ParseError::InvalidLength(number.to_string()))
    }
}

/// Read an identifier naming a variant of `T`.
pub(crate) fn read_ident<T: FromStr>(stream: &mut TokenStream<'_>) -> Option<T> {
    let Some(Token::Ident(ident)) = stream.peek() else {
        return None;
    };
    let value = T::from_str(ident).ok()?;
    stream.advance();
    Some(value)
}

/// Read a property keyword. `inherit` is not a candidate: it is only valid
/// as the whole value, which the registry handles before any reader runs.
pub(crate) fn read_keyword<T: FromStr + Inheritable>(stream: &mut TokenStream<'_>) -> Option<T> {
    let mut lookahead = stream.clone();
    let value = read_ident::<T>(&mut lookahead).filter(|v| !v.is_inherit())?;
    *stream = lookahead;
    Some(value)
}

/// Read a `<color>`.
pub(crate) fn read_color(stream: &mut TokenStream<'_>) -> ParseResult<Option<ColorValue>> {
    let mut lookahead = stream.clone();
    if let Some(color) = parse_color(&mut lookahead) {
        *stream = lookahead;
        return Ok(Some(color));
    }
    match stream.peek() {
        Some(token @ Token::Hash(_)) => Err(ParseError::InvalidColor(token.to_string())),
        Some(token @ Token::Function(name))
            if name.eq_ignore_ascii_case("rgb") || name.eq_ignore_ascii_case("rgba") =>
        {
            Err(ParseError::InvalidColor(token.to_string()))
        }
        _ => Ok(None),
    }
}

/// The error for a value that matched nothing at the current position.
pub(crate) fn reject(stream: &mut TokenStream<'_>, expected: &'static str) -> ParseError {
    match stream.peek() {
        Some(Token::Ident(ident)) => ParseError::InvalidKeyword(ident.clone()),
        other => ParseError::unexpected(expected, other),
    }
}

/// Turn a reader's `None` into an error.
pub(crate) fn required<T>(
    value: Option<T>,
    stream: &mut TokenStream<'_>,
    expected: &'static str,
) -> ParseResult<T> {
    value.ok_or_else(|| reject(stream, expected))
}

/// Read `item (, item)*`.
pub(crate) fn read_comma_list<T>(
    stream: &mut TokenStream<'_>,
    mut read_item: impl FnMut(&mut TokenStream<'_>) -> ParseResult<T>,
) -> ParseResult<Vec<T>> {
    let mut items = vec![read_item(stream)?];
    while stream.eat_delim(',') {
        items.push(read_item(stream)?);
    }
    Ok(items)
}

/// Read one to four components and expand them clockwise.
pub(crate) fn read_up_to_four<T: Clone>(
    stream: &mut TokenStream<'_>,
    read: &mut impl FnMut(&mut TokenStream<'_>) -> ParseResult<Option<T>>,
    expected: &'static str,
) -> ParseResult<[T; 4]> {
    let mut values = Vec::with_capacity(4);
    while let Some(value) = read(stream)? {
        if values.len() == 4 {
            return Err(ParseError::TooManyValues { max: 4 });
        }
        values.push(value);
    }
    match expand_four(&values) {
        Some(expanded) => Ok(expanded),
        None => Err(reject(stream, expected)),
    }
}

/// Read `a{1,4} [ / b{1,4} ]`. Without the slash the second group is a
/// copy of the first.
pub(crate) fn read_two_axis<T: Clone>(
    stream: &mut TokenStream<'_>,
    mut read: impl FnMut(&mut TokenStream<'_>) -> ParseResult<Option<T>>,
    expected: &'static str,
) -> ParseResult<([T; 4], [T; 4])> {
    let first = read_up_to_four(stream, &mut read, expected)?;
    let second = if stream.eat_delim('/') {
        read_up_to_four(stream, &mut read, expected)?
    } else {
        first.clone()
    };
    Ok((first, second))
}

/// Consume the `)` closing a function.
pub(crate) fn expect_close(stream: &mut TokenStream<'_>) -> ParseResult<()> {
    if stream.eat_delim(')') {
        Ok(())
    } else {
        Err(ParseError::unexpected("')'", stream.peek()))
    }
}

/// Consume an identifier and return its text.
pub(crate) fn expect_ident(
    stream: &mut TokenStream<'_>,
    expected: &'static str,
) -> ParseResult<String> {
    match stream.peek() {
        Some(Token::Ident(ident)) => {
            stream.advance();
            Ok(ident.clone())
        }
        other => Err(ParseError::unexpected(expected, other)),
    }
}

/// Consume a string and return its contents.
pub(crate) fn expect_string(
    stream: &mut TokenStream<'_>,
    expected: &'static str,
) -> ParseResult<String> {
    match stream.peek() {
        Some(Token::String(value)) => {
            stream.advance();
            Ok(value.clone())
        }
        other => Err(ParseError::unexpected(expected, other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::CSSTokenizer;
    use crate::values::LengthUnit;

    fn any_length(stream: &mut TokenStream<'_>) -> ParseResult<Option<Length>> {
        read_length(stream, Sign::Any)
    }

    #[test]
    fn detached_minus_negates_the_following_number() {
        let tokens = vec![
            Token::Delim('-'),
            Token::dimension(4.0, "px"),
            Token::Null,
        ];
        let mut stream = TokenStream::new(&tokens);
        assert_eq!(
            read_length(&mut stream, Sign::Any),
            Ok(Some(Length::px(-4.0)))
        );
        assert!(stream.is_exhausted());
    }

    #[test]
    fn detached_minus_needs_an_adjacent_number() {
        let tokens = vec![
            Token::Delim('-'),
            Token::Whitespace,
            Token::dimension(4.0, "px"),
            Token::Null,
        ];
        let mut stream = TokenStream::new(&tokens);
        assert_eq!(read_length(&mut stream, Sign::Any), Ok(None));
        assert_eq!(stream.peek(), Some(&Token::Delim('-')));
    }

    #[test]
    fn non_negative_readers_reject_negative_values() {
        let tokens = CSSTokenizer::tokenize("-2em");
        let mut stream = TokenStream::new(&tokens);
        assert!(matches!(
            read_length(&mut stream, Sign::NonNegative),
            Err(ParseError::InvalidLength(_))
        ));
    }

    #[test]
    fn unitless_numbers_other_than_zero_are_not_lengths() {
        let tokens = CSSTokenizer::tokenize("0 12");
        let mut stream = TokenStream::new(&tokens);
        assert_eq!(read_length(&mut stream, Sign::Any), Ok(Some(Length::zero())));
        assert!(read_length(&mut stream, Sign::Any).is_err());
    }

    #[test]
    fn up_to_four_counts_values() {
        let tokens = CSSTokenizer::tokenize("1pt 2pt 3pt 4pt 5pt");
        let mut stream = TokenStream::new(&tokens);
        let mut read = any_length;
        assert_eq!(
            read_up_to_four(&mut stream, &mut read, "a length"),
            Err(ParseError::TooManyValues { max: 4 })
        );

        let tokens = CSSTokenizer::tokenize("1pt 2pt");
        let mut stream = TokenStream::new(&tokens);
        let pt = |value| Length {
            value,
            unit: LengthUnit::Pt,
        };
        assert_eq!(
            read_up_to_four(&mut stream, &mut read, "a length"),
            Ok([pt(1.0), pt(2.0), pt(1.0), pt(2.0)])
        );
    }
}
