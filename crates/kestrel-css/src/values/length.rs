//! CSS Length values and parsing
//!
//! [CSS 2.1 § 4.3.2 Lengths](https://www.w3.org/TR/CSS2/syndata.html#length-units)

use core::fmt;
use std::str::FromStr;

use serde::Serialize;
use strum_macros::{AsRefStr, Display, EnumString};

use crate::tokenizer::Token;

/// Pixels per inch for the absolute units.
///
/// [§ 4.3.2](https://www.w3.org/TR/CSS2/syndata.html#length-units)
/// "1in = 96px"
const PX_PER_IN: f32 = 96.0;

/// [§ 4.3.2 Lengths](https://www.w3.org/TR/CSS2/syndata.html#length-units)
///
/// The units a `<length>` may carry.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, EnumString, Display, AsRefStr,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum LengthUnit {
    /// "pixels; 1px is equal to 0.75pt"
    Px,
    /// "the 'font-size' of the relevant font"
    Em,
    /// "the 'x-height' of the relevant font"
    Ex,
    /// "inches; 1in is equal to 2.54cm"
    In,
    /// "centimeters"
    Cm,
    /// "millimeters"
    Mm,
    /// "points; the points used by CSS are equal to 1/72nd of 1in"
    Pt,
    /// "picas; 1pc is equal to 12pt"
    Pc,
}

/// A `<length>`: a number with a unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Length {
    /// The number in front of the unit. May be negative.
    pub value: f32,
    /// The unit.
    pub unit: LengthUnit,
}

impl Length {
    /// A length in pixels.
    #[must_use]
    pub const fn px(value: f32) -> Self {
        Self {
            value,
            unit: LengthUnit::Px,
        }
    }

    /// `0px`, the initial value of most box edges.
    #[must_use]
    pub const fn zero() -> Self {
        Self::px(0.0)
    }

    /// True for a zero length in any unit.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_zero(&self) -> bool {
        self.value == 0.0
    }

    /// True for lengths below zero.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.value < 0.0
    }

    /// Resolve to pixels. `em` resolves against `font_size` and `ex` against `x_height`.
    #[must_use]
    pub fn to_px(&self, font_size: f32, x_height: f32) -> f32 {
        let factor = match self.unit {
            LengthUnit::Px => 1.0,
            LengthUnit::Em => font_size,
            LengthUnit::Ex => x_height,
            LengthUnit::In => PX_PER_IN,
            LengthUnit::Cm => PX_PER_IN / 2.54,
            LengthUnit::Mm => PX_PER_IN / 25.4,
            LengthUnit::Pt => PX_PER_IN / 72.0,
            LengthUnit::Pc => PX_PER_IN / 6.0,
        };
        self.value * factor
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.unit)
    }
}

/// `<length> | <percentage>`, used wherever a property keeps both forms
/// side by side (corner radii, background sizes).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum LengthPercentage {
    /// An absolute or font-relative length.
    Length(Length),
    /// A percentage of a reference size chosen by the property.
    Percentage(f32),
}

impl LengthPercentage {
    /// `0px`.
    #[must_use]
    pub const fn zero() -> Self {
        Self::Length(Length::zero())
    }

    /// True for values below zero.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        match self {
            Self::Length(l) => l.is_negative(),
            Self::Percentage(p) => *p < 0.0,
        }
    }

    /// Resolve to pixels; percentages resolve against `basis`.
    #[must_use]
    pub fn to_px(&self, basis: f32, font_size: f32, x_height: f32) -> f32 {
        match self {
            Self::Length(l) => l.to_px(font_size, x_height),
            Self::Percentage(p) => p * basis / 100.0,
        }
    }
}

impl fmt::Display for LengthPercentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Length(l) => fmt::Display::fmt(l, f),
            Self::Percentage(p) => write!(f, "{p}%"),
        }
    }
}

/// [§ 4.3.2](https://www.w3.org/TR/CSS2/syndata.html#length-units)
///
/// Parse a single token as a `<length>`.
///
/// "After a zero length, the unit identifier is optional."
#[must_use]
#[allow(clippy::float_cmp)]
pub fn parse_length(token: &Token) -> Option<Length> {
    match token {
        Token::Dimension { value, unit } => LengthUnit::from_str(unit)
            .ok()
            .map(|unit| Length { value: *value, unit }),
        Token::Number(value) if *value == 0.0 => Some(Length::zero()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unitless_zero_is_a_length() {
        assert_eq!(parse_length(&Token::Number(0.0)), Some(Length::zero()));
        assert_eq!(parse_length(&Token::Number(3.0)), None);
    }

    #[test]
    fn units_are_case_insensitive() {
        let len = parse_length(&Token::dimension(2.0, "EM")).unwrap();
        assert_eq!(len.unit, LengthUnit::Em);
        assert_eq!(parse_length(&Token::dimension(2.0, "furlong")), None);
    }

    #[test]
    fn absolute_units_resolve_at_96_dpi() {
        let px = |value: f32, unit, font_size: f32| {
            Length { value, unit }.to_px(font_size, font_size / 2.0)
        };
        assert!((px(1.0, LengthUnit::In, 16.0) - 96.0).abs() < 1e-4);
        assert!((px(12.0, LengthUnit::Pt, 16.0) - 16.0).abs() < 1e-4);
        assert!((px(2.0, LengthUnit::Em, 10.0) - 20.0).abs() < 1e-4);
    }
}
