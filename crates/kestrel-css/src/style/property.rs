//! The closed set of property names the engine understands.

use serde::Serialize;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// Every property the engine parses, longhands and shorthands alike.
///
/// Parsing a name ignores ASCII case; `to_string` yields the lowercase form.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    EnumString,
    Display,
    EnumIter,
    AsRefStr,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[serde(rename_all = "kebab-case")]
#[allow(missing_docs)]
pub enum PropertyName {
    // Margins and padding
    MarginTop,
    MarginRight,
    MarginBottom,
    MarginLeft,
    PaddingTop,
    PaddingRight,
    PaddingBottom,
    PaddingLeft,

    // Borders
    BorderTopWidth,
    BorderRightWidth,
    BorderBottomWidth,
    BorderLeftWidth,
    BorderTopStyle,
    BorderRightStyle,
    BorderBottomStyle,
    BorderLeftStyle,
    BorderTopColor,
    BorderRightColor,
    BorderBottomColor,
    BorderLeftColor,
    BorderTopRightRadius,
    BorderBottomRightRadius,
    BorderBottomLeftRadius,
    BorderTopLeftRadius,
    BorderImageSource,
    BorderImageSlice,
    BorderImageWidth,

    // Outline
    OutlineWidth,
    OutlineStyle,
    OutlineColor,

    // Backgrounds and shadows
    BackgroundColor,
    BackgroundRepeat,
    BackgroundSize,
    BoxShadow,

    // Visual formatting
    Display,
    Position,
    Float,
    Clear,
    Overflow,
    Top,
    Right,
    Bottom,
    Left,
    Width,
    Height,
    MinWidth,
    MinHeight,
    MaxWidth,
    MaxHeight,

    // Text and fonts
    Color,
    FontFamily,
    FontSize,
    FontStyle,
    FontWeight,
    TextDecoration,
    ListStyleType,
    VerticalAlign,
    Content,

    // Shorthands
    Margin,
    Padding,
    BorderWidth,
    BorderStyle,
    BorderColor,
    BorderRadius,
    Border,
    BorderTop,
    BorderRight,
    BorderBottom,
    BorderLeft,
    Outline,
}

impl PropertyName {
    /// True for names that expand into several longhands.
    #[must_use]
    pub const fn is_shorthand(self) -> bool {
        matches!(
            self,
            Self::Margin
                | Self::Padding
                | Self::BorderWidth
                | Self::BorderStyle
                | Self::BorderColor
                | Self::BorderRadius
                | Self::Border
                | Self::BorderTop
                | Self::BorderRight
                | Self::BorderBottom
                | Self::BorderLeft
                | Self::Outline
        )
    }

    /// [§ 6.2 Inheritance](https://www.w3.org/TR/CSS2/cascade.html#inheritance)
    ///
    /// True for properties whose definition says "Inherited: yes".
    #[must_use]
    pub const fn is_inherited(self) -> bool {
        matches!(
            self,
            Self::Color
                | Self::FontFamily
                | Self::FontSize
                | Self::FontStyle
                | Self::FontWeight
                | Self::ListStyleType
        )
    }

    /// The longhands this name sets. A longhand sets only itself.
    ///
    /// Edge shorthands list their longhands top, right, bottom, left;
    /// `border-radius` lists corners starting top-right and going clockwise.
    #[must_use]
    pub fn longhands(self) -> Vec<Self> {
        match self {
            Self::Margin => vec![
                Self::MarginTop,
                Self::MarginRight,
                Self::MarginBottom,
                Self::MarginLeft,
            ],
            Self::Padding => vec![
                Self::PaddingTop,
                Self::PaddingRight,
                Self::PaddingBottom,
                Self::PaddingLeft,
            ],
            Self::BorderWidth => vec![
                Self::BorderTopWidth,
                Self::BorderRightWidth,
                Self::BorderBottomWidth,
                Self::BorderLeftWidth,
            ],
            Self::BorderStyle => vec![
                Self::BorderTopStyle,
                Self::BorderRightStyle,
                Self::BorderBottomStyle,
                Self::BorderLeftStyle,
            ],
            Self::BorderColor => vec![
                Self::BorderTopColor,
                Self::BorderRightColor,
                Self::BorderBottomColor,
                Self::BorderLeftColor,
            ],
            Self::BorderRadius => vec![
                Self::BorderTopRightRadius,
                Self::BorderBottomRightRadius,
                Self::BorderBottomLeftRadius,
                Self::BorderTopLeftRadius,
            ],
            Self::Border => [
                Self::BorderWidth.longhands(),
                Self::BorderStyle.longhands(),
                Self::BorderColor.longhands(),
            ]
            .concat(),
            Self::BorderTop => vec![
                Self::BorderTopWidth,
                Self::BorderTopStyle,
                Self::BorderTopColor,
            ],
            Self::BorderRight => vec![
                Self::BorderRightWidth,
                Self::BorderRightStyle,
                Self::BorderRightColor,
            ],
            Self::BorderBottom => vec![
                Self::BorderBottomWidth,
                Self::BorderBottomStyle,
                Self::BorderBottomColor,
            ],
            Self::BorderLeft => vec![
                Self::BorderLeftWidth,
                Self::BorderLeftStyle,
                Self::BorderLeftColor,
            ],
            Self::Outline => vec![Self::OutlineWidth, Self::OutlineStyle, Self::OutlineColor],
            longhand => vec![longhand],
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn names_are_kebab_case_and_case_insensitive() {
        assert_eq!(PropertyName::BorderTopLeftRadius.to_string(), "border-top-left-radius");
        assert_eq!(
            PropertyName::from_str("Margin-TOP").ok(),
            Some(PropertyName::MarginTop)
        );
        assert!(PropertyName::from_str("margin-start").is_err());
    }

    #[test]
    fn every_name_round_trips() {
        for name in PropertyName::iter() {
            assert_eq!(PropertyName::from_str(name.as_ref()).ok(), Some(name));
        }
    }

    #[test]
    fn shorthands_expand_to_longhands_only() {
        for name in PropertyName::iter() {
            let longhands = name.longhands();
            assert_eq!(longhands.len() > 1, name.is_shorthand(), "{name}");
            assert!(longhands.iter().all(|l| !l.is_shorthand()));
        }
    }
}
