//! Foreground color, backgrounds and box shadows.
//!
//! - [CSS 2.1 § 14 Colors and Backgrounds](https://www.w3.org/TR/CSS2/colors.html)
//! - [CSS Backgrounds and Borders Level 3](https://www.w3.org/TR/css-backgrounds-3/)

use core::fmt;

use serde::Serialize;
use strum_macros::{Display, EnumString};

use crate::values::{Axes, ColorValue, Length, LengthPercentage};

use super::Inheritable;

/// [§ 14.1 Foreground color](https://www.w3.org/TR/CSS2/colors.html#colors)
///
/// "Initial: depends on user agent". Black here. Inherited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Color {
    /// `inherit`
    Inherit,
    /// A concrete color.
    Rgba(ColorValue),
}

impl Inheritable for Color {
    fn initial() -> Self {
        Self::Rgba(ColorValue::BLACK)
    }

    fn is_inherit(&self) -> bool {
        matches!(self, Self::Inherit)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inherit => f.write_str("inherit"),
            Self::Rgba(c) => fmt::Display::fmt(c, f),
        }
    }
}

/// [§ 14.2.1 Background properties](https://www.w3.org/TR/CSS2/colors.html#propdef-background-color)
///
/// "Initial: transparent"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum BackgroundColor {
    /// `inherit`
    Inherit,
    /// A concrete color; `transparent` is `#00000000`.
    Rgba(ColorValue),
}

impl Inheritable for BackgroundColor {
    fn initial() -> Self {
        Self::Rgba(ColorValue::TRANSPARENT)
    }

    fn is_inherit(&self) -> bool {
        matches!(self, Self::Inherit)
    }
}

impl fmt::Display for BackgroundColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inherit => f.write_str("inherit"),
            Self::Rgba(c) => fmt::Display::fmt(c, f),
        }
    }
}

/// [§ 3.4 Tiling Images](https://www.w3.org/TR/css-backgrounds-3/#background-repeat)
///
/// `<repeat-style>` keywords for a single axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, EnumString, Display)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[serde(rename_all = "kebab-case")]
pub enum RepeatKeyword {
    /// "The image is repeated in this direction as often as needed to cover
    /// the background painting area."
    Repeat,
    /// "The image is repeated as often as will fit within the background
    /// positioning area without being clipped and then the images are spaced
    /// out to fill the area."
    Space,
    /// "The image is repeated as often as will fit within the background
    /// positioning area. If it doesn't fit a whole number of times, it is
    /// rescaled so that it does."
    Round,
    /// "The image is placed once and not repeated in this direction."
    NoRepeat,
}

/// One `<repeat-style>`: a keyword per axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RepeatStyle {
    /// Repetition along the x axis.
    pub horizontal: RepeatKeyword,
    /// Repetition along the y axis.
    pub vertical: RepeatKeyword,
}

impl fmt::Display for RepeatStyle {
    /// "'repeat-x' computes to 'repeat no-repeat'", "'repeat-y' computes to
    /// 'no-repeat repeat'"; serialized back in the short form.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.horizontal, self.vertical) {
            (RepeatKeyword::Repeat, RepeatKeyword::NoRepeat) => f.write_str("repeat-x"),
            (RepeatKeyword::NoRepeat, RepeatKeyword::Repeat) => f.write_str("repeat-y"),
            (h, v) if h == v => write!(f, "{h}"),
            (h, v) => write!(f, "{h} {v}"),
        }
    }
}

/// [§ 3.4 'background-repeat'](https://www.w3.org/TR/css-backgrounds-3/#background-repeat)
///
/// "Value: `<repeat-style>#`" "Initial: repeat"
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum BackgroundRepeat {
    /// `inherit`
    Inherit,
    /// One entry per comma-separated layer.
    Repeats(Vec<RepeatStyle>),
}

impl Inheritable for BackgroundRepeat {
    fn initial() -> Self {
        Self::Repeats(vec![RepeatStyle {
            horizontal: RepeatKeyword::Repeat,
            vertical: RepeatKeyword::Repeat,
        }])
    }

    fn is_inherit(&self) -> bool {
        matches!(self, Self::Inherit)
    }
}

impl fmt::Display for BackgroundRepeat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inherit => f.write_str("inherit"),
            Self::Repeats(layers) => write_comma_list(f, layers),
        }
    }
}

/// One axis of a `<bg-size>`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum BackgroundSizeAxis {
    /// "The 'auto' keyword [...] is resolved by using the image's intrinsic ratio."
    Auto,
    /// A non-negative length or percentage of the positioning area.
    Size(LengthPercentage),
}

impl fmt::Display for BackgroundSizeAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auto => f.write_str("auto"),
            Self::Size(v) => fmt::Display::fmt(v, f),
        }
    }
}

/// [§ 3.9 Sizing Images](https://www.w3.org/TR/css-backgrounds-3/#background-size)
///
/// "Value: `[ <length-percentage> | auto ]{1,2} | cover | contain`"
/// "Initial: auto"
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum BackgroundSize {
    /// `inherit`
    Inherit,
    /// "Scale the image, while preserving its intrinsic aspect ratio (if any),
    /// to the smallest size such that both its width and its height can
    /// completely cover the background positioning area."
    Cover,
    /// "Scale the image, while preserving its intrinsic aspect ratio (if any),
    /// to the largest size such that both its width and its height can fit
    /// inside the background positioning area."
    Contain,
    /// Width and height. "If only one value is given the second is assumed
    /// to be 'auto'."
    Size(Axes<BackgroundSizeAxis>),
}

impl Inheritable for BackgroundSize {
    fn initial() -> Self {
        Self::Size(Axes::both(BackgroundSizeAxis::Auto))
    }

    fn is_inherit(&self) -> bool {
        matches!(self, Self::Inherit)
    }
}

impl fmt::Display for BackgroundSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inherit => f.write_str("inherit"),
            Self::Cover => f.write_str("cover"),
            Self::Contain => f.write_str("contain"),
            Self::Size(size) => write!(f, "{} {}", size.horizontal, size.vertical),
        }
    }
}

/// One shadow of a `box-shadow` list.
///
/// [§ 7.1 Drop Shadows](https://www.w3.org/TR/css-backgrounds-3/#box-shadow)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Shadow {
    /// "If present, the 'inset' keyword changes the drop shadow from an outer
    /// box-shadow (one that shadows the box onto the canvas, as if it were
    /// lifted above the canvas) to an inner box-shadow."
    pub inset: bool,
    /// "The first length is the horizontal offset of the shadow."
    pub offset_x: Length,
    /// "The second length is the vertical offset."
    pub offset_y: Length,
    /// "The third length is a blur radius. Negative values are not allowed."
    pub blur: Length,
    /// "The fourth length is a spread distance."
    pub spread: Length,
    /// "The color is the color of the shadow. If the color is absent, the
    /// used color is taken from the 'color' property."
    pub color: Option<ColorValue>,
}

impl fmt::Display for Shadow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.inset {
            f.write_str("inset ")?;
        }
        write!(
            f,
            "{} {} {} {}",
            self.offset_x, self.offset_y, self.blur, self.spread
        )?;
        if let Some(color) = self.color {
            write!(f, " {color}")?;
        }
        Ok(())
    }
}

/// [§ 7.1 'box-shadow'](https://www.w3.org/TR/css-backgrounds-3/#box-shadow)
///
/// "Value: none | `<shadow>#`" "Initial: none"
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum BoxShadow {
    /// `inherit`
    Inherit,
    /// No shadow.
    None,
    /// "The shadow effects are applied front-to-back: the first shadow is on top."
    Shadows(Vec<Shadow>),
}

impl Inheritable for BoxShadow {
    fn initial() -> Self {
        Self::None
    }

    fn is_inherit(&self) -> bool {
        matches!(self, Self::Inherit)
    }
}

impl fmt::Display for BoxShadow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inherit => f.write_str("inherit"),
            Self::None => f.write_str("none"),
            Self::Shadows(shadows) => write_comma_list(f, shadows),
        }
    }
}

pub(super) fn write_comma_list<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    items: &[T],
) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}
