//! Box edge, border and sizing values.
//!
//! - [CSS 2.1 § 8 Box model](https://www.w3.org/TR/CSS2/box.html)
//! - [CSS 2.1 § 10 Visual formatting model details](https://www.w3.org/TR/CSS2/visudet.html)
//! - [CSS Backgrounds and Borders Level 3 § 5 Rounded Corners](https://www.w3.org/TR/css-backgrounds-3/#corners)

use core::fmt;

use serde::Serialize;
use strum_macros::{Display, EnumString};

use crate::values::{Axes, ColorValue, Length, LengthPercentage};

use super::Inheritable;

/// [§ 8.3 Margin properties](https://www.w3.org/TR/CSS2/box.html#margin-properties)
///
/// "Value: `<margin-width>` | inherit"
/// "Initial: 0"
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Margin {
    /// `inherit`
    Inherit,
    /// "See the section on calculating widths and margins for behavior."
    Auto,
    /// "Specifies a fixed width." Negative values are allowed.
    Length(Length),
    /// "The percentage is calculated with respect to the width of the
    /// generated box's containing block."
    Percentage(f32),
}

impl Margin {
    /// The used margin in pixels. `auto` resolves to 0, which is its used
    /// value for the vertical margins of block boxes in normal flow.
    #[must_use]
    pub fn to_px(&self, containing_width: f32, font_size: f32, x_height: f32) -> f32 {
        match self {
            Self::Length(l) => l.to_px(font_size, x_height),
            Self::Percentage(p) => p * containing_width / 100.0,
            Self::Inherit | Self::Auto => 0.0,
        }
    }
}

impl Inheritable for Margin {
    fn initial() -> Self {
        Self::Length(Length::zero())
    }

    fn is_inherit(&self) -> bool {
        matches!(self, Self::Inherit)
    }
}

impl fmt::Display for Margin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inherit => f.write_str("inherit"),
            Self::Auto => f.write_str("auto"),
            Self::Length(l) => fmt::Display::fmt(l, f),
            Self::Percentage(p) => write!(f, "{p}%"),
        }
    }
}

/// [§ 8.4 Padding properties](https://www.w3.org/TR/CSS2/box.html#padding-properties)
///
/// "Unlike margin properties, values for padding values cannot be negative."
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Padding {
    /// `inherit`
    Inherit,
    /// A non-negative length.
    Length(Length),
    /// A non-negative percentage of the containing block's width.
    Percentage(f32),
}

impl Padding {
    /// The used padding in pixels.
    #[must_use]
    pub fn to_px(&self, containing_width: f32, font_size: f32, x_height: f32) -> f32 {
        match self {
            Self::Length(l) => l.to_px(font_size, x_height),
            Self::Percentage(p) => p * containing_width / 100.0,
            Self::Inherit => 0.0,
        }
    }
}

impl Inheritable for Padding {
    fn initial() -> Self {
        Self::Length(Length::zero())
    }

    fn is_inherit(&self) -> bool {
        matches!(self, Self::Inherit)
    }
}

impl fmt::Display for Padding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inherit => f.write_str("inherit"),
            Self::Length(l) => fmt::Display::fmt(l, f),
            Self::Percentage(p) => write!(f, "{p}%"),
        }
    }
}

/// [§ 8.5.1 Border width](https://www.w3.org/TR/CSS2/box.html#border-width-properties)
///
/// "Value: `<border-width>` | inherit"
/// "Initial: medium"
///
/// Also the value type of `outline-width`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum BorderWidth {
    /// `inherit`
    Inherit,
    /// "A thin border."
    Thin,
    /// "A medium border."
    Medium,
    /// "A thick border."
    Thick,
    /// "The border's thickness has an explicit value. Explicit border widths
    /// cannot be negative."
    Length(Length),
}

impl BorderWidth {
    /// "The interpretation of the first three values depends on the user
    /// agent. The following relationships must hold, however:
    /// 'thin' <='medium' <= 'thick'."
    #[must_use]
    pub fn to_px(&self, font_size: f32, x_height: f32) -> f32 {
        match self {
            Self::Thin => 1.0,
            Self::Medium | Self::Inherit => 3.0,
            Self::Thick => 5.0,
            Self::Length(l) => l.to_px(font_size, x_height),
        }
    }
}

impl Inheritable for BorderWidth {
    fn initial() -> Self {
        Self::Medium
    }

    fn is_inherit(&self) -> bool {
        matches!(self, Self::Inherit)
    }
}

impl fmt::Display for BorderWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inherit => f.write_str("inherit"),
            Self::Thin => f.write_str("thin"),
            Self::Medium => f.write_str("medium"),
            Self::Thick => f.write_str("thick"),
            Self::Length(l) => fmt::Display::fmt(l, f),
        }
    }
}

/// [§ 8.5.3 Border style](https://www.w3.org/TR/CSS2/box.html#border-style-properties)
///
/// "Initial: none". Also the value type of `outline-style`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, EnumString, Display)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[serde(rename_all = "kebab-case")]
pub enum BorderStyle {
    /// `inherit`
    Inherit,
    /// "No border; the computed border width is zero."
    None,
    /// "Same as 'none', except in terms of border conflict resolution for
    /// table elements."
    Hidden,
    /// "The border is a series of dots."
    Dotted,
    /// "The border is a series of short line segments."
    Dashed,
    /// "The border is a single line segment."
    Solid,
    /// "The border is two solid lines."
    Double,
    /// "The border looks as though it were carved into the canvas."
    Groove,
    /// "The opposite of 'groove': the border looks as though it were coming
    /// out of the canvas."
    Ridge,
    /// "The border makes the box look as though it were embedded in the canvas."
    Inset,
    /// "The opposite of 'inset'."
    Outset,
}

impl BorderStyle {
    /// "the computed border width is zero" for `none` and `hidden`.
    #[must_use]
    pub const fn suppresses_width(self) -> bool {
        matches!(self, Self::None | Self::Hidden)
    }
}

impl Inheritable for BorderStyle {
    fn initial() -> Self {
        Self::None
    }

    fn is_inherit(&self) -> bool {
        matches!(self, Self::Inherit)
    }
}

/// [§ 8.5.2 Border color](https://www.w3.org/TR/CSS2/box.html#border-color-properties)
///
/// "If an element's border color is not specified with a border property,
/// user agents must use the value of the element's 'color' property as the
/// computed value for the border color."
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum BorderColor {
    /// `inherit`
    Inherit,
    /// The element's `color`.
    CurrentColor,
    /// An explicit color.
    Rgba(ColorValue),
}

impl Inheritable for BorderColor {
    fn initial() -> Self {
        Self::CurrentColor
    }

    fn is_inherit(&self) -> bool {
        matches!(self, Self::Inherit)
    }
}

impl fmt::Display for BorderColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inherit => f.write_str("inherit"),
            Self::CurrentColor => f.write_str("currentcolor"),
            Self::Rgba(c) => fmt::Display::fmt(c, f),
        }
    }
}

/// [§ 18.4 Dynamic outlines](https://www.w3.org/TR/CSS2/ui.html#dynamic-outlines)
///
/// "Value: `<color>` | invert | inherit"
/// "Initial: invert"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutlineColor {
    /// `inherit`
    Inherit,
    /// "perform a color inversion on the pixels on the screen"
    Invert,
    /// An explicit color.
    Rgba(ColorValue),
}

impl Inheritable for OutlineColor {
    fn initial() -> Self {
        Self::Invert
    }

    fn is_inherit(&self) -> bool {
        matches!(self, Self::Inherit)
    }
}

impl fmt::Display for OutlineColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inherit => f.write_str("inherit"),
            Self::Invert => f.write_str("invert"),
            Self::Rgba(c) => fmt::Display::fmt(c, f),
        }
    }
}

/// [§ 5.1 Curve Radii](https://www.w3.org/TR/css-backgrounds-3/#border-radius)
///
/// "The two length or percentage values of the 'border-*-radius' properties
/// define the radii of a quarter ellipse that defines the shape of the corner
/// of the outer border edge."
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum BorderRadius {
    /// `inherit`
    Inherit,
    /// "The first value is the horizontal radius, the second the vertical
    /// radius. If the second value is omitted it is copied from the first."
    Radius(Axes<LengthPercentage>),
}

impl Inheritable for BorderRadius {
    fn initial() -> Self {
        Self::Radius(Axes::both(LengthPercentage::zero()))
    }

    fn is_inherit(&self) -> bool {
        matches!(self, Self::Inherit)
    }
}

/// Serializes in the longhand form: one value when both radii agree,
/// otherwise `horizontal vertical`.
impl fmt::Display for BorderRadius {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inherit => f.write_str("inherit"),
            Self::Radius(r) if r.horizontal == r.vertical => fmt::Display::fmt(&r.horizontal, f),
            Self::Radius(r) => write!(f, "{} {}", r.horizontal, r.vertical),
        }
    }
}

/// [§ 9.3.2 Box offsets](https://www.w3.org/TR/CSS2/visuren.html#position-props)
///
/// `top`, `right`, `bottom` and `left`. "Initial: auto"
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Offset {
    /// `inherit`
    Inherit,
    /// "For non-replaced elements, the effect of this value depends on which
    /// of related properties have the value 'auto' as well."
    Auto,
    /// "The offset is a fixed distance from the reference edge. Negative
    /// values are allowed."
    Length(Length),
    /// "The offset is a percentage of the containing block's width (for
    /// 'left' or 'right') or height (for 'top' and 'bottom')."
    Percentage(f32),
}

impl Inheritable for Offset {
    fn initial() -> Self {
        Self::Auto
    }

    fn is_inherit(&self) -> bool {
        matches!(self, Self::Inherit)
    }
}

impl fmt::Display for Offset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inherit => f.write_str("inherit"),
            Self::Auto => f.write_str("auto"),
            Self::Length(l) => fmt::Display::fmt(l, f),
            Self::Percentage(p) => write!(f, "{p}%"),
        }
    }
}

/// [§ 10.2 Content width](https://www.w3.org/TR/CSS2/visudet.html#the-width-property)
/// and [§ 10.5 Content height](https://www.w3.org/TR/CSS2/visudet.html#the-height-property)
///
/// "Negative values for 'width' are illegal." "Initial: auto"
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Size {
    /// `inherit`
    Inherit,
    /// "The width depends on the values of other properties."
    Auto,
    /// A non-negative length.
    Length(Length),
    /// A non-negative percentage of the containing block.
    Percentage(f32),
}

impl Size {
    /// True for `auto`, or for a zero length or percentage.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_zero_or_auto(&self) -> bool {
        match self {
            Self::Auto => true,
            Self::Length(l) => l.is_zero(),
            Self::Percentage(p) => *p == 0.0,
            Self::Inherit => false,
        }
    }
}

impl Inheritable for Size {
    fn initial() -> Self {
        Self::Auto
    }

    fn is_inherit(&self) -> bool {
        matches!(self, Self::Inherit)
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inherit => f.write_str("inherit"),
            Self::Auto => f.write_str("auto"),
            Self::Length(l) => fmt::Display::fmt(l, f),
            Self::Percentage(p) => write!(f, "{p}%"),
        }
    }
}

/// [§ 10.4 Minimum and maximum widths](https://www.w3.org/TR/CSS2/visudet.html#min-max-widths)
///
/// `min-width` and `min-height`. "Initial: 0"
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum MinSize {
    /// `inherit`
    Inherit,
    /// A non-negative length.
    Length(Length),
    /// A non-negative percentage of the containing block.
    Percentage(f32),
}

impl MinSize {
    /// The used minimum in pixels; percentages resolve against `basis`.
    #[must_use]
    pub fn to_px(&self, basis: f32, font_size: f32, x_height: f32) -> f32 {
        match self {
            Self::Length(l) => l.to_px(font_size, x_height),
            Self::Percentage(p) => p * basis / 100.0,
            Self::Inherit => 0.0,
        }
    }
}

impl Inheritable for MinSize {
    fn initial() -> Self {
        Self::Length(Length::zero())
    }

    fn is_inherit(&self) -> bool {
        matches!(self, Self::Inherit)
    }
}

impl fmt::Display for MinSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inherit => f.write_str("inherit"),
            Self::Length(l) => fmt::Display::fmt(l, f),
            Self::Percentage(p) => write!(f, "{p}%"),
        }
    }
}

/// [§ 10.4](https://www.w3.org/TR/CSS2/visudet.html#min-max-widths)
///
/// `max-width` and `max-height`. "Initial: none"
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum MaxSize {
    /// `inherit`
    Inherit,
    /// "No limit on the width of the box."
    None,
    /// A non-negative length.
    Length(Length),
    /// A non-negative percentage of the containing block.
    Percentage(f32),
}

impl Inheritable for MaxSize {
    fn initial() -> Self {
        Self::None
    }

    fn is_inherit(&self) -> bool {
        matches!(self, Self::Inherit)
    }
}

impl fmt::Display for MaxSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inherit => f.write_str("inherit"),
            Self::None => f.write_str("none"),
            Self::Length(l) => fmt::Display::fmt(l, f),
            Self::Percentage(p) => write!(f, "{p}%"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::values::LengthUnit;

    #[test]
    fn inherit_copies_parent_or_falls_back_to_initial() {
        let mut margin = Margin::Inherit;
        margin.compute(Some(&Margin::Auto));
        assert_eq!(margin, Margin::Auto);

        let mut margin = Margin::Inherit;
        margin.compute(None);
        assert_eq!(margin, Margin::initial());

        let mut width = BorderWidth::Thick;
        width.compute(Some(&BorderWidth::Thin));
        assert_eq!(width, BorderWidth::Thick);
    }

    #[test]
    fn border_width_keywords_are_ordered() {
        let px = |w: BorderWidth| w.to_px(16.0, 8.0);
        assert!(px(BorderWidth::Thin) <= px(BorderWidth::Medium));
        assert!(px(BorderWidth::Medium) <= px(BorderWidth::Thick));
    }

    #[test]
    fn margin_used_values() {
        let em = Margin::Length(Length {
            value: 2.0,
            unit: LengthUnit::Em,
        });
        assert!((em.to_px(0.0, 10.0, 5.0) - 20.0).abs() < f32::EPSILON);
        assert!((Margin::Percentage(10.0).to_px(300.0, 16.0, 8.0) - 30.0).abs() < 1e-4);
        assert!(Margin::Auto.to_px(300.0, 16.0, 8.0).abs() < f32::EPSILON);
    }
}
