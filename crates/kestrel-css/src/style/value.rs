//! The value union a parser hands back for each longhand it sets.

use core::fmt;

use serde::Serialize;

use super::{
    BackgroundColor, BackgroundRepeat, BackgroundSize, BorderColor, BorderImageSlice,
    BorderImageSource, BorderImageWidth, BorderRadius, BorderStyle, BorderWidth, BoxShadow,
    Clear, Color, Content, Display, Float, FontFamily, FontSize, FontStyle, FontWeight,
    ListStyleType, Margin, MaxSize, MinSize, Offset, OutlineColor, Overflow, Padding, Position,
    Size, TextDecoration, VerticalAlign,
};

/// A computed value of any family, tagged by family.
///
/// Several longhands share a family: all four `margin-*` properties carry
/// [`ComputedValue::Margin`], and `outline-width` reuses
/// [`ComputedValue::BorderWidth`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
#[allow(missing_docs)]
pub enum ComputedValue {
    Margin(Margin),
    Padding(Padding),
    BorderWidth(BorderWidth),
    BorderStyle(BorderStyle),
    BorderColor(BorderColor),
    BorderRadius(BorderRadius),
    BorderImageSource(BorderImageSource),
    BorderImageSlice(BorderImageSlice),
    BorderImageWidth(BorderImageWidth),
    OutlineColor(OutlineColor),
    BackgroundColor(BackgroundColor),
    BackgroundRepeat(BackgroundRepeat),
    BackgroundSize(BackgroundSize),
    BoxShadow(BoxShadow),
    Display(Display),
    Position(Position),
    Float(Float),
    Clear(Clear),
    Overflow(Overflow),
    Offset(Offset),
    Size(Size),
    MinSize(MinSize),
    MaxSize(MaxSize),
    Color(Color),
    FontFamily(FontFamily),
    FontSize(FontSize),
    FontStyle(FontStyle),
    FontWeight(FontWeight),
    TextDecoration(TextDecoration),
    ListStyleType(ListStyleType),
    VerticalAlign(VerticalAlign),
    Content(Content),
}

impl ComputedValue {
    /// The `inherit` tag of this value's family.
    #[must_use]
    pub const fn to_inherit(&self) -> Self {
        match self {
            Self::Margin(_) => Self::Margin(Margin::Inherit),
            Self::Padding(_) => Self::Padding(Padding::Inherit),
            Self::BorderWidth(_) => Self::BorderWidth(BorderWidth::Inherit),
            Self::BorderStyle(_) => Self::BorderStyle(BorderStyle::Inherit),
            Self::BorderColor(_) => Self::BorderColor(BorderColor::Inherit),
            Self::BorderRadius(_) => Self::BorderRadius(BorderRadius::Inherit),
            Self::BorderImageSource(_) => Self::BorderImageSource(BorderImageSource::Inherit),
            Self::BorderImageSlice(_) => Self::BorderImageSlice(BorderImageSlice::Inherit),
            Self::BorderImageWidth(_) => Self::BorderImageWidth(BorderImageWidth::Inherit),
            Self::OutlineColor(_) => Self::OutlineColor(OutlineColor::Inherit),
            Self::BackgroundColor(_) => Self::BackgroundColor(BackgroundColor::Inherit),
            Self::BackgroundRepeat(_) => Self::BackgroundRepeat(BackgroundRepeat::Inherit),
            Self::BackgroundSize(_) => Self::BackgroundSize(BackgroundSize::Inherit),
            Self::BoxShadow(_) => Self::BoxShadow(BoxShadow::Inherit),
            Self::Display(_) => Self::Display(Display::Inherit),
            Self::Position(_) => Self::Position(Position::Inherit),
            Self::Float(_) => Self::Float(Float::Inherit),
            Self::Clear(_) => Self::Clear(Clear::Inherit),
            Self::Overflow(_) => Self::Overflow(Overflow::Inherit),
            Self::Offset(_) => Self::Offset(Offset::Inherit),
            Self::Size(_) => Self::Size(Size::Inherit),
            Self::MinSize(_) => Self::MinSize(MinSize::Inherit),
            Self::MaxSize(_) => Self::MaxSize(MaxSize::Inherit),
            Self::Color(_) => Self::Color(Color::Inherit),
            Self::FontFamily(_) => Self::FontFamily(FontFamily::Inherit),
            Self::FontSize(_) => Self::FontSize(FontSize::Inherit),
            Self::FontStyle(_) => Self::FontStyle(FontStyle::Inherit),
            Self::FontWeight(_) => Self::FontWeight(FontWeight::Inherit),
            Self::TextDecoration(_) => Self::TextDecoration(TextDecoration::Inherit),
            Self::ListStyleType(_) => Self::ListStyleType(ListStyleType::Inherit),
            Self::VerticalAlign(_) => Self::VerticalAlign(VerticalAlign::Inherit),
            Self::Content(_) => Self::Content(Content::Inherit),
        }
    }
}

impl fmt::Display for ComputedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Margin(v) => fmt::Display::fmt(v, f),
            Self::Padding(v) => fmt::Display::fmt(v, f),
            Self::BorderWidth(v) => fmt::Display::fmt(v, f),
            Self::BorderStyle(v) => fmt::Display::fmt(v, f),
            Self::BorderColor(v) => fmt::Display::fmt(v, f),
            Self::BorderRadius(v) => fmt::Display::fmt(v, f),
            Self::BorderImageSource(v) => fmt::Display::fmt(v, f),
            Self::BorderImageSlice(v) => fmt::Display::fmt(v, f),
            Self::BorderImageWidth(v) => fmt::Display::fmt(v, f),
            Self::OutlineColor(v) => fmt::Display::fmt(v, f),
            Self::BackgroundColor(v) => fmt::Display::fmt(v, f),
            Self::BackgroundRepeat(v) => fmt::Display::fmt(v, f),
            Self::BackgroundSize(v) => fmt::Display::fmt(v, f),
            Self::BoxShadow(v) => fmt::Display::fmt(v, f),
            Self::Display(v) => fmt::Display::fmt(v, f),
            Self::Position(v) => fmt::Display::fmt(v, f),
            Self::Float(v) => fmt::Display::fmt(v, f),
            Self::Clear(v) => fmt::Display::fmt(v, f),
            Self::Overflow(v) => fmt::Display::fmt(v, f),
            Self::Offset(v) => fmt::Display::fmt(v, f),
            Self::Size(v) => fmt::Display::fmt(v, f),
            Self::MinSize(v) => fmt::Display::fmt(v, f),
            Self::MaxSize(v) => fmt::Display::fmt(v, f),
            Self::Color(v) => fmt::Display::fmt(v, f),
            Self::FontFamily(v) => fmt::Display::fmt(v, f),
            Self::FontSize(v) => fmt::Display::fmt(v, f),
            Self::FontStyle(v) => fmt::Display::fmt(v, f),
            Self::FontWeight(v) => fmt::Display::fmt(v, f),
            Self::TextDecoration(v) => fmt::Display::fmt(v, f),
            Self::ListStyleType(v) => fmt::Display::fmt(v, f),
            Self::VerticalAlign(v) => fmt::Display::fmt(v, f),
            Self::Content(v) => fmt::Display::fmt(v, f),
        }
    }
}
