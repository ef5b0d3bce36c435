//! Computed-value types, one family per CSS property group.
//!
//! [CSS 2.1 § 6.1 Specified, computed, and actual values](https://www.w3.org/TR/CSS2/cascade.html#value-stages)
//!
//! "Specified values are resolved to computed values during the cascade; for
//! example URIs are made absolute and 'em' and 'ex' units are computed to pixel
//! or absolute lengths."
//!
//! Here computing only settles the `inherit` question. Lengths stay in the
//! units they were written in until layout asks for pixels.

mod background;
mod border_image;
mod box_model;
mod display;
mod properties;
mod property;
mod text;
mod value;

pub use background::{
    BackgroundColor, BackgroundRepeat, BackgroundSize, BackgroundSizeAxis, BoxShadow, Color,
    RepeatKeyword, RepeatStyle, Shadow,
};
pub use border_image::{
    BorderImageSlice, BorderImageSource, BorderImageWidth, ImageWidth, NumberOrPercentage,
};
pub use box_model::{
    BorderColor, BorderRadius, BorderStyle, BorderWidth, Margin, MaxSize, MinSize, Offset,
    OutlineColor, Padding, Size,
};
pub use display::{Clear, Display, Float, Overflow, Position};
pub use properties::BoxProperties;
pub use property::PropertyName;
pub use text::{
    AbsoluteSize, Content, ContentItem, FamilyName, FontFamily, FontSize, FontStyle, FontWeight,
    GenericFamily, ListStyleType, TextDecoration, VerticalAlign, VerticalAlignKeyword,
};
pub use value::ComputedValue;

/// [§ 6.2 Inheritance](https://www.w3.org/TR/CSS2/cascade.html#inheritance)
///
/// Shared by every computed-value family: an initial value, an `inherit`
/// tag, and the rule that turns the tag into a concrete value.
pub trait Inheritable: Clone {
    /// The property's initial value.
    fn initial() -> Self;

    /// True for the `inherit` tag.
    fn is_inherit(&self) -> bool;

    /// [§ 6.2.1 The 'inherit' value](https://www.w3.org/TR/CSS2/cascade.html#value-def-inherit)
    ///
    /// "each property may also have a cascaded value of 'inherit', which means
    /// that, for a given element, the property takes the same specified value
    /// as the property for the element's parent."
    ///
    /// "The root element, which has no parent element, is given the initial
    /// value of the property."
    fn compute(&mut self, parent: Option<&Self>) {
        if !self.is_inherit() {
            return;
        }
        *self = match parent {
            Some(parent) if !parent.is_inherit() => parent.clone(),
            _ => Self::initial(),
        };
    }
}
