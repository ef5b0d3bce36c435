//! Per-element record of computed values.

use serde::Serialize;
use strum::IntoEnumIterator;

use crate::values::{Corners, Edges};

use super::{
    BackgroundColor, BackgroundRepeat, BackgroundSize, BorderColor, BorderImageSlice,
    BorderImageSource, BorderImageWidth, BorderRadius, BorderStyle, BorderWidth, BoxShadow,
    Clear, Color, ComputedValue, Content, Display, Float, FontFamily, FontSize, FontStyle,
    FontWeight, Inheritable, ListStyleType, Margin, MaxSize, MinSize, Offset, OutlineColor,
    Overflow, Padding, Position, PropertyName, Size, TextDecoration, VerticalAlign,
};

/// One computed-value slot per supported longhand.
///
/// Created with every inherited property set to `inherit` and every other
/// property at its initial value, then written by parsed declarations in
/// cascade order (last writer wins). [`BoxProperties::compute`] replaces
/// every remaining `inherit` with a concrete value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoxProperties {
    /// `margin-top`, `margin-right`, `margin-bottom`, `margin-left`
    pub margin: Edges<Margin>,
    /// `padding-*`
    pub padding: Edges<Padding>,
    /// `border-*-width`
    pub border_width: Edges<BorderWidth>,
    /// `border-*-style`
    pub border_style: Edges<BorderStyle>,
    /// `border-*-color`
    pub border_color: Edges<BorderColor>,
    /// `border-*-radius`
    pub border_radius: Corners<BorderRadius>,
    /// `border-image-source`
    pub border_image_source: BorderImageSource,
    /// `border-image-slice`
    pub border_image_slice: BorderImageSlice,
    /// `border-image-width`
    pub border_image_width: BorderImageWidth,
    /// `outline-width`
    pub outline_width: BorderWidth,
    /// `outline-style`
    pub outline_style: BorderStyle,
    /// `outline-color`
    pub outline_color: OutlineColor,
    /// `background-color`
    pub background_color: BackgroundColor,
    /// `background-repeat`
    pub background_repeat: BackgroundRepeat,
    /// `background-size`
    pub background_size: BackgroundSize,
    /// `box-shadow`
    pub box_shadow: BoxShadow,
    /// `display`
    pub display: Display,
    /// `position`
    pub position: Position,
    /// `float`
    pub float: Float,
    /// `clear`
    pub clear: Clear,
    /// `overflow`
    pub overflow: Overflow,
    /// `top`, `right`, `bottom`, `left`
    pub offsets: Edges<Offset>,
    /// `width`
    pub width: Size,
    /// `height`
    pub height: Size,
    /// `min-width`
    pub min_width: MinSize,
    /// `min-height`
    pub min_height: MinSize,
    /// `max-width`
    pub max_width: MaxSize,
    /// `max-height`
    pub max_height: MaxSize,
    /// `color`
    pub color: Color,
    /// `font-family`
    pub font_family: FontFamily,
    /// `font-size`
    pub font_size: FontSize,
    /// `font-style`
    pub font_style: FontStyle,
    /// `font-weight`
    pub font_weight: FontWeight,
    /// `text-decoration`
    pub text_decoration: TextDecoration,
    /// `list-style-type`
    pub list_style_type: ListStyleType,
    /// `vertical-align`
    pub vertical_align: VerticalAlign,
    /// `content`
    pub content: Content,
}

impl Default for BoxProperties {
    fn default() -> Self {
        Self::new()
    }
}

impl BoxProperties {
    /// A fresh record: inherited properties `inherit`, the rest initial.
    #[must_use]
    pub fn new() -> Self {
        let mut props = Self::initial();
        for name in PropertyName::iter().filter(|name| name.is_inherited()) {
            if let Some(value) = props.get(name) {
                let _ = props.set(name, value.to_inherit());
            }
        }
        props
    }

    /// Every slot at its initial value.
    fn initial() -> Self {
        Self {
            margin: Edges::all(Margin::initial()),
            padding: Edges::all(Padding::initial()),
            border_width: Edges::all(BorderWidth::initial()),
            border_style: Edges::all(BorderStyle::initial()),
            border_color: Edges::all(BorderColor::initial()),
            border_radius: Corners {
                top_right: BorderRadius::initial(),
                bottom_right: BorderRadius::initial(),
                bottom_left: BorderRadius::initial(),
                top_left: BorderRadius::initial(),
            },
            border_image_source: BorderImageSource::initial(),
            border_image_slice: BorderImageSlice::initial(),
            border_image_width: BorderImageWidth::initial(),
            outline_width: BorderWidth::initial(),
            outline_style: BorderStyle::initial(),
            outline_color: OutlineColor::initial(),
            background_color: BackgroundColor::initial(),
            background_repeat: BackgroundRepeat::initial(),
            background_size: BackgroundSize::initial(),
            box_shadow: BoxShadow::initial(),
            display: Display::initial(),
            position: Position::initial(),
            float: Float::initial(),
            clear: Clear::initial(),
            overflow: Overflow::initial(),
            offsets: Edges::all(Offset::initial()),
            width: Size::initial(),
            height: Size::initial(),
            min_width: MinSize::initial(),
            min_height: MinSize::initial(),
            max_width: MaxSize::initial(),
            max_height: MaxSize::initial(),
            color: Color::initial(),
            font_family: FontFamily::initial(),
            font_size: FontSize::initial(),
            font_style: FontStyle::initial(),
            font_weight: FontWeight::initial(),
            text_decoration: TextDecoration::initial(),
            list_style_type: ListStyleType::initial(),
            vertical_align: VerticalAlign::initial(),
            content: Content::initial(),
        }
    }

    /// Read the slot for a longhand. `None` for shorthands.
    #[must_use]
    pub fn get(&self, name: PropertyName) -> Option<ComputedValue> {
        use ComputedValue as V;
        use PropertyName as P;

        let value = match name {
            P::MarginTop => V::Margin(self.margin.top),
            P::MarginRight => V::Margin(self.margin.right),
            P::MarginBottom => V::Margin(self.margin.bottom),
            P::MarginLeft => V::Margin(self.margin.left),
            P::PaddingTop => V::Padding(self.padding.top),
            P::PaddingRight => V::Padding(self.padding.right),
            P::PaddingBottom => V::Padding(self.padding.bottom),
            P::PaddingLeft => V::Padding(self.padding.left),
            P::BorderTopWidth => V::BorderWidth(self.border_width.top),
            P::BorderRightWidth => V::BorderWidth(self.border_width.right),
            P::BorderBottomWidth => V::BorderWidth(self.border_width.bottom),
            P::BorderLeftWidth => V::BorderWidth(self.border_width.left),
            P::BorderTopStyle => V::BorderStyle(self.border_style.top),
            P::BorderRightStyle => V::BorderStyle(self.border_style.right),
            P::BorderBottomStyle => V::BorderStyle(self.border_style.bottom),
            P::BorderLeftStyle => V::BorderStyle(self.border_style.left),
            P::BorderTopColor => V::BorderColor(self.border_color.top),
            P::BorderRightColor => V::BorderColor(self.border_color.right),
            P::BorderBottomColor => V::BorderColor(self.border_color.bottom),
            P::BorderLeftColor => V::BorderColor(self.border_color.left),
            P::BorderTopRightRadius => V::BorderRadius(self.border_radius.top_right),
            P::BorderBottomRightRadius => V::BorderRadius(self.border_radius.bottom_right),
            P::BorderBottomLeftRadius => V::BorderRadius(self.border_radius.bottom_left),
            P::BorderTopLeftRadius => V::BorderRadius(self.border_radius.top_left),
            P::BorderImageSource => V::BorderImageSource(self.border_image_source.clone()),
            P::BorderImageSlice => V::BorderImageSlice(self.border_image_slice),
            P::BorderImageWidth => V::BorderImageWidth(self.border_image_width),
            P::OutlineWidth => V::BorderWidth(self.outline_width),
            P::OutlineStyle => V::BorderStyle(self.outline_style),
            P::OutlineColor => V::OutlineColor(self.outline_color),
            P::BackgroundColor => V::BackgroundColor(self.background_color),
            P::BackgroundRepeat => V::BackgroundRepeat(self.background_repeat.clone()),
            P::BackgroundSize => V::BackgroundSize(self.background_size),
            P::BoxShadow => V::BoxShadow(self.box_shadow.clone()),
            P::Display => V::Display(self.display),
            P::Position => V::Position(self.position),
            P::Float => V::Float(self.float),
            P::Clear => V::Clear(self.clear),
            P::Overflow => V::Overflow(self.overflow),
            P::Top => V::Offset(self.offsets.top),
            P::Right => V::Offset(self.offsets.right),
            P::Bottom => V::Offset(self.offsets.bottom),
            P::Left => V::Offset(self.offsets.left),
            P::Width => V::Size(self.width),
            P::Height => V::Size(self.height),
            P::MinWidth => V::MinSize(self.min_width),
            P::MinHeight => V::MinSize(self.min_height),
            P::MaxWidth => V::MaxSize(self.max_width),
            P::MaxHeight => V::MaxSize(self.max_height),
            P::Color => V::Color(self.color),
            P::FontFamily => V::FontFamily(self.font_family.clone()),
            P::FontSize => V::FontSize(self.font_size),
            P::FontStyle => V::FontStyle(self.font_style),
            P::FontWeight => V::FontWeight(self.font_weight),
            P::TextDecoration => V::TextDecoration(self.text_decoration),
            P::ListStyleType => V::ListStyleType(self.list_style_type),
            P::VerticalAlign => V::VerticalAlign(self.vertical_align),
            P::Content => V::Content(self.content.clone()),
            P::Margin
            | P::Padding
            | P::BorderWidth
            | P::BorderStyle
            | P::BorderColor
            | P::BorderRadius
            | P::Border
            | P::BorderTop
            | P::BorderRight
            | P::BorderBottom
            | P::BorderLeft
            | P::Outline => return None,
        };
        Some(value)
    }

    /// Write the slot for a longhand.
    ///
    /// Returns `false`, leaving the record untouched, when `name` is a
    /// shorthand or `value` belongs to another family.
    pub fn set(&mut self, name: PropertyName, value: ComputedValue) -> bool {
        use ComputedValue as V;
        use PropertyName as P;

        match (name, value) {
            (P::MarginTop, V::Margin(v)) => self.margin.top = v,
            (P::MarginRight, V::Margin(v)) => self.margin.right = v,
            (P::MarginBottom, V::Margin(v)) => self.margin.bottom = v,
            (P::MarginLeft, V::Margin(v)) => self.margin.left = v,
            (P::PaddingTop, V::Padding(v)) => self.padding.top = v,
            (P::PaddingRight, V::Padding(v)) => self.padding.right = v,
            (P::PaddingBottom, V::Padding(v)) => self.padding.bottom = v,
            (P::PaddingLeft, V::Padding(v)) => self.padding.left = v,
            (P::BorderTopWidth, V::BorderWidth(v)) => self.border_width.top = v,
            (P::BorderRightWidth, V::BorderWidth(v)) => self.border_width.right = v,
            (P::BorderBottomWidth, V::BorderWidth(v)) => self.border_width.bottom = v,
            (P::BorderLeftWidth, V::BorderWidth(v)) => self.border_width.left = v,
            (P::BorderTopStyle, V::BorderStyle(v)) => self.border_style.top = v,
            (P::BorderRightStyle, V::BorderStyle(v)) => self.border_style.right = v,
            (P::BorderBottomStyle, V::BorderStyle(v)) => self.border_style.bottom = v,
            (P::BorderLeftStyle, V::BorderStyle(v)) => self.border_style.left = v,
            (P::BorderTopColor, V::BorderColor(v)) => self.border_color.top = v,
            (P::BorderRightColor, V::BorderColor(v)) => self.border_color.right = v,
            (P::BorderBottomColor, V::BorderColor(v)) => self.border_color.bottom = v,
            (P::BorderLeftColor, V::BorderColor(v)) => self.border_color.left = v,
            (P::BorderTopRightRadius, V::BorderRadius(v)) => self.border_radius.top_right = v,
            (P::BorderBottomRightRadius, V::BorderRadius(v)) => {
                self.border_radius.bottom_right = v;
            }
            (P::BorderBottomLeftRadius, V::BorderRadius(v)) => {
                self.border_radius.bottom_left = v;
            }
            (P::BorderTopLeftRadius, V::BorderRadius(v)) => self.border_radius.top_left = v,
            (P::BorderImageSource, V::BorderImageSource(v)) => self.border_image_source = v,
            (P::BorderImageSlice, V::BorderImageSlice(v)) => self.border_image_slice = v,
            (P::BorderImageWidth, V::BorderImageWidth(v)) => self.border_image_width = v,
            (P::OutlineWidth, V::BorderWidth(v)) => self.outline_width = v,
            (P::OutlineStyle, V::BorderStyle(v)) => self.outline_style = v,
            (P::OutlineColor, V::OutlineColor(v)) => self.outline_color = v,
            (P::BackgroundColor, V::BackgroundColor(v)) => self.background_color = v,
            (P::BackgroundRepeat, V::BackgroundRepeat(v)) => self.background_repeat = v,
            (P::BackgroundSize, V::BackgroundSize(v)) => self.background_size = v,
            (P::BoxShadow, V::BoxShadow(v)) => self.box_shadow = v,
            (P::Display, V::Display(v)) => self.display = v,
            (P::Position, V::Position(v)) => self.position = v,
            (P::Float, V::Float(v)) => self.float = v,
            (P::Clear, V::Clear(v)) => self.clear = v,
            (P::Overflow, V::Overflow(v)) => self.overflow = v,
            (P::Top, V::Offset(v)) => self.offsets.top = v,
            (P::Right, V::Offset(v)) => self.offsets.right = v,
            (P::Bottom, V::Offset(v)) => self.offsets.bottom = v,
            (P::Left, V::Offset(v)) => self.offsets.left = v,
            (P::Width, V::Size(v)) => self.width = v,
            (P::Height, V::Size(v)) => self.height = v,
            (P::MinWidth, V::MinSize(v)) => self.min_width = v,
            (P::MinHeight, V::MinSize(v)) => self.min_height = v,
            (P::MaxWidth, V::MaxSize(v)) => self.max_width = v,
            (P::MaxHeight, V::MaxSize(v)) => self.max_height = v,
            (P::Color, V::Color(v)) => self.color = v,
            (P::FontFamily, V::FontFamily(v)) => self.font_family = v,
            (P::FontSize, V::FontSize(v)) => self.font_size = v,
            (P::FontStyle, V::FontStyle(v)) => self.font_style = v,
            (P::FontWeight, V::FontWeight(v)) => self.font_weight = v,
            (P::TextDecoration, V::TextDecoration(v)) => self.text_decoration = v,
            (P::ListStyleType, V::ListStyleType(v)) => self.list_style_type = v,
            (P::VerticalAlign, V::VerticalAlign(v)) => self.vertical_align = v,
            (P::Content, V::Content(v)) => self.content = v,
            _ => return false,
        }
        true
    }

    /// Write every `(longhand, value)` pair, or none of them.
    ///
    /// The pairs are applied to a copy which replaces `self` only once all
    /// of them were accepted, so a failed write never leaves the record
    /// half updated.
    pub fn apply(&mut self, changes: &[(PropertyName, ComputedValue)]) -> bool {
        let mut updated = self.clone();
        for (name, value) in changes {
            if !updated.set(*name, value.clone()) {
                return false;
            }
        }
        *self = updated;
        true
    }

    /// [§ 6.2 Inheritance](https://www.w3.org/TR/CSS2/cascade.html#inheritance)
    ///
    /// Replace every `inherit` with the parent's value (or the initial value
    /// at the root), then apply the `display`/`position`/`float` rules of
    /// § 9.7. `parent` must already be computed.
    pub fn compute(&mut self, parent: Option<&Self>) {
        compute_edges(&mut self.margin, parent.map(|p| &p.margin));
        compute_edges(&mut self.padding, parent.map(|p| &p.padding));
        compute_edges(&mut self.border_width, parent.map(|p| &p.border_width));
        compute_edges(&mut self.border_style, parent.map(|p| &p.border_style));
        compute_edges(&mut self.border_color, parent.map(|p| &p.border_color));
        compute_edges(&mut self.offsets, parent.map(|p| &p.offsets));

        let radius = &mut self.border_radius;
        let parent_radius = parent.map(|p| &p.border_radius);
        radius.top_right.compute(parent_radius.map(|r| &r.top_right));
        radius.bottom_right.compute(parent_radius.map(|r| &r.bottom_right));
        radius.bottom_left.compute(parent_radius.map(|r| &r.bottom_left));
        radius.top_left.compute(parent_radius.map(|r| &r.top_left));

        self.border_image_source.compute(parent.map(|p| &p.border_image_source));
        self.border_image_slice.compute(parent.map(|p| &p.border_image_slice));
        self.border_image_width.compute(parent.map(|p| &p.border_image_width));
        self.outline_width.compute(parent.map(|p| &p.outline_width));
        self.outline_style.compute(parent.map(|p| &p.outline_style));
        self.outline_color.compute(parent.map(|p| &p.outline_color));
        self.background_color.compute(parent.map(|p| &p.background_color));
        self.background_repeat.compute(parent.map(|p| &p.background_repeat));
        self.background_size.compute(parent.map(|p| &p.background_size));
        self.box_shadow.compute(parent.map(|p| &p.box_shadow));
        self.clear.compute(parent.map(|p| &p.clear));
        self.overflow.compute(parent.map(|p| &p.overflow));
        self.width.compute(parent.map(|p| &p.width));
        self.height.compute(parent.map(|p| &p.height));
        self.min_width.compute(parent.map(|p| &p.min_width));
        self.min_height.compute(parent.map(|p| &p.min_height));
        self.max_width.compute(parent.map(|p| &p.max_width));
        self.max_height.compute(parent.map(|p| &p.max_height));
        self.color.compute(parent.map(|p| &p.color));
        self.font_family.compute(parent.map(|p| &p.font_family));
        self.font_size.compute(parent.map(|p| &p.font_size));
        self.font_style.compute(parent.map(|p| &p.font_style));
        self.font_weight.compute(parent.map(|p| &p.font_weight));
        self.text_decoration.compute(parent.map(|p| &p.text_decoration));
        self.list_style_type.compute(parent.map(|p| &p.list_style_type));
        self.vertical_align.compute(parent.map(|p| &p.vertical_align));
        self.content.compute(parent.map(|p| &p.content));

        // display depends on the computed position and float
        self.position.compute(parent.map(|p| &p.position));
        self.float.compute(parent.map(|p| &p.float));
        self.display
            .compute(parent.map(|p| &p.display), self.position, &mut self.float);
    }

    /// True once no slot holds `inherit`.
    #[must_use]
    pub fn is_computed(&self) -> bool {
        PropertyName::iter()
            .filter_map(|name| self.get(name))
            .all(|value| value.to_inherit() != value)
    }
}

fn compute_edges<T: Inheritable>(edges: &mut Edges<T>, parent: Option<&Edges<T>>) {
    edges.top.compute(parent.map(|p| &p.top));
    edges.right.compute(parent.map(|p| &p.right));
    edges.bottom.compute(parent.map(|p| &p.bottom));
    edges.left.compute(parent.map(|p| &p.left));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::values::{ColorValue, Length};

    #[test]
    fn fresh_record_inherits_text_properties() {
        let props = BoxProperties::new();
        assert_eq!(props.color, Color::Inherit);
        assert_eq!(props.margin.top, Margin::Length(Length::zero()));
        assert!(!props.is_computed());
    }

    #[test]
    fn fresh_record_inherits_exactly_the_inherited_properties() {
        let props = BoxProperties::new();
        for name in PropertyName::iter().filter(|name| !name.is_shorthand()) {
            let value = props.get(name).unwrap();
            assert_eq!(value == value.to_inherit(), name.is_inherited(), "{name}");
        }
    }

    #[test]
    fn set_rejects_mismatched_family() {
        let mut props = BoxProperties::new();
        assert!(!props.set(PropertyName::MarginTop, ComputedValue::Padding(Padding::Inherit)));
        assert!(!props.set(PropertyName::Margin, ComputedValue::Margin(Margin::Auto)));
        assert!(props.set(PropertyName::MarginTop, ComputedValue::Margin(Margin::Auto)));
        assert_eq!(props.get(PropertyName::MarginTop), Some(ComputedValue::Margin(Margin::Auto)));
    }

    #[test]
    fn apply_is_all_or_nothing() {
        let mut props = BoxProperties::new();
        let before = props.clone();
        let accepted = props.apply(&[
            (PropertyName::MarginTop, ComputedValue::Margin(Margin::Auto)),
            (PropertyName::MarginLeft, ComputedValue::Display(Display::Block)),
        ]);
        assert!(!accepted);
        assert_eq!(props, before);
    }

    #[test]
    fn compute_resolves_every_inherit() {
        let mut parent = BoxProperties::new();
        parent.color = Color::Rgba(ColorValue::rgb(1, 2, 3));
        parent.compute(None);
        assert!(parent.is_computed());

        let mut child = BoxProperties::new();
        child.margin.left = Margin::Inherit;
        child.compute(Some(&parent));
        assert!(child.is_computed());
        assert_eq!(child.color, Color::Rgba(ColorValue::rgb(1, 2, 3)));
        assert_eq!(child.margin.left, parent.margin.left);
    }

    #[test]
    fn every_longhand_has_a_slot() {
        let props = BoxProperties::new();
        for name in PropertyName::iter() {
            assert_eq!(props.get(name).is_some(), !name.is_shorthand(), "{name}");
        }
    }
}
