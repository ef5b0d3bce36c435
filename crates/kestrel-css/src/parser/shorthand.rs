//! Parsers for properties that expand into several longhands.

use crate::error::ParseResult;
use crate::style::{
    BorderColor, BorderRadius, BorderStyle, BorderWidth, ComputedValue, Inheritable,
    OutlineColor, PropertyName,
};
use crate::tokenizer::TokenStream;
use crate::values::Axes;

use super::box_model::{
    read_border_color, read_border_width, read_outline_color, radius_component,
};
use super::components::{read_keyword, read_two_axis, read_up_to_four, reject};
use super::{ChangeSet, PropertyParser};

/// Reads one component of a multi-value declaration.
pub(super) type ComponentReader =
    fn(&mut TokenStream<'_>) -> ParseResult<Option<ComputedValue>>;

/// [§ 8.3 Margin properties](https://www.w3.org/TR/CSS2/box.html#margin-properties)
///
/// `margin`, `padding`, `border-width`, `border-style` and `border-color`:
/// one to four components, expanded top, right, bottom, left.
pub struct EdgeShorthandParser {
    names: &'static [PropertyName],
    component: ComponentReader,
    expected: &'static str,
}

impl EdgeShorthandParser {
    pub(super) const fn new(
        names: &'static [PropertyName],
        component: ComponentReader,
        expected: &'static str,
    ) -> Self {
        Self {
            names,
            component,
            expected,
        }
    }
}

impl PropertyParser for EdgeShorthandParser {
    fn names(&self) -> &'static [PropertyName] {
        self.names
    }

    fn parse(&self, name: PropertyName, stream: &mut TokenStream<'_>) -> ParseResult<ChangeSet> {
        let mut component = self.component;
        let values = read_up_to_four(stream, &mut component, self.expected)?;
        Ok(name.longhands().into_iter().zip(values).collect())
    }
}

/// [§ 8.5.4 Border shorthand properties](https://www.w3.org/TR/CSS2/box.html#border-shorthand-properties)
/// and [§ 18.4 'outline'](https://www.w3.org/TR/CSS2/ui.html#propdef-outline)
///
/// "Value: [ `<border-width>` || `<border-style>` || `<border-top-color>` ] | inherit"
///
/// Components may come in any order, each at most once. Omitted components
/// are reset to their initial values.
pub struct BorderShorthandParser;

impl PropertyParser for BorderShorthandParser {
    fn names(&self) -> &'static [PropertyName] {
        &[
            PropertyName::Border,
            PropertyName::BorderTop,
            PropertyName::BorderRight,
            PropertyName::BorderBottom,
            PropertyName::BorderLeft,
            PropertyName::Outline,
        ]
    }

    fn parse(&self, name: PropertyName, stream: &mut TokenStream<'_>) -> ParseResult<ChangeSet> {
        let outline = name == PropertyName::Outline;
        let mut width = None;
        let mut style = None;
        let mut color = None;

        while !stream.is_exhausted() {
            if width.is_none()
                && let Some(value) = read_border_width(stream)?
            {
                width = Some(value);
                continue;
            }
            if style.is_none()
                && let Some(value) = read_keyword::<BorderStyle>(stream)
            {
                style = Some(value);
                continue;
            }
            if color.is_none() {
                color = if outline {
                    read_outline_color(stream)?.map(ComputedValue::OutlineColor)
                } else {
                    read_border_color(stream)?.map(ComputedValue::BorderColor)
                };
                if color.is_some() {
                    continue;
                }
            }
            return Err(reject(stream, "a border width, style or color"));
        }

        let width = ComputedValue::BorderWidth(width.unwrap_or_else(BorderWidth::initial));
        let style = ComputedValue::BorderStyle(style.unwrap_or_else(BorderStyle::initial));
        let color = color.unwrap_or_else(|| {
            if outline {
                ComputedValue::OutlineColor(OutlineColor::initial())
            } else {
                ComputedValue::BorderColor(BorderColor::initial())
            }
        });

        Ok(name
            .longhands()
            .into_iter()
            .map(|longhand| {
                let value = match longhand.as_ref() {
                    n if n.ends_with("-width") => width.clone(),
                    n if n.ends_with("-style") => style.clone(),
                    _ => color.clone(),
                };
                (longhand, value)
            })
            .collect())
    }
}

/// [§ 5.1 'border-radius'](https://www.w3.org/TR/css-backgrounds-3/#border-radius)
///
/// One to four horizontal radii, then optionally `/` and one to four
/// vertical radii. Each group expands like the box edges but starting at
/// the top-right corner. Without the slash the vertical radii equal the
/// horizontal ones.
pub struct BorderRadiusParser;

impl PropertyParser for BorderRadiusParser {
    fn names(&self) -> &'static [PropertyName] {
        &[PropertyName::BorderRadius]
    }

    fn parse(&self, name: PropertyName, stream: &mut TokenStream<'_>) -> ParseResult<ChangeSet> {
        let (horizontal, vertical) = read_two_axis(stream, radius_component, "a corner radius")?;
        Ok(name
            .longhands()
            .into_iter()
            .zip(horizontal.into_iter().zip(vertical))
            .map(|(corner, (horizontal, vertical))| {
                let radius = BorderRadius::Radius(Axes {
                    horizontal,
                    vertical,
                });
                (corner, ComputedValue::BorderRadius(radius))
            })
            .collect())
    }
}
