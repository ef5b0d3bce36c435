//! Border image values.
//!
//! [CSS Backgrounds and Borders Level 3 § 6 Border Images](https://www.w3.org/TR/css-backgrounds-3/#border-images)
//!
//! Slices and widths keep a horizontal and a vertical value per edge so the
//! two-axis `a b / c d` form can be stored without loss. Without the slash
//! both axes hold the same value.

use core::fmt;

use serde::Serialize;

use crate::values::{Axes, Edges, Length, write_shortest};

use super::Inheritable;
use super::text::write_css_string;

/// [§ 6.2 'border-image-source'](https://www.w3.org/TR/css-backgrounds-3/#border-image-source)
///
/// "Value: none | `<image>`" "Initial: none"
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum BorderImageSource {
    /// `inherit`
    Inherit,
    /// "no image is used, and the border styles are used instead"
    None,
    /// The image URL.
    Url(String),
}

impl Inheritable for BorderImageSource {
    fn initial() -> Self {
        Self::None
    }

    fn is_inherit(&self) -> bool {
        matches!(self, Self::Inherit)
    }
}

impl fmt::Display for BorderImageSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inherit => f.write_str("inherit"),
            Self::None => f.write_str("none"),
            Self::Url(url) => {
                f.write_str("url(")?;
                write_css_string(f, url)?;
                f.write_str(")")
            }
        }
    }
}

/// A slice offset: "`<number>` | `<percentage>`".
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum NumberOrPercentage {
    /// "Numbers represent pixels in the image (if the image is a raster
    /// image) or vector coordinates (if the image is a vector image)."
    Number(f32),
    /// "Percentages are relative to the size of the image."
    Percentage(f32),
}

impl fmt::Display for NumberOrPercentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Percentage(p) => write!(f, "{p}%"),
        }
    }
}

/// [§ 6.3 'border-image-slice'](https://www.w3.org/TR/css-backgrounds-3/#border-image-slice)
///
/// "Value: `[<number> | <percentage>]{1,4} && fill?`" "Initial: 100%"
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum BorderImageSlice {
    /// `inherit`
    Inherit,
    /// Inward offsets from the image edges.
    Slice {
        /// Offset per edge, horizontal and vertical.
        edges: Edges<Axes<NumberOrPercentage>>,
        /// "The 'fill' keyword, if present, causes the middle part of the
        /// border-image to be preserved."
        fill: bool,
    },
}

impl Inheritable for BorderImageSlice {
    fn initial() -> Self {
        Self::Slice {
            edges: Edges::all(Axes::both(NumberOrPercentage::Percentage(100.0))),
            fill: false,
        }
    }

    fn is_inherit(&self) -> bool {
        matches!(self, Self::Inherit)
    }
}

impl fmt::Display for BorderImageSlice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inherit => f.write_str("inherit"),
            Self::Slice { edges, fill } => {
                write_two_axis(f, edges)?;
                if *fill {
                    f.write_str(" fill")?;
                }
                Ok(())
            }
        }
    }
}

/// One `border-image-width` value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ImageWidth {
    /// An explicit non-negative length.
    Length(Length),
    /// "Percentages refer to the size of the border image area"
    Percentage(f32),
    /// "Numbers represent multiples of the corresponding computed border-width."
    Number(f32),
    /// "the width is the intrinsic width or height (whichever is applicable)
    /// of the corresponding image slice"
    Auto,
}

impl fmt::Display for ImageWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Length(l) => fmt::Display::fmt(l, f),
            Self::Percentage(p) => write!(f, "{p}%"),
            Self::Number(n) => write!(f, "{n}"),
            Self::Auto => f.write_str("auto"),
        }
    }
}

/// [§ 6.4 'border-image-width'](https://www.w3.org/TR/css-backgrounds-3/#border-image-width)
///
/// "Value: `[ <length-percentage> | <number> | auto ]{1,4}`" "Initial: 1"
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum BorderImageWidth {
    /// `inherit`
    Inherit,
    /// Width per edge, horizontal and vertical.
    Widths(Edges<Axes<ImageWidth>>),
}

impl Inheritable for BorderImageWidth {
    fn initial() -> Self {
        Self::Widths(Edges::all(Axes::both(ImageWidth::Number(1.0))))
    }

    fn is_inherit(&self) -> bool {
        matches!(self, Self::Inherit)
    }
}

impl fmt::Display for BorderImageWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inherit => f.write_str("inherit"),
            Self::Widths(edges) => write_two_axis(f, edges),
        }
    }
}

/// `h1 h2 h3 h4 [/ v1 v2 v3 v4]`, each side in its shortest form. The
/// slash part is omitted when both axes agree.
fn write_two_axis<T: fmt::Display + PartialEq + Copy>(
    f: &mut fmt::Formatter<'_>,
    edges: &Edges<Axes<T>>,
) -> fmt::Result {
    let [top, right, bottom, left] = edges.to_array();
    let horizontal = [top.horizontal, right.horizontal, bottom.horizontal, left.horizontal];
    let vertical = [top.vertical, right.vertical, bottom.vertical, left.vertical];
    write_shortest(f, &horizontal)?;
    if vertical != horizontal {
        f.write_str(" / ")?;
        write_shortest(f, &vertical)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_values_serialize() {
        assert_eq!(BorderImageSlice::initial().to_string(), "100%");
        assert_eq!(BorderImageWidth::initial().to_string(), "1");
        assert_eq!(BorderImageSource::initial().to_string(), "none");
    }

    #[test]
    fn two_axis_form_only_when_axes_differ() {
        let mut edges = Edges::all(Axes::both(NumberOrPercentage::Number(10.0)));
        edges.left.vertical = NumberOrPercentage::Percentage(5.0);
        let slice = BorderImageSlice::Slice { edges, fill: true };
        assert_eq!(slice.to_string(), "10 / 10 10 10 5% fill");
    }
}
