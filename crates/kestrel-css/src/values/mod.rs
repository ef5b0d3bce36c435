//! Primitive CSS values and the helpers shared by every property family.
//!
//! - [CSS Values and Units Level 3](https://www.w3.org/TR/css-values-3/)
//! - [CSS Color Level 3](https://www.w3.org/TR/css-color-3/)
//!
//! The primitive parsers here convert a single token (or, for colors, a short
//! run of tokens) into a typed value, or fail. They know nothing about which
//! property they are parsing for.

mod color;
mod length;
mod sides;

pub use color::{ColorValue, parse_color};
pub use length::{Length, LengthPercentage, LengthUnit, parse_length};
pub use sides::{Axes, Corners, Edges, expand_four};
pub(crate) use sides::write_shortest;
