//! Four-sided and two-axis containers.
//!
//! [CSS 2.1 § 8.1 Box dimensions](https://www.w3.org/TR/CSS2/box.html#box-dimensions)

use core::fmt;

use serde::Serialize;

/// One value per box edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Edges<T> {
    /// The top edge.
    pub top: T,
    /// The right edge.
    pub right: T,
    /// The bottom edge.
    pub bottom: T,
    /// The left edge.
    pub left: T,
}

impl<T: Clone> Edges<T> {
    /// The same value on every edge.
    #[must_use]
    pub fn all(value: T) -> Self {
        Self {
            top: value.clone(),
            right: value.clone(),
            bottom: value.clone(),
            left: value,
        }
    }

    /// Build from 1 to 4 values using the box-edge expansion rule.
    #[must_use]
    pub fn expand(values: &[T]) -> Option<Self> {
        let [top, right, bottom, left] = expand_four(values)?;
        Some(Self {
            top,
            right,
            bottom,
            left,
        })
    }

    /// The edges in clockwise order starting at the top.
    #[must_use]
    pub fn to_array(&self) -> [T; 4] {
        [
            self.top.clone(),
            self.right.clone(),
            self.bottom.clone(),
            self.left.clone(),
        ]
    }
}

/// Serializes the shortest 1–4 value form that expands back to these edges.
impl<T: fmt::Display + PartialEq + Clone> fmt::Display for Edges<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_shortest(f, &self.to_array())
    }
}

/// One value per box corner.
///
/// Fields are listed in the order the `border-radius` shorthand fills them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Corners<T> {
    /// The top-right corner.
    pub top_right: T,
    /// The bottom-right corner.
    pub bottom_right: T,
    /// The bottom-left corner.
    pub bottom_left: T,
    /// The top-left corner.
    pub top_left: T,
}

/// A horizontal and a vertical value held under one tag, as written with
/// the `h / v` syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Axes<T> {
    /// The horizontal (first) axis.
    pub horizontal: T,
    /// The vertical (second) axis.
    pub vertical: T,
}

impl<T: Clone> Axes<T> {
    /// The same value on both axes.
    #[must_use]
    pub fn both(value: T) -> Self {
        Self {
            horizontal: value.clone(),
            vertical: value,
        }
    }
}

/// [§ 8.3 Margin properties](https://www.w3.org/TR/CSS2/box.html#margin-properties)
///
/// "If there is only one component value, it applies to all sides. If there
/// are two values, the top and bottom margins are set to the first value and
/// the right and left margins are set to the second. If there are three
/// values, the top is set to the first value, the left and right are set to
/// the second, and the bottom is set to the third. If there are four values,
/// they apply to the top, right, bottom, and left, respectively."
///
/// Returns `None` for an empty slice or more than four values.
#[must_use]
pub fn expand_four<T: Clone>(values: &[T]) -> Option<[T; 4]> {
    match values {
        [a] => Some([a.clone(), a.clone(), a.clone(), a.clone()]),
        [a, b] => Some([a.clone(), b.clone(), a.clone(), b.clone()]),
        [a, b, c] => Some([a.clone(), b.clone(), c.clone(), b.clone()]),
        [a, b, c, d] => Some([a.clone(), b.clone(), c.clone(), d.clone()]),
        _ => None,
    }
}

/// Number of values the shortest shorthand form of `values` needs.
pub(crate) fn shortest_len<T: PartialEq>(values: &[T; 4]) -> usize {
    let [a, b, c, d] = values;
    if b != d {
        4
    } else if a != c {
        3
    } else if a != b {
        2
    } else {
        1
    }
}

/// Write the shortest space-separated form of four clockwise values.
pub(crate) fn write_shortest<T: fmt::Display + PartialEq>(
    f: &mut fmt::Formatter<'_>,
    values: &[T; 4],
) -> fmt::Result {
    for (i, value) in values.iter().take(shortest_len(values)).enumerate() {
        if i > 0 {
            f.write_str(" ")?;
        }
        write!(f, "{value}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expansion_table() {
        assert_eq!(expand_four(&[1]), Some([1, 1, 1, 1]));
        assert_eq!(expand_four(&[1, 2]), Some([1, 2, 1, 2]));
        assert_eq!(expand_four(&[1, 2, 3]), Some([1, 2, 3, 2]));
        assert_eq!(expand_four(&[1, 2, 3, 4]), Some([1, 2, 3, 4]));
        assert_eq!(expand_four::<u8>(&[]), None);
        assert_eq!(expand_four(&[1, 2, 3, 4, 5]), None);
    }

    #[test]
    fn shortest_form_expands_back() {
        for values in [[1, 1, 1, 1], [1, 2, 1, 2], [1, 2, 3, 2], [1, 2, 3, 4], [1, 1, 2, 1]] {
            let n = shortest_len(&values);
            assert_eq!(expand_four(&values[..n]), Some(values));
        }
    }

    #[test]
    fn edges_display() {
        assert_eq!(Edges::all(3).to_string(), "3");
        assert_eq!(Edges::expand(&[1, 2, 3]).unwrap().to_string(), "1 2 3");
    }
}
