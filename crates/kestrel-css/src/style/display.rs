//! Visual formatting keywords and display blockification.
//!
//! [CSS 2.1 § 9 Visual formatting model](https://www.w3.org/TR/CSS2/visuren.html)

use serde::Serialize;
use strum_macros::EnumString;

use super::Inheritable;

/// [§ 9.2.4 The 'display' property](https://www.w3.org/TR/CSS2/visuren.html#display-prop)
///
/// "Initial: inline"
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, EnumString, strum_macros::Display,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[serde(rename_all = "kebab-case")]
pub enum Display {
    /// `inherit`
    Inherit,
    /// "This value causes an element to generate one or more inline boxes."
    Inline,
    /// "This value causes an element to generate a block box."
    Block,
    /// "This value causes an element (e.g., LI in HTML) to generate a principal
    /// block box and a marker box."
    ListItem,
    /// "This value creates either block or inline boxes, depending on context."
    RunIn,
    /// "This value causes an element to generate an inline-level block container."
    InlineBlock,
    /// "Specifies that an element defines a block-level table."
    Table,
    /// "Specifies that an element defines an inline-level table."
    InlineTable,
    /// "Specifies that an element groups one or more rows."
    TableRowGroup,
    /// "Like 'table-row-group', but for visual formatting, the row group is
    /// always displayed before all other rows and row groups."
    TableHeaderGroup,
    /// "Like 'table-row-group', but for visual formatting, the row group is
    /// always displayed after all other rows and row groups."
    TableFooterGroup,
    /// "Specifies that an element is a row of cells."
    TableRow,
    /// "Specifies that an element groups one or more columns."
    TableColumnGroup,
    /// "Specifies that an element describes a column of cells."
    TableColumn,
    /// "Specifies that an element represents a table cell."
    TableCell,
    /// "Specifies a caption for the table."
    TableCaption,
    /// "This value causes an element to not appear in the formatting structure."
    None,
}

impl Display {
    /// [§ 9.7 Relationships between 'display', 'position', and 'float'](https://www.w3.org/TR/CSS2/visuren.html#dis-pos-flo)
    ///
    /// Resolve `inherit`, then blockify. `float` is forced to `none` for
    /// absolutely positioned boxes. `position` and `float` must already be
    /// computed.
    ///
    /// "1. If 'display' has the value 'none', then 'position' and 'float' do
    /// not apply."
    /// "2. Otherwise, if 'position' has the value 'absolute' or 'fixed', the box
    /// is absolutely positioned, the computed value of 'float' is 'none', and
    /// display is set according to the table below."
    /// "3. Otherwise, if 'float' has a value other than 'none', the box is
    /// floated and 'display' is set according to the table below."
    /// "4. Otherwise, if the element is the root element, 'display' is set
    /// according to the table below."
    pub fn compute(&mut self, parent: Option<&Self>, position: Position, float: &mut Float) {
        Inheritable::compute(self, parent);
        if *self == Self::None {
            return;
        }
        let absolutely_positioned = position.is_absolutely_positioned();
        if absolutely_positioned {
            *float = Float::None;
        }
        if absolutely_positioned || float.is_floating() || parent.is_none() {
            *self = self.apply_table_9_7();
        }
    }

    /// The "Specified value → Computed value" table of § 9.7.
    ///
    /// "inline-table → table; inline, table-row-group, table-column,
    /// table-column-group, table-header-group, table-footer-group, table-row,
    /// table-cell, table-caption, inline-block → block; others → same as
    /// specified"
    #[must_use]
    pub const fn apply_table_9_7(self) -> Self {
        match self {
            Self::InlineTable => Self::Table,
            Self::Inline
            | Self::RunIn
            | Self::TableRowGroup
            | Self::TableColumn
            | Self::TableColumnGroup
            | Self::TableHeaderGroup
            | Self::TableFooterGroup
            | Self::TableRow
            | Self::TableCell
            | Self::TableCaption
            | Self::InlineBlock => Self::Block,
            other => other,
        }
    }

    /// [§ 9.2.1 Block-level elements and block boxes](https://www.w3.org/TR/CSS2/visuren.html#block-boxes)
    ///
    /// "The following values of the 'display' property make an element
    /// block-level: 'block', 'list-item', and 'table'."
    #[must_use]
    pub const fn is_block_level(self) -> bool {
        matches!(self, Self::Block | Self::ListItem | Self::Table)
    }
}

impl Inheritable for Display {
    fn initial() -> Self {
        Self::Inline
    }

    fn is_inherit(&self) -> bool {
        matches!(self, Self::Inherit)
    }
}

/// [§ 9.3.1 Choosing a positioning scheme](https://www.w3.org/TR/CSS2/visuren.html#choose-position)
///
/// "Initial: static"
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, EnumString, strum_macros::Display,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[serde(rename_all = "kebab-case")]
pub enum Position {
    /// `inherit`
    Inherit,
    /// "The box is a normal box, laid out according to the normal flow."
    Static,
    /// "The box's position is calculated according to the normal flow. Then
    /// the box is offset relative to its normal position."
    Relative,
    /// "The box's position (and possibly size) is specified with the 'top',
    /// 'right', 'bottom', and 'left' properties."
    Absolute,
    /// "The box's position is calculated according to the 'absolute' model,
    /// but in addition, the box is fixed with respect to some reference."
    Fixed,
}

impl Position {
    /// `absolute` or `fixed`.
    #[must_use]
    pub const fn is_absolutely_positioned(self) -> bool {
        matches!(self, Self::Absolute | Self::Fixed)
    }
}

impl Inheritable for Position {
    fn initial() -> Self {
        Self::Static
    }

    fn is_inherit(&self) -> bool {
        matches!(self, Self::Inherit)
    }
}

/// [§ 9.5.1 Positioning the float](https://www.w3.org/TR/CSS2/visuren.html#float-position)
///
/// "Initial: none"
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, EnumString, strum_macros::Display,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[serde(rename_all = "kebab-case")]
pub enum Float {
    /// `inherit`
    Inherit,
    /// "The box is not floated."
    None,
    /// "The element generates a block box that is floated to the left."
    Left,
    /// "Similar to 'left', except the box is floated to the right."
    Right,
}

impl Float {
    /// `left` or `right`.
    #[must_use]
    pub const fn is_floating(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }
}

impl Inheritable for Float {
    fn initial() -> Self {
        Self::None
    }

    fn is_inherit(&self) -> bool {
        matches!(self, Self::Inherit)
    }
}

/// [§ 9.5.2 Controlling flow next to floats](https://www.w3.org/TR/CSS2/visuren.html#flow-control)
///
/// "Initial: none"
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, EnumString, strum_macros::Display,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[serde(rename_all = "kebab-case")]
pub enum Clear {
    /// `inherit`
    Inherit,
    /// "No constraint on the box's position with respect to floats."
    None,
    /// "Requires that the top border edge of the box be below the bottom
    /// outer edge of any left-floating boxes."
    Left,
    /// "Requires that the top border edge of the box be below the bottom
    /// outer edge of any right-floating boxes."
    Right,
    /// "Requires that the top border edge of the box be below the bottom
    /// outer edge of any right-floating and left-floating boxes."
    Both,
}

impl Inheritable for Clear {
    fn initial() -> Self {
        Self::None
    }

    fn is_inherit(&self) -> bool {
        matches!(self, Self::Inherit)
    }
}

/// [§ 11.1.1 Overflow](https://www.w3.org/TR/CSS2/visufx.html#overflow)
///
/// "Initial: visible"
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, EnumString, strum_macros::Display,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[serde(rename_all = "kebab-case")]
pub enum Overflow {
    /// `inherit`
    Inherit,
    /// "This value indicates that content is not clipped."
    Visible,
    /// "This value indicates that the content is clipped and that no
    /// scrolling user interface should be provided."
    Hidden,
    /// "This value indicates that the content is clipped and that if the user
    /// agent uses a scrolling mechanism, it should be available."
    Scroll,
    /// "The behavior of the 'auto' value is user agent-dependent."
    Auto,
}

impl Inheritable for Overflow {
    fn initial() -> Self {
        Self::Visible
    }

    fn is_inherit(&self) -> bool {
        matches!(self, Self::Inherit)
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn table_9_7_mapping() {
        assert_eq!(Display::InlineTable.apply_table_9_7(), Display::Table);
        assert_eq!(Display::TableCell.apply_table_9_7(), Display::Block);
        assert_eq!(Display::ListItem.apply_table_9_7(), Display::ListItem);
        assert_eq!(Display::None.apply_table_9_7(), Display::None);
    }

    #[test]
    fn root_is_blockified() {
        let mut display = Display::InlineBlock;
        let mut float = Float::None;
        display.compute(None, Position::Static, &mut float);
        assert_eq!(display, Display::Block);
    }

    #[test]
    fn absolute_position_clears_float() {
        let mut display = Display::Inline;
        let mut float = Float::Left;
        display.compute(Some(&Display::Block), Position::Fixed, &mut float);
        assert_eq!(display, Display::Block);
        assert_eq!(float, Float::None);
    }

    #[test]
    fn none_is_never_blockified() {
        let mut display = Display::None;
        let mut float = Float::Right;
        display.compute(None, Position::Absolute, &mut float);
        assert_eq!(display, Display::None);
        assert_eq!(float, Float::Right);
    }

    #[test]
    fn keywords_parse_case_insensitively() {
        assert_eq!(Display::from_str("Table-Row-Group").ok(), Some(Display::TableRowGroup));
        assert_eq!(Display::TableHeaderGroup.to_string(), "table-header-group");
    }
}
