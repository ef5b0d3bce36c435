//! Font, text and generated content values.
//!
//! - [CSS 2.1 § 15 Fonts](https://www.w3.org/TR/CSS2/fonts.html)
//! - [CSS 2.1 § 16 Text](https://www.w3.org/TR/CSS2/text.html)
//! - [CSS 2.1 § 12 Generated content](https://www.w3.org/TR/CSS2/generate.html)

use core::fmt;

use serde::Serialize;
use strum_macros::{Display, EnumString};

use crate::values::Length;

use super::Inheritable;
use super::background::write_comma_list;

/// [§ 15.3 Font family](https://www.w3.org/TR/CSS2/fonts.html#generic-font-families)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, EnumString, Display)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[serde(rename_all = "kebab-case")]
pub enum GenericFamily {
    /// "Glyphs of serif fonts [...] have finishing strokes"
    Serif,
    /// "Glyphs in sans-serif fonts [...] have stroke endings that are plain"
    SansSerif,
    /// "Glyphs in cursive fonts [...] generally have either joining strokes
    /// or other cursive characteristics beyond those of italic typefaces."
    Cursive,
    /// "Fantasy fonts [...] are primarily decorative while still containing
    /// representations of characters"
    Fantasy,
    /// "The sole criterion of a monospace font is that all glyphs have the
    /// same fixed width."
    Monospace,
}

/// One entry of a `font-family` list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FamilyName {
    /// A generic family keyword.
    Generic(GenericFamily),
    /// "The name of a font family of choice."
    Named(String),
}

impl fmt::Display for FamilyName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Generic(g) => write!(f, "{g}"),
            Self::Named(name) => write_css_string(f, name),
        }
    }
}

/// [§ 15.3 'font-family'](https://www.w3.org/TR/CSS2/fonts.html#font-family-prop)
///
/// "Value: `[[ <family-name> | <generic-family> ] [, <family-name>|
/// <generic-family>]* ] | inherit`" "Inherited: yes"
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FontFamily {
    /// `inherit`
    Inherit,
    /// "a prioritized list of font family names and/or generic family names"
    Families(Vec<FamilyName>),
}

impl Inheritable for FontFamily {
    fn initial() -> Self {
        Self::Families(vec![FamilyName::Generic(GenericFamily::Serif)])
    }

    fn is_inherit(&self) -> bool {
        matches!(self, Self::Inherit)
    }
}

impl fmt::Display for FontFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inherit => f.write_str("inherit"),
            Self::Families(families) => write_comma_list(f, families),
        }
    }
}

/// [§ 15.7 Font size](https://www.w3.org/TR/CSS2/fonts.html#font-size-props)
///
/// "`<absolute-size>`: An `<absolute-size>` keyword is an index to a table
/// of font sizes computed and kept by the UA."
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, EnumString, Display)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[serde(rename_all = "kebab-case")]
#[allow(missing_docs)]
pub enum AbsoluteSize {
    XxSmall,
    XSmall,
    Small,
    Medium,
    Large,
    XLarge,
    XxLarge,
}

/// [§ 15.7 'font-size'](https://www.w3.org/TR/CSS2/fonts.html#font-size-props)
///
/// "Initial: medium" "Inherited: yes"
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FontSize {
    /// `inherit`
    Inherit,
    /// An `<absolute-size>` keyword.
    Absolute(AbsoluteSize),
    /// "`<relative-size>`: [...] interpreted relative to the table of font
    /// sizes and the font size of the parent element."
    Larger,
    /// See [`FontSize::Larger`].
    Smaller,
    /// "A length value specifies an absolute font size"
    Length(Length),
    /// "A percentage value specifies an absolute font size relative to the
    /// parent element's font size."
    Percentage(f32),
}

impl Inheritable for FontSize {
    fn initial() -> Self {
        Self::Absolute(AbsoluteSize::Medium)
    }

    fn is_inherit(&self) -> bool {
        matches!(self, Self::Inherit)
    }
}

impl fmt::Display for FontSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inherit => f.write_str("inherit"),
            Self::Absolute(size) => write!(f, "{size}"),
            Self::Larger => f.write_str("larger"),
            Self::Smaller => f.write_str("smaller"),
            Self::Length(l) => fmt::Display::fmt(l, f),
            Self::Percentage(p) => write!(f, "{p}%"),
        }
    }
}

/// [§ 15.4 Font styling](https://www.w3.org/TR/CSS2/fonts.html#font-styling)
///
/// "Initial: normal" "Inherited: yes"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, EnumString, Display)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[serde(rename_all = "kebab-case")]
pub enum FontStyle {
    /// `inherit`
    Inherit,
    /// "selects a font that is classified as 'normal' in the UA's font database"
    Normal,
    /// "selects a font that is labeled 'italic'"
    Italic,
    /// "selects a font that is labeled 'oblique'"
    Oblique,
}

impl Inheritable for FontStyle {
    fn initial() -> Self {
        Self::Normal
    }

    fn is_inherit(&self) -> bool {
        matches!(self, Self::Inherit)
    }
}

/// [§ 15.6 Font boldness](https://www.w3.org/TR/CSS2/fonts.html#font-boldness)
///
/// "Value: normal | bold | bolder | lighter | 100 | 200 | 300 | 400 | 500 |
/// 600 | 700 | 800 | 900 | inherit"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FontWeight {
    /// `inherit`
    Inherit,
    /// "'normal' is synonymous with '400'"
    Normal,
    /// "'bold' is synonymous with '700'"
    Bold,
    /// "specifies the next weight that is assigned to a font that is darker
    /// than the inherited one"
    Bolder,
    /// "specifies the next weight that is assigned to a font that is lighter
    /// than the inherited one"
    Lighter,
    /// One of 100, 200, ..., 900.
    Numeric(u16),
}

impl Inheritable for FontWeight {
    fn initial() -> Self {
        Self::Normal
    }

    fn is_inherit(&self) -> bool {
        matches!(self, Self::Inherit)
    }
}

impl fmt::Display for FontWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inherit => f.write_str("inherit"),
            Self::Normal => f.write_str("normal"),
            Self::Bold => f.write_str("bold"),
            Self::Bolder => f.write_str("bolder"),
            Self::Lighter => f.write_str("lighter"),
            Self::Numeric(weight) => write!(f, "{weight}"),
        }
    }
}

/// [§ 16.3.1 Underlining, overlining, striking, and blinking](https://www.w3.org/TR/CSS2/text.html#lining-striking-props)
///
/// "Value: none | [ underline || overline || line-through || blink ] | inherit"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextDecoration {
    /// `inherit`
    Inherit,
    /// "Produces no text decoration."
    None,
    /// At least one of the line kinds, each given at most once.
    Lines {
        /// "Each line of text is underlined."
        underline: bool,
        /// "Each line of text has a line above it."
        overline: bool,
        /// "Each line of text has a line through the middle."
        line_through: bool,
        /// "Text blinks (alternates between visible and invisible)."
        blink: bool,
    },
}

impl Inheritable for TextDecoration {
    fn initial() -> Self {
        Self::None
    }

    fn is_inherit(&self) -> bool {
        matches!(self, Self::Inherit)
    }
}

impl fmt::Display for TextDecoration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inherit => f.write_str("inherit"),
            Self::None => f.write_str("none"),
            Self::Lines {
                underline,
                overline,
                line_through,
                blink,
            } => {
                let lines = [
                    (*underline, "underline"),
                    (*overline, "overline"),
                    (*line_through, "line-through"),
                    (*blink, "blink"),
                ];
                let names: Vec<&str> = lines
                    .iter()
                    .filter(|(set, _)| *set)
                    .map(|(_, name)| *name)
                    .collect();
                f.write_str(&names.join(" "))
            }
        }
    }
}

/// [§ 12.6.2 Lists: the 'list-style-type' property](https://www.w3.org/TR/CSS2/generate.html#propdef-list-style-type)
///
/// "Initial: disc" "Inherited: yes"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, EnumString, Display)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[serde(rename_all = "kebab-case")]
#[allow(missing_docs)]
pub enum ListStyleType {
    Inherit,
    Disc,
    Circle,
    Square,
    Decimal,
    DecimalLeadingZero,
    LowerRoman,
    UpperRoman,
    LowerGreek,
    UpperGreek,
    LowerLatin,
    UpperLatin,
    LowerAlpha,
    UpperAlpha,
    Armenian,
    Georgian,
    None,
}

impl Inheritable for ListStyleType {
    fn initial() -> Self {
        Self::Disc
    }

    fn is_inherit(&self) -> bool {
        matches!(self, Self::Inherit)
    }
}

/// [§ 10.8.1 'vertical-align'](https://www.w3.org/TR/CSS2/visudet.html#propdef-vertical-align)
/// keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, EnumString, Display)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[serde(rename_all = "kebab-case")]
pub enum VerticalAlignKeyword {
    /// "Align the baseline of the box with the baseline of the parent box."
    Baseline,
    /// "Lower the baseline of the box to the proper position for subscripts
    /// of the parent's box."
    Sub,
    /// "Raise the baseline of the box to the proper position for superscripts
    /// of the parent's box."
    Super,
    /// "Align the top of the aligned subtree with the top of the line box."
    Top,
    /// "Align the top of the box with the top of the parent's content area"
    TextTop,
    /// "Align the vertical midpoint of the box with the baseline of the
    /// parent box plus half the x-height of the parent."
    Middle,
    /// "Align the bottom of the aligned subtree with the bottom of the line box."
    Bottom,
    /// "Align the bottom of the box with the bottom of the parent's content area"
    TextBottom,
}

/// [§ 10.8.1 'vertical-align'](https://www.w3.org/TR/CSS2/visudet.html#propdef-vertical-align)
///
/// "Initial: baseline"
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum VerticalAlign {
    /// `inherit`
    Inherit,
    /// A positioning keyword.
    Keyword(VerticalAlignKeyword),
    /// "Raise (positive value) or lower (negative value) the box by this distance."
    Length(Length),
    /// "Raise (positive value) or lower (negative value) the box by this
    /// distance (a percentage of the 'line-height' value)."
    Percentage(f32),
}

impl Inheritable for VerticalAlign {
    fn initial() -> Self {
        Self::Keyword(VerticalAlignKeyword::Baseline)
    }

    fn is_inherit(&self) -> bool {
        matches!(self, Self::Inherit)
    }
}

impl fmt::Display for VerticalAlign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inherit => f.write_str("inherit"),
            Self::Keyword(k) => write!(f, "{k}"),
            Self::Length(l) => fmt::Display::fmt(l, f),
            Self::Percentage(p) => write!(f, "{p}%"),
        }
    }
}

/// One component of a `content` value.
///
/// [§ 12.2 The 'content' property](https://www.w3.org/TR/CSS2/generate.html#content)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContentItem {
    /// "Text content"
    String(String),
    /// "The value is a URI that designates an external resource"
    Url(String),
    /// "`counter(name)` or `counter(name, style)`"
    Counter {
        /// The counter name.
        name: String,
        /// "The default style is 'decimal'."
        style: ListStyleType,
    },
    /// "`counters(name, string)` or `counters(name, string, style)`"
    Counters {
        /// The counter name.
        name: String,
        /// Inserted between the values of nested counters.
        separator: String,
        /// Numbering style.
        style: ListStyleType,
    },
    /// "This function returns as a string the value of attribute X for the
    /// subject of the selector."
    Attr(String),
    /// `open-quote`
    OpenQuote,
    /// `close-quote`
    CloseQuote,
    /// `no-open-quote`
    NoOpenQuote,
    /// `no-close-quote`
    NoCloseQuote,
}

impl fmt::Display for ContentItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => write_css_string(f, s),
            Self::Url(url) => {
                f.write_str("url(")?;
                write_css_string(f, url)?;
                f.write_str(")")
            }
            Self::Counter { name, style } => {
                write!(f, "counter({name}")?;
                if *style != ListStyleType::Decimal {
                    write!(f, ", {style}")?;
                }
                f.write_str(")")
            }
            Self::Counters {
                name,
                separator,
                style,
            } => {
                write!(f, "counters({name}, ")?;
                write_css_string(f, separator)?;
                if *style != ListStyleType::Decimal {
                    write!(f, ", {style}")?;
                }
                f.write_str(")")
            }
            Self::Attr(name) => write!(f, "attr({name})"),
            Self::OpenQuote => f.write_str("open-quote"),
            Self::CloseQuote => f.write_str("close-quote"),
            Self::NoOpenQuote => f.write_str("no-open-quote"),
            Self::NoCloseQuote => f.write_str("no-close-quote"),
        }
    }
}

/// [§ 12.2 The 'content' property](https://www.w3.org/TR/CSS2/generate.html#content)
///
/// "Value: normal | none | [ `<string>` | `<uri>` | `<counter>` | attr(`<identifier>`)
/// | open-quote | close-quote | no-open-quote | no-close-quote ]+ | inherit"
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Content {
    /// `inherit`
    Inherit,
    /// "computes to 'none' for the :before and :after pseudo-elements"
    Normal,
    /// "The pseudo-element is not generated."
    None,
    /// Space-separated content items, in order.
    Items(Vec<ContentItem>),
}

impl Inheritable for Content {
    fn initial() -> Self {
        Self::Normal
    }

    fn is_inherit(&self) -> bool {
        matches!(self, Self::Inherit)
    }
}

impl fmt::Display for Content {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inherit => f.write_str("inherit"),
            Self::Normal => f.write_str("normal"),
            Self::None => f.write_str("none"),
            Self::Items(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{item}")?;
                }
                Ok(())
            }
        }
    }
}

/// Double-quoted string with `"` and `\` escaped.
pub(super) fn write_css_string(f: &mut fmt::Formatter<'_>, value: &str) -> fmt::Result {
    f.write_str("\"")?;
    for c in value.chars() {
        if matches!(c, '"' | '\\') {
            f.write_str("\\")?;
        }
        write!(f, "{c}")?;
    }
    f.write_str("\"")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_decoration_lists_lines_in_order() {
        let decoration = TextDecoration::Lines {
            underline: true,
            overline: false,
            line_through: true,
            blink: false,
        };
        assert_eq!(decoration.to_string(), "underline line-through");
    }

    #[test]
    fn content_serializes_functions() {
        let content = Content::Items(vec![
            ContentItem::String("Ch. \"1\"".to_string()),
            ContentItem::Counter {
                name: "chapter".to_string(),
                style: ListStyleType::UpperRoman,
            },
            ContentItem::Attr("title".to_string()),
        ]);
        assert_eq!(
            content.to_string(),
            r#""Ch. \"1\"" counter(chapter, upper-roman) attr(title)"#
        );
    }

    #[test]
    fn family_names_are_quoted() {
        let family = FontFamily::Families(vec![
            FamilyName::Named("Times New Roman".to_string()),
            FamilyName::Generic(GenericFamily::SansSerif),
        ]);
        assert_eq!(family.to_string(), "\"Times New Roman\", sans-serif");
    }
}
