//! CSS Token types per [§ 4 Tokenization](https://www.w3.org/TR/css-syntax-3/#tokenization).
//!
//! The engine only ever sees the tokens of a single declaration value, so the
//! token set is narrower than the full syntax module: colons, semicolons,
//! commas, slashes and brackets all arrive as [`Token::Delim`], and the value
//! always ends with a [`Token::Null`] sentinel.

use core::fmt;

/// A single token of a declaration value.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// "`<ident-token>`"
    /// "has a value composed of one or more code points"
    Ident(String),

    /// "`<function-token>`"
    /// The function name, without the trailing `(`.
    Function(String),

    /// "`<hash-token>`"
    /// The value after the `#`.
    Hash(String),

    /// "`<string-token>`"
    /// The unescaped string contents, without quotes.
    String(String),

    /// "`<bad-string-token>`"
    /// A string broken by an unescaped newline. No property accepts it.
    BadString,

    /// "`<url-token>`"
    /// The unescaped URL inside `url(...)`.
    Url(String),

    /// "`<bad-url-token>`"
    /// An unquoted `url(` whose contents are malformed. No property accepts it.
    BadUrl,

    /// "`<number-token>`"
    Number(f32),

    /// "`<percentage-token>`"
    /// The number in front of the `%`.
    Percentage(f32),

    /// "`<dimension-token>`"
    /// "has a numeric value, a type flag, and a unit"
    Dimension {
        /// "a numeric value"
        value: f32,
        /// "a unit"
        unit: String,
    },

    /// "`<delim-token>`"
    /// "has a value composed of a single code point"
    Delim(char),

    /// "`<whitespace-token>`"
    Whitespace,

    /// End of the declaration value.
    Null,
}

impl Token {
    /// Create a new ident token.
    #[must_use]
    pub fn ident(value: impl Into<String>) -> Self {
        Self::Ident(value.into())
    }

    /// Create a new dimension token.
    #[must_use]
    pub fn dimension(value: f32, unit: impl Into<String>) -> Self {
        Self::Dimension {
            value,
            unit: unit.into(),
        }
    }

    /// Returns true for number, percentage and dimension tokens.
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        matches!(
            self,
            Self::Number(_) | Self::Percentage(_) | Self::Dimension { .. }
        )
    }

    /// Returns true if this is a whitespace token.
    #[must_use]
    pub const fn is_whitespace(&self) -> bool {
        matches!(self, Self::Whitespace)
    }

    /// Returns true if this token ends the value.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns true if this is an ident equal to `keyword`, ignoring ASCII case.
    #[must_use]
    pub fn is_ident(&self, keyword: &str) -> bool {
        matches!(self, Self::Ident(v) if v.eq_ignore_ascii_case(keyword))
    }

    /// The same numeric token with its sign flipped, or `None` for
    /// non-numeric tokens.
    #[must_use]
    pub fn negated(&self) -> Option<Self> {
        match self {
            Self::Number(v) => Some(Self::Number(-v)),
            Self::Percentage(v) => Some(Self::Percentage(-v)),
            Self::Dimension { value, unit } => Some(Self::Dimension {
                value: -value,
                unit: unit.clone(),
            }),
            _ => None,
        }
    }
}

/// Serializes the token back to CSS text.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ident(v) => f.write_str(v),
            Self::Function(v) => write!(f, "{v}("),
            Self::Hash(v) => write!(f, "#{v}"),
            Self::String(v) => write!(f, "\"{}\"", v.replace('"', "\\\"")),
            Self::BadString => f.write_str("\""),
            Self::Url(v) => write!(f, "url({v})"),
            Self::BadUrl => f.write_str("url()"),
            Self::Number(v) => write!(f, "{v}"),
            Self::Percentage(v) => write!(f, "{v}%"),
            Self::Dimension { value, unit } => write!(f, "{value}{unit}"),
            Self::Delim(c) => write!(f, "{c}"),
            Self::Whitespace => f.write_str(" "),
            Self::Null => Ok(()),
        }
    }
}
