//! Declaration parse errors.
//!
//! [CSS 2.1 § 4.2 Rules for handling parsing errors](https://www.w3.org/TR/CSS2/syndata.html#parsing-errors)
//!
//! "User agents must ignore a declaration with an illegal value."
//!
//! None of these errors escape a declaration: the registry turns them into
//! [`ParseOutcome::Rejected`](crate::parser::ParseOutcome) and the target
//! [`BoxProperties`](crate::style::BoxProperties) keeps its prior values.

use thiserror::Error;

use crate::tokenizer::Token;

/// Why a declaration value was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A token of the wrong kind appeared where a value was expected.
    #[error("expected {expected}, found {found}")]
    UnexpectedToken {
        /// Human readable description of what the grammar wanted.
        expected: &'static str,
        /// The offending token, serialized back to CSS text.
        found: String,
    },

    /// The grammar matched but tokens were left over.
    #[error("unexpected trailing token '{0}'")]
    TrailingTokens(String),

    /// The value was empty (only whitespace before the end of the value).
    #[error("empty value")]
    EmptyValue,

    /// A numeric token could not be used as a length here.
    #[error("invalid length '{0}'")]
    InvalidLength(String),

    /// A color token or function was malformed.
    #[error("invalid color '{0}'")]
    InvalidColor(String),

    /// An identifier is not a keyword of this property.
    #[error("invalid keyword '{0}'")]
    InvalidKeyword(String),

    /// The property name is not handled by any parser.
    #[error("unknown property '{0}'")]
    UnknownProperty(String),

    /// A parsed value belongs to a different family than the slot it targets.
    #[error("value does not fit property '{0}'")]
    MismatchedValue(String),

    /// More values were given than the property accepts.
    #[error("too many values (at most {max})")]
    TooManyValues {
        /// Maximum number of values the grammar allows.
        max: usize,
    },

    /// A keyword that may only appear once appeared again.
    #[error("keyword '{0}' given more than once")]
    DuplicateKeyword(String),
}

impl ParseError {
    /// Build an [`ParseError::UnexpectedToken`] for `token`, or for the end
    /// of the value when `token` is `None`.
    #[must_use]
    pub fn unexpected(expected: &'static str, token: Option<&Token>) -> Self {
        Self::UnexpectedToken {
            expected,
            found: token.map_or_else(|| "end of value".to_string(), ToString::to_string),
        }
    }
}

/// Result alias used by every property parser.
pub type ParseResult<T> = Result<T, ParseError>;
