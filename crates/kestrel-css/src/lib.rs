//! CSS value parsing and box-model resolution for the Kestrel engine.
//!
//! # Scope
//!
//! This crate implements:
//! - **Tokenizer** ([§ 4 Tokenization](https://www.w3.org/TR/css-syntax-3/#tokenization))
//!   - The tokens of a single declaration value, signs fused into numbers
//!
//! - **Property parsers** ([CSS 2.1 § 4.1.8](https://www.w3.org/TR/CSS2/syndata.html#declaration))
//!   - One parser per property family, routed through a closed registry
//!   - Shorthand expansion for margin, padding, border, outline and border-radius
//!   - Rejection of malformed declarations without touching the target
//!
//! - **Computed values** ([CSS 2.1 § 6](https://www.w3.org/TR/CSS2/cascade.html))
//!   - A sum type per property family, with `inherit` resolution
//!   - `display` blockification per § 9.7
//!
//! - **Margin collapsing** ([CSS 2.1 § 8.3.1](https://www.w3.org/TR/CSS2/box.html#collapsing-margins))
//!   - Arena box tree, formatting contexts, adjoining-margin detection
//!
//! # Not Implemented
//!
//! - Selectors, the cascade and specificity
//! - Layout beyond the values margin collapsing needs
//! - Painting

/// Declaration parse errors per [CSS 2.1 § 4.2](https://www.w3.org/TR/CSS2/syndata.html#parsing-errors).
pub mod error;
/// Box tree and margin collapsing per [CSS 2.1 § 8.3.1](https://www.w3.org/TR/CSS2/box.html#collapsing-margins).
pub mod layout;
/// Property parser registry and shorthand expansion.
pub mod parser;
/// Computed-value types per [CSS 2.1 § 6](https://www.w3.org/TR/CSS2/cascade.html).
pub mod style;
/// CSS tokenizer per [§ 4 Tokenization](https://www.w3.org/TR/css-syntax-3/#tokenization).
pub mod tokenizer;
/// Primitive values shared by the property families: lengths, colors, sides.
pub mod values;

pub use error::{ParseError, ParseResult};
pub use layout::{LayoutContext, LayoutTree, collapse_margins};
pub use parser::{ParseOutcome, apply_declaration, parse_declaration_block, parse_property};
pub use style::{BoxProperties, ComputedValue, PropertyName};
