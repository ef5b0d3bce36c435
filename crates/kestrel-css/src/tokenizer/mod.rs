//! CSS tokenizer module.

/// Forward-only cursor over a declaration's tokens.
pub mod stream;
/// CSS token types.
pub mod token;
/// CSS tokenizer implementation.
pub mod tokenizer;

pub use stream::TokenStream;
pub use token::Token;
pub use tokenizer::CSSTokenizer;
