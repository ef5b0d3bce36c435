//! Positional cursor over the tokens of one declaration value.

use crate::error::{ParseError, ParseResult};

use super::token::Token;

/// A forward-only view of a declaration value.
///
/// Whitespace between component values is skipped by [`peek`](Self::peek)
/// and [`Iterator::next`]; tokens are never revisited once passed. The
/// stream ends at the first [`Token::Null`] or at the end of the slice,
/// whichever comes first.
#[derive(Debug, Clone)]
pub struct TokenStream<'a> {
    tokens: &'a [Token],
    position: usize,
}

impl<'a> TokenStream<'a> {
    /// Create a stream over `tokens`.
    #[must_use]
    pub const fn new(tokens: &'a [Token]) -> Self {
        Self {
            tokens,
            position: 0,
        }
    }

    /// The next significant token, without consuming it.
    pub fn peek(&mut self) -> Option<&'a Token> {
        self.skip_whitespace();
        self.raw_at(self.position)
    }

    /// The token directly after the one [`peek`](Self::peek) returns, with
    /// no whitespace skipped in between.
    ///
    /// Used to recognize a detached sign: `-` immediately followed by a number.
    pub fn peek_adjacent(&mut self) -> Option<&'a Token> {
        self.skip_whitespace();
        self.raw_at(self.position + 1)
    }

    /// Consume the next token without skipping whitespace first.
    pub fn next_raw(&mut self) -> Option<&'a Token> {
        let token = self.raw_at(self.position)?;
        self.position += 1;
        Some(token)
    }

    /// Consume the next significant token and discard it.
    pub fn advance(&mut self) {
        let _ = self.next();
    }

    /// Consume the next token if it is the delimiter `c`.
    pub fn eat_delim(&mut self, c: char) -> bool {
        if matches!(self.peek(), Some(Token::Delim(d)) if *d == c) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume the next token if it is the ident `keyword` (ASCII case-insensitive).
    pub fn eat_ident(&mut self, keyword: &str) -> bool {
        if self.peek().is_some_and(|t| t.is_ident(keyword)) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// True when only whitespace remains.
    pub fn is_exhausted(&mut self) -> bool {
        self.peek().is_none()
    }

    /// True when the whole remaining value is the single ident `keyword`.
    ///
    /// Does not consume anything.
    pub fn is_sole_keyword(&mut self, keyword: &str) -> bool {
        let mut lookahead = self.clone();
        lookahead.eat_ident(keyword) && lookahead.is_exhausted()
    }

    /// Fail with [`ParseError::TrailingTokens`] unless the stream is exhausted.
    ///
    /// # Errors
    ///
    /// Returns the first unconsumed token.
    pub fn expect_exhausted(&mut self) -> ParseResult<()> {
        match self.peek() {
            None => Ok(()),
            Some(token) => Err(ParseError::TrailingTokens(token.to_string())),
        }
    }

    /// Fail with [`ParseError::EmptyValue`] if nothing but whitespace remains.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::EmptyValue`] for an empty value.
    pub fn expect_not_empty(&mut self) -> ParseResult<()> {
        if self.is_exhausted() {
            Err(ParseError::EmptyValue)
        } else {
            Ok(())
        }
    }

    fn skip_whitespace(&mut self) {
        while self.raw_at(self.position).is_some_and(Token::is_whitespace) {
            self.position += 1;
        }
    }

    fn raw_at(&self, index: usize) -> Option<&'a Token> {
        self.tokens.get(index).filter(|t| !t.is_null())
    }
}

impl<'a> Iterator for TokenStream<'a> {
    type Item = &'a Token;

    fn next(&mut self) -> Option<Self::Item> {
        self.skip_whitespace();
        self.next_raw()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::CSSTokenizer;

    #[test]
    fn skips_whitespace_and_stops_at_null() {
        let tokens = CSSTokenizer::tokenize("  1px   solid  ");
        let mut stream = TokenStream::new(&tokens);
        assert_eq!(stream.next(), Some(&Token::dimension(1.0, "px")));
        assert_eq!(stream.next(), Some(&Token::ident("solid")));
        assert!(stream.is_exhausted());
        assert_eq!(stream.next(), None);
    }

    #[test]
    fn detects_sole_keyword_without_consuming() {
        let tokens = CSSTokenizer::tokenize(" INHERIT ");
        let mut stream = TokenStream::new(&tokens);
        assert!(stream.is_sole_keyword("inherit"));
        assert_eq!(stream.peek(), Some(&Token::ident("INHERIT")));

        let tokens = CSSTokenizer::tokenize("inherit 1px");
        assert!(!TokenStream::new(&tokens).is_sole_keyword("inherit"));
    }

    #[test]
    fn adjacent_token_ignores_following_whitespace_rules() {
        let tokens = vec![
            Token::Whitespace,
            Token::Delim('-'),
            Token::Number(4.0),
            Token::Null,
        ];
        let mut stream = TokenStream::new(&tokens);
        assert_eq!(stream.peek(), Some(&Token::Delim('-')));
        assert_eq!(stream.peek_adjacent(), Some(&Token::Number(4.0)));
    }
}
