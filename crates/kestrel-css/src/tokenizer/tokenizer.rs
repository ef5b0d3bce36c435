use super::token::Token;

/// [§ 4.3 Tokenizer Algorithms](https://www.w3.org/TR/css-syntax-3/#tokenizer-algorithms)
///
/// Tokenizer for declaration values and declaration blocks. Follows the CSS
/// Syntax Module Level 3 consume algorithms, folding the punctuation tokens
/// the property parsers never distinguish into [`Token::Delim`].
pub struct CSSTokenizer {
    /// The input string being tokenized
    input: Vec<char>,
    /// Current position in the input
    position: usize,
    /// Collected tokens
    tokens: Vec<Token>,
}

impl CSSTokenizer {
    /// Create a new CSS tokenizer with the given input.
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into().chars().collect(),
            position: 0,
            tokens: Vec::new(),
        }
    }

    /// Tokenize `input` in one call. The result always ends with [`Token::Null`].
    pub fn tokenize(input: impl Into<String>) -> Vec<Token> {
        let mut tokenizer = Self::new(input);
        tokenizer.run();
        tokenizer.into_tokens()
    }

    /// [§ 4.3.1 Consume a token](https://www.w3.org/TR/css-syntax-3/#consume-token)
    ///
    /// Consume tokens until the input is exhausted. The final token is
    /// always [`Token::Null`].
    pub fn run(&mut self) {
        loop {
            let token = self.consume_token();
            let is_end = token.is_null();
            self.tokens.push(token);
            if is_end {
                break;
            }
        }
    }

    /// Return the collected tokens.
    #[must_use]
    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }

    /// Return a reference to the collected tokens.
    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// [§ 4.3.1 Consume a token](https://www.w3.org/TR/css-syntax-3/#consume-token)
    fn consume_token(&mut self) -> Token {
        // "Consume comments."
        self.consume_comments();

        let Some(c) = self.consume() else {
            return Token::Null;
        };

        match c {
            // "Consume as much whitespace as possible. Return a <whitespace-token>."
            c if is_whitespace(c) => {
                self.consume_whitespace();
                Token::Whitespace
            }

            '"' | '\'' => self.consume_string_token(c),

            '#' => {
                if self.peek().is_some_and(is_ident_code_point)
                    || is_valid_escape(self.peek(), self.peek_at(1))
                {
                    Token::Hash(self.consume_ident_sequence())
                } else {
                    Token::Delim('#')
                }
            }

            // "If the input stream starts with a number, reconsume the current
            // input code point, consume a numeric token, and return it."
            //
            // A sign directly in front of a digit is fused into the number.
            '+' | '.' => {
                if starts_number(Some(c), self.peek(), self.peek_at(1)) {
                    self.reconsume();
                    self.consume_numeric_token()
                } else {
                    Token::Delim(c)
                }
            }

            '-' => {
                if starts_number(Some(c), self.peek(), self.peek_at(1)) {
                    self.reconsume();
                    self.consume_numeric_token()
                } else if starts_ident(Some(c), self.peek(), self.peek_at(1)) {
                    self.reconsume();
                    self.consume_ident_like_token()
                } else {
                    Token::Delim('-')
                }
            }

            '\\' => {
                if is_valid_escape(Some(c), self.peek()) {
                    self.reconsume();
                    self.consume_ident_like_token()
                } else {
                    Token::Delim('\\')
                }
            }

            c if c.is_ascii_digit() => {
                self.reconsume();
                self.consume_numeric_token()
            }

            c if is_ident_start(c) => {
                self.reconsume();
                self.consume_ident_like_token()
            }

            // Everything else, including : ; , / ( ) [ ] { }, is a delimiter
            // as far as property values are concerned.
            c => Token::Delim(c),
        }
    }

    /// [§ 4.3.2 Consume comments](https://www.w3.org/TR/css-syntax-3/#consume-comments)
    fn consume_comments(&mut self) {
        while self.peek() == Some('/') && self.peek_at(1) == Some('*') {
            self.position += 2;
            loop {
                match self.consume() {
                    Some('*') if self.peek() == Some('/') => {
                        self.position += 1;
                        break;
                    }
                    Some(_) => {}
                    None => return,
                }
            }
        }
    }

    /// [§ 4.3.3 Consume a numeric token](https://www.w3.org/TR/css-syntax-3/#consume-numeric-token)
    fn consume_numeric_token(&mut self) -> Token {
        let value = self.consume_number();

        // "If the next 3 input code points would start an ident sequence..."
        if starts_ident(self.peek(), self.peek_at(1), self.peek_at(2)) {
            let unit = self.consume_ident_sequence();
            return Token::Dimension { value, unit };
        }

        if self.peek() == Some('%') {
            self.position += 1;
            return Token::Percentage(value);
        }

        Token::Number(value)
    }

    /// [§ 4.3.12 Consume a number](https://www.w3.org/TR/css-syntax-3/#consume-number)
    fn consume_number(&mut self) -> f32 {
        let mut repr = String::new();

        if let Some(sign @ ('+' | '-')) = self.peek() {
            repr.push(sign);
            self.position += 1;
        }
        self.consume_digits(&mut repr);

        if self.peek() == Some('.') && self.peek_at(1).is_some_and(|c| c.is_ascii_digit()) {
            repr.push('.');
            self.position += 1;
            self.consume_digits(&mut repr);
        }

        if let Some(e @ ('e' | 'E')) = self.peek() {
            let exponent_follows = match self.peek_at(1) {
                Some(c) if c.is_ascii_digit() => true,
                Some('+' | '-') => self.peek_at(2).is_some_and(|c| c.is_ascii_digit()),
                _ => false,
            };
            if exponent_follows {
                repr.push(e);
                self.position += 1;
                if let Some(sign @ ('+' | '-')) = self.peek() {
                    repr.push(sign);
                    self.position += 1;
                }
                self.consume_digits(&mut repr);
            }
        }

        // "Convert repr to a number"
        repr.parse().unwrap_or(0.0)
    }

    fn consume_digits(&mut self, repr: &mut String) {
        while let Some(c) = self.peek().filter(char::is_ascii_digit) {
            repr.push(c);
            self.position += 1;
        }
    }

    /// [§ 4.3.4 Consume an ident-like token](https://www.w3.org/TR/css-syntax-3/#consume-ident-like-token)
    fn consume_ident_like_token(&mut self) -> Token {
        let name = self.consume_ident_sequence();

        if self.peek() != Some('(') {
            return Token::Ident(name);
        }
        self.position += 1;

        if name.eq_ignore_ascii_case("url") {
            // "While the next two input code points are whitespace, consume
            // the next input code point."
            self.consume_whitespace();
            // A quoted URL is a plain function call: url("...").
            if matches!(self.peek(), Some('"' | '\'')) {
                return Token::Function(name);
            }
            return self.consume_url_token();
        }

        Token::Function(name)
    }

    /// [§ 4.3.6 Consume a url token](https://www.w3.org/TR/css-syntax-3/#consume-url-token)
    fn consume_url_token(&mut self) -> Token {
        let mut value = String::new();
        loop {
            match self.consume() {
                // "EOF: This is a parse error. Return the <url-token>."
                None | Some(')') => return Token::Url(value),
                Some(c) if is_whitespace(c) => {
                    self.consume_whitespace();
                    if matches!(self.peek(), None | Some(')')) {
                        let _ = self.consume();
                        return Token::Url(value);
                    }
                    self.consume_bad_url_remnants();
                    return Token::BadUrl;
                }
                // "This is a parse error. Consume the remnants of a bad url,
                // create a <bad-url-token>, and return it."
                Some('"' | '\'' | '(') => {
                    self.consume_bad_url_remnants();
                    return Token::BadUrl;
                }
                Some(c) if is_non_printable(c) => {
                    self.consume_bad_url_remnants();
                    return Token::BadUrl;
                }
                Some('\\') => {
                    if is_valid_escape(Some('\\'), self.peek()) {
                        value.push(self.consume_escaped_code_point());
                    } else {
                        self.consume_bad_url_remnants();
                        return Token::BadUrl;
                    }
                }
                Some(c) => value.push(c),
            }
        }
    }

    /// [§ 4.3.14 Consume the remnants of a bad url](https://www.w3.org/TR/css-syntax-3/#consume-remnants-of-bad-url)
    ///
    /// Skip to the closing parenthesis so the rest of the value tokenizes
    /// normally.
    fn consume_bad_url_remnants(&mut self) {
        loop {
            match self.consume() {
                None | Some(')') => return,
                Some('\\') if is_valid_escape(Some('\\'), self.peek()) => {
                    let _ = self.consume_escaped_code_point();
                }
                Some(_) => {}
            }
        }
    }

    /// [§ 4.3.5 Consume a string token](https://www.w3.org/TR/css-syntax-3/#consume-string-token)
    fn consume_string_token(&mut self, ending: char) -> Token {
        let mut value = String::new();
        loop {
            match self.consume() {
                // "EOF: This is a parse error. Return the <string-token>."
                None => return Token::String(value),
                Some(c) if c == ending => return Token::String(value),
                // "newline: This is a parse error. Reconsume the current input
                // code point, create a <bad-string-token>, and return it."
                Some('\n') => {
                    self.reconsume();
                    return Token::BadString;
                }
                Some('\\') => match self.peek() {
                    None => {}
                    Some('\n') => self.position += 1,
                    Some(_) => value.push(self.consume_escaped_code_point()),
                },
                Some(c) => value.push(c),
            }
        }
    }

    /// [§ 4.3.7 Consume an escaped code point](https://www.w3.org/TR/css-syntax-3/#consume-escaped-code-point)
    fn consume_escaped_code_point(&mut self) -> char {
        match self.consume() {
            Some(c) if c.is_ascii_hexdigit() => {
                let mut hex = String::from(c);
                while hex.len() < 6 {
                    match self.peek() {
                        Some(h) if h.is_ascii_hexdigit() => {
                            hex.push(h);
                            self.position += 1;
                        }
                        _ => break,
                    }
                }
                if self.peek().is_some_and(is_whitespace) {
                    self.position += 1;
                }
                u32::from_str_radix(&hex, 16)
                    .ok()
                    .and_then(char::from_u32)
                    .filter(|&ch| ch != '\0')
                    .unwrap_or(char::REPLACEMENT_CHARACTER)
            }
            Some(c) => c,
            None => char::REPLACEMENT_CHARACTER,
        }
    }

    /// [§ 4.3.11 Consume an ident sequence](https://www.w3.org/TR/css-syntax-3/#consume-name)
    fn consume_ident_sequence(&mut self) -> String {
        let mut result = String::new();
        loop {
            match self.peek() {
                Some(c) if is_ident_code_point(c) => {
                    result.push(c);
                    self.position += 1;
                }
                Some('\\') if is_valid_escape(Some('\\'), self.peek_at(1)) => {
                    self.position += 1;
                    result.push(self.consume_escaped_code_point());
                }
                _ => return result,
            }
        }
    }

    fn consume_whitespace(&mut self) {
        while self.peek().is_some_and(is_whitespace) {
            self.position += 1;
        }
    }

    fn consume(&mut self) -> Option<char> {
        let c = self.input.get(self.position).copied();
        if c.is_some() {
            self.position += 1;
        }
        c
    }

    fn reconsume(&mut self) {
        self.position -= 1;
    }

    fn peek(&self) -> Option<char> {
        self.peek_at(0)
    }

    fn peek_at(&self, offset: usize) -> Option<char> {
        self.input.get(self.position + offset).copied()
    }
}

/// [§ 4.2 Definitions](https://www.w3.org/TR/css-syntax-3/#whitespace)
const fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\u{000C}')
}

/// "non-printable code point: A code point between U+0000 NULL and U+0008
/// BACKSPACE inclusive, or U+000B LINE TABULATION, or a code point between
/// U+000E SHIFT OUT and U+001F INFORMATION SEPARATOR ONE inclusive, or U+007F
/// DELETE."
const fn is_non_printable(c: char) -> bool {
    matches!(c, '\u{0}'..='\u{8}' | '\u{B}' | '\u{E}'..='\u{1F}' | '\u{7F}')
}

/// "ident-start code point: A letter, a non-ASCII code point, or U+005F LOW LINE (_)."
const fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || !c.is_ascii()
}

/// "ident code point: An ident-start code point, a digit, or U+002D HYPHEN-MINUS (-)."
const fn is_ident_code_point(c: char) -> bool {
    is_ident_start(c) || c.is_ascii_digit() || c == '-'
}

/// [§ 4.3.8 Check if two code points are a valid escape](https://www.w3.org/TR/css-syntax-3/#starts-with-a-valid-escape)
fn is_valid_escape(first: Option<char>, second: Option<char>) -> bool {
    first == Some('\\') && second.is_some_and(|c| c != '\n')
}

/// [§ 4.3.9 Check if three code points would start an ident sequence](https://www.w3.org/TR/css-syntax-3/#would-start-an-identifier)
fn starts_ident(first: Option<char>, second: Option<char>, third: Option<char>) -> bool {
    match first {
        Some('-') => {
            second.is_some_and(|c| is_ident_start(c) || c == '-') || is_valid_escape(second, third)
        }
        Some('\\') => is_valid_escape(first, second),
        Some(c) => is_ident_start(c),
        None => false,
    }
}

/// [§ 4.3.10 Check if three code points would start a number](https://www.w3.org/TR/css-syntax-3/#starts-with-a-number)
fn starts_number(first: Option<char>, second: Option<char>, third: Option<char>) -> bool {
    let is_digit = |c: Option<char>| c.is_some_and(|c| c.is_ascii_digit());
    match first {
        Some('+' | '-') => is_digit(second) || (second == Some('.') && is_digit(third)),
        Some('.') => is_digit(second),
        c => is_digit(c),
    }
}
