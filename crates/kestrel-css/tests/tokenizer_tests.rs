//! Integration tests for the declaration value tokenizer.

use kestrel_css::tokenizer::{CSSTokenizer, Token};

fn significant(text: &str) -> Vec<Token> {
    CSSTokenizer::tokenize(text)
        .into_iter()
        .filter(|t| !t.is_whitespace())
        .collect()
}

#[test]
fn test_value_ends_with_null() {
    let tokens = CSSTokenizer::tokenize("1px solid red");
    assert_eq!(tokens.last(), Some(&Token::Null));
    assert_eq!(CSSTokenizer::tokenize(""), vec![Token::Null]);
}

#[test]
fn test_numeric_tokens() {
    assert_eq!(
        significant("10px 50% 3 .5em 1e2"),
        vec![
            Token::dimension(10.0, "px"),
            Token::Percentage(50.0),
            Token::Number(3.0),
            Token::dimension(0.5, "em"),
            Token::Number(100.0),
            Token::Null,
        ]
    );
}

#[test]
fn test_sign_is_fused_into_numbers() {
    assert_eq!(
        significant("-4px +2 - 3"),
        vec![
            Token::dimension(-4.0, "px"),
            Token::Number(2.0),
            Token::Delim('-'),
            Token::Number(3.0),
            Token::Null,
        ]
    );
}

#[test]
fn test_idents_and_functions() {
    assert_eq!(
        significant("-moz-box rgb(1, 2, 3)"),
        vec![
            Token::ident("-moz-box"),
            Token::Function("rgb".to_string()),
            Token::Number(1.0),
            Token::Delim(','),
            Token::Number(2.0),
            Token::Delim(','),
            Token::Number(3.0),
            Token::Delim(')'),
            Token::Null,
        ]
    );
}

#[test]
fn test_hash_and_delims() {
    assert_eq!(
        significant("#fff / # ;"),
        vec![
            Token::Hash("fff".to_string()),
            Token::Delim('/'),
            Token::Delim('#'),
            Token::Delim(';'),
            Token::Null,
        ]
    );
}

#[test]
fn test_strings_and_escapes() {
    assert_eq!(
        significant(r#""a \"b\"" 'c\41'"#),
        vec![
            Token::String("a \"b\"".to_string()),
            Token::String("cA".to_string()),
            Token::Null,
        ]
    );
}

#[test]
fn test_quoted_and_unquoted_urls() {
    assert_eq!(
        significant("url( img.png ) url(\"a b.png\")"),
        vec![
            Token::Url("img.png".to_string()),
            Token::Function("url".to_string()),
            Token::String("a b.png".to_string()),
            Token::Delim(')'),
            Token::Null,
        ]
    );
}

#[test]
fn test_malformed_urls_become_bad_url_tokens() {
    assert_eq!(
        significant("url(a b.png) 2px"),
        vec![Token::BadUrl, Token::dimension(2.0, "px"), Token::Null]
    );
    assert_eq!(significant("url(a\"b)"), vec![Token::BadUrl, Token::Null]);
    assert_eq!(significant("url(a(b)"), vec![Token::BadUrl, Token::Null]);
    assert_eq!(significant("url(a\u{1}b)"), vec![Token::BadUrl, Token::Null]);
    // The remnants skip escaped parentheses.
    assert_eq!(
        significant("url(a b\\)c) x"),
        vec![Token::BadUrl, Token::ident("x"), Token::Null]
    );
}

#[test]
fn test_newline_in_string_is_a_bad_string() {
    assert_eq!(
        significant("\"abc\n1px"),
        vec![Token::BadString, Token::dimension(1.0, "px"), Token::Null]
    );
    assert_eq!(
        significant("'a\\\nb'"),
        vec![Token::String("ab".to_string()), Token::Null]
    );
}

#[test]
fn test_comments_are_skipped() {
    assert_eq!(
        significant("/* lead */1px/* mid */2px"),
        vec![
            Token::dimension(1.0, "px"),
            Token::dimension(2.0, "px"),
            Token::Null,
        ]
    );
}

#[test]
fn test_tokens_serialize_back_to_css() {
    let text: String = CSSTokenizer::tokenize("1px  solid #abc")
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(text, "1px solid #abc");
}
