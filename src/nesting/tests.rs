//! Unit tests for indentation normalization and nesting.

use crate::{
    lexer::{
        lexer::tokenize_classic,
        tokens::{Token, TokenKind},
    },
    Source,
};

use super::{
    nested::{first_token, flatten, flatten_once, NestedToken},
    nesting::{nest, to_indents, to_lines},
};

fn indents(source: &str) -> Vec<Token> {
    to_indents(tokenize_classic(Source::new("test.ark", source)).unwrap()).unwrap()
}

fn tree(source: &str) -> Vec<NestedToken> {
    nest(to_lines(indents(source)))
}

/// Depth at which each name token sits in the tree.
fn depths(tokens: &[NestedToken], depth: usize, out: &mut Vec<(String, usize)>) {
    for token in tokens {
        match token {
            NestedToken::Token(token) if token.kind == TokenKind::Name => {
                out.push((token.value.clone(), depth))
            }
            NestedToken::Token(_) => {}
            NestedToken::Nested(children) => depths(children, depth + 1, out),
        }
    }
}

#[test]
fn test_inline_whitespace_is_dropped() {
    let tokens = indents("a  =   b");

    assert_eq!(tokens.len(), 3);
    assert!(tokens.iter().all(|token| token.kind != TokenKind::Whitespace));
}

#[test]
fn test_indentation_is_normalized_to_units() {
    let tokens = indents("a\n  b\n    c\n");
    let widths: Vec<&str> = tokens
        .iter()
        .filter(|token| token.kind == TokenKind::Whitespace)
        .map(|token| token.value.as_str())
        .collect();

    assert_eq!(widths, vec!["  ", "    "]);
}

#[test]
fn test_tab_unit() {
    let tokens = indents("a\n\tb\n\t\tc");
    let widths: Vec<&str> = tokens
        .iter()
        .filter(|token| token.kind == TokenKind::Whitespace)
        .map(|token| token.value.as_str())
        .collect();

    assert_eq!(widths, vec!["\t", "\t\t"]);
}

#[test]
fn test_inconsistent_indentation_is_an_error() {
    let error = to_indents(tokenize_classic(Source::new("test.ark", "a\n  b\n   c")).unwrap())
        .unwrap_err();

    assert_eq!(error.get_error_name(), "Inconsistent indentation");
    assert_eq!(error.get_position().line(), 3);
}

#[test]
fn test_blank_lines_with_whitespace_are_ignored() {
    let tokens = indents("a\n    \n  b");
    let widths: Vec<&str> = tokens
        .iter()
        .filter(|token| token.kind == TokenKind::Whitespace)
        .map(|token| token.value.as_str())
        .collect();

    // The blank line does not establish a four-space unit.
    assert_eq!(widths, vec!["  "]);
}

#[test]
fn test_newlines_are_canonical() {
    let tokens = indents("a\n\n\nb");

    assert_eq!(tokens[1].kind, TokenKind::Newline);
    assert_eq!(tokens[1].value, "\n");
}

#[test]
fn test_to_lines() {
    let lines = to_lines(indents("a b\n\nc\n"));

    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].len(), 2);
    assert_eq!(lines[1][0].value, "c");
}

#[test]
fn test_nest_depth_follows_indentation() {
    let tree = tree("a\n  b\n    c\n  d\ne");
    let mut found = vec![];
    depths(&tree, 0, &mut found);

    assert_eq!(
        found,
        vec![
            ("a".to_string(), 0),
            ("b".to_string(), 1),
            ("c".to_string(), 2),
            ("d".to_string(), 1),
            ("e".to_string(), 0),
        ]
    );
}

#[test]
fn test_nest_inserts_newline_markers() {
    let tree = tree("a\nb");

    assert_eq!(tree.len(), 4);
    assert!(tree[0].is_kind(TokenKind::Newline));
    assert!(tree[1].is_kind(TokenKind::Name));
    assert!(tree[2].is_kind(TokenKind::Newline));
    assert!(tree[3].is_kind(TokenKind::Name));
}

#[test]
fn test_nested_body_follows_header() {
    let tree = tree("fn add(a, b)\n  a + b");

    let last = tree.last().unwrap();
    assert!(last.is_nested());

    let body = last.as_nested().unwrap();
    assert!(body[0].is_kind(TokenKind::Newline));
    assert_eq!(flatten(body).len(), 4);
    assert!(body.iter().all(|token| !token.is_kind(TokenKind::Whitespace)));
}

#[test]
fn test_nest_empty_input() {
    assert!(tree("").is_empty());
    assert!(tree("\n\n").is_empty());
}

#[test]
fn test_flatten_helpers() {
    let tree = tree("a\n  b\n    c");

    assert_eq!(first_token(&tree).unwrap().kind, TokenKind::Newline);
    assert_eq!(flatten(&tree).len(), 6);
    assert!(flatten_once(&tree).iter().any(NestedToken::is_nested));
}
