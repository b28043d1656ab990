use std::mem::take;

use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    MK_TOKEN,
};

use super::nested::NestedToken;

/// Rewrites leading whitespace into whole indent units and drops inline
/// whitespace.
///
/// The first indentation found after a newline becomes the indent unit, every
/// later indentation is replaced by that unit repeated `width / unit` times.
/// Whitespace-only lines are skipped entirely.
pub fn to_indents(tokens: Vec<Token>) -> Result<Vec<Token>, Error> {
    let mut out = vec![];
    let mut unit: Option<String> = None;
    let mut after_newline = false;

    let mut tokens = tokens.into_iter().peekable();

    while let Some(token) = tokens.next() {
        match token.kind {
            TokenKind::Whitespace => {
                let blank_line = tokens
                    .peek()
                    .map_or(true, |next| next.kind == TokenKind::Newline);

                if !after_newline || blank_line {
                    continue;
                }

                let unit = unit.get_or_insert_with(|| token.value.clone());
                let width = token.value.chars().count();
                let unit_width = unit.chars().count();

                if width % unit_width != 0 {
                    return Err(Error::new(
                        ErrorImpl::InconsistentIndentation {
                            width,
                            unit: unit_width,
                        },
                        token.span.start.clone(),
                    ));
                }

                out.push(MK_TOKEN!(
                    TokenKind::Whitespace,
                    unit.repeat(width / unit_width),
                    token.span
                ));
            }
            TokenKind::Newline => {
                after_newline = true;
                out.push(MK_TOKEN!(TokenKind::Newline, String::from("\n"), token.span));
            }
            _ => {
                after_newline = false;
                out.push(token);
            }
        }
    }

    Ok(out)
}

/// Splits the token stream at newlines, dropping empty lines.
pub fn to_lines(tokens: Vec<Token>) -> Vec<Vec<Token>> {
    let mut lines = vec![];
    let mut line = vec![];

    for token in tokens {
        if token.kind == TokenKind::Newline {
            lines.push(take(&mut line));
        } else {
            line.push(token);
        }
    }

    lines.push(line);
    lines.retain(|line| !line.is_empty());
    lines
}

fn leading_indent(line: &[Token]) -> Option<&str> {
    line.first()
        .filter(|token| token.kind == TokenKind::Whitespace)
        .map(|token| token.value.as_str())
}

/// Groups lines into a tree whose nesting depth follows indentation.
///
/// Lines at the indentation of the first line are appended in place, each
/// preceded by a newline marker. Runs of deeper lines are nested recursively
/// and inserted where the run ends. Indentation tokens are dropped from the
/// result.
pub fn nest(lines: Vec<Vec<Token>>) -> Vec<NestedToken> {
    let Some(first) = lines.first() else {
        return vec![];
    };

    let indent = String::from(leading_indent(first).unwrap_or(""));

    let mut out = vec![];
    let mut body: Vec<Vec<Token>> = vec![];

    for line in lines {
        let same_level = leading_indent(&line).map_or(true, |line_indent| line_indent == indent);

        if !same_level {
            body.push(line);
            continue;
        }

        if !body.is_empty() {
            out.push(NestedToken::Nested(nest(take(&mut body))));
        }

        if let Some(token) = line.first() {
            out.push(NestedToken::Token(MK_TOKEN!(
                TokenKind::Newline,
                String::from("\n"),
                token.span.clone()
            )));
        }
        out.extend(line.into_iter().map(NestedToken::Token));
    }

    if !body.is_empty() {
        out.push(NestedToken::Nested(nest(body)));
    }

    out.retain(|token| match token {
        NestedToken::Nested(children) => !children.is_empty(),
        NestedToken::Token(token) => token.kind != TokenKind::Whitespace,
    });
    out
}
