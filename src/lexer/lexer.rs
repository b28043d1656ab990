use std::rc::Rc;

use crate::{
    errors::errors::{Error, ErrorImpl},
    options::LexMode,
    Position, Source, Span, MK_TOKEN,
};

use super::{
    grammar::{all_matches, first_match},
    tokens::{Token, TokenKind},
};

/// Shared state of both tokenization strategies.
pub struct Lexer {
    tokens: Vec<Token>,
    file: Rc<Source>,
    pos: usize,
}

impl Lexer {
    pub fn new(file: Rc<Source>) -> Lexer {
        Lexer {
            tokens: vec![],
            file,
            pos: 0,
        }
    }

    pub fn source(&self) -> &str {
        &self.file.text
    }

    pub fn push(&mut self, kind: TokenKind, value: &str, start: usize) {
        let span = self.span(start, start + value.len());
        self.tokens.push(MK_TOKEN!(kind, String::from(value), span));
    }

    pub fn remainder(&self) -> &str {
        &self.file.text[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.file.text.len()
    }

    pub fn get_position(&self) -> Position {
        Position::new(self.pos as u32, &self.file)
    }

    fn span(&self, start: usize, end: usize) -> Span {
        Span {
            start: Position::new(start as u32, &self.file),
            end: Position::new(end as u32, &self.file),
        }
    }

    /// Consumes the lexer, dropping comments.
    fn finish(self) -> Vec<Token> {
        self.tokens
            .into_iter()
            .filter(|token| token.kind != TokenKind::Comment)
            .collect()
    }
}

/// Greedy single pass: keep extending the candidate while it still matches
/// some category, and emit the previous candidate once it stops matching.
///
/// This never backtracks, so categories whose prefixes do not match on their
/// own (strings, floats, prefixed integers) are split apart. Characters that
/// match no category at all are skipped.
pub fn tokenize_fast(file: Rc<Source>) -> Vec<Token> {
    let mut lex = Lexer::new(file);
    let source = Rc::clone(&lex.file);

    let mut accumulator = String::new();
    let mut start = 0;

    for (index, ch) in source.text.char_indices() {
        let mut candidate = accumulator.clone();
        candidate.push(ch);

        if first_match(&candidate).is_some() {
            accumulator = candidate;
            continue;
        }

        if let Some(kind) = first_match(&accumulator) {
            lex.push(kind, &accumulator, start);
        }

        accumulator = ch.to_string();
        start = index;
    }

    if let Some(kind) = first_match(&accumulator) {
        lex.push(kind, &accumulator, start);
    }

    lex.finish()
}

/// Picks the category for a candidate that matched: keyword and return win a
/// tie, otherwise the first category in grammar order.
fn preferred_match(candidate: &str) -> Option<TokenKind> {
    let mut matched = all_matches(candidate).peekable();
    let first = *matched.peek()?;

    matched
        .find(|kind| matches!(kind, TokenKind::Keyword | TokenKind::Return))
        .or(Some(first))
}

/// Exhaustive pass: from each start position try every extension over the
/// rest of the line and keep the longest match (maximal munch).
pub fn tokenize_classic(file: Rc<Source>) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(file);

    while !lex.at_eof() {
        let mut candidate = String::new();
        let mut longest: Option<(TokenKind, usize)> = None;
        let mut seen_newline = false;

        for ch in lex.remainder().chars() {
            // Only the newline category accepts a '\n', and it accepts
            // nothing else, so no longer candidate can match.
            if seen_newline && ch != '\n' {
                break;
            }
            seen_newline |= ch == '\n';

            candidate.push(ch);

            if let Some(kind) = preferred_match(&candidate) {
                longest = Some((kind, candidate.len()));
            }
        }

        match longest {
            Some((kind, length)) => {
                let start = lex.pos;
                let value = String::from(&lex.source()[start..start + length]);
                lex.push(kind, &value, start);
                lex.pos += length;
            }
            None => {
                let token = lex.remainder().chars().next().map(String::from).unwrap_or_default();
                return Err(Error::new(ErrorImpl::UnexpectedToken { token }, lex.get_position()));
            }
        }
    }

    Ok(lex.finish())
}

/// Tokenizes `file` with the selected strategy.
pub fn tokenize(file: Rc<Source>, mode: LexMode) -> Result<Vec<Token>, Error> {
    match mode {
        LexMode::Fast => Ok(tokenize_fast(file)),
        LexMode::Classic => tokenize_classic(file),
    }
}
