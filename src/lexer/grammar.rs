//! The token grammar: one matcher per token category, the operator table and
//! the block keywords.
//!
//! Matchers are consulted in [`TokenKind::ALL`] order and the first success
//! wins, so keywords are recognised before the generic name rule sees them.

use std::collections::HashMap;

use lazy_static::lazy_static;
use regex::Regex;

use super::tokens::TokenKind;

pub const KEYWORDS: [&str; 8] = ["if", "else", "do", "each", "repeat", "import", "closure", "fn"];

pub const ASSIGNMENTS: [&str; 7] = ["=", "+=", "*=", "-=", "/=", "%=", "**="];

/// How a category decides whether a candidate string belongs to it.
pub enum Matcher {
    Literals(&'static [&'static str]),
    Pattern(Regex),
    Predicate(fn(&str) -> bool),
}

impl Matcher {
    pub fn test(&self, candidate: &str) -> bool {
        match self {
            Matcher::Literals(literals) => literals.contains(&candidate),
            Matcher::Pattern(regex) => regex.is_match(candidate),
            Matcher::Predicate(predicate) => predicate(candidate),
        }
    }
}

/// Precedence and associativity of an operator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OperatorInfo {
    pub precedence: u8,
    pub left_associative: bool,
}

const fn op(precedence: u8, left_associative: bool) -> OperatorInfo {
    OperatorInfo {
        precedence,
        left_associative,
    }
}

lazy_static! {
    pub static ref OPERATORS: HashMap<&'static str, OperatorInfo> = {
        let mut map = HashMap::new();
        map.insert("+", op(1, true));
        map.insert("-", op(1, true));
        map.insert("*", op(2, true));
        map.insert("/", op(2, true));
        map.insert("%", op(2, true));
        map.insert("**", op(3, false));

        map.insert("==", op(0, true));
        map.insert(">", op(0, true));
        map.insert("<", op(0, true));
        map.insert(">=", op(0, true));
        map.insert("<=", op(0, true));

        map.insert("and", op(0, true));
        map.insert("or", op(0, true));
        map.insert("not", op(0, false));
        map.insert("nor", op(0, true));
        map.insert("nand", op(0, true));
        map.insert("xor", op(0, true));
        map.insert("xnor", op(0, true));
        map
    };

    static ref GRAMMAR: Vec<(TokenKind, Matcher)> = TokenKind::ALL
        .iter()
        .map(|kind| (*kind, matcher_for(*kind)))
        .collect();
}

fn pattern(source: &str) -> Matcher {
    Matcher::Pattern(Regex::new(source).expect("grammar patterns are valid regexes"))
}

fn is_operator(candidate: &str) -> bool {
    OPERATORS.contains_key(candidate)
}

fn is_comment(candidate: &str) -> bool {
    candidate.starts_with('#') && !candidate.contains('\n')
}

fn matcher_for(kind: TokenKind) -> Matcher {
    match kind {
        TokenKind::Float => pattern(r"^-?[0-9]+\.[0-9]+$"),
        TokenKind::Scientific => pattern(r"^-?[0-9]+(\.[0-9]+)?[eE]-?[0-9]+$"),
        TokenKind::Binary => pattern(r"^-?0b[01]+$"),
        TokenKind::Octal => pattern(r"^-?0o[0-7]+$"),
        TokenKind::Decimal => pattern(r"^-?(0d)?[0-9]+$"),
        TokenKind::Hexadecimal => pattern(r"^-?0x[0-9a-fA-F]+$"),
        TokenKind::Boolean => Matcher::Literals(&["true", "false"]),
        TokenKind::String => pattern(r#"(^"([^"\\\n]|\\.)*"$)|(^'([^'\\\n]|\\.)*'$)"#),
        TokenKind::Operator => Matcher::Predicate(is_operator),
        TokenKind::Assignment => Matcher::Literals(&ASSIGNMENTS),
        TokenKind::Arrow => Matcher::Literals(&["=>"]),
        TokenKind::Keyword => Matcher::Literals(&KEYWORDS),
        TokenKind::Return => Matcher::Literals(&["return"]),
        TokenKind::Name => pattern(r"^[$_a-zA-Z][$_a-zA-Z0-9]*$"),
        TokenKind::Whitespace => pattern(
            r"^[ \f\r\t\v\x{00A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}]+$",
        ),
        TokenKind::Newline => pattern(r"^\n+$"),
        TokenKind::Comment => Matcher::Predicate(is_comment),
        TokenKind::OpenParen => Matcher::Literals(&["("]),
        TokenKind::OpenBracket => Matcher::Literals(&["["]),
        TokenKind::OpenCurly => Matcher::Literals(&["{"]),
        TokenKind::CloseParen => Matcher::Literals(&[")"]),
        TokenKind::CloseBracket => Matcher::Literals(&["]"]),
        TokenKind::CloseCurly => Matcher::Literals(&["}"]),
        TokenKind::Colon => Matcher::Literals(&[":"]),
        TokenKind::Dot => pattern(r"^!?(\.|:{2,})$"),
        TokenKind::Comma => Matcher::Literals(&[",", ";"]),
    }
}

/// Whether `candidate` belongs to the category `kind`.
pub fn matches(candidate: &str, kind: TokenKind) -> bool {
    GRAMMAR
        .iter()
        .find(|(k, _)| *k == kind)
        .is_some_and(|(_, matcher)| matcher.test(candidate))
}

/// Every category matching `candidate`, in grammar order.
pub fn all_matches(candidate: &str) -> impl Iterator<Item = TokenKind> + '_ {
    GRAMMAR
        .iter()
        .filter(move |(_, matcher)| matcher.test(candidate))
        .map(|(kind, _)| *kind)
}

/// The first category in grammar order that matches `candidate`.
pub fn first_match(candidate: &str) -> Option<TokenKind> {
    all_matches(candidate).next()
}

pub fn operator_info(operator: &str) -> Option<OperatorInfo> {
    OPERATORS.get(operator).copied()
}
