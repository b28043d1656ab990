#![allow(clippy::module_inception)]

use std::rc::Rc;

use crate::{
    ast::blocks::Block,
    errors::errors::{Error, ErrorTip},
    lexer::lexer::tokenize,
    nesting::nesting::{nest, to_indents, to_lines},
    options::CompilerOptions,
    parser::parser::parse,
};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod nesting;
pub mod options;
pub mod parser;

extern crate regex;

/// A source file shared by every token produced from it.
#[derive(Debug, PartialEq)]
pub struct Source {
    pub name: String,
    pub text: String,
}

impl Source {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Rc<Self> {
        Rc::new(Source {
            name: name.into(),
            text: text.into(),
        })
    }
}

/// Byte offset into a shared source buffer. Line and column are derived on
/// demand so the buffer stays the single source of truth. Positions without a
/// buffer are null: nothing is known about where they came from.
#[derive(Debug, Clone)]
pub struct Position(pub u32, pub Option<Rc<Source>>);

/// Two positions are equal when they point at the same offset of the same
/// buffer; the buffer's contents are never compared.
impl PartialEq for Position {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
            && match (&self.1, &other.1) {
                (Some(a), Some(b)) => Rc::ptr_eq(a, b),
                (None, None) => true,
                _ => false,
            }
    }
}

impl Position {
    pub fn new(offset: u32, file: &Rc<Source>) -> Self {
        Position(offset, Some(Rc::clone(file)))
    }

    pub fn null() -> Self {
        Position(0, None)
    }

    pub fn is_null(&self) -> bool {
        self.1.is_none()
    }

    /// Name of the source file, empty for a null position.
    pub fn file(&self) -> &str {
        self.1.as_ref().map_or("", |source| source.name.as_str())
    }

    fn text(&self) -> &str {
        self.1.as_ref().map_or("", |source| source.text.as_str())
    }

    fn preceding(&self) -> &str {
        let text = self.text();
        let mut offset = (self.0 as usize).min(text.len());
        while !text.is_char_boundary(offset) {
            offset -= 1;
        }
        &text[..offset]
    }

    /// 1-based line number.
    pub fn line(&self) -> usize {
        self.preceding().matches('\n').count() + 1
    }

    /// 1-based column, counted in characters.
    pub fn column(&self) -> usize {
        let before = self.preceding();
        let line_start = before.rfind('\n').map(|i| i + 1).unwrap_or(0);
        before[line_start..].chars().count() + 1
    }

    /// The full text of the line this position sits on, without its newline.
    pub fn line_text(&self) -> &str {
        let text = self.text();
        let before = self.preceding();
        let line_start = before.rfind('\n').map(|i| i + 1).unwrap_or(0);
        let line_end = text[line_start..]
            .find('\n')
            .map(|i| line_start + i)
            .unwrap_or(text.len());
        &text[line_start..line_end]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Runs the whole front-end over one source string and returns the program's
/// implicit top-level closure.
pub fn compile(source: &str, options: &CompilerOptions) -> Result<Block, Error> {
    let file = Source::new(options.main_file.to_string_lossy(), source);
    let tokens = tokenize(Rc::clone(&file), options.lex_mode)?;
    let tree = nest(to_lines(to_indents(tokens)?));

    parse(&tree, file)
}


/// Renders an error as the diagnostic block written to stderr.
pub fn format_error(error: &Error) -> String {
    /*
        Invalid Function
          at main.ark:1:4
           |
         1 | fn ()
           |    ^
    */

    let position = error.get_position();
    let mut out = format!("{}\n", error.get_error_name());

    if position.is_null() {
        out.push_str("  at <unknown>\n");
        push_tip(&mut out, error);
        return out;
    }

    out.push_str(&format!(
        "  at {}:{}:{}\n",
        position.file(),
        position.line(),
        position.column()
    ));

    let line_string = position.line().to_string();
    let padding = line_string.len() + 2;
    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(position.line_text());
    let arrows = position.column().saturating_sub(removed_whitespace).max(1);

    out.push_str(&format!("{:>padding$}\n", "|"));
    out.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));
    out.push_str(&format!("{:>padding$} {:>arrows$}\n", "|", "^"));
    push_tip(&mut out, error);
    out
}

fn push_tip(out: &mut String, error: &Error) {
    if let ErrorTip::Suggestion(tip) = error.get_tip() {
        out.push_str(&format!("  = {}\n", tip));
    }
}

pub fn display_error(error: &Error) {
    eprint!("{}", format_error(error));
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' || c == '\t' {
            start += 1;
        } else {
            break;
        }
    }

    (string.chars().skip(start).collect(), start)
}
