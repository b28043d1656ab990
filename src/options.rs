//! Compiler configuration handed to the front-end by its caller.

use std::path::PathBuf;

use clap::ValueEnum;

/// Which tokenization strategy the lexer uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LexMode {
    /// Greedy single pass; fast but may split ambiguous tokens.
    Fast,
    /// Exhaustive longest-match pass.
    #[default]
    Classic,
}

#[derive(Debug, Clone, Default)]
pub struct CompilerOptions {
    /// Source file being compiled; used to label token origins.
    pub main_file: PathBuf,
    pub lex_mode: LexMode,
    /// Where the caller wants the AST written. Not read by the core.
    pub out: Option<PathBuf>,
    /// Library search directories. Not read by the core.
    pub path: Vec<PathBuf>,
    /// Arguments for the compiled program. Not read by the core.
    pub argv: Vec<String>,
}

impl CompilerOptions {
    pub fn new(main_file: impl Into<PathBuf>, lex_mode: LexMode) -> Self {
        CompilerOptions {
            main_file: main_file.into(),
            lex_mode,
            ..Default::default()
        }
    }
}
