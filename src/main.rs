use std::{
    fs,
    path::{Path, PathBuf},
    process,
    rc::Rc,
    time::Instant,
};

use arkc::{
    ast::blocks::Block,
    display_error,
    lexer::lexer::tokenize,
    nesting::nesting::{nest, to_indents, to_lines},
    options::{CompilerOptions, LexMode},
    parser::parser::parse,
    Source,
};
use clap::Parser;

#[derive(Parser)]
#[command(name = "arkc")]
#[command(about = "Parses an ark program into its syntax tree")]
struct Args {
    /// Program entry file
    #[arg(long = "main", default_value = "main.ark")]
    main_file: PathBuf,

    /// Tokenization strategy
    #[arg(long, value_enum, default_value_t = LexMode::Classic)]
    lex_mode: LexMode,

    /// Write the syntax tree as JSON to this file
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Library search directory, may be repeated
    #[arg(long)]
    path: Vec<PathBuf>,

    /// Arguments passed through to the program
    #[arg(trailing_var_arg = true)]
    argv: Vec<String>,
}

impl From<Args> for CompilerOptions {
    fn from(args: Args) -> Self {
        CompilerOptions {
            main_file: args.main_file,
            lex_mode: args.lex_mode,
            out: args.out,
            path: args.path,
            argv: args.argv,
        }
    }
}

fn main() {
    let options = CompilerOptions::from(Args::parse());

    let file_contents = match fs::read_to_string(&options.main_file) {
        Ok(contents) => contents,
        Err(error) => {
            eprintln!("Failed to read {}: {}", options.main_file.display(), error);
            process::exit(1);
        }
    };

    let file = Source::new(options.main_file.to_string_lossy(), file_contents);
    let start = Instant::now();

    let tokens = tokenize(Rc::clone(&file), options.lex_mode).unwrap_or_else(|error| fail(&error));
    println!("Tokenized in {:?}", start.elapsed());

    let nest_start = Instant::now();
    let indented = to_indents(tokens).unwrap_or_else(|error| fail(&error));
    let tree = nest(to_lines(indented));
    println!("Nested in {:?}", nest_start.elapsed());

    let parse_start = Instant::now();
    let main = parse(&tree, file).unwrap_or_else(|error| fail(&error));
    println!("Parsed in {:?}", parse_start.elapsed());
    println!("Total time: {:?}", start.elapsed());

    match &options.out {
        Some(out) => write_tree(&main, out),
        None => println!("{}", summary(&main)),
    }
}

fn fail(error: &arkc::errors::errors::Error) -> ! {
    display_error(error);
    process::exit(1);
}

fn write_tree(main: &Block, out: &Path) {
    let json = match serde_json::to_string_pretty(main) {
        Ok(json) => json,
        Err(error) => {
            eprintln!("Failed to serialize the syntax tree: {}", error);
            process::exit(1);
        }
    };

    if let Err(error) = fs::write(out, json) {
        eprintln!("Failed to write {}: {}", out.display(), error);
        process::exit(1);
    }

    println!("Wrote syntax tree to {}", out.display());
}

/// One line naming every top-level symbol, e.g. `main: Import, Function`.
fn summary(main: &Block) -> String {
    let symbols: Vec<String> = main
        .symbols()
        .iter()
        .map(|symbol| symbol.get_block_type().to_string())
        .collect();

    if symbols.is_empty() {
        return String::from("main: no symbols");
    }

    format!("main: {}", symbols.join(", "))
}
