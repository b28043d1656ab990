//! Integration tests for the complete front-end.
//!
//! These tests drive `compile` from source text through tokenization,
//! indentation nesting and parsing, and check the resulting syntax tree.

use arkc::{
    ast::{
        ast::{ExpressionItem, Value},
        blocks::{Block, BlockKind, BlockType},
        constructs::{Construct, ConstructType},
    },
    compile,
    errors::errors::Error,
    format_error,
    options::{CompilerOptions, LexMode},
};

fn compile_with(source: &str, lex_mode: LexMode) -> Result<Block, Error> {
    compile(source, &CompilerOptions::new("main.ark", lex_mode))
}

fn compile_ok(source: &str) -> Block {
    compile_with(source, LexMode::Classic).expect("program should parse")
}

fn postfix_text(value: &Value) -> Vec<String> {
    match value.as_construct() {
        Some(Construct::Operation { expression }) => expression
            .iter()
            .map(|item| match item {
                ExpressionItem::Operator(token) | ExpressionItem::PrefixOperator(token) => {
                    token.value.clone()
                }
                ExpressionItem::Operand(operand) => operand
                    .as_literal()
                    .map(|token| token.value.clone())
                    .unwrap_or_default(),
            })
            .collect(),
        other => panic!("expected an operation, got {:?}", other),
    }
}

/// Where each top-level symbol starts. Each compile owns its source buffer,
/// so origins are compared by offset.
fn symbol_offsets(main: &Block) -> Vec<u32> {
    main.symbols().iter().map(|symbol| symbol.origin.0).collect()
}

#[test]
fn test_function_scenario() {
    let main = compile_ok("fn add(a, b)\n  a + b");
    let symbols = main.symbols();
    assert_eq!(symbols.len(), 1);

    match &symbols[0].kind {
        BlockKind::Function { name, args, value } => {
            assert_eq!(name, "add");
            assert_eq!(args, &vec![String::from("a"), String::from("b")]);
            assert_eq!(postfix_text(value), vec!["a", "b", "+"]);
        }
        other => panic!("expected a function, got {:?}", other),
    }
}

#[test]
fn test_if_scenario() {
    let main = compile_ok("if x > 0\n  x");

    match &main.symbols()[0].kind {
        BlockKind::If { condition, value } => {
            assert_eq!(postfix_text(condition), vec!["x", "0", ">"]);
            assert_eq!(value.as_literal().map(|token| token.value.as_str()), Some("x"));
        }
        other => panic!("expected an if, got {:?}", other),
    }
}

#[test]
fn test_missing_function_name() {
    let error = compile_with("fn ()\n  1", LexMode::Classic).unwrap_err();

    assert_eq!(error.get_error_name(), "Invalid Function");
    assert_eq!(error.get_position().line(), 1);
    assert_eq!(error.get_position().column(), 1);

    let rendered = format_error(&error);
    assert!(rendered.starts_with("Invalid Function\n  at main.ark:1:1\n"));
}

#[test]
fn test_construct_priority() {
    let main = compile_ok("fn f()\n  return a.b");
    let BlockKind::Function { value, .. } = &main.symbols()[0].kind else {
        panic!("expected a function");
    };

    let Some(Construct::Return { value }) = value.as_construct() else {
        panic!("expected a return");
    };
    assert_eq!(
        value.as_construct().map(Construct::get_construct_type),
        Some(ConstructType::Chain)
    );
}

#[test]
fn test_chain_inside_operation() {
    let main = compile_ok("fn f()\n  a.b + 1");
    let BlockKind::Function { value, .. } = &main.symbols()[0].kind else {
        panic!("expected a function");
    };

    let Some(Construct::Operation { expression }) = value.as_construct() else {
        panic!("expected an operation");
    };
    assert!(matches!(
        &expression[0],
        ExpressionItem::Operand(Value::Construct(construct))
            if construct.get_construct_type() == ConstructType::Chain
    ));
}

#[test]
fn test_full_program() {
    let source = "\
import std.io

# entry point
closure app
  fn greet(name)
    print('hello', name)

  fn main()
    do
      total = 0
      each n in range(10)
        total += n ** 2
      repeat 3
        greet(name: 'ark')
      if total >= 100
        return total
      else
        return 0
";

    let main = compile_ok(source);
    let symbols = main.symbols();

    assert_eq!(symbols.len(), 2);
    assert_eq!(symbols[0].get_block_type(), BlockType::Import);
    assert_eq!(symbols[1].get_block_type(), BlockType::Closure);

    let functions = symbols[1].symbols();
    assert_eq!(functions.len(), 2);

    let BlockKind::Function { value, .. } = &functions[1].kind else {
        panic!("expected a function");
    };
    let steps = match value.as_block().map(|block| &block.kind) {
        Some(BlockKind::Do { steps }) => steps,
        other => panic!("expected a do block, got {:?}", other),
    };

    let kinds: Vec<Option<BlockType>> = steps
        .iter()
        .map(|step| step.as_block().map(Block::get_block_type))
        .collect();
    assert_eq!(
        kinds,
        vec![
            None,
            Some(BlockType::Each),
            Some(BlockType::Repeat),
            Some(BlockType::If),
            Some(BlockType::Else),
        ]
    );
}

#[test]
fn test_compilation_is_deterministic() {
    let source = "fn f(a)\n  {a: a * 2, a, x => x}\nif f(1)[0] == 2\n  return true";

    let first = compile_ok(source);
    let second = compile_ok(source);

    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
    assert_eq!(symbol_offsets(&first), symbol_offsets(&second));
}

#[test]
fn test_strategies_produce_the_same_tree() {
    let source = "fn scale(x, factor)\n  x * factor ** 2\nif scale(2, 3) > 10\n  return scale";

    let classic = compile_with(source, LexMode::Classic).unwrap();
    let fast = compile_with(source, LexMode::Fast).unwrap();

    assert_eq!(
        serde_json::to_value(&classic).unwrap(),
        serde_json::to_value(&fast).unwrap()
    );
    assert_eq!(symbol_offsets(&classic), symbol_offsets(&fast));
}

#[test]
fn test_comments_do_not_change_the_tree() {
    let with_comments = compile_ok("# header\nfn f() # trailing\n  1 # one\n");
    let without_comments = compile_ok("fn f()\n  1\n");

    // Origins shift with the removed text, so compare the serialized trees.
    assert_eq!(
        serde_json::to_value(with_comments.symbols()).unwrap(),
        serde_json::to_value(without_comments.symbols()).unwrap()
    );
}

#[test]
fn test_inconsistent_indentation() {
    let error = compile_with("fn f()\n  do\n     x = 1", LexMode::Classic).unwrap_err();

    assert_eq!(error.get_error_name(), "Inconsistent indentation");
    assert_eq!(error.get_position().line(), 3);
}

#[test]
fn test_empty_source() {
    let main = compile_ok("");

    assert_eq!(main.get_block_type(), BlockType::Closure);
    assert!(main.symbols().is_empty());
}

#[test]
fn test_ast_serializes_without_origins() {
    let main = compile_ok("fn f(a)\n  a");
    let json = serde_json::to_value(&main).unwrap();

    assert!(json.get("origin").is_none());
    assert_eq!(json["kind"]["Closure"]["name"], "main");
    assert_eq!(json["kind"]["Closure"]["symbols"][0]["kind"]["Function"]["name"], "f");
}
