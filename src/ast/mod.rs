/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: Values, the union every expression position holds
/// - blocks: Keyword-introduced blocks (closures, conditionals, loops, functions, imports)
/// - constructs: Expression-level constructs (calls, accesses, lambdas, operations, ...)
pub mod ast;
pub mod blocks;
pub mod constructs;
