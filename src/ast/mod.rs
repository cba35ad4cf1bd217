/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: Core AST traits and wrappers
/// - declarations: The compilation unit, classes, fields, methods
/// - expressions: Names and literals
/// - statements: Blocks and local variable declarations
/// - types: Type annotations as written in the source
pub mod ast;
pub mod declarations;
pub mod expressions;
pub mod statements;
pub mod types;
