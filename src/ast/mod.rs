/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: Program root, top-level items and node kind enums
/// - expressions: Definitions for the expression node kinds
/// - statements: Definitions for statements, blocks and functions
/// - types: The primitive type keywords
/// - visitor: Pre-order/post-order traversal for downstream consumers
/// - printer: Re-serialization of a tree to source text
pub mod ast;
pub mod expressions;
pub mod printer;
pub mod statements;
pub mod types;
pub mod visitor;
