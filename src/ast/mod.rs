/// AST (expression tree) module
/// Contains everything related to the expression tree
///
/// Submodules:
/// - ast: The Node type
/// - builder: Builds a tree from a postfix sequence
/// - render: Indented listing and Graphviz output of a tree
pub mod ast;
pub mod builder;
pub mod render;
