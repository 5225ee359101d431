use crate::ast::node::NodeId;
use serde::Deserialize;
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum VarDeclMode {
  Var,
  Let,
  Const,
}

/// `var`/`let`/`const` declaration, optionally in `export` position.
#[derive(Debug, Serialize)]
pub struct VarDecl {
  pub mode: VarDeclMode,
  pub export: bool,
  /// [`crate::ast::stmt::Declarator`] nodes.
  pub declarators: Vec<NodeId>,
}

/// One `pattern = init` entry of a variable declaration.
#[derive(Debug, Serialize)]
pub struct Declarator {
  /// [`crate::ast::pat::Pat`] node.
  pub pattern: NodeId,
  /// [`crate::ast::expr::Expr`] node.
  pub init: Option<NodeId>,
}

/// `function name(...) { ... }`, optionally in `export` position.
#[derive(Debug, Serialize)]
pub struct FuncDecl {
  pub export: bool,
  /// [`crate::ast::func::Func`] node. Always named for declarations.
  pub func: NodeId,
}

#[derive(Debug, Serialize)]
pub struct ImportStmt {
  pub source: String,
  /// [`crate::ast::import_export::ImportSpec`] nodes. May be empty for a bare
  /// side-effect import, which is never pruned.
  pub specifiers: Vec<NodeId>,
}

/// `export { a, b as c }` with an optional re-export source.
#[derive(Debug, Serialize)]
pub struct ExportListStmt {
  /// [`crate::ast::import_export::ExportSpec`] nodes.
  pub specifiers: Vec<NodeId>,
  /// When set, names resolve in the other module, not this one.
  pub source: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ExprStmt {
  pub expr: NodeId,
}

#[derive(Debug, Serialize)]
pub struct ReturnStmt {
  pub value: Option<NodeId>,
}

#[derive(Debug, Serialize)]
pub enum Stmt {
  VarDecl(VarDecl),
  FuncDecl(FuncDecl),
  Import(ImportStmt),
  ExportList(ExportListStmt),
  Expr(ExprStmt),
  Return(ReturnStmt),
}
