use crate::ast::node::NodeId;
use serde::Serialize;

/// A function of any form: declaration, expression, or arrow. Which form it is
/// comes from the wrapping node ([`crate::ast::stmt::FuncDecl`] or
/// [`crate::ast::expr::FuncExpr`]) plus the `arrow` flag.
#[derive(Debug, Serialize)]
pub struct Func {
  /// Identifier [`crate::ast::pat::Pat::Id`] node. `None` for arrows and
  /// anonymous expressions. A named expression binds the name in a dedicated
  /// scope visible only inside the function.
  pub name: Option<NodeId>,
  /// [`crate::ast::pat::Pat`] nodes.
  pub params: Vec<NodeId>,
  /// [`crate::ast::stmt::Stmt`] nodes.
  pub body: Vec<NodeId>,
  pub arrow: bool,
}
