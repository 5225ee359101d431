use crate::ast::node::NodeId;
use serde::Serialize;

/// An identifier in reference position (read, or write when it is an
/// assignment target).
#[derive(Debug, Serialize)]
pub struct IdExpr {
  pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Lit {
  Num(f64),
  Str(String),
  Bool(bool),
  Null,
  Undefined,
}

#[derive(Debug, Serialize)]
pub struct CallExpr {
  pub callee: NodeId,
  pub args: Vec<NodeId>,
}

#[derive(Debug, Serialize)]
pub struct MemberExpr {
  pub object: NodeId,
  pub property: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum BinaryOp {
  Add,
  Sub,
  Mul,
  Div,
  Lt,
  Le,
  Gt,
  Ge,
  Eq,
  NotEq,
  And,
  Or,
}

#[derive(Debug, Serialize)]
pub struct BinaryExpr {
  pub op: BinaryOp,
  pub left: NodeId,
  pub right: NodeId,
}

#[derive(Debug, Serialize)]
pub struct CondExpr {
  pub test: NodeId,
  pub consequent: NodeId,
  pub alternate: NodeId,
}

/// `target = value`. When `value` is a function and `target` an identifier,
/// the whole assignment is a declaring construct for the pass.
#[derive(Debug, Serialize)]
pub struct AssignExpr {
  pub target: NodeId,
  pub value: NodeId,
}

#[derive(Debug, Serialize)]
pub struct FuncExpr {
  /// [`crate::ast::func::Func`] node.
  pub func: NodeId,
}

#[derive(Debug, Serialize)]
pub struct ObjectLitProp {
  pub key: String,
  pub value: NodeId,
}

#[derive(Debug, Serialize)]
pub struct ObjectLit {
  pub properties: Vec<ObjectLitProp>,
}

#[derive(Debug, Serialize)]
pub struct ArrayLit {
  pub elements: Vec<NodeId>,
}

#[derive(Debug, Serialize)]
pub enum Expr {
  Id(IdExpr),
  Lit(Lit),
  Call(CallExpr),
  Member(MemberExpr),
  Binary(BinaryExpr),
  Cond(CondExpr),
  Assign(AssignExpr),
  Func(FuncExpr),
  Object(ObjectLit),
  Array(ArrayLit),
}
