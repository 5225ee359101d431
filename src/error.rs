use crate::ast::node::NodeId;
use core::fmt;
use core::fmt::Debug;
use core::fmt::Formatter;
use std::error::Error;
use std::fmt::Display;

/// The syntactic category a [`NodeId`] was expected (or found) to hold.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SyntaxKind {
  Stmt,
  Declarator,
  Pat,
  ObjectPatProp,
  Expr,
  Func,
  ImportSpec,
  ExportSpec,
}

/// A programming-contract violation inside the pass.
///
/// The tree is assumed to be well formed by the producing parser; these errors
/// mean a handle dereferenced to the wrong syntactic category or to no node at
/// all. They are fatal for the invocation and never retried.
#[derive(Clone, PartialEq, Eq)]
pub enum StripError {
  UnexpectedSyntax {
    node: NodeId,
    expected: SyntaxKind,
    found: SyntaxKind,
  },
  /// A position that must hold an identifier (an export specifier's local
  /// name, a function declaration's name) held another shape.
  ExpectedIdentifier(NodeId),
  DanglingNode(NodeId),
}

impl Debug for StripError {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    Display::fmt(self, f)
  }
}

impl Display for StripError {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      StripError::UnexpectedSyntax {
        node,
        expected,
        found,
      } => write!(
        f,
        "expected {:?} at node {} but found {:?}",
        expected,
        node.raw(),
        found
      ),
      StripError::ExpectedIdentifier(node) => {
        write!(f, "expected an identifier at node {}", node.raw())
      }
      StripError::DanglingNode(node) => write!(f, "node {} does not exist", node.raw()),
    }
  }
}

impl Error for StripError {}

pub type StripResult<T> = Result<T, StripError>;
