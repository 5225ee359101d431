use crate::ast::node::NodeId;
use serde::Deserialize;
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImportSpecKind {
  Named,
  Default,
  Namespace,
}

#[derive(Debug, Serialize)]
pub struct ImportSpec {
  pub kind: ImportSpecKind,
  /// The name in the source module for named imports; `None` for default and
  /// namespace forms.
  pub imported: Option<String>,
  /// Identifier [`crate::ast::pat::Pat::Id`] node: the local binding.
  pub local: NodeId,
}

/// One specifier of an `export { ... }` list.
#[derive(Debug, Serialize)]
pub struct ExportSpec {
  /// Identifier [`crate::ast::expr::Expr::Id`] node. Resolves as a local
  /// reference only when the list has no source.
  pub local: NodeId,
  /// The name exposed to importers; this is what removal targets match.
  pub exported: String,
}
