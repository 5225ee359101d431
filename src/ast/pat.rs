use crate::ast::node::NodeId;
use serde::Serialize;

/// An identifier in binding position. The node itself is the stable handle a
/// binding is tracked by.
#[derive(Debug, Serialize)]
pub struct IdPat {
  pub name: String,
}

#[derive(Debug, Serialize)]
pub struct ObjectPat {
  /// [`ObjectPatProp`] nodes, rest element included.
  pub properties: Vec<NodeId>,
}

#[derive(Debug, Serialize)]
pub struct ArrayPat {
  /// [`Pat`] nodes; `None` is a sparse hole and is skipped by the pass.
  pub elements: Vec<Option<NodeId>>,
}

#[derive(Debug, Serialize)]
pub struct RestPat {
  /// [`Pat`] node.
  pub argument: NodeId,
}

#[derive(Debug, Serialize)]
pub enum Pat {
  Id(IdPat),
  Object(ObjectPat),
  Array(ArrayPat),
  Rest(RestPat),
}

#[derive(Debug, Serialize)]
pub struct KeyValuePatProp {
  pub key: String,
  /// [`Pat`] node. A nested pattern here yields no removable identifier.
  pub value: NodeId,
}

#[derive(Debug, Serialize)]
pub struct RestPatProp {
  /// [`Pat`] node.
  pub argument: NodeId,
}

#[derive(Debug, Serialize)]
pub enum ObjectPatProp {
  KeyValue(KeyValuePatProp),
  Rest(RestPatProp),
}
