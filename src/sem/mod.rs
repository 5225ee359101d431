//! Scope and reference index over a [`Module`].
//!
//! Binding is a two-pass walk: [`declare`] builds the scope tree and symbol
//! tables (so hoisted declarations are visible before their statement), then
//! [`resolve`] records every read/write reference site against its symbol.
//! The index is derived data: structural edits invalidate it and the caller
//! recomputes it with [`bind_module`] rather than patching it incrementally.
//!
//! Scope kinds are the subset this pass can observe:
//! - [`ScopeKind::Module`]: the top level; also the `var` scope.
//! - [`ScopeKind::Function`] / [`ScopeKind::ArrowFunction`]: function bodies
//!   including parameters.
//! - [`ScopeKind::FunctionExpressionName`]: the dedicated scope holding a
//!   named function expression's own name, so `const x = function foo() {}`
//!   never leaks `foo` outside the expression.

use crate::ast::node::Module;
use crate::ast::node::NodeId;
use crate::error::StripResult;
use ahash::HashMap;
use std::collections::BTreeMap;

mod declare;
mod resolve;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ScopeId(u32);

impl ScopeId {
  pub fn raw(self) -> u32 {
    self.0
  }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SymbolId(u32);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScopeKind {
  Module,
  Function,
  ArrowFunction,
  FunctionExpressionName,
}

/// Which declaring construct introduced a symbol. Only
/// [`DeclKind::FuncDecl`] changes reference semantics (self-calls inside the
/// declaration do not count as references).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeclKind {
  Declarator,
  FuncDecl,
  FuncExprName,
  Param,
  ImportSpec,
}

#[derive(Debug)]
pub struct ScopeData {
  pub parent: Option<ScopeId>,
  pub kind: ScopeKind,
  /// Deterministic iteration order; later declarations of the same name win,
  /// as they shadow for the whole scope in this pass's view.
  pub symbols: BTreeMap<String, SymbolId>,
}

#[derive(Debug)]
pub struct SymbolData {
  pub name: String,
  pub decl_scope: ScopeId,
  pub decl_kind: DeclKind,
  /// The declaring construct node: the declarator, the whole function
  /// declaration statement, the import specifier, or the function node.
  pub decl_node: NodeId,
}

#[derive(Debug)]
pub struct ModuleSemantics {
  scopes: Vec<ScopeData>,
  symbols: Vec<SymbolData>,
  declared: HashMap<NodeId, SymbolId>,
  resolved: HashMap<NodeId, SymbolId>,
  references: HashMap<SymbolId, Vec<NodeId>>,
  parents: HashMap<NodeId, NodeId>,
  top_scope: ScopeId,
}

impl ModuleSemantics {
  pub fn top_scope(&self) -> ScopeId {
    self.top_scope
  }

  pub fn scope(&self, id: ScopeId) -> &ScopeData {
    &self.scopes[id.0 as usize]
  }

  pub fn symbol(&self, id: SymbolId) -> &SymbolData {
    &self.symbols[id.0 as usize]
  }

  /// The symbol a binding-position identifier declares.
  pub fn declared_symbol(&self, ident: NodeId) -> Option<SymbolId> {
    self.declared.get(&ident).copied()
  }

  /// The symbol a reference-position identifier resolved to, if any.
  pub fn resolved_symbol(&self, ident: NodeId) -> Option<SymbolId> {
    self.resolved.get(&ident).copied()
  }

  /// The binding behind an identifier occurrence of either position.
  pub fn binding_of(&self, ident: NodeId) -> Option<SymbolId> {
    self
      .declared_symbol(ident)
      .or_else(|| self.resolved_symbol(ident))
  }

  /// All read/write reference sites of a symbol, in tree order. The
  /// declaration site itself is never included.
  pub fn references(&self, symbol: SymbolId) -> &[NodeId] {
    self
      .references
      .get(&symbol)
      .map(|refs| refs.as_slice())
      .unwrap_or(&[])
  }

  /// Whether `node` lies inside the subtree rooted at `ancestor`.
  pub fn is_within(&self, node: NodeId, ancestor: NodeId) -> bool {
    let mut current = Some(node);
    while let Some(n) = current {
      if n == ancestor {
        return true;
      }
      current = self.parents.get(&n).copied();
    }
    false
  }
}

/// Builds the full index for the current tree shape. Call again after any
/// batch of structural edits.
pub fn bind_module(module: &Module) -> StripResult<ModuleSemantics> {
  let declared = declare::declare(module)?;
  resolve::resolve(module, declared)
}
