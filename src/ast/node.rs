use crate::ast::expr::Expr;
use crate::ast::func::Func;
use crate::ast::import_export::ExportSpec;
use crate::ast::import_export::ImportSpec;
use crate::ast::pat::ObjectPatProp;
use crate::ast::pat::Pat;
use crate::ast::stmt::Declarator;
use crate::ast::stmt::Stmt;
use crate::error::StripError;
use crate::error::StripResult;
use crate::error::SyntaxKind;
use derive_more::From;
use serde::Deserialize;
use serde::Serialize;

/// A stable handle into a [`Module`]'s node arena.
///
/// Slots are never reused within a pass, so ids held in derived sets (e.g. the
/// tracked-identifier set) stay valid across structural edits; removal only
/// detaches an id from its parent's child list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(u32);

impl NodeId {
  pub fn raw(self) -> u32 {
    self.0
  }

  pub fn from_raw(raw: u32) -> Self {
    NodeId(raw)
  }
}

/// One node of any syntactic category. Categories are closed enums, so every
/// traversal and removal function matches exhaustively; adding a shape is a
/// compile-time-checked, localized change.
#[derive(Debug, From, Serialize)]
pub enum Syntax {
  Stmt(Stmt),
  Declarator(Declarator),
  Pat(Pat),
  ObjectPatProp(ObjectPatProp),
  Expr(Expr),
  Func(Func),
  ImportSpec(ImportSpec),
  ExportSpec(ExportSpec),
}

impl Syntax {
  pub fn kind(&self) -> SyntaxKind {
    match self {
      Syntax::Stmt(_) => SyntaxKind::Stmt,
      Syntax::Declarator(_) => SyntaxKind::Declarator,
      Syntax::Pat(_) => SyntaxKind::Pat,
      Syntax::ObjectPatProp(_) => SyntaxKind::ObjectPatProp,
      Syntax::Expr(_) => SyntaxKind::Expr,
      Syntax::Func(_) => SyntaxKind::Func,
      Syntax::ImportSpec(_) => SyntaxKind::ImportSpec,
      Syntax::ExportSpec(_) => SyntaxKind::ExportSpec,
    }
  }
}

/// An owned arena of syntax nodes plus the module body in source order.
///
/// The producing parser allocates nodes with [`Module::alloc`] (or the typed
/// constructors in [`crate::ast::build`]) and appends top-level statements to
/// `body`. The pass mutates the tree in place; the caller owns it throughout.
#[derive(Debug, Default, Serialize)]
pub struct Module {
  nodes: Vec<Syntax>,
  pub body: Vec<NodeId>,
}

macro_rules! typed_accessors {
  ($get:ident, $get_mut:ident, $variant:ident, $ty:ty) => {
    pub fn $get(&self, id: NodeId) -> StripResult<&$ty> {
      match self.get(id)? {
        Syntax::$variant(v) => Ok(v),
        other => Err(StripError::UnexpectedSyntax {
          node: id,
          expected: SyntaxKind::$variant,
          found: other.kind(),
        }),
      }
    }

    pub fn $get_mut(&mut self, id: NodeId) -> StripResult<&mut $ty> {
      // Read the kind first so the error path does not hold a mutable borrow.
      let found = self.get(id)?.kind();
      match self.get_mut_raw(id) {
        Some(Syntax::$variant(v)) => Ok(v),
        _ => Err(StripError::UnexpectedSyntax {
          node: id,
          expected: SyntaxKind::$variant,
          found,
        }),
      }
    }
  };
}

impl Module {
  pub fn new() -> Module {
    Module::default()
  }

  pub fn alloc<S: Into<Syntax>>(&mut self, stx: S) -> NodeId {
    let id = NodeId(self.nodes.len() as u32);
    self.nodes.push(stx.into());
    id
  }

  pub fn get(&self, id: NodeId) -> StripResult<&Syntax> {
    self
      .nodes
      .get(id.0 as usize)
      .ok_or(StripError::DanglingNode(id))
  }

  fn get_mut_raw(&mut self, id: NodeId) -> Option<&mut Syntax> {
    self.nodes.get_mut(id.0 as usize)
  }

  typed_accessors!(stmt, stmt_mut, Stmt, Stmt);
  typed_accessors!(declarator, declarator_mut, Declarator, Declarator);
  typed_accessors!(pat, pat_mut, Pat, Pat);
  typed_accessors!(
    object_pat_prop,
    object_pat_prop_mut,
    ObjectPatProp,
    ObjectPatProp
  );
  typed_accessors!(expr, expr_mut, Expr, Expr);
  typed_accessors!(func, func_mut, Func, Func);
  typed_accessors!(import_spec, import_spec_mut, ImportSpec, ImportSpec);
  typed_accessors!(export_spec, export_spec_mut, ExportSpec, ExportSpec);

  /// The name of an identifier pattern node, or `None` for any other pattern
  /// shape (destructuring patterns are handled member-by-member, never by
  /// name).
  pub fn id_pat_name(&self, id: NodeId) -> StripResult<Option<&str>> {
    match self.pat(id)? {
      Pat::Id(p) => Ok(Some(&p.name)),
      _ => Ok(None),
    }
  }
}
