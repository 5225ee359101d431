//! Reference analysis over the recomputed [`crate::sem`] index.

use crate::ast::expr::Expr;
use crate::ast::node::Module;
use crate::ast::node::NodeId;
use crate::ast::pat::ObjectPatProp;
use crate::ast::pat::Pat;
use crate::ast::stmt::Stmt;
use crate::error::StripResult;
use crate::sem::DeclKind;
use crate::sem::ModuleSemantics;
use ahash::HashSet;

/// Whether a binding identifier is referenced from outside its own declaring
/// construct.
///
/// Named function declarations are special: a function that only calls itself
/// is not referenced, otherwise every recursive-but-dead helper would be kept
/// alive by its own recursion. Every other construct kind counts any read or
/// write occurrence, excluding the queried site itself (so an assignment's
/// own write does not keep its target alive).
pub fn is_referenced(sem: &ModuleSemantics, ident: NodeId) -> bool {
  let Some(symbol_id) = sem.binding_of(ident) else {
    return false;
  };
  let symbol = sem.symbol(symbol_id);
  let mut refs = sem
    .references(symbol_id)
    .iter()
    .filter(|site| **site != ident);
  if symbol.decl_kind == DeclKind::FuncDecl {
    refs.any(|site| !sem.is_within(*site, symbol.decl_node))
  } else {
    refs.next().is_some()
  }
}

/// Seeds the tracked-identifier set: every binding identifier of the five
/// declaring shapes, module-wide, that is currently referenced. Only tracked
/// identifiers are ever removal candidates later, so code that was dead from
/// the start is never touched by this pass.
pub(crate) fn collect_tracked(
  module: &Module,
  sem: &ModuleSemantics,
) -> StripResult<HashSet<NodeId>> {
  let mut tracker = Tracker {
    module,
    sem,
    tracked: HashSet::default(),
  };
  for stmt in module.body.iter() {
    tracker.stmt(*stmt)?;
  }
  Ok(tracker.tracked)
}

struct Tracker<'a> {
  module: &'a Module,
  sem: &'a ModuleSemantics,
  tracked: HashSet<NodeId>,
}

impl Tracker<'_> {
  fn mark(&mut self, ident: NodeId) {
    if is_referenced(self.sem, ident) {
      self.tracked.insert(ident);
    }
  }

  fn stmt(&mut self, id: NodeId) -> StripResult<()> {
    let module = self.module;
    match module.stmt(id)? {
      Stmt::VarDecl(decl) => {
        for d in decl.declarators.iter() {
          let declarator = module.declarator(*d)?;
          self.pattern(declarator.pattern)?;
          if let Some(init) = declarator.init {
            self.expr(init)?;
          }
        }
      }
      Stmt::FuncDecl(decl) => {
        let func = module.func(decl.func)?;
        if let Some(name) = func.name {
          self.mark(name);
        }
        for stmt in func.body.iter() {
          self.stmt(*stmt)?;
        }
      }
      Stmt::Import(import) => {
        for s in import.specifiers.iter() {
          self.mark(module.import_spec(*s)?.local);
        }
      }
      Stmt::ExportList(_) => {}
      Stmt::Expr(stmt) => self.expr(stmt.expr)?,
      Stmt::Return(stmt) => {
        if let Some(value) = stmt.value {
          self.expr(value)?;
        }
      }
    }
    Ok(())
  }

  /// Marks the identifiers a declarator pattern binds. A destructuring member
  /// whose value is itself a pattern yields no removable identifier and is
  /// skipped, mirroring the per-member removal rules.
  fn pattern(&mut self, id: NodeId) -> StripResult<()> {
    let module = self.module;
    match module.pat(id)? {
      Pat::Id(_) => self.mark(id),
      Pat::Object(p) => {
        for prop in p.properties.iter() {
          match module.object_pat_prop(*prop)? {
            ObjectPatProp::KeyValue(kv) => {
              if matches!(module.pat(kv.value)?, Pat::Id(_)) {
                self.mark(kv.value);
              }
            }
            ObjectPatProp::Rest(rest) => {
              if matches!(module.pat(rest.argument)?, Pat::Id(_)) {
                self.mark(rest.argument);
              }
            }
          }
        }
      }
      Pat::Array(p) => {
        for el in p.elements.iter().flatten() {
          match module.pat(*el)? {
            Pat::Id(_) => self.mark(*el),
            Pat::Rest(rest) => {
              if matches!(module.pat(rest.argument)?, Pat::Id(_)) {
                self.mark(rest.argument);
              }
            }
            _ => {}
          }
        }
      }
      Pat::Rest(_) => {}
    }
    Ok(())
  }

  fn expr(&mut self, id: NodeId) -> StripResult<()> {
    let module = self.module;
    match module.expr(id)? {
      Expr::Id(_) | Expr::Lit(_) => {}
      Expr::Call(e) => {
        self.expr(e.callee)?;
        for arg in e.args.iter() {
          self.expr(*arg)?;
        }
      }
      Expr::Member(e) => self.expr(e.object)?,
      Expr::Binary(e) => {
        self.expr(e.left)?;
        self.expr(e.right)?;
      }
      Expr::Cond(e) => {
        self.expr(e.test)?;
        self.expr(e.consequent)?;
        self.expr(e.alternate)?;
      }
      Expr::Assign(e) => {
        // An identifier assigned a function is a declaring construct (the
        // function is bound to the name); mark the target as a candidate.
        if matches!(module.expr(e.value)?, Expr::Func(_))
          && matches!(module.expr(e.target)?, Expr::Id(_))
        {
          self.mark(e.target);
        }
        self.expr(e.target)?;
        self.expr(e.value)?;
      }
      Expr::Func(e) => {
        let func = module.func(e.func)?;
        for stmt in func.body.iter() {
          self.stmt(*stmt)?;
        }
      }
      Expr::Object(e) => {
        for prop in e.properties.iter() {
          self.expr(prop.value)?;
        }
      }
      Expr::Array(e) => {
        for el in e.elements.iter() {
          self.expr(*el)?;
        }
      }
    }
    Ok(())
  }
}
