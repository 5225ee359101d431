//! Liveness sweep: removes tracked declarations whose references have
//! vanished, looping until an iteration removes nothing.
//!
//! Removing one dead declarator can erase another declaration's only
//! reference (a helper used solely by a now-dead helper), so a single
//! top-to-bottom pass is insufficient; only a fixed point guarantees full
//! transitive cleanup. Each iteration removes at least one construct, so the
//! loop is bounded by the number of declarations in the module.

use crate::analyze::is_referenced;
use crate::ast::expr::Expr;
use crate::ast::node::Module;
use crate::ast::node::NodeId;
use crate::ast::pat::ObjectPatProp;
use crate::ast::pat::Pat;
use crate::ast::stmt::Stmt;
use crate::error::StripResult;
use crate::sem::bind_module;
use crate::sem::ModuleSemantics;
use ahash::HashSet;

pub(crate) fn sweep_to_fixed_point(
  module: &mut Module,
  tracked: &HashSet<NodeId>,
) -> StripResult<()> {
  loop {
    // Structural edits from the previous iteration invalidate the index;
    // rebind so every liveness decision sees current references.
    let sem = bind_module(module)?;
    if sweep_once(module, &sem, tracked)? == 0 {
      return Ok(());
    }
  }
}

fn sweep_once(
  module: &mut Module,
  sem: &ModuleSemantics,
  tracked: &HashSet<NodeId>,
) -> StripResult<usize> {
  let mut sweep = Sweep {
    sem,
    tracked,
    removed: 0,
  };
  let body = module.body.clone();
  let body = sweep.stmts(module, body)?;
  module.body = body;
  Ok(sweep.removed)
}

struct Sweep<'a> {
  sem: &'a ModuleSemantics,
  tracked: &'a HashSet<NodeId>,
  removed: usize,
}

impl Sweep<'_> {
  /// A candidate is removable when it was tracked at strip time and no longer
  /// has any live reference.
  fn dead(&self, ident: NodeId) -> bool {
    self.tracked.contains(&ident) && !is_referenced(self.sem, ident)
  }

  /// Rebuilds a statement list, dropping statements that died. Decisions are
  /// collected against the pre-edit index, so removal order within one
  /// iteration cannot invalidate iteration.
  fn stmts(&mut self, module: &mut Module, stmts: Vec<NodeId>) -> StripResult<Vec<NodeId>> {
    let mut kept = Vec::with_capacity(stmts.len());
    for id in stmts {
      if self.stmt(module, id)? {
        kept.push(id);
      }
    }
    Ok(kept)
  }

  fn stmt(&mut self, module: &mut Module, id: NodeId) -> StripResult<bool> {
    enum View {
      VarDecl(Vec<NodeId>),
      FuncDecl(NodeId),
      Import(Vec<NodeId>),
      Expr(NodeId),
      Return(Option<NodeId>),
      Keep,
    }

    let view = match module.stmt(id)? {
      Stmt::VarDecl(decl) => View::VarDecl(decl.declarators.clone()),
      Stmt::FuncDecl(decl) => View::FuncDecl(decl.func),
      Stmt::Import(import) => View::Import(import.specifiers.clone()),
      Stmt::ExportList(_) => View::Keep,
      Stmt::Expr(stmt) => View::Expr(stmt.expr),
      Stmt::Return(stmt) => View::Return(stmt.value),
    };

    match view {
      View::VarDecl(declarators) => {
        let mut kept = Vec::with_capacity(declarators.len());
        for d in declarators {
          if self.declarator(module, d)? {
            kept.push(d);
          }
        }
        let survives = !kept.is_empty();
        if let Stmt::VarDecl(decl) = module.stmt_mut(id)? {
          decl.declarators = kept;
        }
        Ok(survives)
      }
      View::FuncDecl(func_id) => {
        let name = module.func(func_id)?.name;
        if let Some(name) = name {
          if self.dead(name) {
            self.removed += 1;
            return Ok(false);
          }
        }
        self.func_body(module, func_id)?;
        Ok(true)
      }
      View::Import(specifiers) => {
        let mut kept = Vec::with_capacity(specifiers.len());
        let mut dropped = false;
        for s in specifiers {
          let local = module.import_spec(s)?.local;
          if self.dead(local) {
            self.removed += 1;
            dropped = true;
          } else {
            kept.push(s);
          }
        }
        // A bare side-effect import never had specifiers and survives; the
        // statement goes only when pruning emptied it.
        if dropped && kept.is_empty() {
          return Ok(false);
        }
        if let Stmt::Import(import) = module.stmt_mut(id)? {
          import.specifiers = kept;
        }
        Ok(true)
      }
      View::Expr(expr_id) => {
        if self.assignment_bound_func_dead(module, expr_id)? {
          self.removed += 1;
          return Ok(false);
        }
        self.expr(module, expr_id)?;
        Ok(true)
      }
      View::Return(value) => {
        if let Some(value) = value {
          self.expr(module, value)?;
        }
        Ok(true)
      }
      View::Keep => Ok(true),
    }
  }

  /// `name = function () {}` / `name = () => {}` as a whole statement is a
  /// declaring construct; when the name died the statement goes with it.
  fn assignment_bound_func_dead(&self, module: &Module, expr_id: NodeId) -> StripResult<bool> {
    let Expr::Assign(assign) = module.expr(expr_id)? else {
      return Ok(false);
    };
    if !matches!(module.expr(assign.value)?, Expr::Func(_)) {
      return Ok(false);
    }
    if !matches!(module.expr(assign.target)?, Expr::Id(_)) {
      return Ok(false);
    }
    Ok(self.dead(assign.target))
  }

  /// Returns whether the declarator survives.
  fn declarator(&mut self, module: &mut Module, d: NodeId) -> StripResult<bool> {
    enum PatView {
      Id,
      Object(Vec<NodeId>),
      Array(Vec<Option<NodeId>>),
      Other,
    }

    let (pattern, init) = {
      let declarator = module.declarator(d)?;
      (declarator.pattern, declarator.init)
    };
    let view = match module.pat(pattern)? {
      Pat::Id(_) => PatView::Id,
      Pat::Object(p) => PatView::Object(p.properties.clone()),
      Pat::Array(p) => PatView::Array(p.elements.clone()),
      Pat::Rest(_) => PatView::Other,
    };

    match view {
      PatView::Id => {
        if self.dead(pattern) {
          self.removed += 1;
          return Ok(false);
        }
      }
      PatView::Object(properties) => {
        let before = self.removed;
        let mut kept = Vec::with_capacity(properties.len());
        for prop in properties {
          if let Some(ident) = self.object_prop_candidate(module, prop)? {
            if self.dead(ident) {
              self.removed += 1;
              continue;
            }
          }
          kept.push(prop);
        }
        let emptied = kept.is_empty();
        if let Pat::Object(p) = module.pat_mut(pattern)? {
          p.properties = kept;
        }
        if self.removed != before && emptied {
          return Ok(false);
        }
      }
      PatView::Array(elements) => {
        let before = self.removed;
        let mut kept: Vec<Option<NodeId>> = Vec::with_capacity(elements.len());
        for el in elements {
          let Some(el_id) = el else {
            // Sparse hole: skipped, preserved.
            kept.push(None);
            continue;
          };
          if let Some(ident) = self.array_element_candidate(module, el_id)? {
            if self.dead(ident) {
              self.removed += 1;
              // Leave a hole so later elements keep their positions.
              kept.push(None);
              continue;
            }
          }
          kept.push(Some(el_id));
        }
        let emptied = kept.iter().all(|el| el.is_none());
        if let Pat::Array(p) = module.pat_mut(pattern)? {
          p.elements = kept;
        }
        if self.removed != before && emptied {
          return Ok(false);
        }
      }
      PatView::Other => {}
    }

    if let Some(init) = init {
      self.expr(module, init)?;
    }
    Ok(true)
  }

  /// The removable identifier bound by an object-pattern member, if the
  /// member has one (nested patterns do not).
  fn object_prop_candidate(
    &self,
    module: &Module,
    prop: NodeId,
  ) -> StripResult<Option<NodeId>> {
    Ok(match module.object_pat_prop(prop)? {
      ObjectPatProp::KeyValue(kv) => match module.pat(kv.value)? {
        Pat::Id(_) => Some(kv.value),
        _ => None,
      },
      ObjectPatProp::Rest(rest) => match module.pat(rest.argument)? {
        Pat::Id(_) => Some(rest.argument),
        _ => None,
      },
    })
  }

  fn array_element_candidate(
    &self,
    module: &Module,
    el: NodeId,
  ) -> StripResult<Option<NodeId>> {
    Ok(match module.pat(el)? {
      Pat::Id(_) => Some(el),
      Pat::Rest(rest) => match module.pat(rest.argument)? {
        Pat::Id(_) => Some(rest.argument),
        _ => None,
      },
      _ => None,
    })
  }

  /// Walks into expressions so declarations inside surviving function bodies
  /// are swept too.
  fn expr(&mut self, module: &mut Module, id: NodeId) -> StripResult<()> {
    enum View {
      Children(Vec<NodeId>),
      Func(NodeId),
      None,
    }

    let view = match module.expr(id)? {
      Expr::Id(_) | Expr::Lit(_) => View::None,
      Expr::Call(e) => {
        let mut children = vec![e.callee];
        children.extend(e.args.iter().copied());
        View::Children(children)
      }
      Expr::Member(e) => View::Children(vec![e.object]),
      Expr::Binary(e) => View::Children(vec![e.left, e.right]),
      Expr::Cond(e) => View::Children(vec![e.test, e.consequent, e.alternate]),
      Expr::Assign(e) => View::Children(vec![e.target, e.value]),
      Expr::Func(e) => View::Func(e.func),
      Expr::Object(e) => View::Children(e.properties.iter().map(|p| p.value).collect()),
      Expr::Array(e) => View::Children(e.elements.clone()),
    };

    match view {
      View::Children(children) => {
        for child in children {
          self.expr(module, child)?;
        }
      }
      View::Func(func_id) => self.func_body(module, func_id)?,
      View::None => {}
    }
    Ok(())
  }

  fn func_body(&mut self, module: &mut Module, func_id: NodeId) -> StripResult<()> {
    let body = module.func(func_id)?.body.clone();
    let body = self.stmts(module, body)?;
    module.func_mut(func_id)?.body = body;
    Ok(())
  }
}
