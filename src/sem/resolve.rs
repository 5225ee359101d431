use super::declare::Declared;
use super::ModuleSemantics;
use super::ScopeData;
use super::ScopeId;
use super::SymbolId;
use crate::ast::expr::Expr;
use crate::ast::node::Module;
use crate::ast::node::NodeId;
use crate::ast::stmt::Stmt;
use crate::error::StripError;
use crate::error::StripResult;
use ahash::HashMap;

pub(super) fn resolve(module: &Module, declared: Declared) -> StripResult<ModuleSemantics> {
  let (resolved, references) = {
    let mut resolver = Resolver {
      module,
      scopes: &declared.scopes,
      func_scopes: &declared.func_scopes,
      resolved: HashMap::default(),
      references: HashMap::default(),
    };
    for stmt in module.body.iter() {
      resolver.stmt(declared.top_scope, *stmt)?;
    }
    (resolver.resolved, resolver.references)
  };
  Ok(ModuleSemantics {
    scopes: declared.scopes,
    symbols: declared.symbols,
    declared: declared.declared,
    resolved,
    references,
    parents: declared.parents,
    top_scope: declared.top_scope,
  })
}

struct Resolver<'a> {
  module: &'a Module,
  scopes: &'a [ScopeData],
  func_scopes: &'a HashMap<NodeId, ScopeId>,
  resolved: HashMap<NodeId, SymbolId>,
  references: HashMap<SymbolId, Vec<NodeId>>,
}

impl Resolver<'_> {
  fn resolve_name(&self, scope: ScopeId, name: &str) -> Option<SymbolId> {
    let mut current = Some(scope);
    while let Some(scope_id) = current {
      let scope_data = &self.scopes[scope_id.raw() as usize];
      if let Some(symbol) = scope_data.symbols.get(name) {
        return Some(*symbol);
      }
      current = scope_data.parent;
    }
    None
  }

  fn reference(&mut self, scope: ScopeId, site: NodeId, name: &str) {
    if let Some(symbol) = self.resolve_name(scope, name) {
      self.resolved.insert(site, symbol);
      self.references.entry(symbol).or_default().push(site);
    }
  }

  fn stmt(&mut self, scope: ScopeId, id: NodeId) -> StripResult<()> {
    let module = self.module;
    match module.stmt(id)? {
      Stmt::VarDecl(decl) => {
        // Patterns are declaration sites, not references; only initializers
        // can refer to bindings.
        for d in decl.declarators.iter() {
          if let Some(init) = module.declarator(*d)?.init {
            self.expr(scope, init)?;
          }
        }
      }
      Stmt::FuncDecl(decl) => self.func_body(decl.func)?,
      Stmt::Import(_) => {}
      Stmt::ExportList(list) => {
        // `export { a }` keeps the local binding alive; with a source the
        // names live in the other module and resolve to nothing here.
        if list.source.is_none() {
          for s in list.specifiers.iter() {
            let spec = module.export_spec(*s)?;
            match module.expr(spec.local)? {
              Expr::Id(e) => {
                let name = e.name.clone();
                self.reference(scope, spec.local, &name);
              }
              _ => return Err(StripError::ExpectedIdentifier(spec.local)),
            }
          }
        }
      }
      Stmt::Expr(stmt) => self.expr(scope, stmt.expr)?,
      Stmt::Return(stmt) => {
        if let Some(value) = stmt.value {
          self.expr(scope, value)?;
        }
      }
    }
    Ok(())
  }

  fn expr(&mut self, scope: ScopeId, id: NodeId) -> StripResult<()> {
    let module = self.module;
    match module.expr(id)? {
      Expr::Id(e) => {
        let name = e.name.clone();
        self.reference(scope, id, &name);
      }
      Expr::Lit(_) => {}
      Expr::Call(e) => {
        self.expr(scope, e.callee)?;
        for arg in e.args.iter() {
          self.expr(scope, *arg)?;
        }
      }
      Expr::Member(e) => self.expr(scope, e.object)?,
      Expr::Binary(e) => {
        self.expr(scope, e.left)?;
        self.expr(scope, e.right)?;
      }
      Expr::Cond(e) => {
        self.expr(scope, e.test)?;
        self.expr(scope, e.consequent)?;
        self.expr(scope, e.alternate)?;
      }
      Expr::Assign(e) => {
        // The target identifier is a write reference.
        self.expr(scope, e.target)?;
        self.expr(scope, e.value)?;
      }
      Expr::Func(e) => self.func_body(e.func)?,
      Expr::Object(e) => {
        for prop in e.properties.iter() {
          self.expr(scope, prop.value)?;
        }
      }
      Expr::Array(e) => {
        for el in e.elements.iter() {
          self.expr(scope, *el)?;
        }
      }
    }
    Ok(())
  }

  fn func_body(&mut self, func_id: NodeId) -> StripResult<()> {
    let scope = match self.func_scopes.get(&func_id) {
      Some(scope) => *scope,
      // Declaration attached a scope to every function node; a miss means the
      // tree changed between passes.
      None => return Err(StripError::DanglingNode(func_id)),
    };
    let func = self.module.func(func_id)?;
    for stmt in func.body.iter() {
      self.stmt(scope, *stmt)?;
    }
    Ok(())
  }
}
