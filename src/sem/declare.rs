use super::DeclKind;
use super::ScopeData;
use super::ScopeId;
use super::ScopeKind;
use super::SymbolData;
use super::SymbolId;
use crate::ast::expr::Expr;
use crate::ast::node::Module;
use crate::ast::node::NodeId;
use crate::ast::pat::ObjectPatProp;
use crate::ast::pat::Pat;
use crate::ast::stmt::Stmt;
use crate::error::StripResult;
use ahash::HashMap;
use std::collections::BTreeMap;

/// Output of the declaration pass, consumed by resolution.
pub(super) struct Declared {
  pub scopes: Vec<ScopeData>,
  pub symbols: Vec<SymbolData>,
  pub declared: HashMap<NodeId, SymbolId>,
  pub parents: HashMap<NodeId, NodeId>,
  /// Body scope per [`crate::ast::func::Func`] node.
  pub func_scopes: HashMap<NodeId, ScopeId>,
  pub top_scope: ScopeId,
}

pub(super) fn declare(module: &Module) -> StripResult<Declared> {
  let mut binder = Binder {
    module,
    scopes: Vec::new(),
    symbols: Vec::new(),
    declared: HashMap::default(),
    parents: HashMap::default(),
    func_scopes: HashMap::default(),
  };
  let top_scope = binder.new_scope(None, ScopeKind::Module);
  for stmt in module.body.iter() {
    binder.stmt(top_scope, None, *stmt)?;
  }
  Ok(Declared {
    scopes: binder.scopes,
    symbols: binder.symbols,
    declared: binder.declared,
    parents: binder.parents,
    func_scopes: binder.func_scopes,
    top_scope,
  })
}

struct Binder<'a> {
  module: &'a Module,
  scopes: Vec<ScopeData>,
  symbols: Vec<SymbolData>,
  declared: HashMap<NodeId, SymbolId>,
  parents: HashMap<NodeId, NodeId>,
  func_scopes: HashMap<NodeId, ScopeId>,
}

impl Binder<'_> {
  fn new_scope(&mut self, parent: Option<ScopeId>, kind: ScopeKind) -> ScopeId {
    let id = ScopeId(self.scopes.len() as u32);
    self.scopes.push(ScopeData {
      parent,
      kind,
      symbols: BTreeMap::new(),
    });
    id
  }

  fn declare_symbol(
    &mut self,
    scope: ScopeId,
    ident: NodeId,
    name: &str,
    decl_kind: DeclKind,
    decl_node: NodeId,
  ) {
    let id = SymbolId(self.symbols.len() as u32);
    self.symbols.push(SymbolData {
      name: name.into(),
      decl_scope: scope,
      decl_kind,
      decl_node,
    });
    self.scopes[scope.0 as usize].symbols.insert(name.into(), id);
    self.declared.insert(ident, id);
  }

  fn edge(&mut self, parent: Option<NodeId>, child: NodeId) {
    if let Some(parent) = parent {
      self.parents.insert(child, parent);
    }
  }

  fn stmt(&mut self, scope: ScopeId, parent: Option<NodeId>, id: NodeId) -> StripResult<()> {
    self.edge(parent, id);
    let module = self.module;
    match module.stmt(id)? {
      Stmt::VarDecl(decl) => {
        for d in decl.declarators.iter() {
          self.parents.insert(*d, id);
          let declarator = module.declarator(*d)?;
          self.pattern(scope, *d, declarator.pattern, DeclKind::Declarator, *d)?;
          if let Some(init) = declarator.init {
            self.expr(scope, *d, init)?;
          }
        }
      }
      Stmt::FuncDecl(decl) => {
        let func_id = decl.func;
        self.parents.insert(func_id, id);
        let func = module.func(func_id)?;
        if let Some(name) = func.name {
          self.parents.insert(name, func_id);
          if let Some(name_str) = module.id_pat_name(name)? {
            // The declaring construct is the whole statement: references must
            // escape it to count.
            self.declare_symbol(scope, name, name_str, DeclKind::FuncDecl, id);
          }
        }
        self.func_like(scope, func_id, false)?;
      }
      Stmt::Import(import) => {
        for s in import.specifiers.iter() {
          self.parents.insert(*s, id);
          let spec = module.import_spec(*s)?;
          self.parents.insert(spec.local, *s);
          if let Some(name) = module.id_pat_name(spec.local)? {
            self.declare_symbol(scope, spec.local, name, DeclKind::ImportSpec, *s);
          }
        }
      }
      Stmt::ExportList(list) => {
        for s in list.specifiers.iter() {
          self.parents.insert(*s, id);
          let spec = module.export_spec(*s)?;
          self.parents.insert(spec.local, *s);
        }
      }
      Stmt::Expr(stmt) => self.expr(scope, id, stmt.expr)?,
      Stmt::Return(stmt) => {
        if let Some(value) = stmt.value {
          self.expr(scope, id, value)?;
        }
      }
    }
    Ok(())
  }

  fn pattern(
    &mut self,
    scope: ScopeId,
    parent: NodeId,
    id: NodeId,
    decl_kind: DeclKind,
    decl_node: NodeId,
  ) -> StripResult<()> {
    self.parents.insert(id, parent);
    let module = self.module;
    match module.pat(id)? {
      Pat::Id(p) => {
        let name = p.name.clone();
        self.declare_symbol(scope, id, &name, decl_kind, decl_node);
      }
      Pat::Object(p) => {
        for prop in p.properties.iter() {
          self.parents.insert(*prop, id);
          match module.object_pat_prop(*prop)? {
            ObjectPatProp::KeyValue(kv) => {
              self.pattern(scope, *prop, kv.value, decl_kind, decl_node)?
            }
            ObjectPatProp::Rest(rest) => {
              self.pattern(scope, *prop, rest.argument, decl_kind, decl_node)?
            }
          }
        }
      }
      Pat::Array(p) => {
        for el in p.elements.iter().flatten() {
          self.pattern(scope, id, *el, decl_kind, decl_node)?;
        }
      }
      Pat::Rest(p) => self.pattern(scope, id, p.argument, decl_kind, decl_node)?,
    }
    Ok(())
  }

  fn expr(&mut self, scope: ScopeId, parent: NodeId, id: NodeId) -> StripResult<()> {
    self.parents.insert(id, parent);
    let module = self.module;
    match module.expr(id)? {
      Expr::Id(_) | Expr::Lit(_) => {}
      Expr::Call(e) => {
        self.expr(scope, id, e.callee)?;
        for arg in e.args.iter() {
          self.expr(scope, id, *arg)?;
        }
      }
      Expr::Member(e) => self.expr(scope, id, e.object)?,
      Expr::Binary(e) => {
        self.expr(scope, id, e.left)?;
        self.expr(scope, id, e.right)?;
      }
      Expr::Cond(e) => {
        self.expr(scope, id, e.test)?;
        self.expr(scope, id, e.consequent)?;
        self.expr(scope, id, e.alternate)?;
      }
      Expr::Assign(e) => {
        self.expr(scope, id, e.target)?;
        self.expr(scope, id, e.value)?;
      }
      Expr::Func(e) => {
        self.parents.insert(e.func, id);
        self.func_like(scope, e.func, true)?;
      }
      Expr::Object(e) => {
        for prop in e.properties.iter() {
          self.expr(scope, id, prop.value)?;
        }
      }
      Expr::Array(e) => {
        for el in e.elements.iter() {
          self.expr(scope, id, *el)?;
        }
      }
    }
    Ok(())
  }

  /// Creates the scopes for a function and declares its params and body.
  /// `declare_own_name` is set for named function expressions only; a
  /// declaration's name belongs to the enclosing scope and was declared by the
  /// caller.
  fn func_like(
    &mut self,
    outer: ScopeId,
    func_id: NodeId,
    declare_own_name: bool,
  ) -> StripResult<()> {
    let module = self.module;
    let func = module.func(func_id)?;

    let mut parent_scope = outer;
    if declare_own_name && !func.arrow {
      if let Some(name) = func.name {
        self.parents.insert(name, func_id);
        if let Some(name_str) = module.id_pat_name(name)? {
          let name_str = name_str.to_string();
          let name_scope = self.new_scope(Some(outer), ScopeKind::FunctionExpressionName);
          self.declare_symbol(name_scope, name, &name_str, DeclKind::FuncExprName, func_id);
          parent_scope = name_scope;
        }
      }
    }

    let kind = if func.arrow {
      ScopeKind::ArrowFunction
    } else {
      ScopeKind::Function
    };
    let body_scope = self.new_scope(Some(parent_scope), kind);
    self.func_scopes.insert(func_id, body_scope);

    for param in func.params.iter() {
      self.pattern(body_scope, func_id, *param, DeclKind::Param, *param)?;
    }
    for stmt in func.body.iter() {
      self.stmt(body_scope, Some(func_id), *stmt)?;
    }
    Ok(())
  }
}
