//! Typed node constructors: the surface a producing parser (and the tests)
//! build a [`Module`] with. Constructors whose category name is taken by a
//! typed accessor carry a `new_` prefix (`new_func` allocates, `func` reads).

use crate::ast::expr::ArrayLit;
use crate::ast::expr::AssignExpr;
use crate::ast::expr::BinaryExpr;
use crate::ast::expr::BinaryOp;
use crate::ast::expr::CallExpr;
use crate::ast::expr::CondExpr;
use crate::ast::expr::Expr;
use crate::ast::expr::FuncExpr;
use crate::ast::expr::IdExpr;
use crate::ast::expr::Lit;
use crate::ast::expr::MemberExpr;
use crate::ast::expr::ObjectLit;
use crate::ast::expr::ObjectLitProp;
use crate::ast::func::Func;
use crate::ast::import_export::ExportSpec;
use crate::ast::import_export::ImportSpec;
use crate::ast::import_export::ImportSpecKind;
use crate::ast::node::Module;
use crate::ast::node::NodeId;
use crate::ast::pat::ArrayPat;
use crate::ast::pat::IdPat;
use crate::ast::pat::KeyValuePatProp;
use crate::ast::pat::ObjectPat;
use crate::ast::pat::ObjectPatProp;
use crate::ast::pat::Pat;
use crate::ast::pat::RestPat;
use crate::ast::pat::RestPatProp;
use crate::ast::stmt::Declarator;
use crate::ast::stmt::ExportListStmt;
use crate::ast::stmt::ExprStmt;
use crate::ast::stmt::FuncDecl;
use crate::ast::stmt::ImportStmt;
use crate::ast::stmt::ReturnStmt;
use crate::ast::stmt::Stmt;
use crate::ast::stmt::VarDecl;
use crate::ast::stmt::VarDeclMode;

impl Module {
  pub fn push(&mut self, stmt: NodeId) {
    self.body.push(stmt);
  }

  // Patterns.

  pub fn id_pat(&mut self, name: &str) -> NodeId {
    self.alloc(Pat::Id(IdPat { name: name.into() }))
  }

  pub fn object_pat(&mut self, properties: Vec<NodeId>) -> NodeId {
    self.alloc(Pat::Object(ObjectPat { properties }))
  }

  pub fn array_pat(&mut self, elements: Vec<Option<NodeId>>) -> NodeId {
    self.alloc(Pat::Array(ArrayPat { elements }))
  }

  pub fn rest_pat(&mut self, argument: NodeId) -> NodeId {
    self.alloc(Pat::Rest(RestPat { argument }))
  }

  pub fn key_value_prop(&mut self, key: &str, value: NodeId) -> NodeId {
    self.alloc(ObjectPatProp::KeyValue(KeyValuePatProp {
      key: key.into(),
      value,
    }))
  }

  pub fn rest_prop(&mut self, argument: NodeId) -> NodeId {
    self.alloc(ObjectPatProp::Rest(RestPatProp { argument }))
  }

  // Expressions.

  pub fn id_expr(&mut self, name: &str) -> NodeId {
    self.alloc(Expr::Id(IdExpr { name: name.into() }))
  }

  pub fn lit(&mut self, lit: Lit) -> NodeId {
    self.alloc(Expr::Lit(lit))
  }

  pub fn num(&mut self, value: f64) -> NodeId {
    self.lit(Lit::Num(value))
  }

  pub fn str(&mut self, value: &str) -> NodeId {
    self.lit(Lit::Str(value.into()))
  }

  pub fn call(&mut self, callee: NodeId, args: Vec<NodeId>) -> NodeId {
    self.alloc(Expr::Call(CallExpr { callee, args }))
  }

  pub fn member(&mut self, object: NodeId, property: &str) -> NodeId {
    self.alloc(Expr::Member(MemberExpr {
      object,
      property: property.into(),
    }))
  }

  pub fn binary(&mut self, op: BinaryOp, left: NodeId, right: NodeId) -> NodeId {
    self.alloc(Expr::Binary(BinaryExpr { op, left, right }))
  }

  pub fn cond(&mut self, test: NodeId, consequent: NodeId, alternate: NodeId) -> NodeId {
    self.alloc(Expr::Cond(CondExpr {
      test,
      consequent,
      alternate,
    }))
  }

  pub fn assign(&mut self, target: NodeId, value: NodeId) -> NodeId {
    self.alloc(Expr::Assign(AssignExpr { target, value }))
  }

  pub fn func_expr(&mut self, func: NodeId) -> NodeId {
    self.alloc(Expr::Func(FuncExpr { func }))
  }

  pub fn object_lit(&mut self, properties: Vec<(&str, NodeId)>) -> NodeId {
    let properties = properties
      .into_iter()
      .map(|(key, value)| ObjectLitProp {
        key: key.into(),
        value,
      })
      .collect();
    self.alloc(Expr::Object(ObjectLit { properties }))
  }

  pub fn array_lit(&mut self, elements: Vec<NodeId>) -> NodeId {
    self.alloc(Expr::Array(ArrayLit { elements }))
  }

  // Functions.

  pub fn new_func(
    &mut self,
    name: Option<NodeId>,
    params: Vec<NodeId>,
    body: Vec<NodeId>,
    arrow: bool,
  ) -> NodeId {
    self.alloc(Func {
      name,
      params,
      body,
      arrow,
    })
  }

  pub fn arrow(&mut self, params: Vec<NodeId>, body: Vec<NodeId>) -> NodeId {
    self.new_func(None, params, body, true)
  }

  // Statements.

  pub fn new_declarator(&mut self, pattern: NodeId, init: Option<NodeId>) -> NodeId {
    self.alloc(Declarator { pattern, init })
  }

  pub fn var_decl(&mut self, mode: VarDeclMode, export: bool, declarators: Vec<NodeId>) -> NodeId {
    self.alloc(Stmt::VarDecl(VarDecl {
      mode,
      export,
      declarators,
    }))
  }

  pub fn func_decl(&mut self, export: bool, func: NodeId) -> NodeId {
    self.alloc(Stmt::FuncDecl(FuncDecl { export, func }))
  }

  pub fn new_import_spec(
    &mut self,
    kind: ImportSpecKind,
    imported: Option<&str>,
    local: NodeId,
  ) -> NodeId {
    self.alloc(ImportSpec {
      kind,
      imported: imported.map(|s| s.into()),
      local,
    })
  }

  pub fn import_stmt(&mut self, source: &str, specifiers: Vec<NodeId>) -> NodeId {
    self.alloc(Stmt::Import(ImportStmt {
      source: source.into(),
      specifiers,
    }))
  }

  pub fn new_export_spec(&mut self, local: &str, exported: &str) -> NodeId {
    let local = self.id_expr(local);
    self.alloc(ExportSpec {
      local,
      exported: exported.into(),
    })
  }

  pub fn export_list(&mut self, specifiers: Vec<NodeId>, source: Option<&str>) -> NodeId {
    self.alloc(Stmt::ExportList(ExportListStmt {
      specifiers,
      source: source.map(|s| s.into()),
    }))
  }

  pub fn expr_stmt(&mut self, expr: NodeId) -> NodeId {
    self.alloc(Stmt::Expr(ExprStmt { expr }))
  }

  pub fn ret(&mut self, value: Option<NodeId>) -> NodeId {
    self.alloc(Stmt::Return(ReturnStmt { value }))
  }
}
