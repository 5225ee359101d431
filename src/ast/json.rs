//! Resolved-tree serialization: the seam a code generator (or a test
//! assertion) consumes. Unlike serializing the raw arena, this walks the body
//! so detached nodes never appear in the output.

use crate::ast::expr::Expr;
use crate::ast::node::Module;
use crate::ast::node::NodeId;
use crate::ast::pat::ObjectPatProp;
use crate::ast::pat::Pat;
use crate::ast::stmt::Stmt;
use crate::error::StripResult;
use serde_json::json;
use serde_json::Value;

impl Module {
  pub fn to_json(&self) -> StripResult<Value> {
    let body = self
      .body
      .iter()
      .map(|id| self.stmt_json(*id))
      .collect::<StripResult<Vec<_>>>()?;
    Ok(json!({ "type": "Module", "body": body }))
  }

  fn stmt_json(&self, id: NodeId) -> StripResult<Value> {
    Ok(match self.stmt(id)? {
      Stmt::VarDecl(decl) => {
        let declarators = decl
          .declarators
          .iter()
          .map(|d| self.declarator_json(*d))
          .collect::<StripResult<Vec<_>>>()?;
        json!({
          "type": "VarDecl",
          "mode": decl.mode,
          "export": decl.export,
          "declarators": declarators,
        })
      }
      Stmt::FuncDecl(decl) => json!({
        "type": "FuncDecl",
        "export": decl.export,
        "func": self.func_json(decl.func)?,
      }),
      Stmt::Import(import) => {
        let specifiers = import
          .specifiers
          .iter()
          .map(|s| self.import_spec_json(*s))
          .collect::<StripResult<Vec<_>>>()?;
        json!({
          "type": "Import",
          "source": import.source,
          "specifiers": specifiers,
        })
      }
      Stmt::ExportList(list) => {
        let specifiers = list
          .specifiers
          .iter()
          .map(|s| self.export_spec_json(*s))
          .collect::<StripResult<Vec<_>>>()?;
        json!({
          "type": "ExportList",
          "source": list.source,
          "specifiers": specifiers,
        })
      }
      Stmt::Expr(stmt) => json!({
        "type": "ExprStmt",
        "expr": self.expr_json(stmt.expr)?,
      }),
      Stmt::Return(stmt) => json!({
        "type": "Return",
        "value": match stmt.value {
          Some(value) => self.expr_json(value)?,
          None => Value::Null,
        },
      }),
    })
  }

  fn declarator_json(&self, id: NodeId) -> StripResult<Value> {
    let declarator = self.declarator(id)?;
    Ok(json!({
      "type": "Declarator",
      "pattern": self.pat_json(declarator.pattern)?,
      "init": match declarator.init {
        Some(init) => self.expr_json(init)?,
        None => Value::Null,
      },
    }))
  }

  fn pat_json(&self, id: NodeId) -> StripResult<Value> {
    Ok(match self.pat(id)? {
      Pat::Id(p) => json!({ "type": "Id", "name": p.name }),
      Pat::Object(p) => {
        let properties = p
          .properties
          .iter()
          .map(|prop| self.object_pat_prop_json(*prop))
          .collect::<StripResult<Vec<_>>>()?;
        json!({ "type": "ObjectPat", "properties": properties })
      }
      Pat::Array(p) => {
        let elements = p
          .elements
          .iter()
          .map(|el| match el {
            Some(el) => self.pat_json(*el),
            None => Ok(Value::Null),
          })
          .collect::<StripResult<Vec<_>>>()?;
        json!({ "type": "ArrayPat", "elements": elements })
      }
      Pat::Rest(p) => json!({ "type": "RestPat", "argument": self.pat_json(p.argument)? }),
    })
  }

  fn object_pat_prop_json(&self, id: NodeId) -> StripResult<Value> {
    Ok(match self.object_pat_prop(id)? {
      ObjectPatProp::KeyValue(prop) => json!({
        "type": "KeyValue",
        "key": prop.key,
        "value": self.pat_json(prop.value)?,
      }),
      ObjectPatProp::Rest(prop) => json!({
        "type": "Rest",
        "argument": self.pat_json(prop.argument)?,
      }),
    })
  }

  fn expr_json(&self, id: NodeId) -> StripResult<Value> {
    Ok(match self.expr(id)? {
      Expr::Id(e) => json!({ "type": "Id", "name": e.name }),
      Expr::Lit(lit) => json!({ "type": "Lit", "value": lit }),
      Expr::Call(e) => {
        let args = e
          .args
          .iter()
          .map(|a| self.expr_json(*a))
          .collect::<StripResult<Vec<_>>>()?;
        json!({
          "type": "Call",
          "callee": self.expr_json(e.callee)?,
          "args": args,
        })
      }
      Expr::Member(e) => json!({
        "type": "Member",
        "object": self.expr_json(e.object)?,
        "property": e.property,
      }),
      Expr::Binary(e) => json!({
        "type": "Binary",
        "op": e.op,
        "left": self.expr_json(e.left)?,
        "right": self.expr_json(e.right)?,
      }),
      Expr::Cond(e) => json!({
        "type": "Cond",
        "test": self.expr_json(e.test)?,
        "consequent": self.expr_json(e.consequent)?,
        "alternate": self.expr_json(e.alternate)?,
      }),
      Expr::Assign(e) => json!({
        "type": "Assign",
        "target": self.expr_json(e.target)?,
        "value": self.expr_json(e.value)?,
      }),
      Expr::Func(e) => json!({ "type": "FuncExpr", "func": self.func_json(e.func)? }),
      Expr::Object(e) => {
        let properties = e
          .properties
          .iter()
          .map(|prop| {
            Ok(json!({ "key": prop.key, "value": self.expr_json(prop.value)? }))
          })
          .collect::<StripResult<Vec<_>>>()?;
        json!({ "type": "ObjectLit", "properties": properties })
      }
      Expr::Array(e) => {
        let elements = e
          .elements
          .iter()
          .map(|el| self.expr_json(*el))
          .collect::<StripResult<Vec<_>>>()?;
        json!({ "type": "ArrayLit", "elements": elements })
      }
    })
  }

  fn func_json(&self, id: NodeId) -> StripResult<Value> {
    let func = self.func(id)?;
    let params = func
      .params
      .iter()
      .map(|p| self.pat_json(*p))
      .collect::<StripResult<Vec<_>>>()?;
    let body = func
      .body
      .iter()
      .map(|s| self.stmt_json(*s))
      .collect::<StripResult<Vec<_>>>()?;
    Ok(json!({
      "type": "Func",
      "name": match func.name {
        Some(name) => json!(self.id_pat_name(name)?),
        None => Value::Null,
      },
      "arrow": func.arrow,
      "params": params,
      "body": body,
    }))
  }

  fn import_spec_json(&self, id: NodeId) -> StripResult<Value> {
    let spec = self.import_spec(id)?;
    Ok(json!({
      "type": "ImportSpec",
      "kind": spec.kind,
      "imported": spec.imported,
      "local": self.pat_json(spec.local)?,
    }))
  }

  fn export_spec_json(&self, id: NodeId) -> StripResult<Value> {
    let spec = self.export_spec(id)?;
    Ok(json!({
      "type": "ExportSpec",
      "local": self.expr_json(spec.local)?,
      "exported": spec.exported,
    }))
  }
}
