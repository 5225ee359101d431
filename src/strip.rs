//! Export stripping: removes export constructs matching the target name set
//! and records which names were actually present.

use crate::ast::node::Module;
use crate::ast::node::NodeId;
use crate::ast::pat::Pat;
use crate::ast::stmt::Stmt;
use crate::error::StripResult;
use ahash::HashSet;

pub(crate) fn strip_exports(
  module: &mut Module,
  export_names: &HashSet<String>,
) -> StripResult<HashSet<String>> {
  let mut removed = HashSet::default();
  let body = module.body.clone();
  let mut kept_body = Vec::with_capacity(body.len());
  for id in body {
    if strip_stmt(module, id, export_names, &mut removed)? {
      kept_body.push(id);
    }
  }
  module.body = kept_body;
  Ok(removed)
}

/// Returns whether the statement survives. Only top-level export constructs
/// are touched; everything else passes through untouched.
fn strip_stmt(
  module: &mut Module,
  id: NodeId,
  export_names: &HashSet<String>,
  removed: &mut HashSet<String>,
) -> StripResult<bool> {
  enum View {
    ExportList(Vec<NodeId>),
    ExportedVarDecl(Vec<NodeId>),
    ExportedFuncDecl(NodeId),
    Keep,
  }

  let view = match module.stmt(id)? {
    Stmt::ExportList(list) => View::ExportList(list.specifiers.clone()),
    Stmt::VarDecl(decl) if decl.export => View::ExportedVarDecl(decl.declarators.clone()),
    Stmt::FuncDecl(decl) if decl.export => View::ExportedFuncDecl(decl.func),
    _ => View::Keep,
  };

  match view {
    View::ExportList(specifiers) => {
      let mut kept = Vec::with_capacity(specifiers.len());
      for s in specifiers {
        let exported = module.export_spec(s)?.exported.clone();
        if export_names.contains(&exported) {
          removed.insert(exported);
        } else {
          kept.push(s);
        }
      }
      let survives = !kept.is_empty();
      if let Stmt::ExportList(list) = module.stmt_mut(id)? {
        list.specifiers = kept;
      }
      Ok(survives)
    }
    View::ExportedVarDecl(declarators) => {
      let mut kept = Vec::with_capacity(declarators.len());
      for d in declarators {
        let pattern = module.declarator(d)?.pattern;
        // Only the simple-identifier shape is matched here; destructuring
        // declarators are stripped member-by-member during the sweep, never
        // by export name.
        let matched = match module.pat(pattern)? {
          Pat::Id(p) if export_names.contains(&p.name) => Some(p.name.clone()),
          _ => None,
        };
        match matched {
          Some(name) => {
            removed.insert(name);
          }
          None => kept.push(d),
        }
      }
      let survives = !kept.is_empty();
      if let Stmt::VarDecl(decl) = module.stmt_mut(id)? {
        decl.declarators = kept;
      }
      Ok(survives)
    }
    View::ExportedFuncDecl(func_id) => {
      let name = module.func(func_id)?.name;
      if let Some(name) = name {
        if let Some(name) = module.id_pat_name(name)? {
          if export_names.contains(name) {
            removed.insert(name.to_string());
            return Ok(false);
          }
        }
      }
      Ok(true)
    }
    View::Keep => Ok(true),
  }
}
