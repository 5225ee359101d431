use ahash::HashSet;
use strip_exports_js::ast::expr::BinaryOp;
use strip_exports_js::ast::node::Module;
use strip_exports_js::ast::node::NodeId;
use strip_exports_js::ast::stmt::Stmt;
use strip_exports_js::ast::stmt::VarDeclMode;
use strip_exports_js::remove_exports;

fn names(names: &[&str]) -> HashSet<String> {
  names.iter().map(|n| n.to_string()).collect()
}

/// `[export] function <name>() { return <callee>(); }`
fn func_calling(m: &mut Module, name: &str, export: bool, callee: &str) -> NodeId {
  let callee = m.id_expr(callee);
  let call = m.call(callee, vec![]);
  let ret = m.ret(Some(call));
  let name = m.id_pat(name);
  let func = m.new_func(Some(name), vec![], vec![ret], false);
  m.func_decl(export, func)
}

/// `[export] function <name>() { return 1; }`
fn leaf_func(m: &mut Module, name: &str, export: bool) -> NodeId {
  let one = m.num(1.0);
  let ret = m.ret(Some(one));
  let name = m.id_pat(name);
  let func = m.new_func(Some(name), vec![], vec![ret], false);
  m.func_decl(export, func)
}

fn top_level_func_names(m: &Module) -> Vec<String> {
  m.body
    .iter()
    .filter_map(|id| match m.stmt(*id).unwrap() {
      Stmt::FuncDecl(decl) => {
        let name = m.func(decl.func).unwrap().name.unwrap();
        Some(m.id_pat_name(name).unwrap().unwrap().to_string())
      }
      _ => None,
    })
    .collect()
}

#[test]
fn removes_export_and_transitively_dead_helpers() {
  // export function loader() { return helper(); }
  // function helper() { return util(); }
  // function util() { return 1; }
  // export function action() { return 1; }
  let mut m = Module::new();
  let loader = func_calling(&mut m, "loader", true, "helper");
  m.push(loader);
  let helper = func_calling(&mut m, "helper", false, "util");
  m.push(helper);
  let util = leaf_func(&mut m, "util", false);
  m.push(util);
  let action = leaf_func(&mut m, "action", true);
  m.push(action);

  let removed = remove_exports(&mut m, &names(&["loader"])).expect("remove");
  assert!(removed.contains("loader"));
  assert_eq!(top_level_func_names(&m), vec!["action"]);
}

#[test]
fn requested_name_absent_from_module_is_omitted() {
  let mut m = Module::new();
  let loader = leaf_func(&mut m, "loader", true);
  m.push(loader);

  let removed = remove_exports(&mut m, &names(&["loader", "missing"])).expect("remove");
  assert!(removed.contains("loader"));
  assert!(!removed.contains("missing"));
}

#[test]
fn no_match_leaves_the_module_structurally_identical() {
  let mut m = Module::new();
  let loader = func_calling(&mut m, "loader", true, "helper");
  m.push(loader);
  let helper = leaf_func(&mut m, "helper", false);
  m.push(helper);

  let before = m.to_json().expect("json");
  let removed = remove_exports(&mut m, &names(&["nothing"])).expect("remove");
  assert!(removed.is_empty());
  assert_eq!(m.to_json().expect("json"), before);
}

#[test]
fn removal_is_idempotent() {
  let mut m = Module::new();
  let loader = func_calling(&mut m, "loader", true, "helper");
  m.push(loader);
  let helper = leaf_func(&mut m, "helper", false);
  m.push(helper);
  let action = leaf_func(&mut m, "action", true);
  m.push(action);

  let targets = names(&["loader"]);
  let first = remove_exports(&mut m, &targets).expect("remove");
  assert!(first.contains("loader"));
  let after_first = m.to_json().expect("json");

  let second = remove_exports(&mut m, &targets).expect("remove");
  assert!(second.is_empty());
  assert_eq!(m.to_json().expect("json"), after_first);
}

#[test]
fn exported_declarator_is_removed_and_siblings_kept() {
  // export const a = 1, b = 2;
  let mut m = Module::new();
  let a = m.id_pat("a");
  let one = m.num(1.0);
  let d_a = m.new_declarator(a, Some(one));
  let b = m.id_pat("b");
  let two = m.num(2.0);
  let d_b = m.new_declarator(b, Some(two));
  let decl = m.var_decl(VarDeclMode::Const, true, vec![d_a, d_b]);
  m.push(decl);

  let removed = remove_exports(&mut m, &names(&["a"])).expect("remove");
  assert!(removed.contains("a"));
  assert_eq!(m.body.len(), 1);
  let Stmt::VarDecl(decl) = m.stmt(m.body[0]).expect("stmt") else {
    panic!("expected var decl");
  };
  assert_eq!(decl.declarators.len(), 1);
  let pattern = m.declarator(decl.declarators[0]).expect("declarator").pattern;
  assert_eq!(m.id_pat_name(pattern).expect("pat"), Some("b"));
}

#[test]
fn statement_goes_when_its_last_declarator_is_stripped() {
  // export const a = 1;
  let mut m = Module::new();
  let a = m.id_pat("a");
  let one = m.num(1.0);
  let d = m.new_declarator(a, Some(one));
  let decl = m.var_decl(VarDeclMode::Const, true, vec![d]);
  m.push(decl);

  let removed = remove_exports(&mut m, &names(&["a"])).expect("remove");
  assert!(removed.contains("a"));
  assert!(m.body.is_empty());
}

#[test]
fn self_recursion_does_not_keep_a_function_alive() {
  // function rec(n) { return rec(n - 1); }
  // export { rec };
  let mut m = Module::new();
  let callee = m.id_expr("rec");
  let n = m.id_expr("n");
  let one = m.num(1.0);
  let arg = m.binary(BinaryOp::Sub, n, one);
  let call = m.call(callee, vec![arg]);
  let ret = m.ret(Some(call));
  let name = m.id_pat("rec");
  let param = m.id_pat("n");
  let func = m.new_func(Some(name), vec![param], vec![ret], false);
  let decl = m.func_decl(false, func);
  m.push(decl);
  let spec = m.new_export_spec("rec", "rec");
  let list = m.export_list(vec![spec], None);
  m.push(list);

  let removed = remove_exports(&mut m, &names(&["rec"])).expect("remove");
  assert!(removed.contains("rec"));
  assert!(m.body.is_empty());
}

#[test]
fn assignment_bound_function_is_swept_with_its_references() {
  // let handler;
  // handler = function () { return helper(); };
  // function helper() { return 1; }
  // export function page() { return handler(); }
  let mut m = Module::new();
  let handler_pat = m.id_pat("handler");
  let d = m.new_declarator(handler_pat, None);
  let decl = m.var_decl(VarDeclMode::Let, false, vec![d]);
  m.push(decl);

  let callee = m.id_expr("helper");
  let call = m.call(callee, vec![]);
  let ret = m.ret(Some(call));
  let func = m.new_func(None, vec![], vec![ret], false);
  let func_expr = m.func_expr(func);
  let target = m.id_expr("handler");
  let assign = m.assign(target, func_expr);
  let assign_stmt = m.expr_stmt(assign);
  m.push(assign_stmt);

  let helper = leaf_func(&mut m, "helper", false);
  m.push(helper);
  let page = func_calling(&mut m, "page", true, "handler");
  m.push(page);

  let removed = remove_exports(&mut m, &names(&["page"])).expect("remove");
  assert!(removed.contains("page"));
  // The assignment statement, the declarator, and the helper all lose their
  // last reference once `page` is gone.
  assert!(m.body.is_empty());
}

#[test]
fn code_dead_before_the_pass_is_left_alone() {
  // function untouched() { return 1; }
  // export function loader() { return 1; }
  let mut m = Module::new();
  let untouched = leaf_func(&mut m, "untouched", false);
  m.push(untouched);
  let loader = leaf_func(&mut m, "loader", true);
  m.push(loader);

  let removed = remove_exports(&mut m, &names(&["loader"])).expect("remove");
  assert!(removed.contains("loader"));
  // `untouched` had no references before the strip, so it was never a
  // candidate; only removals caused by the strip happen.
  assert_eq!(top_level_func_names(&m), vec!["untouched"]);
}
