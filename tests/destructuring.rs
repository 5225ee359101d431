use ahash::HashSet;
use serde_json::json;
use strip_exports_js::ast::expr::BinaryOp;
use strip_exports_js::ast::node::Module;
use strip_exports_js::ast::node::NodeId;
use strip_exports_js::ast::stmt::VarDeclMode;
use strip_exports_js::remove_exports;

fn names(names: &[&str]) -> HashSet<String> {
  names.iter().map(|n| n.to_string()).collect()
}

/// `export function <name>() { return <read>; }`
fn export_reading(m: &mut Module, name: &str, read: &str) -> NodeId {
  let read = m.id_expr(read);
  let ret = m.ret(Some(read));
  let name = m.id_pat(name);
  let func = m.new_func(Some(name), vec![], vec![ret], false);
  m.func_decl(true, func)
}

fn first_pattern_json(m: &Module) -> serde_json::Value {
  let module_json = m.to_json().expect("json");
  module_json["body"][0]["declarators"][0]["pattern"].clone()
}

#[test]
fn object_pattern_loses_only_the_dead_member() {
  // const { keep, drop } = source();
  // function source() { return 1; }
  // export function gone() { return drop; }
  let mut m = Module::new();
  let keep = m.id_pat("keep");
  let keep_prop = m.key_value_prop("keep", keep);
  let drop = m.id_pat("drop");
  let drop_prop = m.key_value_prop("drop", drop);
  let pattern = m.object_pat(vec![keep_prop, drop_prop]);
  let callee = m.id_expr("source");
  let init = m.call(callee, vec![]);
  let d = m.new_declarator(pattern, Some(init));
  let decl = m.var_decl(VarDeclMode::Const, false, vec![d]);
  m.push(decl);

  let one = m.num(1.0);
  let ret = m.ret(Some(one));
  let source_name = m.id_pat("source");
  let source_func = m.new_func(Some(source_name), vec![], vec![ret], false);
  let source = m.func_decl(false, source_func);
  m.push(source);

  let gone = export_reading(&mut m, "gone", "drop");
  m.push(gone);

  let removed = remove_exports(&mut m, &names(&["gone"])).expect("remove");
  assert!(removed.contains("gone"));
  // `keep` was never referenced so it was never tracked; it stays even though
  // nothing reads it. `source` stays because the surviving initializer still
  // calls it.
  assert_eq!(m.body.len(), 2);
  assert_eq!(
    first_pattern_json(&m),
    json!({
      "type": "ObjectPat",
      "properties": [
        { "type": "KeyValue", "key": "keep", "value": { "type": "Id", "name": "keep" } },
      ],
    })
  );
}

#[test]
fn emptied_object_pattern_drops_the_declarator() {
  // const { only } = init();
  // function init() { return 1; }
  // export function f() { return only; }
  let mut m = Module::new();
  let only = m.id_pat("only");
  let only_prop = m.key_value_prop("only", only);
  let pattern = m.object_pat(vec![only_prop]);
  let callee = m.id_expr("init");
  let init = m.call(callee, vec![]);
  let d = m.new_declarator(pattern, Some(init));
  let decl = m.var_decl(VarDeclMode::Const, false, vec![d]);
  m.push(decl);

  let one = m.num(1.0);
  let ret = m.ret(Some(one));
  let init_name = m.id_pat("init");
  let init_func = m.new_func(Some(init_name), vec![], vec![ret], false);
  let init_decl = m.func_decl(false, init_func);
  m.push(init_decl);

  let f = export_reading(&mut m, "f", "only");
  m.push(f);

  let removed = remove_exports(&mut m, &names(&["f"])).expect("remove");
  assert!(removed.contains("f"));
  // The pattern empties, the declarator goes, and `init` loses its only call
  // site on the next iteration.
  assert!(m.body.is_empty());
}

#[test]
fn rest_property_is_removable_like_any_member() {
  // const { a, ...rest } = data;
  // export function f() { return rest; }
  // export function g() { return a; }
  let mut m = Module::new();
  let a = m.id_pat("a");
  let a_prop = m.key_value_prop("a", a);
  let rest = m.id_pat("rest");
  let rest_prop = m.rest_prop(rest);
  let pattern = m.object_pat(vec![a_prop, rest_prop]);
  let init = m.id_expr("data");
  let d = m.new_declarator(pattern, Some(init));
  let decl = m.var_decl(VarDeclMode::Const, false, vec![d]);
  m.push(decl);

  let f = export_reading(&mut m, "f", "rest");
  m.push(f);
  let g = export_reading(&mut m, "g", "a");
  m.push(g);

  let removed = remove_exports(&mut m, &names(&["f"])).expect("remove");
  assert!(removed.contains("f"));
  assert_eq!(
    first_pattern_json(&m),
    json!({
      "type": "ObjectPat",
      "properties": [
        { "type": "KeyValue", "key": "a", "value": { "type": "Id", "name": "a" } },
      ],
    })
  );
}

#[test]
fn array_pattern_removal_leaves_a_hole() {
  // const [first, second, third] = data;
  // export function f() { return second; }
  // export function g() { return first + third; }
  let mut m = Module::new();
  let first = m.id_pat("first");
  let second = m.id_pat("second");
  let third = m.id_pat("third");
  let pattern = m.array_pat(vec![Some(first), Some(second), Some(third)]);
  let init = m.id_expr("data");
  let d = m.new_declarator(pattern, Some(init));
  let decl = m.var_decl(VarDeclMode::Const, false, vec![d]);
  m.push(decl);

  let f = export_reading(&mut m, "f", "second");
  m.push(f);

  let first_read = m.id_expr("first");
  let third_read = m.id_expr("third");
  let sum = m.binary(BinaryOp::Add, first_read, third_read);
  let ret = m.ret(Some(sum));
  let g_name = m.id_pat("g");
  let g_func = m.new_func(Some(g_name), vec![], vec![ret], false);
  let g = m.func_decl(true, g_func);
  m.push(g);

  let removed = remove_exports(&mut m, &names(&["f"])).expect("remove");
  assert!(removed.contains("f"));
  // `second` becomes a hole so `third` keeps its position.
  assert_eq!(
    first_pattern_json(&m),
    json!({
      "type": "ArrayPat",
      "elements": [
        { "type": "Id", "name": "first" },
        null,
        { "type": "Id", "name": "third" },
      ],
    })
  );
}

#[test]
fn array_pattern_of_only_holes_drops_the_declarator() {
  // const [, x] = data;
  // export function f() { return x; }
  let mut m = Module::new();
  let x = m.id_pat("x");
  let pattern = m.array_pat(vec![None, Some(x)]);
  let init = m.id_expr("data");
  let d = m.new_declarator(pattern, Some(init));
  let decl = m.var_decl(VarDeclMode::Const, false, vec![d]);
  m.push(decl);

  let f = export_reading(&mut m, "f", "x");
  m.push(f);

  let removed = remove_exports(&mut m, &names(&["f"])).expect("remove");
  assert!(removed.contains("f"));
  // Removing `x` leaves nothing but holes, so the whole declarator goes.
  assert!(m.body.is_empty());
}

#[test]
fn nested_pattern_members_are_never_removed() {
  // const { outer: { inner } } = data;
  // export function f() { return inner; }
  let mut m = Module::new();
  let inner = m.id_pat("inner");
  let inner_prop = m.key_value_prop("inner", inner);
  let nested = m.object_pat(vec![inner_prop]);
  let outer_prop = m.key_value_prop("outer", nested);
  let pattern = m.object_pat(vec![outer_prop]);
  let init = m.id_expr("data");
  let d = m.new_declarator(pattern, Some(init));
  let decl = m.var_decl(VarDeclMode::Const, false, vec![d]);
  m.push(decl);

  let f = export_reading(&mut m, "f", "inner");
  m.push(f);

  let removed = remove_exports(&mut m, &names(&["f"])).expect("remove");
  assert!(removed.contains("f"));
  // A member whose value is itself a pattern binds no removable identifier,
  // so the declaration survives intact.
  assert_eq!(m.body.len(), 1);
  assert_eq!(
    first_pattern_json(&m),
    json!({
      "type": "ObjectPat",
      "properties": [
        {
          "type": "KeyValue",
          "key": "outer",
          "value": {
            "type": "ObjectPat",
            "properties": [
              { "type": "KeyValue", "key": "inner", "value": { "type": "Id", "name": "inner" } },
            ],
          },
        },
      ],
    })
  );
}
