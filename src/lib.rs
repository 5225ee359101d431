//! Strips named exports from a JavaScript module tree and removes every
//! declaration that becomes unreachable as a result.
//!
//! The pass consumes a [`Module`](crate::ast::node::Module) produced by a
//! parser (see [`crate::ast::build`] for the construction surface), mutates it
//! in place, and reports the export names actually found and removed. Why a
//! given export must go (server-only, wrong target, etc.) is the caller's
//! policy; this crate only guarantees that what remains no longer mentions
//! what was removed.
//!
//! Three pieces cooperate:
//! - [`analyze::is_referenced`]: reference analysis with the asymmetric rule
//!   for named function declarations (self-calls do not count).
//! - export stripping: removes matching specifiers, declarators, and function
//!   declarations at the top level.
//! - the liveness sweep: rebinds and re-scans until an iteration removes
//!   nothing, so transitively dead helpers and imports disappear too.

use crate::analyze::collect_tracked;
use crate::ast::node::Module;
use crate::error::StripResult;
use crate::sem::bind_module;
use ahash::HashSet;

pub mod analyze;
pub mod ast;
pub mod error;
pub mod sem;
mod strip;
mod sweep;

/// The export names actually found and removed. A requested name absent from
/// the module is simply omitted, never an error.
#[derive(Debug, Default)]
pub struct RemovedExports {
  pub names: HashSet<String>,
}

impl RemovedExports {
  pub fn is_empty(&self) -> bool {
    self.names.is_empty()
  }

  pub fn contains(&self, name: &str) -> bool {
    self.names.contains(name)
  }
}

/// Removes the named exports from `module` in place, then sweeps away every
/// declaration, destructuring member, and import specifier that lost its last
/// reference as a consequence.
///
/// ```
/// use ahash::HashSet;
/// use strip_exports_js::ast::node::Module;
/// use strip_exports_js::remove_exports;
///
/// // export function loader() { return secret(); }
/// // function secret() { return 42; }
/// let mut m = Module::new();
/// let callee = m.id_expr("secret");
/// let call = m.call(callee, vec![]);
/// let ret = m.ret(Some(call));
/// let name = m.id_pat("loader");
/// let func = m.new_func(Some(name), vec![], vec![ret], false);
/// let loader = m.func_decl(true, func);
/// m.push(loader);
/// let value = m.num(42.0);
/// let ret = m.ret(Some(value));
/// let name = m.id_pat("secret");
/// let func = m.new_func(Some(name), vec![], vec![ret], false);
/// let secret = m.func_decl(false, func);
/// m.push(secret);
///
/// let mut names = HashSet::default();
/// names.insert("loader".to_string());
/// let removed = remove_exports(&mut m, &names).unwrap();
/// assert!(removed.contains("loader"));
/// // `secret` was only called by the removed export, so it is gone too.
/// assert!(m.body.is_empty());
/// ```
pub fn remove_exports(
  module: &mut Module,
  export_names: &HashSet<String>,
) -> StripResult<RemovedExports> {
  // Reference state must be computed before any removal: identifiers that are
  // referenced now, possibly only through an export about to be stripped, are
  // exactly the later removal candidates.
  let sem = bind_module(module)?;
  let tracked = collect_tracked(module, &sem)?;

  let names = strip::strip_exports(module, export_names)?;
  if names.is_empty() {
    // Nothing was stripped, so nothing downstream could have become dead.
    return Ok(RemovedExports { names });
  }

  sweep::sweep_to_fixed_point(module, &tracked)?;
  Ok(RemovedExports { names })
}
