pub mod build;
pub mod expr;
pub mod func;
pub mod import_export;
pub mod json;
pub mod node;
pub mod pat;
pub mod stmt;
