//! Inspection CLI for fnty function types.
//!
//! `fnty check <env.json>` loads declarations and named types from a JSON
//! environment and reports how each type relates to the built-in function
//! family. `fnty builtins` lists the family itself.

pub mod args;
pub mod driver;
pub mod environment;
pub mod tracing_config;
pub mod type_expr;
