//! The tree-walking evaluator for ochre translation units.
//!
//! An [`Engine`] owns a global scope wired with a builtin operation table
//! and evaluates units into child scopes retained per `(package, name)`
//! key. Everything is single-threaded and synchronous; embedders needing
//! concurrency serialize access or use one engine per thread.

pub mod builtins;
pub mod engine;
pub mod error;
pub mod scope;
pub mod value;
mod walker;

pub use engine::Engine;
pub use error::EvalError;
pub use scope::{ScopeArena, ScopeId};
pub use value::Value;
