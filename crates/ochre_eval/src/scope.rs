//! Nested variable scopes, arena-allocated and addressed by index.
//!
//! Records never move once allocated, so a [`ScopeId`] stays valid for the
//! lifetime of the arena that produced it. Ids are only meaningful with
//! their own arena; indexing with a foreign id panics or reads the wrong
//! record.

use crate::error::EvalError;
use crate::value::Value;
use std::collections::HashMap;

/// Handle addressing one scope record inside a [ScopeArena]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct ScopeId(usize);

#[derive(Debug, Default)]
struct ScopeRecord {
    bindings: HashMap<String, Value>,
    parent: Option<ScopeId>,
}

/// Arena owning every scope record created by an engine
#[derive(Debug, Default)]
pub struct ScopeArena {
    records: Vec<ScopeRecord>,
}

impl ScopeArena {
    /// Creates an empty arena
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocates a new scope record with an optional parent
    pub fn alloc(&mut self, parent: Option<ScopeId>) -> ScopeId {
        let id = ScopeId(self.records.len());
        self.records.push(ScopeRecord {
            bindings: HashMap::new(),
            parent,
        });
        id
    }

    /// Allocates a child of `parent`
    pub fn fork(&mut self, parent: ScopeId) -> ScopeId {
        self.alloc(Some(parent))
    }

    /// Resolves `key` through the scope chain, nearest scope first
    pub fn get(&self, scope: ScopeId, key: &str) -> Result<&Value, EvalError> {
        let mut current = Some(scope);
        while let Some(id) = current {
            let record = &self.records[id.0];
            if let Some(value) = record.bindings.get(key) {
                return Ok(value);
            }
            current = record.parent;
        }
        Err(EvalError::Undefined(key.to_string()))
    }

    /// Binds `key` to `value`.
    ///
    /// The chain is walked from `scope` toward the root and the first
    /// record already binding `key` is overwritten. Only when no record in
    /// the chain binds `key` is a new binding created, in `scope` itself.
    /// A rebinding in a fork therefore mutates the ancestor rather than
    /// shadowing it.
    pub fn set(&mut self, scope: ScopeId, key: impl Into<String>, value: Value) {
        let key = key.into();
        let target = self.find_binding(scope, &key).unwrap_or(scope);
        self.records[target.0].bindings.insert(key, value);
    }

    /// The nearest scope in the chain that already binds `key`
    fn find_binding(&self, scope: ScopeId, key: &str) -> Option<ScopeId> {
        let mut current = Some(scope);
        while let Some(id) = current {
            let record = &self.records[id.0];
            if record.bindings.contains_key(key) {
                return Some(id);
            }
            current = record.parent;
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_walks_the_chain() {
        let mut scopes = ScopeArena::new();
        let root = scopes.alloc(None);
        let child = scopes.fork(root);
        scopes.set(root, "x", Value::from(1));
        assert_eq!(scopes.get(child, "x").unwrap(), &Value::Integer(1));
    }

    #[test]
    fn test_get_prefers_the_nearest_binding() {
        let mut scopes = ScopeArena::new();
        let root = scopes.alloc(None);
        let child = scopes.fork(root);
        // `y` is unbound anywhere, so this creates the child's own binding
        scopes.set(child, "y", Value::from(5));
        // a set made on the root never touches the child's binding
        scopes.set(root, "y", Value::from(9));
        assert_eq!(scopes.get(child, "y").unwrap(), &Value::Integer(5));
        assert_eq!(scopes.get(root, "y").unwrap(), &Value::Integer(9));
    }

    #[test]
    fn test_set_overwrites_the_nearest_ancestor() {
        let mut scopes = ScopeArena::new();
        let root = scopes.alloc(None);
        scopes.set(root, "x", Value::from(1));
        let child = scopes.fork(root);
        scopes.set(child, "x", Value::from(2));
        assert_eq!(scopes.get(root, "x").unwrap(), &Value::Integer(2));
    }

    #[test]
    fn test_set_creates_locally_when_unbound_anywhere() {
        let mut scopes = ScopeArena::new();
        let root = scopes.alloc(None);
        scopes.set(root, "x", Value::from(1));
        let child = scopes.fork(root);
        scopes.set(child, "y", Value::from(3));
        assert_eq!(scopes.get(child, "y").unwrap(), &Value::Integer(3));
        assert!(matches!(
            scopes.get(root, "y"),
            Err(EvalError::Undefined(key)) if key == "y"
        ));
    }

    #[test]
    fn test_unbound_lookup_fails_at_the_root() {
        let mut scopes = ScopeArena::new();
        let root = scopes.alloc(None);
        let child = scopes.fork(root);
        assert!(matches!(
            scopes.get(child, "missing"),
            Err(EvalError::Undefined(_))
        ));
    }

    #[test]
    fn test_sibling_forks_do_not_observe_each_other() {
        let mut scopes = ScopeArena::new();
        let root = scopes.alloc(None);
        let left = scopes.fork(root);
        let right = scopes.fork(root);
        scopes.set(left, "x", Value::from(1));
        assert!(scopes.get(right, "x").is_err());
    }
}
