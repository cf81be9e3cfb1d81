//! The evaluation engine owning scopes and evaluated units

use crate::builtins::{BuiltinOp, DEFAULT_OPERATIONS};
use crate::error::EvalError;
use crate::scope::{ScopeArena, ScopeId};
use crate::value::Value;
use crate::walker;
use log::debug;
use ochre_ast::translation_unit::TranslationUnit;
use std::collections::HashMap;

/// Evaluates translation units and retains their scopes.
///
/// The engine owns a single global scope, wired from the operation table
/// it was constructed with, and one child scope per added unit keyed by
/// `(package, name)`.
#[derive(Debug)]
pub struct Engine {
    scopes: ScopeArena,
    global: ScopeId,
    units: HashMap<(String, String), ScopeId>,
}

impl Engine {
    /// Creates an engine with the default operation table
    /// ([`DEFAULT_OPERATIONS`]: addition, subtraction and multiplication).
    pub fn new() -> Self {
        Self::with_operations(DEFAULT_OPERATIONS.iter().copied())
    }

    /// Creates an engine with an explicit operation table
    pub fn with_operations<I>(operations: I) -> Self
    where
        I: IntoIterator<Item = &'static BuiltinOp>,
    {
        let mut scopes = ScopeArena::new();
        let global = scopes.alloc(None);
        for op in operations {
            scopes.set(global, op.symbol, Value::Builtin(op));
        }
        Self {
            scopes,
            global,
            units: HashMap::new(),
        }
    }

    /// Evaluates `unit` in a fresh fork of the global scope and records the
    /// result under `(package, name)`. Re-adding a key overwrites the prior
    /// scope. On error nothing is recorded.
    pub fn add_unit(
        &mut self,
        package: impl Into<String>,
        name: impl Into<String>,
        unit: &TranslationUnit,
    ) -> Result<(), EvalError> {
        let package = package.into();
        let name = name.into();
        debug!("adding unit {package}/{name}");
        let scope = self.scopes.fork(self.global);
        walker::walk_unit(&mut self.scopes, scope, unit)?;
        self.units.insert((package, name), scope);
        Ok(())
    }

    /// The scope a previously added unit evaluated to
    pub fn get_unit_scope(&self, package: &str, name: &str) -> Result<ScopeId, EvalError> {
        self.units
            .get(&(package.to_string(), name.to_string()))
            .copied()
            .ok_or_else(|| EvalError::UnknownUnit {
                package: package.to_string(),
                name: name.to_string(),
            })
    }

    /// Read access to every scope this engine owns
    pub fn scopes(&self) -> &ScopeArena {
        &self.scopes
    }

    /// The root scope holding the builtin operation bindings
    pub fn global_scope(&self) -> ScopeId {
        self.global
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtins;
    use ochre_ast::expr::{Expr, ExprNumber};
    use ochre_ast::operations;
    use ochre_ast::statement::{Statement, StatementLet};
    use test_log::test;

    fn let_statement(name: &str, expression: Expr) -> Statement {
        Statement::Let(StatementLet {
            name: name.to_string(),
            expression,
        })
    }

    fn number(number: i64) -> Expr {
        Expr::Number(ExprNumber { number })
    }

    #[test]
    fn test_global_scope_resolves_the_wired_operations() {
        let engine = Engine::new();
        let global = engine.global_scope();
        for symbol in [operations::ADD, operations::SUB, operations::MULT] {
            assert!(engine.scopes().get(global, symbol).is_ok());
        }
        assert!(engine.scopes().get(global, operations::FDIV).is_err());
    }

    #[test]
    fn test_add_unit_records_its_scope() {
        let mut engine = Engine::new();
        let unit = TranslationUnit::new(vec![let_statement("a", number(42))]);
        engine.add_unit("default", "test", &unit).unwrap();
        let scope = engine.get_unit_scope("default", "test").unwrap();
        assert_eq!(engine.scopes().get(scope, "a").unwrap(), &Value::Integer(42));
    }

    #[test]
    fn test_unknown_unit_is_an_error() {
        let engine = Engine::new();
        assert!(matches!(
            engine.get_unit_scope("default", "missing"),
            Err(EvalError::UnknownUnit { .. })
        ));
    }

    #[test]
    fn test_re_adding_a_unit_overwrites() {
        let mut engine = Engine::new();
        let first = TranslationUnit::new(vec![let_statement("a", number(1))]);
        let second = TranslationUnit::new(vec![let_statement("b", number(2))]);
        engine.add_unit("default", "test", &first).unwrap();
        engine.add_unit("default", "test", &second).unwrap();
        let scope = engine.get_unit_scope("default", "test").unwrap();
        assert!(engine.scopes().get(scope, "a").is_err());
        assert_eq!(engine.scopes().get(scope, "b").unwrap(), &Value::Integer(2));
    }

    #[test]
    fn test_failed_unit_is_not_recorded() {
        let mut engine = Engine::new();
        let unit = TranslationUnit::new(vec![let_statement(
            "a",
            operations::call(operations::MOD, vec![number(5), number(2)]),
        )]);
        assert!(engine.add_unit("default", "test", &unit).is_err());
        assert!(engine.get_unit_scope("default", "test").is_err());
    }

    #[test]
    fn test_custom_operation_table() {
        let engine = Engine::with_operations([&builtins::ADD]);
        let global = engine.global_scope();
        assert!(engine.scopes().get(global, operations::ADD).is_ok());
        assert!(engine.scopes().get(global, operations::SUB).is_err());
    }
}
