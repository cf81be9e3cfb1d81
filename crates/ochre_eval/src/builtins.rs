//! Builtin operations wired into an engine's global scope.
//!
//! The parser desugars every operator in the grammar to a call naming one
//! of the `ochre_ast::operations` symbols, but [`DEFAULT_OPERATIONS`]
//! wires only addition, subtraction and multiplication. Evaluating any of
//! the remaining symbols fails with an undefined-variable error; a custom
//! table can be supplied through [`Engine::with_operations`].
//!
//! [`Engine::with_operations`]: crate::engine::Engine::with_operations

use crate::error::EvalError;
use crate::value::Value;
use ochre_ast::operations;

/// A builtin operation resolvable through the scope chain
#[derive(Debug)]
pub struct BuiltinOp {
    /// the identifier the operation is bound to
    pub symbol: &'static str,
    /// number of arguments the function takes
    pub arity: usize,
    pub function: fn(&[Value]) -> Result<Value, EvalError>,
}

impl PartialEq for BuiltinOp {
    fn eq(&self, other: &Self) -> bool {
        self.symbol == other.symbol
    }
}

/// integer addition
pub static ADD: BuiltinOp = BuiltinOp {
    symbol: operations::ADD,
    arity: 2,
    function: |arguments| match arguments {
        [Value::Integer(left), Value::Integer(right)] => Ok(Value::Integer(left + right)),
        [left, right] => Err(EvalError::IllegalBinaryOperation(
            "add",
            left.clone(),
            right.clone(),
        )),
        _ => unreachable!("arity is checked before invocation"),
    },
};

/// integer subtraction
pub static SUB: BuiltinOp = BuiltinOp {
    symbol: operations::SUB,
    arity: 2,
    function: |arguments| match arguments {
        [Value::Integer(left), Value::Integer(right)] => Ok(Value::Integer(left - right)),
        [left, right] => Err(EvalError::IllegalBinaryOperation(
            "subtract",
            left.clone(),
            right.clone(),
        )),
        _ => unreachable!("arity is checked before invocation"),
    },
};

/// integer multiplication
pub static MULT: BuiltinOp = BuiltinOp {
    symbol: operations::MULT,
    arity: 2,
    function: |arguments| match arguments {
        [Value::Integer(left), Value::Integer(right)] => Ok(Value::Integer(left * right)),
        [left, right] => Err(EvalError::IllegalBinaryOperation(
            "multiply",
            left.clone(),
            right.clone(),
        )),
        _ => unreachable!("arity is checked before invocation"),
    },
};

/// The operations a freshly constructed engine resolves.
///
/// Deliberately smaller than the symbol vocabulary the parser emits; see
/// the module docs.
pub static DEFAULT_OPERATIONS: &[&BuiltinOp] = &[&ADD, &SUB, &MULT];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add() {
        let result = (ADD.function)(&[Value::from(4), Value::from(6)]).unwrap();
        assert_eq!(result, Value::Integer(10));
    }

    #[test]
    fn test_operands_must_be_integers() {
        let result = (ADD.function)(&[Value::from(4), Value::Builtin(&MULT)]);
        assert!(matches!(
            result,
            Err(EvalError::IllegalBinaryOperation("add", _, _))
        ));
    }

    #[test]
    fn test_default_table_is_the_wired_subset() {
        let symbols: Vec<_> = DEFAULT_OPERATIONS.iter().map(|op| op.symbol).collect();
        assert_eq!(
            symbols,
            vec![operations::ADD, operations::SUB, operations::MULT]
        );
    }
}
