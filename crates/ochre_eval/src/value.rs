//! Values produced by evaluation

use crate::builtins::BuiltinOp;
use derive_more::TryInto;
use std::fmt::{Display, Formatter};

/// A value a binding can hold: an integer, or a builtin callable
#[derive(Debug, Clone, PartialEq, TryInto)]
pub enum Value {
    Integer(i64),
    Builtin(&'static BuiltinOp),
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<&'static BuiltinOp> for Value {
    fn from(value: &'static BuiltinOp) -> Self {
        Self::Builtin(value)
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Integer(integer) => write!(f, "{integer}"),
            Value::Builtin(op) => write!(f, "{}", op.symbol),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtins;

    #[test]
    fn test_try_into_integer() {
        let value = Value::from(42);
        let integer: i64 = value.try_into().unwrap();
        assert_eq!(integer, 42);
    }

    #[test]
    fn test_builtins_compare_by_symbol() {
        assert_eq!(Value::Builtin(&builtins::ADD), Value::Builtin(&builtins::ADD));
        assert_ne!(Value::Builtin(&builtins::ADD), Value::Builtin(&builtins::SUB));
        assert_ne!(Value::Builtin(&builtins::ADD), Value::Integer(0));
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::from(7).to_string(), "7");
        assert_eq!(Value::Builtin(&builtins::MULT).to_string(), "@mult");
    }
}
