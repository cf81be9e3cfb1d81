use crate::value::Value;

/// An error raised while evaluating a translation unit
#[derive(Debug, Clone, thiserror::Error)]
pub enum EvalError {
    #[error("undefined variable {0:?}")]
    Undefined(String),
    #[error("can not call non-function value {0}")]
    NotCallable(Value),
    #[error("can not evaluate node {0}")]
    UnsupportedNode(&'static str),
    #[error("operation {symbol} expects {expected} arguments, got {found}")]
    ArityMismatch {
        symbol: &'static str,
        expected: usize,
        found: usize,
    },
    #[error("can not {0} {1} and {2}")]
    IllegalBinaryOperation(&'static str, Value, Value),
    #[error("no unit {package:?}/{name:?} has been added")]
    UnknownUnit { package: String, name: String },
}
