//! Builtin operation symbols.
//!
//! Operator applications are desugared into calls whose function is a
//! variable reference naming one of these symbols. They are plain
//! identifiers resolved through the same scope chain as user bindings;
//! there is no separate operator namespace.

use crate::expr::{Expr, ExprCall, ExprVariable};
use ochre_tokens::id::Id;

pub const ADD: &str = "@add";
pub const SUB: &str = "@sub";
pub const MULT: &str = "@mult";
pub const FDIV: &str = "@fdiv";
pub const IDIV: &str = "@idiv";
pub const MOD: &str = "@mod";
pub const NOT: &str = "@not";

pub const AND: &str = "@and";
pub const OR: &str = "@or";
pub const NEG: &str = "@neg";

pub const EQL: &str = "@eql";
pub const NEQ: &str = "@neq";
pub const LES: &str = "@les";
pub const GRT: &str = "@grt";
pub const LTE: &str = "@lte";
pub const GTE: &str = "@gte";

/// Builds the call node applying a builtin operation to its arguments
pub fn call(symbol: &str, arguments: Vec<Expr>) -> Expr {
    Expr::Call(ExprCall {
        function: Box::new(Expr::Variable(ExprVariable {
            path: Id::from(symbol),
        })),
        arguments,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::ExprNumber;

    #[test]
    fn test_operation_call_shape() {
        let expr = call(ADD, vec![Expr::Number(ExprNumber { number: 1 })]);
        let Expr::Call(call) = expr else {
            panic!("expected a call node");
        };
        assert_eq!(
            *call.function,
            Expr::Variable(ExprVariable {
                path: Id::from(ADD)
            })
        );
        assert_eq!(call.arguments.len(), 1);
    }
}
