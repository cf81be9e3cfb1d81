//! Expression nodes

use ochre_tokens::id::Id;
use std::fmt::{Display, Formatter};

/// Application of a callable to a list of arguments.
///
/// The grammar only ever produces calls whose function is an
/// [`Expr::Variable`] naming a builtin operation symbol; the walker
/// enforces that shape, not the constructor.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprCall {
    pub function: Box<Expr>,
    pub arguments: Vec<Expr>,
}

/// A reference to a binding through an identifier path
#[derive(Debug, Clone, PartialEq)]
pub struct ExprVariable {
    pub path: Id,
}

/// An integer literal
#[derive(Debug, Clone, PartialEq)]
pub struct ExprNumber {
    pub number: i64,
}

/// An expression
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Call(ExprCall),
    Variable(ExprVariable),
    Number(ExprNumber),
}

impl Expr {
    /// The name of this node's kind, used to tag walker errors
    pub fn kind_name(&self) -> &'static str {
        match self {
            Expr::Call(_) => "ExprCall",
            Expr::Variable(_) => "ExprVariable",
            Expr::Number(_) => "ExprNumber",
        }
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Expr::Call(call) => {
                write!(f, "ExprCall(function={}, arguments=[", call.function)?;
                for (i, argument) in call.arguments.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{argument}")?;
                }
                write!(f, "])")
            }
            Expr::Variable(variable) => write!(f, "ExprVariable(path={})", variable.path),
            Expr::Number(number) => write!(f, "ExprNumber(number={})", number.number),
        }
    }
}
