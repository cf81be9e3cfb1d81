//! Statement nodes

use crate::expr::Expr;
use std::fmt::{Display, Formatter};

/// A `let name = expression` binding
#[derive(Debug, Clone, PartialEq)]
pub struct StatementLet {
    pub name: String,
    pub expression: Expr,
}

/// A statement
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Let(StatementLet),
}

impl Display for Statement {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Statement::Let(let_statement) => write!(
                f,
                "StatementLet(name={}, expression={})",
                let_statement.name, let_statement.expression
            ),
        }
    }
}
