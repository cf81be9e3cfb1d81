//! translation units are the highest level construct of a compilation

use crate::statement::Statement;
use std::fmt::{Display, Formatter};

/// A translation unit
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TranslationUnit {
    pub statements: Vec<Statement>,
}

impl TranslationUnit {
    /// Creates a new translation unit
    pub fn new(statements: Vec<Statement>) -> Self {
        Self { statements }
    }
}

impl Display for TranslationUnit {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "TranslationUnit(statements=[")?;
        for (i, statement) in self.statements.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{statement}")?;
        }
        write!(f, "])")
    }
}
