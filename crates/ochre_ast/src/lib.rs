//! The ochre syntax tree: translation units, statements, expressions, and
//! the builtin operation vocabulary the parser targets.

pub mod expr;
pub mod operations;
pub mod statement;
pub mod translation_unit;
