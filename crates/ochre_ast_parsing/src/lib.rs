//! Turns ochre source text into tokens, and tokens into a syntax tree.
//!
//! The two stages are strictly layered: [`lexer::tokenize`] produces the
//! indentation-annotated token stream that [`parser::parse`] consumes.

pub mod lexer;
pub mod parser;
