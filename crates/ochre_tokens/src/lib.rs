//! Lexical vocabulary shared by the ochre front end: tokens, the spans
//! locating them in source text, and multi-segment identifier paths.

pub mod id;
pub mod spanned;
pub mod token;
