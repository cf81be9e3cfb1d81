use ochre_tokens::spanned::Span;
use ochre_tokens::token::Token;
use std::fmt::{Display, Formatter};

/// Represents an error occurring during parsing.
///
/// Parsing is all-or-nothing: the first token that cannot extend a
/// production produces one of these and no tree.
#[derive(Debug, thiserror::Error)]
pub struct SyntaxError {
    pub kind: ErrorKind,
    pub span: Option<Span>,
}

impl SyntaxError {
    /// Creates a new error
    pub fn new(kind: ErrorKind, span: impl Into<Option<Span>>) -> Self {
        Self {
            kind,
            span: span.into(),
        }
    }
}

impl Display for SyntaxError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "syntax error: {}", self.kind)?;
        if let Some(span) = &self.span {
            write!(f, " at {}:{}", span.line(), span.column())?;
        }
        Ok(())
    }
}

/// [SyntaxError] kind
#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    #[error("expected a token of kinds {0:?}, got {1:?}")]
    ExpectedToken(Vec<String>, Option<Token>),
    #[error("unexpected token: {0:?}")]
    UnexpectedToken(Token),
    #[error("unexpected EOF")]
    UnexpectedEof,
}

impl ErrorKind {
    pub fn expected_token(
        token_kinds: impl IntoIterator<Item = impl AsRef<str>>,
        found: impl Into<Option<Token>>,
    ) -> Self {
        Self::ExpectedToken(
            token_kinds
                .into_iter()
                .map(|s| s.as_ref().to_string())
                .collect(),
            found.into(),
        )
    }
}

pub type SyntaxResult<T = ()> = std::result::Result<T, SyntaxError>;
