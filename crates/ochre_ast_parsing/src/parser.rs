//! Creates the syntax tree from a token stream.
//!
//! The grammar is consumed through sequential positional access (peek the
//! current token, consume it) with a single token of lookahead and no
//! backtracking.

use ochre_ast::statement::{Statement, StatementLet};
use ochre_ast::translation_unit::TranslationUnit;
use ochre_tokens::spanned::{Span, Spanned};
use ochre_tokens::token::{Token, TokenKind};
use tracing::trace;

pub mod error;
mod expr;

pub use error::{ErrorKind, SyntaxError, SyntaxResult};

/// Parses a token stream into a [TranslationUnit].
///
/// # Examples
/// ```
/// # use ochre_ast_parsing::{lexer::tokenize, parser::parse};
/// let unit = parse(tokenize("let a = 1")).unwrap();
/// assert_eq!(unit.statements.len(), 1);
/// ```
pub fn parse<I>(tokens: I) -> SyntaxResult<TranslationUnit>
where
    I: IntoIterator<Item = Token>,
{
    let mut parser = SyntacticParser::new(tokens.into_iter());
    parse_unit(&mut parser)
}

/// Positional access over a token stream
#[derive(Debug)]
pub struct SyntacticParser<I: Iterator<Item = Token>> {
    tokens: I,
    lookahead: Option<Token>,
    last_span: Option<Span>,
}

impl<I: Iterator<Item = Token>> SyntacticParser<I> {
    /// Creates a new parser over a token iterator
    pub fn new(tokens: I) -> Self {
        Self {
            tokens,
            lookahead: None,
            last_span: None,
        }
    }

    /// peek the current lookahead
    pub fn peek(&mut self) -> Option<&Token> {
        if self.lookahead.is_none() {
            self.lookahead = self.tokens.next();
        }
        self.lookahead.as_ref()
    }

    /// consume the current token, advancing the stream
    pub fn consume(&mut self) -> Option<Token> {
        let token = match self.lookahead.take() {
            Some(token) => Some(token),
            None => self.tokens.next(),
        };
        if let Some(token) = &token {
            trace!("consumed {token:?}");
            self.last_span = Some(token.span());
        }
        token
    }

    /// consumes if predicate matches
    pub fn consume_if<F>(&mut self, predicate: F) -> Option<Token>
    where
        F: FnOnce(&Token) -> bool,
    {
        let should_consume = self.peek().map(predicate).unwrap_or(false);
        if should_consume {
            self.consume()
        } else {
            None
        }
    }

    /// Consumes the next token if its kind matches, otherwise errors with
    /// the expected description and the offending token
    pub fn expect<F>(&mut self, description: &str, predicate: F) -> SyntaxResult<Token>
    where
        F: FnOnce(&TokenKind) -> bool,
    {
        match self.consume_if(|token| predicate(token.kind())) {
            Some(token) => Ok(token),
            None => {
                let found = self.consume();
                Err(self.error(ErrorKind::expected_token([description], found)))
            }
        }
    }

    pub(crate) fn error(&self, kind: ErrorKind) -> SyntaxError {
        let span = self
            .lookahead
            .as_ref()
            .map(|token| token.span())
            .or(self.last_span);
        SyntaxError::new(kind, span)
    }
}

/// `unit := (INDENT let_statement)*`
///
/// Every statement line opens with its indent marker; widths are not
/// checked against any block structure, the top level is flat.
fn parse_unit<I: Iterator<Item = Token>>(
    parser: &mut SyntacticParser<I>,
) -> SyntaxResult<TranslationUnit> {
    let mut statements = vec![];
    while parser.peek().is_some() {
        if parser
            .consume_if(|token| matches!(token.kind(), TokenKind::Indent(_)))
            .is_none()
        {
            let found = parser.consume().expect("peeked token is present");
            return Err(parser.error(ErrorKind::UnexpectedToken(found)));
        }
        statements.push(parse_statement(parser)?);
    }
    trace!("parsed unit with {} statements", statements.len());
    Ok(TranslationUnit::new(statements))
}

fn parse_statement<I: Iterator<Item = Token>>(
    parser: &mut SyntacticParser<I>,
) -> SyntaxResult<Statement> {
    parse_let_statement(parser).map(Statement::Let)
}

/// `let_statement := 'let' IDENTIFIER '=' expression`
fn parse_let_statement<I: Iterator<Item = Token>>(
    parser: &mut SyntacticParser<I>,
) -> SyntaxResult<StatementLet> {
    parser.expect("let", |kind| matches!(kind, TokenKind::Let))?;
    let name = parser.expect("identifier", |kind| {
        matches!(kind, TokenKind::Identifier(_))
    })?;
    let TokenKind::Identifier(name) = name.into_kind() else {
        unreachable!("expect() only accepts identifiers here")
    };
    parser.expect("=", |kind| matches!(kind, TokenKind::Assign))?;
    let expression = expr::parse_expr(parser)?;
    Ok(StatementLet { name, expression })
}
