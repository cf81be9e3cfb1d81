//! Responsible for converting source text into an annotated token stream.
//!
//! Lexing happens in two passes over a single forward scan: a raw pass
//! recognizing tokens (with line and column tracking), and an annotation
//! pass that folds newline events away and opens every logical line with
//! exactly one [`TokenKind::Indent`] marker.

use ochre_tokens::spanned::{Span, Spanned};
use ochre_tokens::token::{Token, TokenKind};
use tracing::warn;

mod token_parsing;

/// The raw pass: a lazy, single-forward iterator of tokens over an
/// in-memory source string.
///
/// Lexing never fails. An unrecognized character is reported through the
/// tracing layer, exactly one character is skipped, and scanning resumes.
/// Comments are recognized and dropped here, so downstream passes never
/// see them.
#[derive(Debug, Clone)]
pub struct Lexer<'s> {
    source: &'s str,
    offset: usize,
    line: usize,
    column: usize,
}

impl<'s> Lexer<'s> {
    /// Creates a new lexer over a source string
    pub fn new(source: &'s str) -> Self {
        Self {
            source,
            offset: 0,
            line: 1,
            column: 0,
        }
    }

    fn next_token(&mut self) -> Option<Token> {
        loop {
            let rest = &self.source[self.offset..];
            if rest.is_empty() {
                return None;
            }
            match token_parsing::parse_token(rest) {
                Ok((remaining, kind)) => {
                    let len = rest.len() - remaining.len();
                    let span = Span::new(self.offset, len, self.line, self.column);
                    self.advance(len, &kind);
                    match kind {
                        TokenKind::Comment(_) => continue,
                        kind => return Some(Token::new(span, kind)),
                    }
                }
                Err(_) => {
                    let illegal = rest.chars().next().expect("rest is non-empty");
                    warn!(
                        "illegal character {illegal:?} at line {} column {}",
                        self.line, self.column
                    );
                    self.offset += illegal.len_utf8();
                    self.column += 1;
                }
            }
        }
    }

    fn advance(&mut self, len: usize, kind: &TokenKind) {
        let consumed = &self.source[self.offset..self.offset + len];
        self.offset += len;
        if let TokenKind::Newline(count) = kind {
            // newline runs always end on a `\n`
            self.line += count;
            self.column = 0;
        } else {
            self.column += consumed.chars().count();
        }
    }
}

impl<'s> Iterator for Lexer<'s> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}

/// The annotation pass over the raw token stream.
///
/// Tracks a line-start flag, true initially and after every newline event.
/// At line start a whitespace run becomes an [`TokenKind::Indent`] marker
/// of its width, and any other token gets a zero-width `Indent(0)` marker
/// injected before it. Mid-line whitespace is dropped; newline events are
/// consumed and never yielded.
#[derive(Debug)]
pub struct Tokens<'s> {
    lexer: Lexer<'s>,
    line_start: bool,
    pending: Option<Token>,
}

impl<'s> Iterator for Tokens<'s> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(token) = self.pending.take() {
            return Some(token);
        }
        loop {
            let token = self.lexer.next()?;
            match token.kind() {
                TokenKind::Newline(_) => {
                    self.line_start = true;
                }
                TokenKind::Whitespace(width) if self.line_start => {
                    self.line_start = false;
                    return Some(Token::new(token.span(), TokenKind::Indent(*width)));
                }
                TokenKind::Whitespace(_) => {}
                _ if self.line_start => {
                    self.line_start = false;
                    let marker = Token::new(token.span().start(), TokenKind::Indent(0));
                    self.pending = Some(token);
                    return Some(marker);
                }
                _ => return Some(token),
            }
        }
    }
}

/// Tokenizes a source string into the annotated stream the parser consumes
pub fn tokenize(source: &str) -> Tokens<'_> {
    Tokens {
        lexer: Lexer::new(source),
        line_start: true,
        pending: None,
    }
}
