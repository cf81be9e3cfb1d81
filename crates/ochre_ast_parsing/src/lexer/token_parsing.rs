use nom::branch::alt;
use nom::bytes::complete::{is_not, tag, take_till, take_while, take_while1};
use nom::character::complete::{alpha1, alphanumeric1, char, digit1, none_of};
use nom::combinator::{map, map_res, recognize, value};
use nom::multi::{many0_count, many1_count};
use nom::sequence::{delimited, pair, terminated};
use nom::IResult;
use ochre_tokens::token::TokenKind;

/// Recognizes the next raw token at the start of `src`.
///
/// Alternatives are ordered so that the longest possible token wins:
/// newline runs swallow their leading spaces before plain whitespace is
/// tried, `//` comments are tried before the `/` symbol, and two-character
/// symbols before their one-character prefixes.
pub(crate) fn parse_token(src: &str) -> IResult<&str, TokenKind> {
    alt((
        parse_newline,
        parse_whitespace,
        parse_comment,
        parse_word,
        parse_integer,
        parse_string,
        parse_symbol,
    ))(src)
}

/// `( *\n)+`, carrying the number of `\n` consumed
fn parse_newline(src: &str) -> IResult<&str, TokenKind> {
    map(
        many1_count(terminated(take_while(|c| c == ' '), char('\n'))),
        TokenKind::Newline,
    )(src)
}

fn parse_whitespace(src: &str) -> IResult<&str, TokenKind> {
    map(take_while1(|c| c == ' '), |spaces: &str| {
        TokenKind::Whitespace(spaces.len())
    })(src)
}

/// `//` to end of line
fn parse_comment(src: &str) -> IResult<&str, TokenKind> {
    map(
        pair(tag("//"), take_till(|c| c == '\n')),
        |(_, body): (&str, &str)| TokenKind::Comment(body.to_string()),
    )(src)
}

fn parse_word(src: &str) -> IResult<&str, TokenKind> {
    alt((parse_quoted_identifier, parse_plain_word))(src)
}

/// A plain word becomes its keyword kind when the raw text is reserved
fn parse_plain_word(src: &str) -> IResult<&str, TokenKind> {
    map(recognize_identifier, |word: &str| {
        TokenKind::keyword(word).unwrap_or_else(|| TokenKind::Identifier(word.to_string()))
    })(src)
}

/// `[a-zA-Z_][a-zA-Z0-9_']*`
pub(crate) fn recognize_identifier(input: &str) -> IResult<&str, &str> {
    recognize(pair(
        alt((alpha1, tag("_"))),
        many0_count(alt((alphanumeric1, tag("_"), tag("'")))),
    ))(input)
}

/// Backtick-quoted identifiers take any characters but backtick, tab and
/// newline; the delimiters are stripped and keyword promotion never applies
fn parse_quoted_identifier(src: &str) -> IResult<&str, TokenKind> {
    map(
        delimited(char('`'), is_not("`\t\n"), char('`')),
        |quoted: &str| TokenKind::Identifier(quoted.to_string()),
    )(src)
}

fn parse_integer(src: &str) -> IResult<&str, TokenKind> {
    map_res(digit1, |digits: &str| {
        digits.parse::<i64>().map(TokenKind::Integer)
    })(src)
}

/// `"(\\"|[^"\n])*"`, body kept verbatim
fn parse_string(src: &str) -> IResult<&str, TokenKind> {
    map(
        delimited(
            char('"'),
            recognize(many0_count(alt((
                value((), tag("\\\"")),
                value((), none_of("\"\n")),
            )))),
            char('"'),
        ),
        |body: &str| TokenKind::String(body.to_string()),
    )(src)
}

fn parse_symbol(src: &str) -> IResult<&str, TokenKind> {
    alt((
        alt((
            value(TokenKind::Lte, tag("<=")),
            value(TokenKind::Gte, tag(">=")),
            value(TokenKind::Neq, tag("!=")),
            value(TokenKind::LArrow, tag("<-")),
            value(TokenKind::Arrow, tag("->")),
        )),
        alt((
            value(TokenKind::Dot, char('.')),
            value(TokenKind::Plus, char('+')),
            value(TokenKind::Minus, char('-')),
            value(TokenKind::Star, char('*')),
            value(TokenKind::Slash, char('/')),
            value(TokenKind::Colon, char(':')),
            value(TokenKind::SemiColon, char(';')),
            value(TokenKind::Comma, char(',')),
            value(TokenKind::Assign, char('=')),
            value(TokenKind::Lt, char('<')),
            value(TokenKind::Gt, char('>')),
            value(TokenKind::LParen, char('(')),
            value(TokenKind::RParen, char(')')),
            value(TokenKind::LBracket, char('[')),
            value(TokenKind::RBracket, char(']')),
            value(TokenKind::LCurly, char('{')),
            value(TokenKind::RCurly, char('}')),
        )),
    ))(src)
}
