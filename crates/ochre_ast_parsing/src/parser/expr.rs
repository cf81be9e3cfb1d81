//! The expression grammar, precedence lowest to highest:
//! `and`/`or`, comparisons, additive, multiplicative, prefix unary,
//! primaries. Operator applications desugar into calls naming builtin
//! operation symbols.

use crate::parser::{ErrorKind, SyntacticParser, SyntaxResult};
use ochre_ast::expr::{Expr, ExprNumber, ExprVariable};
use ochre_ast::operations;
use ochre_tokens::id::Id;
use ochre_tokens::token::{Token, TokenKind};

/// Parses an expression
pub(crate) fn parse_expr<I: Iterator<Item = Token>>(
    parser: &mut SyntacticParser<I>,
) -> SyntaxResult<Expr> {
    if parser.peek().is_none() {
        return Err(parser.error(ErrorKind::UnexpectedEof));
    }
    parse_logic(parser)
}

/// `logic := comparison (('and'|'or') comparison)?`, non-associative
fn parse_logic<I: Iterator<Item = Token>>(parser: &mut SyntacticParser<I>) -> SyntaxResult<Expr> {
    let left = parse_comparison(parser)?;
    if let Some(op) =
        parser.consume_if(|t| matches!(t.kind(), TokenKind::And | TokenKind::Or))
    {
        let right = parse_comparison(parser)?;
        return Ok(operations::call(operation_symbol(op.kind()), vec![left, right]));
    }
    Ok(left)
}

/// `comparison := additive (('='|'!='|'<'|'>'|'<='|'>=') additive)?`, non-associative
fn parse_comparison<I: Iterator<Item = Token>>(
    parser: &mut SyntacticParser<I>,
) -> SyntaxResult<Expr> {
    let left = parse_additive(parser)?;
    if let Some(op) = parser.consume_if(|t| {
        matches!(
            t.kind(),
            TokenKind::Assign
                | TokenKind::Neq
                | TokenKind::Lt
                | TokenKind::Gt
                | TokenKind::Lte
                | TokenKind::Gte
        )
    }) {
        let right = parse_additive(parser)?;
        return Ok(operations::call(operation_symbol(op.kind()), vec![left, right]));
    }
    Ok(left)
}

/// `additive := multiplicative (('+'|'-') multiplicative)*`, left-associative
fn parse_additive<I: Iterator<Item = Token>>(
    parser: &mut SyntacticParser<I>,
) -> SyntaxResult<Expr> {
    let mut left = parse_multiplicative(parser)?;
    while let Some(op) =
        parser.consume_if(|t| matches!(t.kind(), TokenKind::Plus | TokenKind::Minus))
    {
        let right = parse_multiplicative(parser)?;
        left = operations::call(operation_symbol(op.kind()), vec![left, right]);
    }
    Ok(left)
}

/// `multiplicative := unary (('*'|'/'|'div'|'mod') unary)*`, left-associative
fn parse_multiplicative<I: Iterator<Item = Token>>(
    parser: &mut SyntacticParser<I>,
) -> SyntaxResult<Expr> {
    let mut left = parse_unary(parser)?;
    while let Some(op) = parser.consume_if(|t| {
        matches!(
            t.kind(),
            TokenKind::Star | TokenKind::Slash | TokenKind::Div | TokenKind::Mod
        )
    }) {
        let right = parse_unary(parser)?;
        left = operations::call(operation_symbol(op.kind()), vec![left, right]);
    }
    Ok(left)
}

/// `unary := ('not'|'-') unary | primary`
fn parse_unary<I: Iterator<Item = Token>>(parser: &mut SyntacticParser<I>) -> SyntaxResult<Expr> {
    if let Some(op) =
        parser.consume_if(|t| matches!(t.kind(), TokenKind::Not | TokenKind::Minus))
    {
        let symbol = match op.kind() {
            TokenKind::Not => operations::NOT,
            TokenKind::Minus => operations::NEG,
            _ => unreachable!("only unary operator tokens are consumed above"),
        };
        let operand = parse_unary(parser)?;
        return Ok(operations::call(symbol, vec![operand]));
    }
    parse_primary(parser)
}

/// `primary := '(' expression ')' | IDENTIFIER | INTEGER`
fn parse_primary<I: Iterator<Item = Token>>(parser: &mut SyntacticParser<I>) -> SyntaxResult<Expr> {
    if parser
        .consume_if(|t| matches!(t.kind(), TokenKind::LParen))
        .is_some()
    {
        let expression = parse_expr(parser)?;
        parser.expect(")", |kind| matches!(kind, TokenKind::RParen))?;
        return Ok(expression);
    }
    if let Some(token) = parser.consume_if(|t| {
        matches!(t.kind(), TokenKind::Identifier(_) | TokenKind::Integer(_))
    }) {
        return Ok(match token.into_kind() {
            TokenKind::Identifier(name) => Expr::Variable(ExprVariable {
                path: Id::from(name.as_str()),
            }),
            TokenKind::Integer(number) => Expr::Number(ExprNumber { number }),
            _ => unreachable!("only identifier and integer tokens are consumed above"),
        });
    }
    let found = parser.consume();
    Err(parser.error(ErrorKind::expected_token(["(", "identifier", "integer"], found)))
}

/// The operation symbol a binary operator token desugars to
fn operation_symbol(kind: &TokenKind) -> &'static str {
    match kind {
        TokenKind::Plus => operations::ADD,
        TokenKind::Minus => operations::SUB,
        TokenKind::Star => operations::MULT,
        TokenKind::Slash => operations::FDIV,
        TokenKind::Div => operations::IDIV,
        TokenKind::Mod => operations::MOD,
        TokenKind::And => operations::AND,
        TokenKind::Or => operations::OR,
        TokenKind::Assign => operations::EQL,
        TokenKind::Neq => operations::NEQ,
        TokenKind::Lt => operations::LES,
        TokenKind::Gt => operations::GRT,
        TokenKind::Lte => operations::LTE,
        TokenKind::Gte => operations::GTE,
        _ => unreachable!("not a binary operator token"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;
    use crate::parser::parse;
    use ochre_ast::expr::ExprCall;
    use ochre_ast::statement::Statement;
    use test_log::test;

    fn parse_single_expression(source: &str) -> Expr {
        let unit = parse(tokenize(source)).unwrap_or_else(|e| panic!("{e}"));
        let [Statement::Let(statement)] = unit.statements.as_slice() else {
            panic!("expected exactly one statement");
        };
        statement.expression.clone()
    }

    fn variable(name: &str) -> Expr {
        Expr::Variable(ExprVariable {
            path: Id::from(name),
        })
    }

    fn number(number: i64) -> Expr {
        Expr::Number(ExprNumber { number })
    }

    #[test]
    fn test_multiplicative_binds_tighter_than_additive() {
        let expr = parse_single_expression("let a = b + c * d");
        assert_eq!(
            expr,
            operations::call(
                operations::ADD,
                vec![
                    variable("b"),
                    operations::call(operations::MULT, vec![variable("c"), variable("d")]),
                ]
            )
        );
    }

    #[test]
    fn test_parentheses_override_precedence() {
        let expr = parse_single_expression("let a = (b + c) * d");
        assert_eq!(
            expr,
            operations::call(
                operations::MULT,
                vec![
                    operations::call(operations::ADD, vec![variable("b"), variable("c")]),
                    variable("d"),
                ]
            )
        );
    }

    #[test]
    fn test_additive_is_left_associative() {
        let expr = parse_single_expression("let a = b - c + d");
        assert_eq!(
            expr,
            operations::call(
                operations::ADD,
                vec![
                    operations::call(operations::SUB, vec![variable("b"), variable("c")]),
                    variable("d"),
                ]
            )
        );
    }

    #[test]
    fn test_keyword_operators() {
        let expr = parse_single_expression("let a = b div c mod d");
        assert_eq!(
            expr,
            operations::call(
                operations::MOD,
                vec![
                    operations::call(operations::IDIV, vec![variable("b"), variable("c")]),
                    variable("d"),
                ]
            )
        );
    }

    #[test]
    fn test_slash_is_real_division() {
        let expr = parse_single_expression("let a = b / c");
        assert_eq!(
            expr,
            operations::call(operations::FDIV, vec![variable("b"), variable("c")])
        );
    }

    #[test]
    fn test_logic_operators() {
        let expr = parse_single_expression("let a = b and c");
        assert_eq!(
            expr,
            operations::call(operations::AND, vec![variable("b"), variable("c")])
        );
    }

    #[test]
    fn test_equality_uses_assign_token() {
        let expr = parse_single_expression("let a = b = c");
        assert_eq!(
            expr,
            operations::call(operations::EQL, vec![variable("b"), variable("c")])
        );
    }

    #[test]
    fn test_relational_operators() {
        let expr = parse_single_expression("let a = b <= 4");
        assert_eq!(
            expr,
            operations::call(operations::LTE, vec![variable("b"), number(4)])
        );
    }

    #[test]
    fn test_comparisons_do_not_chain() {
        assert!(parse(tokenize("let a = b < c < d")).is_err());
    }

    #[test]
    fn test_unary_operators() {
        let expr = parse_single_expression("let a = not -b");
        assert_eq!(
            expr,
            operations::call(
                operations::NOT,
                vec![operations::call(operations::NEG, vec![variable("b")])]
            )
        );
    }

    #[test]
    fn test_unary_binds_tighter_than_multiplicative() {
        let expr = parse_single_expression("let a = -b * c");
        assert_eq!(
            expr,
            operations::call(
                operations::MULT,
                vec![
                    operations::call(operations::NEG, vec![variable("b")]),
                    variable("c"),
                ]
            )
        );
    }

    #[test]
    fn test_call_shape_of_binary_application() {
        let Expr::Call(ExprCall {
            function,
            arguments,
        }) = parse_single_expression("let a = b + c")
        else {
            panic!("expected a call node");
        };
        assert_eq!(*function, variable(operations::ADD));
        assert_eq!(arguments, vec![variable("b"), variable("c")]);
    }

    #[test]
    fn test_dangling_operator_is_an_error() {
        assert!(parse(tokenize("let a = b +")).is_err());
    }
}
