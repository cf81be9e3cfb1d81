//! The tree walk evaluating a translation unit against a scope

use crate::builtins::BuiltinOp;
use crate::error::EvalError;
use crate::scope::{ScopeArena, ScopeId};
use crate::value::Value;
use log::trace;
use ochre_ast::expr::{Expr, ExprCall};
use ochre_ast::statement::Statement;
use ochre_ast::translation_unit::TranslationUnit;

pub(crate) fn walk_unit(
    scopes: &mut ScopeArena,
    scope: ScopeId,
    unit: &TranslationUnit,
) -> Result<(), EvalError> {
    trace!("walking unit with {} statements", unit.statements.len());
    for statement in &unit.statements {
        walk_statement(scopes, scope, statement)?;
    }
    Ok(())
}

fn walk_statement(
    scopes: &mut ScopeArena,
    scope: ScopeId,
    statement: &Statement,
) -> Result<(), EvalError> {
    trace!("walking {statement}");
    match statement {
        Statement::Let(let_statement) => {
            let value = walk_expr(scopes, scope, &let_statement.expression)?;
            trace!("let {} = {value}", let_statement.name);
            scopes.set(scope, let_statement.name.as_str(), value);
            Ok(())
        }
    }
}

fn walk_expr(scopes: &mut ScopeArena, scope: ScopeId, expr: &Expr) -> Result<Value, EvalError> {
    match expr {
        Expr::Number(number) => Ok(Value::Integer(number.number)),
        Expr::Variable(variable) => scopes
            .get(scope, variable.path.first())
            .map(|value| value.clone()),
        Expr::Call(call) => walk_call(scopes, scope, call),
    }
}

fn walk_call(scopes: &mut ScopeArena, scope: ScopeId, call: &ExprCall) -> Result<Value, EvalError> {
    // only direct variable references are callable positions today
    let Expr::Variable(function) = call.function.as_ref() else {
        return Err(EvalError::UnsupportedNode(call.function.kind_name()));
    };
    let callee = scopes
        .get(scope, function.path.first())
        .map(|value| value.clone())?;
    let mut arguments = Vec::with_capacity(call.arguments.len());
    for argument in &call.arguments {
        arguments.push(walk_expr(scopes, scope, argument)?);
    }
    match callee {
        Value::Builtin(op) => invoke(op, &arguments),
        other => Err(EvalError::NotCallable(other)),
    }
}

fn invoke(op: &'static BuiltinOp, arguments: &[Value]) -> Result<Value, EvalError> {
    if arguments.len() != op.arity {
        return Err(EvalError::ArityMismatch {
            symbol: op.symbol,
            expected: op.arity,
            found: arguments.len(),
        });
    }
    trace!("invoking {} on {} arguments", op.symbol, arguments.len());
    (op.function)(arguments)
}
