use crate::{
    ast::ast::ExpressionItem,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        grammar::{operator_info, OperatorInfo},
        tokens::{Token, TokenKind},
    },
    nesting::nested::{position_of, NestedToken},
};

use super::{brackets::split, values::build_value};

enum Infix {
    Operand(ExpressionItem),
    Binary(Token, OperatorInfo),
    Prefix(Token, OperatorInfo),
}

enum Pending {
    Binary(Token, OperatorInfo),
    Prefix(Token, OperatorInfo),
}

impl Pending {
    fn info(&self) -> OperatorInfo {
        match self {
            Pending::Binary(_, info) | Pending::Prefix(_, info) => *info,
        }
    }

    fn into_item(self) -> ExpressionItem {
        match self {
            Pending::Binary(token, _) => ExpressionItem::Operator(token),
            Pending::Prefix(token, _) => ExpressionItem::PrefixOperator(token),
        }
    }
}

fn lookup_operator(token: &Token) -> Result<OperatorInfo, Error> {
    operator_info(&token.value).ok_or_else(|| {
        Error::new(
            ErrorImpl::UnexpectedToken {
                token: token.value.clone(),
            },
            token.span.start.clone(),
        )
    })
}

/// Splits a span at its top-level operators into an infix sequence. An
/// operator found where an operand is expected is a prefix operator.
fn infix_sequence(tokens: &[NestedToken]) -> Result<Vec<Infix>, Error> {
    let mut sequence = vec![];
    let mut expect_operand = true;
    let mut last_operator: Option<&Token> = None;

    let groups = split(tokens, &[TokenKind::Operator], true);

    for (index, group) in groups.iter().enumerate() {
        let operator = group
            .first()
            .and_then(NestedToken::as_token)
            .filter(|token| token.kind == TokenKind::Operator);

        let operand = match operator {
            Some(token) => {
                let info = lookup_operator(token)?;
                if expect_operand {
                    sequence.push(Infix::Prefix(token.clone(), info));
                } else {
                    sequence.push(Infix::Binary(token.clone(), info));
                }
                last_operator = Some(token);
                &group[1..]
            }
            None if index == 0 && group.is_empty() => continue,
            None => &group[..],
        };

        if operand.is_empty() {
            expect_operand = true;
            continue;
        }

        let value = build_value(operand).map_err(|error| error.or_position(&position_of(operand)))?;
        sequence.push(Infix::Operand(ExpressionItem::Operand(value)));
        expect_operand = false;
    }

    if expect_operand {
        let position = last_operator
            .map(|token| token.span.start.clone())
            .unwrap_or_else(|| position_of(tokens));
        return Err(Error::new(ErrorImpl::NoExpression, position));
    }

    Ok(sequence)
}

/// Converts an operator expression to postfix order (shunting-yard).
///
/// Higher precedence binds tighter, ties resolve by associativity. A prefix
/// operator is pushed without popping and then ranks by its own entry in
/// the operator table, so `- a ** 2` negates the power.
pub fn postfix_expression(tokens: &[NestedToken]) -> Result<Vec<ExpressionItem>, Error> {
    let mut output = vec![];
    let mut stack: Vec<Pending> = vec![];

    for item in infix_sequence(tokens)? {
        match item {
            Infix::Operand(operand) => output.push(operand),
            Infix::Prefix(token, info) => stack.push(Pending::Prefix(token, info)),
            Infix::Binary(token, info) => {
                while let Some(top) = stack.last() {
                    let top_info = top.info();
                    let pop = top_info.precedence > info.precedence
                        || (top_info.precedence == info.precedence && info.left_associative);

                    if !pop {
                        break;
                    }

                    if let Some(pending) = stack.pop() {
                        output.push(pending.into_item());
                    }
                }

                stack.push(Pending::Binary(token, info));
            }
        }
    }

    while let Some(pending) = stack.pop() {
        output.push(pending.into_item());
    }

    Ok(output)
}
