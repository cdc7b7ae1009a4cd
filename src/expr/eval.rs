//! Two-stack operator-precedence evaluation.

use serde::Serialize;

use crate::types::{LabError, LabResult};

use super::lexer::{tokenize, Function, Operator, Token};

/// Entries on the operator stack.
#[derive(Debug, Clone, Copy)]
enum Pending {
    Op(Operator),
    Func(Function),
    LParen,
}

/// Evaluate an infix expression.
pub fn evaluate(input: &str) -> LabResult<f64> {
    let tokens = tokenize(input)?;
    let mut operands: Vec<f64> = Vec::new();
    let mut pending: Vec<Pending> = Vec::new();

    for token in tokens {
        match token {
            Token::Number(value) => operands.push(value),
            Token::LParen => pending.push(Pending::LParen),
            Token::Func(func) => pending.push(Pending::Func(func)),
            Token::Op(op) => {
                // A prefix operator has no left operand to reduce.
                if op.arity() == 2 {
                    while let Some(&Pending::Op(top)) = pending.last() {
                        if !binds_before(top, op) {
                            break;
                        }
                        pending.pop();
                        apply_operator(&mut operands, top)?;
                    }
                }
                pending.push(Pending::Op(op));
            }
            Token::RParen => {
                loop {
                    match pending.pop() {
                        Some(Pending::Op(op)) => apply_operator(&mut operands, op)?,
                        Some(Pending::LParen) => break,
                        Some(Pending::Func(_)) | None => return Err(LabError::MissingLeftParen),
                    }
                }
                if let Some(&Pending::Func(func)) = pending.last() {
                    pending.pop();
                    apply_function(&mut operands, func)?;
                }
            }
        }
    }

    while let Some(entry) = pending.pop() {
        match entry {
            Pending::Op(op) => apply_operator(&mut operands, op)?,
            Pending::Func(func) => apply_function(&mut operands, func)?,
            Pending::LParen => return Err(LabError::MissingRightParen),
        }
    }

    match operands.as_slice() {
        [value] => Ok(*value),
        [] => Err(LabError::MalformedExpression("empty expression".to_string())),
        _ => Err(LabError::MalformedExpression(format!(
            "{} operands left without an operator",
            operands.len()
        ))),
    }
}

/// True if `top` (already on the stack) must be applied before pushing
/// `incoming`.
fn binds_before(top: Operator, incoming: Operator) -> bool {
    let (a, b) = (top.precedence(), incoming.precedence());
    a > b || (a == b && !incoming.is_right_assoc())
}

fn apply_operator(operands: &mut Vec<f64>, op: Operator) -> LabResult<()> {
    if operands.len() < op.arity() {
        return Err(LabError::MissingOperand(op.symbol().to_string()));
    }
    // Length checked above, so the pops cannot come up empty.
    let rhs = operands.pop().unwrap_or_default();
    let value = match op {
        Operator::Neg => -rhs,
        Operator::Add => operands.pop().unwrap_or_default() + rhs,
        Operator::Sub => operands.pop().unwrap_or_default() - rhs,
        Operator::Mul => operands.pop().unwrap_or_default() * rhs,
        Operator::Div => {
            if rhs == 0.0 {
                return Err(LabError::DivisionByZero);
            }
            operands.pop().unwrap_or_default() / rhs
        }
        Operator::Pow => operands.pop().unwrap_or_default().powf(rhs),
    };
    operands.push(value);
    Ok(())
}

fn apply_function(operands: &mut Vec<f64>, func: Function) -> LabResult<()> {
    let x = operands
        .pop()
        .ok_or_else(|| LabError::MissingOperand(func.name().to_string()))?;
    let value = match func {
        Function::Sin => x.sin(),
        Function::Cos => x.cos(),
        Function::Tan => x.tan(),
        Function::Log => {
            if x <= 0.0 {
                return Err(LabError::LogDomain(x));
            }
            x.ln()
        }
    };
    operands.push(value);
    Ok(())
}

/// Outcome of evaluating one expression, for reporting.
#[derive(Debug, Clone, Serialize)]
pub struct Evaluation {
    /// The source text.
    pub expression: String,
    /// The value, if evaluation succeeded.
    pub value: Option<f64>,
    /// The error message, if it failed.
    pub error: Option<String>,
}

impl Evaluation {
    /// Evaluate `expression`, capturing success or failure.
    pub fn run(expression: &str) -> Self {
        match evaluate(expression) {
            Ok(value) => Self {
                expression: expression.to_string(),
                value: Some(value),
                error: None,
            },
            Err(e) => {
                log::debug!("evaluation of {:?} failed: {}", expression, e);
                Self {
                    expression: expression.to_string(),
                    value: None,
                    error: Some(e.to_string()),
                }
            }
        }
    }
}

/// Expressions evaluated by the demo.
pub const DEMO_EXPRESSIONS: &[&str] = &[
    "3 + 4 * 2 / (1 - 5)",
    "2 ^ 3 + 5",
    "sin(0)",
    "cos(0) + tan(0)",
    "log(1) + 5",
    "((2 + 3) * 4) / 5",
    "3.5 + 2.5 * 2",
    "sin(3.1415926 / 2) + log(e)",
];
