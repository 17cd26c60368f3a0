//! Prefix (Polish notation) arithmetic evaluator
//!
//! Expressions are split on whitespace and evaluated right to left with an
//! operand stack. For an operator, the first value popped is the left operand
//! and the second is the right operand, so `- 5 3` is `2`.

use std::fmt;
use std::str::FromStr;

use log::{debug, warn};

/// Binary arithmetic operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Apply the operator. Division by zero yields 0.
    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            Operator::Add => left + right,
            Operator::Subtract => left - right,
            Operator::Multiply => left * right,
            Operator::Divide => {
                if right == 0.0 {
                    0.0
                } else {
                    left / right
                }
            }
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let symbol = match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "*",
            Operator::Divide => "/",
        };
        write!(f, "{}", symbol)
    }
}

/// One classified token of a prefix expression
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    Operator(Operator),
    Number(f64),
    /// Brackets, commas and empty strings carry no meaning and are dropped
    Useless,
}

/// A token that is neither an operator, a number nor a useless token
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid token: {0}")]
pub struct TokenError(pub String);

impl FromStr for Token {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "(" | ")" | "[" | "]" | "{" | "}" | "," | "" => Ok(Token::Useless),
            "+" => Ok(Token::Operator(Operator::Add)),
            "-" => Ok(Token::Operator(Operator::Subtract)),
            "*" => Ok(Token::Operator(Operator::Multiply)),
            "/" => Ok(Token::Operator(Operator::Divide)),
            _ => s
                .parse::<f64>()
                .map(Token::Number)
                .map_err(|_| TokenError(s.to_string())),
        }
    }
}

/// Outcome of evaluating an expression
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Evaluation {
    pub value: f64,
    /// Tokens that could not be parsed and were skipped
    pub ignored: Vec<TokenError>,
}

/// Evaluate a prefix expression, keeping track of skipped tokens.
///
/// Missing operands count as 0 and an expression that leaves nothing on the
/// stack evaluates to 0.
pub fn evaluate(expression: &str) -> Evaluation {
    let mut stack: Vec<f64> = Vec::new();
    let mut ignored = Vec::new();

    for raw in expression.split_whitespace().rev() {
        debug!("Token: {}", raw);

        match raw.parse::<Token>() {
            Ok(Token::Useless) => {}
            Ok(Token::Number(n)) => stack.push(n),
            Ok(Token::Operator(op)) => {
                let left = stack.pop().unwrap_or(0.0);
                let right = stack.pop().unwrap_or(0.0);
                let result = op.apply(left, right);
                debug!("Applied operator: {} Left: {} Right: {} Result: {}", op, left, right, result);
                stack.push(result);
            }
            Err(e) => {
                warn!("Ignoring invalid token: {}", e.0);
                ignored.push(e);
            }
        }
    }

    Evaluation {
        value: stack.last().copied().unwrap_or(0.0),
        ignored,
    }
}

/// Evaluate a prefix expression and return only its value
pub fn evaluate_prefix(expression: &str) -> f64 {
    evaluate(expression).value
}
