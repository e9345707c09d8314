/*
 * expression.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Condition evaluation for `@if` / `@else-if` directives.
//!
//! A condition is either a bare value, checked for truthiness, or a single
//! binary comparison `left OP right`. Placeholders have already been
//! substituted by the time a condition is evaluated, so operands are plain
//! text.

/// Comparison operators, in detection order.
///
/// The first operator contained anywhere in the condition wins, so the
/// two-character forms must come before their one-character prefixes.
const OPERATORS: [Operator; 8] = [
    Operator::LessEqual,
    Operator::Less,
    Operator::GreaterEqual,
    Operator::Greater,
    Operator::StrictNotEqual,
    Operator::LooseNotEqual,
    Operator::StrictEqual,
    Operator::LooseEqual,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operator {
    LessEqual,
    Less,
    GreaterEqual,
    Greater,
    StrictNotEqual,
    LooseNotEqual,
    StrictEqual,
    LooseEqual,
}

impl Operator {
    fn token(self) -> &'static str {
        match self {
            Operator::LessEqual => "<=",
            Operator::Less => "<",
            Operator::GreaterEqual => ">=",
            Operator::Greater => ">",
            Operator::StrictNotEqual => "!==",
            Operator::LooseNotEqual => "!=",
            Operator::StrictEqual => "===",
            Operator::LooseEqual => "==",
        }
    }
}

/// Evaluate a condition string to a boolean.
///
/// - `""`, `"0"` and `"false"` are false; any other operator-free value is true.
/// - `===` / `!==` compare the trimmed operands as text.
/// - `==` / `!=` compare numerically when both operands are numbers, and as
///   text otherwise.
/// - `<`, `<=`, `>`, `>=` require two numbers; anything else is false.
///
/// The condition is split at the first occurrence of its operator; whatever
/// follows stays in the right operand.
///
/// # Example
///
/// ```rust
/// use creamy::evaluate;
///
/// assert!(evaluate("2 >= 2"));
/// assert!(evaluate("en == en"));
/// assert!(!evaluate("a < b"));
/// assert!(!evaluate("false"));
/// ```
pub fn evaluate(condition: &str) -> bool {
    let Some(operator) = OPERATORS
        .into_iter()
        .find(|op| condition.contains(op.token()))
    else {
        return is_truthy(condition);
    };

    let Some((left, right)) = condition.split_once(operator.token()) else {
        return false;
    };
    let (left, right) = (left.trim(), right.trim());

    match operator {
        Operator::StrictEqual => left == right,
        Operator::StrictNotEqual => left != right,
        Operator::LooseEqual => loose_equals(left, right),
        Operator::LooseNotEqual => !loose_equals(left, right),
        Operator::Less | Operator::LessEqual | Operator::Greater | Operator::GreaterEqual => {
            let (Some(left), Some(right)) = (parse_number(left), parse_number(right)) else {
                return false;
            };
            match operator {
                Operator::Less => left < right,
                Operator::LessEqual => left <= right,
                Operator::Greater => left > right,
                _ => left >= right,
            }
        }
    }
}

fn is_truthy(value: &str) -> bool {
    !matches!(value, "" | "0" | "false")
}

fn loose_equals(left: &str, right: &str) -> bool {
    match (parse_number(left), parse_number(right)) {
        (Some(left), Some(right)) => left == right,
        _ => left == right,
    }
}

/// Parse a plain decimal number: optional sign, digits, optional fraction.
///
/// At least one digit is required. Exponents, hex, `Infinity` and `NaN` are
/// rejected.
fn parse_number(text: &str) -> Option<f64> {
    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);
    let (whole, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));

    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if whole.is_empty() && fraction.is_empty() {
        return None;
    }
    if !all_digits(whole) || !all_digits(fraction) {
        return None;
    }

    text.parse::<f64>().ok().filter(|n| n.is_finite())
}
