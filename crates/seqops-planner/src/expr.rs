//! Tiny expression language over a single `i64` variable `x`.
//!
//! Predicates: `x OP lit` or `x % k OP lit` with OP ∈ {==, !=, <, <=, >, >=}
//! Mappers:    `x` or `x OP lit` with OP ∈ {+, -, *, /, %}
//! Reducers:   `+`, `*`, `max`, `min`
//!
//! Arithmetic wraps on overflow; a zero divisor is rejected when parsing.

use seqops_core::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CmpOp {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Predicate {
    modulus: Option<i64>,
    op: CmpOp,
    literal: i64,
}

impl Predicate {
    /// Parse a simple predicate like "x > 18" or "x % 2 == 0".
    pub fn parse(expr: &str) -> Result<Self> {
        let ops = [
            ("==", CmpOp::Eq),
            ("!=", CmpOp::Ne),
            ("<=", CmpOp::Le),
            (">=", CmpOp::Ge),
            ("<", CmpOp::Lt),
            (">", CmpOp::Gt),
        ];

        for (token, op) in ops {
            if let Some(pos) = expr.find(token) {
                let lhs = expr[..pos].trim();
                let literal = parse_literal(expr[pos + token.len()..].trim(), expr)?;
                let modulus = parse_operand(lhs, expr)?;
                return Ok(Self {
                    modulus,
                    op,
                    literal,
                });
            }
        }

        Err(Error::Expr(format!("unparseable predicate: {}", expr)))
    }

    pub fn eval(&self, x: i64) -> bool {
        let value = match self.modulus {
            Some(k) => x.wrapping_rem(k),
            None => x,
        };
        match self.op {
            CmpOp::Eq => value == self.literal,
            CmpOp::Ne => value != self.literal,
            CmpOp::Lt => value < self.literal,
            CmpOp::Le => value <= self.literal,
            CmpOp::Gt => value > self.literal,
            CmpOp::Ge => value >= self.literal,
        }
    }
}

/// Left-hand side of a predicate: `x` or `x % k`.
fn parse_operand(lhs: &str, expr: &str) -> Result<Option<i64>> {
    let rest = lhs
        .strip_prefix('x')
        .ok_or_else(|| Error::Expr(format!("predicate must start with 'x': {}", expr)))?
        .trim();
    if rest.is_empty() {
        return Ok(None);
    }
    let k = rest
        .strip_prefix('%')
        .ok_or_else(|| Error::Expr(format!("only '%' may precede a comparison: {}", expr)))?;
    let k = parse_literal(k.trim(), expr)?;
    if k == 0 {
        return Err(Error::Expr(format!("modulus by zero: {}", expr)));
    }
    Ok(Some(k))
}

fn parse_literal(s: &str, expr: &str) -> Result<i64> {
    s.parse::<i64>()
        .map_err(|_| Error::Expr(format!("cannot parse '{}' as i64 in '{}'", s, expr)))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mapper {
    apply: Option<(ArithOp, i64)>,
}

impl Mapper {
    pub fn parse(expr: &str) -> Result<Self> {
        let rest = expr
            .trim()
            .strip_prefix('x')
            .ok_or_else(|| Error::Expr(format!("mapper must start with 'x': {}", expr)))?
            .trim_start();
        let mut chars = rest.chars();
        let op = match chars.next() {
            None => return Ok(Self { apply: None }),
            Some('+') => ArithOp::Add,
            Some('-') => ArithOp::Sub,
            Some('*') => ArithOp::Mul,
            Some('/') => ArithOp::Div,
            Some('%') => ArithOp::Rem,
            Some(other) => {
                return Err(Error::Expr(format!(
                    "unknown operator '{}' in mapper: {}",
                    other, expr
                )))
            }
        };
        let literal = parse_literal(chars.as_str().trim(), expr)?;
        if literal == 0 && matches!(op, ArithOp::Div | ArithOp::Rem) {
            return Err(Error::Expr(format!("division by zero: {}", expr)));
        }
        Ok(Self {
            apply: Some((op, literal)),
        })
    }

    pub fn eval(&self, x: i64) -> i64 {
        match self.apply {
            None => x,
            Some((ArithOp::Add, k)) => x.wrapping_add(k),
            Some((ArithOp::Sub, k)) => x.wrapping_sub(k),
            Some((ArithOp::Mul, k)) => x.wrapping_mul(k),
            Some((ArithOp::Div, k)) => x.wrapping_div(k),
            Some((ArithOp::Rem, k)) => x.wrapping_rem(k),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reducer {
    Add,
    Mul,
    Max,
    Min,
}

impl Reducer {
    pub fn parse(expr: &str) -> Result<Self> {
        match expr.trim() {
            "+" => Ok(Reducer::Add),
            "*" => Ok(Reducer::Mul),
            "max" => Ok(Reducer::Max),
            "min" => Ok(Reducer::Min),
            other => Err(Error::Expr(format!("unknown reducer: {}", other))),
        }
    }

    pub fn eval(&self, acc: i64, x: i64) -> i64 {
        match self {
            Reducer::Add => acc.wrapping_add(x),
            Reducer::Mul => acc.wrapping_mul(x),
            Reducer::Max => acc.max(x),
            Reducer::Min => acc.min(x),
        }
    }
}
