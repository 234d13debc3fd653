//! Expression-shape helpers for the rewrite loop: signed additive
//! flattening, constant folding, and linear-form collection.

use crate::error::SolveError;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};
use std::sync::Arc;
use tutor_ast::Expr;

/// True if the expression mentions the variable anywhere.
pub fn contains_var(expr: &Expr, var: &str) -> bool {
    match expr {
        Expr::Number(_) => false,
        Expr::Variable(v) => v == var,
        Expr::Add(l, r) | Expr::Sub(l, r) | Expr::Mul(l, r) | Expr::Div(l, r) => {
            contains_var(l, var) || contains_var(r, var)
        }
        Expr::Neg(e) => contains_var(e, var),
    }
}

/// Flatten an expression into its additive terms, in document order.
/// Subtracted terms come back wrapped in `Neg`; double negation cancels.
pub fn add_terms(expr: &Arc<Expr>) -> Vec<Arc<Expr>> {
    fn walk(expr: &Arc<Expr>, negate: bool, out: &mut Vec<Arc<Expr>>) {
        match expr.as_ref() {
            Expr::Add(l, r) => {
                walk(l, negate, out);
                walk(r, negate, out);
            }
            Expr::Sub(l, r) => {
                walk(l, negate, out);
                walk(r, !negate, out);
            }
            Expr::Neg(inner) => walk(inner, !negate, out),
            _ => {
                if negate {
                    out.push(Expr::neg(expr.clone()));
                } else {
                    out.push(expr.clone());
                }
            }
        }
    }

    let mut out = Vec::new();
    walk(expr, false, &mut out);
    out
}

/// Rebuild a sum from a term list, rendering negated terms as subtraction.
/// An empty list is the zero expression.
pub fn sum_terms(terms: &[Arc<Expr>]) -> Arc<Expr> {
    let mut iter = terms.iter();
    let first = match iter.next() {
        Some(t) => t.clone(),
        None => Expr::num(0),
    };
    iter.fold(first, |acc, term| match term.as_ref() {
        Expr::Neg(inner) => Expr::sub(acc, inner.clone()),
        _ => Expr::add(acc, term.clone()),
    })
}

/// Evaluate a variable-free expression to an exact rational.
///
/// `Ok(None)` means the expression mentions a variable; a literal zero
/// divisor is an arithmetic error rather than a silent `None`.
pub fn eval_constant(expr: &Expr) -> Result<Option<BigRational>, SolveError> {
    match expr {
        Expr::Number(n) => Ok(Some(n.clone())),
        Expr::Variable(_) => Ok(None),
        Expr::Add(l, r) => binary(l, r, |a, b| Ok(a + b)),
        Expr::Sub(l, r) => binary(l, r, |a, b| Ok(a - b)),
        Expr::Mul(l, r) => binary(l, r, |a, b| Ok(a * b)),
        Expr::Div(l, r) => binary(l, r, |a, b| {
            if b.is_zero() {
                Err(SolveError::Arithmetic("division by zero".to_string()))
            } else {
                Ok(a / b)
            }
        }),
        Expr::Neg(e) => Ok(eval_constant(e)?.map(|n| -n)),
    }
}

fn binary(
    l: &Expr,
    r: &Expr,
    op: impl Fn(BigRational, BigRational) -> Result<BigRational, SolveError>,
) -> Result<Option<BigRational>, SolveError> {
    match (eval_constant(l)?, eval_constant(r)?) {
        (Some(a), Some(b)) => op(a, b).map(Some),
        _ => Ok(None),
    }
}

// The pair `(a, b)` such that the expression equals `a·var + b`, or `None`
// when the expression is non-linear in `var` or mentions another variable.
// Constant factors distribute over sums, so 3·(x + 1) comes back as (3, 3).
fn linear_parts(
    expr: &Expr,
    var: &str,
) -> Result<Option<(BigRational, BigRational)>, SolveError> {
    match expr {
        Expr::Number(n) => Ok(Some((BigRational::zero(), n.clone()))),
        Expr::Variable(v) if v == var => Ok(Some((BigRational::one(), BigRational::zero()))),
        Expr::Variable(_) => Ok(None),
        Expr::Add(l, r) => match (linear_parts(l, var)?, linear_parts(r, var)?) {
            (Some((a1, b1)), Some((a2, b2))) => Ok(Some((a1 + a2, b1 + b2))),
            _ => Ok(None),
        },
        Expr::Sub(l, r) => match (linear_parts(l, var)?, linear_parts(r, var)?) {
            (Some((a1, b1)), Some((a2, b2))) => Ok(Some((a1 - a2, b1 - b2))),
            _ => Ok(None),
        },
        Expr::Neg(inner) => Ok(linear_parts(inner, var)?.map(|(a, b)| (-a, -b))),
        Expr::Mul(l, r) => {
            if let Some(c) = eval_constant(l)? {
                Ok(linear_parts(r, var)?.map(|(a, b)| (a * &c, b * c)))
            } else if let Some(c) = eval_constant(r)? {
                Ok(linear_parts(l, var)?.map(|(a, b)| (a * &c, b * c)))
            } else {
                // Both factors mention a variable.
                Ok(None)
            }
        }
        Expr::Div(l, r) => match eval_constant(r)? {
            Some(c) if c.is_zero() => {
                Err(SolveError::Arithmetic("division by zero".to_string()))
            }
            Some(c) => Ok(linear_parts(l, var)?.map(|(a, b)| (a / &c, b / c))),
            None => Ok(None),
        },
    }
}

/// Collect an expression into the linear form `a·var + b`.
/// `Ok(None)` when the expression is not linear in `var`.
pub fn collect_linear(
    expr: &Arc<Expr>,
    var: &str,
) -> Result<Option<(BigRational, BigRational)>, SolveError> {
    linear_parts(expr, var)
}

/// Canonical expression for `a·var + b`.
pub fn linear_form(a: &BigRational, b: &BigRational, var: &str) -> Arc<Expr> {
    let var_part = if a.is_zero() {
        None
    } else if a.is_one() {
        Some(Expr::var(var))
    } else if (-a).is_one() {
        Some(Expr::neg(Expr::var(var)))
    } else {
        Some(Expr::mul(Expr::rational(a.clone()), Expr::var(var)))
    };

    match var_part {
        None => Expr::rational(b.clone()),
        Some(vp) if b.is_zero() => vp,
        Some(vp) if b.is_negative() => Expr::sub(vp, Expr::rational(b.abs())),
        Some(vp) => Expr::add(vp, Expr::rational(b.clone())),
    }
}
