//! The step generator: a bounded rewrite loop that walks a linear equation
//! to its isolated form, recording each both-sides move as a step.

use crate::collect::{
    add_terms, collect_linear, contains_var, eval_constant, linear_form, sum_terms,
};
use crate::error::SolveError;
use crate::step::{SolveStep, ORIGINAL_EQUATION, SIMPLIFIED_FORM};
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};
use std::sync::Arc;
use tracing::debug;
use tutor_ast::{Equation, Expr};

/// Parse a raw equation string and generate its step sequence.
/// Convenience wrapper around [`parse_equation`] + [`generate_steps`]
/// using the fixed variable convention `x`.
///
/// [`parse_equation`]: tutor_parser::parse_equation
pub fn steps_for(raw: &str) -> Result<Vec<SolveStep>, SolveError> {
    let eq = tutor_parser::parse_equation(raw)?;
    generate_steps(&eq, "x")
}

/// Generate the full step sequence for one equation.
///
/// The sequence always starts with the original equation. A one-shot
/// like-term collection step follows when it changes the equation's shape.
/// The rewrite loop then applies the additive and multiplicative rules until
/// the left side is the bare variable or neither rule matches; a final
/// "Solution" step is appended exactly when the equation has one solution.
/// All-or-nothing: any arithmetic failure aborts without partial output.
pub fn generate_steps(eq: &Equation, var: &str) -> Result<Vec<SolveStep>, SolveError> {
    let mut steps = vec![SolveStep::new(eq.clone(), ORIGINAL_EQUATION)];

    // Closed-form view of the equation, computed once. `None` means the
    // equation is non-linear in `var` or has zero/many solutions; the
    // rewrite loop is skipped in that case.
    let solution = unique_solution(eq, var)?;

    // One-shot like-term collection. When it changes the equation's shape the
    // rewrite loop continues from the collected form, which keeps the count
    // of constant terms on the left non-increasing across the sequence.
    let mut current = eq.clone();
    if let Some(collected) = collect_equation(eq, var)? {
        if collected != *eq {
            current = collected.clone();
            steps.push(SolveStep::new(collected, SIMPLIFIED_FORM));
        }
    }

    if solution.is_some() {
        // Each additive move drops one left-side term and the multiplicative
        // move yields the bare variable, so term count bounds the iterations.
        // The budget is a backstop on top of that argument.
        let budget = add_terms(&current.lhs).len() + 2;

        for _ in 0..budget {
            if current.lhs.is_var(var) {
                break;
            }
            if let Some(step) = additive_move(&current, var)? {
                debug!(step = %step.description, "additive rule");
                current = step.equation_after.clone();
                steps.push(step);
                continue;
            }
            if let Some(step) = multiplicative_move(&current, var)? {
                debug!(step = %step.description, "multiplicative rule");
                current = step.equation_after.clone();
                steps.push(step);
                continue;
            }
            // Normal termination: no rule matches.
            break;
        }
    }

    if let Some(sol) = solution {
        let final_eq = Equation::new(Expr::var(var), Expr::rational(sol.clone()));
        steps.push(SolveStep::new(
            final_eq,
            format!("Solution: {} = {}", var, sol),
        ));
    }

    Ok(steps)
}

/// The unique solution of the equation, if it is linear in `var` with a
/// nonzero leading coefficient.
pub fn unique_solution(eq: &Equation, var: &str) -> Result<Option<BigRational>, SolveError> {
    let lhs = collect_linear(&eq.lhs, var)?;
    let rhs = collect_linear(&eq.rhs, var)?;
    match (lhs, rhs) {
        (Some((a1, b1)), Some((a2, b2))) => {
            let a = a1 - a2;
            if a.is_zero() {
                // Zero or infinitely many solutions; no closed form.
                Ok(None)
            } else {
                Ok(Some((b2 - b1) / a))
            }
        }
        _ => Ok(None),
    }
}

// Both sides re-expressed in collected linear form, or None when a side
// is not linear in the variable.
fn collect_equation(eq: &Equation, var: &str) -> Result<Option<Equation>, SolveError> {
    let lhs = collect_linear(&eq.lhs, var)?;
    let rhs = collect_linear(&eq.rhs, var)?;
    match (lhs, rhs) {
        (Some((a1, b1)), Some((a2, b2))) => Ok(Some(Equation::new(
            linear_form(&a1, &b1, var),
            linear_form(&a2, &b2, var),
        ))),
        _ => Ok(None),
    }
}

// Additive rule: the left side is a sum holding at least one variable-free
// term. The first such term (document order) is removed from both sides.
fn additive_move(eq: &Equation, var: &str) -> Result<Option<SolveStep>, SolveError> {
    let terms = add_terms(&eq.lhs);
    if terms.len() < 2 {
        // Not a sum.
        return Ok(None);
    }

    let Some(idx) = terms.iter().position(|t| !contains_var(t, var)) else {
        return Ok(None);
    };
    let Some(value) = eval_constant(&terms[idx])? else {
        return Ok(None);
    };

    let remaining: Vec<Arc<Expr>> = terms
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != idx)
        .map(|(_, t)| t.clone())
        .collect();

    // Collect what stays on the left so 3x + 2x survives as 5x.
    let raw_lhs = sum_terms(&remaining);
    let new_lhs = match collect_linear(&raw_lhs, var)? {
        Some((a, b)) => linear_form(&a, &b, var),
        None => raw_lhs,
    };
    let new_rhs = shift_constant(&eq.rhs, &value, var)?;

    let description = if value.is_positive() {
        format!("Subtract {} from both sides", value)
    } else {
        format!("Add {} to both sides", -value)
    };

    Ok(Some(SolveStep::new(
        Equation::new(new_lhs, new_rhs),
        description,
    )))
}

// Multiplicative rule: the left side is exactly the variable scaled by a
// numeric coefficient other than zero or one. Both sides divide by it.
fn multiplicative_move(eq: &Equation, var: &str) -> Result<Option<SolveStep>, SolveError> {
    let Some(coeff) = variable_coefficient(&eq.lhs, var)? else {
        return Ok(None);
    };
    if coeff.is_one() {
        return Ok(None);
    }
    // Collection can in principle hand us a vanished coefficient; dividing
    // by it must fail loudly rather than panic in exact arithmetic.
    if coeff.is_zero() {
        return Err(SolveError::Arithmetic(
            "division by zero while isolating the variable".to_string(),
        ));
    }

    let new_rhs = match eval_constant(&eq.rhs)? {
        Some(r) => Expr::rational(r / coeff.clone()),
        None => Expr::div(eq.rhs.clone(), Expr::rational(coeff.clone())),
    };

    Ok(Some(SolveStep::new(
        Equation::new(Expr::var(var), new_rhs),
        format!("Divide both sides by {}", coeff),
    )))
}

// Coefficient `c` when the expression is exactly `c * var` in one of the
// shapes `c*x`, `x*c`, `-x`, `x/c`. A literal zero divisor is an error.
fn variable_coefficient(
    expr: &Expr,
    var: &str,
) -> Result<Option<BigRational>, SolveError> {
    match expr {
        Expr::Mul(l, r) => {
            if r.is_var(var) {
                if let Some(c) = eval_constant(l)? {
                    return Ok(Some(c));
                }
            }
            if l.is_var(var) {
                if let Some(c) = eval_constant(r)? {
                    return Ok(Some(c));
                }
            }
            Ok(None)
        }
        Expr::Neg(inner) if inner.is_var(var) => Ok(Some(-BigRational::one())),
        Expr::Div(l, r) if l.is_var(var) => match eval_constant(r)? {
            Some(c) if c.is_zero() => Err(SolveError::Arithmetic(
                "division by zero while isolating the variable".to_string(),
            )),
            Some(c) => Ok(Some(c.recip())),
            None => Ok(None),
        },
        _ => Ok(None),
    }
}

// Fold `rhs - value` into collected linear form when the right side is
// linear in `var` (a constant side is the `a = 0` case), so constants never
// pile up as an unfolded subtraction chain. Otherwise keep it symbolic.
fn shift_constant(
    rhs: &Arc<Expr>,
    value: &BigRational,
    var: &str,
) -> Result<Arc<Expr>, SolveError> {
    if let Some((a, b)) = collect_linear(rhs, var)? {
        return Ok(linear_form(&a, &(b - value), var));
    }
    if value.is_negative() {
        Ok(Expr::add(rhs.clone(), Expr::rational(value.abs())))
    } else {
        Ok(Expr::sub(rhs.clone(), Expr::rational(value.clone())))
    }
}
