//! LaTeX rendering for expressions and equations.
//!
//! Output is aimed at MathJax/KaTeX on the whiteboard frontend: integers
//! render bare, non-integer rationals as `\frac{..}{..}`, and a numeric
//! coefficient juxtaposes with its variable (`2x` rather than `2 \cdot x`).

use crate::expression::Expr;
use num_traits::Signed;

/// Render an expression as LaTeX.
pub fn latex(expr: &Expr) -> String {
    latex_prec(expr, 0)
}

fn latex_prec(expr: &Expr, min_prec: u8) -> String {
    let rendered = latex_node(expr);
    if expr.precedence() < min_prec {
        format!("\\left({}\\right)", rendered)
    } else {
        rendered
    }
}

fn latex_node(expr: &Expr) -> String {
    match expr {
        Expr::Number(n) => {
            if n.is_integer() {
                n.to_string()
            } else if n.is_negative() {
                let a = n.abs();
                format!("-\\frac{{{}}}{{{}}}", a.numer(), a.denom())
            } else {
                format!("\\frac{{{}}}{{{}}}", n.numer(), n.denom())
            }
        }
        Expr::Variable(v) => v.clone(),
        Expr::Add(l, r) => {
            // Prefer "a - b" over "a + -b" when the right operand is negative.
            match r.as_ref() {
                Expr::Number(n) if n.is_negative() => {
                    let pos = Expr::Number(n.abs());
                    format!("{} - {}", latex_prec(l, 1), latex_prec(&pos, 2))
                }
                Expr::Neg(inner) => {
                    format!("{} - {}", latex_prec(l, 1), latex_prec(inner, 2))
                }
                _ => format!("{} + {}", latex_prec(l, 1), latex_prec(r, 1)),
            }
        }
        Expr::Sub(l, r) => format!("{} - {}", latex_prec(l, 1), latex_prec(r, 2)),
        Expr::Mul(l, r) => {
            let lhs = latex_prec(l, 2);
            let rhs = latex_prec(r, 3);
            if juxtaposes(l, r) {
                format!("{}{}", lhs, rhs)
            } else {
                format!("{} \\cdot {}", lhs, rhs)
            }
        }
        Expr::Div(l, r) => format!("\\frac{{{}}}{{{}}}", latex(l), latex(r)),
        Expr::Neg(e) => format!("-{}", latex_prec(e, 3)),
    }
}

// An integer coefficient next to a variable reads as implicit multiplication.
fn juxtaposes(l: &Expr, r: &Expr) -> bool {
    match (l, r) {
        (Expr::Number(n), Expr::Variable(_)) => n.is_integer(),
        (Expr::Neg(inner), Expr::Variable(_)) => {
            matches!(inner.as_ref(), Expr::Number(n) if n.is_integer())
        }
        _ => false,
    }
}
