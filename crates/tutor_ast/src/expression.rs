use num_bigint::BigInt;
use num_rational::BigRational;
use std::fmt;
use std::sync::Arc;

/// Immutable symbolic expression over exact rationals and named variables.
///
/// Subtraction, division and negation are kept as explicit nodes so that a
/// parsed equation renders back the way the student typed it. Every rewrite
/// allocates a new tree; nodes are shared via `Arc`, never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Number(BigRational),
    Variable(String),
    Add(Arc<Expr>, Arc<Expr>),
    Sub(Arc<Expr>, Arc<Expr>),
    Mul(Arc<Expr>, Arc<Expr>),
    Div(Arc<Expr>, Arc<Expr>),
    Neg(Arc<Expr>),
}

impl Expr {
    // Helper constructors for cleaner code
    pub fn num(n: i64) -> Arc<Self> {
        Arc::new(Expr::Number(BigRational::from_integer(BigInt::from(n))))
    }

    pub fn rational(n: BigRational) -> Arc<Self> {
        Arc::new(Expr::Number(n))
    }

    pub fn var(name: &str) -> Arc<Self> {
        Arc::new(Expr::Variable(name.to_string()))
    }

    pub fn add(lhs: Arc<Expr>, rhs: Arc<Expr>) -> Arc<Self> {
        Arc::new(Expr::Add(lhs, rhs))
    }

    pub fn sub(lhs: Arc<Expr>, rhs: Arc<Expr>) -> Arc<Self> {
        Arc::new(Expr::Sub(lhs, rhs))
    }

    pub fn mul(lhs: Arc<Expr>, rhs: Arc<Expr>) -> Arc<Self> {
        Arc::new(Expr::Mul(lhs, rhs))
    }

    pub fn div(lhs: Arc<Expr>, rhs: Arc<Expr>) -> Arc<Self> {
        Arc::new(Expr::Div(lhs, rhs))
    }

    pub fn neg(expr: Arc<Expr>) -> Arc<Self> {
        Arc::new(Expr::Neg(expr))
    }

    /// Numeric value if this node is a literal.
    pub fn as_number(&self) -> Option<&BigRational> {
        match self {
            Expr::Number(n) => Some(n),
            _ => None,
        }
    }

    /// True when this node is exactly the named variable.
    pub fn is_var(&self, name: &str) -> bool {
        matches!(self, Expr::Variable(v) if v == name)
    }
}

impl Expr {
    pub(crate) fn precedence(&self) -> u8 {
        match self {
            Expr::Add(_, _) | Expr::Sub(_, _) => 1,
            Expr::Mul(_, _) | Expr::Div(_, _) => 2,
            Expr::Neg(_) => 3,
            Expr::Number(_) | Expr::Variable(_) => 4,
        }
    }
}

fn fmt_side(f: &mut fmt::Formatter<'_>, side: &Expr, min_prec: u8) -> fmt::Result {
    if side.precedence() < min_prec {
        write!(f, "({})", side)
    } else {
        write!(f, "{}", side)
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Number(n) => write!(f, "{}", n),
            Expr::Variable(s) => write!(f, "{}", s),
            Expr::Add(l, r) => {
                fmt_side(f, l, 1)?;
                write!(f, " + ")?;
                fmt_side(f, r, 1)
            }
            Expr::Sub(l, r) => {
                fmt_side(f, l, 1)?;
                write!(f, " - ")?;
                // Right side of '-' needs parens for equal precedence: a - (b + c)
                fmt_side(f, r, 2)
            }
            Expr::Mul(l, r) => {
                fmt_side(f, l, 2)?;
                write!(f, "*")?;
                fmt_side(f, r, 3)
            }
            Expr::Div(l, r) => {
                fmt_side(f, l, 2)?;
                write!(f, "/")?;
                fmt_side(f, r, 3)
            }
            Expr::Neg(e) => {
                write!(f, "-")?;
                fmt_side(f, e, 3)
            }
        }
    }
}
