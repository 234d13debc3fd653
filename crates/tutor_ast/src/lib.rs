pub mod expression;
pub mod latex;

pub use expression::Expr;
pub use latex::latex;

use std::fmt;
use std::sync::Arc;

/// An equation `lhs = rhs`. Immutable; every solver rewrite builds a new one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Equation {
    pub lhs: Arc<Expr>,
    pub rhs: Arc<Expr>,
}

impl Equation {
    pub fn new(lhs: Arc<Expr>, rhs: Arc<Expr>) -> Self {
        Self { lhs, rhs }
    }

    /// LaTeX form `lhs = rhs`, without math-mode delimiters.
    pub fn to_latex(&self) -> String {
        format!("{} = {}", latex(&self.lhs), latex(&self.rhs))
    }
}

impl fmt::Display for Equation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.lhs, self.rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn equation_display_and_latex() {
        let eq = Equation::new(
            Expr::add(Expr::mul(Expr::num(2), Expr::var("x")), Expr::num(5)),
            Expr::num(11),
        );
        assert_eq!(format!("{}", eq), "2*x + 5 = 11");
        assert_eq!(eq.to_latex(), "2x + 5 = 11");
    }
}
