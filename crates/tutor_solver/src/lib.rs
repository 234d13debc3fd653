//! Step-by-step linear equation solver.
//!
//! Given an equation like `2x + 5 = 11`, produces the ordered list of
//! both-sides rewrites a student would perform by hand, ending with the
//! isolated variable when the equation has exactly one solution.

pub mod collect;
pub mod error;
pub mod solve;
pub mod step;

pub use collect::{add_terms, collect_linear, contains_var};
pub use error::SolveError;
pub use solve::{generate_steps, steps_for, unique_solution};
pub use step::{SolveStep, ORIGINAL_EQUATION, SIMPLIFIED_FORM};

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tutor_parser::parse_equation;

    #[test]
    fn two_step_isolation() {
        let steps = steps_for("2x + 5 = 11").unwrap();
        let rendered: Vec<(&str, &str)> = steps
            .iter()
            .map(|s| (s.latex.as_str(), s.description.as_str()))
            .collect();
        assert_eq!(
            rendered,
            vec![
                ("$2x + 5 = 11$", "Original equation"),
                ("$2x = 6$", "Subtract 5 from both sides"),
                ("$x = 3$", "Divide both sides by 2"),
                ("$x = 3$", "Solution: x = 3"),
            ]
        );
    }

    #[test]
    fn negative_constant_becomes_addition() {
        let steps = steps_for("x - 4 = 0").unwrap();
        let rendered: Vec<(&str, &str)> = steps
            .iter()
            .map(|s| (s.latex.as_str(), s.description.as_str()))
            .collect();
        assert_eq!(
            rendered,
            vec![
                ("$x - 4 = 0$", "Original equation"),
                ("$x = 4$", "Add 4 to both sides"),
                ("$x = 4$", "Solution: x = 4"),
            ]
        );
    }

    #[test]
    fn like_terms_collect_before_isolation() {
        let steps = steps_for("3x + 2x + 4 = 14").unwrap();
        let descriptions: Vec<&str> =
            steps.iter().map(|s| s.description.as_str()).collect();
        assert_eq!(
            descriptions,
            vec![
                "Original equation",
                "Simplified form",
                "Subtract 4 from both sides",
                "Divide both sides by 5",
                "Solution: x = 2",
            ]
        );
        assert_eq!(steps[1].latex, "$5x + 4 = 14$");
        assert_eq!(steps[3].latex, "$x = 2$");
    }

    #[test]
    fn parenthesized_factor_expands_and_solves() {
        let steps = steps_for("3(x + 1) = 6").unwrap();
        let rendered: Vec<(&str, &str)> = steps
            .iter()
            .map(|s| (s.latex.as_str(), s.description.as_str()))
            .collect();
        assert_eq!(
            rendered,
            vec![
                ("$3 \\cdot \\left(x + 1\\right) = 6$", "Original equation"),
                ("$3x + 3 = 6$", "Simplified form"),
                ("$3x = 3$", "Subtract 3 from both sides"),
                ("$x = 1$", "Divide both sides by 3"),
                ("$x = 1$", "Solution: x = 1"),
            ]
        );
    }

    #[test]
    fn equation_without_variable_stops_at_step_zero() {
        let steps = steps_for("5 = 5").unwrap();
        assert_eq!(steps.len(), 1);
        assert_eq!(steps[0].description, ORIGINAL_EQUATION);
        assert!(!steps.iter().any(|s| s.is_solution()));
    }

    #[test]
    fn already_isolated_yields_no_rewrites() {
        let steps = steps_for("x = 3").unwrap();
        let descriptions: Vec<&str> =
            steps.iter().map(|s| s.description.as_str()).collect();
        assert_eq!(descriptions, vec!["Original equation", "Solution: x = 3"]);
    }

    #[test]
    fn contradiction_has_no_solution_step() {
        // x + 1 = x has no solution; the sequence ends without a final step.
        let steps = steps_for("x + 1 = x").unwrap();
        assert!(!steps.iter().any(|s| s.is_solution()));
    }

    #[test]
    fn fractional_coefficient_divides_exactly() {
        let steps = steps_for("x/2 = 3").unwrap();
        let last = steps.last().unwrap();
        assert_eq!(last.description, "Solution: x = 6");
        assert!(steps
            .iter()
            .any(|s| s.description == "Divide both sides by 1/2"));
    }

    #[test]
    fn symbolic_right_side_folds_constants() {
        let steps = steps_for("2x + 5 = x + 11").unwrap();
        assert_eq!(steps[1].description, "Subtract 5 from both sides");
        assert_eq!(steps[1].latex, "$2x = x + 6$");
        assert_eq!(steps.last().unwrap().description, "Solution: x = 6");
    }

    #[test]
    fn negated_variable_divides_by_minus_one() {
        let steps = steps_for("-x = 5").unwrap();
        assert!(steps
            .iter()
            .any(|s| s.description == "Divide both sides by -1"));
        assert_eq!(steps.last().unwrap().description, "Solution: x = -5");
    }

    #[test]
    fn literal_zero_divisor_is_an_arithmetic_error() {
        assert!(matches!(
            steps_for("x + 5/0 = 1"),
            Err(SolveError::Arithmetic(_))
        ));
    }

    #[test]
    fn first_step_round_trips_to_the_input() {
        let eq = parse_equation("2x + 5 = 11").unwrap();
        let steps = generate_steps(&eq, "x").unwrap();
        assert_eq!(steps[0].equation_after, eq);
    }
}
