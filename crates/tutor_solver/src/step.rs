use tutor_ast::Equation;

/// Description used for the first step of every sequence. The annotation
/// pass skips steps carrying this description.
pub const ORIGINAL_EQUATION: &str = "Original equation";

/// Description for the one-shot like-term collection step.
pub const SIMPLIFIED_FORM: &str = "Simplified form";

/// One recorded rewrite: the equation after the move, its typeset form, a
/// mechanical description ("Divide both sides by 3"), and an optional
/// student-facing comment filled in by the annotation pass.
#[derive(Debug, Clone, PartialEq)]
pub struct SolveStep {
    pub equation_after: Equation,
    pub latex: String,
    pub description: String,
    pub teaching_comment: String,
}

impl SolveStep {
    pub fn new(equation_after: Equation, description: impl Into<String>) -> Self {
        let latex = format!("${}$", equation_after.to_latex());
        Self {
            equation_after,
            latex,
            description: description.into(),
            teaching_comment: String::new(),
        }
    }

    /// True for the terminal "Solution: x = ..." step.
    pub fn is_solution(&self) -> bool {
        self.description.starts_with("Solution:")
    }
}
