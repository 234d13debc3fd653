use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Parse error: {0}")]
    NomError(String),
    #[error("Unconsumed input: {0}")]
    UnconsumedInput(String),
    #[error("Please provide an equation with an equals sign (e.g., '2x + 5 = 11')")]
    MissingEquals,
    #[error("Equation must contain exactly one '=' sign, found {0}")]
    MultipleEquals(usize),
    #[error("Equation side is empty")]
    EmptySide,
}
