use thiserror::Error;
use tutor_parser::ParseError;

#[derive(Error, Debug)]
pub enum SolveError {
    #[error("{0}")]
    Parse(#[from] ParseError),
    #[error("Arithmetic error: {0}")]
    Arithmetic(String),
}
