//! Errors that abort a whole search.
//!
//! Everything here points at a broken problem definition or a bug in the
//! driver, never at a property of the candidate being evaluated.
use crate::store::{Choice, DecisionPoint};
use crate::validation::ValidationError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SearchError {
    #[error("decision {0} is already bound")]
    AlreadyBound(DecisionPoint),
    #[error("decision {point} holds {choice:?}, which is not an option of its kind")]
    ChoiceMismatch { point: DecisionPoint, choice: Choice },
    #[error("invalid problem: {}", join_errors(.0))]
    InvalidProblem(Vec<ValidationError>),
    #[error("failed to parse problem: {0}")]
    Parse(String),
    #[error("failed to read problem file: {0}")]
    Io(String),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors.iter().map(|e| e.to_string()).collect::<Vec<_>>().join("; ")
}
