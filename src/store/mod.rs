//! The lazily-decided program representation.
mod decisions;
mod types;

pub use decisions::DecisionStore;
pub use types::{Choice, DecisionKind, DecisionPoint, Domain};
