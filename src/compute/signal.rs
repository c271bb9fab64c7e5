//! Signals that end an emulator run.
//!
//! A run never returns normally: the machine cycles until one of its hooks,
//! its arithmetic domain or the decision store interrupts it. Only `Fault`
//! is an error in the ordinary sense; every other variant describes the
//! candidate program being executed.
use crate::compute::port::{Direction, Port};
use crate::error::SearchError;
use crate::store::DecisionPoint;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Interrupt {
    /// The program has no choice yet for this decision point.
    #[error("decision required at {0}")]
    MissingDecision(DecisionPoint),
    #[error(transparent)]
    Violation(#[from] Violation),
    /// The instruction in `slot` is a no-op with a needless encoding.
    #[error("redundant instruction in slot {slot}")]
    Redundancy { slot: usize },
    #[error("input exhausted")]
    Stuck,
    #[error("run complete")]
    Done,
    #[error(transparent)]
    Fault(#[from] SearchError),
}

/// Ways a candidate proves itself invalid.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    #[error("value {value} leaves the accumulator range of ±{limit}")]
    Overflow { value: i32, limit: i16 },
    #[error("port {port} cannot be {direction} by this node")]
    IllegalPort { port: Port, direction: Direction },
    #[error("sent {actual} where {expected} was expected")]
    UnexpectedOutput { expected: i16, actual: i16 },
    #[error("sent {value} after the expected output was complete")]
    ExcessOutput { value: i16 },
    #[error("machine state repeated at pc {pc} without consuming input or producing output")]
    Loop { pc: usize },
    #[error("machine state at pc {pc} predicts two different output tails")]
    StateConflict { pc: usize },
}
