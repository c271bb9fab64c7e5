//! Finds a program satisfying every scenario by depth-first search.
pub mod harness;
pub mod problem;
pub mod replay;
pub mod search;

pub use problem::{Scenario, SearchProblem};
pub use replay::{replay, Replay};
pub use search::{Rejection, SearchOutcome, SearchStats, Synthesizer, Verdict};
