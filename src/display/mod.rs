//! Human-readable rendering of programs and runs.
pub mod listing;
pub mod trace;

pub use listing::{format_program, program_lines};
pub use trace::format_replay;
