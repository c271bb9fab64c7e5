//! Executes one node program over an abstract value domain.
pub mod bytecode;
pub mod engine;
pub mod kernel;
pub mod port;
pub mod registers;
pub mod signal;
pub mod value;

pub use bytecode::{Instruction, NodeLayout, OpCode, Source, Target};
pub use engine::Engine;
pub use port::{Direction, Interaction, Port};
pub use registers::Registers;
pub use signal::{Interrupt, Violation};
pub use value::{Arithmetic, Atom, Bounded, Symbolic, Term};
