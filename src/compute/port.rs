//! Node ports and the interaction capability the emulator talks through.
use crate::compute::registers::Registers;
use crate::compute::signal::Interrupt;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Port {
    Up,
    Down,
    Left,
    Right,
}

impl Port {
    pub const ALL: [Port; 4] = [Port::Up, Port::Down, Port::Left, Port::Right];

    pub fn mnemonic(&self) -> &'static str {
        match self {
            Port::Up => "UP",
            Port::Down => "DOWN",
            Port::Left => "LEFT",
            Port::Right => "RIGHT",
        }
    }
}

impl fmt::Display for Port {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

/// Which way a value was moving when a port was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Read,
    Write,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Read => f.write_str("read"),
            Direction::Write => f.write_str("written"),
        }
    }
}

/// Everything the node can observe of, or exchange with, the outside world.
///
/// Implementations decide which ports are legal and when a run is over: any
/// `Err` returned from a hook stops the emulator and is handed back to the
/// caller unchanged.
pub trait Interaction<V> {
    fn recv(&mut self, port: Port) -> Result<V, Interrupt>;

    fn send(&mut self, port: Port, value: V) -> Result<(), Interrupt>;

    /// Called with the machine state before every instruction.
    fn report(&mut self, state: &Registers<V>) -> Result<(), Interrupt>;
}
