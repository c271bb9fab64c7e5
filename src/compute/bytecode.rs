use crate::compute::port::Port;
use crate::compute::signal::Interrupt;
use crate::error::SearchError;
use crate::store::{Choice, DecisionPoint, DecisionStore};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum OpCode {
    Add = 0,
    Sub = 1,
    Mov = 2,
    Neg = 3,
    Swp = 4,
    Sav = 5,
    Nop = 6,
}

impl OpCode {
    /// Declaration order; this is also the branching order of an opcode decision.
    pub const ALL: [OpCode; 7] = [
        OpCode::Add,
        OpCode::Sub,
        OpCode::Mov,
        OpCode::Neg,
        OpCode::Swp,
        OpCode::Sav,
        OpCode::Nop,
    ];

    pub fn mnemonic(&self) -> &'static str {
        match self {
            OpCode::Add => "ADD",
            OpCode::Sub => "SUB",
            OpCode::Mov => "MOV",
            OpCode::Neg => "NEG",
            OpCode::Swp => "SWP",
            OpCode::Sav => "SAV",
            OpCode::Nop => "NOP",
        }
    }

    pub fn reads_source(&self) -> bool {
        matches!(self, OpCode::Add | OpCode::Sub | OpCode::Mov)
    }

    pub fn writes_target(&self) -> bool {
        matches!(self, OpCode::Mov)
    }
}

impl fmt::Display for OpCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

/// Where an instruction reads its operand from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Source {
    Acc,
    /// A numeric literal; its value is a separate decision of the same slot.
    Constant,
    Port(Port),
}

/// Where a `MOV` puts its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    Nil,
    Acc,
    Port(Port),
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Nil => f.write_str("NIL"),
            Target::Acc => f.write_str("ACC"),
            Target::Port(port) => port.fmt(f),
        }
    }
}

fn default_slots() -> usize {
    3
}

fn default_input_port() -> Port {
    Port::Up
}

fn default_output_port() -> Port {
    Port::Down
}

fn default_constants() -> Vec<i16> {
    vec![0, 1, -1]
}

fn default_value_limit() -> i16 {
    999
}

/// Shape of the node being programmed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeLayout {
    /// Number of instruction slots; the program counter wraps after the last.
    #[serde(default = "default_slots")]
    pub slots: usize,
    #[serde(default = "default_input_port")]
    pub input_port: Port,
    #[serde(default = "default_output_port")]
    pub output_port: Port,
    /// Literals a constant operand may take, in branching order.
    #[serde(default = "default_constants")]
    pub constants: Vec<i16>,
    /// The accumulator may hold values in `-value_limit..=value_limit`.
    #[serde(default = "default_value_limit")]
    pub value_limit: i16,
}

impl Default for NodeLayout {
    fn default() -> Self {
        Self {
            slots: default_slots(),
            input_port: default_input_port(),
            output_port: default_output_port(),
            constants: default_constants(),
            value_limit: default_value_limit(),
        }
    }
}

impl NodeLayout {
    /// The ports this node is wired to: input first, then output.
    pub fn ports(&self) -> Vec<Port> {
        let mut ports = vec![self.input_port];
        if self.output_port != self.input_port {
            ports.push(self.output_port);
        }
        ports
    }

    pub fn sources(&self) -> Vec<Source> {
        let mut sources = vec![Source::Acc];
        if !self.constants.is_empty() {
            sources.push(Source::Constant);
        }
        sources.extend(self.ports().into_iter().map(Source::Port));
        sources
    }

    pub fn targets(&self) -> Vec<Target> {
        let mut targets = vec![Target::Nil, Target::Acc];
        targets.extend(self.ports().into_iter().map(Target::Port));
        targets
    }
}

/// One decoded instruction slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    Add(Source),
    Sub(Source),
    Mov(Source, Target),
    Neg,
    Swp,
    Sav,
    Nop,
}

impl Instruction {
    /// Loads every decision the instruction in `slot` needs, opcode first.
    ///
    /// Nothing is executed here, so a missing operand is always reported
    /// before the instruction can touch a port. A `MOV` that reads the
    /// accumulator or a literal into `NIL` is rejected as redundant.
    pub fn decode(program: &DecisionStore, slot: usize) -> Result<Self, Interrupt> {
        let op = Self::load_opcode(program, slot)?;
        let instruction = match op {
            OpCode::Add => Instruction::Add(Self::load_source(program, slot)?),
            OpCode::Sub => Instruction::Sub(Self::load_source(program, slot)?),
            OpCode::Mov => {
                let src = Self::load_source(program, slot)?;
                let dst = Self::load_target(program, slot)?;
                if dst == Target::Nil && matches!(src, Source::Acc | Source::Constant) {
                    return Err(Interrupt::Redundancy { slot });
                }
                Instruction::Mov(src, dst)
            }
            OpCode::Neg => Instruction::Neg,
            OpCode::Swp => Instruction::Swp,
            OpCode::Sav => Instruction::Sav,
            OpCode::Nop => Instruction::Nop,
        };
        Ok(instruction)
    }

    fn load_opcode(program: &DecisionStore, slot: usize) -> Result<OpCode, Interrupt> {
        let point = DecisionPoint::opcode(slot);
        match program.load(point)? {
            Choice::Opcode(op) => Ok(op),
            choice => Err(SearchError::ChoiceMismatch { point, choice }.into()),
        }
    }

    fn load_source(program: &DecisionStore, slot: usize) -> Result<Source, Interrupt> {
        let point = DecisionPoint::source(slot);
        match program.load(point)? {
            Choice::Source(src) => Ok(src),
            choice => Err(SearchError::ChoiceMismatch { point, choice }.into()),
        }
    }

    fn load_target(program: &DecisionStore, slot: usize) -> Result<Target, Interrupt> {
        let point = DecisionPoint::target(slot);
        match program.load(point)? {
            Choice::Target(dst) => Ok(dst),
            choice => Err(SearchError::ChoiceMismatch { point, choice }.into()),
        }
    }
}
