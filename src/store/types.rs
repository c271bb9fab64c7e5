use crate::compute::bytecode::{NodeLayout, OpCode, Source, Target};
use smallvec::SmallVec;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DecisionKind {
    Opcode,
    Source,
    Target,
    /// The literal behind a constant operand.
    Constant,
}

impl DecisionKind {
    pub fn tag(&self) -> &'static str {
        match self {
            DecisionKind::Opcode => "op",
            DecisionKind::Source => "src",
            DecisionKind::Target => "dst",
            DecisionKind::Constant => "const",
        }
    }
}

/// One undecided field of a program: a kind of decision at an instruction slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DecisionPoint {
    pub slot: usize,
    pub kind: DecisionKind,
}

/// Branching options of a single decision point.
pub type Domain = SmallVec<[Choice; 8]>;

impl DecisionPoint {
    pub fn new(slot: usize, kind: DecisionKind) -> Self {
        Self { slot, kind }
    }

    pub fn opcode(slot: usize) -> Self {
        Self::new(slot, DecisionKind::Opcode)
    }

    pub fn source(slot: usize) -> Self {
        Self::new(slot, DecisionKind::Source)
    }

    pub fn target(slot: usize) -> Self {
        Self::new(slot, DecisionKind::Target)
    }

    pub fn constant(slot: usize) -> Self {
        Self::new(slot, DecisionKind::Constant)
    }

    /// Stable textual identity, e.g. `"2:src"`.
    pub fn key(&self) -> String {
        self.to_string()
    }

    /// Every legal choice for this point, in declaration order.
    pub fn domain(&self, layout: &NodeLayout) -> Domain {
        match self.kind {
            DecisionKind::Opcode => OpCode::ALL.iter().copied().map(Choice::Opcode).collect(),
            DecisionKind::Source => layout.sources().into_iter().map(Choice::Source).collect(),
            DecisionKind::Target => layout.targets().into_iter().map(Choice::Target).collect(),
            DecisionKind::Constant => layout.constants.iter().copied().map(Choice::Constant).collect(),
        }
    }
}

impl fmt::Display for DecisionPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.slot, self.kind.tag())
    }
}

/// The option chosen for a decision point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Choice {
    Opcode(OpCode),
    Source(Source),
    Target(Target),
    Constant(i16),
}

impl Choice {
    pub fn kind(&self) -> DecisionKind {
        match self {
            Choice::Opcode(_) => DecisionKind::Opcode,
            Choice::Source(_) => DecisionKind::Source,
            Choice::Target(_) => DecisionKind::Target,
            Choice::Constant(_) => DecisionKind::Constant,
        }
    }
}
