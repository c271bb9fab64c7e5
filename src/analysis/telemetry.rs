use crate::compute::bytecode::{Instruction, NodeLayout, Source, Target};
use crate::store::{Choice, DecisionPoint, DecisionStore};
use serde::Serialize;
use std::collections::BTreeMap;

/// Static summary of a program: how much of it is decided and what it does
/// with its ports.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProgramProfile {
    /// Number of bound decisions, across all kinds.
    pub decided: usize,
    /// Slots whose opcode is still open.
    pub undecided_slots: Vec<usize>,
    pub op_counts: BTreeMap<String, usize>,
    /// Instructions reading each port, keyed by port mnemonic.
    pub port_reads: BTreeMap<String, usize>,
    pub port_writes: BTreeMap<String, usize>,
}

impl ProgramProfile {
    pub fn analyze(program: &DecisionStore, layout: &NodeLayout) -> Self {
        let mut profile = Self { decided: program.len(), ..Self::default() };

        for slot in 0..layout.slots {
            let op = match program.get(DecisionPoint::opcode(slot)) {
                Some(Choice::Opcode(op)) => op,
                _ => {
                    profile.undecided_slots.push(slot);
                    continue;
                }
            };
            *profile.op_counts.entry(op.mnemonic().to_string()).or_insert(0) += 1;

            // Operands only count once the whole instruction decodes.
            let (src, dst) = match Instruction::decode(program, slot) {
                Ok(Instruction::Add(src)) | Ok(Instruction::Sub(src)) => (Some(src), None),
                Ok(Instruction::Mov(src, dst)) => (Some(src), Some(dst)),
                _ => (None, None),
            };
            if let Some(Source::Port(port)) = src {
                *profile.port_reads.entry(port.mnemonic().to_string()).or_insert(0) += 1;
            }
            if let Some(Target::Port(port)) = dst {
                *profile.port_writes.entry(port.mnemonic().to_string()).or_insert(0) += 1;
            }
        }
        profile
    }

    pub fn is_complete(&self) -> bool {
        self.undecided_slots.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compute::bytecode::OpCode;
    use crate::compute::port::Port;

    fn mov(store: DecisionStore, slot: usize, src: Source, dst: Target) -> DecisionStore {
        store
            .bind(DecisionPoint::opcode(slot), Choice::Opcode(OpCode::Mov))
            .and_then(|s| s.bind(DecisionPoint::source(slot), Choice::Source(src)))
            .and_then(|s| s.bind(DecisionPoint::target(slot), Choice::Target(dst)))
            .unwrap()
    }

    #[test]
    fn test_profile_of_the_swap_program() {
        let layout = NodeLayout::default();
        let store = mov(DecisionStore::new(), 0, Source::Port(Port::Up), Target::Acc);
        let store = mov(store, 1, Source::Port(Port::Up), Target::Port(Port::Down));
        let store = mov(store, 2, Source::Acc, Target::Port(Port::Down));

        let profile = ProgramProfile::analyze(&store, &layout);
        assert_eq!(profile.decided, 9);
        assert!(profile.is_complete());
        assert_eq!(profile.op_counts.get("MOV"), Some(&3));
        assert_eq!(profile.port_reads.get("UP"), Some(&2));
        assert_eq!(profile.port_writes.get("DOWN"), Some(&2));
    }

    #[test]
    fn test_partial_program_lists_open_slots() {
        let layout = NodeLayout::default();
        let store = DecisionStore::new()
            .bind(DecisionPoint::opcode(1), Choice::Opcode(OpCode::Add))
            .unwrap();

        let profile = ProgramProfile::analyze(&store, &layout);
        assert_eq!(profile.decided, 1);
        assert_eq!(profile.undecided_slots, vec![0, 2]);
        assert_eq!(profile.op_counts.get("ADD"), Some(&1));
        assert!(profile.port_reads.is_empty());
    }
}
