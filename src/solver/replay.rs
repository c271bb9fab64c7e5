//! Re-executes a program on one input and records what it did.
use crate::compute::bytecode::NodeLayout;
use crate::compute::engine::Engine;
use crate::compute::port::{Direction, Interaction, Port};
use crate::compute::registers::Registers;
use crate::compute::signal::{Interrupt, Violation};
use crate::compute::value::Bounded;
use crate::error::SearchError;
use crate::store::DecisionStore;
use std::collections::HashSet;

/// The recorded run: every state reported before an instruction, every
/// value written, and what ended it.
#[derive(Debug, Clone, PartialEq)]
pub struct Replay {
    pub outputs: Vec<i16>,
    pub trace: Vec<Registers<i16>>,
    pub stop: Interrupt,
}

struct Recorder<'a> {
    layout: &'a NodeLayout,
    input: &'a [i16],
    expected_len: usize,
    consumed: usize,
    outputs: Vec<i16>,
    trace: Vec<Registers<i16>>,
    seen: HashSet<(usize, usize, Registers<i16>)>,
}

impl Interaction<i16> for Recorder<'_> {
    fn recv(&mut self, port: Port) -> Result<i16, Interrupt> {
        if port != self.layout.input_port {
            return Err(Violation::IllegalPort { port, direction: Direction::Read }.into());
        }
        let value = *self.input.get(self.consumed).ok_or(Interrupt::Stuck)?;
        self.consumed += 1;
        Ok(value)
    }

    fn send(&mut self, port: Port, value: i16) -> Result<(), Interrupt> {
        if port != self.layout.output_port {
            return Err(Violation::IllegalPort { port, direction: Direction::Write }.into());
        }
        if self.outputs.len() >= self.expected_len {
            return Err(Interrupt::Done);
        }
        self.outputs.push(value);
        if self.outputs.len() == self.expected_len {
            return Err(Interrupt::Done);
        }
        Ok(())
    }

    fn report(&mut self, state: &Registers<i16>) -> Result<(), Interrupt> {
        self.trace.push(state.clone());
        if !self.seen.insert((self.consumed, self.outputs.len(), state.clone())) {
            return Err(Violation::Loop { pc: state.pc }.into());
        }
        Ok(())
    }
}

/// Runs `program` on `input` until it has written `expected_len` values or
/// stops for any other reason. Output values are recorded, not checked.
pub fn replay(
    program: &DecisionStore,
    layout: &NodeLayout,
    input: &[i16],
    expected_len: usize,
) -> Result<Replay, SearchError> {
    let mut recorder = Recorder {
        layout,
        input,
        expected_len,
        consumed: 0,
        outputs: Vec::new(),
        trace: Vec::new(),
        seen: HashSet::new(),
    };
    let engine = Engine::new(program, layout, Bounded::new(program, layout.value_limit));
    let stop = match engine.run(&mut recorder) {
        Interrupt::Fault(err) => return Err(err),
        other => other,
    };
    Ok(Replay { outputs: recorder.outputs, trace: recorder.trace, stop })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compute::bytecode::{OpCode, Source, Target};
    use crate::store::{Choice, DecisionPoint};
    use rstest::rstest;

    fn mov(store: DecisionStore, slot: usize, src: Source, dst: Target) -> DecisionStore {
        store
            .bind(DecisionPoint::opcode(slot), Choice::Opcode(OpCode::Mov))
            .and_then(|s| s.bind(DecisionPoint::source(slot), Choice::Source(src)))
            .and_then(|s| s.bind(DecisionPoint::target(slot), Choice::Target(dst)))
            .unwrap()
    }

    fn echo() -> DecisionStore {
        let store = mov(DecisionStore::new(), 0, Source::Port(Port::Up), Target::Port(Port::Down));
        let store = store.bind(DecisionPoint::opcode(1), Choice::Opcode(OpCode::Nop)).unwrap();
        store.bind(DecisionPoint::opcode(2), Choice::Opcode(OpCode::Nop)).unwrap()
    }

    #[test]
    fn test_replay_records_states_and_outputs() {
        let layout = NodeLayout::default();
        let run = replay(&echo(), &layout, &[4, 5], 2).unwrap();

        assert_eq!(run.outputs, vec![4, 5]);
        assert_eq!(run.stop, Interrupt::Done);
        let pcs: Vec<usize> = run.trace.iter().map(|r| r.pc).collect();
        assert_eq!(pcs, vec![0, 1, 2, 0]);
    }

    #[rstest]
    #[case(&[4], 2, Interrupt::Stuck)]
    #[case(&[], 1, Interrupt::Stuck)]
    fn test_replay_stops_when_input_runs_dry(#[case] input: &[i16], #[case] len: usize, #[case] stop: Interrupt) {
        let run = replay(&echo(), &NodeLayout::default(), input, len).unwrap();
        assert_eq!(run.stop, stop);
        assert_eq!(run.outputs, input.to_vec());
    }

    #[test]
    fn test_zero_expected_outputs_records_nothing() {
        let run = replay(&echo(), &NodeLayout::default(), &[4], 0).unwrap();
        assert_eq!(run.stop, Interrupt::Done);
        assert!(run.outputs.is_empty());
    }

    #[test]
    fn test_replay_reports_missing_decisions() {
        let store = mov(DecisionStore::new(), 0, Source::Port(Port::Up), Target::Acc);
        let run = replay(&store, &NodeLayout::default(), &[1], 1).unwrap();
        assert_eq!(run.stop, Interrupt::MissingDecision(DecisionPoint::opcode(1)));
        assert!(run.outputs.is_empty());
    }

    #[test]
    fn test_replay_detects_a_silent_loop() {
        let layout = NodeLayout { slots: 1, ..NodeLayout::default() };
        let store = DecisionStore::new().bind(DecisionPoint::opcode(0), Choice::Opcode(OpCode::Nop)).unwrap();
        let run = replay(&store, &layout, &[], 1).unwrap();
        assert_eq!(run.stop, Interrupt::Violation(Violation::Loop { pc: 0 }));
        assert_eq!(run.trace.len(), 2);
    }
}
