//! Port behaviour of a single scenario, plus the cross-scenario collision table.
use crate::compute::bytecode::NodeLayout;
use crate::compute::port::{Direction, Interaction, Port};
use crate::compute::registers::Registers;
use crate::compute::signal::{Interrupt, Violation};
use crate::solver::problem::Scenario;
use std::collections::{HashMap, HashSet};

/// Remaining expected input, remaining expected output length and the
/// reported machine state.
type DetailState = (Vec<i16>, usize, Registers<i16>);

/// Remembers, for every detail state reached by one candidate, which output
/// tail the scenario at hand still expected.
///
/// A deterministic node that reaches the same state with the same input
/// still to come can only ever produce one output tail, so a second,
/// different tail of the same length proves the candidate cannot satisfy
/// both scenarios.
#[derive(Debug, Default)]
pub struct CollisionTable {
    expectations: HashMap<DetailState, Vec<i16>>,
}

impl CollisionTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.expectations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expectations.is_empty()
    }

    pub fn record(
        &mut self,
        remaining_input: &[i16],
        state: &Registers<i16>,
        remaining_output: &[i16],
    ) -> Result<(), Violation> {
        let key = (remaining_input.to_vec(), remaining_output.len(), state.clone());
        match self.expectations.get(&key) {
            Some(expected) if expected.as_slice() != remaining_output => {
                Err(Violation::StateConflict { pc: state.pc })
            }
            Some(_) => Ok(()),
            None => {
                self.expectations.insert(key, remaining_output.to_vec());
                Ok(())
            }
        }
    }
}

/// Feeds one scenario's input to the node and checks everything it sends.
pub struct ScenarioHarness<'a> {
    scenario: &'a Scenario,
    layout: &'a NodeLayout,
    consumed: usize,
    produced: usize,
    /// (remaining input, remaining output, state) seen during this run.
    encounters: HashSet<(usize, usize, Registers<i16>)>,
    collisions: &'a mut CollisionTable,
}

impl<'a> ScenarioHarness<'a> {
    pub fn new(scenario: &'a Scenario, layout: &'a NodeLayout, collisions: &'a mut CollisionTable) -> Self {
        Self {
            scenario,
            layout,
            consumed: 0,
            produced: 0,
            encounters: HashSet::new(),
            collisions,
        }
    }

    pub fn consumed(&self) -> usize {
        self.consumed
    }

    pub fn produced(&self) -> usize {
        self.produced
    }

    fn remaining_input(&self) -> &'a [i16] {
        &self.scenario.input[self.consumed..]
    }

    fn remaining_output(&self) -> &'a [i16] {
        &self.scenario.output[self.produced..]
    }
}

impl Interaction<i16> for ScenarioHarness<'_> {
    fn recv(&mut self, port: Port) -> Result<i16, Interrupt> {
        if port != self.layout.input_port {
            return Err(Violation::IllegalPort { port, direction: Direction::Read }.into());
        }
        let value = *self.remaining_input().first().ok_or(Interrupt::Stuck)?;
        self.consumed += 1;
        Ok(value)
    }

    fn send(&mut self, port: Port, value: i16) -> Result<(), Interrupt> {
        if port != self.layout.output_port {
            return Err(Violation::IllegalPort { port, direction: Direction::Write }.into());
        }
        let expected = *self
            .remaining_output()
            .first()
            .ok_or(Violation::ExcessOutput { value })?;
        if expected != value {
            return Err(Violation::UnexpectedOutput { expected, actual: value }.into());
        }
        self.produced += 1;
        if self.remaining_output().is_empty() {
            return Err(Interrupt::Done);
        }
        Ok(())
    }

    fn report(&mut self, state: &Registers<i16>) -> Result<(), Interrupt> {
        let input = self.remaining_input();
        let output = self.remaining_output();
        if !self.encounters.insert((input.len(), output.len(), state.clone())) {
            return Err(Violation::Loop { pc: state.pc }.into());
        }
        self.collisions.record(input, state, output)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn regs(pc: usize, acc: i16) -> Registers<i16> {
        Registers { pc, acc, bak: 0 }
    }

    #[test]
    fn test_recv_consumes_the_scenario_input() {
        let layout = NodeLayout::default();
        let scenario = Scenario::new(vec![3, 4], vec![7]);
        let mut table = CollisionTable::new();
        let mut harness = ScenarioHarness::new(&scenario, &layout, &mut table);

        assert_eq!(harness.recv(Port::Up), Ok(3));
        assert_eq!(harness.recv(Port::Up), Ok(4));
        assert_eq!(harness.recv(Port::Up), Err(Interrupt::Stuck));
        assert_eq!(harness.consumed(), 2);
    }

    #[test]
    fn test_only_declared_ports_are_legal() {
        let layout = NodeLayout::default();
        let scenario = Scenario::new(vec![3], vec![3]);
        let mut table = CollisionTable::new();
        let mut harness = ScenarioHarness::new(&scenario, &layout, &mut table);

        assert_eq!(
            harness.recv(Port::Down),
            Err(Interrupt::Violation(Violation::IllegalPort { port: Port::Down, direction: Direction::Read }))
        );
        assert_eq!(
            harness.send(Port::Up, 3),
            Err(Interrupt::Violation(Violation::IllegalPort { port: Port::Up, direction: Direction::Write }))
        );
    }

    #[test]
    fn test_send_checks_order_and_signals_completion() {
        let layout = NodeLayout::default();
        let scenario = Scenario::new(vec![], vec![1, 2]);
        let mut table = CollisionTable::new();
        let mut harness = ScenarioHarness::new(&scenario, &layout, &mut table);

        assert_eq!(
            harness.send(Port::Down, 2),
            Err(Interrupt::Violation(Violation::UnexpectedOutput { expected: 1, actual: 2 }))
        );
        assert_eq!(harness.send(Port::Down, 1), Ok(()));
        assert_eq!(harness.send(Port::Down, 2), Err(Interrupt::Done));
        assert_eq!(harness.produced(), 2);
        assert_eq!(
            harness.send(Port::Down, 9),
            Err(Interrupt::Violation(Violation::ExcessOutput { value: 9 }))
        );
    }

    #[test]
    fn test_repeated_state_without_progress_is_a_loop() {
        let layout = NodeLayout::default();
        let scenario = Scenario::new(vec![5], vec![5]);
        let mut table = CollisionTable::new();
        let mut harness = ScenarioHarness::new(&scenario, &layout, &mut table);

        assert_eq!(harness.report(&regs(0, 0)), Ok(()));
        assert_eq!(harness.report(&regs(1, 0)), Ok(()));
        assert_eq!(
            harness.report(&regs(0, 0)),
            Err(Interrupt::Violation(Violation::Loop { pc: 0 }))
        );
    }

    #[test]
    fn test_same_state_after_progress_is_not_a_loop() {
        let layout = NodeLayout::default();
        let scenario = Scenario::new(vec![5, 6], vec![5]);
        let mut table = CollisionTable::new();
        let mut harness = ScenarioHarness::new(&scenario, &layout, &mut table);

        assert_eq!(harness.report(&regs(0, 0)), Ok(()));
        harness.recv(Port::Up).unwrap();
        assert_eq!(harness.report(&regs(0, 0)), Ok(()));
    }

    #[test]
    fn test_collision_table_across_scenarios() {
        let mut table = CollisionTable::new();
        let state = regs(2, 4);

        assert_eq!(table.record(&[1], &state, &[2, 1]), Ok(()));
        assert_eq!(table.record(&[1], &state, &[2, 1]), Ok(()));
        assert_eq!(table.record(&[7], &state, &[3]), Ok(()));
        assert_eq!(
            table.record(&[1], &state, &[3, 1]),
            Err(Violation::StateConflict { pc: 2 })
        );
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_same_state_with_less_output_left_is_not_a_conflict() {
        // A node cycling through one state while it emits a repeated value.
        let mut table = CollisionTable::new();
        let state = regs(0, 0);

        assert_eq!(table.record(&[], &state, &[1, 1]), Ok(()));
        assert_eq!(table.record(&[], &state, &[1]), Ok(()));
        assert_eq!(table.len(), 2);
    }
}
