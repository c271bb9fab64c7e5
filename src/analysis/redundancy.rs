//! Symbolic screening of a candidate before any scenario runs.
//!
//! The candidate is executed once around the whole program with symbolic
//! values: every receive yields a fresh input atom and every literal stays a
//! placeholder, so no scenario data and no literal decisions are needed.
//! What the pass can still observe is everything that does not depend on
//! concrete values: redundant instructions, illegal port use, and which
//! structural decision the program needs next.
use crate::compute::bytecode::NodeLayout;
use crate::compute::engine::Engine;
use crate::compute::port::{Direction, Interaction, Port};
use crate::compute::registers::Registers;
use crate::compute::signal::{Interrupt, Violation};
use crate::compute::value::{Atom, Symbolic, Term};
use crate::store::DecisionStore;

/// Interaction that accepts anything on the declared ports and stops after
/// a fixed number of instructions.
pub struct Probe<'a> {
    layout: &'a NodeLayout,
    budget: usize,
    steps: usize,
    received: usize,
    sent: Vec<Term>,
}

impl<'a> Probe<'a> {
    pub fn new(layout: &'a NodeLayout, budget: usize) -> Self {
        Self { layout, budget, steps: 0, received: 0, sent: Vec::new() }
    }

    pub fn sent(&self) -> &[Term] {
        &self.sent
    }
}

impl Interaction<Term> for Probe<'_> {
    fn recv(&mut self, port: Port) -> Result<Term, Interrupt> {
        if port != self.layout.input_port {
            return Err(Violation::IllegalPort { port, direction: Direction::Read }.into());
        }
        let term = Term::atom(Atom::Input(self.received));
        self.received += 1;
        Ok(term)
    }

    fn send(&mut self, port: Port, value: Term) -> Result<(), Interrupt> {
        if port != self.layout.output_port {
            return Err(Violation::IllegalPort { port, direction: Direction::Write }.into());
        }
        self.sent.push(value);
        Ok(())
    }

    fn report(&mut self, _state: &Registers<Term>) -> Result<(), Interrupt> {
        if self.steps == self.budget {
            return Err(Interrupt::Done);
        }
        self.steps += 1;
        Ok(())
    }
}

/// Runs one symbolic pass over every slot of `program`.
///
/// `Done` means the pass found nothing to object to; any other interrupt is
/// what the pass stopped on.
pub fn screen(program: &DecisionStore, layout: &NodeLayout) -> Interrupt {
    let mut probe = Probe::new(layout, layout.slots);
    Engine::new(program, layout, Symbolic).run(&mut probe)
}
