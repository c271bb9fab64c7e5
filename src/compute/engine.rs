use crate::compute::bytecode::{Instruction, NodeLayout};
use crate::compute::kernel;
use crate::compute::port::Interaction;
use crate::compute::registers::Registers;
use crate::compute::signal::Interrupt;
use crate::compute::value::Arithmetic;
use crate::store::DecisionStore;

/// A single node executing a (possibly partially decided) program.
pub struct Engine<'a, A> {
    program: &'a DecisionStore,
    layout: &'a NodeLayout,
    arithmetic: A,
}

impl<'a, A: Arithmetic> Engine<'a, A> {
    pub fn new(program: &'a DecisionStore, layout: &'a NodeLayout, arithmetic: A) -> Self {
        Self { program, layout, arithmetic }
    }

    /// Runs the program from fresh registers until something interrupts it.
    ///
    /// There is no halt instruction: the program counter wraps after the last
    /// slot and the loop only ends through the interaction hooks, the
    /// arithmetic domain or a missing decision.
    pub fn run<I: Interaction<A::Value>>(&self, io: &mut I) -> Interrupt {
        let mut regs = Registers::new(self.arithmetic.zero());
        loop {
            if let Err(interrupt) = self.step(&mut regs, io) {
                return interrupt;
            }
        }
    }

    fn step<I: Interaction<A::Value>>(
        &self,
        regs: &mut Registers<A::Value>,
        io: &mut I,
    ) -> Result<(), Interrupt> {
        io.report(regs)?;
        let instruction = Instruction::decode(self.program, regs.pc)?;
        kernel::execute_instruction(instruction, regs, &self.arithmetic, io)?;
        regs.pc = (regs.pc + 1) % self.layout.slots;
        Ok(())
    }
}
