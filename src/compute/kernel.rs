use crate::compute::bytecode::{Instruction, Source, Target};
use crate::compute::port::Interaction;
use crate::compute::registers::Registers;
use crate::compute::signal::Interrupt;
use crate::compute::value::Arithmetic;

/// Executes a single decoded instruction against the registers.
///
/// The program counter is left alone; advancing it is the engine's job.
pub fn execute_instruction<A, I>(
    instruction: Instruction,
    regs: &mut Registers<A::Value>,
    arithmetic: &A,
    io: &mut I,
) -> Result<(), Interrupt>
where
    A: Arithmetic,
    I: Interaction<A::Value>,
{
    let slot = regs.pc;
    match instruction {
        Instruction::Add(src) => {
            let value = read(src, slot, regs, arithmetic, io)?;
            regs.acc = arithmetic.add(&regs.acc, &value)?;
        }
        Instruction::Sub(src) => {
            let value = read(src, slot, regs, arithmetic, io)?;
            regs.acc = arithmetic.add(&regs.acc, &arithmetic.negate(&value))?;
        }
        Instruction::Mov(src, dst) => {
            let value = read(src, slot, regs, arithmetic, io)?;
            write(dst, value, regs, io)?;
        }
        Instruction::Neg => regs.acc = arithmetic.negate(&regs.acc),
        Instruction::Swp => std::mem::swap(&mut regs.acc, &mut regs.bak),
        Instruction::Sav => regs.bak = regs.acc.clone(),
        Instruction::Nop => {}
    }
    Ok(())
}

fn read<A, I>(
    src: Source,
    slot: usize,
    regs: &Registers<A::Value>,
    arithmetic: &A,
    io: &mut I,
) -> Result<A::Value, Interrupt>
where
    A: Arithmetic,
    I: Interaction<A::Value>,
{
    match src {
        Source::Acc => Ok(regs.acc.clone()),
        Source::Constant => arithmetic.symbol(slot),
        Source::Port(port) => io.recv(port),
    }
}

fn write<V, I>(dst: Target, value: V, regs: &mut Registers<V>, io: &mut I) -> Result<(), Interrupt>
where
    I: Interaction<V>,
{
    match dst {
        Target::Nil => Ok(()),
        Target::Acc => {
            regs.acc = value;
            Ok(())
        }
        Target::Port(port) => io.send(port, value),
    }
}
