use std::fmt;

/// The complete visible state of a node: program counter, accumulator and
/// backup register.
///
/// The type doubles as the "reported state" key used for loop detection and
/// collision tracking, so it is hashable whenever the value domain is.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Registers<V> {
    pub pc: usize,
    pub acc: V,
    pub bak: V,
}

impl<V: Clone> Registers<V> {
    pub fn new(zero: V) -> Self {
        Self {
            pc: 0,
            acc: zero.clone(),
            bak: zero,
        }
    }
}

impl<V: fmt::Display> fmt::Display for Registers<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "pc={} acc={} bak={}", self.pc, self.acc, self.bak)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_registers_start_at_slot_zero() {
        let regs = Registers::new(0i16);
        assert_eq!(regs.pc, 0);
        assert_eq!(regs.acc, 0);
        assert_eq!(regs.bak, 0);
        assert_eq!(regs.to_string(), "pc=0 acc=0 bak=0");
    }
}
