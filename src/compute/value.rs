//! Arithmetic domains the emulator can run over.
//!
//! The instruction kernel never touches numbers directly; it asks an
//! `Arithmetic` implementation for every value it needs. `Bounded` executes
//! real scenarios, `Symbolic` executes a program with placeholders so it can
//! be inspected before any scenario data is involved.
use crate::compute::signal::{Interrupt, Violation};
use crate::error::SearchError;
use crate::store::{Choice, DecisionPoint, DecisionStore};
use std::collections::BTreeMap;
use std::fmt;
use std::hash::Hash;

pub trait Arithmetic {
    type Value: Clone + Eq + Hash + fmt::Debug;

    fn zero(&self) -> Self::Value;

    fn add(&self, lhs: &Self::Value, rhs: &Self::Value) -> Result<Self::Value, Interrupt>;

    fn negate(&self, value: &Self::Value) -> Self::Value;

    /// The literal operand of the instruction in `slot`.
    fn symbol(&self, slot: usize) -> Result<Self::Value, Interrupt>;
}

/// Concrete integers confined to `-limit..=limit`.
///
/// Literal operands are looked up in the program being run, so an unbound
/// literal surfaces as a missing decision like any other instruction field.
#[derive(Debug, Clone, Copy)]
pub struct Bounded<'a> {
    program: &'a DecisionStore,
    limit: i16,
}

impl<'a> Bounded<'a> {
    pub fn new(program: &'a DecisionStore, limit: i16) -> Self {
        Self { program, limit }
    }
}

impl Arithmetic for Bounded<'_> {
    type Value = i16;

    fn zero(&self) -> i16 {
        0
    }

    fn add(&self, lhs: &i16, rhs: &i16) -> Result<i16, Interrupt> {
        let value = i32::from(*lhs) + i32::from(*rhs);
        if value.abs() > i32::from(self.limit) {
            return Err(Violation::Overflow { value, limit: self.limit }.into());
        }
        // In range, so the narrowing is exact.
        Ok(value as i16)
    }

    fn negate(&self, value: &i16) -> i16 {
        -*value
    }

    fn symbol(&self, slot: usize) -> Result<i16, Interrupt> {
        let point = DecisionPoint::constant(slot);
        match self.program.load(point)? {
            Choice::Constant(value) => Ok(value),
            choice => Err(SearchError::ChoiceMismatch { point, choice }.into()),
        }
    }
}

/// An opaque quantity a symbolic term is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Atom {
    /// The n-th value received, counting from zero.
    Input(usize),
    /// The literal operand of a slot.
    Constant(usize),
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Atom::Input(n) => write!(f, "in{}", n),
            Atom::Constant(slot) => write!(f, "k{}", slot),
        }
    }
}

/// A linear combination of atoms with integer coefficients.
///
/// Terms are kept normalised (no zero coefficients, atoms ordered), so two
/// terms are equal exactly when they denote the same linear function.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Term {
    coefficients: BTreeMap<Atom, i64>,
}

impl Term {
    pub fn zero() -> Self {
        Self::default()
    }

    pub fn atom(atom: Atom) -> Self {
        let mut coefficients = BTreeMap::new();
        coefficients.insert(atom, 1);
        Self { coefficients }
    }

    pub fn is_zero(&self) -> bool {
        self.coefficients.is_empty()
    }

    pub fn coefficient(&self, atom: Atom) -> i64 {
        self.coefficients.get(&atom).copied().unwrap_or(0)
    }

    pub fn plus(&self, other: &Term) -> Term {
        let mut coefficients = self.coefficients.clone();
        for (&atom, &k) in &other.coefficients {
            let entry = coefficients.entry(atom).or_insert(0);
            *entry += k;
            if *entry == 0 {
                coefficients.remove(&atom);
            }
        }
        Term { coefficients }
    }

    pub fn negated(&self) -> Term {
        Term {
            coefficients: self.coefficients.iter().map(|(&a, &k)| (a, -k)).collect(),
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return f.write_str("0");
        }
        for (i, (atom, &k)) in self.coefficients.iter().enumerate() {
            let sign = if k < 0 { "-" } else { "+" };
            match (i, k.abs()) {
                (0, 1) if k < 0 => write!(f, "-{}", atom)?,
                (0, 1) => write!(f, "{}", atom)?,
                (0, m) => write!(f, "{}{}*{}", if k < 0 { "-" } else { "" }, m, atom)?,
                (_, 1) => write!(f, " {} {}", sign, atom)?,
                (_, m) => write!(f, " {} {}*{}", sign, m, atom)?,
            }
        }
        Ok(())
    }
}

/// Unbounded symbolic arithmetic. Never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct Symbolic;

impl Arithmetic for Symbolic {
    type Value = Term;

    fn zero(&self) -> Term {
        Term::zero()
    }

    fn add(&self, lhs: &Term, rhs: &Term) -> Result<Term, Interrupt> {
        Ok(lhs.plus(rhs))
    }

    fn negate(&self, value: &Term) -> Term {
        value.negated()
    }

    fn symbol(&self, slot: usize) -> Result<Term, Interrupt> {
        Ok(Term::atom(Atom::Constant(slot)))
    }
}
