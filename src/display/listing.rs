//! Text rendering of a (possibly partial) program.
use crate::compute::bytecode::{NodeLayout, Source};
use crate::store::{Choice, DecisionPoint, DecisionStore};

const UNBOUND_OPCODE: &str = "???";
const UNBOUND_OPERAND: &str = "?";

/// One line per slot, e.g. `"0: MOV UP ACC"` or `"2: ADD 1"`.
pub fn program_lines(program: &DecisionStore, layout: &NodeLayout) -> Vec<String> {
    (0..layout.slots).map(|slot| slot_line(program, slot)).collect()
}

pub fn format_program(program: &DecisionStore, layout: &NodeLayout) -> String {
    let mut text = program_lines(program, layout).join("\n");
    text.push('\n');
    text
}

fn slot_line(program: &DecisionStore, slot: usize) -> String {
    let op = match program.get(DecisionPoint::opcode(slot)) {
        Some(Choice::Opcode(op)) => op,
        _ => return format!("{}: {}", slot, UNBOUND_OPCODE),
    };
    let mut line = format!("{}: {}", slot, op);
    if op.reads_source() {
        line.push(' ');
        line.push_str(&source_text(program, slot));
    }
    if op.writes_target() {
        line.push(' ');
        line.push_str(&target_text(program, slot));
    }
    line
}

fn source_text(program: &DecisionStore, slot: usize) -> String {
    match program.get(DecisionPoint::source(slot)) {
        Some(Choice::Source(Source::Acc)) => "ACC".to_string(),
        Some(Choice::Source(Source::Port(port))) => port.to_string(),
        Some(Choice::Source(Source::Constant)) => match program.get(DecisionPoint::constant(slot)) {
            Some(Choice::Constant(value)) => value.to_string(),
            _ => UNBOUND_OPERAND.to_string(),
        },
        _ => UNBOUND_OPERAND.to_string(),
    }
}

fn target_text(program: &DecisionStore, slot: usize) -> String {
    match program.get(DecisionPoint::target(slot)) {
        Some(Choice::Target(target)) => target.to_string(),
        _ => UNBOUND_OPERAND.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compute::bytecode::{OpCode, Target};
    use crate::compute::port::Port;

    fn bind(store: DecisionStore, point: DecisionPoint, choice: Choice) -> DecisionStore {
        store.bind(point, choice).unwrap()
    }

    #[test]
    fn test_fully_decided_program() {
        let layout = NodeLayout::default();
        let store = bind(DecisionStore::new(), DecisionPoint::opcode(0), Choice::Opcode(OpCode::Mov));
        let store = bind(store, DecisionPoint::source(0), Choice::Source(Source::Port(Port::Up)));
        let store = bind(store, DecisionPoint::target(0), Choice::Target(Target::Acc));
        let store = bind(store, DecisionPoint::opcode(1), Choice::Opcode(OpCode::Add));
        let store = bind(store, DecisionPoint::source(1), Choice::Source(Source::Constant));
        let store = bind(store, DecisionPoint::constant(1), Choice::Constant(-1));
        let store = bind(store, DecisionPoint::opcode(2), Choice::Opcode(OpCode::Swp));

        assert_eq!(
            program_lines(&store, &layout),
            vec!["0: MOV UP ACC", "1: ADD -1", "2: SWP"]
        );
        assert_eq!(format_program(&store, &layout), "0: MOV UP ACC\n1: ADD -1\n2: SWP\n");
    }

    #[test]
    fn test_placeholders_for_undecided_fields() {
        let layout = NodeLayout::default();
        let store = bind(DecisionStore::new(), DecisionPoint::opcode(0), Choice::Opcode(OpCode::Mov));
        let store = bind(store, DecisionPoint::target(0), Choice::Target(Target::Nil));
        let store = bind(store, DecisionPoint::opcode(1), Choice::Opcode(OpCode::Sub));
        let store = bind(store, DecisionPoint::source(1), Choice::Source(Source::Constant));

        assert_eq!(program_lines(&store, &layout), vec!["0: MOV ? NIL", "1: SUB ?", "2: ???"]);
    }
}
