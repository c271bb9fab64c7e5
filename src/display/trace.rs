use crate::solver::problem::Scenario;
use crate::solver::replay::Replay;
use std::fmt::Write;

/// Renders a recorded run next to what the scenario expected.
pub fn format_replay(replay: &Replay, scenario: &Scenario) -> String {
    let mut output = String::new();
    let _ = writeln!(output, "TRACE for input {:?}:", scenario.input);
    let _ = writeln!(output, "--------------------------------------------------");

    for (step, state) in replay.trace.iter().enumerate() {
        let _ = writeln!(output, "{: >4}  {}", step, state);
    }

    let _ = writeln!(output, "--------------------------------------------------");
    let _ = writeln!(output, "stop:     {}", replay.stop);
    let _ = writeln!(output, "output:   {:?}", replay.outputs);
    let _ = writeln!(output, "expected: {:?}", scenario.output);
    let verdict = if replay.outputs == scenario.output { "MATCH" } else { "MISMATCH" };
    let _ = writeln!(output, "`-- {}", verdict);
    output
}
