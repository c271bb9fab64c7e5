//! tis-synth - searches for a node program that satisfies a set of
//! input/output scenarios.

use anyhow::Context;
use clap::Parser;
use serde::Serialize;
use std::path::PathBuf;
use tis_synth::analysis::ProgramProfile;
use tis_synth::display::{format_program, format_replay, program_lines};
use tis_synth::solver::{replay, SearchOutcome, SearchProblem, SearchStats, Synthesizer};
use tracing::{error, info, Level};

#[derive(Parser, Debug)]
#[command(name = "tis-synth")]
#[command(about = "Brute-force synthesis of single-node programs")]
struct Cli {
    /// JSON problem file; the built-in swap-pairs problem when omitted
    #[arg(long)]
    problem: Option<PathBuf>,

    /// Override the number of instruction slots
    #[arg(long)]
    slots: Option<usize>,

    /// Replay the found program on every scenario and print the traces
    #[arg(long)]
    trace: bool,

    /// Print a machine-readable report instead of the listing
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Serialize)]
struct Report<'a> {
    found: bool,
    program: Option<Vec<String>>,
    profile: Option<ProgramProfile>,
    stats: &'a SearchStats,
}

fn main() {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(true) => {}
        Ok(false) => std::process::exit(2),
        Err(e) => {
            error!("{:#}", e);
            std::process::exit(1);
        }
    }
}

/// Returns whether a program was found.
fn run(cli: &Cli) -> anyhow::Result<bool> {
    let mut problem = match &cli.problem {
        Some(path) => SearchProblem::from_path(path)
            .with_context(|| format!("loading problem from {}", path.display()))?,
        None => SearchProblem::swap_pairs(),
    };
    if let Some(slots) = cli.slots {
        problem.layout.slots = slots;
    }
    info!(
        slots = problem.layout.slots,
        scenarios = problem.scenarios.len(),
        "starting search"
    );

    let outcome = Synthesizer::new(&problem)?.search()?;
    let layout = &problem.layout;

    if cli.json {
        let report = Report {
            found: outcome.program().is_some(),
            program: outcome.program().map(|p| program_lines(p, layout)),
            profile: outcome.program().map(|p| ProgramProfile::analyze(p, layout)),
            stats: outcome.stats(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(report.found);
    }

    let stats = outcome.stats();
    match &outcome {
        SearchOutcome::Found { program, .. } => {
            print!("{}", format_program(program, layout));
            println!(
                "checked {} candidates, {} left on the stack",
                stats.candidates_checked, stats.remaining_stack
            );
            if cli.trace {
                for scenario in &problem.scenarios {
                    let run = replay(program, layout, &scenario.input, scenario.output.len())?;
                    println!();
                    print!("{}", format_replay(&run, scenario));
                }
            }
            Ok(true)
        }
        SearchOutcome::Exhausted { .. } => {
            println!(
                "no program found after checking {} candidates",
                stats.candidates_checked
            );
            Ok(false)
        }
    }
}
