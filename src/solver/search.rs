//! Depth-first synthesis over lazily expanded decision stores.
use crate::analysis::redundancy;
use crate::compute::engine::Engine;
use crate::compute::signal::{Interrupt, Violation};
use crate::compute::value::Bounded;
use crate::error::SearchError;
use crate::solver::harness::{CollisionTable, ScenarioHarness};
use crate::solver::problem::SearchProblem;
use crate::store::{DecisionPoint, DecisionStore};
use crate::validation::Validator;
use serde::Serialize;
use tracing::{debug, info, trace, warn};

/// Why a candidate was thrown away.
#[derive(Debug, Clone, PartialEq)]
pub enum Rejection {
    Redundant { slot: usize },
    Violation(Violation),
    Stuck,
}

/// What to do with one candidate after evaluating it.
#[derive(Debug, Clone, PartialEq)]
pub enum Verdict {
    /// Every scenario completed.
    Accept,
    /// Not rejected, but the program needs this decision made first.
    Branch(DecisionPoint),
    Reject(Rejection),
    /// Neither accepted, rejected nor missing a decision.
    Anomaly,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    pub candidates_checked: usize,
    pub branches: usize,
    pub rejected_redundant: usize,
    pub rejected_violation: usize,
    pub rejected_stuck: usize,
    pub anomalies: usize,
    /// Emulator runs against a concrete scenario, across all candidates.
    pub scenario_runs: usize,
    /// Candidates still waiting on the stack when the search stopped.
    pub remaining_stack: usize,
}

impl SearchStats {
    fn record(&mut self, rejection: &Rejection) {
        match rejection {
            Rejection::Redundant { .. } => self.rejected_redundant += 1,
            Rejection::Violation(_) => self.rejected_violation += 1,
            Rejection::Stuck => self.rejected_stuck += 1,
        }
    }
}

#[derive(Debug, Clone)]
pub enum SearchOutcome {
    Found { program: DecisionStore, stats: SearchStats },
    /// Every branch was pruned; no program satisfies the scenarios.
    Exhausted { stats: SearchStats },
}

impl SearchOutcome {
    pub fn program(&self) -> Option<&DecisionStore> {
        match self {
            SearchOutcome::Found { program, .. } => Some(program),
            SearchOutcome::Exhausted { .. } => None,
        }
    }

    pub fn stats(&self) -> &SearchStats {
        match self {
            SearchOutcome::Found { stats, .. } | SearchOutcome::Exhausted { stats } => stats,
        }
    }
}

pub struct Synthesizer<'a> {
    problem: &'a SearchProblem,
}

impl<'a> Synthesizer<'a> {
    /// Validates the problem up front; an invalid problem never starts a search.
    pub fn new(problem: &'a SearchProblem) -> Result<Self, SearchError> {
        Validator::new(problem)
            .validate()
            .map_err(SearchError::InvalidProblem)?;
        Ok(Self { problem })
    }

    /// Explores candidates depth first, last option first, until one is
    /// accepted or the stack is empty.
    pub fn search(&self) -> Result<SearchOutcome, SearchError> {
        let layout = &self.problem.layout;
        let mut stack = vec![DecisionStore::new()];
        let mut stats = SearchStats::default();

        while let Some(candidate) = stack.pop() {
            stats.candidates_checked += 1;
            match self.evaluate(&candidate, &mut stats)? {
                Verdict::Accept => {
                    stats.remaining_stack = stack.len();
                    info!(
                        checked = stats.candidates_checked,
                        remaining = stats.remaining_stack,
                        "found a program satisfying every scenario"
                    );
                    return Ok(SearchOutcome::Found { program: candidate, stats });
                }
                Verdict::Branch(point) => {
                    let children = candidate.branch(point, layout)?;
                    debug!(%point, options = children.len(), depth = candidate.len(), "branching");
                    stats.branches += 1;
                    stack.extend(children);
                }
                Verdict::Reject(rejection) => {
                    trace!(?rejection, depth = candidate.len(), "candidate rejected");
                    stats.record(&rejection);
                }
                Verdict::Anomaly => {
                    warn!(bindings = ?candidate.bindings(), "candidate neither completed nor asked for a decision");
                    stats.anomalies += 1;
                }
            }
        }

        info!(checked = stats.candidates_checked, "search space exhausted");
        Ok(SearchOutcome::Exhausted { stats })
    }

    /// Screens a candidate symbolically, then runs it against every scenario
    /// in order, stopping at the first disqualifying outcome. The branch
    /// point is the first missing decision a scenario run reaches.
    pub fn evaluate(&self, candidate: &DecisionStore, stats: &mut SearchStats) -> Result<Verdict, SearchError> {
        let layout = &self.problem.layout;
        let mut branch_point = None;

        // The screen only prunes; branching follows what execution reaches.
        match redundancy::screen(candidate, layout) {
            Interrupt::Done | Interrupt::MissingDecision(_) => {}
            other => return Self::disqualify(other),
        }

        let mut collisions = CollisionTable::new();
        let mut completed = 0;
        for scenario in &self.problem.scenarios {
            stats.scenario_runs += 1;
            let mut harness = ScenarioHarness::new(scenario, layout, &mut collisions);
            let engine = Engine::new(candidate, layout, Bounded::new(candidate, layout.value_limit));
            match engine.run(&mut harness) {
                Interrupt::Done => completed += 1,
                Interrupt::MissingDecision(point) => {
                    branch_point.get_or_insert(point);
                }
                other => return Self::disqualify(other),
            }
        }

        if completed == self.problem.scenarios.len() {
            return Ok(Verdict::Accept);
        }
        Ok(branch_point.map_or(Verdict::Anomaly, Verdict::Branch))
    }

    fn disqualify(interrupt: Interrupt) -> Result<Verdict, SearchError> {
        let rejection = match interrupt {
            Interrupt::Redundancy { slot } => Rejection::Redundant { slot },
            Interrupt::Violation(violation) => Rejection::Violation(violation),
            Interrupt::Stuck => Rejection::Stuck,
            Interrupt::Fault(err) => return Err(err),
            Interrupt::Done | Interrupt::MissingDecision(_) => return Ok(Verdict::Anomaly),
        };
        Ok(Verdict::Reject(rejection))
    }
}
