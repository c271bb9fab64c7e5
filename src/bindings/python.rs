use crate::display::listing;
use crate::error::SearchError;
use crate::solver::{SearchOutcome, SearchProblem, Synthesizer};
use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;

#[pyfunction]
pub fn rust_core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Searches for a program satisfying `problem_json`, or the built-in
/// swap-pairs problem when omitted. Returns the listing, one line per slot,
/// or `None` when the search space is exhausted.
#[pyfunction]
#[pyo3(signature = (problem_json=None))]
pub fn synthesize(problem_json: Option<&str>) -> PyResult<Option<Vec<String>>> {
    let problem = match problem_json {
        Some(text) => SearchProblem::from_json(text).map_err(to_py_err)?,
        None => SearchProblem::swap_pairs(),
    };
    let outcome = Synthesizer::new(&problem)
        .and_then(|synth| synth.search())
        .map_err(to_py_err)?;
    Ok(match outcome {
        SearchOutcome::Found { program, .. } => Some(listing::program_lines(&program, &problem.layout)),
        SearchOutcome::Exhausted { .. } => None,
    })
}

fn to_py_err(err: SearchError) -> PyErr {
    match err {
        SearchError::InvalidProblem(_) | SearchError::Parse(_) | SearchError::Io(_) => {
            PyValueError::new_err(err.to_string())
        }
        SearchError::AlreadyBound(_) | SearchError::ChoiceMismatch { .. } => {
            PyRuntimeError::new_err(err.to_string())
        }
    }
}
