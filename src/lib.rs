// Crate root: the synthesis core, plus the optional `_core` Python module.
// The module is only compiled with the `python` feature so that the native
// test suite and the CLI link without libpython.

pub mod analysis;
pub mod compute;
pub mod display;
pub mod error;
pub mod solver;
pub mod store;
pub mod validation;

pub use error::SearchError;
pub use solver::{SearchOutcome, SearchProblem, Synthesizer};

#[cfg(feature = "python")]
mod bindings {
    pub mod python;
}

#[cfg(feature = "python")]
use pyo3::prelude::*;

/// Defines the `_core` Python module.
#[cfg(feature = "python")]
#[pymodule]
fn _core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(bindings::python::synthesize, m)?)?;
    m.add_function(wrap_pyfunction!(bindings::python::rust_core_version, m)?)?;
    Ok(())
}
