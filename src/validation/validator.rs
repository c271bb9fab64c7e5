//! Checks a search problem's layout and scenarios before the search starts.
use super::error::ValidationError;
use super::rules::{layout, scenarios};
use crate::solver::problem::SearchProblem;

/// Runs every rule against a search problem, collecting all errors before
/// the search is allowed to start.
pub struct Validator<'a> {
    problem: &'a SearchProblem,
}

impl<'a> Validator<'a> {
    pub fn new(problem: &'a SearchProblem) -> Self {
        Self { problem }
    }

    /// # Returns
    /// - `Ok(())` if no validation errors are found.
    /// - `Err(Vec<ValidationError>)` containing every error discovered.
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = layout::validate_layout(&self.problem.layout);
        errors.extend(scenarios::validate_scenarios(
            &self.problem.scenarios,
            self.problem.layout.value_limit,
        ));

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::problem::Scenario;

    #[test]
    fn test_builtin_problem_is_valid() {
        assert_eq!(Validator::new(&SearchProblem::swap_pairs()).validate(), Ok(()));
    }

    #[test]
    fn test_layout_and_scenario_errors_are_combined() {
        let mut problem = SearchProblem::swap_pairs();
        problem.layout.slots = 40;
        problem.scenarios.push(Scenario::new(vec![], vec![]));

        let errors = Validator::new(&problem).validate().unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[1].to_string(), "scenario 4: expected output is empty");
    }
}
