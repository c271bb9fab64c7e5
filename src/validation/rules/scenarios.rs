//! Validation rule for the scenario list.

use crate::solver::problem::Scenario;
use crate::validation::error::{ValidationError, ValidationErrorType};

/// Every scenario must expect some output, and every value must be one the
/// node can hold.
///
/// A scenario with no expected output could only be satisfied by a program
/// that never sends, which the harness has no way to observe as complete.
pub(crate) fn validate_scenarios(scenarios: &[Scenario], value_limit: i16) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if scenarios.is_empty() {
        errors.push(ValidationError {
            scenario: None,
            error_type: ValidationErrorType::Scenario,
            message: "at least one scenario is required".to_string(),
        });
    }

    for (index, scenario) in scenarios.iter().enumerate() {
        if scenario.output.is_empty() {
            errors.push(ValidationError::scenario(index, "expected output is empty".to_string()));
        }

        let out_of_range: Vec<i16> = scenario
            .input
            .iter()
            .chain(&scenario.output)
            .copied()
            .filter(|v| v.unsigned_abs() > value_limit.unsigned_abs())
            .collect();
        if !out_of_range.is_empty() {
            errors.push(ValidationError::scenario(
                index,
                format!("values {:?} are outside the value range ±{}", out_of_range, value_limit),
            ));
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_list_is_rejected() {
        let errors = validate_scenarios(&[], 999);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].scenario, None);
    }

    #[test]
    fn test_reports_the_offending_scenario() {
        let scenarios = vec![
            Scenario::new(vec![1], vec![1]),
            Scenario::new(vec![1], vec![]),
            Scenario::new(vec![1000], vec![-1000]),
        ];
        let errors = validate_scenarios(&scenarios, 999);
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].scenario, Some(1));
        assert_eq!(errors[1].scenario, Some(2));
        assert!(errors.iter().all(|e| e.error_type == ValidationErrorType::Scenario));
        assert!(errors[1].message.contains("[1000, -1000]"));
    }
}
