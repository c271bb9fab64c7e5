//! Defines the error types for the validation module.
use std::fmt;

/// The specific category of a validation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorType {
    /// The node layout cannot describe a usable machine.
    Layout,
    /// A scenario cannot be satisfied by any program, or there are none.
    Scenario,
}

/// A structured report from the problem validator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Index of the offending scenario, if the error concerns one.
    pub scenario: Option<usize>,
    pub error_type: ValidationErrorType,
    pub message: String,
}

impl ValidationError {
    pub fn layout(message: String) -> Self {
        Self { scenario: None, error_type: ValidationErrorType::Layout, message }
    }

    pub fn scenario(index: usize, message: String) -> Self {
        Self { scenario: Some(index), error_type: ValidationErrorType::Scenario, message }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.scenario {
            Some(index) => write!(f, "scenario {}: {}", index, self.message),
            None => f.write_str(&self.message),
        }
    }
}
