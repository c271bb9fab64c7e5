//! Validation rule for the node layout.

use crate::compute::bytecode::NodeLayout;
use crate::validation::error::ValidationError;
use std::collections::HashSet;

/// Upper bound on instruction slots; the search tree grows exponentially with it.
pub(crate) const MAX_SLOTS: usize = 16;

/// Checks that the layout describes a machine the search can actually enumerate.
pub(crate) fn validate_layout(layout: &NodeLayout) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if layout.slots == 0 || layout.slots > MAX_SLOTS {
        errors.push(ValidationError::layout(format!(
            "slot count must be between 1 and {}, got {}",
            MAX_SLOTS, layout.slots
        )));
    }

    if layout.input_port == layout.output_port {
        errors.push(ValidationError::layout(format!(
            "input and output must use different ports, both are {}",
            layout.input_port
        )));
    }

    if layout.value_limit <= 0 {
        errors.push(ValidationError::layout(format!(
            "value limit must be positive, got {}",
            layout.value_limit
        )));
    }

    let mut seen = HashSet::new();
    for &constant in &layout.constants {
        if !seen.insert(constant) {
            errors.push(ValidationError::layout(format!("constant {} is listed twice", constant)));
        }
        if constant.unsigned_abs() > layout.value_limit.unsigned_abs() {
            errors.push(ValidationError::layout(format!(
                "constant {} is outside the value range ±{}",
                constant, layout.value_limit
            )));
        }
    }

    errors
}
