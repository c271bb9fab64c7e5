//! Static checks on a search problem.
//!
//! These run once, before the first candidate is popped, so that a malformed
//! problem is reported as such instead of as an exhausted search.

pub use self::error::{ValidationError, ValidationErrorType};
pub use self::validator::Validator;

mod error;
mod validator;
mod rules {
    pub mod layout;
    pub mod scenarios;
}
