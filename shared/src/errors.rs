//! Error types for the nutrition calculator

use thiserror::Error;

/// Failures raised by the calculator
///
/// Only invalid biometric input for BMI is an error; unrecognized enum
/// values are absorbed by documented defaults and never surface here.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalculationError {
    #[error("Invalid input for {field}: {message}")]
    InvalidInput {
        field: &'static str,
        message: String,
    },

    #[error("Profile does not resolve to a calorie estimate")]
    UnresolvedProfile,
}

impl CalculationError {
    pub(crate) fn invalid(field: &'static str, message: impl Into<String>) -> Self {
        CalculationError::InvalidInput {
            field,
            message: message.into(),
        }
    }

    /// Field name for input errors
    pub fn field(&self) -> Option<&'static str> {
        match self {
            CalculationError::InvalidInput { field, .. } => Some(field),
            CalculationError::UnresolvedProfile => None,
        }
    }
}
