use serde::Serialize;
use thiserror::Error;

use super::types::Field;

/// User-input problems. All of them are recoverable: the caller shows the
/// message and keeps the check disabled until the input changes.
#[derive(Debug, Clone, Copy, PartialEq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum InputError {
    #[error("{field} must be a number")]
    NotANumber { field: Field },

    #[error("{field} must be between 0 and 100")]
    OutOfRange { field: Field },

    #[error("{field} must be 0 or greater")]
    Negative { field: Field },

    #[error("percentages must add up to 100 (currently {sum}%)")]
    SumMismatch { sum: f64 },

    #[error("total amount must be greater than 0")]
    ZeroOrNegativeTotal,

    #[error("amounts are too large to add up")]
    TotalTooLarge,

    #[error("a risk level must be selected")]
    RiskNotSelected,
}

impl InputError {
    pub fn field(&self) -> Option<Field> {
        match self {
            InputError::NotANumber { field }
            | InputError::OutOfRange { field }
            | InputError::Negative { field } => Some(*field),
            InputError::SumMismatch { .. }
            | InputError::ZeroOrNegativeTotal
            | InputError::TotalTooLarge
            | InputError::RiskNotSelected => None,
        }
    }
}
