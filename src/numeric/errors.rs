// ============================================================================
// Numeric Errors
// Error types for fixed-point arithmetic operations
// ============================================================================

use std::fmt;

/// Errors that can occur during fixed-point arithmetic operations.
///
/// Each variant maps to exactly one failure condition so callers can tell a
/// legitimate division by zero apart from a range fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Raw result exceeded 2^256 - 1
    Overflow,
    /// Subtrahend larger than minuend (no negative values)
    Underflow,
    /// Attempted division by zero
    DivisionByZero,
    /// Unscaled operand of a mixed operation cannot itself be scaled
    InvalidOperand,
    /// Input string or value is invalid
    InvalidInput,
    /// Conversion would lose significant digits
    PrecisionLoss,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::Overflow => {
                write!(f, "arithmetic overflow: result exceeded maximum value")
            },
            NumericError::Underflow => {
                write!(f, "arithmetic underflow: result below zero")
            },
            NumericError::DivisionByZero => write!(f, "division by zero"),
            NumericError::InvalidOperand => write!(
                f,
                "invalid operand: unscaled value too large to be represented as fixed-point"
            ),
            NumericError::InvalidInput => write!(f, "invalid input: could not parse value"),
            NumericError::PrecisionLoss => write!(
                f,
                "precision loss: conversion would lose significant digits"
            ),
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            NumericError::Overflow.to_string(),
            "arithmetic overflow: result exceeded maximum value"
        );
        assert_eq!(
            NumericError::Underflow.to_string(),
            "arithmetic underflow: result below zero"
        );
        assert_eq!(NumericError::DivisionByZero.to_string(), "division by zero");
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(NumericError::Overflow, NumericError::Overflow);
        assert_ne!(NumericError::Overflow, NumericError::InvalidOperand);
    }

    #[test]
    fn test_error_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(NumericError::InvalidOperand);
        assert!(err.to_string().starts_with("invalid operand"));
    }
}
