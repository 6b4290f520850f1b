// ============================================================================
// Fixed-Point Library
// Unsigned 256-bit fixed-point decimal arithmetic with checked operations
// ============================================================================

//! # Fixed Point
//!
//! Non-negative fixed-point decimals stored as 256-bit integers scaled by 10^18.
//!
//! ## Features
//!
//! - **Checked everything**: overflow, underflow and division by zero are
//!   reported as distinct [`NumericError`](numeric::NumericError) variants,
//!   never wrapped or clamped
//! - **Truncating** multiplication and division (round toward zero)
//! - **512-bit intermediates** so products and scaled numerators only fail when
//!   the final result is out of range
//! - **Mixed operations** combining a fixed-point value with a plain integer
//! - **Integer powers** by repeated multiplication
//!
//! ## Example
//!
//! ```rust
//! use fixed_point::prelude::*;
//!
//! // 1.5 * 3 = 4.5
//! let price: Unsigned = "1.5".parse().unwrap();
//! let total = price.checked_mul_unscaled(U256::from(3u64)).unwrap();
//! assert_eq!(total.to_string(), "4.500000000000000000");
//!
//! // 1 / 3 truncates
//! let third = Unsigned::ONE.checked_div("3".parse().unwrap()).unwrap();
//! assert_eq!(third.to_string(), "0.333333333333333333");
//!
//! // Failures are values, not panics
//! let err = Unsigned::ONE.checked_sub("2".parse().unwrap()).unwrap_err();
//! assert_eq!(err, NumericError::Underflow);
//! ```

pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::numeric::{NumericError, NumericResult, Unsigned, DECIMALS, U256};
}
