// ============================================================================
// Numeric Module
// Unsigned 256-bit fixed-point arithmetic for financial calculations
// ============================================================================
//
// This module provides:
// - Unsigned: fixed-point decimal with 18 decimal places stored in a U256
// - U256 / U512: fixed-width storage and wide intermediate integers
// - NumericError: Error types for arithmetic operations
//
// Layering (each builds on the one before):
// - unsigned: representation, comparison, add/sub/mul/div on two scaled values
// - mixed: the same operators with one plain (unscaled) integer operand
// - power: integer exponentiation by repeated multiplication
//
// Design principles:
// - No floating-point operations
// - All arithmetic returns Result (no panics, no wrapping, no sentinels)
// - Multiplication and division truncate toward zero
// - 512-bit intermediates wherever a product may exceed 256 bits

mod bigint;
mod errors;
mod mixed;
mod power;
mod unsigned;

pub use bigint::{U256, U512};
pub use errors::{NumericError, NumericResult};
pub use unsigned::{Unsigned, DECIMALS};
