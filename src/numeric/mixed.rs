// ============================================================================
// Mixed Arithmetic
// Operations combining a fixed-point value with a plain unscaled integer
// ============================================================================
//
// The unscaled operand carries no implicit 10^18. Operations that need it in
// scaled form first check that it can be scaled at all and report
// `InvalidOperand` when it cannot, before any arithmetic takes place.
// Multiplication and division by an unscaled integer keep the scale intact and
// skip that conversion, which gives them far more headroom.

use super::bigint::{narrow, widen, U256};
use super::errors::{NumericError, NumericResult};
use super::unsigned::Unsigned;
use std::cmp::Ordering;

impl Unsigned {
    /// Scale a plain operand, mapping a scaling overflow to `InvalidOperand`.
    #[inline]
    fn scale_operand(value: U256) -> NumericResult<Self> {
        Self::from_unscaled(value).map_err(|_| NumericError::InvalidOperand)
    }

    /// Exact ordering of `self` against an unscaled integer.
    #[inline]
    fn cmp_unscaled(self, value: U256) -> Ordering {
        // value * SCALE fits comfortably in 512 bits even when it overflows 256
        widen(self.raw_value()).cmp(&(widen(value) * widen(Self::SCALE)))
    }

    // ========================================================================
    // Comparison
    // ========================================================================

    /// `self > b` where `b` is unscaled.
    pub fn is_greater_than_unscaled(self, b: U256) -> bool {
        self.cmp_unscaled(b) == Ordering::Greater
    }

    /// `self >= b` where `b` is unscaled.
    pub fn is_greater_than_or_equal_unscaled(self, b: U256) -> bool {
        self.cmp_unscaled(b) != Ordering::Less
    }

    /// `self < b` where `b` is unscaled.
    pub fn is_less_than_unscaled(self, b: U256) -> bool {
        self.cmp_unscaled(b) == Ordering::Less
    }

    /// `self <= b` where `b` is unscaled.
    pub fn is_less_than_or_equal_unscaled(self, b: U256) -> bool {
        self.cmp_unscaled(b) != Ordering::Greater
    }

    /// `self == b` where `b` is unscaled.
    pub fn is_equal_unscaled(self, b: U256) -> bool {
        self.cmp_unscaled(b) == Ordering::Equal
    }

    /// `a > b` where `a` is unscaled.
    pub fn unscaled_is_greater_than(a: U256, b: Self) -> bool {
        b.is_less_than_unscaled(a)
    }

    /// `a >= b` where `a` is unscaled.
    pub fn unscaled_is_greater_than_or_equal(a: U256, b: Self) -> bool {
        b.is_less_than_or_equal_unscaled(a)
    }

    /// `a < b` where `a` is unscaled.
    pub fn unscaled_is_less_than(a: U256, b: Self) -> bool {
        b.is_greater_than_unscaled(a)
    }

    /// `a <= b` where `a` is unscaled.
    pub fn unscaled_is_less_than_or_equal(a: U256, b: Self) -> bool {
        b.is_greater_than_or_equal_unscaled(a)
    }

    // ========================================================================
    // Addition / Subtraction
    // ========================================================================

    /// `self + b` where `b` is unscaled.
    ///
    /// # Errors
    /// - `InvalidOperand` if `b` cannot be scaled
    /// - `Overflow` if the sum exceeds the maximum
    pub fn checked_add_unscaled(self, b: U256) -> NumericResult<Self> {
        self.checked_add(Self::scale_operand(b)?)
    }

    /// `self - b` where `b` is unscaled.
    ///
    /// # Errors
    /// - `InvalidOperand` if `b` cannot be scaled
    /// - `Underflow` if `b > self`
    pub fn checked_sub_unscaled(self, b: U256) -> NumericResult<Self> {
        self.checked_sub(Self::scale_operand(b)?)
    }

    /// `a - b` where `a` is unscaled.
    ///
    /// # Errors
    /// - `InvalidOperand` if `a` cannot be scaled
    /// - `Underflow` if `b > a`
    pub fn checked_unscaled_sub(a: U256, b: Self) -> NumericResult<Self> {
        Self::scale_operand(a)?.checked_sub(b)
    }

    // ========================================================================
    // Multiplication / Division
    // ========================================================================

    /// `self × b` where `b` is unscaled.
    ///
    /// The scale is preserved exactly, so no division (and no rounding) is
    /// involved. Accepts multipliers far beyond what `from_unscaled` could
    /// represent, e.g. `0.1 × 10^60`.
    ///
    /// # Errors
    /// Returns `Overflow` if the raw product exceeds 2^256 - 1.
    pub fn checked_mul_unscaled(self, b: U256) -> NumericResult<Self> {
        let product = widen(self.raw_value()) * widen(b);

        narrow(product).map(Self::from_raw).ok_or_else(|| {
            tracing::trace!(lhs = %self, rhs = %b, "fixed-point mixed multiplication overflowed");
            NumericError::Overflow
        })
    }

    /// `self / b` where `b` is unscaled, truncating toward zero.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if `b` is zero.
    pub fn checked_div_unscaled(self, b: U256) -> NumericResult<Self> {
        if b.is_zero() {
            return Err(NumericError::DivisionByZero);
        }
        Ok(Self::from_raw(self.raw_value() / b))
    }

    /// `a / b` where `a` is unscaled, truncating toward zero.
    ///
    /// # Errors
    /// - `InvalidOperand` if `a` cannot be scaled
    /// - `DivisionByZero` if `b` is zero
    /// - `Overflow` if the quotient exceeds the maximum
    pub fn checked_unscaled_div(a: U256, b: Self) -> NumericResult<Self> {
        Self::scale_operand(a)?.checked_div(b)
    }
}
