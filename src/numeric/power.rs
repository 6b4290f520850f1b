// ============================================================================
// Power
// Integer exponentiation of a fixed-point value
// ============================================================================

use super::errors::NumericResult;
use super::unsigned::Unsigned;

impl Unsigned {
    /// Raise `self` to an integer power by repeated [`checked_mul`].
    ///
    /// `x^0` is one for every `x`, zero included. Each step truncates, so the
    /// result can sit slightly below the exact power for fractional bases.
    /// Cost is linear in `exponent`; exponents are expected to be small.
    ///
    /// # Errors
    /// Returns `Overflow` at the first partial product that leaves the range.
    ///
    /// [`checked_mul`]: Unsigned::checked_mul
    pub fn checked_pow(self, exponent: u64) -> NumericResult<Self> {
        let mut output = Self::ONE;
        for step in 0..exponent {
            output = output.checked_mul(self).inspect_err(|_| {
                tracing::trace!(base = %self, exponent, step, "fixed-point power overflowed");
            })?;
        }
        Ok(output)
    }
}
