// ============================================================================
// Unsigned Fixed-Point Decimal
// Non-negative fixed-point arithmetic on 256-bit integers with 18 decimals
// ============================================================================

use super::bigint::{narrow, to_u128, widen, U256, U512};
use super::errors::{NumericError, NumericResult};
use std::fmt;

/// Number of decimal places carried by every [`Unsigned`].
pub const DECIMALS: u32 = 18;

const SCALE_U64: u64 = 1_000_000_000_000_000_000;

/// Non-negative fixed-point decimal number.
///
/// Internally stores `value × 10^18` as a `U256`, so the represented number is
/// `raw / SCALE`. Every operation that would leave `[0, 2^256 - 1]` fails with a
/// [`NumericError`] instead of wrapping.
///
/// # Value Range
/// - Minimum: 0
/// - Maximum: (2^256 - 1) / 10^18 ≈ 1.157 × 10^59
/// - Precision: 0.000000000000000001 (one wei)
///
/// # Rounding
/// Multiplication and division truncate toward zero.
///
/// # Example
/// ```
/// use fixed_point::numeric::Unsigned;
///
/// let price: Unsigned = "150.3".parse().unwrap();
/// let qty = Unsigned::from_unscaled_u64(3).unwrap();
/// let each = price.checked_div(qty).unwrap();
/// assert_eq!(each.to_string(), "50.100000000000000000");
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Unsigned(U256);

impl Unsigned {
    /// The scale factor (10^18)
    pub const SCALE: U256 = U256([SCALE_U64, 0, 0, 0]);

    const SCALE_WIDE: U512 = widen(Self::SCALE);

    /// Zero value
    pub const ZERO: Self = Self(U256([0, 0, 0, 0]));

    /// One (1.0)
    pub const ONE: Self = Self(Self::SCALE);

    /// Maximum representable value
    pub const MAX: Self = Self(U256([u64::MAX; 4]));

    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from raw internal representation.
    ///
    /// Use this when the value is already scaled (e.g., read back from storage).
    #[inline]
    pub const fn from_raw(raw: U256) -> Self {
        Self(raw)
    }

    /// Create from an unscaled integer, computing `value × SCALE`.
    ///
    /// # Errors
    /// Returns `Overflow` if `value > (2^256 - 1) / SCALE`.
    #[inline]
    pub fn from_unscaled(value: U256) -> NumericResult<Self> {
        value
            .checked_mul(Self::SCALE)
            .map(Self)
            .ok_or(NumericError::Overflow)
    }

    /// Create from an unscaled `u64`.
    #[inline]
    pub fn from_unscaled_u64(value: u64) -> NumericResult<Self> {
        Self::from_unscaled(U256::from(value))
    }

    /// Create from an unscaled `u128`.
    #[inline]
    pub fn from_unscaled_u128(value: u128) -> NumericResult<Self> {
        Self::from_unscaled(U256::from(value))
    }

    /// Create from integer and fractional parts.
    ///
    /// # Arguments
    /// - `integer`: The unscaled integer part
    /// - `fraction`: The fractional part in units of 10^-18 (must be < SCALE)
    ///
    /// # Example
    /// ```
    /// # use fixed_point::numeric::{Unsigned, U256};
    /// // 1.5
    /// let x = Unsigned::from_parts(U256::one(), 500_000_000_000_000_000).unwrap();
    /// assert_eq!(x.to_string(), "1.500000000000000000");
    /// ```
    pub fn from_parts(integer: U256, fraction: u64) -> NumericResult<Self> {
        if fraction >= SCALE_U64 {
            return Err(NumericError::InvalidInput);
        }

        Self::from_unscaled(integer)?.checked_add(Self(U256::from(fraction)))
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Get the raw internal value (scaled by 10^18).
    #[inline]
    pub const fn raw_value(self) -> U256 {
        self.0
    }

    /// Get the integer part (truncated).
    #[inline]
    pub fn integer_part(self) -> U256 {
        self.0 / Self::SCALE
    }

    /// Get the fractional part in units of 10^-18.
    #[inline]
    pub fn fractional_part(self) -> u64 {
        (self.0 % Self::SCALE).low_u64()
    }

    /// Check if value is zero.
    #[inline]
    pub fn is_zero(self) -> bool {
        self.0.is_zero()
    }

    // ========================================================================
    // Comparison
    // ========================================================================

    /// `self > other`. Raw comparison is exact since both share the scale.
    #[inline]
    pub fn is_greater_than(self, other: Self) -> bool {
        self.0 > other.0
    }

    /// `self >= other`.
    #[inline]
    pub fn is_greater_than_or_equal(self, other: Self) -> bool {
        self.0 >= other.0
    }

    /// `self < other`.
    #[inline]
    pub fn is_less_than(self, other: Self) -> bool {
        self.0 < other.0
    }

    /// `self <= other`.
    #[inline]
    pub fn is_less_than_or_equal(self, other: Self) -> bool {
        self.0 <= other.0
    }

    /// `self == other`.
    #[inline]
    pub fn is_equal(self, other: Self) -> bool {
        self.0 == other.0
    }

    /// Returns the minimum of two values.
    #[inline]
    pub fn min(self, other: Self) -> Self {
        Self(self.0.min(other.0))
    }

    /// Returns the maximum of two values.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        Self(self.0.max(other.0))
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================

    /// Checked addition.
    ///
    /// # Errors
    /// Returns `Overflow` if the raw sum exceeds 2^256 - 1.
    #[inline]
    pub fn checked_add(self, rhs: Self) -> NumericResult<Self> {
        self.0
            .checked_add(rhs.0)
            .map(Self)
            .ok_or(NumericError::Overflow)
    }

    /// Checked subtraction.
    ///
    /// # Errors
    /// Returns `Underflow` if `rhs > self`.
    #[inline]
    pub fn checked_sub(self, rhs: Self) -> NumericResult<Self> {
        self.0
            .checked_sub(rhs.0)
            .map(Self)
            .ok_or(NumericError::Underflow)
    }

    /// Checked multiplication, truncating toward zero.
    ///
    /// Computes `(a × b) / SCALE` with a 512-bit intermediate, so only results
    /// that are themselves out of range are rejected.
    ///
    /// # Errors
    /// Returns `Overflow` if the truncated result exceeds 2^256 - 1.
    pub fn checked_mul(self, rhs: Self) -> NumericResult<Self> {
        // 256 x 256 bits always fits in 512
        let product = widen(self.0) * widen(rhs.0);

        narrow(product / Self::SCALE_WIDE).map(Self).ok_or_else(|| {
            tracing::trace!(lhs = %self, rhs = %rhs, "fixed-point multiplication overflowed");
            NumericError::Overflow
        })
    }

    /// Checked division, truncating toward zero.
    ///
    /// Computes `(a × SCALE) / b` with a 512-bit intermediate.
    ///
    /// # Errors
    /// - `DivisionByZero` if `rhs` is zero
    /// - `Overflow` if the quotient exceeds 2^256 - 1
    pub fn checked_div(self, rhs: Self) -> NumericResult<Self> {
        if rhs.is_zero() {
            return Err(NumericError::DivisionByZero);
        }

        let numerator = widen(self.0) * Self::SCALE_WIDE;

        narrow(numerator / widen(rhs.0)).map(Self).ok_or_else(|| {
            tracing::trace!(lhs = %self, rhs = %rhs, "fixed-point division overflowed");
            NumericError::Overflow
        })
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Debug for Unsigned {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unsigned({}, raw={})", self, self.0)
    }
}

impl fmt::Display for Unsigned {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{:0>width$}",
            self.integer_part(),
            self.fractional_part(),
            width = DECIMALS as usize
        )
    }
}

// ============================================================================
// Conversion from rust_decimal (for API boundaries)
// ============================================================================

impl Unsigned {
    /// Convert from rust_decimal::Decimal.
    ///
    /// This is intended for API boundaries only (parsing user input).
    ///
    /// # Errors
    /// - `InvalidInput` if the decimal is negative
    /// - `PrecisionLoss` if it carries non-zero digits beyond 18 decimals
    pub fn from_decimal(d: rust_decimal::Decimal) -> NumericResult<Self> {
        if d.is_sign_negative() && !d.is_zero() {
            return Err(NumericError::InvalidInput);
        }

        let mantissa = U256::from(d.mantissa().unsigned_abs());
        let scale = d.scale();

        // rust_decimal caps its scale at 28, so 10^(scale - 18) fits easily
        if scale > DECIMALS {
            let divisor = U256::exp10((scale - DECIMALS) as usize);
            if !(mantissa % divisor).is_zero() {
                return Err(NumericError::PrecisionLoss);
            }
            Ok(Self(mantissa / divisor))
        } else {
            let multiplier = U256::exp10((DECIMALS - scale) as usize);
            mantissa
                .checked_mul(multiplier)
                .map(Self)
                .ok_or(NumericError::Overflow)
        }
    }

    /// Convert to rust_decimal::Decimal.
    ///
    /// # Errors
    /// Returns `Overflow` if the raw value does not fit a 96-bit mantissa.
    pub fn to_decimal(self) -> NumericResult<rust_decimal::Decimal> {
        let raw = to_u128(self.0).ok_or(NumericError::Overflow)?;
        let raw = i128::try_from(raw).map_err(|_| NumericError::Overflow)?;
        rust_decimal::Decimal::try_from_i128_with_scale(raw, DECIMALS)
            .map_err(|_| NumericError::Overflow)
    }
}

// ============================================================================
// String Parsing
// ============================================================================

impl std::str::FromStr for Unsigned {
    type Err = NumericError;

    /// Parse from a decimal string.
    ///
    /// # Examples
    /// - "123" -> 123.000000000000000000
    /// - "123.456" -> 123.456000000000000000
    /// - ".25" -> 0.250000000000000000
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s == "." {
            return Err(NumericError::InvalidInput);
        }

        // Split on decimal point
        let (int_str, frac_str) = match s.split_once('.') {
            Some((int_str, frac_str)) => (int_str, Some(frac_str)),
            None => (s, None),
        };

        let is_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if !is_digits(int_str) || !frac_str.is_none_or(is_digits) {
            return Err(NumericError::InvalidInput);
        }

        // Parse integer part
        let int_val = if int_str.is_empty() {
            U256::zero()
        } else {
            U256::from_dec_str(int_str).map_err(|_| NumericError::Overflow)?
        };

        // Parse fractional part
        let frac_val: u64 = match frac_str {
            None | Some("") => 0,
            Some(frac) if frac.len() > DECIMALS as usize => {
                return Err(NumericError::PrecisionLoss);
            },
            Some(frac) => {
                // Pad with zeros to reach DECIMALS length
                let padded = format!("{:0<width$}", frac, width = DECIMALS as usize);
                padded.parse().map_err(|_| NumericError::InvalidInput)?
            },
        };

        Self::from_parts(int_val, frac_val)
    }
}

// ============================================================================
// Serialization
// ============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for Unsigned {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Unsigned {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// Tests
// ============================================================================
