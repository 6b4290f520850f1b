// ============================================================================
// Fixed-Width Integers
// 256-bit storage type and 512-bit intermediate accumulator
// ============================================================================
//
// Every raw fixed-point value lives in a U256. Products and scaled numerators
// that may not fit in 256 bits are computed in a U512 and range-checked before
// being narrowed back.

#![allow(
    clippy::assign_op_pattern,
    clippy::ptr_offset_with_cast,
    clippy::manual_range_contains,
    clippy::manual_div_ceil
)]

use uint::construct_uint;

construct_uint! {
    /// 256-bit unsigned integer, little-endian 64-bit limbs.
    pub struct U256(4);
}

construct_uint! {
    /// 512-bit unsigned integer used for wide intermediates.
    pub struct U512(8);
}

/// Zero-extend a `U256` into a `U512`. Never loses information.
#[inline]
pub const fn widen(value: U256) -> U512 {
    let U256(limbs) = value;
    U512([
        limbs[0], limbs[1], limbs[2], limbs[3], 0, 0, 0, 0,
    ])
}

/// Narrow a `U512` back to a `U256`.
///
/// Returns `None` if any of the upper four limbs is set.
#[inline]
pub const fn narrow(value: U512) -> Option<U256> {
    let U512(limbs) = value;
    if limbs[4] != 0 || limbs[5] != 0 || limbs[6] != 0 || limbs[7] != 0 {
        return None;
    }
    Some(U256([limbs[0], limbs[1], limbs[2], limbs[3]]))
}

/// Low 128 bits of a `U256`, or `None` if the value does not fit.
#[inline]
pub const fn to_u128(value: U256) -> Option<u128> {
    let U256(limbs) = value;
    if limbs[2] != 0 || limbs[3] != 0 {
        return None;
    }
    Some(((limbs[1] as u128) << 64) | limbs[0] as u128)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widen_preserves_value() {
        let max = U256::MAX;
        let wide = widen(max);
        assert_eq!(wide, (U512::one() << 256) - U512::one());
    }

    #[test]
    fn test_narrow_in_range() {
        let value = U256::from(123_456_789u64) << 200;
        assert_eq!(narrow(widen(value)), Some(value));
    }

    #[test]
    fn test_narrow_out_of_range() {
        let too_big = U512::one() << 256;
        assert_eq!(narrow(too_big), None);
    }

    #[test]
    fn test_full_product_fits_in_wide() {
        // (2^256 - 1)^2 < 2^512, so the wide product of two maxima cannot overflow
        let max = widen(U256::MAX);
        assert!(max.checked_mul(max).is_some());
    }

    #[test]
    fn test_to_u128() {
        assert_eq!(to_u128(U256::from(u128::MAX)), Some(u128::MAX));
        assert_eq!(to_u128(U256::from(u128::MAX) + U256::one()), None);
    }
}
