//! Exact conversions between digit slices and arbitrary-precision integers.

use num_bigint::BigUint;
use num_traits::Zero;

use crate::error::ConversionError;

use super::bit::Bit;
use super::sequence::Digits;

/// Computes `sum(bits[i] * 2^(n-1-i))` exactly.
///
/// Leading zeros are allowed and the empty slice is zero.
///
/// # Examples
///
/// ```
/// use bindigits::{binary_to_decimal, Bit};
/// use num_bigint::BigUint;
///
/// let value = binary_to_decimal(&[Bit::One, Bit::Zero, Bit::One, Bit::One]);
/// assert_eq!(value, BigUint::from(11u32));
/// ```
pub fn binary_to_decimal(bits: &[Bit]) -> BigUint {
    let first_one = bits.iter().position(|bit| bit.is_one());
    let Some(start) = first_one else {
        return BigUint::zero();
    };

    let mut value = BigUint::zero();
    for bit in &bits[start..] {
        value <<= 1usize;
        if bit.is_one() {
            value += 1u32;
        }
    }
    value
}

/// Returns the canonical digits of `value`, most-significant first.
///
/// Zero is `[0]`; every other value starts with a one digit.
///
/// # Examples
///
/// ```
/// use bindigits::decimal_to_binary;
/// use num_bigint::BigUint;
///
/// let digits = decimal_to_binary(&BigUint::from(11u32));
/// assert_eq!(digits.to_string(), "1011");
/// ```
pub fn decimal_to_binary(value: &BigUint) -> Digits {
    if value.is_zero() {
        return Digits::zero();
    }
    value
        .to_radix_be(2)
        .into_iter()
        .map(|digit| Bit::from(digit == 1))
        .collect()
}

/// Signed entry point for [`decimal_to_binary`]; negative values are rejected.
pub fn decimal_to_binary_signed(value: i64) -> Result<Digits, ConversionError> {
    let unsigned = u64::try_from(value).map_err(|_| ConversionError::InvalidArgument { value })?;
    Ok(Digits::from(unsigned))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;
    use crate::test_utils::{bits, digits};

    #[test]
    fn empty_input_is_zero() {
        assert_eq!(binary_to_decimal(&[]), BigUint::zero());
    }

    #[test]
    fn eleven_from_digits() {
        assert_eq!(binary_to_decimal(&bits(&[1, 0, 1, 1])), BigUint::from(11u32));
    }

    #[test]
    fn leading_zeros_do_not_change_value() {
        assert_eq!(binary_to_decimal(&bits(&[0, 0, 1, 1])), BigUint::from(3u32));
        assert_eq!(binary_to_decimal(&bits(&[0, 0, 0])), BigUint::zero());
    }

    #[test]
    fn zero_is_single_zero_digit() {
        assert_eq!(decimal_to_binary(&BigUint::zero()), digits("0"));
    }

    #[test]
    fn eleven_to_digits() {
        assert_eq!(decimal_to_binary(&BigUint::from(11u32)), digits("1011"));
    }

    #[test]
    fn ten_ones_for_1023() {
        let result = decimal_to_binary(&BigUint::from(1023u32));
        assert_eq!(result, digits("1111111111"));
        assert_eq!(binary_to_decimal(result.as_slice()), BigUint::from(1023u32));
    }

    #[test]
    fn values_beyond_u64_are_exact() {
        let value = (BigUint::from(1u32) << 200usize) + BigUint::from(1u32);
        let result = decimal_to_binary(&value);
        assert_eq!(result.len(), 201);
        assert!(result.is_canonical());
        assert_eq!(binary_to_decimal(result.as_slice()), value);
    }

    #[test]
    fn signed_rejects_negative() {
        assert_eq!(
            decimal_to_binary_signed(-1),
            Err(ConversionError::InvalidArgument { value: -1 })
        );
        assert_eq!(
            decimal_to_binary_signed(i64::MIN),
            Err(ConversionError::InvalidArgument { value: i64::MIN })
        );
    }

    #[test]
    fn signed_accepts_zero_and_max() {
        assert_eq!(decimal_to_binary_signed(0), Ok(digits("0")));
        let max = decimal_to_binary_signed(i64::MAX).expect("non-negative input");
        assert_eq!(max.len(), 63);
        assert!(max.iter().all(|bit| bit.is_one()));
    }
}
