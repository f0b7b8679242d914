//! Host-numeric entry points.
//!
//! `b2d` and `d2b` take and return the plain numeric shapes a foreign caller
//! passes around: digit vectors as `f64`, the decimal argument as a machine
//! integer, and the decimal result as `f64`. Conversions go through the exact
//! [`digits`](crate::digits) core and round to `f64` once at the end, except
//! under [`DigitPolicy::Weighted`], which accumulates in floating point.

use num_bigint::BigUint;
use num_traits::ToPrimitive;

use crate::digits::{decimal_to_binary_signed, Digits};
use crate::error::ConversionError;
use crate::options::{ConversionOptions, DigitPolicy, PrecisionMode, Width};

/// Significant bits an `f64` holds exactly.
pub const MAX_EXACT_F64_BITS: u64 = f64::MANTISSA_DIGITS as u64;

/// Values with more bits than this overflow `f64` to infinity.
const MAX_FINITE_F64_BITS: u64 = f64::MAX_EXP as u64;

/// Binary digits to their decimal value, with default options.
///
/// # Examples
///
/// ```
/// assert_eq!(bindigits::b2d(&[1.0, 0.0, 1.0, 1.0]), Ok(11.0));
/// assert_eq!(bindigits::b2d(&[]), Ok(0.0));
/// ```
pub fn b2d(x: &[f64]) -> Result<f64, ConversionError> {
    b2d_with(x, &ConversionOptions::default())
}

/// Binary digits to their decimal value.
///
/// `options.width` has no effect here.
pub fn b2d_with(x: &[f64], options: &ConversionOptions) -> Result<f64, ConversionError> {
    match options.policy {
        DigitPolicy::Weighted => weighted_sum(x, options.precision),
        policy => {
            let digits = Digits::from_f64s(x, policy)?;
            round_to_f64(&digits.value(), options.precision)
        }
    }
}

/// Decimal value to binary digits, with default options.
///
/// # Examples
///
/// ```
/// assert_eq!(bindigits::d2b(11), Ok(vec![1.0, 0.0, 1.0, 1.0]));
/// assert!(bindigits::d2b(-1).is_err());
/// ```
pub fn d2b(x: i32) -> Result<Vec<f64>, ConversionError> {
    d2b_with(i64::from(x), &ConversionOptions::default())
}

/// Decimal value to binary digits.
///
/// `options.policy` and `options.precision` have no effect here.
pub fn d2b_with(x: i64, options: &ConversionOptions) -> Result<Vec<f64>, ConversionError> {
    let digits = decimal_to_binary_signed(x)?;
    let sized = match options.width {
        Width::Minimal => digits,
        Width::Fixed(width) => digits.padded(width)?,
    };
    Ok(sized.to_f64s())
}

fn round_to_f64(value: &BigUint, precision: PrecisionMode) -> Result<f64, ConversionError> {
    let significant_bits = value.bits();
    let exact = match value.trailing_zeros() {
        Some(trailing) => {
            significant_bits - trailing <= MAX_EXACT_F64_BITS
                && significant_bits <= MAX_FINITE_F64_BITS
        }
        None => true,
    };
    if !exact {
        report_precision_loss(significant_bits, precision)?;
    }
    Ok(value.to_f64().unwrap_or(f64::INFINITY))
}

fn weighted_sum(x: &[f64], precision: PrecisionMode) -> Result<f64, ConversionError> {
    // Without validated digits only the digit count is known, so this is conservative.
    let significant = x.iter().skip_while(|&&digit| digit == 0.0).count() as u64;
    if significant > MAX_EXACT_F64_BITS {
        report_precision_loss(significant, precision)?;
    }
    Ok(x.iter().fold(0.0, |acc, &digit| acc * 2.0 + digit))
}

fn report_precision_loss(
    significant_bits: u64,
    precision: PrecisionMode,
) -> Result<(), ConversionError> {
    match precision {
        PrecisionMode::Warn => {
            tracing::warn!(
                significant_bits,
                max_exact_bits = MAX_EXACT_F64_BITS,
                "binary value is not exactly representable as f64; result is rounded"
            );
            Ok(())
        }
        PrecisionMode::Error => Err(ConversionError::PrecisionLoss { significant_bits }),
        PrecisionMode::Ignore => Ok(()),
    }
}
