//! Error types for digit conversions.
//!
//! Every failure is local to a single call: conversions either return a value or
//! one of the variants below, and nothing is retried or partially applied.

use std::fmt;

/// Errors that can occur while converting between digit sequences and integers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConversionError {
    /// An input element is not a binary digit under the active policy.
    InvalidDigit { index: usize, found: String },
    /// A decimal input is negative.
    InvalidArgument { value: i64 },
    /// The exact value cannot be represented by the floating-point result.
    PrecisionLoss { significant_bits: u64 },
    /// The value does not fit in the requested fixed-width integer.
    Overflow { bits: u64, max: u32 },
    /// The canonical digits do not fit in the requested width.
    WidthTooSmall { required: usize, width: usize },
}

impl fmt::Display for ConversionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDigit { index, found } => {
                write!(f, "invalid binary digit {found} at index {index}")
            }
            Self::InvalidArgument { value } => {
                write!(f, "cannot convert negative value {value} to binary digits")
            }
            Self::PrecisionLoss { significant_bits } => write!(
                f,
                "value with {significant_bits} significant bits is not exactly representable as f64"
            ),
            Self::Overflow { bits, max } => {
                write!(f, "value with {bits} bits does not fit in {max} bits")
            }
            Self::WidthTooSmall { required, width } => {
                write!(f, "{required} digits required but width is {width}")
            }
        }
    }
}

impl std::error::Error for ConversionError {}
