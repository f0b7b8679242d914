//! Conversions between binary digit sequences and decimal integers.
//!
//! Two layers are provided:
//!
//! - [`digits`]: exact conversions over [`Bit`] slices and [`BigUint`](num_bigint::BigUint)
//!   values, with no precision ceiling.
//! - [`host`]: the `b2d` / `d2b` entry points over plain `f64` digit vectors and
//!   machine integers, configurable through [`ConversionOptions`].
//!
//! ```
//! use bindigits::{b2d, d2b};
//!
//! let digits = d2b(11).unwrap();
//! assert_eq!(digits, vec![1.0, 0.0, 1.0, 1.0]);
//! assert_eq!(b2d(&digits).unwrap(), 11.0);
//! ```
#![warn(
    clippy::dbg_macro,
    clippy::expect_used,
    clippy::panic,
    clippy::print_stderr,
    clippy::print_stdout,
    clippy::todo,
    clippy::unimplemented,
    clippy::unwrap_used
)]

pub mod digits;
mod error;
pub mod host;
mod options;

#[cfg(test)]
mod test_utils;

pub use digits::{binary_to_decimal, decimal_to_binary, decimal_to_binary_signed, Bit, Digits};
pub use error::ConversionError;
pub use host::{b2d, b2d_with, d2b, d2b_with, MAX_EXACT_F64_BITS};
pub use options::{ConversionOptions, DigitPolicy, PrecisionMode, Width};
