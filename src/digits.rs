//! Binary digits and exact conversions to and from arbitrary-precision integers.
//!
//! This module contains:
//! - `Bit`: a single binary digit
//! - `Digits`: an ordered digit sequence, most-significant first
//! - `binary_to_decimal` / `decimal_to_binary`: exact conversions backed by `BigUint`
//!
//! Nothing here has a precision ceiling; rounding only happens in the
//! [`host`](crate::host) surface.

mod bit;
mod convert;
mod display;
mod sequence;

pub use bit::Bit;
pub use convert::{binary_to_decimal, decimal_to_binary, decimal_to_binary_signed};
pub use sequence::Digits;
