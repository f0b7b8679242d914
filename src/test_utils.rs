//! Shared test helpers for building digit sequences.

use crate::digits::{Bit, Digits};

/// Builds bits from `0`/`1` integers.
///
/// # Panics
/// Panics if any value is not 0 or 1.
pub fn bits(values: &[u8]) -> Vec<Bit> {
    values
        .iter()
        .map(|&value| match Bit::from_u8(value) {
            Some(bit) => bit,
            None => panic!("expected binary digit, got {value}"),
        })
        .collect()
}

/// Parses a digit string such as `"1011"`.
///
/// # Panics
/// Panics if the string contains anything other than `0` and `1`.
pub fn digits(text: &str) -> Digits {
    match text.parse() {
        Ok(parsed) => parsed,
        Err(err) => panic!("invalid digit string {text:?}: {err}"),
    }
}
