#![allow(dead_code)]

use bindigits::{Bit, Digits};
use rand::Rng;

/// Random digit sequence of exactly `len` digits with a leading one.
pub fn random_digits<R: Rng>(rng: &mut R, len: usize) -> Digits {
    std::iter::once(Bit::One)
        .chain((1..len).map(|_| Bit::from(rng.gen::<bool>())))
        .collect()
}

/// Prints diagnostic output when BENCH_VERBOSE is set.
pub fn verbose() -> bool {
    std::env::var_os("BENCH_VERBOSE").is_some()
}
