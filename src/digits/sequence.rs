//! Ordered digit sequences.

use std::slice;

use num_bigint::BigUint;

use crate::error::ConversionError;
use crate::options::DigitPolicy;

use super::bit::Bit;
use super::convert::{binary_to_decimal, decimal_to_binary};

/// Binary digits ordered most-significant first.
///
/// Leading zeros and the empty sequence are allowed; see [`Digits::is_canonical`]
/// for the normalized form produced by decimal-to-binary conversion.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Digits {
    bits: Vec<Bit>,
}

impl Digits {
    pub fn new(bits: Vec<Bit>) -> Self {
        Self { bits }
    }

    /// The canonical representation of zero, `[0]`.
    pub fn zero() -> Self {
        Self {
            bits: vec![Bit::Zero],
        }
    }

    pub fn as_slice(&self) -> &[Bit] {
        &self.bits
    }

    pub fn into_vec(self) -> Vec<Bit> {
        self.bits
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, Bit> {
        self.bits.iter()
    }

    fn leading_zeros(&self) -> usize {
        self.bits.iter().take_while(|bit| !bit.is_one()).count()
    }

    /// Number of digits from the first one digit to the end.
    pub fn significant_bits(&self) -> usize {
        self.bits.len() - self.leading_zeros()
    }

    /// True when there is no leading zero, or the sequence is exactly `[0]`.
    pub fn is_canonical(&self) -> bool {
        match self.bits.first() {
            Some(Bit::One) => true,
            Some(Bit::Zero) => self.bits.len() == 1,
            None => false,
        }
    }

    /// Strips leading zeros; an all-zero or empty sequence becomes `[0]`.
    pub fn canonical(&self) -> Self {
        let significant = &self.bits[self.leading_zeros()..];
        if significant.is_empty() {
            Self::zero()
        } else {
            Self::new(significant.to_vec())
        }
    }

    /// Left-pads the canonical form with zeros to exactly `width` digits.
    pub fn padded(&self, width: usize) -> Result<Self, ConversionError> {
        let canonical = self.canonical();
        let required = canonical.len();
        if required > width {
            tracing::debug!(required, width, "digits do not fit requested width");
            return Err(ConversionError::WidthTooSmall { required, width });
        }
        let mut bits = vec![Bit::Zero; width - required];
        bits.extend(canonical.bits);
        Ok(Self { bits })
    }

    /// Exact value of the sequence.
    pub fn value(&self) -> BigUint {
        binary_to_decimal(&self.bits)
    }

    /// Value of the sequence as a `u64`, failing past 64 significant bits.
    pub fn to_u64(&self) -> Result<u64, ConversionError> {
        let significant = self.significant_bits();
        if significant > u64::BITS as usize {
            return Err(ConversionError::Overflow {
                bits: significant as u64,
                max: u64::BITS,
            });
        }
        Ok(self
            .bits
            .iter()
            .fold(0u64, |acc, bit| (acc << 1) | u64::from(bit.to_u8())))
    }

    /// Reads host-numeric digits under `policy`.
    ///
    /// `Weighted` input is read like `Strict`, since typed digits cannot carry
    /// out-of-range weights.
    pub fn from_f64s(values: &[f64], policy: DigitPolicy) -> Result<Self, ConversionError> {
        values
            .iter()
            .enumerate()
            .map(|(index, &value)| {
                Bit::from_f64(value, policy).ok_or_else(|| {
                    tracing::debug!(index, value, ?policy, "rejected binary digit");
                    ConversionError::InvalidDigit {
                        index,
                        found: value.to_string(),
                    }
                })
            })
            .collect()
    }

    pub fn to_f64s(&self) -> Vec<f64> {
        self.bits.iter().map(|bit| bit.to_f64()).collect()
    }
}

impl From<Vec<Bit>> for Digits {
    fn from(bits: Vec<Bit>) -> Self {
        Self::new(bits)
    }
}

impl From<u64> for Digits {
    fn from(value: u64) -> Self {
        if value == 0 {
            return Self::zero();
        }
        let width = u64::BITS - value.leading_zeros();
        (0..width)
            .rev()
            .map(|shift| Bit::from((value >> shift) & 1 == 1))
            .collect()
    }
}

impl From<&BigUint> for Digits {
    fn from(value: &BigUint) -> Self {
        decimal_to_binary(value)
    }
}

impl FromIterator<Bit> for Digits {
    fn from_iter<I: IntoIterator<Item = Bit>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl IntoIterator for Digits {
    type Item = Bit;
    type IntoIter = std::vec::IntoIter<Bit>;

    fn into_iter(self) -> Self::IntoIter {
        self.bits.into_iter()
    }
}

impl<'a> IntoIterator for &'a Digits {
    type Item = &'a Bit;
    type IntoIter = slice::Iter<'a, Bit>;

    fn into_iter(self) -> Self::IntoIter {
        self.bits.iter()
    }
}

impl AsRef<[Bit]> for Digits {
    fn as_ref(&self) -> &[Bit] {
        &self.bits
    }
}
