//! Single binary digit.

use crate::options::DigitPolicy;

/// One binary digit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Bit {
    Zero,
    One,
}

impl Bit {
    pub fn is_one(self) -> bool {
        matches!(self, Self::One)
    }

    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Zero),
            1 => Some(Self::One),
            _ => None,
        }
    }

    pub fn from_char(value: char) -> Option<Self> {
        match value {
            '0' => Some(Self::Zero),
            '1' => Some(Self::One),
            _ => None,
        }
    }

    /// Reads a host-numeric digit.
    ///
    /// `Weighted` has no per-digit meaning, so it reads digits the same way as `Strict`.
    pub fn from_f64(value: f64, policy: DigitPolicy) -> Option<Self> {
        match policy {
            DigitPolicy::Strict | DigitPolicy::Weighted => {
                if value == 0.0 {
                    Some(Self::Zero)
                } else if value == 1.0 {
                    Some(Self::One)
                } else {
                    None
                }
            }
            DigitPolicy::Truthy => {
                if value.is_nan() {
                    None
                } else {
                    Some(Self::from(value != 0.0))
                }
            }
        }
    }

    pub fn to_u8(self) -> u8 {
        match self {
            Self::Zero => 0,
            Self::One => 1,
        }
    }

    pub fn to_f64(self) -> f64 {
        f64::from(self.to_u8())
    }

    pub fn to_char(self) -> char {
        match self {
            Self::Zero => '0',
            Self::One => '1',
        }
    }
}

impl From<bool> for Bit {
    fn from(value: bool) -> Self {
        if value {
            Self::One
        } else {
            Self::Zero
        }
    }
}

impl From<Bit> for bool {
    fn from(bit: Bit) -> Self {
        bit.is_one()
    }
}

impl From<Bit> for u8 {
    fn from(bit: Bit) -> Self {
        bit.to_u8()
    }
}
