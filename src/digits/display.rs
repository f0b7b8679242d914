//! Text form of digit sequences: a plain string of `0` and `1` characters.

use std::fmt;
use std::str::FromStr;

use crate::error::ConversionError;

use super::bit::Bit;
use super::sequence::Digits;

impl fmt::Display for Bit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl fmt::Display for Digits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self {
            write!(f, "{bit}")?;
        }
        Ok(())
    }
}

impl FromStr for Digits {
    type Err = ConversionError;

    /// Parses a string of `0`/`1` characters, ignoring surrounding whitespace.
    /// `index` in the error is the character position in the trimmed string.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .chars()
            .enumerate()
            .map(|(index, c)| {
                Bit::from_char(c).ok_or_else(|| ConversionError::InvalidDigit {
                    index,
                    found: c.to_string(),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_as_digit_string() {
        let value = Digits::from(11u64);
        assert_eq!(value.to_string(), "1011");
        assert_eq!(Digits::default().to_string(), "");
    }

    #[test]
    fn parse_trims_whitespace() {
        let parsed: Digits = "  0110\n".parse().unwrap_or_default();
        assert_eq!(parsed.to_u64(), Ok(6));
        assert_eq!(parsed.len(), 4);
    }

    #[test]
    fn parse_rejects_other_characters() {
        assert_eq!(
            "10a1".parse::<Digits>(),
            Err(ConversionError::InvalidDigit {
                index: 2,
                found: "a".to_string()
            })
        );
    }

    #[test]
    fn parse_empty_is_empty_sequence() {
        assert_eq!("".parse::<Digits>(), Ok(Digits::default()));
    }
}
