//! Options controlling how host-numeric conversions validate, size and round.

/// How non-binary input values are treated when reading `f64` digits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DigitPolicy {
    /// Only exactly `0.0` and `1.0` are digits; anything else is rejected.
    #[default]
    Strict,
    /// `0.0` (either sign) is a zero digit; every other non-NaN value is a one digit.
    Truthy,
    /// No validation: values are accumulated in floating point as `2 * acc + digit`.
    Weighted,
}

/// Number of digits produced by decimal-to-binary conversion.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Width {
    /// Canonical form with no leading zeros (`0` becomes `[0]`).
    #[default]
    Minimal,
    /// Left-padded with zeros to exactly this many digits.
    Fixed(usize),
}

/// What to do when a binary-to-decimal result is not exactly representable as `f64`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PrecisionMode {
    /// Log a warning and return the rounded value.
    #[default]
    Warn,
    /// Fail with [`ConversionError::PrecisionLoss`](crate::ConversionError::PrecisionLoss).
    Error,
    /// Return the rounded value silently.
    Ignore,
}

/// Options for [`b2d_with`](crate::b2d_with) and [`d2b_with`](crate::d2b_with).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ConversionOptions {
    pub policy: DigitPolicy,
    pub width: Width,
    pub precision: PrecisionMode,
}

impl ConversionOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(mut self, policy: DigitPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_width(mut self, width: Width) -> Self {
        self.width = width;
        self
    }

    pub fn with_precision(mut self, precision: PrecisionMode) -> Self {
        self.precision = precision;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_strict_minimal_warn() {
        let options = ConversionOptions::default();
        assert_eq!(options.policy, DigitPolicy::Strict);
        assert_eq!(options.width, Width::Minimal);
        assert_eq!(options.precision, PrecisionMode::Warn);
    }

    #[test]
    fn builders_override_single_fields() {
        let options = ConversionOptions::new()
            .with_policy(DigitPolicy::Truthy)
            .with_width(Width::Fixed(6));
        assert_eq!(options.policy, DigitPolicy::Truthy);
        assert_eq!(options.width, Width::Fixed(6));
        assert_eq!(options.precision, PrecisionMode::Warn);
    }
}
