//! Decimal code formatting

use std::fmt;

use crate::error::OtpError;

/// Number of decimal digits in a generated code
///
/// Restricted to 6, 7 or 8: larger counts exceed what a 31-bit truncated
/// value can meaningfully fill, and RFC 4226 requires at least 6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digits(u32);

impl Digits {
    pub const MIN: u32 = 6;
    pub const MAX: u32 = 8;

    /// Validate a digit count
    pub fn new(digits: u32) -> Result<Self, OtpError> {
        if (Self::MIN..=Self::MAX).contains(&digits) {
            Ok(Self(digits))
        } else {
            Err(OtpError::UnsupportedDigitCount { digits })
        }
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// 10^digits
    pub fn modulus(self) -> u32 {
        10_u32.pow(self.0)
    }
}

impl Default for Digits {
    fn default() -> Self {
        Self(Self::MIN)
    }
}

impl TryFrom<u32> for Digits {
    type Error = OtpError;

    fn try_from(digits: u32) -> Result<Self, Self::Error> {
        Self::new(digits)
    }
}

impl From<Digits> for u32 {
    fn from(digits: Digits) -> Self {
        digits.0
    }
}

impl fmt::Display for Digits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Reduce a truncated value modulo 10^digits and zero-pad it
pub fn format_code(value: u32, digits: Digits) -> String {
    let code = value % digits.modulus();
    format!("{:0width$}", code, width = digits.get() as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_accepts_supported_counts() {
        for d in 6..=8 {
            assert_eq!(Digits::new(d).unwrap().get(), d);
        }
    }

    #[test]
    fn test_digits_rejects_other_counts() {
        for d in [0, 1, 5, 9, 10, u32::MAX] {
            assert_eq!(
                Digits::new(d),
                Err(OtpError::UnsupportedDigitCount { digits: d })
            );
        }
    }

    #[test]
    fn test_format_code_zero_pads() {
        let six = Digits::new(6).unwrap();
        assert_eq!(format_code(7, six), "000007");
        assert_eq!(format_code(0, six), "000000");
    }

    #[test]
    fn test_format_code_reduces_modulo() {
        assert_eq!(format_code(1357872921, Digits::new(6).unwrap()), "872921");
        assert_eq!(format_code(1357872921, Digits::new(7).unwrap()), "7872921");
        assert_eq!(format_code(1357872921, Digits::new(8).unwrap()), "57872921");
    }

    #[test]
    fn test_format_code_max_value() {
        let eight = Digits::new(8).unwrap();
        assert_eq!(format_code(0x7fff_ffff, eight), "47483647");
    }
}
