use crate::utils::error::{Result, ServiceError};
use std::fmt;
use std::str::FromStr;

/// Number of letters in each alphabet range the cipher rotates through.
pub const ALPHABET_LEN: u8 = 26;

/// An integer offset applied to every letter.
///
/// Any `i64` is accepted; the cipher only ever sees [`Shift::normalized`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shift(i64);

impl Shift {
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    pub const fn value(self) -> i64 {
        self.0
    }

    /// Offset reduced into `0..26` with Euclidean modulo, so negative shifts wrap backwards.
    pub fn normalized(self) -> u8 {
        // rem_euclid keeps the result non-negative and below 26
        self.0.rem_euclid(i64::from(ALPHABET_LEN)) as u8
    }

    /// The shift that undoes this one.
    pub fn inverse(self) -> Self {
        Self(i64::from((ALPHABET_LEN - self.normalized()) % ALPHABET_LEN))
    }
}

impl From<i64> for Shift {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for Shift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Shift {
    type Err = ServiceError;

    fn from_str(s: &str) -> Result<Self> {
        s.parse::<i64>()
            .map(Self)
            .map_err(|e| ServiceError::InvalidShift {
                value: s.to_string(),
                reason: e.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, 0)]
    #[case(3, 3)]
    #[case(26, 0)]
    #[case(27, 1)]
    #[case(-1, 25)]
    #[case(-27, 25)]
    #[case(i64::MAX, 7)]
    #[case(i64::MIN, 18)]
    fn test_normalized(#[case] value: i64, #[case] expected: u8) {
        assert_eq!(Shift::new(value).normalized(), expected);
    }

    #[test]
    fn test_inverse() {
        assert_eq!(Shift::new(3).inverse(), Shift::new(23));
        assert_eq!(Shift::new(0).inverse(), Shift::new(0));
        assert_eq!(Shift::new(-5).inverse(), Shift::new(5));
    }

    #[test]
    fn test_parse_shift() {
        assert_eq!("3".parse::<Shift>().unwrap(), Shift::new(3));
        assert_eq!("-42".parse::<Shift>().unwrap(), Shift::new(-42));
        assert_eq!("+7".parse::<Shift>().unwrap(), Shift::new(7));
    }

    #[test]
    fn test_parse_invalid_shift() {
        let err = "abc".parse::<Shift>().unwrap_err();
        assert!(matches!(err, ServiceError::InvalidShift { .. }));
        assert!("99999999999999999999".parse::<Shift>().is_err());
        assert!("".parse::<Shift>().is_err());
        assert!(" 1".parse::<Shift>().is_err());
        assert!("1 ".parse::<Shift>().is_err());
    }
}
