//! A single lotto number.

use std::fmt;

use crate::{LottoError, LottoResult};

/// Smallest number on a ticket.
pub const MIN_NUMBER: u8 = 1;

/// Largest number on a ticket.
pub const MAX_NUMBER: u8 = 45;

/// How many distinct numbers make up a ticket.
pub const NUMBERS_PER_TICKET: usize = 6;

/// A number in `MIN_NUMBER..=MAX_NUMBER`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LottoNumber(u8);

impl LottoNumber {
    /// Validate that `value` lies in the playable range.
    pub fn new(value: i64) -> LottoResult<Self> {
        if value < i64::from(MIN_NUMBER) || value > i64::from(MAX_NUMBER) {
            return Err(LottoError::InvalidNumberRange {
                value,
                min: MIN_NUMBER,
                max: MAX_NUMBER,
            });
        }
        Ok(Self(value as u8))
    }

    pub const fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<i32> for LottoNumber {
    type Error = LottoError;

    fn try_from(value: i32) -> LottoResult<Self> {
        Self::new(i64::from(value))
    }
}

impl From<LottoNumber> for u8 {
    fn from(number: LottoNumber) -> u8 {
        number.0
    }
}

impl fmt::Display for LottoNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_bounds() {
        assert_eq!(LottoNumber::new(1).unwrap().get(), 1);
        assert_eq!(LottoNumber::new(45).unwrap().get(), 45);

        for value in [0, 46, -1, i64::MAX] {
            assert!(matches!(
                LottoNumber::new(value),
                Err(LottoError::InvalidNumberRange { value: v, .. }) if v == value
            ));
        }
    }

    #[test]
    fn test_try_from_i32() {
        assert_eq!(LottoNumber::try_from(7).unwrap(), LottoNumber::new(7).unwrap());
        assert!(LottoNumber::try_from(-7).is_err());
    }
}
