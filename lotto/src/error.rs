//! Error types for lotto rounds.

use displaydoc::Display;
use thiserror::Error;

/// Broad category of a [`LottoError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// The input text does not have the expected shape.
    Format,
    /// The input is well-formed but breaks a game rule.
    Validation,
    /// An internal invariant was broken. Never caused by user input that
    /// passed validation.
    Internal,
}

/// Errors that can occur while setting up or scoring a round.
#[derive(Clone, Debug, Display, Error, PartialEq, Eq)]
pub enum LottoError {
    /// Numbers must be separated by single commas, without a leading or trailing comma
    InvalidCommaUsage,

    /// Not a valid number: {0:?}
    InvalidNumberFormat(String),

    /// Purchase amount must be a positive multiple of {price} no greater than {max}, got {amount}
    InvalidPurchaseAmount { amount: i64, price: u64, max: u64 },

    /// Lotto numbers must be between {min} and {max}, got {value}
    InvalidNumberRange { value: i64, min: u8, max: u8 },

    /// A ticket needs exactly {expected} numbers, got {actual}
    InvalidNumberCount { expected: usize, actual: usize },

    /// Number {0} appears more than once
    DuplicateNumber(u8),

    /// Bonus number {0} is already one of the winning numbers
    DuplicateBonusNumber(u8),

    /// At least one ticket must be generated, got {0}
    InvalidTicketCount(u64),

    /// Cannot compute a yield for zero purchased tickets
    DivisionByZero,
}

impl LottoError {
    /// Stable identifier of the violated rule.
    pub fn code(&self) -> &'static str {
        match self {
            LottoError::InvalidCommaUsage => "INVALID_COMMA_USAGE",
            LottoError::InvalidNumberFormat(_) => "INVALID_NUMBER_FORMAT",
            LottoError::InvalidPurchaseAmount { .. } => "INVALID_PURCHASE_AMOUNT",
            LottoError::InvalidNumberRange { .. } => "INVALID_NUMBER_RANGE",
            LottoError::InvalidNumberCount { .. } => "INVALID_NUMBER_COUNT",
            LottoError::DuplicateNumber(_) => "DUPLICATE_NUMBER",
            LottoError::DuplicateBonusNumber(_) => "DUPLICATE_BONUS_NUMBER",
            LottoError::InvalidTicketCount(_) => "INVALID_TICKET_COUNT",
            LottoError::DivisionByZero => "DIVISION_BY_ZERO",
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            LottoError::InvalidCommaUsage | LottoError::InvalidNumberFormat(_) => ErrorKind::Format,
            LottoError::DivisionByZero => ErrorKind::Internal,
            _ => ErrorKind::Validation,
        }
    }

    /// Whether asking the player again can fix this error.
    pub fn is_recoverable(&self) -> bool {
        matches!(self.kind(), ErrorKind::Format | ErrorKind::Validation)
    }
}

/// Result type for lotto operations.
pub type LottoResult<T> = Result<T, LottoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        assert_eq!(LottoError::InvalidCommaUsage.kind(), ErrorKind::Format);
        assert_eq!(
            LottoError::InvalidNumberFormat("x".into()).kind(),
            ErrorKind::Format
        );
        assert_eq!(LottoError::DuplicateBonusNumber(3).kind(), ErrorKind::Validation);
        assert_eq!(LottoError::InvalidTicketCount(0).kind(), ErrorKind::Validation);
        assert_eq!(LottoError::DivisionByZero.kind(), ErrorKind::Internal);
    }

    #[test]
    fn test_internal_errors_are_not_recoverable() {
        assert!(LottoError::DuplicateNumber(4).is_recoverable());
        assert!(!LottoError::DivisionByZero.is_recoverable());
    }

    #[test]
    fn test_messages_name_the_offending_value() {
        let err = LottoError::InvalidNumberRange {
            value: 46,
            min: 1,
            max: 45,
        };
        assert_eq!(err.to_string(), "Lotto numbers must be between 1 and 45, got 46");

        let err = LottoError::InvalidNumberFormat("a1".into());
        assert_eq!(err.to_string(), "Not a valid number: \"a1\"");
    }
}
