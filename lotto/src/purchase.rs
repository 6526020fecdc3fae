//! Purchase amount validation.

use crate::{LottoError, LottoResult};

/// Price of a single ticket in currency units.
pub const TICKET_PRICE: u64 = 1_000;

/// Largest accepted purchase: the last multiple of [`TICKET_PRICE`] that
/// fits in an `i32`, i.e. 2,147,483 tickets.
pub const MAX_PURCHASE_AMOUNT: u64 = (i32::MAX as u64 / TICKET_PRICE) * TICKET_PRICE;

/// A validated purchase: a positive multiple of [`TICKET_PRICE`] up to
/// [`MAX_PURCHASE_AMOUNT`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Purchase {
    amount: u64,
}

impl Purchase {
    /// Parse and validate a purchase amount typed by the player.
    pub fn parse(text: &str) -> LottoResult<Self> {
        let text = text.trim();
        let amount: i64 = text
            .parse()
            .map_err(|_| LottoError::InvalidNumberFormat(text.to_string()))?;
        Self::new(amount)
    }

    /// Validate an amount that is already numeric.
    pub fn new(amount: i64) -> LottoResult<Self> {
        let invalid = || LottoError::InvalidPurchaseAmount {
            amount,
            price: TICKET_PRICE,
            max: MAX_PURCHASE_AMOUNT,
        };

        let amount = u64::try_from(amount).map_err(|_| invalid())?;
        if amount == 0 || amount > MAX_PURCHASE_AMOUNT || amount % TICKET_PRICE != 0 {
            return Err(invalid());
        }

        Ok(Self { amount })
    }

    /// Money spent, in currency units.
    pub fn amount(&self) -> u64 {
        self.amount
    }

    /// Number of tickets this purchase buys.
    pub fn ticket_count(&self) -> u64 {
        self.amount / TICKET_PRICE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_ticket() {
        let purchase = Purchase::parse("1000").unwrap();
        assert_eq!(purchase.amount(), 1000);
        assert_eq!(purchase.ticket_count(), 1);
    }

    #[test]
    fn test_multiple_tickets() {
        assert_eq!(Purchase::parse(" 14000 ").unwrap().ticket_count(), 14);
    }

    #[test]
    fn test_not_a_multiple_of_price() {
        assert_eq!(
            Purchase::parse("1500"),
            Err(LottoError::InvalidPurchaseAmount {
                amount: 1500,
                price: TICKET_PRICE,
                max: MAX_PURCHASE_AMOUNT,
            })
        );
        assert!(Purchase::parse("999").is_err());
    }

    #[test]
    fn test_zero_and_negative_are_validation_errors() {
        for text in ["0", "-1000"] {
            let err = Purchase::parse(text).unwrap_err();
            assert_eq!(err.code(), "INVALID_PURCHASE_AMOUNT", "input {text}");
        }
    }

    #[test]
    fn test_amount_cap() {
        let largest = Purchase::parse("2147483000").unwrap();
        assert_eq!(largest.amount(), MAX_PURCHASE_AMOUNT);
        assert_eq!(largest.ticket_count(), 2_147_483);

        for text in ["2147484000", "9223372036854775000"] {
            let err = Purchase::parse(text).unwrap_err();
            assert_eq!(err.code(), "INVALID_PURCHASE_AMOUNT", "input {text}");
        }
    }

    #[test]
    fn test_non_numeric_is_format_error() {
        for text in ["", "1,000", "1000won", "1e3", "99999999999999999999"] {
            let err = Purchase::parse(text).unwrap_err();
            assert_eq!(err.code(), "INVALID_NUMBER_FORMAT", "input {text:?}");
        }
    }
}
