//! Parsing of player-typed number lists.
//!
//! Numbers are separated by commas. Whitespace around each number is
//! ignored; whitespace inside a number is not.

use crate::{LottoError, LottoResult};

const DELIMITER: char = ',';

/// Parse a comma-separated list of integers, keeping the input order.
///
/// Fails with [`LottoError::InvalidCommaUsage`] when the list starts or ends
/// with a comma or has an empty entry between two commas, and with
/// [`LottoError::InvalidNumberFormat`] when an entry is not an integer.
pub fn parse_numbers(text: &str) -> LottoResult<Vec<i32>> {
    let text = text.trim();
    if text.starts_with(DELIMITER) || text.ends_with(DELIMITER) {
        return Err(LottoError::InvalidCommaUsage);
    }

    let fields: Vec<&str> = text.split(DELIMITER).map(str::trim).collect();
    if fields.len() > 1 && fields.iter().any(|field| field.is_empty()) {
        return Err(LottoError::InvalidCommaUsage);
    }

    fields.into_iter().map(parse_field).collect()
}

/// Parse exactly one integer.
pub fn parse_number(text: &str) -> LottoResult<i32> {
    parse_field(text.trim())
}

fn parse_field(field: &str) -> LottoResult<i32> {
    field
        .parse()
        .map_err(|_| LottoError::InvalidNumberFormat(field.to_string()))
}
