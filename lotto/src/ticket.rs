//! Lotto tickets.

use std::fmt;

use crate::{parse::parse_numbers, LottoError, LottoNumber, LottoResult, NUMBERS_PER_TICKET};

/// Six distinct lotto numbers.
///
/// Numbers are kept in ascending order, so two tickets holding the same
/// numbers compare equal regardless of the order they were given in.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Ticket {
    numbers: [LottoNumber; NUMBERS_PER_TICKET],
}

impl Ticket {
    /// Build a ticket from raw integers.
    ///
    /// Checks the count first, then the range of every number, then
    /// uniqueness.
    pub fn new(numbers: &[i32]) -> LottoResult<Self> {
        check_count(numbers.len())?;
        let numbers = numbers
            .iter()
            .map(|&n| LottoNumber::try_from(n))
            .collect::<LottoResult<Vec<_>>>()?;
        Self::from_lotto_numbers(numbers)
    }

    /// Build a ticket from numbers whose range is already validated.
    pub fn from_lotto_numbers(mut numbers: Vec<LottoNumber>) -> LottoResult<Self> {
        check_count(numbers.len())?;

        numbers.sort_unstable();
        if let Some(pair) = numbers.windows(2).find(|pair| pair[0] == pair[1]) {
            return Err(LottoError::DuplicateNumber(pair[0].get()));
        }

        let numbers = numbers
            .try_into()
            .map_err(|rest: Vec<LottoNumber>| LottoError::InvalidNumberCount {
                expected: NUMBERS_PER_TICKET,
                actual: rest.len(),
            })?;
        Ok(Self { numbers })
    }

    /// Parse a ticket from comma-separated text such as `"1, 2, 3, 4, 5, 6"`.
    pub fn parse(text: &str) -> LottoResult<Self> {
        Self::new(&parse_numbers(text)?)
    }

    /// The numbers in ascending order.
    pub fn numbers(&self) -> &[LottoNumber] {
        &self.numbers
    }

    pub fn to_array(&self) -> [u8; NUMBERS_PER_TICKET] {
        self.numbers.map(LottoNumber::get)
    }

    pub fn contains(&self, number: LottoNumber) -> bool {
        self.numbers.binary_search(&number).is_ok()
    }

    /// How many numbers this ticket shares with `other`.
    pub fn match_count(&self, other: &Ticket) -> usize {
        self.numbers.iter().filter(|&&n| other.contains(n)).count()
    }
}

fn check_count(actual: usize) -> LottoResult<()> {
    if actual != NUMBERS_PER_TICKET {
        return Err(LottoError::InvalidNumberCount {
            expected: NUMBERS_PER_TICKET,
            actual,
        });
    }
    Ok(())
}

impl fmt::Display for Ticket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, number) in self.numbers.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{number}")?;
        }
        write!(f, "]")
    }
}
