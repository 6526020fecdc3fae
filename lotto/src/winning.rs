//! The declared draw: winning numbers plus a bonus number.

use crate::{parse::parse_number, LottoError, LottoNumber, LottoResult, Rank, Ticket};

/// The six winning numbers of a round.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WinningNumbers(Ticket);

impl WinningNumbers {
    /// Parse comma-separated winning numbers.
    pub fn parse(text: &str) -> LottoResult<Self> {
        Ticket::parse(text).map(Self)
    }

    pub fn from_ticket(ticket: Ticket) -> Self {
        Self(ticket)
    }

    pub fn ticket(&self) -> &Ticket {
        &self.0
    }

    pub fn contains(&self, number: LottoNumber) -> bool {
        self.0.contains(number)
    }
}

/// A bonus number, guaranteed not to be one of the winning numbers it was
/// validated against.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BonusNumber(LottoNumber);

impl BonusNumber {
    /// Parse a bonus number typed by the player.
    pub fn parse(winning: &WinningNumbers, text: &str) -> LottoResult<Self> {
        let number = LottoNumber::try_from(parse_number(text)?)?;
        Self::new(winning, number)
    }

    pub fn new(winning: &WinningNumbers, number: LottoNumber) -> LottoResult<Self> {
        if winning.contains(number) {
            return Err(LottoError::DuplicateBonusNumber(number.get()));
        }
        Ok(Self(number))
    }

    pub fn number(&self) -> LottoNumber {
        self.0
    }
}

/// Winning numbers and bonus number, the seven of them pairwise distinct.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WinningDraw {
    numbers: WinningNumbers,
    bonus: BonusNumber,
}

impl WinningDraw {
    /// Combine a draw, re-checking the bonus against these winning numbers.
    pub fn new(numbers: WinningNumbers, bonus: BonusNumber) -> LottoResult<Self> {
        let bonus = BonusNumber::new(&numbers, bonus.number())?;
        Ok(Self { numbers, bonus })
    }

    pub fn numbers(&self) -> &WinningNumbers {
        &self.numbers
    }

    pub fn bonus(&self) -> BonusNumber {
        self.bonus
    }

    /// Rank of `ticket` in this draw, `None` if it wins nothing.
    pub fn rank_of(&self, ticket: &Ticket) -> Option<Rank> {
        let matched = ticket.match_count(self.numbers.ticket());
        let bonus_matched = ticket.contains(self.bonus.number());
        Rank::from_match(matched, bonus_matched)
    }
}
