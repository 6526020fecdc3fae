//! Core rules for a 6/45 numbers lottery round.
//!
//! A round goes through four steps:
//!
//! 1. **Purchase**: the player pays a positive multiple of [`TICKET_PRICE`]
//!    (at most [`MAX_PURCHASE_AMOUNT`]) and receives one ticket per price
//!    unit.
//! 2. **Generation**: every ticket is 6 distinct numbers drawn uniformly from
//!    1 to 45.
//! 3. **Draw**: 6 winning numbers plus one bonus number are declared.
//! 4. **Scoring**: each ticket is ranked against the draw and the round's
//!    yield (prize money / money spent) is computed.
//!
//! ## Rank Table
//!
//! | Rank   | Matches | Bonus    | Prize         |
//! |--------|---------|----------|---------------|
//! | First  | 6       | n/a      | 2,000,000,000 |
//! | Second | 5       | matched  | 30,000,000    |
//! | Third  | 5       | missed   | 1,500,000     |
//! | Fourth | 4       | n/a      | 50,000        |
//! | Fifth  | 3       | n/a      | 5,000         |
//!
//! Tickets with two or fewer matches have no rank.
//!
//! Nothing in this crate performs I/O. Inputs arrive as raw strings and every
//! rule violation is returned as a [`LottoError`].

pub mod error;
pub mod parse;

mod factory;
mod number;
mod profit;
mod purchase;
mod rank;
mod ticket;
mod winning;

pub use error::{ErrorKind, LottoError, LottoResult};
pub use factory::TicketFactory;
pub use number::{LottoNumber, MAX_NUMBER, MIN_NUMBER, NUMBERS_PER_TICKET};
pub use profit::ProfitMeter;
pub use purchase::{Purchase, MAX_PURCHASE_AMOUNT, TICKET_PRICE};
pub use rank::{calculate_ranks, Rank, RankTally};
pub use ticket::Ticket;
pub use winning::{BonusNumber, WinningDraw, WinningNumbers};
