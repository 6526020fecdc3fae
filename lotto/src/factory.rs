//! Random ticket generation.

use rand::{rngs::ThreadRng, seq::index, Rng};
use tracing::debug;

use crate::{
    LottoError, LottoNumber, LottoResult, Ticket, MAX_NUMBER, MIN_NUMBER, NUMBERS_PER_TICKET,
};

/// Draws tickets from an injected random source.
///
/// Each ticket holds distinct numbers; separate tickets are drawn
/// independently and may repeat each other.
pub struct TicketFactory<R> {
    rng: R,
}

impl TicketFactory<ThreadRng> {
    /// Factory backed by the thread-local OS-seeded generator.
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng())
    }
}

impl<R: Rng> TicketFactory<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Generate `count` independent tickets.
    pub fn generate(&mut self, count: u64) -> LottoResult<Vec<Ticket>> {
        if count == 0 {
            return Err(LottoError::InvalidTicketCount(count));
        }

        let tickets = (0..count)
            .map(|_| self.draw())
            .collect::<LottoResult<Vec<_>>>()?;
        debug!(count, "generated tickets");
        Ok(tickets)
    }

    /// Draw a single ticket uniformly from all 6-of-45 combinations.
    pub fn draw(&mut self) -> LottoResult<Ticket> {
        let pool = usize::from(MAX_NUMBER - MIN_NUMBER) + 1;
        let numbers = index::sample(&mut self.rng, pool, NUMBERS_PER_TICKET)
            .into_iter()
            .map(|offset| LottoNumber::new(offset as i64 + i64::from(MIN_NUMBER)))
            .collect::<LottoResult<Vec<_>>>()?;
        Ticket::from_lotto_numbers(numbers)
    }
}
