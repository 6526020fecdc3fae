//! Return rate of a round.

use crate::{LottoError, LottoResult, RankTally, TICKET_PRICE};

/// Prize money won against money spent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProfitMeter {
    total_prize: u64,
    total_spent: u64,
}

impl ProfitMeter {
    /// Measure a round in which `ticket_count` tickets were bought.
    ///
    /// A zero ticket count cannot come out of a validated purchase and is
    /// reported as [`LottoError::DivisionByZero`].
    pub fn new(tally: &RankTally, ticket_count: u64) -> LottoResult<Self> {
        if ticket_count == 0 {
            return Err(LottoError::DivisionByZero);
        }
        Ok(Self {
            total_prize: tally.total_prize(),
            total_spent: ticket_count.saturating_mul(TICKET_PRICE),
        })
    }

    pub fn total_prize(&self) -> u64 {
        self.total_prize
    }

    pub fn total_spent(&self) -> u64 {
        self.total_spent
    }

    /// `total_prize / total_spent`, unrounded.
    pub fn yield_ratio(&self) -> f64 {
        self.total_prize as f64 / self.total_spent as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Rank;

    fn tally(ranked: &[Rank], unranked: usize) -> RankTally {
        ranked
            .iter()
            .copied()
            .map(Some)
            .chain(std::iter::repeat(None).take(unranked))
            .collect()
    }

    #[test]
    fn test_one_fifth_in_ten_tickets() {
        let meter = ProfitMeter::new(&tally(&[Rank::Fifth], 9), 10).unwrap();
        assert_eq!(meter.total_prize(), 5_000);
        assert_eq!(meter.total_spent(), 10_000);
        assert_eq!(meter.yield_ratio(), 0.5);
    }

    #[test]
    fn test_no_winners_yield_zero() {
        let meter = ProfitMeter::new(&tally(&[], 3), 3).unwrap();
        assert_eq!(meter.yield_ratio(), 0.0);
    }

    #[test]
    fn test_yield_above_one() {
        let meter = ProfitMeter::new(&tally(&[Rank::Fourth], 1), 2).unwrap();
        assert_eq!(meter.yield_ratio(), 25.0);
    }

    #[test]
    fn test_unrounded() {
        let meter = ProfitMeter::new(&tally(&[Rank::Fifth], 7), 8).unwrap();
        assert_eq!(meter.yield_ratio(), 0.625);

        let meter = ProfitMeter::new(&tally(&[Rank::Fifth], 2), 3).unwrap();
        assert!((meter.yield_ratio() - 5.0 / 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_zero_tickets() {
        assert_eq!(
            ProfitMeter::new(&RankTally::new(), 0),
            Err(LottoError::DivisionByZero)
        );
    }
}
