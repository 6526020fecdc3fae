//! Presentation of round results.

use std::fmt;

use bth_lotto::{ProfitMeter, Rank, RankTally, Ticket};

/// Currency suffix printed after prize amounts.
pub const CURRENCY: &str = "KRW";

/// One row of the winning statistics.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatisticsLine {
    pub rank: Rank,
    pub count: u64,
}

impl fmt::Display for StatisticsLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bonus = if self.rank.requires_bonus() {
            " + bonus ball"
        } else {
            ""
        };
        write!(
            f,
            "{} matches{} ({} {}) - {} tickets",
            self.rank.match_count(),
            bonus,
            format_amount(self.rank.prize()),
            CURRENCY,
            self.count
        )
    }
}

/// Winning statistics for every rank, smallest prize first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WinningStatistics {
    lines: Vec<StatisticsLine>,
}

impl WinningStatistics {
    pub fn from_tally(tally: &RankTally) -> Self {
        let lines = Rank::ALL
            .iter()
            .map(|&rank| StatisticsLine {
                rank,
                count: tally.count(rank),
            })
            .collect();
        Self { lines }
    }

    pub fn lines(&self) -> &[StatisticsLine] {
        &self.lines
    }
}

impl fmt::Display for WinningStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Winning statistics")?;
        write!(f, "---")?;
        for line in &self.lines {
            write!(f, "\n{line}")?;
        }
        Ok(())
    }
}

/// Format an amount with thousands separators, e.g. `2,000,000,000`.
pub fn format_amount(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Format the return rate as a percentage with `decimals` decimal places.
pub fn format_yield(profit: &ProfitMeter, decimals: u8) -> String {
    format!(
        "Total return rate is {:.*}%.",
        usize::from(decimals),
        profit.yield_ratio() * 100.0
    )
}

pub fn format_purchase(tickets: &[Ticket]) -> String {
    format!("{} tickets purchased.", tickets.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tally(ranks: &[Option<Rank>]) -> RankTally {
        ranks.iter().copied().collect()
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(0), "0");
        assert_eq!(format_amount(999), "999");
        assert_eq!(format_amount(5_000), "5,000");
        assert_eq!(format_amount(1_500_000), "1,500,000");
        assert_eq!(format_amount(2_000_000_000), "2,000,000,000");
    }

    #[test]
    fn test_statistics_list_every_rank() {
        let stats = WinningStatistics::from_tally(&tally(&[Some(Rank::Fifth), None]));
        let ranks: Vec<Rank> = stats.lines().iter().map(|l| l.rank).collect();
        assert_eq!(ranks, Rank::ALL.to_vec());
        assert_eq!(stats.lines()[0].count, 1);
        assert!(stats.lines()[1..].iter().all(|l| l.count == 0));
    }

    #[test]
    fn test_statistics_text() {
        let stats = WinningStatistics::from_tally(&tally(&[
            Some(Rank::Fifth),
            Some(Rank::Second),
            None,
        ]));
        let expected = "\
Winning statistics
---
3 matches (5,000 KRW) - 1 tickets
4 matches (50,000 KRW) - 0 tickets
5 matches (1,500,000 KRW) - 0 tickets
5 matches + bonus ball (30,000,000 KRW) - 1 tickets
6 matches (2,000,000,000 KRW) - 0 tickets";
        assert_eq!(stats.to_string(), expected);
    }

    #[test]
    fn test_format_yield() {
        let mut ranks = vec![Some(Rank::Fifth)];
        ranks.extend(std::iter::repeat(None).take(7));
        let profit = ProfitMeter::new(&tally(&ranks), 8).unwrap();

        assert_eq!(format_yield(&profit, 1), "Total return rate is 62.5%.");
        assert_eq!(format_yield(&profit, 2), "Total return rate is 62.50%.");
    }

    #[test]
    fn test_format_yield_zero() {
        let profit = ProfitMeter::new(&tally(&[None]), 1).unwrap();
        assert_eq!(format_yield(&profit, 1), "Total return rate is 0.0%.");
    }
}
