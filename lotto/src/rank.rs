//! Ranking tickets against a draw.

use std::{collections::BTreeMap, fmt};

use tracing::debug;

use crate::{Ticket, WinningDraw};

/// Prize tiers, best first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    First,
    Second,
    Third,
    Fourth,
    Fifth,
}

impl Rank {
    /// All ranks from the smallest prize to the largest.
    pub const ALL: [Rank; 5] = [
        Rank::Fifth,
        Rank::Fourth,
        Rank::Third,
        Rank::Second,
        Rank::First,
    ];

    /// Rank for a ticket with `match_count` winning numbers.
    ///
    /// `bonus_matched` only decides between second and third place; at any
    /// other match count it has no effect.
    pub fn from_match(match_count: usize, bonus_matched: bool) -> Option<Self> {
        match (match_count, bonus_matched) {
            (6, _) => Some(Rank::First),
            (5, true) => Some(Rank::Second),
            (5, false) => Some(Rank::Third),
            (4, _) => Some(Rank::Fourth),
            (3, _) => Some(Rank::Fifth),
            _ => None,
        }
    }

    /// Winning numbers a ticket must share to reach this rank.
    pub const fn match_count(self) -> usize {
        match self {
            Rank::First => 6,
            Rank::Second | Rank::Third => 5,
            Rank::Fourth => 4,
            Rank::Fifth => 3,
        }
    }

    pub const fn requires_bonus(self) -> bool {
        matches!(self, Rank::Second)
    }

    /// Prize per ticket, in currency units.
    pub const fn prize(self) -> u64 {
        match self {
            Rank::First => 2_000_000_000,
            Rank::Second => 30_000_000,
            Rank::Third => 1_500_000,
            Rank::Fourth => 50_000,
            Rank::Fifth => 5_000,
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Rank::First => "first",
            Rank::Second => "second",
            Rank::Third => "third",
            Rank::Fourth => "fourth",
            Rank::Fifth => "fifth",
        };
        write!(f, "{name}")
    }
}

/// Per-rank ticket counts for one round.
///
/// Only ranks won by at least one ticket are stored; tickets without a rank
/// count toward [`RankTally::total_tickets`] only.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RankTally {
    counts: BTreeMap<Rank, u64>,
    total_tickets: u64,
}

impl RankTally {
    pub fn new() -> Self {
        Self::default()
    }

    fn record(&mut self, rank: Option<Rank>) {
        self.total_tickets += 1;
        if let Some(rank) = rank {
            *self.counts.entry(rank).or_insert(0) += 1;
        }
    }

    /// Tickets that reached `rank`. A rank nobody reached counts as zero.
    pub fn count(&self, rank: Rank) -> u64 {
        self.counts.get(&rank).copied().unwrap_or(0)
    }

    /// All scored tickets, ranked or not.
    pub fn total_tickets(&self) -> u64 {
        self.total_tickets
    }

    pub fn winning_tickets(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Sum of prizes over all ranked tickets.
    pub fn total_prize(&self) -> u64 {
        self.counts
            .iter()
            .fold(0u64, |total, (rank, &count)| {
                total.saturating_add(rank.prize().saturating_mul(count))
            })
    }

    /// Ranks reached by at least one ticket, best first.
    pub fn iter(&self) -> impl Iterator<Item = (Rank, u64)> + '_ {
        self.counts.iter().map(|(&rank, &count)| (rank, count))
    }
}

impl FromIterator<Option<Rank>> for RankTally {
    fn from_iter<I: IntoIterator<Item = Option<Rank>>>(ranks: I) -> Self {
        let mut tally = RankTally::new();
        for rank in ranks {
            tally.record(rank);
        }
        tally
    }
}

/// Score every ticket against the draw.
pub fn calculate_ranks(tickets: &[Ticket], draw: &WinningDraw) -> RankTally {
    let tally: RankTally = tickets.iter().map(|ticket| draw.rank_of(ticket)).collect();
    debug!(
        tickets = tally.total_tickets(),
        winners = tally.winning_tickets(),
        prize = tally.total_prize(),
        "ranked tickets"
    );
    tally
}
