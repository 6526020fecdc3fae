//! Score hand-picked tickets against a draw

use anyhow::{Context, Result};
use bth_lotto::{
    calculate_ranks, BonusNumber, ProfitMeter, RankTally, Ticket, WinningDraw, WinningNumbers,
};
use std::io::{self, Write};
use tracing::debug;

use crate::config::LottoConfig;
use crate::formatter::{format_yield, WinningStatistics};

/// Run the check command
pub fn run(config: &LottoConfig, winning: &str, bonus: &str, tickets: &[String]) -> Result<()> {
    let stdout = io::stdout();
    run_with_output(config, winning, bonus, tickets, &mut stdout.lock()).map(|_| ())
}

/// Score `tickets` and write the statistics to `out`.
pub fn run_with_output<W: Write>(
    config: &LottoConfig,
    winning: &str,
    bonus: &str,
    tickets: &[String],
    out: &mut W,
) -> Result<RankTally> {
    let numbers = WinningNumbers::parse(winning)
        .with_context(|| format!("Invalid winning numbers {winning:?}"))?;
    let bonus = BonusNumber::parse(&numbers, bonus)
        .with_context(|| format!("Invalid bonus number {bonus:?}"))?;
    let draw = WinningDraw::new(numbers, bonus)?;

    let tickets = tickets
        .iter()
        .map(|text| Ticket::parse(text).with_context(|| format!("Invalid ticket {text:?}")))
        .collect::<Result<Vec<_>>>()?;
    debug!(tickets = tickets.len(), "checking tickets");

    let tally = calculate_ranks(&tickets, &draw);
    let profit = ProfitMeter::new(&tally, tickets.len() as u64)?;

    for ticket in &tickets {
        match draw.rank_of(ticket) {
            Some(rank) => writeln!(out, "{ticket} -> {rank}")?,
            None => writeln!(out, "{ticket} -> no prize")?,
        }
    }
    writeln!(out)?;
    writeln!(out, "{}", WinningStatistics::from_tally(&tally))?;
    writeln!(out, "{}", format_yield(&profit, config.output.yield_decimals))?;

    Ok(tally)
}
