//! Interactive round controller.
//!
//! Asks for the purchase amount, the winning numbers and the bonus number in
//! turn. An invalid answer prints an `[ERROR]` line and the same question is
//! asked again; errors that re-asking cannot fix end the round.

use std::io::{BufRead, Write};

use anyhow::{bail, Context, Result};
use bth_lotto::{
    calculate_ranks, BonusNumber, LottoResult, ProfitMeter, Purchase, RankTally, Ticket,
    TicketFactory, WinningDraw, WinningNumbers,
};
use rand::Rng;
use tracing::{info, warn};

use crate::config::LottoConfig;
use crate::formatter::{format_purchase, format_yield, WinningStatistics};

pub const PURCHASE_PROMPT: &str = "Enter the purchase amount.";
pub const WINNING_PROMPT: &str = "Enter the winning numbers.";
pub const BONUS_PROMPT: &str = "Enter the bonus number.";

/// Prefix of every error line shown to the player.
pub const ERROR_PREFIX: &str = "[ERROR]";

/// Answers supplied up front (e.g. from command-line flags).
///
/// An answer that fails validation is reported and the question is asked
/// interactively instead.
#[derive(Debug, Clone, Default)]
pub struct Presets {
    pub amount: Option<String>,
    pub winning: Option<String>,
    pub bonus: Option<String>,
}

/// Everything a finished round produced.
#[derive(Debug, Clone)]
pub struct RoundOutcome {
    pub purchase: Purchase,
    pub tickets: Vec<Ticket>,
    pub draw: WinningDraw,
    pub tally: RankTally,
    pub profit: ProfitMeter,
}

pub struct Controller<I, O, R> {
    input: I,
    output: O,
    factory: TicketFactory<R>,
    config: LottoConfig,
}

impl<I: BufRead, O: Write, R: Rng> Controller<I, O, R> {
    pub fn new(input: I, output: O, factory: TicketFactory<R>, config: LottoConfig) -> Self {
        Self {
            input,
            output,
            factory,
            config,
        }
    }

    /// Play one full round.
    pub fn run(&mut self, presets: Presets) -> Result<RoundOutcome> {
        let purchase = self.ask(PURCHASE_PROMPT, presets.amount, Purchase::parse)?;
        let tickets = self.factory.generate(purchase.ticket_count())?;
        info!(
            amount = purchase.amount(),
            tickets = tickets.len(),
            "purchased tickets"
        );
        self.print_tickets(&tickets)?;

        let winning = self.ask(WINNING_PROMPT, presets.winning, WinningNumbers::parse)?;
        let bonus = self.ask(BONUS_PROMPT, presets.bonus, |text| {
            BonusNumber::parse(&winning, text)
        })?;
        let draw = WinningDraw::new(winning, bonus)?;

        let tally = calculate_ranks(&tickets, &draw);
        let profit = ProfitMeter::new(&tally, purchase.ticket_count())?;
        info!(
            winners = tally.winning_tickets(),
            prize = profit.total_prize(),
            "round finished"
        );
        self.print_results(&tally, &profit)?;

        Ok(RoundOutcome {
            purchase,
            tickets,
            draw,
            tally,
            profit,
        })
    }

    /// Ask `question` until `parse` accepts the answer.
    fn ask<T>(
        &mut self,
        question: &str,
        preset: Option<String>,
        parse: impl Fn(&str) -> LottoResult<T>,
    ) -> Result<T> {
        let mut failures = 0u32;
        if let Some(answer) = preset {
            match parse(&answer) {
                Ok(value) => return Ok(value),
                Err(err) if err.is_recoverable() => self.reject(&err, &mut failures, question)?,
                Err(err) => return Err(err.into()),
            }
        }

        loop {
            writeln!(self.output, "{question}")?;
            self.output.flush()?;

            let answer = self.read_line()?;
            match parse(&answer) {
                Ok(value) => {
                    writeln!(self.output)?;
                    return Ok(value);
                }
                Err(err) if err.is_recoverable() => self.reject(&err, &mut failures, question)?,
                Err(err) => return Err(err.into()),
            }
        }
    }

    /// Report an invalid answer and enforce `input.max_attempts`.
    fn reject(
        &mut self,
        err: &bth_lotto::LottoError,
        failures: &mut u32,
        question: &str,
    ) -> Result<()> {
        self.report(err)?;
        *failures += 1;
        if let Some(max) = self.config.input.max_attempts {
            if *failures >= max {
                bail!("Gave up after {failures} invalid answers to {question:?}");
            }
        }
        Ok(())
    }

    fn report(&mut self, err: &bth_lotto::LottoError) -> Result<()> {
        warn!(code = err.code(), "rejected input");
        writeln!(self.output, "{ERROR_PREFIX} {err}")?;
        Ok(())
    }

    fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read input")?;
        if read == 0 {
            bail!("Input closed before a valid answer was given");
        }
        Ok(line.trim_end_matches(|c| c == '\n' || c == '\r').to_string())
    }

    fn print_tickets(&mut self, tickets: &[Ticket]) -> Result<()> {
        writeln!(self.output, "{}", format_purchase(tickets))?;
        if self.config.output.show_tickets {
            for ticket in tickets {
                writeln!(self.output, "{ticket}")?;
            }
        }
        writeln!(self.output)?;
        Ok(())
    }

    fn print_results(&mut self, tally: &RankTally, profit: &ProfitMeter) -> Result<()> {
        writeln!(self.output, "{}", WinningStatistics::from_tally(tally))?;
        writeln!(
            self.output,
            "{}",
            format_yield(profit, self.config.output.yield_decimals)
        )?;
        self.output.flush()?;
        Ok(())
    }

    /// Give back the output sink, e.g. to inspect what was written.
    pub fn into_output(self) -> O {
        self.output
    }
}
