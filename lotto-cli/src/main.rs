//! Lotto CLI
//!
//! Buy tickets, declare a draw and see how much came back.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use lotto_cli::{commands, LottoConfig, Presets};

#[derive(Parser)]
#[command(name = "lotto")]
#[command(about = "Play a 6/45 lotto round")]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive round (default)
    Play {
        /// Purchase amount, skips the first prompt
        #[arg(long, allow_hyphen_values = true)]
        amount: Option<String>,

        /// Winning numbers, e.g. "1,2,3,4,5,6"
        #[arg(long)]
        winning: Option<String>,

        /// Bonus number
        #[arg(long, allow_hyphen_values = true)]
        bonus: Option<String>,
    },

    /// Score the given tickets against a draw
    Check {
        /// Winning numbers, e.g. "1,2,3,4,5,6"
        #[arg(short, long)]
        winning: String,

        /// Bonus number
        #[arg(short, long, allow_hyphen_values = true)]
        bonus: String,

        /// Tickets to score, each a comma-separated list of six numbers
        #[arg(required = true)]
        tickets: Vec<String>,
    },

    /// Write a default configuration file
    InitConfig {
        /// Output file path
        #[arg(short, long, default_value = "lotto.toml")]
        output: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => LottoConfig::load(path)?,
        None => LottoConfig::default(),
    };

    // Initialize logging
    let filter = if cli.verbose {
        "debug"
    } else {
        config.logging.level.as_str()
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let command = cli.command.unwrap_or(Commands::Play {
        amount: None,
        winning: None,
        bonus: None,
    });

    match command {
        Commands::Play {
            amount,
            winning,
            bonus,
        } => commands::play::run(
            &config,
            Presets {
                amount,
                winning,
                bonus,
            },
        ),
        Commands::Check {
            winning,
            bonus,
            tickets,
        } => commands::check::run(&config, &winning, &bonus, &tickets),
        Commands::InitConfig { output, force } => commands::init_config::run(&output, force),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_accepts_negative_bonus() {
        let cli = Cli::try_parse_from([
            "lotto",
            "check",
            "-w",
            "1,2,3,4,5,6",
            "-b",
            "-5",
            "1,2,3,4,5,7",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::Check { bonus, tickets, .. }) => {
                assert_eq!(bonus, "-5");
                assert_eq!(tickets, vec!["1,2,3,4,5,7".to_string()]);
            }
            _ => panic!("expected check command"),
        }
    }

    #[test]
    fn test_play_is_optional() {
        let cli = Cli::try_parse_from(["lotto", "--verbose"]).unwrap();
        assert!(cli.verbose);
        assert!(cli.command.is_none());
    }
}
