//! Lotto Shell
//!
//! Terminal front end for [`bth_lotto`]: reads the player's answers, re-asks
//! on invalid input, and prints the purchased tickets, the winning statistics
//! and the return rate.

pub mod commands;
pub mod config;
pub mod controller;
pub mod formatter;

pub use config::LottoConfig;
pub use controller::{Controller, Presets, RoundOutcome};
pub use formatter::WinningStatistics;
