//! Interactive round on the terminal

use anyhow::Result;
use bth_lotto::TicketFactory;
use std::io;

use crate::config::LottoConfig;
use crate::controller::{Controller, Presets};

/// Run the play command
pub fn run(config: &LottoConfig, presets: Presets) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();

    let mut controller = Controller::new(
        stdin.lock(),
        stdout.lock(),
        TicketFactory::from_entropy(),
        config.clone(),
    );
    controller.run(presets)?;
    Ok(())
}
