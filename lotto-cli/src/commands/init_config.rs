//! Write a default configuration file

use anyhow::{bail, Result};
use std::path::Path;

use crate::config::LottoConfig;

/// Run the init-config command
pub fn run(output: &Path, force: bool) -> Result<()> {
    if output.exists() && !force {
        bail!(
            "Config file already exists at {} (use --force to overwrite)",
            output.display()
        );
    }

    LottoConfig::default().save(output)?;
    println!("Config written to {}", output.display());
    Ok(())
}
