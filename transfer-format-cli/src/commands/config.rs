//! Config command - edit settings.json

use anyhow::{Context, Result};
use clap::Subcommand;
use transfer_format_core::Address;

use super::{get_tfmt_dir, load_config};
use crate::output::{self, Tone};

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Set the default address for `tfmt net`
    SetAddress {
        /// Account address
        address: String,
    },
    /// Register a display symbol for a token
    AddToken {
        /// Token contract address
        address: String,
        /// Symbol to display, e.g. DAI
        symbol: String,
    },
}

pub fn run(command: ConfigCommands) -> Result<()> {
    let dir = get_tfmt_dir()?;
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create tfmt directory: {:?}", dir))?;

    let mut config = load_config()?;

    let message = match command {
        ConfigCommands::SetAddress { address } => {
            let address = Address::parse(&address)?;
            let message = format!("Default address set to {}", address);
            config.our_address = Some(address);
            message
        }
        ConfigCommands::AddToken { address, symbol } => {
            let address = Address::parse(&address)?;
            let message = format!("{} is now shown as {}", address, symbol);
            config.tokens.insert(address, symbol);
            message
        }
    };

    config
        .save(&dir)
        .with_context(|| format!("Failed to save settings to {:?}", dir))?;
    output::say(Tone::Done, &message);
    Ok(())
}
