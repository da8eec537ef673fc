//! CLI command implementations

pub mod config;
pub mod summary;
pub mod tokens;

use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;
use transfer_format_core::config::Config;
use transfer_format_core::Transfer;

/// Get the tfmt directory from environment or default
pub fn get_tfmt_dir() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var("TFMT_DIR") {
        return Ok(PathBuf::from(dir));
    }
    dirs::home_dir()
        .map(|home| home.join(".tfmt"))
        .context("Could not find home directory; set TFMT_DIR")
}

/// Load settings from the tfmt directory
pub fn load_config() -> Result<Config> {
    let dir = get_tfmt_dir()?;
    Config::load(&dir).with_context(|| format!("Failed to load settings from {:?}", dir))
}

/// Read transfer records from a file, or from stdin when it is piped
pub fn read_transfers(file: Option<&Path>) -> Result<Vec<Transfer>> {
    let content = if let Some(path) = file {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read transfers file: {:?}", path))?
    } else if atty::isnt(atty::Stream::Stdin) {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read transfers from stdin")?;
        buffer
    } else {
        anyhow::bail!("No transfers provided. Pass a JSON file or pipe records on stdin.");
    };

    parse_transfers(&content)
}

/// Parse a JSON array of `{ from, to, token, value }` records
fn parse_transfers(content: &str) -> Result<Vec<Transfer>> {
    let transfers: Vec<Transfer> =
        serde_json::from_str(content).context("Failed to parse transfer records")?;
    debug!(count = transfers.len(), "Read transfer records");
    Ok(transfers)
}
