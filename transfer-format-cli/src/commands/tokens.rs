//! Tokens command - list configured token symbols

use anyhow::Result;
use colored::Colorize;

use super::load_config;
use crate::output::{self, Tone};

pub fn run(json: bool) -> Result<()> {
    let config = load_config()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&config.tokens)?);
        return Ok(());
    }

    if config.tokens.is_empty() {
        output::say(
            Tone::Quiet,
            "No tokens configured. Add one with `tfmt config add-token <ADDRESS> <SYMBOL>`.",
        );
        return Ok(());
    }

    println!("{}", "Token Symbols".bold());
    let mut table = output::table(&["Address", "Symbol"]);
    for (address, symbol) in config.tokens.iter() {
        table.add_row(vec![address.as_str(), symbol]);
    }
    println!("{}", table);

    Ok(())
}
