//! Terminal output shared by the commands

use colored::Colorize;
use comfy_table::{presets::UTF8_FULL_CONDENSED, ContentArrangement, Table};

/// How a status line is presented
#[derive(Debug, Clone, Copy)]
pub enum Tone {
    /// A change was saved
    Done,
    /// Nothing to report
    Quiet,
    /// The command failed; goes to stderr
    Failure,
}

pub fn say(tone: Tone, msg: &str) {
    match tone {
        Tone::Done => println!("{}", msg.green()),
        Tone::Quiet => println!("{}", msg.dimmed()),
        Tone::Failure => eprintln!("{}", msg.red()),
    }
}

/// Condensed table with the given column headers
pub fn table(header: &[&str]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header.to_vec());
    table
}
