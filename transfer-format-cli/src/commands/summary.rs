//! Gross and net summary commands

use std::path::Path;

use anyhow::{Context, Result};
use comfy_table::{Cell, CellAlignment};
use serde::Serialize;
use transfer_format_core::{Address, TokenNames, TokenTotal, TransferFormatter, Wad};

use super::{load_config, read_transfers};
use crate::output::{self, Tone};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Sentence,
    Json,
    Table,
}

impl OutputFormat {
    pub fn from_flags(json: bool, table: bool) -> Self {
        if json {
            OutputFormat::Json
        } else if table {
            OutputFormat::Table
        } else {
            OutputFormat::Sentence
        }
    }
}

#[derive(Debug, Serialize)]
struct SummaryRow {
    token: Address,
    symbol: String,
    total: Wad,
}

#[derive(Debug, Serialize)]
struct SummaryReport {
    mode: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    address: Option<Address>,
    summary: String,
    totals: Vec<SummaryRow>,
}

pub fn run_gross(file: Option<&Path>, format: OutputFormat) -> Result<()> {
    let config = load_config()?;
    let transfers = read_transfers(file)?;
    let formatter = TransferFormatter::new();

    let totals = formatter.summarize(&transfers)?;
    let summary = formatter.render(&totals, |t| config.tokens.resolve(t));

    print_report(
        SummaryReport {
            mode: "gross",
            address: None,
            summary,
            totals: rows(totals, &config.tokens),
        },
        format,
    )
}

pub fn run_net(file: Option<&Path>, address: Option<&str>, format: OutputFormat) -> Result<()> {
    let config = load_config()?;
    let our_address = match address {
        Some(a) => Address::parse(a).with_context(|| format!("Invalid --address {:?}", a))?,
        None => config
            .our_address
            .clone()
            .context("No address given. Pass --address or set ourAddress in settings.json")?,
    };

    let transfers = read_transfers(file)?;
    let formatter = TransferFormatter::new();

    let totals = formatter.summarize_net(&transfers, &our_address)?;
    let summary = formatter.render(&totals, |t| config.tokens.resolve(t));

    print_report(
        SummaryReport {
            mode: "net",
            address: Some(our_address),
            summary,
            totals: rows(totals, &config.tokens),
        },
        format,
    )
}

fn rows(totals: Vec<TokenTotal<Wad>>, names: &TokenNames) -> Vec<SummaryRow> {
    totals
        .into_iter()
        .map(|t| SummaryRow {
            symbol: names.resolve(&t.token),
            token: t.token,
            total: t.total,
        })
        .collect()
}

fn print_report(report: SummaryReport, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Table => {
            let mut table = output::table(&["Token", "Symbol", "Total"]);
            for row in &report.totals {
                table.add_row(vec![
                    Cell::new(&row.token),
                    Cell::new(&row.symbol),
                    Cell::new(&row.total).set_alignment(CellAlignment::Right),
                ]);
            }
            println!("{}", table);
        }
        OutputFormat::Sentence if report.summary.is_empty() => {
            let note = match report.mode {
                "net" => "No net change",
                _ => "No transfers",
            };
            output::say(Tone::Quiet, note);
        }
        OutputFormat::Sentence => {
            println!("{}", report.summary);
        }
    }

    Ok(())
}
