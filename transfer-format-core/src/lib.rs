//! transfer-format core - per-token summaries of token transfers
//!
//! - **domain**: addresses, exact amounts, transfer records, errors
//! - **services**: the transfer formatter and token symbol lookup
//! - **config**: settings.json loading for callers that want persisted symbols

pub mod config;
pub mod domain;
pub mod services;

// Re-export commonly used types at crate root
pub use domain::result::{Error, FormatError, Result};
pub use domain::{Address, Amount, Transfer, Wad};
pub use services::{TokenNames, TokenTotal, TransferFormatter};
