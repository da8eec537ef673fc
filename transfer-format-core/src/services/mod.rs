//! Service layer - formatting logic
//!
//! Services hold no I/O; callers supply transfers and name lookups.

mod formatter;
mod token_names;

pub use formatter::{TokenTotal, TransferFormatter};
pub use token_names::TokenNames;
