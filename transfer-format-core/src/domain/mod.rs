//! Core domain entities
//!
//! Pure data structures with validation logic - no I/O or external dependencies.

mod address;
pub mod amount;
mod transfer;
pub mod result;

pub use address::Address;
pub use amount::{Amount, Wad};
pub use transfer::Transfer;
