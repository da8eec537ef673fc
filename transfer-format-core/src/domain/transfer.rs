//! Transfer domain model

use serde::{Deserialize, Serialize};

use super::address::Address;
use super::amount::{Amount, Wad};

/// A single token movement from one address to another.
///
/// `value` is the non-negative amount moved, in the token's own units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transfer<A = Wad> {
    #[serde(rename = "from")]
    pub from_address: Address,
    #[serde(rename = "to")]
    pub to_address: Address,
    #[serde(rename = "token")]
    pub token_address: Address,
    pub value: A,
}

impl<A: Amount> Transfer<A> {
    pub fn new(token_address: Address, from_address: Address, to_address: Address, value: A) -> Self {
        Self {
            from_address,
            to_address,
            token_address,
            value,
        }
    }

    /// Signed effect of this transfer on the balance of `our_address`.
    ///
    /// Outflows are negative, inflows positive. Self-transfers and transfers
    /// between two other parties contribute zero. Returns `None` only if the
    /// amount type cannot negate `value`.
    pub fn net_value(&self, our_address: &Address) -> Option<A> {
        let outgoing = self.from_address == *our_address;
        let incoming = self.to_address == *our_address;

        match (outgoing, incoming) {
            (true, true) => Some(A::zero()),
            (true, false) => self.value.checked_neg(),
            (false, true) => Some(self.value.clone()),
            (false, false) => Some(A::zero()),
        }
    }
}
