//! Token symbol lookup backed by a static address -> symbol table

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::Address;

/// Maps token addresses to display symbols.
///
/// Tokens without an entry are shown by their address.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TokenNames {
    symbols: BTreeMap<Address, String>,
}

impl TokenNames {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) the symbol for a token
    pub fn insert(&mut self, token: Address, symbol: impl Into<String>) {
        self.symbols.insert(token, symbol.into());
    }

    pub fn get(&self, token: &Address) -> Option<&str> {
        self.symbols.get(token).map(String::as_str)
    }

    /// Display name for `token`, falling back to its address
    pub fn resolve(&self, token: &Address) -> String {
        self.get(token)
            .map(str::to_string)
            .unwrap_or_else(|| token.to_string())
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Entries in ascending address order
    pub fn iter(&self) -> impl Iterator<Item = (&Address, &str)> {
        self.symbols.iter().map(|(a, s)| (a, s.as_str()))
    }
}

impl FromIterator<(Address, String)> for TokenNames {
    fn from_iter<T: IntoIterator<Item = (Address, String)>>(iter: T) -> Self {
        Self {
            symbols: iter.into_iter().collect(),
        }
    }
}
