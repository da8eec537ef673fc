//! Configuration management
//!
//! Settings live in `settings.json` inside the tfmt directory:
//! ```json
//! {
//!   "ourAddress": "0x...",
//!   "tokens": { "0x6b175474e89094c44da98b954eedeac495271d0f": "DAI" }
//! }
//! ```

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::result::{Error, Result};
use crate::domain::Address;
use crate::services::TokenNames;

/// Environment variable that overrides `ourAddress` from the settings file
pub const OUR_ADDRESS_ENV: &str = "TFMT_OUR_ADDRESS";

const SETTINGS_FILE: &str = "settings.json";

/// Raw settings.json structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SettingsFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    our_address: Option<String>,
    #[serde(default)]
    tokens: BTreeMap<String, String>,
    #[serde(flatten)]
    other: HashMap<String, serde_json::Value>,
}

/// tfmt configuration (validated view of settings)
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Address whose net position `format_net` reports by default
    pub our_address: Option<Address>,
    pub tokens: TokenNames,
}

impl Config {
    /// Load config from the tfmt directory
    ///
    /// A missing settings file yields the defaults. The observer address can
    /// be overridden with `TFMT_OUR_ADDRESS`.
    pub fn load(dir: &Path) -> Result<Self> {
        let raw = read_settings(dir)?;
        let env_address = std::env::var(OUR_ADDRESS_ENV).ok();
        Self::from_settings(raw, env_address.as_deref())
    }

    fn from_settings(raw: SettingsFile, env_address: Option<&str>) -> Result<Self> {
        let our_address = env_address
            .filter(|s| !s.trim().is_empty())
            .or(raw.our_address.as_deref())
            .map(Address::parse)
            .transpose()
            .map_err(|e| Error::config(format!("ourAddress: {}", e)))?;

        let tokens = raw
            .tokens
            .into_iter()
            .map(|(address, symbol)| {
                Address::parse(&address)
                    .map(|a| (a, symbol))
                    .map_err(|e| Error::config(format!("tokens: {}", e)))
            })
            .collect::<Result<TokenNames>>()?;

        debug!(tokens = tokens.len(), has_address = our_address.is_some(), "Loaded config");
        Ok(Self { our_address, tokens })
    }

    /// Save config to the tfmt directory
    /// Preserves other settings that tfmt doesn't manage
    pub fn save(&self, dir: &Path) -> Result<()> {
        let mut settings = read_settings(dir)?;

        settings.our_address = self.our_address.as_ref().map(Address::to_string);
        settings.tokens = self
            .tokens
            .iter()
            .map(|(address, symbol)| (address.to_string(), symbol.to_string()))
            .collect();

        let content = serde_json::to_string_pretty(&settings)?;
        std::fs::write(dir.join(SETTINGS_FILE), content)?;
        Ok(())
    }
}

fn read_settings(dir: &Path) -> Result<SettingsFile> {
    let settings_path = dir.join(SETTINGS_FILE);
    if !settings_path.exists() {
        return Ok(SettingsFile::default());
    }

    let content = std::fs::read_to_string(&settings_path)?;
    Ok(serde_json::from_str(&content)?)
}
