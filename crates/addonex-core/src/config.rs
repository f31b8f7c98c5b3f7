//! Scan configuration, loaded from TOML.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::Result;
use crate::known;
use crate::record::RecordKey;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Log item kinds and script names the scanner does not export
    pub log_unknown: bool,
    /// Editor id of the classifying tag whose lists are excluded wholesale
    pub territory_traits_tag: String,
    /// Form-lists walked after the addon traversal, as `XXXXXX:File.esm`
    pub supplemental_lists: Vec<String>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            log_unknown: false,
            territory_traits_tag: known::TERRITORY_TRAITS_TAG.to_string(),
            supplemental_lists: known::HQ_ACTION_LISTS
                .iter()
                .map(|k| k.key().to_string())
                .collect(),
        }
    }
}

impl ScanConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Parsed supplemental list keys; malformed entries are dropped with a warning
    pub fn supplemental_list_keys(&self) -> Vec<RecordKey> {
        self.supplemental_lists
            .iter()
            .filter_map(|s| match s.parse() {
                Ok(key) => Some(key),
                Err(e) => {
                    warn!("Ignoring supplemental list: {}", e);
                    None
                }
            })
            .collect()
    }
}
