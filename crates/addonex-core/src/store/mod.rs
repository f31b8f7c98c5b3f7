//! Record store boundary.
//!
//! - [`RecordStore`]: the capability the scanner consumes
//! - [`MemoryStore`]: in-memory implementation, loadable from a JSON snapshot
//! - [`RecordGraph`]: typed lookup and script accessors over any store

mod graph;
mod memory;

pub use graph::RecordGraph;
pub use memory::{MemoryStore, MemoryStoreBuilder, StoreSnapshot};

use serde::{Deserialize, Serialize};

use crate::record::{Record, RecordKey, RecordKind};

/// Header of the plugin being scanned
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginHeader {
    pub file_name: String,
    #[serde(default)]
    pub is_master: bool,
    #[serde(default)]
    pub is_light: bool,
    #[serde(default)]
    pub masters: Vec<String>,
}

impl PluginHeader {
    pub fn new(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            ..Default::default()
        }
    }
}

/// Read access to a loaded plugin and everything it can reference.
///
/// Implementations have already materialized master and load-order
/// relationships; `resolve` looks across every loaded file. Records missing
/// because an optional dependency was not loaded simply do not resolve.
pub trait RecordStore {
    fn header(&self) -> &PluginHeader;

    fn resolve(&self, key: &RecordKey) -> Option<&Record>;

    /// Records of one kind owned by the scanned plugin, in store order
    fn plugin_records(&self, kind: RecordKind) -> Vec<&Record>;
}
