use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{PluginHeader, RecordStore};
use crate::error::{Error, Result};
use crate::record::{Record, RecordKey, RecordKind};

/// On-disk snapshot written by the plugin loader
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreSnapshot {
    pub header: PluginHeader,
    /// Every plugin file the loader managed to load, masters included
    #[serde(default)]
    pub loaded_files: Vec<String>,
    #[serde(default)]
    pub records: Vec<Record>,
}

/// Record store held entirely in memory.
///
/// Records keep their insertion order, which is the order
/// [`RecordStore::plugin_records`] yields them in.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    header: PluginHeader,
    records: Vec<Record>,
    index: HashMap<RecordKey, usize>,
}

impl MemoryStore {
    pub fn builder(file_name: impl Into<String>) -> MemoryStoreBuilder {
        MemoryStoreBuilder::new(file_name)
    }

    /// Load a snapshot file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let snapshot: StoreSnapshot = serde_json::from_str(&content)?;
        Self::from_snapshot(snapshot)
    }

    /// Build a store from a snapshot, checking that every master was loaded
    pub fn from_snapshot(snapshot: StoreSnapshot) -> Result<Self> {
        let StoreSnapshot {
            header,
            loaded_files,
            records,
        } = snapshot;

        if let Some(master) = header
            .masters
            .iter()
            .find(|m| !loaded_files.iter().any(|f| f.eq_ignore_ascii_case(m)))
        {
            return Err(Error::MissingMaster {
                plugin: header.file_name.clone(),
                master: master.clone(),
            });
        }

        Self::from_records(header, records)
    }

    pub fn from_records(header: PluginHeader, records: Vec<Record>) -> Result<Self> {
        let mut index = HashMap::with_capacity(records.len());
        for (i, record) in records.iter().enumerate() {
            if index.insert(record.key.clone(), i).is_some() {
                return Err(Error::DuplicateRecord(record.key.to_string()));
            }
        }

        debug!(
            "Loaded {} records for {}",
            records.len(),
            header.file_name
        );

        Ok(Self {
            header,
            records,
            index,
        })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl RecordStore for MemoryStore {
    fn header(&self) -> &PluginHeader {
        &self.header
    }

    fn resolve(&self, key: &RecordKey) -> Option<&Record> {
        self.index.get(key).map(|&i| &self.records[i])
    }

    fn plugin_records(&self, kind: RecordKind) -> Vec<&Record> {
        self.records
            .iter()
            .filter(|r| r.kind == kind && r.key.is_from(&self.header.file_name))
            .collect()
    }
}

/// Incremental construction of a [`MemoryStore`]
#[derive(Debug, Clone)]
pub struct MemoryStoreBuilder {
    header: PluginHeader,
    records: Vec<Record>,
}

impl MemoryStoreBuilder {
    pub fn new(file_name: impl Into<String>) -> Self {
        Self {
            header: PluginHeader::new(file_name),
            records: Vec::new(),
        }
    }

    pub fn master(mut self, is_master: bool) -> Self {
        self.header.is_master = is_master;
        self
    }

    pub fn light(mut self, is_light: bool) -> Self {
        self.header.is_light = is_light;
        self
    }

    pub fn requires(mut self, master: impl Into<String>) -> Self {
        self.header.masters.push(master.into());
        self
    }

    pub fn record(mut self, record: Record) -> Self {
        self.records.push(record);
        self
    }

    pub fn records(mut self, records: impl IntoIterator<Item = Record>) -> Self {
        self.records.extend(records);
        self
    }

    pub fn build(self) -> Result<MemoryStore> {
        MemoryStore::from_records(self.header, self.records)
    }
}
