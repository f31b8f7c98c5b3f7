//! # addonex-core
//!
//! Core library for the addon content extractor.
//!
//! This crate provides:
//! - The record model (keys, kinds, scripts, typed properties)
//! - A record store boundary with an in-memory, snapshot-backed implementation
//! - Addon discovery over quests, addon configs and item lists
//! - Script-based dispatch into entity decoders
//! - Derived computations (actor attributes, bounds size tiers)
//! - The exported output collection and its JSON form

pub mod config;
pub mod decode;
pub mod derived;
pub mod discovery;
pub mod dispatch;
pub mod error;
pub mod known;
pub mod output;
pub mod record;
pub mod resolve;
pub mod scan;
pub mod store;

pub use config::ScanConfig;
pub use derived::{BoundsSize, EffectContribution, actor_snapshot, aggregate_special};
pub use discovery::{AddonDiscovery, Candidate};
pub use dispatch::{DecoderKey, ItemFamily, ScriptMatch, lookup, select_decoder};
pub use error::{Error, Result};
pub use output::{ModMetadata, OutputCollection, Requirements};
pub use record::{
    NamedProperty, Property, PropertyBag, PropertyStruct, Record, RecordData, RecordKey,
    RecordKind, ScriptAttachment,
};
pub use resolve::{
    plugin_name, reconstruct_key_from_indirect, resolve_direct_or_indirect, resolve_requirements,
};
pub use scan::Scanner;
pub use store::{
    MemoryStore, MemoryStoreBuilder, PluginHeader, RecordGraph, RecordStore, StoreSnapshot,
};
