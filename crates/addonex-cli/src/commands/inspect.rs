//! Inspect command for looking at a single snapshot record.

use std::path::Path;

use addonex_core::{MemoryStore, PropertyBag, RecordKey, RecordStore};
use anyhow::{Context, Result, bail};
use owo_colors::OwoColorize;

pub fn run(snapshot: &Path, key: &str) -> Result<()> {
    let key: RecordKey = key.parse()?;
    let store = MemoryStore::load(snapshot)
        .with_context(|| format!("Failed to load snapshot {:?}", snapshot))?;

    let Some(record) = store.resolve(&key) else {
        bail!("Record {} not found in {:?}", key, snapshot);
    };

    println!(
        "{} {} {}",
        record.key.to_string().bold(),
        record.kind.cyan(),
        record.editor_id()
    );
    for script in &record.scripts {
        println!("  {} ({} properties)", script.name.yellow(), script.property_count());
    }
    println!();
    println!("{}", serde_json::to_string_pretty(record)?);

    Ok(())
}
