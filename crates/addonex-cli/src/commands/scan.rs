//! Scan command: one store, one scan, one output per snapshot.

use std::fs;
use std::path::{Path, PathBuf};

use addonex_core::{MemoryStore, ModMetadata, OutputCollection, ScanConfig, Scanner};
use anyhow::{Context, Result, bail};
use owo_colors::OwoColorize;
use tracing::{info, warn};

fn load_config(path: Option<&Path>) -> ScanConfig {
    let Some(path) = path else {
        return ScanConfig::default();
    };
    match ScanConfig::load(path) {
        Ok(c) => {
            info!("Loaded config from {:?}", path);
            c
        }
        Err(e) if e.is_not_found() => {
            info!("Config {:?} not found, using defaults", path);
            ScanConfig::default()
        }
        Err(e) => {
            warn!("Failed to load config: {}, using defaults", e);
            ScanConfig::default()
        }
    }
}

fn print_summary(out: &OutputCollection) {
    if out.is_empty() {
        eprintln!("{} {}", out.name.bold(), "no addon items".red());
        return;
    }

    eprintln!(
        "{} {} items",
        out.name.bold(),
        out.total_items.to_string().green()
    );
    for (list, count) in out.counts().into_iter().filter(|(_, n)| *n > 0) {
        eprintln!("  {:<24}{}", list, count);
    }
}

/// Scan every snapshot; fails after the last one if any yielded no items
pub fn run(
    snapshots: &[PathBuf],
    config: Option<&Path>,
    json_dir: Option<&Path>,
    metadata: Option<&Path>,
    verbose: bool,
) -> Result<()> {
    let mut config = load_config(config);
    config.log_unknown |= verbose;

    let metadata = metadata
        .map(|path| {
            ModMetadata::load(path).with_context(|| format!("Failed to load metadata {:?}", path))
        })
        .transpose()?;

    if let Some(dir) = json_dir {
        fs::create_dir_all(dir).with_context(|| format!("Failed to create {:?}", dir))?;
    }

    let mut empty = Vec::new();
    for snapshot in snapshots {
        let store = MemoryStore::load(snapshot)
            .with_context(|| format!("Failed to load snapshot {:?}", snapshot))?;

        let mut out = Scanner::new(&store, &config).run();
        out.metadata = metadata
            .as_ref()
            .filter(|m| m.plugin_file.eq_ignore_ascii_case(&out.name))
            .cloned();

        print_summary(&out);
        if out.is_empty() {
            empty.push(out.name);
            continue;
        }

        if let Some(dir) = json_dir {
            let path = dir.join(format!("{}.json", out.name));
            out.save(&path)
                .with_context(|| format!("Failed to write {:?}", path))?;
            eprintln!("Exported to: {}", path.display());
        }
    }

    if !empty.is_empty() {
        bail!("No addon items found in {}", empty.join(", "));
    }
    Ok(())
}
