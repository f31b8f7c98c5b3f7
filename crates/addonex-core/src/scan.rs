//! One scan of one plugin: discovery, dispatch and decoding into a fresh
//! [`OutputCollection`].

use std::collections::HashSet;

use tracing::{debug, info, warn};

use crate::config::ScanConfig;
use crate::decode::{decode_into, decode_pet_name};
use crate::discovery::{AddonDiscovery, Candidate};
use crate::dispatch::{ItemFamily, select_decoder};
use crate::output::OutputCollection;
use crate::record::{Record, RecordKey, RecordKind};
use crate::store::{RecordGraph, RecordStore};

pub struct Scanner<'s, S: RecordStore + ?Sized> {
    graph: RecordGraph<'s, S>,
    config: &'s ScanConfig,
}

impl<'s, S: RecordStore + ?Sized> Scanner<'s, S> {
    pub fn new(store: &'s S, config: &'s ScanConfig) -> Self {
        Self {
            graph: RecordGraph::new(store),
            config,
        }
    }

    /// Walk the plugin and decode every addon item it registers
    pub fn run(&self) -> OutputCollection {
        let header = self.graph.store().header();
        let mut out = OutputCollection {
            name: header.file_name.clone(),
            is_master: header.is_master,
            is_light: header.is_light,
            masters: header.masters.clone(),
            ..Default::default()
        };

        let discovery = AddonDiscovery::new(self.graph, self.config.territory_traits_tag.as_str());
        let candidates = discovery.candidates();
        let mut scanned: HashSet<&RecordKey> = candidates.iter().map(|c| &c.key).collect();
        for candidate in &candidates {
            self.scan_candidate(candidate, &mut out);
        }

        let lists = self.config.supplemental_list_keys();
        let supplemental: Vec<_> = discovery
            .supplemental_items(&lists)
            .into_iter()
            .filter(|&item| scanned.insert(&item.key))
            .collect();
        debug!("Scanning {} supplemental items", supplemental.len());
        for item in supplemental {
            self.scan_item(ItemFamily::MiscItem, item, &mut out);
        }

        debug!("Scan of {} found {} items", out.name, out.total_items);
        out
    }

    fn scan_candidate(&self, candidate: &Candidate<'s>, out: &mut OutputCollection) {
        let Some(record) = self.graph.resolve(&candidate.key) else {
            debug!("Item {} does not resolve", candidate.key);
            return;
        };

        if record.kind == RecordKind::Keyword {
            let is_tag = candidate.tag.is_some_and(|t| t.key == record.key);
            if !is_tag {
                warn!(
                    "Keyword {} ({}) listed as an addon item",
                    record.key,
                    record.editor_id()
                );
            }
            return;
        }

        let Some(family) = ItemFamily::from_kind(record.kind) else {
            if self.config.log_unknown {
                info!(
                    "Unhandled item kind {} for {} ({})",
                    record.kind,
                    record.key,
                    record.editor_id()
                );
            }
            return;
        };

        self.scan_item(family, record, out);
    }

    fn scan_item(&self, family: ItemFamily, record: &Record, out: &mut OutputCollection) {
        if family == ItemFamily::MiscItem {
            out.push(decode_pet_name(record), |o| &mut o.pet_names);
        }

        if record.scripts.is_empty() {
            debug!("Skipping {} without scripts", record.key);
            return;
        }

        if let Some(key) = select_decoder(family, record, self.config.log_unknown) {
            if !decode_into(self.graph, key, record, out) {
                debug!("{} decoder dropped {}", key, record.key);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::fixtures::*;
    use crate::known::{keywords, scripts};
    use crate::record::RecordData;
    use crate::store::{MemoryStore, MemoryStoreBuilder};

    /// Quest 1 → config 2 → list 3 holding `items`
    fn addon(items: &[u32]) -> MemoryStoreBuilder {
        let list: Vec<_> = items.iter().map(|&id| key(id)).collect();
        MemoryStore::builder(PLUGIN)
            .master(true)
            .requires("Fallout4.esm")
            .record(
                Record::new(key(1), RecordKind::Quest)
                    .with_data(RecordData::Quest {
                        start_game_enabled: true,
                    })
                    .with_script(script(
                        scripts::ADDON_PACK,
                        vec![object("MyAddonConfig", key(2))],
                    )),
            )
            .record(misc(2, "Addon_Config").with_script(script(
                scripts::ADDON_PACK_CONFIGURATION,
                vec![objects("MyItems", &[key(3)])],
            )))
            .record(form_list(3, &list))
    }

    fn repop(id: u32) -> Record {
        misc(id, "Addon_Repop").with_script(script(
            "SimSettlementsV2:MiscObjects:WorldRepopulationCell",
            vec![int("iPopulationSupported", 4)],
        ))
    }

    #[test]
    fn test_header_fields_copied() {
        let store = addon(&[]).light(true).build().unwrap();
        let config = ScanConfig::default();
        let out = Scanner::new(&store, &config).run();
        assert_eq!(out.name, PLUGIN);
        assert!(out.is_master);
        assert!(out.is_light);
        assert_eq!(out.masters, vec!["Fallout4.esm"]);
        assert!(out.is_empty());
    }

    #[test]
    fn test_decodes_listed_items() {
        let store = addon(&[10, 11]).record(repop(10)).record(repop(11)).build().unwrap();
        let config = ScanConfig::default();
        let out = Scanner::new(&store, &config).run();
        assert_eq!(out.world_repop_cells.len(), 2);
        assert_eq!(out.total_items, 2);
    }

    #[test]
    fn test_pet_name_still_dispatches_scripts() {
        let store = addon(&[10])
            .record(
                repop(10)
                    .with_name("Rex")
                    .with_keyword(keywords::PET_NAME.key()),
            )
            .build()
            .unwrap();
        let config = ScanConfig::default();
        let out = Scanner::new(&store, &config).run();
        assert_eq!(out.pet_names.len(), 1);
        assert_eq!(out.pet_names[0].name, "Rex");
        assert_eq!(out.world_repop_cells.len(), 1);
        assert_eq!(out.total_items, 2);
    }

    #[test]
    fn test_tag_and_stray_keywords_are_not_items() {
        let store = addon(&[20, 21, 10])
            .record(keyword(20, "Addon_Tag"))
            .record(keyword(21, "Addon_Stray"))
            .record(repop(10))
            .build()
            .unwrap();
        let config = ScanConfig::default();
        let out = Scanner::new(&store, &config).run();
        assert_eq!(out.total_items, 1);
    }

    #[test]
    fn test_unscripted_and_unhandled_kinds_skipped() {
        let store = addon(&[10, 11, 12])
            .record(misc(10, "Addon_Plain"))
            .record(Record::new(key(11), RecordKind::Static))
            .record(
                Record::new(key(12), RecordKind::Weapon)
                    .with_script(script("Some:Other:Script", vec![int("x", 1)])),
            )
            .build()
            .unwrap();
        let config = ScanConfig {
            log_unknown: true,
            ..Default::default()
        };
        let out = Scanner::new(&store, &config).run();
        assert!(out.is_empty());
    }

    #[test]
    fn test_supplemental_lists_use_misc_path() {
        let store = addon(&[])
            .record(repop(10))
            .record(Record::new(key(11), RecordKind::Weapon))
            .record(form_list(30, &[key(10), key(11)]))
            .build()
            .unwrap();
        let config = ScanConfig {
            supplemental_lists: vec![key(30).to_string(), "garbage".to_string()],
            ..Default::default()
        };
        let out = Scanner::new(&store, &config).run();
        assert_eq!(out.world_repop_cells.len(), 1);
        assert_eq!(out.total_items, 1);
    }

    #[test]
    fn test_item_in_several_lists_decoded_once() {
        let store = addon(&[10])
            .record(repop(10))
            .record(repop(12))
            .record(form_list(30, &[key(10), key(12)]))
            .record(form_list(31, &[key(12), key(10)]))
            .build()
            .unwrap();
        let config = ScanConfig {
            supplemental_lists: vec![key(30).to_string(), key(31).to_string()],
            ..Default::default()
        };
        let out = Scanner::new(&store, &config).run();
        assert_eq!(out.world_repop_cells.len(), 2);
        assert_eq!(out.total_items, 2);
    }
}
