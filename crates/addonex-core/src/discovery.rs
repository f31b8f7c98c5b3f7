//! Addon discovery: quests → addon configs → item lists → items.
//!
//! Each stage keeps the first occurrence of every key and drops later
//! repeats, so the candidate order follows the store order of the quests
//! that started the walk.

use std::collections::HashSet;

use tracing::debug;

use crate::known::scripts;
use crate::record::{PropertyBag, Record, RecordKey, RecordKind};
use crate::store::{RecordGraph, RecordStore};

/// An item key drawn from an addon item list
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate<'s> {
    pub key: RecordKey,
    /// Keyword heading the list the item came from, if any
    pub tag: Option<&'s Record>,
}

/// Order-preserving dedup
fn push_unique(seen: &mut HashSet<RecordKey>, out: &mut Vec<RecordKey>, key: &RecordKey) {
    if seen.insert(key.clone()) {
        out.push(key.clone());
    }
}

pub struct AddonDiscovery<'s, S: RecordStore + ?Sized> {
    graph: RecordGraph<'s, S>,
    excluded_tag: String,
}

impl<'s, S: RecordStore + ?Sized> AddonDiscovery<'s, S> {
    /// `excluded_tag` is the editor id of the classifying tag whose lists
    /// are dropped entirely
    pub fn new(graph: RecordGraph<'s, S>, excluded_tag: impl Into<String>) -> Self {
        Self {
            graph,
            excluded_tag: excluded_tag.into(),
        }
    }

    /// Addon configs named by the plugin's start-game-enabled quests
    pub fn addon_config_keys(&self) -> Vec<RecordKey> {
        let mut seen = HashSet::new();
        let mut keys = Vec::new();

        for quest in self.graph.store().plugin_records(RecordKind::Quest) {
            if !quest.is_start_game_enabled() {
                continue;
            }
            let Some(config) = quest
                .find_script(scripts::ADDON_PACK)
                .and_then(|s| s.object("MyAddonConfig"))
            else {
                continue;
            };
            push_unique(&mut seen, &mut keys, config);
        }

        debug!("Found {} addon configs", keys.len());
        keys
    }

    /// Item lists registered by every resolvable addon config
    pub fn item_list_keys(&self) -> Vec<RecordKey> {
        let mut seen = HashSet::new();
        let mut keys = Vec::new();

        for config_key in self.addon_config_keys() {
            let Some(config) = self.graph.resolve_as(&config_key, RecordKind::MiscItem) else {
                debug!("Addon config {} does not resolve", config_key);
                continue;
            };
            let lists = config
                .find_script(scripts::ADDON_PACK_CONFIGURATION)
                .and_then(|s| s.object_list("MyItems"))
                .unwrap_or_default();
            for list in lists {
                push_unique(&mut seen, &mut keys, list);
            }
        }

        debug!("Found {} addon item lists", keys.len());
        keys
    }

    /// Every item drawn from the addon item lists, paired with its list's
    /// classifying tag
    pub fn candidates(&self) -> Vec<Candidate<'s>> {
        let mut seen = HashSet::new();
        let mut candidates = Vec::new();

        for list_key in self.item_list_keys() {
            let Some(list) = self.graph.resolve_as(&list_key, RecordKind::FormList) else {
                continue;
            };
            let items = list.form_list_items();

            let tag = items
                .first()
                .and_then(|k| self.graph.resolve_as(k, RecordKind::Keyword));

            if tag.is_some_and(|t| t.editor_id() == self.excluded_tag) {
                debug!(
                    "Skipping {} items of excluded list {}",
                    items.len(),
                    list.editor_id()
                );
                continue;
            }

            for item in items {
                if seen.insert(item.clone()) {
                    candidates.push(Candidate {
                        key: item.clone(),
                        tag,
                    });
                }
            }
        }

        debug!("Found {} addon item candidates", candidates.len());
        candidates
    }

    /// Misc items held by form-lists outside the addon chain, each once and
    /// in list order
    pub fn supplemental_items(&self, lists: &[RecordKey]) -> Vec<&'s Record> {
        let mut seen = HashSet::new();
        lists
            .iter()
            .filter_map(|k| self.graph.resolve_as(k, RecordKind::FormList))
            .flat_map(Record::form_list_items)
            .filter(|k| seen.insert((*k).clone()))
            .filter_map(|k| self.graph.resolve_as(k, RecordKind::MiscItem))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::known::TERRITORY_TRAITS_TAG;
    use crate::record::{NamedProperty, Property, RecordData, ScriptAttachment};
    use crate::store::{MemoryStore, MemoryStoreBuilder};

    fn key(id: u32) -> RecordKey {
        RecordKey::new(id, "Addon.esp")
    }

    fn quest(id: u32, enabled: bool, config: u32) -> Record {
        Record::new(key(id), RecordKind::Quest)
            .with_data(RecordData::Quest {
                start_game_enabled: enabled,
            })
            .with_script(ScriptAttachment::new(
                scripts::ADDON_PACK,
                vec![NamedProperty::new("MyAddonConfig", Property::ObjectRef(key(config)))],
            ))
    }

    fn config(id: u32, lists: &[u32]) -> Record {
        Record::new(key(id), RecordKind::MiscItem).with_script(ScriptAttachment::new(
            scripts::ADDON_PACK_CONFIGURATION,
            vec![NamedProperty::new(
                "MyItems",
                Property::ObjectRefList(lists.iter().map(|&i| key(i)).collect()),
            )],
        ))
    }

    fn list(id: u32, items: &[u32]) -> Record {
        Record::new(key(id), RecordKind::FormList).with_data(RecordData::FormList {
            items: items.iter().map(|&i| key(i)).collect(),
        })
    }

    fn base() -> MemoryStoreBuilder {
        MemoryStore::builder("Addon.esp")
            .record(quest(1, true, 10))
            .record(quest(2, true, 11))
            .record(quest(3, false, 12))
            .record(config(10, &[20, 21]))
            .record(config(11, &[21, 22]))
            .record(config(12, &[23]))
    }

    fn keys(candidates: &[Candidate<'_>]) -> Vec<u32> {
        candidates.iter().map(|c| c.key.id).collect()
    }

    #[test]
    fn test_config_and_list_stages_dedup() {
        let store = base().build().unwrap();
        let discovery = AddonDiscovery::new(RecordGraph::new(&store), TERRITORY_TRAITS_TAG);

        assert_eq!(discovery.addon_config_keys(), vec![key(10), key(11)]);
        assert_eq!(discovery.item_list_keys(), vec![key(20), key(21), key(22)]);
    }

    #[test]
    fn test_items_dedup_across_lists() {
        let store = base()
            .record(list(20, &[100, 101]))
            .record(list(21, &[101, 102]))
            .record(list(22, &[100]))
            .build()
            .unwrap();
        let discovery = AddonDiscovery::new(RecordGraph::new(&store), TERRITORY_TRAITS_TAG);

        assert_eq!(keys(&discovery.candidates()), vec![100, 101, 102]);
    }

    #[test]
    fn test_classifying_tag_attached() {
        let store = base()
            .record(
                Record::new(key(50), RecordKind::Keyword).with_editor_id("SS2_FLID_BuildingPlans"),
            )
            .record(list(20, &[50, 100]))
            .record(list(21, &[101]))
            .build()
            .unwrap();
        let discovery = AddonDiscovery::new(RecordGraph::new(&store), TERRITORY_TRAITS_TAG);
        let candidates = discovery.candidates();

        assert_eq!(keys(&candidates), vec![50, 100, 101]);
        assert_eq!(
            candidates[1].tag.map(Record::editor_id),
            Some("SS2_FLID_BuildingPlans")
        );
        assert!(candidates[2].tag.is_none());
    }

    #[test]
    fn test_territory_traits_list_excluded() {
        let store = base()
            .record(Record::new(key(50), RecordKind::Keyword).with_editor_id(TERRITORY_TRAITS_TAG))
            .record(list(20, &[50, 100, 101]))
            .record(list(21, &[102]))
            .build()
            .unwrap();
        let discovery = AddonDiscovery::new(RecordGraph::new(&store), TERRITORY_TRAITS_TAG);

        assert_eq!(keys(&discovery.candidates()), vec![102]);
    }

    #[test]
    fn test_supplemental_items_keep_misc_only() {
        let store = MemoryStore::builder("Addon.esp")
            .record(Record::new(key(1), RecordKind::MiscItem))
            .record(Record::new(key(2), RecordKind::Weapon))
            .record(list(3, &[1, 2, 99]))
            .build()
            .unwrap();
        let discovery = AddonDiscovery::new(RecordGraph::new(&store), TERRITORY_TRAITS_TAG);

        let items = discovery.supplemental_items(&[key(3), key(4)]);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].key, key(1));
    }
}
