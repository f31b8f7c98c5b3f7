//! Entity decoders.
//!
//! Each decoder reads one record (and whatever it references) into an output
//! entity, or returns `None` to drop the entity. Decoders never fail the scan.

mod beer;
mod building;
mod characters;
mod flags;
mod hq;
mod settlement;
mod store_items;
mod units;
mod workshop;

#[cfg(test)]
pub(crate) mod fixtures;

pub use beer::decode_beer_recipe;
pub use building::{
    decode_building_plan, decode_level_plan, decode_plan_skin, decode_unlockable_plan,
};
pub use characters::{decode_leader_card, decode_unlockable_character, leader_trait};
pub use flags::{decode_dynamic_flag, decode_unlockable_flag};
pub use hq::{RoomUpgradeList, decode_room_config, decode_room_upgrade};
pub use settlement::{decode_city_plan, decode_world_repopulation_cell};
pub use store_items::{decode_furniture_store_item, decode_pet_name, decode_pet_store_creature};
pub use units::{decode_unit_rank, decode_unit_type};
pub use workshop::{decode_foundation, decode_power_pole};

use crate::dispatch::DecoderKey;
use crate::output::{OutputCollection, Requirements};
use crate::record::{Record, RecordKey, RecordKind};
use crate::store::{RecordGraph, RecordStore};

/// Run one decoder and file its entity into `out`.
///
/// Returns whether an entity was counted.
pub fn decode_into<S: RecordStore + ?Sized>(
    graph: RecordGraph<'_, S>,
    key: DecoderKey,
    record: &Record,
    out: &mut OutputCollection,
) -> bool {
    match key {
        DecoderKey::UnlockableBuildingPlan => {
            out.push(decode_unlockable_plan(graph, record), |o| &mut o.building_plans)
        }
        DecoderKey::BuildingPlan => out.push(
            decode_building_plan(graph, record, Requirements::default()),
            |o| &mut o.building_plans,
        ),
        DecoderKey::BuildingSkin => {
            out.push(decode_plan_skin(graph, record), |o| &mut o.building_plan_skins)
        }
        DecoderKey::UnlockableFlag => {
            out.push(decode_unlockable_flag(graph, record), |o| &mut o.dynamic_flags)
        }
        DecoderKey::DynamicFlag => out.push(
            decode_dynamic_flag(record, Requirements::default()),
            |o| &mut o.dynamic_flags,
        ),
        DecoderKey::Foundation => {
            out.push(decode_foundation(graph, record), |o| &mut o.foundations)
        }
        DecoderKey::PowerPole => out.push(decode_power_pole(graph, record), |o| &mut o.power_poles),
        DecoderKey::FurnitureStoreItem => out.push(
            decode_furniture_store_item(graph, record),
            |o| &mut o.furniture_store_items,
        ),
        DecoderKey::PetStoreCreature => out.push(
            Some(decode_pet_store_creature(record)),
            |o| &mut o.pet_store_creatures,
        ),
        DecoderKey::UnlockableCharacter => out.push(
            decode_unlockable_character(graph, record),
            |o| &mut o.unlockable_characters,
        ),
        DecoderKey::LeaderCard => {
            out.push(decode_leader_card(graph, record), |o| &mut o.leader_cards)
        }
        DecoderKey::BeerRecipe => {
            out.push(decode_beer_recipe(graph, record), |o| &mut o.beer_recipes)
        }
        DecoderKey::CityPlan => out.push(decode_city_plan(graph, record), |o| &mut o.city_plans),
        DecoderKey::WorldRepopulationCell => out.push(
            decode_world_repopulation_cell(graph, record),
            |o| &mut o.world_repop_cells,
        ),
        DecoderKey::HqRoomConfig => {
            out.push(decode_room_config(graph, record), |o| &mut o.hq_room_configs)
        }
        DecoderKey::HqRoomUpgrade => {
            let Some(upgrade) = decode_room_upgrade(record) else {
                return false;
            };
            match RoomUpgradeList::for_record(record) {
                Some(RoomUpgradeList::Construction) => out.hq_room_constructions.push(upgrade),
                Some(RoomUpgradeList::Upgrade) => out.hq_room_upgrades.push(upgrade),
                None => {}
            }
            out.total_items += 1;
            true
        }
        DecoderKey::UnitType => out.push(decode_unit_type(graph, record), |o| &mut o.unit_types),
    }
}

/// Editor ids of the record's keywords starting with `prefix`
fn prefixed_keywords<'s, S: RecordStore + ?Sized>(
    graph: RecordGraph<'s, S>,
    record: &Record,
    prefix: &str,
) -> impl Iterator<Item = &'s str> {
    graph
        .keyword_editor_ids(record)
        .into_iter()
        .filter(move |id| id.starts_with(prefix))
}

/// Value of the first keyword carrying `prefix`, prefix stripped
fn first_keyword_value<S: RecordStore + ?Sized>(
    graph: RecordGraph<'_, S>,
    record: &Record,
    prefix: &str,
) -> String {
    prefixed_keywords(graph, record, prefix)
        .next()
        .map(|id| id[prefix.len()..].to_string())
        .unwrap_or_default()
}

/// Values of every keyword carrying `prefix`, prefix stripped
fn all_keyword_values<S: RecordStore + ?Sized>(
    graph: RecordGraph<'_, S>,
    record: &Record,
    prefix: &str,
) -> Vec<String> {
    prefixed_keywords(graph, record, prefix)
        .map(|id| id[prefix.len()..].to_string())
        .collect()
}

/// Name of the referenced record if it has the given kind
fn name_of<S: RecordStore + ?Sized>(
    graph: RecordGraph<'_, S>,
    key: Option<&RecordKey>,
    kind: RecordKind,
) -> String {
    key.and_then(|k| graph.resolve_as(k, kind))
        .map(|r| r.name().to_string())
        .unwrap_or_default()
}

/// Description of the referenced record if it has the given kind
fn description_of<S: RecordStore + ?Sized>(
    graph: RecordGraph<'_, S>,
    key: Option<&RecordKey>,
    kind: RecordKind,
) -> String {
    key.and_then(|k| graph.resolve_as(k, kind))
        .map(|r| r.description().to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;
    use crate::known::{keywords, prefixes};
    use crate::store::MemoryStore;

    #[test]
    fn test_first_versus_accumulated_keywords() {
        let store = MemoryStore::builder(PLUGIN)
            .record(keyword(1, "SS2_PlotType_Residential"))
            .record(keyword(2, "SS2_PlotType_Commercial"))
            .record(keyword(3, "SS2_ThemeTag_Rustic"))
            .record(keyword(4, "SS2_ThemeTag_Clean"))
            .record(
                Record::new(key(10), RecordKind::Weapon)
                    .with_keyword(key(1))
                    .with_keyword(key(3))
                    .with_keyword(key(2))
                    .with_keyword(key(4)),
            )
            .build()
            .unwrap();
        let graph = RecordGraph::new(&store);
        let weapon = graph.resolve(&key(10)).unwrap();

        assert_eq!(first_keyword_value(graph, weapon, prefixes::PLOT_TYPE), "Residential");
        assert_eq!(
            all_keyword_values(graph, weapon, prefixes::THEME_TAG),
            vec!["Rustic", "Clean"]
        );
        assert_eq!(first_keyword_value(graph, weapon, prefixes::PLOT_SIZE), "");
    }

    #[test]
    fn test_room_upgrade_counted_even_when_unfiled() {
        let store = MemoryStore::builder(PLUGIN).build().unwrap();
        let graph = RecordGraph::new(&store);
        let upgrade_script = script(
            DecoderKey::HqRoomUpgrade.script_name(),
            vec![object("TargetUpgradeSlot", key(5))],
        );

        let unfiled = misc(1, "Addon_Upgrade").with_script(upgrade_script.clone());
        let construction = misc(2, "Addon_Construction")
            .with_keyword(keywords::HQ_ROOM_CONSTRUCTION.key())
            .with_script(upgrade_script);

        let mut out = OutputCollection::default();
        assert!(decode_into(graph, DecoderKey::HqRoomUpgrade, &unfiled, &mut out));
        assert!(decode_into(graph, DecoderKey::HqRoomUpgrade, &construction, &mut out));

        assert_eq!(out.total_items, 2);
        assert_eq!(out.hq_room_constructions.len(), 1);
        assert!(out.hq_room_upgrades.is_empty());
        assert_eq!(out.hq_room_constructions[0].target_upgrade_slot, "000005:Addon.esp");
    }

    #[test]
    fn test_failed_decode_not_counted() {
        let store = MemoryStore::builder(PLUGIN).build().unwrap();
        let graph = RecordGraph::new(&store);
        let weapon = Record::new(key(1), RecordKind::Weapon).with_script(script(
            "SimSettlementsV2:Weapons:LeaderCard",
            vec![],
        ));

        let mut out = OutputCollection::default();
        assert!(!decode_into(graph, DecoderKey::LeaderCard, &weapon, &mut out));
        assert!(out.is_empty());
    }

    #[test]
    fn test_name_helpers_require_kind() {
        let store = MemoryStore::builder(PLUGIN)
            .record(
                Record::new(key(1), RecordKind::Message)
                    .with_name("Title")
                    .with_description("Body"),
            )
            .build()
            .unwrap();
        let graph = RecordGraph::new(&store);
        let k = key(1);

        assert_eq!(name_of(graph, Some(&k), RecordKind::Message), "Title");
        assert_eq!(description_of(graph, Some(&k), RecordKind::Message), "Body");
        assert_eq!(name_of(graph, Some(&k), RecordKind::MiscItem), "");
        assert_eq!(name_of(graph, None, RecordKind::Message), "");
    }
}
