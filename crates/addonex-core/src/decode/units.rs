use super::{description_of, name_of};
use crate::dispatch::DecoderKey;
use crate::known::scripts;
use crate::output::{BaseItem, UnitRank, UnitType};
use crate::record::{PropertyBag, Record, RecordKind};
use crate::resolve::resolve_requirements;
use crate::store::{RecordGraph, RecordStore};

/// Soldier unit type armor, with its ranks
pub fn decode_unit_type<S: RecordStore + ?Sized>(
    graph: RecordGraph<'_, S>,
    armor: &Record,
) -> Option<UnitType> {
    let script = armor.find_script(DecoderKey::UnitType.script_name())?;

    let ranks = script
        .object_list("Ranks")
        .unwrap_or_default()
        .iter()
        .filter_map(|k| graph.resolve_as(k, RecordKind::Armor))
        .filter_map(|r| decode_unit_rank(graph, r))
        .collect();

    let default_outfit = script
        .object("DefaultOutfit")
        .and_then(|k| graph.resolve_as(k, RecordKind::Outfit))
        .map(|r| r.editor_id().to_string())
        .unwrap_or_default();

    Some(UnitType {
        base: BaseItem::from_record(armor),
        strength_rating: script.int("iStrengthRating").unwrap_or(1),
        ranks,
        requirements: resolve_requirements(graph, script),
        short_description: description_of(
            graph,
            script.object("ShortDescription"),
            RecordKind::Message,
        ),
        default_outfit,
    })
}

pub fn decode_unit_rank<S: RecordStore + ?Sized>(
    graph: RecordGraph<'_, S>,
    armor: &Record,
) -> Option<UnitRank> {
    let script = armor.find_script(scripts::SOLDIER_RANK)?;

    Some(UnitRank {
        base: BaseItem::from_record(armor),
        rank: script.int("iRank").unwrap_or(0),
        rank_name: name_of(graph, script.object("RankName"), RecordKind::Message),
    })
}
