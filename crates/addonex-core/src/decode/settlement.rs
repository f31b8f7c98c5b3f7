use super::{description_of, name_of};
use crate::dispatch::DecoderKey;
use crate::output::{BaseItem, CityPlan, WorldRepopulationCell};
use crate::record::{PropertyBag, Record, RecordKind};
use crate::resolve::resolve_direct_or_indirect;
use crate::store::{RecordGraph, RecordStore};

pub fn decode_city_plan<S: RecordStore + ?Sized>(
    graph: RecordGraph<'_, S>,
    item: &Record,
) -> Option<CityPlan> {
    let script = item.find_script(DecoderKey::CityPlan.script_name())?;

    let mut base = BaseItem::from_record(item);
    base.description = description_of(
        graph,
        script.object("DesignersDescription"),
        RecordKind::Message,
    );

    let target_settlement = script
        .structure("workshopRef")
        .and_then(|reference| resolve_direct_or_indirect(graph, reference))
        .map(|r| r.key.to_string())
        .unwrap_or_default();

    Some(CityPlan {
        base,
        max_level: script.int("iLevelCount").unwrap_or(1),
        is_player_select_only: script.bool("bPlayerSelectOnly").unwrap_or(false),
        supported_npcs: script
            .int_list("iSupportedNPCs")
            .map_or_else(|| vec![0], <[i64]>::to_vec),
        target_settlement,
        plugins: script
            .string_list("sPluginsUsed")
            .map(<[String]>::to_vec)
            .unwrap_or_default(),
        author: name_of(graph, script.object("DesignerNameHolder"), RecordKind::MiscItem),
    })
}

pub fn decode_world_repopulation_cell<S: RecordStore + ?Sized>(
    graph: RecordGraph<'_, S>,
    item: &Record,
) -> Option<WorldRepopulationCell> {
    let script = item.find_script(DecoderKey::WorldRepopulationCell.script_name())?;

    Some(WorldRepopulationCell {
        base: BaseItem::from_record(item),
        max_population: script.int("iPopulationSupported").unwrap_or(0),
        author: name_of(graph, script.object("DesignerNameForm"), RecordKind::MiscItem),
    })
}
