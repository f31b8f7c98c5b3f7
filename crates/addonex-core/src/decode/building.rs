use super::{all_keyword_values, description_of, first_keyword_value};
use crate::dispatch::DecoderKey;
use crate::known::{prefixes, scripts};
use crate::output::{BaseItem, BuildingLevelPlan, BuildingPlan, BuildingPlanSkin, Requirements};
use crate::record::{PropertyBag, Record, RecordKind};
use crate::resolve::resolve_requirements;
use crate::store::{RecordGraph, RecordStore};

/// Building plan weapon, with the requirements of whatever unlocked it
pub fn decode_building_plan<S: RecordStore + ?Sized>(
    graph: RecordGraph<'_, S>,
    weapon: &Record,
    requirements: Requirements,
) -> Option<BuildingPlan> {
    let script = weapon.find_script(DecoderKey::BuildingPlan.script_name())?;

    let mut plan = BuildingPlan {
        base: BaseItem::from_record(weapon),
        requirements,
        is_player_select_only: script.bool("bPlayerSelectOnly").unwrap_or(false),
        plot_type: first_keyword_value(graph, weapon, prefixes::PLOT_TYPE),
        type_sub_class: first_keyword_value(graph, weapon, prefixes::PLOT_TYPE_SUBCLASS),
        size: first_keyword_value(graph, weapon, prefixes::PLOT_SIZE),
        tags: all_keyword_values(graph, weapon, prefixes::THEME_TAG),
        level_plans: Vec::new(),
        max_level: BuildingPlan::DEFAULT_MAX_LEVEL,
        max_occupants: BuildingPlan::DEFAULT_MAX_OCCUPANTS,
    };
    plan.base.description = description_of(
        graph,
        script.object("BuildingPlanDescription"),
        RecordKind::WeaponModification,
    );

    let levels = script
        .object("LevelPlansList")
        .and_then(|k| graph.resolve_as(k, RecordKind::FormList))
        .map_or(&[][..], Record::form_list_items);

    for level in levels
        .iter()
        .filter_map(|k| graph.resolve_as(k, RecordKind::Weapon))
        .filter_map(|w| decode_level_plan(graph, w))
    {
        plan.max_level = plan.max_level.max(level.level);
        plan.max_occupants = plan.max_occupants.max(level.max_occupants);
        plan.level_plans.push(level);
    }

    Some(plan)
}

/// One level of a building plan
pub fn decode_level_plan<S: RecordStore + ?Sized>(
    graph: RecordGraph<'_, S>,
    weapon: &Record,
) -> Option<BuildingLevelPlan> {
    let script = weapon.find_script(scripts::BUILDING_LEVEL_PLAN)?;

    let job_titles = script
        .object_list("JobTitle")
        .unwrap_or_default()
        .iter()
        .filter_map(|k| graph.resolve_as(k, RecordKind::Message))
        .filter_map(|m| m.name.clone())
        .collect();

    let mut job_uniform = Vec::new();
    for equip in script.object_list("AutoEquip").unwrap_or_default() {
        let Some(holder) = graph.resolve_as_any(equip, &[RecordKind::FormList, RecordKind::Outfit])
        else {
            continue;
        };
        let items = match holder.kind {
            RecordKind::FormList => holder.form_list_items(),
            _ => holder.outfit_items(),
        };
        job_uniform.extend(
            items
                .iter()
                .filter_map(|k| graph.resolve_as_any(k, &[RecordKind::Weapon, RecordKind::Armor]))
                .filter_map(|r| r.name.clone()),
        );
    }

    Some(BuildingLevelPlan {
        base: BaseItem::from_record(weapon),
        level: script.int("iRequiredLevel").unwrap_or(1),
        max_occupants: script.int("iMaxOccupants").unwrap_or(1),
        job_titles,
        job_uniform,
    })
}

/// Alternate look for an existing building plan
pub fn decode_plan_skin<S: RecordStore + ?Sized>(
    graph: RecordGraph<'_, S>,
    weapon: &Record,
) -> Option<BuildingPlanSkin> {
    let script = weapon.find_script(DecoderKey::BuildingSkin.script_name())?;
    let target = script.object("TargetBuildingPlan")?;

    let mut base = BaseItem::from_record(weapon);
    base.description = description_of(
        graph,
        script.object("BuildingPlanSkinDescription"),
        RecordKind::WeaponModification,
    );

    let level_skins = script
        .object_list("LevelSkins")
        .unwrap_or_default()
        .iter()
        .filter_map(|k| graph.resolve_as(k, RecordKind::Weapon))
        .filter(|w| w.name.is_some())
        .map(BaseItem::from_record)
        .collect();

    Some(BuildingPlanSkin {
        base,
        target_plan: target.to_string(),
        level_skins,
        is_player_select_only: script.bool("bPlayerSelectOnly").unwrap_or(false),
        tags: all_keyword_values(graph, weapon, prefixes::THEME_TAG),
    })
}

/// Misc item that unlocks a building plan; the plan is what gets exported
pub fn decode_unlockable_plan<S: RecordStore + ?Sized>(
    graph: RecordGraph<'_, S>,
    item: &Record,
) -> Option<BuildingPlan> {
    let script = item.find_script(DecoderKey::UnlockableBuildingPlan.script_name())?;
    let weapon = graph.resolve_property(script, "BuildingPlan", RecordKind::Weapon)?;
    decode_building_plan(graph, weapon, resolve_requirements(graph, script))
}
