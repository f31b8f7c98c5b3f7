use super::name_of;
use crate::derived::actor_snapshot;
use crate::dispatch::DecoderKey;
use crate::known::scripts;
use crate::output::{ActorSnapshot, BaseItem, LeaderCard, UnlockableCharacter};
use crate::record::{Property, PropertyBag, Record, RecordKind};
use crate::resolve::{plugin_name, resolve_direct_or_indirect};
use crate::store::{RecordGraph, RecordStore};

/// Character unlocked by a misc item. Dropped unless the character form
/// resolves to an NPC; the entity takes the NPC's name.
pub fn decode_unlockable_character<S: RecordStore + ?Sized>(
    graph: RecordGraph<'_, S>,
    item: &Record,
) -> Option<UnlockableCharacter> {
    let script = item.find_script(DecoderKey::UnlockableCharacter.script_name())?;
    let actor_key = script.structure("CharacterForm")?.first()?.as_object()?;
    let actor = graph.resolve_as(actor_key, RecordKind::Npc)?;

    let mut base = BaseItem::from_record(item);
    base.name = actor.name().to_string();

    Some(UnlockableCharacter {
        base,
        target_actor: Some(actor_snapshot(graph, actor)),
    })
}

/// Trait misc item of a leader card
pub fn leader_trait<S: RecordStore + ?Sized>(graph: RecordGraph<'_, S>, item: &Record) -> BaseItem {
    let mut base = BaseItem::from_record(item);
    if let Some(script) = item.find_script(scripts::LEADER_TRAIT) {
        base.description = name_of(
            graph,
            script.object("TraitDescriptionHolder"),
            RecordKind::MiscItem,
        );
    }
    base
}

/// Traits named by every object member of every struct in a struct list
fn traits<S: RecordStore + ?Sized>(
    graph: RecordGraph<'_, S>,
    bag: &impl PropertyBag,
    name: &str,
) -> Vec<BaseItem> {
    bag.struct_list(name)
        .unwrap_or_default()
        .iter()
        .flat_map(|s| s.members.iter())
        .filter_map(|m| m.value.as_object())
        .filter_map(|k| graph.resolve_as(k, RecordKind::MiscItem))
        .map(|r| leader_trait(graph, r))
        .collect()
}

pub fn decode_leader_card<S: RecordStore + ?Sized>(
    graph: RecordGraph<'_, S>,
    weapon: &Record,
) -> Option<LeaderCard> {
    let script = weapon.find_script(DecoderKey::LeaderCard.script_name())?;

    // An actor from a plugin that is not loaded only leaves its plugin name
    let target_actor = script.structure("ActorBaseForm").map(|reference| {
        match resolve_direct_or_indirect(graph, reference).filter(|r| r.kind == RecordKind::Npc) {
            Some(actor) => actor_snapshot(graph, actor),
            None => ActorSnapshot {
                plugin: plugin_name(reference).unwrap_or_default().to_string(),
                ..Default::default()
            },
        }
    });

    let major_trait = script
        .structure("MajorTrait")
        .and_then(|s| s.first())
        .and_then(Property::as_object)
        .and_then(|k| graph.resolve_as(k, RecordKind::MiscItem))
        .map(|r| leader_trait(graph, r));

    Some(LeaderCard {
        base: BaseItem::from_record(weapon),
        target_actor,
        major_trait,
        minor_traits: traits(graph, script, "MinorTraits"),
        weaknesses: traits(graph, script, "Weaknesses"),
    })
}
