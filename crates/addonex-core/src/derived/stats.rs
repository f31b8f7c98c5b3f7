use crate::known::SPECIAL_ATTRIBUTES;
use crate::output::{ActorSnapshot, ActorSpecial, BaseItem};
use crate::record::{ActorValueEntry, Record, RecordKey, RecordKind};
use crate::store::{RecordGraph, RecordStore};

/// One spell effect's contribution: the attribute it targets and its magnitude
#[derive(Debug, Clone, PartialEq)]
pub struct EffectContribution {
    pub actor_value: RecordKey,
    pub magnitude: f32,
}

/// First positive value recorded for `attribute`
fn first_positive(values: &[ActorValueEntry], attribute: &RecordKey) -> Option<f32> {
    values
        .iter()
        .find(|v| &v.actor_value == attribute && v.value > 0.0)
        .map(|v| v.value)
}

/// Combine race, class, actor and spell-effect values into the seven
/// primary attributes.
///
/// Per slot: race bonus plus class bonus; an actor value that is positive
/// and at least that sum replaces it; every matching effect magnitude is
/// added; the result is floored at 1.
pub fn aggregate_special(
    race: &[ActorValueEntry],
    class: &[ActorValueEntry],
    actor: &[ActorValueEntry],
    effects: &[EffectContribution],
) -> ActorSpecial {
    let mut slots = [0i32; 7];

    for (slot, attribute) in slots.iter_mut().zip(SPECIAL_ATTRIBUTES.iter().map(|a| a.key())) {
        *slot = first_positive(race, &attribute)
            .map_or(0, |v| v as i32)
            .saturating_add(first_positive(class, &attribute).map_or(0, |v| v as i32));

        if let Some(own) = actor
            .iter()
            .find(|v| v.actor_value == attribute && v.value > 0.0 && v.value >= *slot as f32)
        {
            *slot = own.value as i32;
        }

        *slot = effects
            .iter()
            .filter(|e| e.actor_value == attribute)
            .map(|e| e.magnitude as i32)
            .fold(*slot, i32::saturating_add);

        *slot = (*slot).max(1);
    }

    ActorSpecial::from_slots(slots)
}

/// Gather every attribute source of an NPC through the store and aggregate
pub fn actor_special<S: RecordStore + ?Sized>(
    graph: RecordGraph<'_, S>,
    npc: &Record,
) -> ActorSpecial {
    let Some(data) = npc.npc() else {
        return aggregate_special(&[], &[], npc.actor_values(), &[]);
    };

    let race = data
        .race
        .as_ref()
        .and_then(|k| graph.resolve_as(k, RecordKind::Race))
        .map_or(&[][..], Record::actor_values);
    let class = data
        .class
        .as_ref()
        .and_then(|k| graph.resolve_as(k, RecordKind::Class))
        .map_or(&[][..], Record::actor_values);

    let effects: Vec<EffectContribution> = data
        .spells
        .iter()
        .filter_map(|k| graph.resolve_as(k, RecordKind::Spell))
        .flat_map(Record::spell_effects)
        .filter_map(|effect| {
            let base = graph.resolve_as(&effect.base_effect, RecordKind::MagicEffect)?;
            Some(EffectContribution {
                actor_value: base.effect_actor_value()?.clone(),
                magnitude: effect.magnitude,
            })
        })
        .collect();

    aggregate_special(race, class, &data.actor_values, &effects)
}

/// Snapshot of a resolved NPC, attributes included
pub fn actor_snapshot<S: RecordStore + ?Sized>(
    graph: RecordGraph<'_, S>,
    npc: &Record,
) -> ActorSnapshot {
    ActorSnapshot {
        base: BaseItem::from_record(npc),
        special: Some(actor_special(graph, npc)),
        plugin: npc.key.file.clone(),
    }
}
