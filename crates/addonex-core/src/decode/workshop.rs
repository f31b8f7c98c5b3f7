//! Foundations and power poles: misc items that spawn a workshop object.

use crate::derived::BoundsSize;
use crate::dispatch::DecoderKey;
use crate::known::{keywords, scripts};
use crate::output::{BaseItem, Foundation, PowerPole};
use crate::record::{PropertyBag, Record, RecordKind, ScriptAttachment};
use crate::store::{RecordGraph, RecordStore};

/// The workshop object named by the script's spawn data, as an activator or
/// else as a static
fn spawned_object<'s, S: RecordStore + ?Sized>(
    graph: RecordGraph<'s, S>,
    script: &ScriptAttachment,
) -> Option<&'s Record> {
    let key = script.structure("SpawnData")?.object("ObjectForm")?;
    graph
        .resolve_as(key, RecordKind::Activator)
        .or_else(|| graph.resolve_as(key, RecordKind::Static))
}

fn bounds_size(record: &Record) -> BoundsSize {
    record.bounds().map(BoundsSize::from_bounds).unwrap_or_default()
}

pub fn decode_foundation<S: RecordStore + ?Sized>(
    graph: RecordGraph<'_, S>,
    item: &Record,
) -> Option<Foundation> {
    let script = item.find_script(DecoderKey::Foundation.script_name())?;

    let mut foundation = Foundation {
        base: BaseItem::from_record(item),
        ..Default::default()
    };

    if let Some(object) = spawned_object(graph, script) {
        foundation.workshop_name = object.name().to_string();
        foundation.craftable = graph.is_craftable(&object.key);
        foundation.terraformer =
            object.kind == RecordKind::Activator && keywords::TERRAFORMER.tags(object);
        foundation.size = bounds_size(object).horizontal_tier();
    }

    Some(foundation)
}

pub fn decode_power_pole<S: RecordStore + ?Sized>(
    graph: RecordGraph<'_, S>,
    item: &Record,
) -> Option<PowerPole> {
    let script = item.find_script(DecoderKey::PowerPole.script_name())?;

    let mut pole = PowerPole {
        base: BaseItem::from_record(item),
        ..Default::default()
    };

    if let Some(object) = spawned_object(graph, script) {
        let size = bounds_size(object);
        pole.workshop_name = object.name().to_string();
        pole.craftable = graph.is_craftable(&object.key);
        pole.height = size.z;
        pole.plot_size = size.uniform_tier();
        pole.has_light = object.kind == RecordKind::Activator
            && object.find_script(scripts::ALLOW_ANIMATIONS_DUMMY).is_some()
            && keywords::WORKSHOP_CAN_BE_POWERED.tags(object);
    }

    Some(pole)
}
