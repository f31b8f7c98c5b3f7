use crate::dispatch::DecoderKey;
use crate::known::{keywords, prefixes};
use crate::output::{BaseItem, HqRoomConfig, HqRoomUpgrade};
use crate::record::{PropertyBag, Record, RecordKind};
use crate::store::{RecordGraph, RecordStore};

/// Which list a decoded room upgrade is filed into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomUpgradeList {
    Construction,
    Upgrade,
}

impl RoomUpgradeList {
    /// Construction takes precedence; a record with neither keyword is
    /// filed nowhere
    pub fn for_record(record: &Record) -> Option<Self> {
        if keywords::HQ_ROOM_CONSTRUCTION.tags(record) {
            Some(Self::Construction)
        } else if keywords::HQ_ROOM_UPGRADE.tags(record) {
            Some(Self::Upgrade)
        } else {
            None
        }
    }
}

pub fn decode_room_config<S: RecordStore + ?Sized>(
    graph: RecordGraph<'_, S>,
    item: &Record,
) -> Option<HqRoomConfig> {
    let script = item.find_script(DecoderKey::HqRoomConfig.script_name())?;

    let room_shape = graph
        .keyword_editor_ids(item)
        .into_iter()
        .find(|id| id.starts_with(prefixes::ROOM_SHAPE))
        .unwrap_or_default()
        .to_string();

    let primary_department = script
        .object("PrimaryDepartment")
        .and_then(|k| graph.resolve_as(k, RecordKind::PlacedObject))
        .and_then(Record::placed_base)
        .and_then(|k| graph.resolve_as(k, RecordKind::Activator))
        .map(|r| r.name().to_string())
        .unwrap_or_default();

    Some(HqRoomConfig {
        base: BaseItem::from_record(item),
        room_shape,
        primary_department,
        upgrade_slots: script
            .object_list("RoomUpgradeSlots")
            .unwrap_or_default()
            .iter()
            .map(ToString::to_string)
            .collect(),
    })
}

pub fn decode_room_upgrade(item: &Record) -> Option<HqRoomUpgrade> {
    let script = item.find_script(DecoderKey::HqRoomUpgrade.script_name())?;

    Some(HqRoomUpgrade {
        base: BaseItem::from_record(item),
        target_upgrade_slot: script
            .object("TargetUpgradeSlot")
            .map(ToString::to_string)
            .unwrap_or_default(),
    })
}
