use crate::dispatch::DecoderKey;
use crate::known::keywords;
use crate::output::{BaseItem, FurnitureStoreItem, FurnitureType, PetStoreCreature};
use crate::record::{PropertyBag, Record, RecordKind};
use crate::store::{RecordGraph, RecordStore};

fn vendor_level(item: &Record, key: DecoderKey) -> i64 {
    item.find_script(key.script_name())
        .and_then(|s| s.int("iVendorLevel"))
        .unwrap_or(1)
}

/// Classify the object a furniture recipe builds.
///
/// Furniture checks run in order and the last match wins.
fn furniture_type(created: &Record) -> FurnitureType {
    match created.kind {
        RecordKind::Furniture => {
            let mut kind = FurnitureType::FurnitureOther;
            if keywords::FURNITURE_SLEEP.tags(created) {
                kind = FurnitureType::FurnitureBed;
            }
            if keywords::FURNITURE_SEAT.iter().any(|k| k.tags(created)) {
                kind = FurnitureType::FurnitureChair;
            }
            if keywords::FURNITURE_DESK.iter().any(|k| k.tags(created)) {
                kind = FurnitureType::FurnitureCityPlannerDesk;
            }
            kind
        }
        RecordKind::Static => FurnitureType::Static,
        RecordKind::Activator => FurnitureType::Activator,
        RecordKind::Light => FurnitureType::Light,
        _ => FurnitureType::Other,
    }
}

/// Shop item backed by the plugin recipe that consumes exactly one of it
pub fn decode_furniture_store_item<S: RecordStore + ?Sized>(
    graph: RecordGraph<'_, S>,
    item: &Record,
) -> Option<FurnitureStoreItem> {
    let recipe_record = graph
        .store()
        .plugin_records(RecordKind::ConstructibleObject)
        .into_iter()
        .find(|r| {
            r.recipe()
                .and_then(|recipe| recipe.components.first())
                .is_some_and(|c| c.component == item.key && c.count == 1)
        })?;

    let mut store_item = FurnitureStoreItem {
        base: BaseItem::from_record(item),
        workshop_name: String::new(),
        vendor_level: vendor_level(item, DecoderKey::FurnitureStoreItem),
        item_type: FurnitureType::Other,
        value: item.value(),
    };
    store_item.base.description = recipe_record.description().to_string();

    if let Some(created) = recipe_record
        .recipe()
        .and_then(|recipe| recipe.created_object.as_ref())
        .and_then(|k| graph.resolve(k))
    {
        let item_type = furniture_type(created);
        if item_type != FurnitureType::Other {
            store_item.workshop_name = created.name().to_string();
            store_item.item_type = item_type;
        }
    }

    Some(store_item)
}

/// Pet shop creature; the script only adds the vendor level
pub fn decode_pet_store_creature(item: &Record) -> PetStoreCreature {
    PetStoreCreature {
        base: BaseItem::from_record(item),
        vendor_level: vendor_level(item, DecoderKey::PetStoreCreature),
        value: item.value(),
    }
}

/// Pet name misc item, recognized by keyword alone
pub fn decode_pet_name(item: &Record) -> Option<BaseItem> {
    keywords::PET_NAME
        .tags(item)
        .then(|| BaseItem::from_record(item))
}
