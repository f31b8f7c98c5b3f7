//! Full scans over a built store.

use addonex_core::known::{TERRITORY_TRAITS_TAG, scripts};
use addonex_core::{
    MemoryStore, MemoryStoreBuilder, NamedProperty, Property, Record, RecordData, RecordKey,
    RecordKind, ScanConfig, Scanner, ScriptAttachment,
};

const PLUGIN: &str = "Addon.esp";

fn key(id: u32) -> RecordKey {
    RecordKey::new(id, PLUGIN)
}

fn object(name: &str, target: u32) -> NamedProperty {
    NamedProperty::new(name, Property::ObjectRef(key(target)))
}

fn objects(name: &str, targets: &[u32]) -> NamedProperty {
    NamedProperty::new(
        name,
        Property::ObjectRefList(targets.iter().map(|&id| key(id)).collect()),
    )
}

fn quest(id: u32, config: u32) -> Record {
    Record::new(key(id), RecordKind::Quest)
        .with_data(RecordData::Quest {
            start_game_enabled: true,
        })
        .with_script(ScriptAttachment::new(
            scripts::ADDON_PACK,
            vec![object("MyAddonConfig", config)],
        ))
}

fn config(id: u32, lists: &[u32]) -> Record {
    Record::new(key(id), RecordKind::MiscItem).with_script(ScriptAttachment::new(
        scripts::ADDON_PACK_CONFIGURATION,
        vec![objects("MyItems", lists)],
    ))
}

fn list(id: u32, items: &[u32]) -> Record {
    Record::new(key(id), RecordKind::FormList).with_data(RecordData::FormList {
        items: items.iter().map(|&i| key(i)).collect(),
    })
}

fn repop(id: u32, population: i64) -> Record {
    Record::new(key(id), RecordKind::MiscItem)
        .with_editor_id(format!("Addon_Repop{}", id))
        .with_script(ScriptAttachment::new(
            "SimSettlementsV2:MiscObjects:WorldRepopulationCell",
            vec![NamedProperty::new(
                "iPopulationSupported",
                Property::Int(population),
            )],
        ))
}

fn flag(id: u32) -> Record {
    Record::new(key(id), RecordKind::Armor).with_script(ScriptAttachment::new(
        "SimSettlementsV2:Armors:ThemeDefinition_Flags",
        vec![object("FlagWaving", 90)],
    ))
}

/// Two quests, two configs sharing list 20, list 21 repeating an item of 20
fn store() -> MemoryStoreBuilder {
    MemoryStore::builder(PLUGIN)
        .record(quest(1, 10))
        .record(quest(2, 11))
        .record(quest(3, 10))
        .record(config(10, &[20]))
        .record(config(11, &[20, 21]))
        .record(list(20, &[30, 31]))
        .record(list(21, &[31, 32]))
        .record(repop(30, 5))
        .record(repop(31, 8))
        .record(flag(32))
}

#[test]
fn test_scan_is_deterministic() {
    let store = store().build().unwrap();
    let config = ScanConfig::default();

    let first = Scanner::new(&store, &config).run().to_json().unwrap();
    let second = Scanner::new(&store, &config).run().to_json().unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_items_decoded_once_in_discovery_order() {
    let store = store().build().unwrap();
    let config = ScanConfig::default();
    let out = Scanner::new(&store, &config).run();

    let cells: Vec<_> = out
        .world_repop_cells
        .iter()
        .map(|c| (c.base.editor_id.as_str(), c.max_population))
        .collect();
    assert_eq!(cells, vec![("Addon_Repop30", 5), ("Addon_Repop31", 8)]);
    assert_eq!(out.dynamic_flags.len(), 1);
    assert_eq!(out.dynamic_flags[0].flag_waving, "00005A:Addon.esp");
    assert_eq!(out.total_items, 3);
}

#[test]
fn test_territory_traits_list_excluded() {
    let store = store()
        .record(config(12, &[22]))
        .record(quest(4, 12))
        .record(list(22, &[40, 41, 42]))
        .record(
            Record::new(key(40), RecordKind::Keyword).with_editor_id(TERRITORY_TRAITS_TAG),
        )
        .record(repop(41, 3))
        .record(flag(42))
        .build()
        .unwrap();
    let config = ScanConfig::default();
    let out = Scanner::new(&store, &config).run();

    assert!(
        out.world_repop_cells
            .iter()
            .all(|c| c.base.editor_id != "Addon_Repop41")
    );
    assert_eq!(out.total_items, 3);
}

#[test]
fn test_json_uses_export_field_names() {
    let store = store().build().unwrap();
    let config = ScanConfig::default();
    let json = Scanner::new(&store, &config).run().to_json().unwrap();

    assert!(json.contains("\"worldRepopCells\""));
    assert!(json.contains("\"recordKey\": \"00001E:Addon.esp\""));
    assert!(json.contains("\"totalItems\": 3"));
}
