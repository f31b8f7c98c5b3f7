use crate::dispatch::DecoderKey;
use crate::output::{BaseItem, DynamicFlag, Requirements};
use crate::record::{PropertyBag, Record, RecordKind, ScriptAttachment};
use crate::resolve::resolve_requirements;
use crate::store::{RecordGraph, RecordStore};

fn variant(script: Option<&ScriptAttachment>, name: &str) -> String {
    script
        .and_then(|s| s.object(name))
        .map(ToString::to_string)
        .unwrap_or_default()
}

/// Flag theme armor. Every banner variant is optional; a theme without its
/// script still exports with all variants empty.
pub fn decode_dynamic_flag(armor: &Record, requirements: Requirements) -> Option<DynamicFlag> {
    let script = armor.find_script(DecoderKey::DynamicFlag.script_name());

    Some(DynamicFlag {
        base: BaseItem::from_record(armor),
        requirements,
        flag_waving: variant(script, "FlagWaving"),
        flag_down: variant(script, "FlagDown"),
        flag_wall: variant(script, "FlagWall"),
        flag_half_circle_flag01: variant(script, "FlagHalfCircleFlag01"),
        flag_half_circle_flag02: variant(script, "FlagHalfCircleFlag02"),
        flag_banner_town_static: variant(script, "FlagBannerTownStatic"),
        flag_banner_town_torn: variant(script, "FlagBannerTownTorn"),
        flag_banner_town_torn_waving: variant(script, "FlagBannerTownTornWaving"),
    })
}

/// Misc item that unlocks a flag theme; the theme is what gets exported
pub fn decode_unlockable_flag<S: RecordStore + ?Sized>(
    graph: RecordGraph<'_, S>,
    item: &Record,
) -> Option<DynamicFlag> {
    let script = item.find_script(DecoderKey::UnlockableFlag.script_name())?;
    let armor = graph.resolve_property(script, "FlagThemeDefinition", RecordKind::Armor)?;
    decode_dynamic_flag(armor, resolve_requirements(graph, script))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::fixtures::*;
    use crate::store::MemoryStore;

    const THEME: &str = "SimSettlementsV2:Armors:ThemeDefinition_Flags";

    fn theme(id: u32) -> Record {
        Record::new(key(id), RecordKind::Armor)
            .with_editor_id("Addon_FlagTheme")
            .with_script(script(
                THEME,
                vec![object("FlagWaving", key(2)), object("FlagWall", key(3))],
            ))
    }

    #[test]
    fn test_variants_are_independent() {
        let flag = decode_dynamic_flag(&theme(1), Requirements::default()).unwrap();
        assert_eq!(flag.flag_waving, "000002:Addon.esp");
        assert_eq!(flag.flag_wall, "000003:Addon.esp");
        assert_eq!(flag.flag_down, "");
        assert_eq!(flag.flag_banner_town_torn_waving, "");
    }

    #[test]
    fn test_theme_without_script_exports_empty() {
        let armor = Record::new(key(1), RecordKind::Armor).with_name("Plain");
        let flag = decode_dynamic_flag(&armor, Requirements::default()).unwrap();
        assert_eq!(flag.base.name, "Plain");
        assert_eq!(flag, DynamicFlag {
            base: flag.base.clone(),
            ..Default::default()
        });
    }

    #[test]
    fn test_unlockable_flag() {
        let store = MemoryStore::builder(PLUGIN)
            .record(theme(1))
            .record(misc(10, "Addon_FlagUnlock").with_script(script(
                "SimSettlementsV2:MiscObjects:UnlockableFlag",
                vec![object("FlagThemeDefinition", key(1))],
            )))
            .record(misc(11, "Addon_BadUnlock").with_script(script(
                "SimSettlementsV2:MiscObjects:UnlockableFlag",
                vec![object("FlagThemeDefinition", key(10))],
            )))
            .build()
            .unwrap();
        let graph = RecordGraph::new(&store);

        let flag = decode_unlockable_flag(graph, graph.resolve(&key(10)).unwrap()).unwrap();
        assert_eq!(flag.base.editor_id, "Addon_FlagTheme");
        assert!(!flag.requirements.has_requirements);

        assert!(decode_unlockable_flag(graph, graph.resolve(&key(11)).unwrap()).is_none());
    }
}
