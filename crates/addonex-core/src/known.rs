//! Well-known record keys, script names and editor-id prefixes.
//!
//! Everything the decoders match against by identity lives here, grouped by
//! what it identifies.

use crate::record::{Record, RecordKey};

/// A record key fixed at compile time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KnownKey {
    pub id: u32,
    pub file: &'static str,
}

impl KnownKey {
    pub const fn new(id: u32, file: &'static str) -> Self {
        Self { id, file }
    }

    pub fn key(&self) -> RecordKey {
        RecordKey::new(self.id, self.file)
    }

    pub fn is(&self, key: &RecordKey) -> bool {
        key.id == self.id && key.is_from(self.file)
    }

    /// Whether the record carries this keyword
    pub fn tags(&self, record: &Record) -> bool {
        record.keywords.iter().any(|k| self.is(k))
    }
}

const BASE_GAME: &str = "Fallout4.esm";
const FRAMEWORK: &str = "SS2.esm";
const CHAPTER_2: &str = "SS2_XPAC_Chapter2.esm";

/// Script names as attached in the editor; compared case-insensitively
pub mod scripts {
    pub const ADDON_PACK: &str = "SimSettlementsV2:quests:AddonPack";
    pub const ADDON_PACK_CONFIGURATION: &str =
        "SimSettlementsV2:MiscObjects:AddonPackConfiguration";
    pub const USAGE_REQUIREMENTS: &str = "SimSettlementsV2:MiscObjects:UsageRequirements";
    pub const LEADER_TRAIT: &str = "SimSettlementsV2:MiscObjects:LeaderTrait";
    pub const ALLOW_ANIMATIONS_DUMMY: &str =
        "SimSettlementsV2:ObjectReferences:AllowAnimationsDummyScript";
    pub const BUILDING_LEVEL_PLAN: &str = "SimSettlementsV2:Weapons:BuildingLevelPlan";
    pub const SOLDIER_RANK: &str = "SimSettlementsV2:Armors:SoldierRank";
}

/// Keywords matched by identity
pub mod keywords {
    use super::{BASE_GAME, FRAMEWORK, KnownKey};

    /// Misc items that are pet names; no script attached
    pub const PET_NAME: KnownKey = KnownKey::new(0x01F43E, FRAMEWORK);
    pub const TERRAFORMER: KnownKey = KnownKey::new(0x0193F8, FRAMEWORK);
    pub const WORKSHOP_CAN_BE_POWERED: KnownKey = KnownKey::new(0x03037E, BASE_GAME);

    pub const FURNITURE_SLEEP: KnownKey = KnownKey::new(0x021B18, BASE_GAME);
    pub const FURNITURE_SEAT: [KnownKey; 2] = [
        KnownKey::new(0x030BB2, BASE_GAME),
        KnownKey::new(0x1338F7, BASE_GAME),
    ];
    pub const FURNITURE_DESK: [KnownKey; 2] = [
        KnownKey::new(0x014576, FRAMEWORK),
        KnownKey::new(0x020320, FRAMEWORK),
    ];

    pub const HQ_ROOM_CONSTRUCTION: KnownKey = KnownKey::new(0x04B2F3, FRAMEWORK);
    pub const HQ_ROOM_UPGRADE: KnownKey = KnownKey::new(0x04B2F4, FRAMEWORK);
}

/// Editor-id prefixes; the value is whatever follows the prefix
pub mod prefixes {
    pub const PLOT_TYPE: &str = "SS2_PlotType_";
    pub const PLOT_TYPE_SUBCLASS: &str = "SS2_PlotTypeSubClass_";
    pub const PLOT_SIZE: &str = "SS2_PlotSize_";
    pub const THEME_TAG: &str = "SS2_ThemeTag_";
    pub const ROOM_SHAPE: &str = "SS2C2_Tag_RoomShape_";
}

/// The seven primary attributes, in output order
pub const SPECIAL_ATTRIBUTES: [KnownKey; 7] = [
    KnownKey::new(0x0002C2, BASE_GAME), // strength
    KnownKey::new(0x0002C3, BASE_GAME), // perception
    KnownKey::new(0x0002C4, BASE_GAME), // endurance
    KnownKey::new(0x0002C5, BASE_GAME), // charisma
    KnownKey::new(0x0002C6, BASE_GAME), // intelligence
    KnownKey::new(0x0002C7, BASE_GAME), // agility
    KnownKey::new(0x0002C8, BASE_GAME), // luck
];

/// Editor id of the classifying tag that marks a territory-traits list
pub const TERRITORY_TRAITS_TAG: &str = "SS2_FLID_TerritoryTraits";

/// HQ action lists the chapter-2 expansion never registers in an addon config
pub const HQ_ACTION_LISTS: [KnownKey; 6] = [
    KnownKey::new(0x027417, CHAPTER_2), // default actions
    KnownKey::new(0x01F16F, CHAPTER_2), // basement
    KnownKey::new(0x0327DD, CHAPTER_2), // exterior
    KnownKey::new(0x02649A, CHAPTER_2), // mid floor
    KnownKey::new(0x027416, CHAPTER_2), // tutorial
    KnownKey::new(0x034DCB, CHAPTER_2), // post-tutorial registration
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::RecordKind;

    #[test]
    fn test_known_key_matches_case_insensitively() {
        let key: RecordKey = "01F43E:ss2.esm".parse().unwrap();
        assert!(keywords::PET_NAME.is(&key));
        assert!(!keywords::TERRAFORMER.is(&key));
    }

    #[test]
    fn test_tags() {
        let record = Record::new(RecordKey::new(1, "A.esp"), RecordKind::MiscItem)
            .with_keyword(keywords::HQ_ROOM_UPGRADE.key());
        assert!(keywords::HQ_ROOM_UPGRADE.tags(&record));
        assert!(!keywords::HQ_ROOM_CONSTRUCTION.tags(&record));
    }

    #[test]
    fn test_hq_lists_render() {
        assert_eq!(HQ_ACTION_LISTS[0].key().to_string(), "027417:SS2_XPAC_Chapter2.esm");
    }
}
