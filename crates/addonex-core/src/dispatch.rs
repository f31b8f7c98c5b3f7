//! Item routing: record kind picks a family, the first recognized script
//! picks the decoder.

use strum::{Display, IntoStaticStr};
use tracing::info;

use crate::record::{Record, RecordKind, normalize_script_name};

/// Record kinds that carry addon items
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, IntoStaticStr)]
#[strum(serialize_all = "kebab-case")]
pub enum ItemFamily {
    MiscItem,
    Weapon,
    Armor,
    Book,
}

impl ItemFamily {
    pub fn from_kind(kind: RecordKind) -> Option<Self> {
        match kind {
            RecordKind::MiscItem => Some(Self::MiscItem),
            RecordKind::Weapon => Some(Self::Weapon),
            RecordKind::Armor => Some(Self::Armor),
            RecordKind::Book => Some(Self::Book),
            _ => None,
        }
    }
}

/// Every decoder the scanner can route an item to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, IntoStaticStr)]
pub enum DecoderKey {
    UnlockableBuildingPlan,
    Foundation,
    PowerPole,
    FurnitureStoreItem,
    PetStoreCreature,
    UnlockableCharacter,
    UnlockableFlag,
    CityPlan,
    WorldRepopulationCell,
    HqRoomConfig,
    HqRoomUpgrade,
    BuildingPlan,
    BuildingSkin,
    LeaderCard,
    DynamicFlag,
    UnitType,
    BeerRecipe,
}

impl DecoderKey {
    /// Script name the decoder reads its data from
    pub fn script_name(&self) -> &'static str {
        match self {
            Self::UnlockableBuildingPlan => "SimSettlementsV2:MiscObjects:UnlockableBuildingPlan",
            Self::Foundation => "SimSettlementsV2:MiscObjects:Foundation",
            Self::PowerPole => "SimSettlementsV2:MiscObjects:PowerPole",
            Self::FurnitureStoreItem => "SimSettlementsV2:MiscObjects:FurnitureStoreItem",
            Self::PetStoreCreature => "SimSettlementsV2:MiscObjects:PetStoreCreatureItem",
            Self::UnlockableCharacter => "SimSettlementsV2:MiscObjects:UnlockableCharacter",
            Self::UnlockableFlag => "SimSettlementsV2:MiscObjects:UnlockableFlag",
            Self::CityPlan => "SimSettlementsV2:Weapons:CityPlan",
            Self::WorldRepopulationCell => "SimSettlementsV2:MiscObjects:WorldRepopulationCell",
            Self::HqRoomConfig => {
                "SimSettlementsV2:HQ:Library:MiscObjects:RequirementTypes:ActionTypes:HQRoomConfig"
            }
            Self::HqRoomUpgrade => "SimSettlementsV2:HQ:BaseActionTypes:HQRoomUpgrade",
            Self::BuildingPlan => "SimSettlementsV2:Weapons:BuildingPlan",
            Self::BuildingSkin => "SimSettlementsV2:Weapons:BuildingSkin",
            Self::LeaderCard => "SimSettlementsV2:Weapons:LeaderCard",
            Self::DynamicFlag => "SimSettlementsV2:Armors:ThemeDefinition_Flags",
            Self::UnitType => "SimSettlementsV2:Armors:NPCUnitType",
            Self::BeerRecipe => "SimSettlementsV2:Books:BeerRecipe",
        }
    }
}

/// Decoders reachable from each family, in registry order
const DECODERS: &[(ItemFamily, DecoderKey)] = &[
    (ItemFamily::MiscItem, DecoderKey::UnlockableBuildingPlan),
    (ItemFamily::MiscItem, DecoderKey::Foundation),
    (ItemFamily::MiscItem, DecoderKey::PowerPole),
    (ItemFamily::MiscItem, DecoderKey::FurnitureStoreItem),
    (ItemFamily::MiscItem, DecoderKey::PetStoreCreature),
    (ItemFamily::MiscItem, DecoderKey::UnlockableCharacter),
    (ItemFamily::MiscItem, DecoderKey::UnlockableFlag),
    (ItemFamily::MiscItem, DecoderKey::CityPlan),
    (ItemFamily::MiscItem, DecoderKey::WorldRepopulationCell),
    (ItemFamily::MiscItem, DecoderKey::HqRoomConfig),
    (ItemFamily::MiscItem, DecoderKey::HqRoomUpgrade),
    (ItemFamily::Weapon, DecoderKey::BuildingPlan),
    (ItemFamily::Weapon, DecoderKey::BuildingSkin),
    (ItemFamily::Weapon, DecoderKey::LeaderCard),
    (ItemFamily::Armor, DecoderKey::DynamicFlag),
    (ItemFamily::Armor, DecoderKey::UnitType),
    (ItemFamily::Book, DecoderKey::BeerRecipe),
];

/// Scripts that are recognized but carry nothing to export
const IGNORED: &[(ItemFamily, &str)] = &[
    (ItemFamily::MiscItem, "simsettlementsv2:miscobjects:settlerlocationdiscovery"),
    (ItemFamily::MiscItem, "simsettlementsv2:miscobjects:npcpreferences"),
    (ItemFamily::MiscItem, "simsettlementsv2:miscobjects:unlockable"),
    (ItemFamily::MiscItem, "simsettlementsv2:miscobjects:unlockablebuildingclass"),
    (ItemFamily::MiscItem, "simsettlementsv2:miscobjects:unlockableterritory"),
    (ItemFamily::MiscItem, "simsettlementsv2:miscobjects:territorytrait"),
    (ItemFamily::MiscItem, "simsettlementsv2:miscobjects:ideologychoice"),
    (ItemFamily::MiscItem, "simsettlementsv2:miscobjects:worldspaceconfig"),
    (ItemFamily::MiscItem, "simsettlementsv2:miscobjects:factionname"),
    (ItemFamily::MiscItem, "simsettlementsv2:objectreferences:petstorecreatureitemref"),
    (ItemFamily::MiscItem, "simsettlementsv2:hq:library:miscobjects:hqdepartmentplan"),
    (ItemFamily::MiscItem, "simsettlementsv2:hq:gnn:hqresearchfactionuniforms"),
    (ItemFamily::MiscItem, "simsettlementsv2:miscobjects:mqbattleally"),
    (ItemFamily::MiscItem, "simsettlementsv2:miscobjects:advisorreactions"),
    (ItemFamily::MiscItem, "simsettlementsv2:miscobjects:advisordefinition"),
    (ItemFamily::MiscItem, "simsettlementsv2:hq:baseactiontypes:departmentmanagedhqresearch"),
    (ItemFamily::MiscItem, "simsettlementsv2:hq:baseactiontypes:hqstafftraining"),
    (ItemFamily::MiscItem, "simsettlementsv2:hq:baseactiontypes:hqpolicy"),
    (ItemFamily::MiscItem, "simsettlementsv2:hq:baseactiontypes:hqscoutlocation"),
    (ItemFamily::MiscItem, "vfx:miscobjects:universalunlockable"),
    (ItemFamily::MiscItem, "ss2jampads2:miscobjects:universalunlockable"),
    (ItemFamily::MiscItem, "workshopframework:library:objectrefs:preventdroppingonground"),
    (ItemFamily::Armor, "simsettlementsv2:armors:themedefinition_holiday"),
    (ItemFamily::Armor, "simsettlementsv2:armors:npcloadout"),
    (ItemFamily::Armor, "simsettlementsv2:armors:soldierrank"),
    (ItemFamily::Armor, "simsettlementsv2:armors:uniform"),
    (ItemFamily::Armor, "simsettlementsv2:armors:factiondefinition"),
    (ItemFamily::Book, "simsettlementsv2:books:beerrecipeobjectref"),
    (ItemFamily::Book, "simsettlementsv2:books:newsarticle"),
    (ItemFamily::Book, "simsettlementsv2:books:magazineissue"),
    (ItemFamily::Book, "simsettlementsv2:objectreferences:newspaper"),
    (ItemFamily::Book, "simsettlementsv2:objectreferences:magazine"),
    (ItemFamily::Book, "simsettlementsv2:books:inboxitem"),
    (ItemFamily::Book, "magstagescript"),
];

/// What the registry knows about one script name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptMatch {
    Decoder(DecoderKey),
    Ignored,
    Unknown,
}

/// Look a script name up in one family's registry
pub fn lookup(family: ItemFamily, script_name: &str) -> ScriptMatch {
    let name = normalize_script_name(script_name);

    if let Some(&(_, key)) = DECODERS
        .iter()
        .find(|(f, key)| *f == family && normalize_script_name(key.script_name()) == name)
    {
        return ScriptMatch::Decoder(key);
    }

    if IGNORED.iter().any(|(f, ignored)| *f == family && *ignored == name) {
        return ScriptMatch::Ignored;
    }

    ScriptMatch::Unknown
}

/// Pick the decoder for an item: the first attached script the family's
/// registry recognizes.
///
/// Unknown scripts are skipped, and logged when `log_unknown` is set.
pub fn select_decoder(
    family: ItemFamily,
    record: &Record,
    log_unknown: bool,
) -> Option<DecoderKey> {
    for script in &record.scripts {
        match lookup(family, &script.name) {
            ScriptMatch::Decoder(key) => return Some(key),
            ScriptMatch::Ignored => {}
            ScriptMatch::Unknown => {
                if log_unknown {
                    info!(
                        "Unknown {} script on {}: {}",
                        family,
                        record.editor_id(),
                        script.name
                    );
                }
            }
        }
    }
    None
}
